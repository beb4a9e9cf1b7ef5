use super::form::{hint_line, render_form, InputBox};
use crate::app::state::LandingState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

pub struct ResetPasswordBody<'a> {
    pub theme: &'a Theme,
    pub landing: &'a LandingState,
}

impl Widget for ResetPasswordBody<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let intro = vec![
            Line::from(""),
            Line::from(Span::styled(
                " Enter your email address and we'll send you a link to reset your password.",
                self.theme.dimmed,
            )),
            Line::from(""),
        ];
        render_form(
            area,
            buf,
            intro,
            InputBox {
                label: "Email",
                input: &self.landing.email,
                theme: self.theme,
            },
            self.landing.email_error,
            hint_line(&[("Enter", "send reset link"), ("Esc", "close")], self.theme),
        );
    }
}
