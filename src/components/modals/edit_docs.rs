use super::form::{hint_line, render_form, InputBox};
use crate::app::state::ExplorerState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

/// Body of the "Edit Documentation" dialog for the selected file.
pub struct EditDocsBody<'a> {
    pub theme: &'a Theme,
    pub explorer: &'a ExplorerState,
}

impl Widget for EditDocsBody<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let intro = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(" File  ", self.theme.dimmed),
                Span::styled(self.explorer.selected_file(), self.theme.header_active),
            ]),
            Line::from(""),
        ];
        render_form(
            area,
            buf,
            intro,
            InputBox {
                label: "Documentation",
                input: &self.explorer.docs_input,
                theme: self.theme,
            },
            None,
            hint_line(&[("Enter", "save"), ("Esc", "cancel")], self.theme),
        );
    }
}
