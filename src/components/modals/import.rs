use super::form::{hint_line, render_form, InputBox};
use crate::app::state::ExplorerState;
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

/// Body of the "Import Repository" dialog.
pub struct ImportBody<'a> {
    pub theme: &'a Theme,
    pub explorer: &'a ExplorerState,
}

impl Widget for ImportBody<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let error = self.explorer.import_error.as_ref().map(ToString::to_string);
        render_form(
            area,
            buf,
            vec![Line::from("")],
            InputBox {
                label: "GitHub URL",
                input: &self.explorer.import_url,
                theme: self.theme,
            },
            error.as_deref(),
            hint_line(&[("Enter", "import"), ("Esc", "cancel")], self.theme),
        );
    }
}
