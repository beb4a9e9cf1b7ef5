use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

const OPENAI_KEY_MASK: &str = "sk-\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}";
const GITHUB_TOKEN_MASK: &str = "ghp_\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}";

/// Body of the API credentials dialog. The keys are never shown in clear.
pub struct ApiCredentialsBody<'a> {
    pub theme: &'a Theme,
}

impl Widget for ApiCredentialsBody<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label = self.theme.header_item;
        let field = self.theme.list_item;

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(" OpenAI API Key", label)),
            Line::from(Span::styled(format!("   {OPENAI_KEY_MASK}"), field)),
            Line::from(""),
            Line::from(Span::styled(" GitHub Token", label)),
            Line::from(Span::styled(format!("   {GITHUB_TOKEN_MASK}"), field)),
            Line::from(""),
            Line::from(Span::styled(
                " Keys are stored encrypted and never leave this machine.",
                self.theme.dimmed,
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(" Enter ", self.theme.footer_segment_key),
                Span::styled("cancel  ", field),
                Span::styled("Esc ", self.theme.footer_segment_key),
                Span::styled("close", field),
            ]),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
