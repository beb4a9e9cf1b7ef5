use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Cell, Row, Table, Widget},
};

const SECTIONS: [(&str, &[(&str, &str)]); 6] = [
    (
        "Global",
        &[
            ("Ctrl/Cmd+K", "Toggle command palette"),
            ("/", "Focus search"),
            ("Esc", "Close the open overlay"),
        ],
    ),
    (
        "Navigation",
        &[
            ("1-6", "Go to view"),
            ("j / \u{2193}", "Scroll down"),
            ("k / \u{2191}", "Scroll up"),
            ("PgDn / PgUp", "Scroll a page"),
            ("b", "Collapse sidebar"),
        ],
    ),
    (
        "Explorer",
        &[
            ("j / k", "Select file"),
            ("i", "Import repository"),
            ("e", "Edit documentation"),
            ("g", "Generate documentation"),
        ],
    ),
    (
        "Pull Requests",
        &[("j / k", "Select pull request"), ("r", "Bulk review")],
    ),
    (
        "Settings",
        &[
            ("j / k", "Select row"),
            ("Space / Enter", "Toggle or open"),
            ("h / l", "Adjust threshold"),
            ("a", "API credentials"),
        ],
    ),
    (
        "Session",
        &[("?", "Toggle help"), ("L", "Sign out"), ("q", "Quit")],
    ),
];

/// Body of the help dialog.
pub struct HelpBody<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpBody<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key_style = self.theme.footer_segment_key;
        let desc_style = self.theme.list_item;
        let category_style = self.theme.header_item;

        let mut rows = Vec::new();
        for (i, (category, bindings)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            }
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*category, category_style)),
                Cell::from(""),
            ]));
            for (key, desc) in *bindings {
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(format!(" {key}"), key_style)),
                    Cell::from(Span::styled(*desc, desc_style)),
                ]));
            }
        }

        Table::new(rows, [Constraint::Length(16), Constraint::Min(10)])
            .column_spacing(2)
            .render(area, buf);
    }
}
