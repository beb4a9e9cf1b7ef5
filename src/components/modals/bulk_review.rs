use super::form::hint_line;
use crate::app::state::{pulls::reviewable, PullsState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

/// Body of the "Bulk Actions" dialog: tick pull requests, then post.
pub struct BulkReviewBody<'a> {
    pub theme: &'a Theme,
    pub pulls: &'a PullsState,
}

impl Widget for BulkReviewBody<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                " Post AI-generated comments and suggestions to GitHub for selected pull requests.",
                self.theme.dimmed,
            )),
            Line::from(""),
        ];
        for (i, pr) in reviewable().enumerate() {
            let style = if i == self.pulls.bulk_cursor {
                self.theme.list_selected
            } else {
                self.theme.list_item
            };
            let tick = if self.pulls.is_marked(pr.number) {
                "[x]"
            } else {
                "[ ]"
            };
            lines.push(Line::from(Span::styled(
                format!(" {tick} PR #{}: {}", pr.number, pr.title),
                style,
            )));
        }
        lines.push(Line::from(""));
        lines.push(hint_line(
            &[("Space", "tick"), ("Enter", "post to GitHub"), ("Esc", "cancel")],
            self.theme,
        ));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
