//! Pieces shared by the dialogs that take typed input.

use crate::app::state::AppTextArea;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Label row plus a bordered one-line box.
pub const INPUT_BOX_HEIGHT: u16 = 4;

pub struct InputBox<'a> {
    pub label: &'a str,
    pub input: &'a AppTextArea,
    pub theme: &'a Theme,
}

impl Widget for InputBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < INPUT_BOX_HEIGHT || area.width < 3 {
            return;
        }
        buf.set_line(
            area.x,
            area.y,
            &Line::from(Span::styled(format!(" {}", self.label), self.theme.header_item)),
            area.width,
        );
        let frame = Rect {
            y: area.y + 1,
            height: 3,
            ..area
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);
        let inner = block.inner(frame);
        block.render(frame, buf);
        Widget::render(self.input, inner, buf);
    }
}

/// `key action` pairs in footer style.
pub fn hint_line(items: &[(&str, &str)], theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (key, action) in items {
        spans.push(Span::styled(format!(" {key} "), theme.footer_segment_key));
        spans.push(Span::styled(format!("{action} "), theme.list_item));
    }
    Line::from(spans)
}

/// Lays out a form: intro text, one input box, an error row and the hints.
pub fn render_form(
    area: Rect,
    buf: &mut Buffer,
    intro: Vec<Line<'_>>,
    field: InputBox<'_>,
    error: Option<&str>,
    hints: Line<'_>,
) {
    let width = area.width.max(1);
    let intro_height: u16 = intro
        .iter()
        .map(|line| (line.width() as u16).div_ceil(width).max(1))
        .sum();
    let theme = field.theme;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(intro_height),
            Constraint::Length(INPUT_BOX_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    Paragraph::new(intro)
        .wrap(Wrap { trim: false })
        .render(rows[0], buf);
    field.render(rows[1], buf);
    if let Some(error) = error {
        buf.set_line(
            rows[2].x,
            rows[2].y,
            &Line::from(Span::styled(format!(" {error}"), theme.status_warn)),
            rows[2].width,
        );
    }
    buf.set_line(rows[4].x, rows[4].y, &hints, rows[4].width);
}
