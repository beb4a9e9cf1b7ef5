use crate::app::command_palette::get_commands;
use crate::app::state::CommandPaletteState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Widget},
};

use super::helpers::{draw_drop_shadow, top_anchored_rect};

const QUERY_PLACEHOLDER: &str = "Type a command or search...";

// Borders, query line and separator.
const CHROME_HEIGHT: u16 = 4;

/// Where the palette box sits for a given terminal size.
#[must_use]
pub fn palette_area(terminal_area: Rect) -> Rect {
    let height = CHROME_HEIGHT + get_commands().len() as u16;
    top_anchored_rect(60, height, terminal_area)
}

/// The result row under screen row `row`, if any.
#[must_use]
pub fn row_at(palette: Rect, row: u16) -> Option<usize> {
    let first = palette.y + CHROME_HEIGHT - 1;
    let last = palette.y + palette.height.saturating_sub(1);
    (row >= first && row < last).then(|| usize::from(row - first))
}

pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a CommandPaletteState,
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = palette_area(area);
        if modal_area.width == 0 || modal_area.height < CHROME_HEIGHT {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" COMMAND PALETTE ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::styled(" Esc ", self.theme.footer_segment_key),
                Span::styled("close ", self.theme.dimmed),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Query input
                Constraint::Length(1), // Separator
                Constraint::Min(0),    // Results
            ])
            .split(inner_area);

        let query_line = if self.state.query.is_empty() {
            Line::from(vec![
                Span::styled(" > ", self.theme.footer_segment_key),
                Span::styled(QUERY_PLACEHOLDER, self.theme.dimmed),
            ])
        } else {
            Line::from(vec![
                Span::styled(" > ", self.theme.footer_segment_key),
                Span::styled(&self.state.query, self.theme.footer_segment_val),
                Span::styled(
                    "_",
                    self.theme.footer_segment_val.add_modifier(Modifier::SLOW_BLINK),
                ),
            ])
        };
        buf.set_line(layout[0].x, layout[0].y, &query_line, layout[0].width);

        let separator = "─".repeat(layout[1].width as usize);
        buf.set_string(layout[1].x, layout[1].y, separator, self.theme.border_focus);

        if self.state.is_empty() {
            let no_results = Line::from(Span::styled(
                "  No results found.",
                self.theme.list_item.add_modifier(Modifier::DIM),
            ));
            buf.set_line(layout[2].x, layout[2].y, &no_results, layout[2].width);
            return;
        }

        let commands = get_commands();
        let items: Vec<ListItem> = self
            .state
            .matches
            .iter()
            .enumerate()
            .map(|(i, &cmd_idx)| {
                let cmd = &commands[cmd_idx];
                let selected = i == self.state.selected_index;
                let style = if selected {
                    self.theme.list_selected
                } else {
                    self.theme.list_item
                };
                ListItem::new(Line::from(vec![
                    Span::styled(if selected { "> " } else { "  " }, style),
                    Span::styled(format!("{:<3}", cmd.icon), style),
                    Span::styled(format!("{:<16}", cmd.label), style),
                    Span::styled(cmd.target.path(), self.theme.dimmed),
                ]))
            })
            .collect();

        List::new(items).render(layout[2], buf);
    }
}
