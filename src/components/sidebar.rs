use crate::domain::Route;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

pub const EXPANDED_WIDTH: u16 = 24;
pub const COLLAPSED_WIDTH: u16 = 7;

// Brand line and a spacer sit above the first entry.
const ENTRY_OFFSET: u16 = 2;

#[must_use]
pub fn width(collapsed: bool) -> u16 {
    if collapsed {
        COLLAPSED_WIDTH
    } else {
        EXPANDED_WIDTH
    }
}

fn sidebar_block(theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border)
}

/// The route whose entry is drawn at screen row `row`.
#[must_use]
pub fn entry_at(area: Rect, column: u16, row: u16) -> Option<Route> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    if column < inner.x || column >= inner.x + inner.width {
        return None;
    }
    let first = inner.y + ENTRY_OFFSET;
    if row < first || row >= inner.y + inner.height {
        return None;
    }
    Route::ALL.get(usize::from(row - first)).copied()
}

pub struct Sidebar<'a> {
    pub active: Route,
    pub collapsed: bool,
    pub theme: &'a Theme,
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = sidebar_block(self.theme);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let brand = if self.collapsed { " CE " } else { " CODE EXPLORER " };
        buf.set_line(
            inner.x,
            inner.y,
            &Line::from(Span::styled(brand, self.theme.header_logo)),
            inner.width,
        );

        for (i, route) in Route::ALL.into_iter().enumerate() {
            let y = inner.y + ENTRY_OFFSET + i as u16;
            if y >= inner.y + inner.height {
                break;
            }
            let style = if route == self.active {
                self.theme.sidebar_active
            } else {
                self.theme.sidebar_item
            };
            let label = if self.collapsed {
                format!(" {} ", route.glyph())
            } else {
                format!(" {} {:<12} {} ", route.glyph(), route.title(), i + 1)
            };
            buf.set_string(inner.x, y, " ".repeat(inner.width as usize), style);
            buf.set_line(inner.x, y, &Line::from(Span::styled(label, style)), inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_at_maps_rows_to_routes() {
        let area = Rect::new(0, 0, EXPANDED_WIDTH, 20);
        // Border, brand, spacer.
        assert_eq!(entry_at(area, 3, 0), None);
        assert_eq!(entry_at(area, 3, 2), None);
        assert_eq!(entry_at(area, 3, 3), Some(Route::Dashboard));
        assert_eq!(entry_at(area, 3, 8), Some(Route::Settings));
        assert_eq!(entry_at(area, 3, 9), None);
        // The right border is not an entry.
        assert_eq!(entry_at(area, EXPANDED_WIDTH - 1, 3), None);
    }

    #[test]
    fn test_active_route_is_highlighted() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, EXPANDED_WIDTH, 12);
        let mut buf = Buffer::empty(area);
        Sidebar {
            active: Route::Map,
            collapsed: false,
            theme: &theme,
        }
        .render(area, &mut buf);
        let row = 3 + Route::Map.index() as u16;
        assert_eq!(buf[(1, row)].bg, theme.sidebar_active.bg.unwrap());
        assert_ne!(buf[(1, 3)].bg, theme.sidebar_active.bg.unwrap());
    }
}
