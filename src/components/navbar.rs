use crate::app::state::ShellState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

pub const HEIGHT: u16 = 3;
const SEARCH_WIDTH: u16 = 44;

fn inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Where the search field is drawn inside the navbar.
#[must_use]
pub fn search_area(navbar: Rect) -> Rect {
    let inner = inner(navbar);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(SEARCH_WIDTH.min(inner.width / 2))])
        .split(inner)[1]
}

pub struct Navbar<'a> {
    pub shell: &'a ShellState,
    pub theme: &'a Theme,
}

impl Widget for Navbar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.shell.search.as_ref().is_some_and(|f| f.is_focused());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if focused {
                self.theme.border_focus
            } else {
                self.theme.border
            });
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let route = self.shell.route;
        let title = Line::from(vec![
            Span::styled(format!(" {} ", route.title()), self.theme.header_active),
            Span::styled(route.path(), self.theme.dimmed),
        ]);
        buf.set_line(inner.x, inner.y, &title, inner.width);

        if let Some(field) = &self.shell.search {
            let search = search_area(area);
            if search.width > 4 {
                let icon_style = if focused {
                    self.theme.border_focus
                } else {
                    self.theme.dimmed
                };
                buf.set_string(search.x, search.y, "⌕ ", icon_style);
                let input = Rect {
                    x: search.x + 2,
                    width: search.width - 2,
                    ..search
                };
                Widget::render(&field.input, input, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::hotkeys::HotkeyDispatcher;
    use crate::app::state::input::SEARCH_PLACEHOLDER;
    use crate::config::AppConfig;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.left()..buf.area.right())
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_search_area_sits_on_the_right() {
        let navbar = Rect::new(10, 0, 100, HEIGHT);
        let search = search_area(navbar);
        assert_eq!(search.y, 1);
        assert_eq!(search.width, SEARCH_WIDTH);
        assert_eq!(search.x + search.width, navbar.x + navbar.width - 1);
    }

    #[test]
    fn test_renders_title_and_placeholder() {
        let hotkeys = HotkeyDispatcher::new();
        let shell = ShellState::mount(&hotkeys, &AppConfig::default());
        let area = Rect::new(0, 0, 100, HEIGHT);
        let mut buf = Buffer::empty(area);
        Navbar {
            shell: &shell,
            theme: &Theme::default(),
        }
        .render(area, &mut buf);
        let line = row_text(&buf, 1);
        assert!(line.contains("Dashboard"));
        assert!(line.contains(SEARCH_PLACEHOLDER));
    }
}
