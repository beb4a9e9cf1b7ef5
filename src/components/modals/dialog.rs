use crate::app::modal::Modal;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use super::helpers::draw_drop_shadow;

/// Draws `body` inside the frame of an open [`Modal`]. Draws nothing when closed.
pub struct Dialog<'a, W> {
    pub modal: &'a Modal,
    pub theme: &'a Theme,
    pub body: W,
}

impl<W: Widget> Widget for Dialog<'_, W> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.modal.is_open() {
            return;
        }
        let modal_area = self.modal.area(area);
        if modal_area.width < 2 || modal_area.height < 2 {
            return;
        }
        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);
        if let Some(title) = self.modal.title() {
            block = block.title(Line::from(vec![
                Span::raw(" "),
                Span::styled(format!(" {} ", title.to_uppercase()), self.theme.header_active),
                Span::raw(" "),
            ]));
        }

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);
        self.body.render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;
    use crate::app::hotkeys::HotkeyDispatcher;
    use crate::app::modal::{OverlayContext, ScrollLock};
    use ratatui::widgets::Paragraph;

    fn text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_closed_modal_renders_nothing() {
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        let modal = Modal::new(Some("Help"), Action::CloseHelp);
        Dialog {
            modal: &modal,
            theme: &Theme::default(),
            body: Paragraph::new("body text"),
        }
        .render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn test_open_modal_renders_title_and_body() {
        let hotkeys = HotkeyDispatcher::new();
        let lock = ScrollLock::new();
        let mut modal = Modal::new(Some("Help"), Action::CloseHelp);
        modal.sync(
            true,
            OverlayContext {
                hotkeys: &hotkeys,
                scroll_lock: &lock,
            },
        );

        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        Dialog {
            modal: &modal,
            theme: &Theme::default(),
            body: Paragraph::new("body text"),
        }
        .render(area, &mut buf);
        let rendered = text(&buf);
        assert!(rendered.contains("HELP"));
        assert!(rendered.contains("body text"));
    }
}
