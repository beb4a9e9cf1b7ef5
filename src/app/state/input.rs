use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

pub const SEARCH_PLACEHOLDER: &str = "Search... (Press / to focus)";

#[derive(Default)]
pub struct AppTextArea(pub TextArea<'static>);

impl std::fmt::Debug for AppTextArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppTextArea")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl Deref for AppTextArea {
    type Target = TextArea<'static>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AppTextArea {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AppTextArea {
    /// A single-line field as used inside dialogs. The cursor stays visible.
    #[must_use]
    pub fn with_placeholder(placeholder: &str) -> Self {
        let mut input = Self::default();
        input.set_placeholder_text(placeholder);
        input.set_cursor_line_style(Style::default());
        input
    }

    #[must_use]
    pub fn with_text(placeholder: &str, text: String) -> Self {
        let mut input = Self(TextArea::new(vec![text]));
        input.set_placeholder_text(placeholder);
        input.set_cursor_line_style(Style::default());
        input.move_cursor(CursorMove::End);
        input
    }

    /// The text with lines joined and outer whitespace trimmed.
    #[must_use]
    pub fn value(&self) -> String {
        self.lines().join(" ").trim().to_string()
    }
}

impl Widget for &AppTextArea {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

/// The navbar search field. Mounted with the shell when enabled in config.
#[derive(Debug)]
pub struct SearchField {
    pub input: AppTextArea,
    focused: bool,
}

impl Default for SearchField {
    fn default() -> Self {
        let mut input = AppTextArea::with_placeholder(SEARCH_PLACEHOLDER);
        input.set_cursor_style(Style::default());
        Self {
            input,
            focused: false,
        }
    }
}

impl SearchField {
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
        self.input
            .set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    }

    pub fn blur(&mut self) {
        self.focused = false;
        self.input.set_cursor_style(Style::default());
    }

    #[must_use]
    pub fn query(&self) -> String {
        self.input.value()
    }

    pub fn clear(&mut self) {
        let focused = self.focused;
        *self = Self::default();
        if focused {
            self.focus();
        }
    }
}
