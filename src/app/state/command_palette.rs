use crate::app::action::Action;
use crate::app::command_palette::{get_commands, search_commands, CommandDefinition};
use crate::app::modal::{Overlay, OverlayContext};

/// An open palette. A closed palette is `None` in the shell state.
#[derive(Debug)]
pub struct CommandPaletteState {
    pub query: String,
    pub matches: Vec<usize>, // Indices into the command table
    pub selected_index: usize,
    _overlay: Overlay,
}

impl CommandPaletteState {
    pub fn open(ctx: OverlayContext<'_>) -> Self {
        Self {
            query: String::new(),
            matches: search_commands(""),
            selected_index: 0,
            _overlay: Overlay::acquire(ctx, Action::ClosePalette),
        }
    }

    pub fn push(&mut self, c: char) {
        self.query.push(c);
        self.refresh();
    }

    pub fn pop(&mut self) {
        self.query.pop();
        self.refresh();
    }

    pub fn select_next(&mut self) {
        if !self.matches.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.matches.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.matches.is_empty() {
            if self.selected_index == 0 {
                self.selected_index = self.matches.len() - 1;
            } else {
                self.selected_index -= 1;
            }
        }
    }

    #[must_use]
    pub fn command_at(&self, row: usize) -> Option<&'static CommandDefinition> {
        self.matches.get(row).and_then(|&i| get_commands().get(i))
    }

    #[must_use]
    pub fn selected_command(&self) -> Option<&'static CommandDefinition> {
        self.command_at(self.selected_index)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    fn refresh(&mut self) {
        self.matches = search_commands(&self.query);
        self.selected_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::hotkeys::HotkeyDispatcher;
    use crate::app::modal::ScrollLock;
    use crate::domain::Route;

    #[test]
    fn test_selection_wraps_and_resets_on_typing() {
        let hotkeys = HotkeyDispatcher::new();
        let lock = ScrollLock::new();
        let mut cp = CommandPaletteState::open(OverlayContext {
            hotkeys: &hotkeys,
            scroll_lock: &lock,
        });
        cp.select_prev();
        assert_eq!(cp.selected_command().map(|c| c.target), Some(Route::Settings));
        cp.select_next();
        assert_eq!(cp.selected_index, 0);

        cp.select_next();
        cp.push('s');
        assert_eq!(cp.selected_index, 0);
        cp.pop();
        assert_eq!(cp.matches.len(), get_commands().len());
    }

    #[test]
    fn test_dropping_state_releases_overlay() {
        let hotkeys = HotkeyDispatcher::new();
        let lock = ScrollLock::new();
        let cp = CommandPaletteState::open(OverlayContext {
            hotkeys: &hotkeys,
            scroll_lock: &lock,
        });
        assert!(lock.is_locked());
        assert_eq!(hotkeys.listener_count(), 1);
        drop(cp);
        assert!(!lock.is_locked());
        assert_eq!(hotkeys.listener_count(), 0);
    }
}
