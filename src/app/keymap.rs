use super::action::Action;
use crate::domain::Route;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Plain key bindings for the shell when no overlay or text input has focus.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
    pub explorer: HashMap<KeyEvent, Action>,
    pub pulls: HashMap<KeyEvent, Action>,
    pub settings: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyMap {
    #[must_use]
    pub fn new() -> Self {
        let mut global = HashMap::new();
        let mut explorer = HashMap::new();
        let mut pulls = HashMap::new();
        let mut settings = HashMap::new();

        // --- Global ---
        global.insert(ch('q'), Action::Quit);
        global.insert(ch('L'), Action::SignOut);
        global.insert(ch(':'), Action::OpenPalette);
        global.insert(ch('?'), Action::ToggleHelp);
        global.insert(ch('b'), Action::ToggleSidebar);
        global.insert(ch('j'), Action::ScrollContentDown(1));
        global.insert(key(KeyCode::Down), Action::ScrollContentDown(1));
        global.insert(ch('k'), Action::ScrollContentUp(1));
        global.insert(key(KeyCode::Up), Action::ScrollContentUp(1));
        global.insert(key(KeyCode::PageDown), Action::ScrollContentDown(10));
        global.insert(key(KeyCode::PageUp), Action::ScrollContentUp(10));
        for route in Route::ALL {
            let digit = char::from_digit(route.index() as u32 + 1, 10).unwrap_or('0');
            global.insert(ch(digit), Action::Navigate(route));
        }

        // --- Explorer Overrides ---
        explorer.insert(ch('j'), Action::ExplorerNext);
        explorer.insert(key(KeyCode::Down), Action::ExplorerNext);
        explorer.insert(ch('k'), Action::ExplorerPrev);
        explorer.insert(key(KeyCode::Up), Action::ExplorerPrev);
        explorer.insert(ch('i'), Action::OpenImportModal);
        explorer.insert(ch('e'), Action::OpenDocsModal);
        explorer.insert(ch('g'), Action::GenerateDocs);

        // --- Pull Request Overrides ---
        pulls.insert(ch('j'), Action::PullsNext);
        pulls.insert(key(KeyCode::Down), Action::PullsNext);
        pulls.insert(ch('k'), Action::PullsPrev);
        pulls.insert(key(KeyCode::Up), Action::PullsPrev);
        pulls.insert(ch('r'), Action::OpenBulkReview);

        // --- Settings Overrides ---
        settings.insert(ch('j'), Action::SettingsNext);
        settings.insert(key(KeyCode::Down), Action::SettingsNext);
        settings.insert(ch('k'), Action::SettingsPrev);
        settings.insert(key(KeyCode::Up), Action::SettingsPrev);
        settings.insert(ch(' '), Action::SettingsActivate);
        settings.insert(key(KeyCode::Enter), Action::SettingsActivate);
        settings.insert(ch('l'), Action::SettingsIncrease);
        settings.insert(key(KeyCode::Right), Action::SettingsIncrease);
        settings.insert(ch('h'), Action::SettingsDecrease);
        settings.insert(key(KeyCode::Left), Action::SettingsDecrease);
        settings.insert(ch('a'), Action::OpenApiModal);

        Self {
            global,
            explorer,
            pulls,
            settings,
        }
    }

    #[must_use]
    pub fn get_action(&self, event: KeyEvent, route: Route) -> Option<Action> {
        let event = normalize(event);
        let overrides = match route {
            Route::Explorer => Some(&self.explorer),
            Route::Pulls => Some(&self.pulls),
            Route::Settings => Some(&self.settings),
            _ => None,
        };
        overrides
            .and_then(|map| map.get(&event))
            .or_else(|| self.global.get(&event))
            .cloned()
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

// Terminals disagree on whether shifted characters carry SHIFT, and on
// kind/state flags. Bindings are stored without either.
fn normalize(event: KeyEvent) -> KeyEvent {
    let modifiers = match event.code {
        KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
        _ => event.modifiers,
    };
    KeyEvent::new(event.code, modifiers)
}
