use super::action::Action;
use super::hotkeys::{Chord, DispatchContext, HotkeyDispatcher, Subscription};
use super::keymap::KeyMap;
use super::modal::{Modal, OverlayContext, ScrollLock};
use crate::config::AppConfig;
use crate::domain::Route;
use crate::theme::Theme;
use std::sync::Arc;
use std::time::Instant;

pub mod chat;
pub mod command_palette;
pub mod explorer;
pub mod input;
pub mod landing;
pub mod pulls;
pub mod settings;

// Re-exports
pub use chat::ChatState;
pub use command_palette::CommandPaletteState;
pub use explorer::ExplorerState;
pub use input::{AppTextArea, SearchField};
pub use landing::LandingState;
pub use pulls::PullsState;
pub use settings::{SettingsRow, SettingsState};

#[derive(Debug)]
pub struct AppState {
    // --- Status ---
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub status_set_at: Option<Instant>,
    pub clock: String,
    pub frame_count: u64,

    // --- Shared Resources ---
    pub hotkeys: HotkeyDispatcher,
    pub scroll_lock: ScrollLock,

    // --- Config ---
    pub config: AppConfig,
    pub keymap: Arc<KeyMap>,
    pub theme: Theme,

    // --- Landing ---
    pub landing: LandingState,

    // --- Dashboard Shell ---
    // `None` while the landing screen is shown.
    pub shell: Option<ShellState>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Bare chords are suppressed while a text field or any overlay holds focus.
    #[must_use]
    pub fn dispatch_context(&self) -> DispatchContext {
        let focus_captured = match &self.shell {
            Some(shell) => shell.focus_captured(),
            None => self.landing.forgot_open,
        };
        DispatchContext {
            text_input_focused: focus_captured,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_set_at = Some(Instant::now());
    }

    /// Re-runs every modal's open/close effect against its owner's flag.
    pub fn sync_overlays(&mut self) {
        let ctx = OverlayContext {
            hotkeys: &self.hotkeys,
            scroll_lock: &self.scroll_lock,
        };
        self.landing
            .forgot_modal
            .sync(self.landing.forgot_open, ctx);
        if let Some(shell) = &mut self.shell {
            shell.help_modal.sync(shell.help_open, ctx);
            shell.api_modal.sync(shell.settings.api_modal_open, ctx);
            shell.import_modal.sync(shell.explorer.import_open, ctx);
            shell.docs_modal.sync(shell.explorer.docs_open, ctx);
            shell.bulk_modal.sync(shell.pulls.bulk_open, ctx);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            status_message: None,
            status_set_at: None,
            clock: String::new(),
            frame_count: 0,
            hotkeys: HotkeyDispatcher::new(),
            scroll_lock: ScrollLock::new(),
            config: AppConfig::default(),
            keymap: Arc::new(KeyMap::new()),
            theme: Theme::default(),
            landing: LandingState::default(),
            shell: None,
        }
    }
}

/// The mounted dashboard: sidebar, navbar, content pane and its overlays.
#[derive(Debug)]
pub struct ShellState {
    pub route: Route,
    pub sidebar_collapsed: bool,
    pub search: Option<SearchField>,
    pub content_scroll: u16,

    // --- Command Palette ---
    pub command_palette: Option<CommandPaletteState>,

    // --- Help Overlay ---
    pub help_open: bool,
    pub help_modal: Modal,

    // --- Pages ---
    // Each page owns its dialogs. Leaving the page closes them.
    pub explorer: ExplorerState,
    pub import_modal: Modal,
    pub docs_modal: Modal,
    pub chat: ChatState,
    pub pulls: PullsState,
    pub bulk_modal: Modal,
    pub settings: SettingsState,
    pub api_modal: Modal,

    // Lives exactly as long as the shell is mounted.
    bindings: Vec<Subscription>,
}

impl ShellState {
    pub fn mount(hotkeys: &HotkeyDispatcher, config: &AppConfig) -> Self {
        let bindings = vec![
            hotkeys.subscribe(Chord::Command('k'), Action::TogglePalette),
            hotkeys.subscribe(Chord::Bare('/'), Action::FocusSearch),
        ];
        tracing::info!(route = %config.start_route, "shell mounted");
        Self {
            route: config.start_route,
            sidebar_collapsed: config.sidebar_collapsed,
            search: config.show_search.then(SearchField::default),
            content_scroll: 0,
            command_palette: None,
            help_open: false,
            help_modal: Modal::new(Some("Help - Keybindings"), Action::CloseHelp)
                .with_size(70, 80),
            explorer: ExplorerState::default(),
            import_modal: Modal::new(Some("Import Repository"), Action::CloseImportModal)
                .with_size(60, 40),
            docs_modal: Modal::new(Some("Edit Documentation"), Action::CloseDocsModal)
                .with_size(70, 40),
            chat: ChatState::default(),
            pulls: PullsState::default(),
            bulk_modal: Modal::new(Some("Bulk Actions"), Action::CloseBulkReview)
                .with_size(60, 50),
            settings: SettingsState::default(),
            api_modal: Modal::new(Some("API Credentials"), Action::CloseApiModal)
                .with_size(60, 60),
            bindings,
        }
    }

    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn text_input_focused(&self) -> bool {
        self.command_palette.is_some() || self.search.as_ref().is_some_and(SearchField::is_focused)
    }

    /// A text field has focus or an overlay has taken it.
    #[must_use]
    pub fn focus_captured(&self) -> bool {
        self.text_input_focused() || self.has_overlay()
    }

    #[must_use]
    pub fn has_overlay(&self) -> bool {
        self.command_palette.is_some() || self.modal_open()
    }

    #[must_use]
    pub fn modal_open(&self) -> bool {
        self.help_open
            || self.settings.api_modal_open
            || self.explorer.import_open
            || self.explorer.docs_open
            || self.pulls.bulk_open
    }

    /// The open modal, if any. The palette is reported separately.
    #[must_use]
    pub fn open_modal(&self) -> Option<&Modal> {
        [
            &self.help_modal,
            &self.api_modal,
            &self.import_modal,
            &self.docs_modal,
            &self.bulk_modal,
        ]
        .into_iter()
        .find(|m| m.is_open())
    }

    /// Closes the dialogs of every page except `route`.
    pub fn close_page_modals(&mut self, route: Route) {
        if route != Route::Explorer {
            self.explorer.close_modals();
        }
        if route != Route::Pulls {
            self.pulls.bulk_open = false;
        }
        if route != Route::Settings {
            self.settings.api_modal_open = false;
        }
    }
}

impl Drop for ShellState {
    fn drop(&mut self) {
        tracing::info!(route = %self.route, "shell unmounted");
    }
}
