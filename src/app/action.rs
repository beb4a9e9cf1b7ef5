use crate::app::command::Command;
use crate::domain::Route;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Session ---
    SignIn,  // Mount the dashboard shell
    SignOut, // Unmount the shell, back to the landing screen

    // --- Navigation ---
    Navigate(Route),
    ScrollContentUp(u16),
    ScrollContentDown(u16),
    ToggleSidebar,

    // --- Command Palette ---
    TogglePalette,             // Ctrl/Cmd+K
    OpenPalette,               // Explicit open
    ClosePalette,              // Esc, backdrop click, explicit close
    PaletteQueryPush(char),    // Typed character
    PaletteQueryPop,           // Backspace
    PaletteNext,               // Next match (wraps)
    PalettePrev,               // Previous match (wraps)
    PaletteSelect,             // Execute the highlighted command
    PaletteSelectIndex(usize), // Execute the match at this row (mouse)

    // --- Search Field ---
    FocusSearch, // `/`
    BlurSearch,
    SearchInput(crossterm::event::KeyEvent),
    SubmitSearch,

    // --- Overlays ---
    ToggleHelp,
    CloseHelp,
    OpenApiModal,
    CloseApiModal,

    // --- Landing ---
    OpenForgotPassword,
    CloseForgotPassword,
    ForgotInput(crossterm::event::KeyEvent),
    SendResetLink,

    // --- Explorer ---
    ExplorerNext,
    ExplorerPrev,
    OpenImportModal,
    CloseImportModal,
    ImportInput(crossterm::event::KeyEvent),
    SubmitImport,
    OpenDocsModal,
    CloseDocsModal,
    DocsInput(crossterm::event::KeyEvent),
    SaveDocs,
    GenerateDocs,

    // --- Pull Requests ---
    PullsNext,
    PullsPrev,
    OpenBulkReview,
    CloseBulkReview,
    BulkNext,
    BulkPrev,
    BulkToggle,     // Tick or untick the highlighted PR
    PostBulkReview, // Post to the ticked PRs

    // --- Settings ---
    SettingsNext,
    SettingsPrev,
    SettingsActivate,
    SettingsIncrease,
    SettingsDecrease,
}
