use crate::app::{action::Action, state::AppState, ui};
use crate::components::modals::{command_palette, helpers::contains};
use crate::components::{navbar, sidebar};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Rect, Size};

const WHEEL_STEP: u16 = 3;

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Key(key) => map_key(key, app_state),
        Event::Mouse(mouse) => map_mouse(mouse, app_state, terminal_size),
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState) -> Option<Action> {
    // --- Hotkeys ---
    // A consumed chord never reaches anything below.
    if let Some(action) = app_state
        .hotkeys
        .dispatch(&key, app_state.dispatch_context())
    {
        return Some(action);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let Some(shell) = &app_state.shell else {
        // --- Landing ---
        if app_state.landing.forgot_open {
            return match key.code {
                KeyCode::Enter => Some(Action::SendResetLink),
                _ => Some(Action::ForgotInput(key)),
            };
        }
        return match key.code {
            KeyCode::Enter => Some(Action::SignIn),
            KeyCode::Char('f') => Some(Action::OpenForgotPassword),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('c') if ctrl => Some(Action::Quit),
            _ => None,
        };
    };

    // --- Command Palette ---
    if shell.command_palette.is_some() {
        return match key.code {
            KeyCode::Enter => Some(Action::PaletteSelect),
            KeyCode::Up => Some(Action::PalettePrev),
            KeyCode::Down | KeyCode::Tab => Some(Action::PaletteNext),
            KeyCode::Char('p') if ctrl => Some(Action::PalettePrev),
            KeyCode::Char('n') if ctrl => Some(Action::PaletteNext),
            KeyCode::Char(c) if !ctrl => Some(Action::PaletteQueryPush(c)),
            KeyCode::Backspace => Some(Action::PaletteQueryPop),
            _ => None,
        };
    }

    // --- Modals ---
    if shell.help_open {
        return match key.code {
            KeyCode::Char('?' | 'q') => Some(Action::CloseHelp),
            _ => None,
        };
    }
    if shell.settings.api_modal_open {
        return match key.code {
            KeyCode::Enter => Some(Action::CloseApiModal),
            _ => None,
        };
    }
    if shell.explorer.import_open {
        return match key.code {
            KeyCode::Enter => Some(Action::SubmitImport),
            _ => Some(Action::ImportInput(key)),
        };
    }
    if shell.explorer.docs_open {
        return match key.code {
            KeyCode::Enter => Some(Action::SaveDocs),
            _ => Some(Action::DocsInput(key)),
        };
    }
    if shell.pulls.bulk_open {
        return match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::BulkNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::BulkPrev),
            KeyCode::Char(' ') => Some(Action::BulkToggle),
            KeyCode::Enter => Some(Action::PostBulkReview),
            _ => None,
        };
    }

    // --- Search Field ---
    if shell.search.as_ref().is_some_and(|f| f.is_focused()) {
        return match key.code {
            KeyCode::Enter => Some(Action::SubmitSearch),
            KeyCode::Esc => Some(Action::BlurSearch),
            _ => Some(Action::SearchInput(key)),
        };
    }

    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    app_state.keymap.get_action(key, shell.route)
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState, terminal_size: Size) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let (column, row) = (mouse.column, mouse.row);
    let Some(shell) = &app_state.shell else {
        return match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                app_state.landing.forgot_modal.click(area, column, row)
            }
            _ => None,
        };
    };

    match mouse.kind {
        MouseEventKind::ScrollDown => Some(Action::ScrollContentDown(WHEEL_STEP)),
        MouseEventKind::ScrollUp => Some(Action::ScrollContentUp(WHEEL_STEP)),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(cp) = &shell.command_palette {
                let palette = command_palette::palette_area(area);
                if !contains(palette, column, row) {
                    return Some(Action::ClosePalette);
                }
                return command_palette::row_at(palette, row)
                    .filter(|&i| i < cp.matches.len())
                    .map(Action::PaletteSelectIndex);
            }

            if let Some(modal) = shell.open_modal() {
                return modal.click(area, column, row);
            }

            let layout = ui::get_layout(area, shell.sidebar_collapsed);
            if contains(layout.sidebar, column, row) {
                return sidebar::entry_at(layout.sidebar, column, row).map(Action::Navigate);
            }

            if let Some(field) = &shell.search {
                let on_field = contains(navbar::search_area(layout.navbar), column, row);
                return match (on_field, field.is_focused()) {
                    (true, false) => Some(Action::FocusSearch),
                    (false, true) => Some(Action::BlurSearch),
                    _ => None,
                };
            }
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::features::navigation::navigate;
    use crate::app::reducer;
    use crate::domain::Route;

    const SIZE: Size = Size {
        width: 120,
        height: 40,
    };

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn signed_in() -> AppState {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::SignIn);
        state
    }

    fn map(event: Event, state: &AppState) -> Option<Action> {
        map_event_to_action(event, state, SIZE)
    }

    #[test]
    fn test_landing_keys() {
        let state = AppState::default();
        assert_eq!(map(press(KeyCode::Enter), &state), Some(Action::SignIn));
        assert_eq!(map(press(KeyCode::Char('q')), &state), Some(Action::Quit));
        assert_eq!(map(ctrl('k'), &state), None);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let state = signed_in();
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map(Event::Key(release), &state), None);
    }

    #[test]
    fn test_ctrl_k_toggles_from_anywhere() {
        let mut state = signed_in();
        assert_eq!(map(ctrl('k'), &state), Some(Action::TogglePalette));

        reducer::update(&mut state, Action::FocusSearch);
        assert_eq!(map(ctrl('k'), &state), Some(Action::TogglePalette));
    }

    #[test]
    fn test_slash_focuses_search_unless_typing() {
        let mut state = signed_in();
        assert_eq!(
            map(press(KeyCode::Char('/')), &state),
            Some(Action::FocusSearch)
        );

        reducer::update(&mut state, Action::FocusSearch);
        assert!(matches!(
            map(press(KeyCode::Char('/')), &state),
            Some(Action::SearchInput(_))
        ));

        reducer::update(&mut state, Action::BlurSearch);
        reducer::update(&mut state, Action::OpenPalette);
        assert_eq!(
            map(press(KeyCode::Char('/')), &state),
            Some(Action::PaletteQueryPush('/'))
        );
    }

    #[test]
    fn test_slash_does_not_reach_search_behind_a_modal() {
        let mut state = signed_in();
        reducer::update(&mut state, Action::ToggleHelp);
        assert!(state.dispatch_context().text_input_focused);
        let action = map(press(KeyCode::Char('/')), &state);
        assert_ne!(action, Some(Action::FocusSearch));
        if let Some(action) = action {
            reducer::update(&mut state, action);
        }
        let shell = state.shell.as_ref().unwrap();
        assert!(shell.help_open);
        assert!(!shell.search.as_ref().unwrap().is_focused());

        reducer::update(&mut state, Action::CloseHelp);
        assert!(!state.shell.as_ref().unwrap().search.as_ref().unwrap().is_focused());
        assert_eq!(
            map(press(KeyCode::Char('/')), &state),
            Some(Action::FocusSearch)
        );
    }

    #[test]
    fn test_slash_is_text_inside_a_dialog_field() {
        let mut state = signed_in();
        navigate(&mut state, Route::Explorer);
        reducer::update(&mut state, Action::OpenImportModal);
        let slash = press(KeyCode::Char('/'));
        assert!(matches!(map(slash, &state), Some(Action::ImportInput(_))));
        assert_eq!(map(press(KeyCode::Esc), &state), Some(Action::CloseImportModal));
        assert_eq!(map(press(KeyCode::Enter), &state), Some(Action::SubmitImport));
    }

    #[test]
    fn test_bulk_review_keys() {
        let mut state = signed_in();
        navigate(&mut state, Route::Pulls);
        assert_eq!(map(press(KeyCode::Char('j')), &state), Some(Action::PullsNext));
        assert_eq!(
            map(press(KeyCode::Char('r')), &state),
            Some(Action::OpenBulkReview)
        );

        reducer::update(&mut state, Action::OpenBulkReview);
        assert_eq!(map(press(KeyCode::Char('j')), &state), Some(Action::BulkNext));
        assert_eq!(map(press(KeyCode::Char(' ')), &state), Some(Action::BulkToggle));
        assert_eq!(map(press(KeyCode::Enter), &state), Some(Action::PostBulkReview));
        assert_eq!(map(press(KeyCode::Char('/')), &state), None);
        assert_eq!(map(press(KeyCode::Esc), &state), Some(Action::CloseBulkReview));
    }

    #[test]
    fn test_landing_reset_password_dialog() {
        let mut state = AppState::default();
        assert_eq!(
            map(press(KeyCode::Char('f')), &state),
            Some(Action::OpenForgotPassword)
        );
        reducer::update(&mut state, Action::OpenForgotPassword);

        // Enter sends the link instead of signing in; q is typed, not quit.
        assert_eq!(map(press(KeyCode::Enter), &state), Some(Action::SendResetLink));
        assert!(matches!(
            map(press(KeyCode::Char('q')), &state),
            Some(Action::ForgotInput(_))
        ));
        assert_eq!(
            map(press(KeyCode::Esc), &state),
            Some(Action::CloseForgotPassword)
        );
        assert_eq!(map(click(0, 0), &state), Some(Action::CloseForgotPassword));
    }

    #[test]
    fn test_slash_with_ctrl_is_not_a_search_chord() {
        let state = signed_in();
        assert_eq!(map(ctrl('/'), &state), None);
    }

    #[test]
    fn test_escape_closes_topmost_overlay() {
        let mut state = signed_in();
        reducer::update(&mut state, Action::OpenPalette);
        assert_eq!(map(press(KeyCode::Esc), &state), Some(Action::ClosePalette));

        reducer::update(&mut state, Action::ClosePalette);
        reducer::update(&mut state, Action::ToggleHelp);
        assert_eq!(map(press(KeyCode::Esc), &state), Some(Action::CloseHelp));

        reducer::update(&mut state, Action::CloseHelp);
        assert_eq!(map(press(KeyCode::Esc), &state), None);
    }

    #[test]
    fn test_palette_navigation_keys() {
        let mut state = signed_in();
        reducer::update(&mut state, Action::OpenPalette);
        assert_eq!(map(press(KeyCode::Down), &state), Some(Action::PaletteNext));
        assert_eq!(map(ctrl('p'), &state), Some(Action::PalettePrev));
        assert_eq!(map(press(KeyCode::Enter), &state), Some(Action::PaletteSelect));
        assert_eq!(
            map(press(KeyCode::Backspace), &state),
            Some(Action::PaletteQueryPop)
        );
        // Digits are query text while the palette is open.
        assert_eq!(
            map(press(KeyCode::Char('4')), &state),
            Some(Action::PaletteQueryPush('4'))
        );
    }

    #[test]
    fn test_open_modal_swallows_background_keys() {
        let mut state = signed_in();
        reducer::update(&mut state, Action::ToggleHelp);
        assert_eq!(map(press(KeyCode::Char('j')), &state), None);
        assert_eq!(map(press(KeyCode::Char('?')), &state), Some(Action::CloseHelp));
    }

    #[test]
    fn test_palette_clicks() {
        let mut state = signed_in();
        reducer::update(&mut state, Action::OpenPalette);
        let area = Rect::new(0, 0, SIZE.width, SIZE.height);
        let palette = command_palette::palette_area(area);

        assert_eq!(map(click(0, 0), &state), Some(Action::ClosePalette));
        // Title row is inside the box but is not a result.
        assert_eq!(map(click(palette.x + 2, palette.y), &state), None);
        let first = (palette.y..palette.y + palette.height)
            .find(|&r| command_palette::row_at(palette, r) == Some(0))
            .unwrap();
        assert_eq!(
            map(click(palette.x + 4, first + 2), &state),
            Some(Action::PaletteSelectIndex(2))
        );
    }

    #[test]
    fn test_sidebar_and_navbar_clicks() {
        let state = signed_in();
        let layout = ui::get_layout(Rect::new(0, 0, SIZE.width, SIZE.height), false);
        let settings_row = layout.sidebar.y + 3 + Route::Settings.index() as u16;
        assert_eq!(
            map(click(layout.sidebar.x + 2, settings_row), &state),
            Some(Action::Navigate(Route::Settings))
        );

        let search = navbar::search_area(layout.navbar);
        assert_eq!(
            map(click(search.x + 1, search.y), &state),
            Some(Action::FocusSearch)
        );
    }

    #[test]
    fn test_modal_backdrop_click_closes() {
        let mut state = signed_in();
        reducer::update(&mut state, Action::ToggleHelp);
        let area = Rect::new(0, 0, SIZE.width, SIZE.height);
        let modal = state.shell.as_ref().unwrap().open_modal().unwrap().area(area);

        assert_eq!(map(click(0, 0), &state), Some(Action::CloseHelp));
        assert_eq!(map(click(modal.x + 1, modal.y + 1), &state), None);
    }

    #[test]
    fn test_wheel_scrolls_content() {
        let state = signed_in();
        let wheel = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 50,
            row: 10,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map(wheel, &state), Some(Action::ScrollContentDown(WHEEL_STEP)));
    }
}
