use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

type Handler = fn(&mut AppState, &Action) -> UpdateResult;

const HANDLERS: [Handler; 8] = [
    features::session::update,
    features::landing::update,
    features::ui::update,
    features::search::update,
    features::explorer::update,
    features::pulls::update,
    features::settings::update,
    features::navigation::update,
];

/// Applies `action` and returns the side effect the runtime should perform.
///
/// Modal effects are re-synced after every action, so an overlay's scroll lock
/// and Escape binding always follow its owner's flag.
pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    let mut command = None;
    let mut handled = false;
    for handler in HANDLERS {
        if let UpdateResult::Handled(cmd) = handler(state, &action) {
            command = cmd;
            handled = true;
            break;
        }
    }
    if !handled {
        tracing::trace!(?action, "action not handled");
    }

    state.sync_overlays();
    command
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::features::navigation::navigate;
    use crate::domain::Route;

    #[test]
    fn test_help_modal_follows_flag() {
        let mut state = AppState::default();
        update(&mut state, Action::SignIn);
        update(&mut state, Action::ToggleHelp);
        assert!(state.shell.as_ref().unwrap().help_modal.is_open());
        assert_eq!(state.scroll_lock.holders(), 1);

        update(&mut state, Action::ToggleHelp);
        assert!(!state.shell.as_ref().unwrap().help_modal.is_open());
        assert_eq!(state.scroll_lock.holders(), 0);
    }

    #[test]
    fn test_every_close_path_releases_the_lock_once() {
        let dialogs = [
            (Route::Settings, Action::OpenApiModal, Action::CloseApiModal),
            (Route::Explorer, Action::OpenImportModal, Action::CloseImportModal),
            (Route::Explorer, Action::OpenDocsModal, Action::CloseDocsModal),
            (Route::Pulls, Action::OpenBulkReview, Action::CloseBulkReview),
        ];
        for (page, open, close) in dialogs {
            let closes = [
                close.clone(), // explicit close / Esc binding
                Action::Navigate(Route::Dashboard), // leaving the page
                Action::SignOut, // unmount
            ];
            for path in closes {
                let mut state = AppState::default();
                update(&mut state, Action::SignIn);
                navigate(&mut state, page);
                update(&mut state, open.clone());
                assert_eq!(state.scroll_lock.holders(), 1, "{open:?} did not lock");

                if let Some(Command::Navigate(route)) = update(&mut state, path.clone()) {
                    navigate(&mut state, route);
                }
                assert_eq!(state.scroll_lock.holders(), 0, "{open:?} then {path:?}");

                // A second close must not drive the count negative or re-lock.
                update(&mut state, close.clone());
                assert_eq!(state.scroll_lock.holders(), 0, "{open:?} then {path:?} twice");
            }
        }
    }

    #[test]
    fn test_landing_screen_ignores_shell_actions() {
        let mut state = AppState::default();
        assert_eq!(update(&mut state, Action::Navigate(Route::Map)), None);
        assert_eq!(update(&mut state, Action::ScrollContentDown(3)), None);
        assert!(state.shell.is_none());
    }
}
