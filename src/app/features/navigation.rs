use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::AppState,
};
use crate::components::views::body_len;
use crate::domain::Route;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    let locked = state.scroll_lock.is_locked();
    let Some(shell) = state.shell.as_mut() else {
        return UpdateResult::NotHandled;
    };

    match action {
        Action::Navigate(route) => UpdateResult::Handled(Some(Command::Navigate(*route))),
        Action::ScrollContentDown(n) => {
            if locked {
                tracing::trace!("scroll ignored: scroll lock held");
            } else {
                let max_scroll = body_len(shell).saturating_sub(1) as u16;
                shell.content_scroll = shell.content_scroll.saturating_add(*n).min(max_scroll);
            }
            UpdateResult::Handled(None)
        }
        Action::ScrollContentUp(n) => {
            if locked {
                tracing::trace!("scroll ignored: scroll lock held");
            } else {
                shell.content_scroll = shell.content_scroll.saturating_sub(*n);
            }
            UpdateResult::Handled(None)
        }
        Action::ToggleSidebar => {
            shell.sidebar_collapsed = !shell.sidebar_collapsed;
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Applies a navigation side effect. Runs after the reducer has returned.
pub fn navigate(state: &mut AppState, route: Route) {
    let Some(shell) = state.shell.as_mut() else {
        tracing::debug!(%route, "navigation ignored: shell not mounted");
        return;
    };
    if shell.route != route {
        tracing::info!(from = %shell.route, to = %route, "navigate");
    }
    shell.route = route;
    shell.content_scroll = 0;
    shell.close_page_modals(route);
    state.sync_overlays();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;

    fn mounted() -> AppState {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::SignIn);
        state
    }

    #[test]
    fn test_navigate_is_a_side_effect() {
        let mut state = mounted();
        let cmd = reducer::update(&mut state, Action::Navigate(Route::Explorer));
        assert_eq!(cmd, Some(Command::Navigate(Route::Explorer)));
        assert_eq!(state.shell.as_ref().unwrap().route, Route::Dashboard);

        navigate(&mut state, Route::Explorer);
        assert_eq!(state.shell.as_ref().unwrap().route, Route::Explorer);
    }

    #[test]
    fn test_scroll_clamps_and_resets_on_navigation() {
        let mut state = mounted();
        reducer::update(&mut state, Action::ScrollContentDown(3));
        assert_eq!(state.shell.as_ref().unwrap().content_scroll, 3);

        reducer::update(&mut state, Action::ScrollContentDown(u16::MAX));
        let max = body_len(state.shell.as_ref().unwrap()).saturating_sub(1) as u16;
        assert_eq!(state.shell.as_ref().unwrap().content_scroll, max);

        reducer::update(&mut state, Action::ScrollContentUp(u16::MAX));
        assert_eq!(state.shell.as_ref().unwrap().content_scroll, 0);

        reducer::update(&mut state, Action::ScrollContentDown(2));
        navigate(&mut state, Route::Search);
        assert_eq!(state.shell.as_ref().unwrap().content_scroll, 0);
    }

    #[test]
    fn test_scroll_is_frozen_while_locked() {
        let mut state = mounted();
        reducer::update(&mut state, Action::ScrollContentDown(2));
        reducer::update(&mut state, Action::OpenPalette);

        reducer::update(&mut state, Action::ScrollContentDown(5));
        reducer::update(&mut state, Action::ScrollContentUp(1));
        assert_eq!(state.shell.as_ref().unwrap().content_scroll, 2);

        reducer::update(&mut state, Action::ClosePalette);
        reducer::update(&mut state, Action::ScrollContentUp(1));
        assert_eq!(state.shell.as_ref().unwrap().content_scroll, 1);
    }

    #[test]
    fn test_leaving_settings_closes_api_modal() {
        let mut state = mounted();
        navigate(&mut state, Route::Settings);
        reducer::update(&mut state, Action::OpenApiModal);
        assert!(state.scroll_lock.is_locked());

        navigate(&mut state, Route::Dashboard);
        let shell = state.shell.as_ref().unwrap();
        assert!(!shell.settings.api_modal_open);
        assert!(!shell.api_modal.is_open());
        assert!(!state.scroll_lock.is_locked());
    }

    #[test]
    fn test_sidebar_toggle() {
        let mut state = mounted();
        reducer::update(&mut state, Action::ToggleSidebar);
        assert!(state.shell.as_ref().unwrap().sidebar_collapsed);
        reducer::update(&mut state, Action::ToggleSidebar);
        assert!(!state.shell.as_ref().unwrap().sidebar_collapsed);
    }
}
