use crate::app::{
    action::{Action, UpdateResult},
    features::search,
    state::{AppState, ShellState},
};
use std::time::{Duration, Instant};

/// How long a footer status message stays up.
pub const STATUS_TTL: Duration = Duration::from_secs(4);

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            state.clock = chrono::Local::now().format("%H:%M").to_string();
            if state
                .status_set_at
                .is_some_and(|t| t.elapsed() >= STATUS_TTL)
            {
                state.status_message = None;
                state.status_set_at = None;
            }
            search::poll_answer(state, Instant::now());
            UpdateResult::Handled(None)
        }
        Action::Resize(..) => UpdateResult::Handled(None),
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::SignIn => {
            if state.shell.is_none() {
                state.landing.close_forgot();
                state.shell = Some(ShellState::mount(&state.hotkeys, &state.config));
            }
            UpdateResult::Handled(None)
        }
        Action::SignOut => {
            // Dropping the shell releases its bindings and any open overlay.
            state.shell = None;
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
