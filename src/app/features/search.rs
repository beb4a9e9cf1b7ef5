use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::AppState,
};
use crate::domain::Route;
use std::time::Instant;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    let Some(shell) = state.shell.as_mut() else {
        return UpdateResult::NotHandled;
    };

    match action {
        Action::FocusSearch => {
            if shell.has_overlay() {
                // Focus stays inside the open overlay.
                tracing::debug!("focus search ignored: an overlay is open");
            } else {
                match &mut shell.search {
                    Some(field) => field.focus(),
                    None => tracing::debug!("focus search ignored: no search field mounted"),
                }
            }
            UpdateResult::Handled(None)
        }
        Action::BlurSearch => {
            if let Some(field) = &mut shell.search {
                field.blur();
            }
            UpdateResult::Handled(None)
        }
        Action::SearchInput(key) => {
            if let Some(field) = shell.search.as_mut().filter(|f| f.is_focused()) {
                field.input.input(*key);
            }
            UpdateResult::Handled(None)
        }
        Action::SubmitSearch => {
            let Some(field) = &mut shell.search else {
                return UpdateResult::Handled(None);
            };
            field.blur();
            let query = field.query();
            if query.is_empty() {
                return UpdateResult::Handled(Some(Command::Navigate(Route::Search)));
            }
            match shell.chat.ask(&query, Instant::now()) {
                Ok(()) => {
                    tracing::info!(%query, "question submitted");
                    field.clear();
                }
                Err(e) => {
                    tracing::debug!(%query, error = %e, "question not submitted");
                    state.set_status(e.to_string());
                }
            }
            UpdateResult::Handled(Some(Command::Navigate(Route::Search)))
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Lands a pending answer once its delay has passed. Runs on every tick.
pub fn poll_answer(state: &mut AppState, now: Instant) {
    if let Some(shell) = state.shell.as_mut() {
        if shell.chat.poll(now) {
            tracing::info!("answer received");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::reducer;
    use crate::app::state::chat::{ANSWER_DELAY, SIMULATED_ANSWER};
    use crate::config::AppConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            reducer::update(state, Action::SearchInput(key));
        }
    }

    fn search_focused(state: &AppState) -> bool {
        state
            .shell
            .as_ref()
            .and_then(|s| s.search.as_ref())
            .is_some_and(|f| f.is_focused())
    }

    fn ask(state: &mut AppState, question: &str) -> Option<Command> {
        reducer::update(state, Action::FocusSearch);
        type_text(state, question);
        reducer::update(state, Action::SubmitSearch)
    }

    #[test]
    fn test_focus_type_and_submit() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::SignIn);
        reducer::update(&mut state, Action::FocusSearch);
        assert!(search_focused(&state));
        assert!(state.dispatch_context().text_input_focused);

        type_text(&mut state, "auth flow");
        let cmd = reducer::update(&mut state, Action::SubmitSearch);
        assert_eq!(cmd, Some(Command::Navigate(Route::Search)));
        assert!(!search_focused(&state));

        let shell = state.shell.as_ref().unwrap();
        assert_eq!(shell.chat.messages[0].question, "auth flow");
        assert!(shell.chat.is_thinking());
        assert_eq!(shell.search.as_ref().unwrap().query(), "");
    }

    #[test]
    fn test_answer_arrives_on_a_later_tick() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::SignIn);
        ask(&mut state, "where is the router");

        reducer::update(&mut state, Action::Tick);
        assert!(state.shell.as_ref().unwrap().chat.messages[0].answer.is_none());

        poll_answer(&mut state, Instant::now() + ANSWER_DELAY);
        let chat = &state.shell.as_ref().unwrap().chat;
        assert!(!chat.is_thinking());
        assert_eq!(chat.messages[0].answer.as_deref(), Some(SIMULATED_ANSWER));
    }

    #[test]
    fn test_second_question_waits_for_the_first_answer() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::SignIn);
        ask(&mut state, "first");
        let cmd = ask(&mut state, "second");
        assert_eq!(cmd, Some(Command::Navigate(Route::Search)));

        let shell = state.shell.as_ref().unwrap();
        assert_eq!(shell.chat.messages[0].question, "first");
        assert_eq!(
            state.status_message.as_deref(),
            Some("Still answering the previous question")
        );
    }

    #[test]
    fn test_input_is_ignored_without_focus() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::SignIn);
        type_text(&mut state, "abc");
        let field = state.shell.as_ref().unwrap().search.as_ref().unwrap();
        assert_eq!(field.query(), "");
    }

    #[test]
    fn test_focus_is_refused_while_a_modal_is_open() {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::SignIn);
        reducer::update(&mut state, Action::ToggleHelp);
        reducer::update(&mut state, Action::FocusSearch);
        assert!(!search_focused(&state));

        reducer::update(&mut state, Action::CloseHelp);
        assert!(!search_focused(&state));
    }

    #[test]
    fn test_focus_without_search_field_is_a_no_op() {
        let config = AppConfig {
            show_search: false,
            ..Default::default()
        };
        let mut state = AppState::new(config);
        reducer::update(&mut state, Action::SignIn);
        let cmd = reducer::update(&mut state, Action::FocusSearch);
        assert_eq!(cmd, None);
        assert!(!state.dispatch_context().text_input_focused);
    }
}
