use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::OpenForgotPassword => {
            if state.shell.is_some() {
                tracing::debug!("reset password only opens on the sign-in screen");
            } else if !state.landing.forgot_open {
                state.landing.open_forgot();
            }
            UpdateResult::Handled(None)
        }
        Action::CloseForgotPassword => {
            state.landing.close_forgot();
            UpdateResult::Handled(None)
        }
        Action::ForgotInput(key) => {
            if state.landing.forgot_open {
                state.landing.email.input(*key);
            }
            UpdateResult::Handled(None)
        }
        Action::SendResetLink => {
            if state.landing.forgot_open {
                if let Some(email) = state.landing.send_reset_link() {
                    tracing::info!(%email, "reset link requested");
                    state.set_status(format!("Reset link sent to {email}"));
                }
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
