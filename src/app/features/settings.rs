use crate::app::{
    action::{Action, UpdateResult},
    state::{AppState, SettingsRow},
};
use crate::domain::Route;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    let Some(shell) = state.shell.as_mut() else {
        return UpdateResult::NotHandled;
    };
    let settings = &mut shell.settings;

    let status = match action {
        Action::SettingsNext => {
            settings.select_next();
            None
        }
        Action::SettingsPrev => {
            settings.select_prev();
            None
        }
        Action::SettingsIncrease | Action::SettingsDecrease => {
            if settings.selected_row() == SettingsRow::SimilarityThreshold {
                if *action == Action::SettingsIncrease {
                    settings.raise_threshold();
                } else {
                    settings.lower_threshold();
                }
                Some(format!(
                    "Similarity threshold: {:.1}",
                    settings.similarity_threshold()
                ))
            } else {
                None
            }
        }
        Action::SettingsActivate => match settings.selected_row() {
            SettingsRow::ApiCredentials => {
                return open_api_modal(state);
            }
            SettingsRow::SimilarityThreshold => None,
            row => settings.toggle(row).map(|on| {
                format!("{}: {}", row.label(), if on { "on" } else { "off" })
            }),
        },
        Action::OpenApiModal => return open_api_modal(state),
        Action::CloseApiModal => {
            settings.api_modal_open = false;
            None
        }
        _ => return UpdateResult::NotHandled,
    };

    if let Some(message) = status {
        state.set_status(message);
    }
    UpdateResult::Handled(None)
}

fn open_api_modal(state: &mut AppState) -> UpdateResult {
    if let Some(shell) = state.shell.as_mut() {
        if shell.route != Route::Settings {
            tracing::debug!(route = %shell.route, "api modal only opens on the settings page");
        } else if shell.has_overlay() {
            tracing::debug!("api modal rejected: another overlay is open");
        } else {
            shell.settings.api_modal_open = true;
        }
    }
    UpdateResult::Handled(None)
}
