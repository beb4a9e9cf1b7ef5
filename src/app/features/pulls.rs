use crate::app::{
    action::{Action, UpdateResult},
    state::AppState,
};
use crate::domain::Route;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    let Some(shell) = state.shell.as_mut() else {
        return UpdateResult::NotHandled;
    };
    let pulls = &mut shell.pulls;

    let status = match action {
        Action::PullsNext => {
            pulls.select_next();
            None
        }
        Action::PullsPrev => {
            pulls.select_prev();
            None
        }
        Action::OpenBulkReview => {
            if shell.route != Route::Pulls {
                tracing::debug!(route = %shell.route, "bulk review only opens on the pulls page");
            } else if shell.has_overlay() {
                tracing::debug!("bulk review rejected: another overlay is open");
            } else {
                shell.pulls.open_bulk();
            }
            None
        }
        Action::CloseBulkReview => {
            pulls.bulk_open = false;
            None
        }
        Action::BulkNext | Action::BulkPrev | Action::BulkToggle if !pulls.bulk_open => None,
        Action::BulkNext => {
            pulls.bulk_next();
            None
        }
        Action::BulkPrev => {
            pulls.bulk_prev();
            None
        }
        Action::BulkToggle => {
            pulls.bulk_toggle();
            None
        }
        Action::PostBulkReview if pulls.bulk_open => match pulls.post_bulk() {
            Some(numbers) => {
                let list = numbers
                    .iter()
                    .map(|n| format!("#{n}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                tracing::info!(pulls = %list, "bulk review posted");
                Some(format!("Posted AI review to {list}"))
            }
            None => Some("Select at least one pull request".to_string()),
        },
        Action::PostBulkReview => None,
        _ => return UpdateResult::NotHandled,
    };

    if let Some(message) = status {
        state.set_status(message);
    }
    UpdateResult::Handled(None)
}
