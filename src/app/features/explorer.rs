use crate::app::{
    action::{Action, UpdateResult},
    state::{AppState, ShellState},
};
use crate::domain::Route;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    let Some(shell) = state.shell.as_mut() else {
        return UpdateResult::NotHandled;
    };
    let explorer = &mut shell.explorer;

    let status = match action {
        Action::ExplorerNext => {
            explorer.select_next();
            None
        }
        Action::ExplorerPrev => {
            explorer.select_prev();
            None
        }
        Action::OpenImportModal => {
            if can_open(shell) {
                shell.explorer.open_import();
            }
            None
        }
        Action::CloseImportModal => {
            explorer.import_open = false;
            None
        }
        Action::ImportInput(key) => {
            if explorer.import_open {
                explorer.import_url.input(*key);
            }
            None
        }
        Action::SubmitImport => {
            if !explorer.import_open {
                return UpdateResult::Handled(None);
            }
            match explorer.submit_import() {
                Ok(repo) => {
                    tracing::info!(%repo, "repository import started");
                    Some(format!("Importing {repo}"))
                }
                Err(e) => {
                    tracing::debug!(error = %e, "import rejected");
                    None
                }
            }
        }
        Action::OpenDocsModal => {
            if can_open(shell) {
                shell.explorer.open_docs();
            }
            None
        }
        Action::CloseDocsModal => {
            explorer.docs_open = false;
            None
        }
        Action::DocsInput(key) => {
            if explorer.docs_open {
                explorer.docs_input.input(*key);
            }
            None
        }
        Action::SaveDocs => {
            if explorer.docs_open {
                let file = explorer.save_docs();
                tracing::info!(file, "documentation saved");
                Some(format!("Saved documentation for {file}"))
            } else {
                None
            }
        }
        Action::GenerateDocs => {
            let file = explorer.generate_docs();
            tracing::info!(file, "documentation generated");
            Some(format!("Generated documentation for {file}"))
        }
        _ => return UpdateResult::NotHandled,
    };

    if let Some(message) = status {
        state.set_status(message);
    }
    UpdateResult::Handled(None)
}

fn can_open(shell: &ShellState) -> bool {
    if shell.route != Route::Explorer {
        tracing::debug!(route = %shell.route, "explorer dialogs only open on the explorer page");
        false
    } else if shell.has_overlay() {
        tracing::debug!("explorer dialog rejected: another overlay is open");
        false
    } else {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::features::navigation::navigate;
    use crate::app::reducer;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn on_explorer() -> AppState {
        let mut state = AppState::default();
        reducer::update(&mut state, Action::SignIn);
        navigate(&mut state, Route::Explorer);
        state
    }

    fn type_into(state: &mut AppState, text: &str, wrap: fn(KeyEvent) -> Action) {
        for c in text.chars() {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            reducer::update(state, wrap(key));
        }
    }

    #[test]
    fn test_import_repository() {
        let mut state = on_explorer();
        reducer::update(&mut state, Action::OpenImportModal);
        assert!(state.shell.as_ref().unwrap().import_modal.is_open());
        assert_eq!(state.scroll_lock.holders(), 1);

        type_into(&mut state, "https://github.com/acme/api", Action::ImportInput);
        reducer::update(&mut state, Action::SubmitImport);

        let shell = state.shell.as_ref().unwrap();
        assert!(!shell.import_modal.is_open());
        assert!(shell.explorer.repositories.contains(&"acme/api".to_string()));
        assert!(!state.scroll_lock.is_locked());
        assert_eq!(state.status_message.as_deref(), Some("Importing acme/api"));
    }

    #[test]
    fn test_invalid_import_stays_open() {
        let mut state = on_explorer();
        reducer::update(&mut state, Action::OpenImportModal);
        type_into(&mut state, "ftp://nope", Action::ImportInput);
        reducer::update(&mut state, Action::SubmitImport);
        let shell = state.shell.as_ref().unwrap();
        assert!(shell.import_modal.is_open());
        assert!(shell.explorer.import_error.is_some());
    }

    #[test]
    fn test_edit_and_generate_docs() {
        let mut state = on_explorer();
        reducer::update(&mut state, Action::ExplorerNext);
        reducer::update(&mut state, Action::OpenDocsModal);
        assert!(state.shell.as_ref().unwrap().docs_modal.is_open());

        type_into(&mut state, "Dialog wrapper", Action::DocsInput);
        reducer::update(&mut state, Action::SaveDocs);
        let shell = state.shell.as_ref().unwrap();
        assert!(!shell.docs_modal.is_open());
        assert_eq!(shell.explorer.doc("Modal.tsx"), Some("Dialog wrapper"));

        reducer::update(&mut state, Action::ExplorerNext);
        reducer::update(&mut state, Action::GenerateDocs);
        let shell = state.shell.as_ref().unwrap();
        assert!(shell.explorer.doc("helpers.ts").is_some());
        assert_eq!(
            state.status_message.as_deref(),
            Some("Generated documentation for helpers.ts")
        );
    }

    #[test]
    fn test_dialogs_are_exclusive_and_page_bound() {
        let mut state = on_explorer();
        reducer::update(&mut state, Action::OpenImportModal);
        reducer::update(&mut state, Action::OpenDocsModal);
        let shell = state.shell.as_ref().unwrap();
        assert!(!shell.explorer.docs_open);
        assert_eq!(state.scroll_lock.holders(), 1);

        navigate(&mut state, Route::Map);
        let shell = state.shell.as_ref().unwrap();
        assert!(!shell.import_modal.is_open());
        assert!(!state.scroll_lock.is_locked());

        reducer::update(&mut state, Action::OpenImportModal);
        assert!(!state.scroll_lock.is_locked());
    }
}
