use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    modal::OverlayContext,
    state::{AppState, CommandPaletteState},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    let ctx = OverlayContext {
        hotkeys: &state.hotkeys,
        scroll_lock: &state.scroll_lock,
    };
    let Some(shell) = state.shell.as_mut() else {
        return UpdateResult::NotHandled;
    };

    match action {
        Action::TogglePalette | Action::OpenPalette => {
            if shell.command_palette.is_some() {
                if *action == Action::TogglePalette {
                    shell.command_palette = None;
                    tracing::debug!("palette closed by toggle");
                }
            } else if shell.has_overlay() {
                tracing::debug!(?action, "palette request rejected: another overlay is open");
            } else {
                // The palette input takes focus from the search field.
                if let Some(field) = &mut shell.search {
                    field.blur();
                }
                shell.command_palette = Some(CommandPaletteState::open(ctx));
                tracing::debug!("palette opened");
            }
            UpdateResult::Handled(None)
        }
        Action::ClosePalette => {
            if shell.command_palette.take().is_some() {
                tracing::debug!("palette closed");
            }
            UpdateResult::Handled(None)
        }
        Action::PaletteQueryPush(c) => {
            if let Some(cp) = &mut shell.command_palette {
                cp.push(*c);
            }
            UpdateResult::Handled(None)
        }
        Action::PaletteQueryPop => {
            if let Some(cp) = &mut shell.command_palette {
                cp.pop();
            }
            UpdateResult::Handled(None)
        }
        Action::PaletteNext => {
            if let Some(cp) = &mut shell.command_palette {
                cp.select_next();
            }
            UpdateResult::Handled(None)
        }
        Action::PalettePrev => {
            if let Some(cp) = &mut shell.command_palette {
                cp.select_prev();
            }
            UpdateResult::Handled(None)
        }
        Action::PaletteSelect | Action::PaletteSelectIndex(_) => {
            let target = shell.command_palette.as_ref().and_then(|cp| {
                let row = match action {
                    Action::PaletteSelectIndex(row) => *row,
                    _ => cp.selected_index,
                };
                cp.command_at(row)
            });
            match target {
                Some(cmd) => {
                    // Close first; the runtime navigates once this returns.
                    shell.command_palette = None;
                    tracing::info!(command = cmd.id, target = %cmd.target, "palette command selected");
                    UpdateResult::Handled(Some(Command::Navigate(cmd.target)))
                }
                None => UpdateResult::Handled(None),
            }
        }
        Action::ToggleHelp => {
            if shell.help_open {
                shell.help_open = false;
            } else if shell.has_overlay() {
                tracing::debug!("help rejected: another overlay is open");
            } else {
                shell.help_open = true;
            }
            UpdateResult::Handled(None)
        }
        Action::CloseHelp => {
            shell.help_open = false;
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
