use crate::app::{
    action::Action, command::Command, features, input::map_event_to_action, reducer,
    state::AppState, ui,
};

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::interval;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app_state: AppState) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, event_rx).await?;
    Ok(())
}

/// Runs until quit or until the event stream ends, and hands the final state back.
pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<AppState> {
    let mut interval = interval(TICK_RATE);

    loop {
        // --- 1. Render ---
        terminal.draw(|f| ui::draw(f, &app_state))?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            res = event_rx.recv() => match res {
                Some(Ok(event)) => map_event_to_action(event, &app_state, terminal.size()?),
                Some(Err(e)) => return Err(e.into()),
                None => {
                    tracing::info!("event stream closed");
                    break;
                }
            },
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            dispatch(&mut app_state, action);
        }

        if app_state.should_quit {
            break;
        }
    }

    Ok(app_state)
}

/// Runs the reducer, then the side effect it asked for.
pub(crate) fn dispatch(app_state: &mut AppState, action: Action) {
    if let Some(command) = reducer::update(app_state, action) {
        handle_command(app_state, command);
    }
}

pub(crate) fn handle_command(app_state: &mut AppState, command: Command) {
    match command {
        Command::Navigate(route) => features::navigation::navigate(app_state, route),
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
