use super::types::{item, FooterGroup};
use crate::app::state::{AppState, ShellState};
use crate::domain::Route;

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    let Some(shell) = &state.shell else {
        if state.landing.forgot_open {
            return vec![FooterGroup {
                name: "RESET",
                items: vec![item("Enter", "send link"), item("Esc", "close")],
            }];
        }
        return vec![FooterGroup {
            name: "START",
            items: vec![
                item("Enter", "sign in"),
                item("f", "forgot password"),
                item("q", "quit"),
            ],
        }];
    };

    if shell.command_palette.is_some() {
        return vec![FooterGroup {
            name: "PALETTE",
            items: vec![
                item("↑/↓", "move"),
                item("Enter", "open"),
                item("Esc", "close"),
            ],
        }];
    }

    if shell.explorer.import_open || shell.explorer.docs_open {
        return vec![FooterGroup {
            name: "DIALOG",
            items: vec![item("Enter", "confirm"), item("Esc", "cancel")],
        }];
    }

    if shell.pulls.bulk_open {
        return vec![FooterGroup {
            name: "DIALOG",
            items: vec![
                item("j/k", "move"),
                item("Space", "tick"),
                item("Enter", "post"),
                item("Esc", "cancel"),
            ],
        }];
    }

    if shell.modal_open() {
        return vec![FooterGroup {
            name: "DIALOG",
            items: vec![item("Esc", "close")],
        }];
    }

    if search_focused(shell) {
        return vec![FooterGroup {
            name: "SEARCH",
            items: vec![item("Enter", "search"), item("Esc", "cancel")],
        }];
    }

    let mut groups = vec![FooterGroup {
        name: "GO",
        items: vec![
            item("^K", "palette"),
            item("/", "search"),
            item("1-6", "views"),
        ],
    }];

    groups.push(match shell.route {
        Route::Explorer => FooterGroup {
            name: "EXPLORER",
            items: vec![
                item("j/k", "file"),
                item("i", "import"),
                item("e", "edit docs"),
                item("g", "generate"),
            ],
        },
        Route::Pulls => FooterGroup {
            name: "PULLS",
            items: vec![item("j/k", "select"), item("r", "bulk review")],
        },
        Route::Settings => FooterGroup {
            name: "SETTINGS",
            items: vec![
                item("j/k", "select"),
                item("Space", "toggle"),
                item("h/l", "adjust"),
                item("a", "api keys"),
            ],
        },
        _ => FooterGroup {
            name: "VIEW",
            items: vec![item("j/k", "scroll"), item("b", "sidebar")],
        },
    });

    groups.push(FooterGroup {
        name: "APP",
        items: vec![item("?", "help"), item("L", "sign out"), item("q", "quit")],
    });
    groups
}

fn search_focused(shell: &ShellState) -> bool {
    shell.search.as_ref().is_some_and(|f| f.is_focused())
}
