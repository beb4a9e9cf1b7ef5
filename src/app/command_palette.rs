use crate::domain::Route;

#[derive(Debug, Clone, PartialEq)]
pub struct CommandDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub target: Route,
    pub icon: &'static str,
}

const fn nav(
    id: &'static str,
    label: &'static str,
    target: Route,
    icon: &'static str,
) -> CommandDefinition {
    CommandDefinition {
        id,
        label,
        target,
        icon,
    }
}

const COMMANDS: [CommandDefinition; 6] = [
    nav("dashboard", "Dashboard", Route::Dashboard, "⌂"),
    nav("explorer", "Code Explorer", Route::Explorer, "❮❯"),
    nav("search", "Search", Route::Search, "⌕"),
    nav("map", "Project Map", Route::Map, "◈"),
    nav("pulls", "Pull Requests", Route::Pulls, "⎇"),
    nav("settings", "Settings", Route::Settings, "⚙"),
];

#[must_use]
pub fn get_commands() -> &'static [CommandDefinition] {
    &COMMANDS
}

/// Indices of the commands whose label contains `query`, ignoring case.
///
/// Order follows `commands`. An empty query matches everything.
#[must_use]
pub fn filter_commands(commands: &[CommandDefinition], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..commands.len()).collect();
    }

    let query_lower = query.to_lowercase();
    commands
        .iter()
        .enumerate()
        .filter(|(_, cmd)| cmd.label.to_lowercase().contains(&query_lower))
        .map(|(i, _)| i)
        .collect()
}

#[must_use]
pub fn search_commands(query: &str) -> Vec<usize> {
    filter_commands(get_commands(), query)
}
