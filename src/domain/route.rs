use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A navigation target inside the dashboard shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Route {
    #[default]
    Dashboard,
    Explorer,
    Search,
    Map,
    Pulls,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route: {0}")]
pub struct UnknownRoute(pub String);

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Dashboard,
        Route::Explorer,
        Route::Search,
        Route::Map,
        Route::Pulls,
        Route::Settings,
    ];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Explorer => "/explorer",
            Route::Search => "/search",
            Route::Map => "/map",
            Route::Pulls => "/pulls",
            Route::Settings => "/settings",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Explorer => "Code Explorer",
            Route::Search => "Search",
            Route::Map => "Project Map",
            Route::Pulls => "Pull Requests",
            Route::Settings => "Settings",
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Route::Dashboard => "⌂",
            Route::Explorer => "❮❯",
            Route::Search => "⌕",
            Route::Map => "◈",
            Route::Pulls => "⎇",
            Route::Settings => "⚙",
        }
    }

    /// Position in the sidebar, also the digit shortcut minus one.
    #[must_use]
    pub fn index(self) -> usize {
        Route::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }

    pub fn from_path(path: &str) -> Result<Self, UnknownRoute> {
        Route::ALL
            .into_iter()
            .find(|r| r.path() == path.trim_end_matches('/') || r.path() == path)
            .ok_or_else(|| UnknownRoute(path.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::from_path(s)
    }
}

impl TryFrom<String> for Route {
    type Error = UnknownRoute;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Route::from_path(&value)
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.path().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Ok(route));
        }
        assert_eq!(Route::from_path("/settings/"), Ok(Route::Settings));
    }

    #[test]
    fn test_unknown_path_is_rejected() {
        assert_eq!(
            Route::from_path("/login"),
            Err(UnknownRoute("/login".to_string()))
        );
        assert!("".parse::<Route>().is_err());
    }

    #[test]
    fn test_index_matches_sidebar_order() {
        assert_eq!(Route::Dashboard.index(), 0);
        assert_eq!(Route::Settings.index(), 5);
    }
}
