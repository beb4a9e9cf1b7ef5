use crate::domain::Route;

/// Side effects the runtime performs after the reducer has returned.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Navigate(Route),
}
