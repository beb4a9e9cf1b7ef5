pub mod route;

pub use route::{Route, UnknownRoute};
