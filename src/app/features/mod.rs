pub mod explorer;
pub mod landing;
pub mod navigation;
pub mod pulls;
pub mod search;
pub mod session;
pub mod settings;
pub mod ui;
