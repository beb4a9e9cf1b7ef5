pub mod footer;
pub mod landing;
pub mod modals;
pub mod navbar;
pub mod sidebar;
pub mod views;
