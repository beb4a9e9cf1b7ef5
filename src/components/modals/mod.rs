pub mod api_credentials;
pub mod bulk_review;
pub mod command_palette;
pub mod dialog;
pub mod edit_docs;
pub mod form;
pub mod help;
pub mod helpers;
pub mod import;
pub mod manager;
pub mod reset_password;

pub use command_palette::CommandPaletteModal;
pub use dialog::Dialog;
pub use manager::ModalManager;
