pub mod action;
pub mod command;
pub mod command_palette;
pub mod features;
pub mod hotkeys;
pub mod input;
pub mod keymap;
pub mod r#loop;
pub mod modal;
pub mod reducer;
pub mod state;
pub mod ui;
