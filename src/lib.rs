pub mod chat;
pub mod config;
pub mod content;
pub mod reveal;
pub mod theme;
pub mod timer;
pub mod types;
pub mod ui;
pub mod views;
