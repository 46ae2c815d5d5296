//! # folio-tui
//!
//! Terminal portfolio viewer using ratatui with Elm architecture.

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod keymap;
pub mod messages;
pub mod modal;
pub mod model;
pub mod navbar;
pub mod page;
pub mod particles;
pub mod projects;
pub mod skills;
pub mod styles;
pub mod toasts;

pub use keymap::{map_key, InputMode, KeyAction};
pub use messages::TuiMessage;
pub use model::TuiApp;
pub use page::PageDocument;
pub use styles::ColorTheme;
