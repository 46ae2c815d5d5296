//! folio library — application logic for the terminal portfolio viewer.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
