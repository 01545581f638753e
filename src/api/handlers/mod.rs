// src/api/handlers/mod.rs
mod assets;
mod health;
mod page;
pub mod ws;

pub use assets::static_file;
pub use health::health_check;
pub use page::{generate, get_view, index, reset, toggle_theme, GenerateForm};
pub use ws::{ws_handler, WsBroker};
