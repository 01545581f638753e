// src/view/mod.rs
pub mod controller;
pub mod render;
pub mod state;

pub use controller::{GenerateOutcome, ViewController, ViewEvent};
pub use state::{Banner, Theme, ViewState};
