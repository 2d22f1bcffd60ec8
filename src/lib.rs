pub mod app;
pub mod cli;
pub mod error;
pub mod platform;
pub mod tui;
pub mod widget;

pub use error::{Error, Result};
