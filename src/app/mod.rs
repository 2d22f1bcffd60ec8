pub mod config;

pub use config::{AppConfig, ContentConfig, LinkConfig, LoggingConfig, UIConfig};
