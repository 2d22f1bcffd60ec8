use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Platform error: {0}")]
    Platform(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to open {url}: {reason}")]
    LinkOpen { url: String, reason: String },

    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl Error {
    pub fn platform(msg: impl Into<String>) -> Self {
        Error::Platform(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    pub fn link_open(url: impl Into<String>, reason: impl ToString) -> Self {
        Error::LinkOpen {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn terminal(msg: impl Into<String>) -> Self {
        Error::Terminal(msg.into())
    }
}
