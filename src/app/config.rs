use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::info;

use crate::error::{Error, Result};
use crate::platform::AppPaths;

pub const ENV_PREFIX: &str = "GECKO_WIDGET";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UIConfig,
    pub content: ContentConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UIConfig {
    pub theme: String,
    pub panel_width: u16,
    pub panel_height_percent: u16,
    pub tick_rate_ms: u64,
    pub start_open: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub institution: String,
    pub video_title: String,
    pub video_url: String,
    pub links: Vec<LinkConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file_name: String,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            panel_width: 52,
            panel_height_percent: 85,
            tick_rate_ms: 250,
            start_open: false,
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        let link = |label: &str| LinkConfig {
            label: label.to_string(),
            url: "https://geckoengage.com".to_string(),
        };

        Self {
            institution: "Gecko U".to_string(),
            video_title: "Campus Life Video".to_string(),
            video_url: "https://www.youtube.com/embed/sxf-d41_w-Y?start=2".to_string(),
            links: vec![link("Financial aid"), link("Accommodation"), link("Campus tours")],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_name: "gecko-widget.log".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the per-user config file, writing the defaults first if it
    /// does not exist yet.
    pub async fn load(paths: &AppPaths) -> Result<Self> {
        let config_file = paths.config_file();

        if !config_file.exists() {
            info!("Config file not found, creating default configuration");
            let default_config = Self::default();
            default_config.save_to(&config_file).await?;
        }

        Self::load_from(&config_file)
    }

    /// Reads `path` and layers `GECKO_WIDGET__SECTION__KEY` variables on top.
    pub fn load_from(path: &Path) -> Result<Self> {
        info!("Loading configuration from: {:?}", path);

        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Toml))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;

        info!("Configuration loaded successfully");
        Ok(config)
    }

    pub async fn save_to(&self, path: &Path) -> Result<()> {
        info!("Saving configuration to: {:?}", path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let config_content = toml::to_string_pretty(self)?;
        fs::write(path, config_content).await?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !matches!(self.ui.theme.as_str(), "dark" | "light") {
            return Err(Error::validation(format!(
                "Unknown theme '{}', expected dark or light",
                self.ui.theme
            )));
        }

        if self.ui.panel_width < 36 || self.ui.panel_width > 120 {
            return Err(Error::validation("Panel width must be between 36 and 120"));
        }

        if self.ui.panel_height_percent < 30 || self.ui.panel_height_percent > 100 {
            return Err(Error::validation("Panel height must be between 30 and 100 percent"));
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(Error::validation("Tick rate must be greater than zero"));
        }

        if self.content.institution.trim().is_empty() {
            return Err(Error::validation("Institution name must not be empty"));
        }

        url::Url::parse(&self.content.video_url)?;
        for link in &self.content.links {
            if link.label.trim().is_empty() {
                return Err(Error::validation(format!("Link {} has an empty label", link.url)));
            }
            url::Url::parse(&link.url)?;
        }

        Ok(())
    }
}
