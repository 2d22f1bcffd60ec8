use tracing::info;
use url::Url;

use crate::error::{Error, Result};

/// Opens widget links outside the terminal.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &Url) -> Result<()>;
}

/// Hands the URL to the desktop's default browser, in a new window or tab.
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &Url) -> Result<()> {
        info!("Opening {} in the system browser", url);
        open::that(url.as_str()).map_err(|e| Error::link_open(url.as_str(), e))
    }
}
