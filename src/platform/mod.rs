pub mod links;
pub mod paths;

pub use links::{LinkOpener, SystemBrowser};
pub use paths::AppPaths;
