use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gecko-widget")]
#[command(about = "Student support chat widget for the terminal")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Disable colors in output
    #[arg(long)]
    pub no_color: bool,

    /// Start with the panel already open
    #[arg(long)]
    pub open: bool,
}
