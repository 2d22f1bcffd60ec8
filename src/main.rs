use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::Directive;

use gecko_widget::app::AppConfig;
use gecko_widget::cli::Cli;
use gecko_widget::platform::{AppPaths, SystemBrowser};
use gecko_widget::tui::{self, Theme};
use gecko_widget::widget::{HomeContent, Widget};

/// Logs go to a daily file; stdout belongs to the TUI.
fn init_logging(paths: &AppPaths, config: &AppConfig, debug: bool) -> anyhow::Result<WorkerGuard> {
    let level = if debug { "debug" } else { config.logging.level.as_str() };
    let appender = tracing_appender::rolling::daily(paths.logs_dir(), &config.logging.file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let directive = format!("gecko_widget={}", level)
        .parse::<Directive>()
        .with_context(|| format!("Invalid log level: {}", level))?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(directive))
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let paths = AppPaths::new()?;
    paths.ensure_dirs_exist()?;

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => AppConfig::load(&paths).await?,
    };

    let _guard = init_logging(&paths, &config, cli.debug)?;
    info!("Starting gecko-widget {}", env!("CARGO_PKG_VERSION"));

    let home = HomeContent::from_config(&config.content).context("Invalid home content")?;
    let mut widget = Widget::new(home);
    if cli.open || config.ui.start_open {
        widget.toggle();
    }

    let theme = if cli.no_color {
        Theme::plain()
    } else {
        Theme::from_name(&config.ui.theme)
    };

    tui::run(widget, config.ui, theme, Arc::new(SystemBrowser)).await?;
    info!("Bye");
    Ok(())
}
