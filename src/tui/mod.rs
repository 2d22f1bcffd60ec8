pub mod app;
pub mod components;
pub mod events;
pub mod theme;

pub use app::App;
pub use events::{Event, EventHandler};
pub use theme::Theme;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, sync::Arc, time::Duration};
use tracing::{error, info};

use crate::app::config::UIConfig;
use crate::error::{Error, Result};
use crate::platform::LinkOpener;
use crate::widget::Widget;

type Backend = CrosstermBackend<io::Stdout>;

fn setup_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode().map_err(|e| Error::terminal(format!("Failed to enable raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().map_err(|e| Error::terminal(format!("Failed to disable raw mode: {}", e)))?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Puts the terminal back before the panic message is printed.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}

/// Runs the widget until the user quits.
pub async fn run(widget: Widget, ui: UIConfig, theme: Theme, opener: Arc<dyn LinkOpener>) -> Result<()> {
    let mut events = EventHandler::new(Duration::from_millis(ui.tick_rate_ms));
    let mut app = App::new(widget, ui, theme, opener, events.sender());

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    info!("Terminal ready");

    let result = event_loop(&mut terminal, &mut app, &mut events).await;

    restore_terminal()?;
    terminal.show_cursor()?;
    if let Err(e) = &result {
        error!("Widget stopped with an error: {}", e);
    }
    result
}

async fn event_loop(
    terminal: &mut Terminal<Backend>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if let Some(event) = events.next().await {
            app.handle_event(event);
        }

        if app.should_quit() {
            info!("Quit requested");
            return Ok(());
        }
    }
}
