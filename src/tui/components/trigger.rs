use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::{
    components::{Action, Component},
    Theme,
};
use crate::widget::Widget;

/// The floating button docked under the panel.
pub struct Trigger;

impl Trigger {
    pub fn new() -> Self {
        Self
    }

    pub fn is_toggle_key(key: &KeyEvent) -> bool {
        matches!(
            (key.code, key.modifiers),
            (KeyCode::F(2), _) | (KeyCode::Char('o'), KeyModifiers::CONTROL)
        )
    }
}

impl Default for Trigger {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Trigger {
    fn render(&mut self, frame: &mut Frame, area: Rect, widget: &Widget, theme: &Theme) {
        let icon = if widget.is_open() { "⌄" } else { "✉" };
        let line = Line::from(vec![
            Span::styled(format!("{} ", icon), theme.header()),
            Span::styled(widget.trigger_label(), theme.header()),
        ]);
        let button = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.primary())
                    .style(theme.header()),
            );
        frame.render_widget(button, area);
    }

    fn handle_key(&mut self, key: KeyEvent, widget: &mut Widget) -> Option<Action> {
        if Self::is_toggle_key(&key) {
            widget.toggle();
            return Some(Action::Consumed);
        }
        None
    }
}
