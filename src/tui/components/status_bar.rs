use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::{
    components::{truncate, Action, Component},
    Theme,
};
use crate::widget::{Screen, Widget};

#[derive(Clone, Debug, PartialEq)]
pub struct KeyHint {
    pub key: &'static str,
    pub description: &'static str,
}

impl KeyHint {
    const fn new(key: &'static str, description: &'static str) -> Self {
        Self { key, description }
    }
}

pub struct StatusBar {
    status_message: String,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            status_message: "Ready".to_string(),
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    pub fn status(&self) -> &str {
        &self.status_message
    }

    /// Hints for whatever currently has the keyboard.
    pub fn key_hints(widget: &Widget) -> Vec<KeyHint> {
        let mut hints = Vec::new();
        if !widget.is_open() {
            hints.push(KeyHint::new("F2", "Open chat"));
        } else if widget.event_dialog().is_open() {
            hints.extend([
                KeyHint::new("Tab", "Next field"),
                KeyHint::new("Space", "Toggle"),
                KeyHint::new("Enter", "Reserve"),
                KeyHint::new("Esc", "Cancel"),
            ]);
        } else {
            match widget.container().screen() {
                Screen::ContactForm => hints.extend([
                    KeyHint::new("Tab", "Next field"),
                    KeyHint::new("←/→", "Study level"),
                    KeyHint::new("Enter", "Submit"),
                ]),
                Screen::Home => hints.extend([
                    KeyHint::new("↑/↓", "Select"),
                    KeyHint::new("Enter", "Open"),
                ]),
                Screen::AgentSelection => hints.extend([
                    KeyHint::new("1-4", "Pick agent"),
                    KeyHint::new("Esc", "Back"),
                ]),
                Screen::Conversation => hints.extend([
                    KeyHint::new("Enter", "Send"),
                    KeyHint::new("PgUp/PgDn", "Scroll"),
                    KeyHint::new("Esc", "Back"),
                ]),
            }
            hints.push(KeyHint::new("F2", "Minimise"));
        }
        hints.push(KeyHint::new("Ctrl+Q", "Quit"));
        hints
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect, widget: &Widget, theme: &Theme) {
        let mut spans = Vec::new();
        for (index, hint) in Self::key_hints(widget).iter().enumerate() {
            if index > 0 {
                spans.push(Span::styled(" | ", theme.border()));
            }
            spans.push(Span::styled(hint.key, theme.primary()));
            spans.push(Span::styled(format!(" {}", hint.description), theme.muted()));
        }
        let hints_width: usize = spans.iter().map(|s| s.width()).sum();

        let status_width = (area.width as usize).saturating_sub(hints_width + 3);
        let status = truncate(&self.status_message, status_width);

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(status, theme.normal())))
                .alignment(Alignment::Left)
                .style(theme.page()),
            area,
        );
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Right),
            area,
        );
    }

    fn handle_key(&mut self, _key: KeyEvent, _widget: &mut Widget) -> Option<Action> {
        None // Status bar doesn't handle keys
    }
}
