use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::{
    components::{form::TextField, wrap_text, Action, Component},
    Theme,
};
use crate::widget::{ChatMessage, Widget};

/// Transcript plus composer for the selected agent.
pub struct ConversationView {
    composer: TextField,
    auto_scroll: bool,
    scroll_offset: usize,
}

impl ConversationView {
    pub fn new() -> Self {
        let mut composer = TextField::new("Message", "Type your message...");
        composer.focus();
        Self {
            composer,
            auto_scroll: true,
            scroll_offset: 0,
        }
    }

    pub fn scroll_up(&mut self) {
        if self.scroll_offset > 0 {
            self.scroll_offset -= 1;
            self.auto_scroll = false;
        }
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset += 1;
        // Render re-enables auto scroll once the bottom is reached
        self.auto_scroll = false;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = usize::MAX; // Will be clamped in render
        self.auto_scroll = true;
    }

    fn format_timestamp(message: &ChatMessage) -> String {
        message
            .sent_at
            .with_timezone(&chrono::Local)
            .format("%H:%M")
            .to_string()
    }

    fn message_lines(widget: &Widget, width: usize, theme: &Theme) -> Vec<Line<'static>> {
        let (agent_name, initials) = widget.container().speaking_with();
        let bubble_width = (width * 4 / 5).max(10);
        let mut lines = Vec::new();

        for message in widget.container().messages() {
            let timestamp = Self::format_timestamp(message);
            if message.is_user() {
                lines.push(
                    Line::from(Span::styled(format!("You · {}", timestamp), theme.muted()))
                        .alignment(Alignment::Right),
                );
                for row in wrap_text(&message.content, bubble_width.saturating_sub(2)) {
                    lines.push(
                        Line::from(Span::styled(format!(" {} ", row), theme.user_bubble()))
                            .alignment(Alignment::Right),
                    );
                }
            } else {
                lines.push(Line::from(vec![
                    Span::styled(format!("({}) ", initials), theme.primary()),
                    Span::styled(agent_name, theme.title()),
                    Span::styled(format!(" · {}", timestamp), theme.muted()),
                ]));
                for row in wrap_text(&message.content, bubble_width.saturating_sub(2)) {
                    lines.push(Line::from(Span::styled(format!(" {} ", row), theme.agent_bubble())));
                }
            }
            lines.push(Line::from(""));
        }
        lines
    }
}

impl Default for ConversationView {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ConversationView {
    fn render(&mut self, frame: &mut Frame, area: Rect, widget: &Widget, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(2)])
            .split(area);

        let transcript_area = chunks[0];
        let content_height = transcript_area.height as usize;
        let all_lines = Self::message_lines(widget, transcript_area.width as usize, theme);

        let total_lines = all_lines.len();
        let max_scroll = total_lines.saturating_sub(content_height);
        if self.auto_scroll || self.scroll_offset >= max_scroll {
            self.scroll_offset = max_scroll;
            self.auto_scroll = true;
        }

        let visible: Vec<Line> = all_lines
            .into_iter()
            .skip(self.scroll_offset)
            .take(content_height)
            .collect();
        frame.render_widget(Paragraph::new(visible).style(theme.normal()), transcript_area);

        self.composer.sync(widget.container().draft());
        let composer_area = chunks[1];
        let composer = Paragraph::new(self.composer.value_line(composer_area.width, theme))
            .block(Block::default().borders(Borders::TOP).border_style(theme.border()))
            .style(theme.normal());
        frame.render_widget(composer, composer_area);
        frame.set_cursor(
            composer_area.x + self.composer.cursor_column(composer_area.width),
            composer_area.y + 1,
        );
    }

    fn handle_key(&mut self, key: KeyEvent, widget: &mut Widget) -> Option<Action> {
        if self.composer.handle_key(key) {
            widget.container_mut().set_draft(self.composer.value());
            return Some(Action::Consumed);
        }

        match key.code {
            KeyCode::Enter => {
                if widget.container_mut().send_message() {
                    self.composer.sync("");
                    self.scroll_to_bottom();
                }
                Some(Action::Consumed)
            }
            KeyCode::Up => {
                self.scroll_up();
                Some(Action::Consumed)
            }
            KeyCode::Down => {
                self.scroll_down();
                Some(Action::Consumed)
            }
            KeyCode::PageUp => {
                for _ in 0..10 {
                    self.scroll_up();
                }
                Some(Action::Consumed)
            }
            KeyCode::PageDown => {
                for _ in 0..10 {
                    self.scroll_down();
                }
                Some(Action::Consumed)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::ContentConfig;
    use crate::widget::{AgentKind, Author, HomeContent};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn chatting_widget() -> Widget {
        let mut widget = Widget::new(HomeContent::from_config(&ContentConfig::default()).unwrap());
        let container = widget.container_mut();
        container.update_contact(|f| {
            f.name = "Ada".to_string();
            f.email = "ada@example.com".to_string();
        });
        container.submit_contact();
        container.start_conversation();
        container.select_agent(AgentKind::AcademicAdvisor);
        widget
    }

    #[test]
    fn test_typing_and_sending() {
        let mut widget = chatting_widget();
        let mut view = ConversationView::new();
        for c in "Hello".chars() {
            view.handle_key(key(KeyCode::Char(c)), &mut widget);
        }
        assert_eq!(widget.container().draft(), "Hello");

        view.handle_key(key(KeyCode::Enter), &mut widget);
        let messages = widget.container().messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].author, Author::User);
        assert_eq!(messages[1].content, "Hello");
        assert_eq!(view.composer.value(), "");
    }

    #[test]
    fn test_blank_send_keeps_composer() {
        let mut widget = chatting_widget();
        let mut view = ConversationView::new();
        for _ in 0..3 {
            view.handle_key(key(KeyCode::Char(' ')), &mut widget);
        }
        view.handle_key(key(KeyCode::Enter), &mut widget);
        assert_eq!(widget.container().messages().len(), 1);
        assert_eq!(view.composer.value(), "   ");
    }

    #[test]
    fn test_message_lines_show_agent_and_user() {
        let mut widget = chatting_widget();
        widget.container_mut().set_draft("Hi Sarah");
        widget.container_mut().send_message();

        let lines = ConversationView::message_lines(&widget, 40, &Theme::default());
        let text: Vec<String> = lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.to_string()).collect())
            .collect();
        assert!(text[0].starts_with("(SA) Sarah Anderson"));
        assert!(text.iter().any(|l| l.trim() == "Hi Sarah"));
    }
}
