use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::{
    components::{truncate, wrap_text, Action, Component},
    Theme,
};
use crate::widget::{Screen, Widget};

pub const TAGLINE: &str = "Get quick help with any questions you have. Let us guide you through all your inquiries and give you the answers you need.";
pub const SPEAKING_WITH: &str = "You are speaking with";

const WINDOW_HINTS: &str = "F2 _  ^W ×";

/// Top of the panel. Shows the banner everywhere except the conversation,
/// where it names the agent instead.
pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    fn lines(widget: &Widget, width: usize, theme: &Theme) -> Vec<Line<'static>> {
        let hints_width = WINDOW_HINTS.chars().count() + 1;
        if widget.container().screen() == Screen::Conversation {
            let (name, initials) = widget.container().speaking_with();
            return vec![
                Line::from(vec![
                    Span::styled("← ", theme.header()),
                    Span::styled(SPEAKING_WITH, theme.header()),
                ]),
                Line::from(vec![
                    Span::styled(format!("({}) ", initials), theme.header()),
                    Span::styled(
                        truncate(name, width.saturating_sub(initials.len() + 3)),
                        theme.header().add_modifier(Modifier::BOLD),
                    ),
                ]),
            ];
        }

        let mut lines = vec![Line::from(Span::styled(
            truncate(widget.home().institution(), width.saturating_sub(hints_width)),
            theme.header().add_modifier(Modifier::BOLD),
        ))];
        for row in wrap_text(TAGLINE, width) {
            lines.push(Line::from(Span::styled(row, theme.header())));
        }
        lines
    }

    /// Rows needed at `width`, borders included.
    pub fn height(widget: &Widget, width: u16) -> u16 {
        let inner = width.saturating_sub(2) as usize;
        Self::lines(widget, inner, &Theme::plain()).len() as u16 + 2
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect, widget: &Widget, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.header())
            .style(theme.header());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = Self::lines(widget, inner.width as usize, theme);
        frame.render_widget(Paragraph::new(lines), inner);
        frame.render_widget(
            Paragraph::new(Span::styled(WINDOW_HINTS, theme.header())).alignment(Alignment::Right),
            Rect { height: 1, ..inner },
        );
    }

    fn handle_key(&mut self, _key: KeyEvent, _widget: &mut Widget) -> Option<Action> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::ContentConfig;
    use crate::widget::{AgentKind, HomeContent};

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.to_string()).collect())
            .collect()
    }

    fn widget() -> Widget {
        Widget::new(HomeContent::from_config(&ContentConfig::default()).unwrap())
    }

    #[test]
    fn test_banner_before_conversation() {
        let widget = widget();
        let lines = text(&Header::lines(&widget, 60, &Theme::default()));
        assert_eq!(lines[0], "Gecko U");
        assert!(lines[1].starts_with("Get quick help"));
    }

    #[test]
    fn test_names_selected_agent() {
        let mut widget = widget();
        let container = widget.container_mut();
        container.update_contact(|f| {
            f.name = "Ada".to_string();
            f.email = "ada@example.com".to_string();
        });
        container.submit_contact();
        container.start_conversation();
        container.select_agent(AgentKind::CampusLifeCoordinator);

        let lines = text(&Header::lines(&widget, 60, &Theme::default()));
        assert_eq!(lines[0], "← You are speaking with");
        assert_eq!(lines[1], "(DC) David Chen");
        assert_eq!(Header::height(&widget, 62), 4);
    }
}
