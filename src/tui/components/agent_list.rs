use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    Frame,
};

use crate::tui::{
    components::{form::ScrollView, wrap_text, Action, Component},
    Theme,
};
use crate::widget::{AgentKind, Widget};

pub const HEADING: &str = "What can we help you with today?";
pub const SUBHEADING: &str =
    "Our agents specialise in particular topics, choose the topic you'd like to discuss with us.";

pub struct AgentList {
    selected: usize,
    scroll: ScrollView,
}

impl AgentList {
    pub fn new() -> Self {
        Self {
            selected: 0,
            scroll: ScrollView::new(),
        }
    }

    pub fn selected(&self) -> AgentKind {
        AgentKind::at(self.selected).unwrap_or(AgentKind::AcademicAdvisor)
    }
}

impl Default for AgentList {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for AgentList {
    fn render(&mut self, frame: &mut Frame, area: Rect, _widget: &Widget, theme: &Theme) {
        let width = area.width.saturating_sub(2) as usize;
        let mut lines: Vec<Line<'static>> = vec![Line::from(vec![
            Span::styled("← ", theme.muted()),
            Span::styled(HEADING, theme.title()),
        ])];
        for row in wrap_text(SUBHEADING, width) {
            lines.push(Line::from(Span::styled(row, theme.muted())));
        }
        lines.push(Line::from(""));

        let mut focus_range = 0..0;
        for (index, kind) in AgentKind::ALL.iter().enumerate() {
            let agent = kind.profile();
            let is_selected = index == self.selected;
            let marker = if is_selected {
                Span::styled("▌ ", theme.focused())
            } else {
                Span::raw("  ")
            };
            let name_style = if is_selected {
                theme.focused()
            } else {
                theme.title()
            };

            let start = lines.len();
            lines.push(Line::from(vec![
                marker.clone(),
                Span::styled(format!("({}) ", agent.fallback), theme.primary()),
                Span::styled(agent.name, name_style),
                Span::styled(" ●", theme.success()),
            ]));
            lines.push(Line::from(vec![
                marker.clone(),
                Span::styled(format!("     {}", agent.role), theme.muted()),
            ]));
            for row in wrap_text(agent.description, width.saturating_sub(7)) {
                lines.push(Line::from(vec![
                    marker.clone(),
                    Span::raw("     "),
                    Span::styled(row, theme.muted()),
                ]));
            }
            lines.push(Line::from(""));
            if is_selected {
                focus_range = start..lines.len();
            }
        }

        self.scroll
            .render(frame, area, lines, focus_range, None, theme.normal());
    }

    fn handle_key(&mut self, key: KeyEvent, widget: &mut Widget) -> Option<Action> {
        let count = AgentKind::ALL.len();
        match key.code {
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => {
                self.selected = (self.selected + 1) % count;
                Some(Action::Consumed)
            }
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => {
                self.selected = (self.selected + count - 1) % count;
                Some(Action::Consumed)
            }
            KeyCode::Char(c @ '1'..='4') => {
                self.selected = c as usize - '1' as usize;
                widget.container_mut().select_agent(self.selected());
                Some(Action::Consumed)
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                widget.container_mut().select_agent(self.selected());
                Some(Action::Consumed)
            }
            KeyCode::Backspace | KeyCode::Left => {
                widget.container_mut().back();
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
    use crate::widget::{HomeContent, Screen};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn selecting_widget() -> Widget {
        let mut widget = Widget::new(HomeContent::from_config(&ContentConfig::default()).unwrap());
        widget.container_mut().update_contact(|f| {
            f.name = "Ada".to_string();
            f.email = "ada@example.com".to_string();
        });
        widget.container_mut().submit_contact();
        widget.container_mut().start_conversation();
        widget
    }

    #[test]
    fn test_enter_picks_highlighted_agent() {
        let mut widget = selecting_widget();
        let mut list = AgentList::new();
        list.handle_key(key(KeyCode::Down), &mut widget);
        list.handle_key(key(KeyCode::Down), &mut widget);
        assert_eq!(list.selected(), AgentKind::FinancialAidCounselor);

        list.handle_key(key(KeyCode::Enter), &mut widget);
        assert_eq!(widget.container().screen(), Screen::Conversation);
        assert_eq!(
            widget.container().messages()[0].content,
            AgentKind::FinancialAidCounselor.profile().greeting
        );
    }

    #[test]
    fn test_number_shortcut() {
        let mut widget = selecting_widget();
        let mut list = AgentList::new();
        list.handle_key(key(KeyCode::Char('4')), &mut widget);
        assert_eq!(
            widget.container().selected_agent(),
            Some(AgentKind::CampusLifeCoordinator.profile())
        );
    }

    #[test]
    fn test_back_key() {
        let mut widget = selecting_widget();
        let mut list = AgentList::new();
        list.handle_key(key(KeyCode::Backspace), &mut widget);
        assert_eq!(widget.container().screen(), Screen::Home);
    }
}
