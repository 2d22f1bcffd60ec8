use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    Frame,
};

use crate::tui::{
    components::{
        form::{button_span, ScrollView},
        wrap_text, Action, Component,
    },
    Theme,
};
use crate::widget::{HomeAction, HomeOutcome, Widget};

/// Home tab: a vertical list of cards and links.
pub struct HomeView {
    selected: usize,
    scroll: ScrollView,
}

impl HomeView {
    pub fn new() -> Self {
        Self {
            selected: 0,
            scroll: ScrollView::new(),
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    fn icon(action: HomeAction) -> &'static str {
        match action {
            HomeAction::StartConversation => "➤",
            HomeAction::PlayVideo => "▶",
            HomeAction::OpenLink(_) => "↗",
            HomeAction::SubmitApplication | HomeAction::RegisterForOpenDay => "",
        }
    }
}

impl Default for HomeView {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for HomeView {
    fn render(&mut self, frame: &mut Frame, area: Rect, widget: &Widget, theme: &Theme) {
        let items = widget.home().items();
        self.selected = self.selected.min(items.len().saturating_sub(1));

        let width = area.width.saturating_sub(2) as usize;
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut focus_range = 0..0;

        for (index, item) in items.iter().enumerate() {
            let is_selected = index == self.selected;
            let start = lines.len();

            let marker = if is_selected {
                Span::styled("▌ ", theme.focused())
            } else {
                Span::raw("  ")
            };
            let title_style = if is_selected {
                theme.focused()
            } else {
                theme.title()
            };
            let mut title = vec![
                marker.clone(),
                Span::styled(item.title.clone(), title_style.add_modifier(Modifier::BOLD)),
            ];
            let icon = Self::icon(item.action);
            if !icon.is_empty() {
                title.push(Span::raw(" "));
                title.push(Span::styled(icon, theme.primary()));
            }
            lines.push(Line::from(title));

            if let Some(body) = &item.body {
                for row in wrap_text(body, width.saturating_sub(2)) {
                    lines.push(Line::from(vec![marker.clone(), Span::styled(row, theme.muted())]));
                }
            }
            if let Some(button) = &item.button {
                lines.push(Line::from(vec![
                    marker.clone(),
                    button_span(button, is_selected, theme),
                ]));
            }
            if is_selected {
                focus_range = start..lines.len() + 1;
            }
            lines.push(Line::from(""));
        }

        self.scroll
            .render(frame, area, lines, focus_range, None, theme.normal());
    }

    fn handle_key(&mut self, key: KeyEvent, widget: &mut Widget) -> Option<Action> {
        let count = widget.home().items().len();
        if count == 0 {
            return None;
        }

        match key.code {
            KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => {
                self.selected = (self.selected + 1) % count;
                Some(Action::Consumed)
            }
            KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => {
                self.selected = (self.selected + count - 1) % count;
                Some(Action::Consumed)
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.selected = 0;
                Some(Action::Consumed)
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = count - 1;
                Some(Action::Consumed)
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let action = widget.home().items().get(self.selected)?.action;
                Some(match widget.activate(action) {
                    HomeOutcome::Navigated => Action::Consumed,
                    HomeOutcome::OpenUrl(url) => Action::OpenUrl(url),
                    HomeOutcome::Notice(message) => Action::Status(message),
                })
            }
            _ => None,
        }
    }
}
