use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, text::Line, Frame};

use crate::tui::{
    components::{
        form::{button_span, select_lines, ScrollView, TextField},
        Action, Component,
    },
    Theme,
};
use crate::widget::{StudyLevel, Widget};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactFocus {
    Name,
    Email,
    Telephone,
    StudyLevel,
    Submit,
}

impl ContactFocus {
    const ORDER: [ContactFocus; 5] = [
        ContactFocus::Name,
        ContactFocus::Email,
        ContactFocus::Telephone,
        ContactFocus::StudyLevel,
        ContactFocus::Submit,
    ];

    fn step(self, forward: bool) -> Self {
        let index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        let len = Self::ORDER.len();
        let next = if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        };
        Self::ORDER[next]
    }
}

/// The inline contact gate shown until the visitor is verified.
pub struct ContactFormView {
    name: TextField,
    email: TextField,
    telephone: TextField,
    focus: ContactFocus,
    scroll: ScrollView,
}

impl ContactFormView {
    pub fn new() -> Self {
        let mut view = Self {
            name: TextField::new("Name", "Enter your name").required(),
            email: TextField::new("Email address", "Enter your email address").required(),
            telephone: TextField::new("Telephone number", "Enter your telephone number"),
            focus: ContactFocus::Name,
            scroll: ScrollView::new(),
        };
        view.update_focus();
        view
    }

    pub fn focus(&self) -> ContactFocus {
        self.focus
    }

    fn set_focus(&mut self, focus: ContactFocus) {
        self.focus = focus;
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.name.unfocus();
        self.email.unfocus();
        self.telephone.unfocus();
        match self.focus {
            ContactFocus::Name => self.name.focus(),
            ContactFocus::Email => self.email.focus(),
            ContactFocus::Telephone => self.telephone.focus(),
            ContactFocus::StudyLevel | ContactFocus::Submit => {}
        }
    }

    fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            ContactFocus::Name => Some(&mut self.name),
            ContactFocus::Email => Some(&mut self.email),
            ContactFocus::Telephone => Some(&mut self.telephone),
            ContactFocus::StudyLevel | ContactFocus::Submit => None,
        }
    }

    fn write_back(&self, widget: &mut Widget) {
        let name = self.name.value().to_string();
        let email = self.email.value().to_string();
        let telephone = self.telephone.value().to_string();
        widget.container_mut().update_contact(|f| match self.focus {
            ContactFocus::Name => f.name = name,
            ContactFocus::Email => f.email = email,
            ContactFocus::Telephone => f.telephone = telephone,
            ContactFocus::StudyLevel | ContactFocus::Submit => {}
        });
    }

    fn submit(&mut self, widget: &mut Widget) -> Action {
        if widget.container_mut().submit_contact() {
            Action::Status("Thanks! How can we help you today?".to_string())
        } else {
            // Jump to the first field that needs attention
            let first = widget.container().contact().errors().fields().next();
            match first {
                Some("name") => self.set_focus(ContactFocus::Name),
                Some("email") => self.set_focus(ContactFocus::Email),
                _ => {}
            }
            Action::Status("Please fix the highlighted fields".to_string())
        }
    }
}

impl Default for ContactFormView {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ContactFormView {
    fn render(&mut self, frame: &mut Frame, area: Rect, widget: &Widget, theme: &Theme) {
        let contact = widget.container().contact();
        let values = contact.values();
        self.name.sync(&values.name);
        self.email.sync(&values.email);
        self.telephone.sync(&values.telephone);

        let width = area.width;
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut focus_range = 0..0;
        let mut cursor = None;

        let fields = [
            (ContactFocus::Name, &self.name, "name"),
            (ContactFocus::Email, &self.email, "email"),
            (ContactFocus::Telephone, &self.telephone, "telephone"),
        ];
        for (focus, field, key) in fields {
            let start = lines.len();
            lines.extend(field.lines(width, contact.error(key), theme));
            if self.focus == focus {
                focus_range = start..lines.len();
                cursor = Some((start + 1, field.cursor_column(width)));
            }
        }

        let start = lines.len();
        lines.extend(select_lines(
            "Study level",
            values.study_level.map(|level| level.label()),
            "Select your study level",
            self.focus == ContactFocus::StudyLevel,
            theme,
        ));
        if self.focus == ContactFocus::StudyLevel {
            focus_range = start..lines.len();
        }

        let start = lines.len();
        lines.push(Line::from(button_span(
            "Submit",
            self.focus == ContactFocus::Submit,
            theme,
        )));
        if self.focus == ContactFocus::Submit {
            focus_range = start..lines.len();
        }

        self.scroll
            .render(frame, area, lines, focus_range, cursor, theme.normal());
    }

    fn handle_key(&mut self, key: KeyEvent, widget: &mut Widget) -> Option<Action> {
        if let Some(field) = self.focused_field() {
            if field.handle_key(key) {
                self.write_back(widget);
                return Some(Action::Consumed);
            }
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.set_focus(self.focus.step(true));
                Some(Action::Consumed)
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.set_focus(self.focus.step(false));
                Some(Action::Consumed)
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
                if self.focus == ContactFocus::StudyLevel =>
            {
                let forward = key.code != KeyCode::Left;
                widget.container_mut().update_contact(|f| {
                    f.study_level = StudyLevel::cycle(f.study_level, forward);
                });
                Some(Action::Consumed)
            }
            KeyCode::Enter => Some(self.submit(widget)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::ContentConfig;
    use crate::widget::{FormPhase, HomeContent};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(view: &mut ContactFormView, widget: &mut Widget, text: &str) {
        for c in text.chars() {
            view.handle_key(key(KeyCode::Char(c)), widget);
        }
    }

    fn widget() -> Widget {
        Widget::new(HomeContent::from_config(&ContentConfig::default()).unwrap())
    }

    #[test]
    fn test_typing_updates_the_form() {
        let mut widget = widget();
        let mut view = ContactFormView::new();
        type_text(&mut view, &mut widget, "Ada");
        view.handle_key(key(KeyCode::Tab), &mut widget);
        type_text(&mut view, &mut widget, "ada@example.com");

        let values = widget.container().contact().values();
        assert_eq!(values.name, "Ada");
        assert_eq!(values.email, "ada@example.com");
    }

    #[test]
    fn test_enter_with_errors_focuses_first_bad_field() {
        let mut widget = widget();
        let mut view = ContactFormView::new();
        view.handle_key(key(KeyCode::Tab), &mut widget);
        type_text(&mut view, &mut widget, "ada@example.com");

        let action = view.handle_key(key(KeyCode::Enter), &mut widget);
        assert_eq!(action, Some(Action::Status("Please fix the highlighted fields".to_string())));
        assert_eq!(view.focus(), ContactFocus::Name);
        assert_eq!(widget.container().phase(), FormPhase::Form);
    }

    #[test]
    fn test_study_level_select() {
        let mut widget = widget();
        let mut view = ContactFormView::new();
        for _ in 0..3 {
            view.handle_key(key(KeyCode::Down), &mut widget);
        }
        assert_eq!(view.focus(), ContactFocus::StudyLevel);

        view.handle_key(key(KeyCode::Right), &mut widget);
        view.handle_key(key(KeyCode::Right), &mut widget);
        assert_eq!(
            widget.container().contact().values().study_level,
            Some(StudyLevel::Postgraduate)
        );
        view.handle_key(key(KeyCode::Left), &mut widget);
        assert_eq!(
            widget.container().contact().values().study_level,
            Some(StudyLevel::Undergraduate)
        );
    }

    #[test]
    fn test_successful_submit() {
        let mut widget = widget();
        let mut view = ContactFormView::new();
        type_text(&mut view, &mut widget, "Ada");
        view.handle_key(key(KeyCode::Down), &mut widget);
        type_text(&mut view, &mut widget, "ada@example.com");

        assert!(matches!(
            view.handle_key(key(KeyCode::Enter), &mut widget),
            Some(Action::Status(_))
        ));
        assert_eq!(widget.container().phase(), FormPhase::Verified);
    }
}
