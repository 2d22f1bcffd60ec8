use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear},
    Frame,
};

use crate::tui::{
    components::{
        form::{button_span, checkbox_line, error_line, label_line, select_lines, ScrollView, TextField},
        wrap_text, Action, Component,
    },
    Theme,
};
use crate::widget::{event, EventRegistration, Interest, StudyLevel, Widget};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TextSlot {
    FirstName,
    LastName,
    Email,
    Phone,
    CurrentSchool,
    Dietary,
    AdditionalInfo,
}

impl TextSlot {
    fn key(self) -> &'static str {
        match self {
            TextSlot::FirstName => "first_name",
            TextSlot::LastName => "last_name",
            TextSlot::Email => "email",
            TextSlot::Phone => "phone",
            TextSlot::CurrentSchool => "current_school",
            TextSlot::Dietary => "dietary_requirements",
            TextSlot::AdditionalInfo => "additional_info",
        }
    }

    fn value(self, form: &EventRegistration) -> &str {
        match self {
            TextSlot::FirstName => &form.first_name,
            TextSlot::LastName => &form.last_name,
            TextSlot::Email => &form.email,
            TextSlot::Phone => &form.phone,
            TextSlot::CurrentSchool => &form.current_school,
            TextSlot::Dietary => &form.dietary_requirements,
            TextSlot::AdditionalInfo => &form.additional_info,
        }
    }

    fn store(self, form: &mut EventRegistration, value: String) {
        match self {
            TextSlot::FirstName => form.first_name = value,
            TextSlot::LastName => form.last_name = value,
            TextSlot::Email => form.email = value,
            TextSlot::Phone => form.phone = value,
            TextSlot::CurrentSchool => form.current_school = value,
            TextSlot::Dietary => form.dietary_requirements = value,
            TextSlot::AdditionalInfo => form.additional_info = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventFocus {
    Text(usize),
    StudyLevel,
    Interest(usize),
    Cancel,
    Submit,
}

/// Modal registration form for the open day.
pub struct EventDialogView {
    fields: Vec<(TextSlot, TextField)>,
    focus_index: usize,
    scroll: ScrollView,
}

impl EventDialogView {
    pub fn new() -> Self {
        let fields = vec![
            (TextSlot::FirstName, TextField::new("First name", "Enter your first name").required()),
            (TextSlot::LastName, TextField::new("Last name", "Enter your last name").required()),
            (TextSlot::Email, TextField::new("Email address", "Enter your email address").required()),
            (TextSlot::Phone, TextField::new("Phone number", "Enter your phone number")),
            (TextSlot::CurrentSchool, TextField::new("Current school/institution", "Your current school")),
            (TextSlot::Dietary, TextField::new("Dietary requirements", "Any dietary restrictions or preferences")),
            (TextSlot::AdditionalInfo, TextField::new("Additional information", "Any special requirements or questions")),
        ];
        let mut view = Self {
            fields,
            focus_index: 0,
            scroll: ScrollView::new(),
        };
        view.update_focus();
        view
    }

    /// Tab order: names, contact, school, level, interests, the two free
    /// text fields, then the buttons.
    fn order() -> Vec<EventFocus> {
        let mut order: Vec<EventFocus> = (0..5).map(EventFocus::Text).collect();
        order.push(EventFocus::StudyLevel);
        order.extend((0..Interest::ALL.len()).map(EventFocus::Interest));
        order.push(EventFocus::Text(5));
        order.push(EventFocus::Text(6));
        order.push(EventFocus::Cancel);
        order.push(EventFocus::Submit);
        order
    }

    pub fn focus(&self) -> EventFocus {
        Self::order()[self.focus_index]
    }

    fn step(&mut self, forward: bool) {
        let len = Self::order().len();
        self.focus_index = if forward {
            (self.focus_index + 1) % len
        } else {
            (self.focus_index + len - 1) % len
        };
        self.update_focus();
    }

    fn set_focus(&mut self, focus: EventFocus) {
        if let Some(index) = Self::order().iter().position(|f| *f == focus) {
            self.focus_index = index;
            self.update_focus();
        }
    }

    fn update_focus(&mut self) {
        let focus = self.focus();
        for (index, (_, field)) in self.fields.iter_mut().enumerate() {
            if focus == EventFocus::Text(index) {
                field.focus();
            } else {
                field.unfocus();
            }
        }
    }

    fn reset(&mut self) {
        self.focus_index = 0;
        self.scroll.reset();
        self.update_focus();
    }

    fn submit(&mut self, widget: &mut Widget) -> Action {
        if widget.event_dialog_mut().submit() {
            self.reset();
            return Action::Status("Your place is reserved. See you on the 5th of August!".to_string());
        }

        let first = widget.event_dialog().form().errors().fields().next();
        if let Some(first) = first {
            if first == "interests" {
                self.set_focus(EventFocus::Interest(0));
            } else if let Some(index) = self.fields.iter().position(|(slot, _)| slot.key() == first) {
                self.set_focus(EventFocus::Text(index));
            }
        }
        Action::Status("Please fix the highlighted fields".to_string())
    }

    fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    fn details_lines(width: usize, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = wrap_text(event::DESCRIPTION, width)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, theme.muted())))
            .collect();
        lines.push(Line::from(""));
        for (icon, text) in [
            ("▣", event::DATE),
            ("◷", event::TIME),
            ("⌖", event::LOCATION),
            ("☺", event::SPOTS),
        ] {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", icon), theme.primary()),
                Span::styled(text, theme.title()),
            ]));
        }
        lines.push(Line::from(""));
        lines
    }
}

impl Default for EventDialogView {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for EventDialogView {
    fn render(&mut self, frame: &mut Frame, area: Rect, widget: &Widget, theme: &Theme) {
        let dialog = widget.event_dialog();
        if !dialog.is_open() {
            return;
        }

        let popup_area = Self::centered_rect(70, 90, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.primary())
            .title(format!(" {} - Esc to cancel ", event::TITLE))
            .style(theme.normal());
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let form = dialog.form();
        let values = form.values();
        for (slot, field) in self.fields.iter_mut() {
            field.sync(slot.value(values));
        }

        let focus = self.focus();
        let width = inner.width;
        let mut lines = Self::details_lines(width as usize, theme);
        let mut focus_range = 0..0;
        let mut cursor = None;
        let last_interest = Interest::ALL.len() - 1;

        for stop in Self::order() {
            let start = lines.len();
            match stop {
                EventFocus::Text(index) => {
                    let (slot, field) = &self.fields[index];
                    lines.extend(field.lines(width, form.error(slot.key()), theme));
                    if focus == stop {
                        cursor = Some((start + 1, field.cursor_column(width)));
                    }
                }
                EventFocus::StudyLevel => {
                    lines.extend(select_lines(
                        "Study level",
                        values.study_level.map(|level| level.label()),
                        "Select level",
                        focus == stop,
                        theme,
                    ));
                }
                EventFocus::Interest(index) => {
                    if index == 0 {
                        let any_focused = matches!(focus, EventFocus::Interest(_));
                        lines.push(label_line("Interests", true, any_focused, theme));
                    }
                    let interest = Interest::ALL[index];
                    lines.push(checkbox_line(
                        interest.label(),
                        values.has_interest(interest),
                        focus == stop,
                        theme,
                    ));
                    if index == last_interest {
                        lines.push(error_line(form.error("interests"), theme));
                    }
                }
                // Both buttons share the row emitted for Submit
                EventFocus::Cancel => continue,
                EventFocus::Submit => {
                    lines.push(Line::from(vec![
                        button_span(event::CANCEL_LABEL, focus == EventFocus::Cancel, theme),
                        Span::raw("  "),
                        button_span(event::SUBMIT_LABEL, focus == EventFocus::Submit, theme),
                    ]));
                    if focus == EventFocus::Cancel {
                        focus_range = start..lines.len();
                    }
                }
            }
            if focus == stop {
                focus_range = start..lines.len();
            }
        }

        self.scroll
            .render(frame, inner, lines, focus_range, cursor, theme.normal());
    }

    fn handle_key(&mut self, key: KeyEvent, widget: &mut Widget) -> Option<Action> {
        if !widget.event_dialog().is_open() {
            return None;
        }

        let focus = self.focus();
        if let EventFocus::Text(index) = focus {
            let (slot, field) = &mut self.fields[index];
            if field.handle_key(key) {
                let value = field.value().to_string();
                let slot = *slot;
                widget.event_dialog_mut().update(|f| slot.store(f, value));
                return Some(Action::Consumed);
            }
        }

        match (key.code, focus) {
            (KeyCode::Esc, _) | (KeyCode::Enter, EventFocus::Cancel) => {
                widget.event_dialog_mut().cancel();
                Some(Action::Status("Registration cancelled".to_string()))
            }
            (KeyCode::Tab | KeyCode::Down, _) => {
                self.step(true);
                Some(Action::Consumed)
            }
            (KeyCode::BackTab | KeyCode::Up, _) => {
                self.step(false);
                Some(Action::Consumed)
            }
            (KeyCode::Left | KeyCode::Right | KeyCode::Char(' '), EventFocus::StudyLevel) => {
                let forward = key.code != KeyCode::Left;
                widget
                    .event_dialog_mut()
                    .update(|f| f.study_level = StudyLevel::cycle(f.study_level, forward));
                Some(Action::Consumed)
            }
            (KeyCode::Char(' ') | KeyCode::Enter, EventFocus::Interest(index)) => {
                if let Some(interest) = Interest::ALL.get(index) {
                    widget.event_dialog_mut().toggle_interest(*interest);
                }
                Some(Action::Consumed)
            }
            (KeyCode::Left, EventFocus::Submit) => {
                self.set_focus(EventFocus::Cancel);
                Some(Action::Consumed)
            }
            (KeyCode::Right, EventFocus::Cancel) => {
                self.set_focus(EventFocus::Submit);
                Some(Action::Consumed)
            }
            (KeyCode::Enter, _) => Some(self.submit(widget)),
            // Consume all other keys while the modal is up
            _ => Some(Action::Consumed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::ContentConfig;
    use crate::widget::HomeContent;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(view: &mut EventDialogView, widget: &mut Widget, text: &str) {
        for c in text.chars() {
            view.handle_key(key(KeyCode::Char(c)), widget);
        }
    }

    fn open_widget() -> Widget {
        let mut widget = Widget::new(HomeContent::from_config(&ContentConfig::default()).unwrap());
        widget.event_dialog_mut().open();
        widget
    }

    fn fill_required_text(view: &mut EventDialogView, widget: &mut Widget) {
        type_text(view, widget, "A");
        view.handle_key(key(KeyCode::Tab), widget);
        type_text(view, widget, "B");
        view.handle_key(key(KeyCode::Tab), widget);
        type_text(view, widget, "a@b.com");
    }

    #[test]
    fn test_missing_interest_moves_focus_to_interests() {
        let mut widget = open_widget();
        let mut view = EventDialogView::new();
        fill_required_text(&mut view, &mut widget);

        view.handle_key(key(KeyCode::Enter), &mut widget);
        assert!(widget.event_dialog().is_open());
        assert_eq!(view.focus(), EventFocus::Interest(0));
        assert!(widget.event_dialog().form().error("interests").is_some());
    }

    #[test]
    fn test_full_registration() {
        let mut widget = open_widget();
        let mut view = EventDialogView::new();
        fill_required_text(&mut view, &mut widget);

        view.set_focus(EventFocus::Interest(0));
        view.handle_key(key(KeyCode::Char(' ')), &mut widget);
        assert_eq!(widget.event_dialog().form().values().interests, vec![Interest::OpenDay]);

        view.set_focus(EventFocus::Submit);
        assert!(matches!(
            view.handle_key(key(KeyCode::Enter), &mut widget),
            Some(Action::Status(_))
        ));
        assert!(!widget.event_dialog().is_open());
        assert_eq!(widget.event_dialog().form().values(), &EventRegistration::default());
        assert_eq!(view.focus(), EventFocus::Text(0));
    }

    #[test]
    fn test_escape_cancels_without_reset() {
        let mut widget = open_widget();
        let mut view = EventDialogView::new();
        type_text(&mut view, &mut widget, "A");

        view.handle_key(key(KeyCode::Esc), &mut widget);
        assert!(!widget.event_dialog().is_open());
        assert_eq!(widget.event_dialog().form().values().first_name, "A");
        assert_eq!(view.handle_key(key(KeyCode::Char('x')), &mut widget), None);
    }

    #[test]
    fn test_tab_order_ends_on_buttons() {
        let mut view = EventDialogView::new();
        let mut widget = open_widget();
        let stops = EventDialogView::order().len();
        for _ in 0..stops - 1 {
            view.handle_key(key(KeyCode::Tab), &mut widget);
        }
        assert_eq!(view.focus(), EventFocus::Submit);
        view.handle_key(key(KeyCode::Left), &mut widget);
        assert_eq!(view.focus(), EventFocus::Cancel);
        view.handle_key(key(KeyCode::Enter), &mut widget);
        assert!(!widget.event_dialog().is_open());
    }
}
