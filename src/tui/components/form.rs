use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::ops::Range;
use tui_input::{backend::crossterm::EventHandler, Input};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::Theme;

const PROMPT: &str = "› ";

/// Single-line text input with a label row and an error row.
#[derive(Debug, Clone)]
pub struct TextField {
    input: Input,
    label: &'static str,
    placeholder: &'static str,
    required: bool,
    is_focused: bool,
}

impl TextField {
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            input: Input::default(),
            label,
            placeholder,
            required: false,
            is_focused: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Pulls in a value changed elsewhere, e.g. after a form reset.
    pub fn sync(&mut self, value: &str) {
        if self.input.value() != value {
            self.input = Input::new(value.to_string());
        }
    }

    pub fn focus(&mut self) {
        self.is_focused = true;
    }

    pub fn unfocus(&mut self) {
        self.is_focused = false;
    }

    /// Returns true when the key was used for editing. Navigation keys are
    /// left to the owning form.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.is_focused {
            return false;
        }
        match key.code {
            KeyCode::Enter
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Esc
            | KeyCode::F(_) => false,
            _ => {
                // Let global hotkeys pass through
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(KeyModifiers::ALT)
                {
                    return false;
                }
                self.input.handle_event(&CrosstermEvent::Key(key));
                true
            }
        }
    }

    fn available(width: usize) -> usize {
        width.saturating_sub(PROMPT.width() + 1)
    }

    /// Cells scrolled off the left edge so the cursor stays in view.
    fn scroll_offset(&self, width: usize) -> usize {
        let available = Self::available(width);
        let cursor = self.input.visual_cursor();
        if cursor >= available {
            cursor - available + 1
        } else {
            0
        }
    }

    /// The slice of the value that fits, measured in cells, and the cell
    /// it starts at. A wide char cut by the left edge is dropped whole.
    fn visible(&self, width: usize) -> (usize, String) {
        let offset = self.scroll_offset(width);
        let available = Self::available(width);

        let mut start = None;
        let mut position = 0;
        let mut visible = String::new();
        for ch in self.input.value().chars() {
            let cells = ch.width().unwrap_or(0);
            if position >= offset {
                let first = *start.get_or_insert(position);
                if position + cells > first + available {
                    break;
                }
                visible.push(ch);
            }
            position += cells;
        }
        (start.unwrap_or(position), visible)
    }

    /// The prompt plus the visible slice of the value.
    pub fn value_line(&self, width: u16, theme: &Theme) -> Line<'static> {
        let prompt_style = if self.is_focused {
            theme.focused()
        } else {
            theme.border()
        };

        if self.input.value().is_empty() {
            return Line::from(vec![
                Span::styled(PROMPT, prompt_style),
                Span::styled(self.placeholder.to_string(), theme.muted()),
            ]);
        }

        let (_, visible) = self.visible(width as usize);
        Line::from(vec![
            Span::styled(PROMPT, prompt_style),
            Span::styled(visible, Style::default()),
        ])
    }

    /// Label, value and error rows.
    pub fn lines(&self, width: u16, error: Option<&str>, theme: &Theme) -> Vec<Line<'static>> {
        vec![
            label_line(self.label, self.required, self.is_focused, theme),
            self.value_line(width, theme),
            error_line(error, theme),
        ]
    }

    /// Cursor column relative to the field's left edge.
    pub fn cursor_column(&self, width: u16) -> u16 {
        let (start, _) = self.visible(width as usize);
        let cursor = self.input.visual_cursor().saturating_sub(start);
        (PROMPT.width() + cursor) as u16
    }
}

pub fn label_line(label: &str, required: bool, focused: bool, theme: &Theme) -> Line<'static> {
    let style = if focused {
        theme.focused()
    } else {
        theme.title()
    };
    let mut spans = vec![Span::styled(label.to_string(), style)];
    if required {
        spans.push(Span::styled(" *", theme.error()));
    }
    Line::from(spans)
}

pub fn error_line(error: Option<&str>, theme: &Theme) -> Line<'static> {
    match error {
        Some(message) => Line::from(Span::styled(message.to_string(), theme.error())),
        None => Line::from(""),
    }
}

/// Enumerated select rendered as `‹ value ›`.
pub fn select_lines(
    label: &str,
    value: Option<&str>,
    placeholder: &str,
    focused: bool,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let arrow_style = if focused {
        theme.focused()
    } else {
        theme.border()
    };
    let value_span = match value {
        Some(value) => Span::styled(value.to_string(), Style::default()),
        None => Span::styled(placeholder.to_string(), theme.muted()),
    };
    vec![
        label_line(label, false, focused, theme),
        Line::from(vec![
            Span::styled("‹ ", arrow_style),
            value_span,
            Span::styled(" ›", arrow_style),
        ]),
        Line::from(""),
    ]
}

pub fn checkbox_line(label: &str, checked: bool, focused: bool, theme: &Theme) -> Line<'static> {
    let mark = if checked { "[x] " } else { "[ ] " };
    let style = if focused {
        theme.focused()
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(mark, if checked { theme.primary() } else { theme.border() }),
        Span::styled(label.to_string(), style),
    ])
}

pub fn button_span(label: &str, focused: bool, theme: &Theme) -> Span<'static> {
    let style = if focused {
        theme.selected().add_modifier(Modifier::BOLD)
    } else {
        theme.primary()
    };
    Span::styled(format!("[ {} ]", label), style)
}

/// Vertical viewport that keeps the focused rows on screen.
#[derive(Debug, Default)]
pub struct ScrollView {
    offset: usize,
}

impl ScrollView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn follow(&mut self, focus: Range<usize>, height: usize) {
        if focus.start < self.offset {
            self.offset = focus.start;
        } else if focus.end > self.offset + height {
            self.offset = focus.end.saturating_sub(height);
        }
    }

    /// `cursor` is a (line, column) pair in content coordinates.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        lines: Vec<Line<'static>>,
        focus: Range<usize>,
        cursor: Option<(usize, u16)>,
        style: Style,
    ) {
        let height = area.height as usize;
        self.offset = self.offset.min(lines.len().saturating_sub(height));
        self.follow(focus, height);

        let visible: Vec<Line> = lines.into_iter().skip(self.offset).take(height).collect();
        frame.render_widget(Paragraph::new(visible).style(style), area);

        if let Some((line, column)) = cursor {
            if line >= self.offset && line < self.offset + height && column < area.width {
                frame.set_cursor(area.x + column, area.y + (line - self.offset) as u16);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(field: &mut TextField, text: &str) {
        for c in text.chars() {
            assert!(field.handle_key(key(KeyCode::Char(c))));
        }
    }

    #[test]
    fn test_text_field_editing() {
        let mut field = TextField::new("Name", "Enter your name").required();
        assert!(!field.handle_key(key(KeyCode::Char('x'))), "unfocused fields ignore keys");

        field.focus();
        type_text(&mut field, "Adaa");
        assert!(field.handle_key(key(KeyCode::Backspace)));
        assert_eq!(field.value(), "Ada");

        assert!(!field.handle_key(key(KeyCode::Enter)));
        assert!(!field.handle_key(key(KeyCode::Tab)));
        assert!(!field.handle_key(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL)));
        assert_eq!(field.value(), "Ada");
    }

    #[test]
    fn test_text_field_sync() {
        let mut field = TextField::new("Email address", "Enter your email address");
        field.focus();
        type_text(&mut field, "a@b.com");
        field.sync("");
        assert_eq!(field.value(), "");
        assert_eq!(field.cursor_column(40), 2);
    }

    #[test]
    fn test_long_values_scroll_horizontally() {
        let mut field = TextField::new("Additional information", "");
        field.focus();
        type_text(&mut field, "abcdefghijklmnopqrstuvwxyz");

        let lines = field.lines(12, None, &Theme::default());
        let shown: String = lines[1].spans[1].content.to_string();
        assert!(shown.ends_with('z'));
        assert!(field.cursor_column(12) < 12);
    }

    #[test]
    fn test_wide_chars_scroll_by_cells() {
        let mut field = TextField::new("Name", "");
        field.focus();
        type_text(&mut field, "日本語のなまえです");

        // 10 columns leave 7 cells for the value
        let shown = field.value_line(10, &Theme::default()).spans[1].content.to_string();
        assert_eq!(shown, "えです");
        assert!(shown.width() <= 7);
        assert_eq!(field.cursor_column(10), 2 + 6);

        field.sync("ab日本");
        let shown = field.value_line(10, &Theme::default()).spans[1].content.to_string();
        assert_eq!(shown, "ab日本");
        assert_eq!(field.cursor_column(10), 2 + 6);
    }

    #[test]
    fn test_scroll_view_follows_focus() {
        let mut view = ScrollView::new();
        view.follow(12..15, 10);
        assert_eq!(view.offset(), 5);
        view.follow(2..5, 10);
        assert_eq!(view.offset(), 2);
        view.follow(4..6, 10);
        assert_eq!(view.offset(), 2);
    }
}
