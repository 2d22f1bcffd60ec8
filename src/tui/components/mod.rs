pub mod agent_list;
pub mod contact_form;
pub mod conversation;
pub mod event_dialog;
pub mod form;
pub mod header;
pub mod home;
pub mod status_bar;
pub mod trigger;

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use url::Url;

use crate::tui::Theme;
use crate::widget::Widget;

pub use agent_list::AgentList;
pub use contact_form::ContactFormView;
pub use conversation::ConversationView;
pub use event_dialog::EventDialogView;
pub use header::Header;
pub use home::HomeView;
pub use status_bar::StatusBar;
pub use trigger::Trigger;

/// What a component asks the app to do after handling a key.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Consumed,
    Status(String),
    OpenUrl(Url),
}

/// Base trait for all TUI components. Widget state lives in [`Widget`];
/// components only keep cursor and selection state of their own.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect, widget: &Widget, theme: &Theme);

    /// `None` means the key was not for this component.
    fn handle_key(&mut self, key: KeyEvent, widget: &mut Widget) -> Option<Action>;
}

/// Greedy word wrap measured in terminal cells.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width < 4 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    for raw_line in text.lines() {
        let mut current = String::new();
        for word in raw_line.split_whitespace() {
            let needed = if current.is_empty() {
                word.width()
            } else {
                current.width() + 1 + word.width()
            };
            if needed <= width {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
                continue;
            }

            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if word.width() <= width {
                current.push_str(word);
            } else {
                // Hard-split words longer than a line, e.g. URLs
                for ch in word.chars() {
                    if current.width() + ch.width().unwrap_or(0) > width {
                        lines.push(std::mem::take(&mut current));
                    }
                    current.push(ch);
                }
            }
        }
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Cuts `text` to at most `width` cells, marking the cut with an ellipsis.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        if out.width() + ch.width().unwrap_or(0) + 1 > width {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text() {
        let lines = wrap_text("Get quick help with any questions you have.", 16);
        assert_eq!(lines, vec!["Get quick help", "with any", "questions you", "have."]);
        assert!(lines.iter().all(|l| l.width() <= 16));
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let lines = wrap_text("https://geckoengage.com", 10);
        assert_eq!(lines, vec!["https://ge", "ckoengage.", "com"]);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Gecko AI", 20), "Gecko AI");
        assert_eq!(truncate("Campus Life Coordinator", 10), "Campus Li…");
    }
}
