pub mod agents;
pub mod chat;
pub mod container;
pub mod event;
pub mod forms;
pub mod home;

use tracing::{debug, info};
use url::Url;

pub use agents::{Agent, AgentKind};
pub use chat::{Author, ChatMessage};
pub use container::{Container, FormPhase, Screen, View};
pub use event::EventDialog;
pub use forms::{ContactForm, EventRegistration, FieldErrors, FormState, Interest, StudyLevel};
pub use home::{HomeAction, HomeContent};

/// Result of activating a Home tab item.
#[derive(Clone, Debug, PartialEq)]
pub enum HomeOutcome {
    /// The widget changed view or opened a dialog.
    Navigated,
    /// The item points outside the widget.
    OpenUrl(Url),
    /// Nothing happened; show the message instead.
    Notice(String),
}

/// The floating support widget: trigger, panel and dialogs.
pub struct Widget {
    open: bool,
    container: Container,
    event_dialog: EventDialog,
    home: HomeContent,
}

impl Widget {
    pub fn new(home: HomeContent) -> Self {
        Self {
            open: false,
            container: Container::new(),
            event_dialog: EventDialog::new(),
            home,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Trigger action.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        debug!("Widget {}", if self.open { "opened" } else { "closed" });
    }

    /// Close and minimize both land here. Panel state is kept so reopening
    /// resumes where the user left off.
    pub fn close(&mut self) {
        self.open = false;
        debug!("Widget closed from {:?}", self.container.screen());
    }

    pub fn trigger_label(&self) -> &'static str {
        if self.open {
            "Close chat widget"
        } else {
            "Open chat widget"
        }
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut Container {
        &mut self.container
    }

    pub fn event_dialog(&self) -> &EventDialog {
        &self.event_dialog
    }

    pub fn event_dialog_mut(&mut self) -> &mut EventDialog {
        &mut self.event_dialog
    }

    pub fn home(&self) -> &HomeContent {
        &self.home
    }

    pub fn activate(&mut self, action: HomeAction) -> HomeOutcome {
        if self.container.screen() != Screen::Home {
            return HomeOutcome::Notice("Home is not showing".to_string());
        }

        match action {
            HomeAction::StartConversation => {
                self.container.start_conversation();
                HomeOutcome::Navigated
            }
            HomeAction::RegisterForOpenDay => {
                info!("Opening open day registration");
                self.event_dialog.open();
                HomeOutcome::Navigated
            }
            HomeAction::SubmitApplication => {
                HomeOutcome::Notice("Applications are not available in this build".to_string())
            }
            HomeAction::PlayVideo | HomeAction::OpenLink(_) => match self.home.url_for(action) {
                Some(url) => HomeOutcome::OpenUrl(url.clone()),
                None => HomeOutcome::Notice("Link is not configured".to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::ContentConfig;

    fn widget() -> Widget {
        Widget::new(HomeContent::from_config(&ContentConfig::default()).unwrap())
    }

    fn verify(widget: &mut Widget) {
        widget.container_mut().update_contact(|f| {
            f.name = "Ada".to_string();
            f.email = "ada@example.com".to_string();
        });
        assert!(widget.container_mut().submit_contact());
    }

    #[test]
    fn test_toggle() {
        let mut widget = widget();
        assert!(!widget.is_open());
        assert_eq!(widget.trigger_label(), "Open chat widget");
        widget.toggle();
        assert!(widget.is_open());
        assert_eq!(widget.trigger_label(), "Close chat widget");
        widget.toggle();
        assert!(!widget.is_open());
    }

    #[test]
    fn test_close_keeps_conversation() {
        let mut widget = widget();
        widget.toggle();
        verify(&mut widget);
        assert_eq!(widget.activate(HomeAction::StartConversation), HomeOutcome::Navigated);
        assert!(widget.container_mut().select_agent(AgentKind::FinancialAidCounselor));
        widget.container_mut().set_draft("Hello");
        assert!(widget.container_mut().send_message());

        widget.close();
        assert!(!widget.is_open());
        widget.toggle();

        let container = widget.container();
        assert_eq!(container.screen(), Screen::Conversation);
        assert_eq!(container.selected_agent(), Some(AgentKind::FinancialAidCounselor.profile()));
        assert_eq!(container.messages().len(), 2);
        assert_eq!(container.messages()[1].content, "Hello");
    }

    #[test]
    fn test_event_dialog_is_independent_of_the_panel() {
        let mut widget = widget();
        widget.toggle();
        verify(&mut widget);
        assert_eq!(widget.activate(HomeAction::RegisterForOpenDay), HomeOutcome::Navigated);
        assert!(widget.event_dialog().is_open());

        widget.close();
        assert!(widget.event_dialog().is_open());
        assert_eq!(widget.container().phase(), FormPhase::Verified);
    }

    #[test]
    fn test_external_actions() {
        let mut widget = widget();
        verify(&mut widget);
        match widget.activate(HomeAction::OpenLink(2)) {
            HomeOutcome::OpenUrl(url) => assert_eq!(url.host_str(), Some("geckoengage.com")),
            other => panic!("Expected OpenUrl, got {:?}", other),
        }
        match widget.activate(HomeAction::PlayVideo) {
            HomeOutcome::OpenUrl(url) => assert_eq!(url.host_str(), Some("www.youtube.com")),
            other => panic!("Expected OpenUrl, got {:?}", other),
        }
        assert!(matches!(
            widget.activate(HomeAction::SubmitApplication),
            HomeOutcome::Notice(_)
        ));
    }

    #[test]
    fn test_home_actions_need_verification() {
        let mut widget = widget();
        assert!(matches!(
            widget.activate(HomeAction::RegisterForOpenDay),
            HomeOutcome::Notice(_)
        ));
        assert!(!widget.event_dialog().is_open());
    }
}
