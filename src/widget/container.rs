use tracing::{debug, info, warn};

use crate::widget::{
    agents::{Agent, AgentKind, FALLBACK_INITIALS, FALLBACK_NAME},
    chat::{ChatMessage, Transcript},
    forms::{ContactForm, FormState},
};

/// Gate in front of everything past the contact form. Only moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Form,
    Verified,
}

/// Sub-view shown once the contact gate has been passed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Home,
    AgentSelection,
    Conversation,
}

/// What the panel body should render right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    ContactForm,
    Home,
    AgentSelection,
    Conversation,
}

pub struct Container {
    phase: FormPhase,
    view: View,
    contact: FormState<ContactForm>,
    transcript: Transcript,
    selected_agent: Option<AgentKind>,
    draft: String,
}

impl Container {
    pub fn new() -> Self {
        Self {
            phase: FormPhase::Form,
            view: View::Home,
            contact: FormState::new(),
            transcript: Transcript::new(),
            selected_agent: None,
            draft: String::new(),
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn screen(&self) -> Screen {
        match (self.phase, self.view) {
            (FormPhase::Form, _) => Screen::ContactForm,
            (FormPhase::Verified, View::Home) => Screen::Home,
            (FormPhase::Verified, View::AgentSelection) => Screen::AgentSelection,
            (FormPhase::Verified, View::Conversation) => Screen::Conversation,
        }
    }

    pub fn contact(&self) -> &FormState<ContactForm> {
        &self.contact
    }

    pub fn update_contact<F: FnOnce(&mut ContactForm)>(&mut self, edit: F) {
        self.contact.update(edit);
    }

    /// Returns true when the gate opened.
    pub fn submit_contact(&mut self) -> bool {
        if self.phase == FormPhase::Verified {
            return false;
        }

        match self.contact.submit() {
            Some(values) => {
                match serde_json::to_string(&values) {
                    Ok(payload) => info!(%payload, "Contact form submitted"),
                    Err(e) => warn!("Contact form submitted but could not be serialized: {}", e),
                }
                self.phase = FormPhase::Verified;
                self.view = View::Home;
                true
            }
            None => {
                debug!(
                    "Contact form rejected: {:?}",
                    self.contact.errors().fields().collect::<Vec<_>>()
                );
                false
            }
        }
    }

    pub fn start_conversation(&mut self) -> bool {
        if self.screen() != Screen::Home {
            return false;
        }
        self.view = View::AgentSelection;
        true
    }

    pub fn select_agent(&mut self, kind: AgentKind) -> bool {
        if self.screen() != Screen::AgentSelection {
            return false;
        }

        let agent = kind.profile();
        info!("Starting conversation with {} ({})", agent.name, agent.role);
        self.selected_agent = Some(kind);
        self.transcript.reseed(ChatMessage::greeting(agent));
        self.view = View::Conversation;
        true
    }

    /// Steps back to Home from either agent selection or a conversation.
    pub fn back(&mut self) -> bool {
        match self.screen() {
            Screen::AgentSelection | Screen::Conversation => {
                self.view = View::Home;
                true
            }
            Screen::ContactForm | Screen::Home => false,
        }
    }

    pub fn selected_agent(&self) -> Option<&'static Agent> {
        self.selected_agent.map(AgentKind::profile)
    }

    /// Name and initials for the conversation header and agent bubbles.
    pub fn speaking_with(&self) -> (&'static str, &'static str) {
        match self.selected_agent() {
            Some(agent) => (agent.name, agent.fallback),
            None => (FALLBACK_NAME, FALLBACK_INITIALS),
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.transcript.messages()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Appends the trimmed draft as a user message. Blank drafts are ignored
    /// and left in place.
    pub fn send_message(&mut self) -> bool {
        if self.screen() != Screen::Conversation {
            return false;
        }

        let content = self.draft.trim();
        if content.is_empty() {
            return false;
        }

        let message = ChatMessage::user(content);
        debug!("User message {} appended", message.id);
        self.transcript.push(message);
        self.draft.clear();
        true
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}
