use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
    Frame,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};
use url::Url;

use crate::app::config::UIConfig;
use crate::platform::LinkOpener;
use crate::tui::{
    components::{
        Action, AgentList, Component, ContactFormView, ConversationView, EventDialogView, Header,
        HomeView, StatusBar, Trigger,
    },
    Event, Theme,
};
use crate::widget::{Screen, Widget};

const TRIGGER_HEIGHT: u16 = 3;

pub struct App {
    widget: Widget,

    // Components
    header: Header,
    contact_form: ContactFormView,
    home: HomeView,
    agent_list: AgentList,
    conversation: ConversationView,
    event_dialog: EventDialogView,
    trigger: Trigger,
    status_bar: StatusBar,

    // State
    theme: Theme,
    ui: UIConfig,
    should_quit: bool,

    // Outside world
    opener: Arc<dyn LinkOpener>,
    event_sender: mpsc::UnboundedSender<Event>,
}

impl App {
    pub fn new(
        widget: Widget,
        ui: UIConfig,
        theme: Theme,
        opener: Arc<dyn LinkOpener>,
        event_sender: mpsc::UnboundedSender<Event>,
    ) -> Self {
        Self {
            widget,
            header: Header::new(),
            contact_form: ContactFormView::new(),
            home: HomeView::new(),
            agent_list: AgentList::new(),
            conversation: ConversationView::new(),
            event_dialog: EventDialogView::new(),
            trigger: Trigger::new(),
            status_bar: StatusBar::new(),
            theme,
            ui,
            should_quit: false,
            opener,
            event_sender,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    pub fn status(&self) -> &str {
        self.status_bar.status()
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Status(status) => self.status_bar.set_status(status),
            Event::Tick | Event::Resize(_, _) => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        // The modal takes every key while it is up
        if self.widget.event_dialog().is_open() {
            if let Some(action) = self.event_dialog.handle_key(key, &mut self.widget) {
                self.apply(action);
            }
            return;
        }

        if !self.widget.is_open() {
            self.status_bar
                .set_status("Press F2 to open the chat widget");
            return;
        }

        let screen = self.widget.container().screen();
        let action = match screen {
            Screen::ContactForm => self.contact_form.handle_key(key, &mut self.widget),
            Screen::Home => self.home.handle_key(key, &mut self.widget),
            Screen::AgentSelection => self.agent_list.handle_key(key, &mut self.widget),
            Screen::Conversation => self.conversation.handle_key(key, &mut self.widget),
        };

        match action {
            Some(action) => self.apply(action),
            None if key.code == KeyCode::Esc => match screen {
                Screen::ContactForm | Screen::Home => self.widget.close(),
                Screen::AgentSelection | Screen::Conversation => {
                    self.widget.container_mut().back();
                }
            },
            None => {}
        }
    }

    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                true
            }
            (KeyCode::Char('w'), KeyModifiers::CONTROL) if self.widget.is_open() => {
                self.widget.close();
                true
            }
            _ if Trigger::is_toggle_key(&key) => {
                self.trigger.handle_key(key, &mut self.widget);
                true
            }
            _ => false,
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Consumed => {}
            Action::Status(message) => self.status_bar.set_status(message),
            Action::OpenUrl(url) => self.open_url(url),
        }
    }

    /// Opening a browser can block, so it runs off the UI task and reports
    /// back through the event queue.
    fn open_url(&mut self, url: Url) {
        debug!("Requesting {}", url);
        self.status_bar.set_status(format!("Opening {}", url));

        let opener = Arc::clone(&self.opener);
        let sender = self.event_sender.clone();
        tokio::task::spawn_blocking(move || {
            let status = match opener.open(&url) {
                Ok(()) => format!("Opened {} in your browser", url),
                Err(e) => {
                    warn!("Link open failed: {}", e);
                    format!("Error: {}", e)
                }
            };
            let _ = sender.send(Event::Status(status));
        });
    }

    /// Panel docked bottom-right above the trigger.
    fn layout(&self, area: Rect) -> (Rect, Rect) {
        let width = self.ui.panel_width.min(area.width);
        let x = area.x + area.width - width;

        let trigger_height = TRIGGER_HEIGHT.min(area.height);
        let trigger = Rect::new(x, area.y + area.height - trigger_height, width, trigger_height);

        let available = area.height - trigger_height;
        let height = (available as u32 * self.ui.panel_height_percent as u32 / 100) as u16;
        let panel = Rect::new(x, trigger.y - height, width, height);
        (panel, trigger)
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Page
                Constraint::Length(1), // Status bar
            ])
            .split(frame.size());

        frame.render_widget(Block::default().style(self.theme.page()), chunks[0]);
        let (panel, trigger) = self.layout(chunks[0]);

        if self.widget.is_open() && panel.height > 2 {
            self.render_panel(frame, panel);
        }
        self.trigger.render(frame, trigger, &self.widget, &self.theme);
        self.status_bar
            .render(frame, chunks[1], &self.widget, &self.theme);

        // Dialog last (on top)
        if self.widget.event_dialog().is_open() {
            self.event_dialog
                .render(frame, chunks[0], &self.widget, &self.theme);
        }
    }

    fn render_panel(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border())
            .style(self.theme.normal());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_height = Header::height(&self.widget, inner.width).min(inner.height);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(header_height), Constraint::Min(0)])
            .split(inner);

        self.header
            .render(frame, chunks[0], &self.widget, &self.theme);

        let body = chunks[1].inner(&ratatui::layout::Margin {
            horizontal: 1,
            vertical: 0,
        });
        if body.height == 0 {
            return;
        }
        match self.widget.container().screen() {
            Screen::ContactForm => self
                .contact_form
                .render(frame, body, &self.widget, &self.theme),
            Screen::Home => self.home.render(frame, body, &self.widget, &self.theme),
            Screen::AgentSelection => self
                .agent_list
                .render(frame, body, &self.widget, &self.theme),
            Screen::Conversation => self
                .conversation
                .render(frame, body, &self.widget, &self.theme),
        }
    }
}
