use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::timeout;

#[derive(Clone, Debug)]
pub enum Event {
    /// Terminal tick event
    Tick,
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize event
    Resize(u16, u16),
    /// Status line message posted from outside the key handlers
    Status(String),
}

pub struct EventHandler {
    sender: mpsc::UnboundedSender<Event>,
    receiver: mpsc::UnboundedReceiver<Event>,
    last_tick: Instant,
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver,
            last_tick: Instant::now(),
            tick_rate,
        }
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }

    pub async fn next(&mut self) -> Option<Event> {
        // Queued application events first
        if let Ok(event) = timeout(Duration::from_millis(10), self.receiver.recv()).await {
            return event;
        }

        if event::poll(Duration::from_millis(0)).unwrap_or(false) {
            match event::read() {
                // Windows reports releases too
                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    return Some(Event::Key(key))
                }
                Ok(CrosstermEvent::Resize(w, h)) => return Some(Event::Resize(w, h)),
                _ => {}
            }
        }

        if self.last_tick.elapsed() >= self.tick_rate {
            self.last_tick = Instant::now();
            return Some(Event::Tick);
        }

        // Small delay to prevent busy waiting
        tokio::time::sleep(Duration::from_millis(10)).await;
        None
    }
}
