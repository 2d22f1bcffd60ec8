use tracing::{debug, info, warn};

use crate::widget::forms::{EventRegistration, FormState, Interest};

pub const TITLE: &str = "Register for Open Day";
pub const DESCRIPTION: &str =
    "Join us for our Open Day on August 5th and discover what Gecko U has to offer!";
pub const DATE: &str = "August 5th, 2024";
pub const TIME: &str = "9:00 AM - 4:00 PM";
pub const LOCATION: &str = "Gecko U Campus";
pub const SPOTS: &str = "23 spots available";
pub const SUBMIT_LABEL: &str = "Reserve Your Place";
pub const CANCEL_LABEL: &str = "Cancel";

/// Open day registration modal. Its open flag is independent of the
/// contact gate.
#[derive(Debug, Default)]
pub struct EventDialog {
    open: bool,
    form: FormState<EventRegistration>,
}

impl EventDialog {
    pub fn new() -> Self {
        Self {
            open: false,
            form: FormState::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes without touching values or errors.
    pub fn cancel(&mut self) {
        self.open = false;
    }

    pub fn form(&self) -> &FormState<EventRegistration> {
        &self.form
    }

    pub fn update<F: FnOnce(&mut EventRegistration)>(&mut self, edit: F) {
        self.form.update(edit);
    }

    pub fn toggle_interest(&mut self, interest: Interest) {
        self.form.update(|f| f.toggle_interest(interest));
    }

    /// On success the registration is logged, the dialog closes and every
    /// field goes back to its default.
    pub fn submit(&mut self) -> bool {
        match self.form.submit() {
            Some(values) => {
                match serde_json::to_string(&values) {
                    Ok(payload) => info!(%payload, "Event registration submitted"),
                    Err(e) => warn!("Event registration submitted but could not be serialized: {}", e),
                }
                self.open = false;
                self.form.reset();
                true
            }
            None => {
                debug!(
                    "Event registration rejected: {:?}",
                    self.form.errors().fields().collect::<Vec<_>>()
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(dialog: &mut EventDialog) {
        dialog.update(|f| {
            f.first_name = "A".to_string();
            f.last_name = "B".to_string();
            f.email = "a@b.com".to_string();
        });
    }

    #[test]
    fn test_starts_closed() {
        let dialog = EventDialog::new();
        assert!(!dialog.is_open());
        assert_eq!(dialog.form().values(), &EventRegistration::default());
    }

    #[test]
    fn test_submit_without_interests_is_rejected() {
        let mut dialog = EventDialog::new();
        dialog.open();
        filled(&mut dialog);

        assert!(!dialog.submit());
        assert!(dialog.is_open());
        assert_eq!(
            dialog.form().error("interests"),
            Some("Please select at least one interest")
        );
        assert_eq!(dialog.form().values().first_name, "A");
    }

    #[test]
    fn test_successful_submit_closes_and_resets() {
        let mut dialog = EventDialog::new();
        dialog.open();
        filled(&mut dialog);
        dialog.update(|f| f.dietary_requirements = "Vegetarian".to_string());
        dialog.toggle_interest(Interest::OpenDay);

        assert!(dialog.submit());
        assert!(!dialog.is_open());
        assert_eq!(dialog.form().values(), &EventRegistration::default());
        assert!(dialog.form().errors().is_empty());
    }

    #[test]
    fn test_cancel_keeps_values_and_errors() {
        let mut dialog = EventDialog::new();
        dialog.open();
        dialog.update(|f| f.first_name = "A".to_string());
        assert!(!dialog.submit());

        dialog.cancel();
        assert!(!dialog.is_open());
        assert_eq!(dialog.form().values().first_name, "A");
        assert!(dialog.form().error("email").is_some());

        dialog.open();
        assert!(dialog.form().error("last_name").is_some());
    }
}
