use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidateEmail, ValidationError, ValidationErrors};

/// Study level offered by both the contact gate and the open day form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyLevel {
    Undergraduate,
    Postgraduate,
    Phd,
    Other,
}

impl StudyLevel {
    pub const ALL: [StudyLevel; 4] = [
        StudyLevel::Undergraduate,
        StudyLevel::Postgraduate,
        StudyLevel::Phd,
        StudyLevel::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StudyLevel::Undergraduate => "Undergraduate",
            StudyLevel::Postgraduate => "Postgraduate",
            StudyLevel::Phd => "PhD",
            StudyLevel::Other => "Other",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            StudyLevel::Undergraduate => "undergraduate",
            StudyLevel::Postgraduate => "postgraduate",
            StudyLevel::Phd => "phd",
            StudyLevel::Other => "other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.value() == value)
    }

    /// Steps through the select options, with `None` as the unselected slot.
    pub fn cycle(current: Option<Self>, forward: bool) -> Option<Self> {
        let slots: Vec<Option<Self>> = std::iter::once(None)
            .chain(Self::ALL.into_iter().map(Some))
            .collect();
        let index = slots.iter().position(|slot| *slot == current).unwrap_or(0);
        let next = if forward {
            (index + 1) % slots.len()
        } else {
            (index + slots.len() - 1) % slots.len()
        };
        slots[next]
    }
}

/// Fixed set of topics an open day visitor can register interest in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interest {
    OpenDay,
    CampusTour,
    CourseTalks,
    Accommodation,
    FinancialAid,
    StudentLife,
}

impl Interest {
    pub const ALL: [Interest; 6] = [
        Interest::OpenDay,
        Interest::CampusTour,
        Interest::CourseTalks,
        Interest::Accommodation,
        Interest::FinancialAid,
        Interest::StudentLife,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Interest::OpenDay => "Open day talks",
            Interest::CampusTour => "Campus tour",
            Interest::CourseTalks => "Course taster sessions",
            Interest::Accommodation => "Accommodation",
            Interest::FinancialAid => "Financial aid",
            Interest::StudentLife => "Student life",
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            Interest::OpenDay => "open-day",
            Interest::CampusTour => "campus-tour",
            Interest::CourseTalks => "course-talks",
            Interest::Accommodation => "accommodation",
            Interest::FinancialAid => "financial-aid",
            Interest::StudentLife => "student-life",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|interest| interest.value() == value)
    }
}

/// Per-field validation messages, kept in the form's field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_validation(fields: &[&'static str], errors: &ValidationErrors) -> Self {
        let by_field = errors.field_errors();
        let entries = fields
            .iter()
            .filter_map(|field| {
                let first = by_field.get(*field)?.first()?;
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                Some((*field, message))
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}

/// A validated field set. `FIELDS` lists the struct fields in display order.
pub trait FormSchema: Validate + Serialize + Default + Clone {
    const FIELDS: &'static [&'static str];

    fn check(&self) -> FieldErrors {
        match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => FieldErrors::from_validation(Self::FIELDS, &errors),
        }
    }
}

/// Last domain label must be at least two letters, so `a@b` fails.
fn has_top_level_domain(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

/// An empty address fails the format check first, so it reads
/// "Invalid email address" like any other malformed value.
fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if !email.validate_email() || !has_top_level_domain(email) {
        let mut error = ValidationError::new("email");
        error.message = Some(Cow::Borrowed("Invalid email address"));
        return Err(error);
    }
    Ok(())
}

/// Fields captured by the inline contact gate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(custom(function = "validate_email_address"))]
    pub email: String,
    pub telephone: String,
    pub study_level: Option<StudyLevel>,
}

impl FormSchema for ContactForm {
    const FIELDS: &'static [&'static str] = &["name", "email", "telephone", "study_level"];
}

/// Fields captured by the open day registration dialog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistration {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(custom(function = "validate_email_address"))]
    pub email: String,
    pub phone: String,
    pub current_school: String,
    pub study_level: Option<StudyLevel>,
    #[validate(length(min = 1, message = "Please select at least one interest"))]
    pub interests: Vec<Interest>,
    pub dietary_requirements: String,
    pub additional_info: String,
}

impl EventRegistration {
    pub fn has_interest(&self, interest: Interest) -> bool {
        self.interests.contains(&interest)
    }

    pub fn toggle_interest(&mut self, interest: Interest) {
        if let Some(index) = self.interests.iter().position(|i| *i == interest) {
            self.interests.remove(index);
        } else {
            self.interests.push(interest);
        }
    }
}

impl FormSchema for EventRegistration {
    const FIELDS: &'static [&'static str] = &[
        "first_name",
        "last_name",
        "email",
        "phone",
        "current_school",
        "study_level",
        "interests",
        "dietary_requirements",
        "additional_info",
    ];
}

/// Values plus the errors last shown for them.
///
/// Errors stay hidden until the first submit attempt; after that every
/// change revalidates the whole set.
#[derive(Debug, Clone, Default)]
pub struct FormState<T> {
    values: T,
    errors: FieldErrors,
    attempted: bool,
}

impl<T: FormSchema> FormState<T> {
    pub fn new() -> Self {
        Self {
            values: T::default(),
            errors: FieldErrors::new(),
            attempted: false,
        }
    }

    pub fn values(&self) -> &T {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_valid(&self) -> bool {
        self.values.check().is_empty()
    }

    pub fn update<F: FnOnce(&mut T)>(&mut self, edit: F) {
        edit(&mut self.values);
        if self.attempted {
            self.errors = self.values.check();
        }
    }

    /// Validates and hands back a copy of the values when they pass.
    pub fn submit(&mut self) -> Option<T> {
        self.attempted = true;
        self.errors = self.values.check();
        if self.errors.is_empty() {
            Some(self.values.clone())
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, email: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_contact_requires_name_and_email() {
        let errors = contact("", "").check();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("email"), Some("Invalid email address"));
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["name", "email"]);
    }

    #[test]
    fn test_contact_rejects_malformed_email() {
        let errors = contact("Ada", "not-an-address").check();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("Invalid email address"));
    }

    #[test]
    fn test_email_needs_top_level_domain() {
        for email in ["a@b", "a@b.c", "a@.com", "a@b.c0m", "a@@b.com"] {
            let errors = contact("A", email).check();
            assert_eq!(errors.get("email"), Some("Invalid email address"), "{}", email);
        }
        for email in ["a@b.com", "ada.lovelace@mail.example.ac.uk"] {
            assert!(contact("A", email).check().is_empty(), "{}", email);
        }

        let mut state = FormState::<ContactForm>::new();
        state.update(|f| {
            f.name = "A".to_string();
            f.email = "a@b".to_string();
        });
        assert!(state.submit().is_none());
        assert_eq!(state.error("email"), Some("Invalid email address"));
    }

    #[test]
    fn test_contact_optional_fields() {
        let mut form = contact("Ada", "ada@example.com");
        assert!(form.check().is_empty());

        form.telephone = "anything goes".to_string();
        form.study_level = Some(StudyLevel::Phd);
        assert!(form.check().is_empty());
    }

    #[test]
    fn test_event_requires_an_interest() {
        let mut form = EventRegistration {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.com".to_string(),
            ..Default::default()
        };
        let errors = form.check();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("interests"), Some("Please select at least one interest"));

        form.toggle_interest(Interest::OpenDay);
        assert!(form.check().is_empty());
    }

    #[test]
    fn test_event_reports_every_missing_field() {
        let errors = EventRegistration::default().check();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["first_name", "last_name", "email", "interests"]
        );
        assert_eq!(errors.get("first_name"), Some("First name is required"));
        assert_eq!(errors.get("last_name"), Some("Last name is required"));
    }

    #[test]
    fn test_toggle_interest() {
        let mut form = EventRegistration::default();
        form.toggle_interest(Interest::CampusTour);
        form.toggle_interest(Interest::StudentLife);
        assert!(form.has_interest(Interest::CampusTour));

        form.toggle_interest(Interest::CampusTour);
        assert!(!form.has_interest(Interest::CampusTour));
        assert_eq!(form.interests, vec![Interest::StudentLife]);
    }

    #[test]
    fn test_form_state_hides_errors_until_submit() {
        let mut state: FormState<ContactForm> = FormState::new();
        state.update(|f| f.name = "Ada".to_string());
        assert!(state.errors().is_empty());
        assert!(!state.is_valid());

        assert!(state.submit().is_none());
        assert_eq!(state.error("email"), Some("Invalid email address"));

        // Revalidates on every change once submitted
        state.update(|f| f.email = "ada@".to_string());
        assert_eq!(state.error("email"), Some("Invalid email address"));
        state.update(|f| f.email = "ada@example.com".to_string());
        assert!(state.errors().is_empty());

        let submitted = state.submit().expect("valid form");
        assert_eq!(submitted.name, "Ada");
    }

    #[test]
    fn test_form_state_reset() {
        let mut state: FormState<EventRegistration> = FormState::new();
        state.update(|f| f.first_name = "A".to_string());
        assert!(state.submit().is_none());

        state.reset();
        assert_eq!(state.values(), &EventRegistration::default());
        assert!(state.errors().is_empty());
        state.update(|f| f.last_name = "B".to_string());
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_study_level_cycle() {
        assert_eq!(StudyLevel::cycle(None, true), Some(StudyLevel::Undergraduate));
        assert_eq!(StudyLevel::cycle(Some(StudyLevel::Other), true), None);
        assert_eq!(StudyLevel::cycle(None, false), Some(StudyLevel::Other));
        assert_eq!(StudyLevel::from_value("phd"), Some(StudyLevel::Phd));
        assert_eq!(StudyLevel::from_value("masters"), None);
    }

    #[test]
    fn test_submission_payload_shape() {
        let mut form = contact("Ada", "ada@example.com");
        form.study_level = Some(StudyLevel::Postgraduate);
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["studyLevel"], "postgraduate");
        assert_eq!(json["telephone"], "");

        let event = EventRegistration {
            interests: vec![Interest::OpenDay],
            ..Default::default()
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["interests"][0], "open-day");
        assert_eq!(Interest::from_value("open-day"), Some(Interest::OpenDay));
    }
}
