use std::rc::Rc;
use std::str::FromStr;

use chrono::{DateTime, Local};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use yew::Reducible;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub date: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormDraft {
    fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    /// Value of the input's `name` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }
}

impl FromStr for FormField {
    type Err = SubmitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "message" => Ok(FormField::Message),
            other => Err(SubmitError::UnknownField(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionPolicy {
    RequireAllFields,
    AcceptAny,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("unknown form field `{0}`")]
    UnknownField(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { id: i64 },
    Rejected(SubmitError),
}

/// `M/D/YYYY`, no zero padding.
pub fn display_date(now: &DateTime<Local>) -> String {
    now.format("%-m/%-d/%Y").to_string()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub draft: ContactFormDraft,
    messages: Vec<ContactMessage>,
    /// Bumped on every submit attempt so effects can key on it.
    pub submissions: u32,
    pub last_outcome: Option<SubmitOutcome>,
}

pub enum FormAction {
    UpdateField(FormField, String),
    Submit {
        policy: SubmissionPolicy,
        now: DateTime<Local>,
    },
}

impl FormState {
    /// Submitted messages, newest first.
    pub fn messages(&self) -> &[ContactMessage] {
        &self.messages
    }

    pub fn update_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.draft.name = value,
            FormField::Email => self.draft.email = value,
            FormField::Message => self.draft.message = value,
        }
    }

    pub fn submit(
        &mut self,
        policy: SubmissionPolicy,
        now: DateTime<Local>,
    ) -> Result<&ContactMessage, SubmitError> {
        if policy == SubmissionPolicy::RequireAllFields && !self.draft.is_complete() {
            return Err(SubmitError::MissingFields);
        }

        let mut id = now.timestamp_millis();
        if let Some(newest) = self.messages.first() {
            id = id.max(newest.id + 1);
        }

        let draft = std::mem::take(&mut self.draft);
        let message = ContactMessage {
            id,
            name: draft.name,
            email: draft.email,
            message: draft.message,
            date: display_date(&now),
        };
        self.messages.insert(0, message);
        Ok(&self.messages[0])
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::UpdateField(field, value) => self.update_field(field, value),
            FormAction::Submit { policy, now } => {
                self.submissions = self.submissions.wrapping_add(1);
                let outcome = match self.submit(policy, now) {
                    Ok(message) => {
                        info!("Accepted peace message {}", message.id);
                        if let Ok(json) = serde_json::to_string(message) {
                            debug!("Stored message: {}", json);
                        }
                        SubmitOutcome::Accepted { id: message.id }
                    }
                    Err(e) => {
                        warn!("Rejected peace message: {}", e);
                        SubmitOutcome::Rejected(e)
                    }
                };
                self.last_outcome = Some(outcome);
            }
        }
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn noon() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 7, 12, 0, 0).unwrap()
    }

    fn fill(state: &mut FormState, name: &str, email: &str, message: &str) {
        state.update_field(FormField::Name, name.to_string());
        state.update_field(FormField::Email, email.to_string());
        state.update_field(FormField::Message, message.to_string());
    }

    #[test]
    fn complete_draft_is_prepended_and_cleared() {
        let mut state = FormState::default();
        fill(&mut state, "Amina", "a@example.com", "Let's choose dialogue.");

        let stored = state
            .submit(SubmissionPolicy::RequireAllFields, noon())
            .unwrap()
            .clone();

        assert_eq!(stored.name, "Amina");
        assert_eq!(stored.email, "a@example.com");
        assert_eq!(stored.message, "Let's choose dialogue.");
        assert_eq!(stored.date, "3/7/2026");
        assert_eq!(stored.id, noon().timestamp_millis());
        assert_eq!(state.messages(), &[stored]);
        assert_eq!(state.draft, ContactFormDraft::default());
    }

    #[test]
    fn strict_policy_rejects_any_empty_field() {
        for missing in [FormField::Name, FormField::Email, FormField::Message] {
            let mut state = FormState::default();
            fill(&mut state, "Amina", "a@example.com", "Hello");
            state.update_field(missing, String::new());
            let before = state.draft.clone();

            let result = state.submit(SubmissionPolicy::RequireAllFields, noon());

            assert_eq!(result, Err(SubmitError::MissingFields));
            assert!(state.messages().is_empty());
            assert_eq!(state.draft, before);
        }
    }

    #[test]
    fn lenient_policy_accepts_empty_draft() {
        let mut state = FormState::default();
        let stored = state.submit(SubmissionPolicy::AcceptAny, noon()).unwrap();
        assert_eq!(stored.name, "");
        assert_eq!(state.messages().len(), 1);
    }

    #[test]
    fn newest_message_comes_first() {
        let mut state = FormState::default();
        fill(&mut state, "A", "a@example.com", "first");
        state.submit(SubmissionPolicy::RequireAllFields, noon()).unwrap();
        fill(&mut state, "B", "b@example.com", "second");
        state
            .submit(SubmissionPolicy::RequireAllFields, noon() + Duration::seconds(5))
            .unwrap();

        let names: Vec<&str> = state.messages().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() {
        let mut state = FormState::default();
        for _ in 0..3 {
            fill(&mut state, "A", "a@example.com", "same instant");
            state.submit(SubmissionPolicy::RequireAllFields, noon()).unwrap();
        }
        let ids: Vec<i64> = state.messages().iter().map(|m| m.id).collect();
        let base = noon().timestamp_millis();
        assert_eq!(ids, [base + 2, base + 1, base]);
    }

    #[test]
    fn email_is_not_validated() {
        let mut state = FormState::default();
        fill(&mut state, "A", "not an email", "peace");
        assert!(state.submit(SubmissionPolicy::RequireAllFields, noon()).is_ok());
    }

    #[test]
    fn reducer_records_outcome_and_counts_attempts() {
        let state = Rc::new(FormState::default());
        let state = state.reduce(FormAction::Submit {
            policy: SubmissionPolicy::RequireAllFields,
            now: noon(),
        });
        assert_eq!(state.submissions, 1);
        assert_eq!(
            state.last_outcome,
            Some(SubmitOutcome::Rejected(SubmitError::MissingFields))
        );

        let state = state.reduce(FormAction::UpdateField(FormField::Name, "A".into()));
        let state = state.reduce(FormAction::UpdateField(FormField::Email, "a@x".into()));
        let state = state.reduce(FormAction::UpdateField(FormField::Message, "hi".into()));
        let state = state.reduce(FormAction::Submit {
            policy: SubmissionPolicy::RequireAllFields,
            now: noon(),
        });
        assert_eq!(state.submissions, 2);
        assert_eq!(
            state.last_outcome,
            Some(SubmitOutcome::Accepted {
                id: noon().timestamp_millis()
            })
        );
        assert_eq!(state.messages().len(), 1);
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("email".parse::<FormField>(), Ok(FormField::Email));
        assert_eq!(
            "phone".parse::<FormField>(),
            Err(SubmitError::UnknownField("phone".to_string()))
        );
    }

    #[test]
    fn date_has_no_zero_padding() {
        let late = Local.with_ymd_and_hms(2025, 12, 31, 12, 0, 0).unwrap();
        assert_eq!(display_date(&late), "12/31/2025");
    }
}
