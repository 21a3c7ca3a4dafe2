use log::warn;

use crate::content::THANK_YOU;
use crate::state::form::SubmitOutcome;

pub fn acknowledgment_text(outcome: &SubmitOutcome) -> String {
    match outcome {
        SubmitOutcome::Accepted { .. } => THANK_YOU.to_string(),
        SubmitOutcome::Rejected(e) => e.to_string(),
    }
}

/// Blocking browser alert for the outcome of a submit.
pub fn acknowledge(outcome: &SubmitOutcome) {
    let text = acknowledgment_text(outcome);
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(&text) {
                warn!("Could not show acknowledgment: {:?}", e);
            }
        }
        None => warn!("No window to acknowledge submission: {}", text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::form::SubmitError;

    #[test]
    fn rejection_uses_generic_wording() {
        let text = acknowledgment_text(&SubmitOutcome::Rejected(SubmitError::MissingFields));
        assert_eq!(text, "Please fill in all fields");
    }

    #[test]
    fn acceptance_thanks_the_author() {
        let text = acknowledgment_text(&SubmitOutcome::Accepted { id: 1 });
        assert!(text.starts_with("Thank you for your message of peace!"));
    }
}
