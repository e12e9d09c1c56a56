//! State and outcome model for the contact form submission flow.
//!
//! Kept free of browser types so the transition rules can be unit tested on
//! the host target. The component layer only decides *when* these transitions
//! happen; *what* they produce lives here.

/// Confirmation shown after the worker accepts a submission.
pub const SUCCESS_MESSAGE: &str = "¡Gracias! Tu mensaje ha sido enviado.";

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum MessageColor {
    Neutral,
    Success,
    Error,
}

impl MessageColor {
    pub fn css_class(self) -> &'static str {
        match self {
            MessageColor::Neutral => "",
            MessageColor::Success => "status-success",
            MessageColor::Error => "status-error",
        }
    }
}

/// Local UI state of the contact form. Created fresh per page load and
/// mutated only by the submission flow.
#[derive(Clone, PartialEq, Debug)]
pub struct SubmissionState {
    pub submitting: bool,
    pub message: String,
    pub color: MessageColor,
}

impl SubmissionState {
    /// Single-flight guard: a new attempt is accepted only while no other
    /// attempt is in flight. The disabled submit button mirrors this but is
    /// not what enforces it.
    pub fn accepts_submit(&self) -> bool {
        !self.submitting
    }

    pub fn idle() -> Self {
        Self {
            submitting: false,
            message: String::new(),
            color: MessageColor::Neutral,
        }
    }

    /// Entered at submit-start: disables the submit control and clears any
    /// message left over from a previous attempt.
    pub fn in_flight() -> Self {
        Self {
            submitting: true,
            message: String::new(),
            color: MessageColor::Neutral,
        }
    }

    pub fn delivered() -> Self {
        Self {
            submitting: false,
            message: SUCCESS_MESSAGE.to_string(),
            color: MessageColor::Success,
        }
    }

    pub fn failed(detail: &str) -> Self {
        Self {
            submitting: false,
            message: format!("Error: {detail}"),
            color: MessageColor::Error,
        }
    }
}

/// How a single submission attempt settled.
#[derive(Clone, PartialEq, Debug)]
pub enum Outcome {
    /// 2xx from the worker. The response body is ignored.
    Delivered,
    /// Non-2xx from the worker; the body text is the error detail, verbatim.
    Rejected(String),
    /// The request never produced a response (DNS, connection, timeout).
    Unreachable(String),
}

impl Outcome {
    pub fn from_response(ok: bool, body: String) -> Self {
        if ok {
            Outcome::Delivered
        } else {
            Outcome::Rejected(body)
        }
    }

    /// Folds the body read into the outcome: the attempt is not decided
    /// until the body text arrives, so a failed read is a failure even when
    /// the status line said 2xx.
    pub fn from_attempt<E: ToString>(ok: bool, body: Result<String, E>) -> Self {
        match body {
            Ok(body) => Self::from_response(ok, body),
            Err(e) => Outcome::Unreachable(e.to_string()),
        }
    }

    /// Form fields are cleared only when the worker accepted the submission,
    /// so the user can correct and resubmit after a failure.
    pub fn clears_form(&self) -> bool {
        matches!(self, Outcome::Delivered)
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Outcome::Delivered => None,
            Outcome::Rejected(detail) | Outcome::Unreachable(detail) => Some(detail),
        }
    }

    /// State the form returns to once the attempt settles. Never leaves
    /// `submitting` set.
    pub fn settle(&self) -> SubmissionState {
        match self {
            Outcome::Delivered => SubmissionState::delivered(),
            Outcome::Rejected(detail) | Outcome::Unreachable(detail) => {
                SubmissionState::failed(detail)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MessageColor, Outcome, SubmissionState, SUCCESS_MESSAGE};

    #[test]
    fn submit_start_clears_previous_message() {
        let state = SubmissionState::in_flight();
        assert!(state.submitting);
        assert!(state.message.is_empty());
        assert_eq!(state.color, MessageColor::Neutral);
    }

    #[test]
    fn accepted_response_maps_to_success_message() {
        let outcome = Outcome::from_response(true, "ok".to_string());
        let state = outcome.settle();
        assert!(!state.submitting);
        assert_eq!(state.message, SUCCESS_MESSAGE);
        assert_eq!(state.color, MessageColor::Success);
    }

    #[test]
    fn rejected_response_surfaces_body_verbatim() {
        let outcome = Outcome::from_response(false, "Invalid token".to_string());
        let state = outcome.settle();
        assert!(!state.submitting);
        assert_eq!(state.message, "Error: Invalid token");
        assert_eq!(state.color, MessageColor::Error);
    }

    #[test]
    fn rejected_response_with_empty_body_keeps_literal_prefix() {
        let state = Outcome::from_response(false, String::new()).settle();
        assert_eq!(state.message, "Error: ");
    }

    #[test]
    fn transport_failure_surfaces_exception_text() {
        let outcome = Outcome::Unreachable("JsError: Failed to fetch".to_string());
        let state = outcome.settle();
        assert_eq!(state.message, "Error: JsError: Failed to fetch");
        assert_eq!(state.color, MessageColor::Error);
    }

    #[test]
    fn failed_body_read_is_a_failure_even_on_accepted_status() {
        let outcome = Outcome::from_attempt(true, Err::<String, _>("body stream aborted"));
        assert_eq!(
            outcome,
            Outcome::Unreachable("body stream aborted".to_string())
        );
        assert!(!outcome.clears_form());
        assert_eq!(outcome.settle().message, "Error: body stream aborted");
    }

    #[test]
    fn successful_body_read_keeps_status_based_outcome() {
        assert_eq!(
            Outcome::from_attempt::<&str>(true, Ok("ignored".to_string())),
            Outcome::Delivered
        );
        assert_eq!(
            Outcome::from_attempt::<&str>(false, Ok("Invalid token".to_string())),
            Outcome::Rejected("Invalid token".to_string())
        );
    }

    #[test]
    fn in_flight_state_rejects_a_second_attempt() {
        assert!(!SubmissionState::in_flight().accepts_submit());
        assert!(SubmissionState::idle().accepts_submit());
        assert!(SubmissionState::delivered().accepts_submit());
        assert!(SubmissionState::failed("Invalid token").accepts_submit());
    }

    #[test]
    fn form_is_cleared_only_on_delivery() {
        assert!(Outcome::Delivered.clears_form());
        assert!(!Outcome::Rejected("Invalid token".to_string()).clears_form());
        assert!(!Outcome::Unreachable("offline".to_string()).clears_form());
    }

    #[test]
    fn every_settled_outcome_leaves_submitting_false() {
        let outcomes = [
            Outcome::Delivered,
            Outcome::Rejected("nope".to_string()),
            Outcome::Unreachable("offline".to_string()),
        ];
        for outcome in outcomes {
            assert!(!outcome.settle().submitting);
        }
    }

    #[test]
    fn resubmission_is_possible_after_either_terminal_state() {
        // Success and failure both return control to idle semantics: the
        // message stays visible but submitting is false again.
        for terminal in [SubmissionState::delivered(), SubmissionState::failed("x")] {
            assert!(!terminal.submitting);
            let next = SubmissionState::in_flight();
            assert!(next.submitting);
            assert!(next.message.is_empty());
        }
    }
}
