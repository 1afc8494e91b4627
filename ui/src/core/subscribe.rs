//! Subscription form state machine.
//!
//! ```text
//! Idle ──submit──▶ Sending ──ok──▶ Submitted ──dismiss(delay)──▶ Idle
//!   ▲                 │
//!   │                 └──err──▶ Failed ──submit──▶ Sending
//! ```
//!
//! The engine is pure. [`submit_once`] and [`dismiss_after`] drive it against
//! a shared handle; the form runs the first from its coroutine and spawns the
//! second in its own scope, so unmounting the form cancels a pending dismissal.

use std::future::Future;

use dioxus::logger::tracing::{debug, error, info};
use thiserror::Error;

use crate::core::state::SharedState;
use crate::core::submit::{SubmitError, Submission};
use crate::core::timing::sleep_ms;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubscribeStatus {
    #[default]
    Idle,
    Sending,
    Submitted,
    Failed(SubmitError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
}

/// Presence check only: both fields must be non-blank.
pub fn validate(name: &str, email: &str) -> Result<Submission, FieldError> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        return Err(FieldError::MissingName);
    }
    if email.is_empty() {
        return Err(FieldError::MissingEmail);
    }
    Ok(Submission {
        name: name.to_string(),
        email: email.to_string(),
    })
}

/// Why a submit request did not start a new attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BeginError {
    #[error(transparent)]
    Invalid(#[from] FieldError),
    #[error("a submission is already in flight")]
    InFlight,
    /// The confirmation is still showing; a queued duplicate must not resend.
    #[error("already submitted")]
    AlreadySubmitted,
}

/// A submission that has been accepted and must now be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub id: u64,
    pub submission: Submission,
}

/// Confirmation dismissal owed to attempt `attempt_id` after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledDismiss {
    pub attempt_id: u64,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubscribeEngine {
    pub status: SubscribeStatus,
    pub last_field_error: Option<FieldError>,
    attempt: u64,
    dismiss_after_ms: Option<u64>,
}

impl SubscribeEngine {
    pub fn new(dismiss_after_ms: Option<u64>) -> Self {
        Self {
            dismiss_after_ms,
            ..Self::default()
        }
    }

    /// The "submitted yes/no" flag shown by the page.
    pub fn is_submitted(&self) -> bool {
        self.status == SubscribeStatus::Submitted
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubscribeStatus::Sending
    }

    /// Validate and move to `Sending`. Invalid input and repeated submits leave the state untouched.
    pub fn begin(&mut self, name: &str, email: &str) -> Result<Attempt, BeginError> {
        match self.status {
            SubscribeStatus::Sending => return Err(BeginError::InFlight),
            SubscribeStatus::Submitted => return Err(BeginError::AlreadySubmitted),
            SubscribeStatus::Idle | SubscribeStatus::Failed(_) => {}
        }

        let submission = validate(name, email).map_err(|err| {
            self.last_field_error = Some(err);
            BeginError::Invalid(err)
        })?;

        self.attempt += 1;
        self.last_field_error = None;
        self.status = SubscribeStatus::Sending;

        Ok(Attempt {
            id: self.attempt,
            submission,
        })
    }

    /// Record the outcome of attempt `attempt_id`. On success returns the dismissal to schedule.
    pub fn finish(
        &mut self,
        attempt_id: u64,
        outcome: Result<(), SubmitError>,
    ) -> Option<ScheduledDismiss> {
        if attempt_id != self.attempt || !self.is_sending() {
            return None;
        }

        match outcome {
            Ok(()) => {
                self.status = SubscribeStatus::Submitted;
                self.dismiss_after_ms.map(|delay_ms| ScheduledDismiss {
                    attempt_id,
                    delay_ms,
                })
            }
            Err(err) => {
                self.status = SubscribeStatus::Failed(err);
                None
            }
        }
    }

    /// Return to `Idle` if the confirmation still belongs to `attempt_id`. Returns true if it did.
    pub fn dismiss(&mut self, attempt_id: u64) -> bool {
        if attempt_id == self.attempt && self.is_submitted() {
            self.status = SubscribeStatus::Idle;
            true
        } else {
            false
        }
    }
}

/// What one submit request led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled {
    Ignored(BeginError),
    Sent {
        result: Result<(), SubmitError>,
        dismiss: Option<ScheduledDismiss>,
    },
}

/// Run one submit request: begin, send, record the outcome. A returned
/// dismissal is the caller's to schedule.
pub async fn submit_once<S, F, Fut>(engine: &mut S, name: &str, email: &str, send: F) -> Handled
where
    S: SharedState<SubscribeEngine>,
    F: FnOnce(Submission) -> Fut,
    Fut: Future<Output = Result<(), SubmitError>>,
{
    let attempt = match engine.update(|eng| eng.begin(name, email)) {
        Ok(attempt) => attempt,
        Err(err) => {
            debug!("subscription not sent: {err}");
            return Handled::Ignored(err);
        }
    };

    let result = send(attempt.submission).await;
    match &result {
        Ok(()) => info!("subscription accepted"),
        Err(err) => error!("subscription failed: {err}"),
    }

    let dismiss = engine.update(|eng| eng.finish(attempt.id, result.clone()));
    Handled::Sent { result, dismiss }
}

/// Wait out the delay, then clear the confirmation if it is still the one
/// scheduled. Dropping the future first leaves the engine untouched.
pub async fn dismiss_after<S>(mut engine: S, dismiss: ScheduledDismiss) -> bool
where
    S: SharedState<SubscribeEngine>,
{
    sleep_ms(dismiss.delay_ms).await;
    engine.update(|eng| eng.dismiss(dismiss.attempt_id))
}
