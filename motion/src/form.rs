//! Contact form submission lifecycle.
//!
//! `Idle -> Submitting -> Success | Error -> Idle`. While a submission is in
//! flight or its result is on display, the submit button stays disabled, so
//! there is never more than one request per submission. Success clears the
//! fields on revert; failure keeps them so the visitor can retry.
//!
//! ERROR HANDLING
//! ==============
//! Transport errors, undecodable bodies and `success: false` responses all
//! collapse into the same error state. The distinction only reaches the log.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::MotionConfig;
use crate::sched::Scheduler;

pub const LABEL_SENDING: &str = "Envoi en cours...";
pub const LABEL_SUCCESS: &str = "Message envoyé !";
pub const LABEL_ERROR: &str = "Erreur — réessayez";

pub const SUCCESS_BACKGROUND: &str = "linear-gradient(135deg, #16a34a, #0d7a32)";
pub const ERROR_BACKGROUND: &str = "linear-gradient(135deg, #dc2626, #b91c1c)";

/// Fallback message when the server reports failure without one.
const DEFAULT_REJECTION: &str = "Erreur serveur";

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("bad json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("server rejected the message: {0}")]
    Rejected(String),
}

/// Field values keyed by field name, sent as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormPayload(BTreeMap<String, String>);

impl FormPayload {
    /// Build from `(name, value)` pairs. A repeated name keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// # Errors
    ///
    /// Returns [`FormError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, FormError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Response body from the form endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl ContactResponse {
    /// # Errors
    ///
    /// Returns [`FormError::Rejected`] unless `success` is `true`.
    pub fn into_result(self) -> Result<(), FormError> {
        if self.success {
            Ok(())
        } else {
            Err(FormError::Rejected(
                self.message.unwrap_or_else(|| DEFAULT_REJECTION.to_owned()),
            ))
        }
    }
}

/// Decode a response body and interpret it.
///
/// # Errors
///
/// Returns [`FormError::Json`] for an undecodable body and
/// [`FormError::Rejected`] for an explicit failure.
pub fn decode_response(body: &str) -> Result<(), FormError> {
    serde_json::from_str::<ContactResponse>(body)?.into_result()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// What the submit button should look like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    /// `None` restores the stylesheet background.
    pub background: Option<&'static str>,
    pub disabled: bool,
}

/// A finished request, shown until `revert_after_ms` elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    pub view: ButtonView,
    pub revert_after_ms: u32,
}

/// The return to idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revert {
    pub view: ButtonView,
    pub clear_fields: bool,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    phase: FormPhase,
    original_label: String,
    revert_ms: u32,
}

impl ContactForm {
    #[must_use]
    pub fn new(original_label: &str, cfg: &MotionConfig) -> Self {
        Self {
            phase: FormPhase::Idle,
            original_label: original_label.to_owned(),
            revert_ms: cfg.form_revert_ms,
        }
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    #[must_use]
    pub fn view(&self) -> ButtonView {
        match self.phase {
            FormPhase::Idle => ButtonView {
                label: self.original_label.clone(),
                background: None,
                disabled: false,
            },
            FormPhase::Submitting => ButtonView {
                label: LABEL_SENDING.to_owned(),
                background: None,
                disabled: true,
            },
            FormPhase::Success => ButtonView {
                label: LABEL_SUCCESS.to_owned(),
                background: Some(SUCCESS_BACKGROUND),
                disabled: true,
            },
            FormPhase::Error => ButtonView {
                label: LABEL_ERROR.to_owned(),
                background: Some(ERROR_BACKGROUND),
                disabled: true,
            },
        }
    }

    /// Start a submission.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InFlight`] unless the form is idle.
    pub fn begin(&mut self) -> Result<ButtonView, FormError> {
        if self.phase != FormPhase::Idle {
            return Err(FormError::InFlight);
        }
        self.phase = FormPhase::Submitting;
        Ok(self.view())
    }

    /// Record the request outcome. `None` if no submission was in flight.
    pub fn finish(&mut self, outcome: Result<(), FormError>) -> Option<Settled> {
        if self.phase != FormPhase::Submitting {
            return None;
        }
        self.phase = match outcome {
            Ok(()) => FormPhase::Success,
            Err(err) => {
                log::warn!("contact form: {err}");
                FormPhase::Error
            }
        };
        Some(Settled { view: self.view(), revert_after_ms: self.revert_ms })
    }

    /// Return to idle after a result. `None` unless a result is on display.
    pub fn revert(&mut self) -> Option<Revert> {
        let clear_fields = match self.phase {
            FormPhase::Success => true,
            FormPhase::Error => false,
            FormPhase::Idle | FormPhase::Submitting => return None,
        };
        self.phase = FormPhase::Idle;
        Some(Revert { view: self.view(), clear_fields })
    }
}

/// Apply a request outcome and schedule the revert.
///
/// `apply` receives the button view and whether to clear the fields: first
/// for the result, then again for the revert.
pub fn settle(
    form: &Rc<RefCell<ContactForm>>,
    sched: &Rc<dyn Scheduler>,
    outcome: Result<(), FormError>,
    apply: impl Fn(&ButtonView, bool) + 'static,
) {
    let settled = form.borrow_mut().finish(outcome);
    let Some(settled) = settled else {
        return;
    };
    apply(&settled.view, false);
    let form = Rc::clone(form);
    sched.set_timeout(
        settled.revert_after_ms,
        Box::new(move || {
            let revert = form.borrow_mut().revert();
            if let Some(revert) = revert {
                apply(&revert.view, revert.clear_fields);
            }
        }),
    );
}
