//! Verdict Failure Model
//!
//! Every hook or test body is a zero-argument fallible callable: it either
//! returns normally or surfaces a [`Failure`] carrying a human-readable
//! message. The assertion library is an external collaborator; all this core
//! consumes from it is that message, verbatim.
//!
//! Both the hook runner and the suite executor invoke bodies through
//! [`run_guarded`], which converts the body's result into an explicit
//! [`Outcome`]. Failures are caught at the point of invocation and turned
//! into failing result events; nothing propagates upward to abort a run.

use miette::Diagnostic;
use thiserror::Error;

/// A failure raised by a hook or test body.
///
/// Carries the message that becomes the second event of the failing unit's
/// two-event report (e.g. "expected 1 to equal 2", "BOOM!").
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(verdict::raised_failure))]
pub struct Failure {
    pub message: String,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure reported for a hook registered without a callable body.
    ///
    /// The message text is fixed; reporters key on it.
    pub fn missing_callable() -> Self {
        Self::new("this.fn is not a function")
    }
}

/// The result of one guarded body invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed(Failure),
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

/// A registered hook or test body.
pub type BodyFn = Box<dyn FnMut() -> Result<(), Failure>>;

/// Invokes a body and converts its result into an [`Outcome`].
///
/// This is the single fallible-call wrapper shared by the hook runner and
/// the suite executor; neither inspects body results any other way.
pub fn run_guarded(body: &mut BodyFn) -> Outcome {
    match body() {
        Ok(()) => Outcome::Passed,
        Err(failure) => Outcome::Failed(failure),
    }
}
