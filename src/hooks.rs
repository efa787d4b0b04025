//! Global `before` hook execution.
//!
//! Hooks run strictly in registration order, exactly once per run, entirely
//! before the suite executor starts. Success is silent; a failing or missing
//! hook produces the uniform two-event failure report and never aborts the
//! hooks behind it.

use crate::errors::{run_guarded, Failure, Outcome};
use crate::events::{EventSink, ResultEvent};
use crate::naming;
use crate::registry::HookDescriptor;

pub struct HookRunner;

impl HookRunner {
    /// Runs every hook to completion, emitting failure events into `sink`.
    pub fn run(hooks: Vec<HookDescriptor>, sink: &mut dyn EventSink) {
        for hook in hooks {
            Self::run_hook(hook, sink);
        }
    }

    fn run_hook(mut hook: HookDescriptor, sink: &mut dyn EventSink) {
        let display = naming::resolve_hook_name(hook.explicit.as_deref(), hook.ordinal);
        match hook.body.as_mut() {
            None => Self::report_failure(display, Failure::missing_callable(), sink),
            Some(body) => match run_guarded(body) {
                Outcome::Passed => {}
                Outcome::Failed(failure) => Self::report_failure(display, failure, sink),
            },
        }
    }

    fn report_failure(display: String, failure: Failure, sink: &mut dyn EventSink) {
        sink.emit(ResultEvent::failed(display));
        sink.emit(ResultEvent::failed(failure.message));
    }
}
