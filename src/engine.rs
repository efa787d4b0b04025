//! Run orchestration.
//!
//! A run has three strictly sequential phases with no interleaving:
//!
//! 1. **Registration** — `describe`/`it`/`before` calls against a mutable
//!    [`RunContext`] build the tree and hook list.
//! 2. **Hook execution** — every global hook runs exactly once, in order.
//! 3. **Suite execution** — depth-first traversal of the tree.
//!
//! Phase 1 happens before this module is entered; `run` consumes the context
//! and performs phases 2 and 3, delivering the combined ordered event stream
//! to the caller's sink.

use crate::events::{EventBuffer, EventSink, ResultEvent};
use crate::executor::SuiteExecutor;
use crate::hooks::HookRunner;
use crate::registry::RunContext;

/// Executes a fully registered context against the given sink.
pub fn run(ctx: RunContext, sink: &mut dyn EventSink) {
    let (hooks, top_level) = ctx.into_parts();
    HookRunner::run(hooks, sink);
    SuiteExecutor::run(top_level, sink);
}

/// Executes a fully registered context and returns the ordered events.
pub fn run_collected(ctx: RunContext) -> Vec<ResultEvent> {
    let mut buffer = EventBuffer::new();
    run(ctx, &mut buffer);
    buffer.into_events()
}
