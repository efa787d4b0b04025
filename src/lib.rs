pub use crate::errors::{BodyFn, Failure, Outcome};
pub use crate::events::{EventBuffer, EventSink, ResultEvent, RunSummary};
pub use crate::registry::{Hook, RunContext};

pub mod engine;
pub mod errors;
pub mod events;
pub mod executor;
pub mod hooks;
pub mod naming;
pub mod registry;
