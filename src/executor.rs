//! Suite tree execution.
//!
//! Depth-first, pre-order traversal of the registered tree in
//! child-registration order, invoked once after the hook runner completes.
//! Suites emit nothing themselves; each test emits exactly one passing event
//! or the uniform two-event failure report. A failing test never
//! short-circuits the tests behind it.

use crate::errors::{run_guarded, Outcome};
use crate::events::{EventSink, ResultEvent};
use crate::naming;
use crate::registry::{Node, SuiteNode, TestNode};

pub struct SuiteExecutor;

impl SuiteExecutor {
    /// Executes the root's children, emitting one ordered event stream.
    pub fn run(top_level: Vec<Node>, sink: &mut dyn EventSink) {
        let mut ancestors = Vec::new();
        Self::run_nodes(top_level, &mut ancestors, sink);
    }

    fn run_nodes(nodes: Vec<Node>, ancestors: &mut Vec<String>, sink: &mut dyn EventSink) {
        for node in nodes {
            match node {
                Node::Suite(suite) => Self::run_suite(suite, ancestors, sink),
                Node::Test(test) => Self::run_test(test, ancestors, sink),
            }
        }
    }

    fn run_suite(suite: SuiteNode, ancestors: &mut Vec<String>, sink: &mut dyn EventSink) {
        let display = naming::resolve_suite_name(suite.explicit.as_deref(), suite.ordinal);
        ancestors.push(display);
        Self::run_nodes(suite.children, ancestors, sink);
        ancestors.pop();
    }

    fn run_test(mut test: TestNode, ancestors: &[String], sink: &mut dyn EventSink) {
        let qualified = naming::qualified_name(ancestors, &test.name);
        match run_guarded(&mut test.body) {
            Outcome::Passed => sink.emit(ResultEvent::passed(qualified)),
            Outcome::Failed(failure) => {
                sink.emit(ResultEvent::failed(qualified));
                sink.emit(ResultEvent::failed(failure.message));
            }
        }
    }
}
