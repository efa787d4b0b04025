//! # Verdict Registrar
//!
//! The `describe`/`it`/`before` entry points and the run-scoped state they
//! mutate. All registration goes through an explicit [`RunContext`] value
//! rather than process-wide state, so multiple isolated runs can coexist in
//! one process and tests need no global reset logic.
//!
//! Registration Invariant: the context is mutated only during the
//! registration phase. Execution consumes the context by value (see
//! `engine::run`), so a registered tree can never be mutated mid-run.

use crate::errors::{BodyFn, Failure};

/// A suite or test, in registration order under its parent.
pub enum Node {
    Suite(SuiteNode),
    Test(TestNode),
}

/// A grouping node. Contributes no event of its own during execution.
pub struct SuiteNode {
    /// Explicit name, if the suite was registered with one.
    pub explicit: Option<String>,
    /// Anonymous-suite counter snapshot taken at creation.
    pub ordinal: u32,
    /// Children in registration order.
    pub children: Vec<Node>,
}

impl SuiteNode {
    fn new(explicit: Option<String>, ordinal: u32) -> Self {
        Self {
            explicit,
            ordinal,
            children: Vec::new(),
        }
    }
}

/// A leaf node whose body outcome determines its emitted events.
pub struct TestNode {
    pub name: String,
    pub body: BodyFn,
}

/// A globally registered `before` hook, ordered by registration.
///
/// A missing body is a valid, always-failing state; the hook runner reports
/// it with the fixed missing-callable message.
pub struct HookDescriptor {
    /// Explicit name, if the hook was registered with one.
    pub explicit: Option<String>,
    /// Anonymous-hook counter snapshot taken at creation.
    pub ordinal: u32,
    pub body: Option<BodyFn>,
}

/// A `before` registration, resolved into its call shape exactly once, at
/// construction. Downstream code never re-inspects how the hook was called.
pub enum Hook {
    /// No name, no body.
    Anonymous,
    /// Name only, no body.
    Named(String),
    /// Body only, no name.
    AnonymousFn(BodyFn),
    /// Name and body.
    NamedFn(String, BodyFn),
}

impl Hook {
    pub fn anonymous() -> Self {
        Hook::Anonymous
    }

    pub fn named(name: impl Into<String>) -> Self {
        Hook::Named(name.into())
    }

    pub fn with_fn(body: impl FnMut() -> Result<(), Failure> + 'static) -> Self {
        Hook::AnonymousFn(Box::new(body))
    }

    pub fn named_fn(
        name: impl Into<String>,
        body: impl FnMut() -> Result<(), Failure> + 'static,
    ) -> Self {
        Hook::NamedFn(name.into(), Box::new(body))
    }

    fn into_parts(self) -> (Option<String>, Option<BodyFn>) {
        match self {
            Hook::Anonymous => (None, None),
            Hook::Named(name) => (Some(name), None),
            Hook::AnonymousFn(body) => (None, Some(body)),
            Hook::NamedFn(name, body) => (Some(name), Some(body)),
        }
    }
}

/// Isolated mutable state for one run: the suite tree under construction,
/// the ordered hook list, and the two anonymous-node counters.
///
/// Create one per run, register against it, then hand it to `engine::run`.
/// The root is a nameless child list, not a suite, so it never appears in
/// qualified names.
#[derive(Default)]
pub struct RunContext {
    top_level: Vec<Node>,
    hooks: Vec<HookDescriptor>,
    /// Suites currently open for registration, innermost last.
    scope: Vec<SuiteNode>,
    suite_counter: u32,
    hook_counter: u32,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a named suite and runs `body` with the suite as the active
    /// scope, so nested `describe`/`it` calls attach to it.
    pub fn describe(&mut self, name: impl Into<String>, body: impl FnOnce(&mut RunContext)) {
        self.register_suite(Some(name.into()), Some(Box::new(body)));
    }

    /// Registers an anonymous suite; its display name is `describe #K` for
    /// the counter value snapshotted here.
    pub fn describe_anonymous(&mut self, body: impl FnOnce(&mut RunContext)) {
        self.register_suite(None, Some(Box::new(body)));
    }

    /// Registers a named suite with no body: a valid, childless suite.
    pub fn describe_empty(&mut self, name: impl Into<String>) {
        self.register_suite(Some(name.into()), None);
    }

    /// Registers a test under the currently active scope.
    pub fn it(
        &mut self,
        name: impl Into<String>,
        body: impl FnMut() -> Result<(), Failure> + 'static,
    ) {
        let test = TestNode {
            name: name.into(),
            body: Box::new(body),
        };
        self.attach(Node::Test(test));
    }

    /// Registers a global `before` hook. Hooks are flat: they belong to the
    /// run, not to any suite, and fire once ahead of the entire tree.
    pub fn before(&mut self, hook: Hook) {
        self.hook_counter += 1;
        let ordinal = self.hook_counter;
        let (explicit, body) = hook.into_parts();
        self.hooks.push(HookDescriptor {
            explicit,
            ordinal,
            body,
        });
    }

    /// Tears the context down into its execution inputs.
    pub(crate) fn into_parts(self) -> (Vec<HookDescriptor>, Vec<Node>) {
        (self.hooks, self.top_level)
    }

    fn register_suite(
        &mut self,
        explicit: Option<String>,
        body: Option<Box<dyn FnOnce(&mut RunContext) + '_>>,
    ) {
        // The counter advances for named suites too; ordinals stay strictly
        // monotonic across the whole run.
        self.suite_counter += 1;
        let suite = SuiteNode::new(explicit, self.suite_counter);
        self.scope.push(suite);
        if let Some(body) = body {
            body(self);
        }
        // The scope top is the suite pushed above: nested registrations
        // balance their own pushes and pops before returning here.
        if let Some(suite) = self.scope.pop() {
            self.attach(Node::Suite(suite));
        }
    }

    fn attach(&mut self, node: Node) {
        match self.scope.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.top_level.push(node),
        }
    }
}
