//! The reporter-facing surface: event wire shape, the per-unit event-count
//! formula, and end-of-run summaries.

mod common;

use common::{expect_equal, expect_truthy};
use verdict::{engine, Hook, ResultEvent, RunContext, RunSummary};

#[test]
fn event_serializes_to_name_and_passed() {
    let event = ResultEvent::failed("my hook");
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "my hook", "passed": false }));
}

#[test]
fn event_count_matches_per_unit_formula() {
    // 1 passing hook (0 events), 1 failing hook (2), 1 missing-body hook (2),
    // 2 passing tests (1 each), 1 failing test (2).
    let mut ctx = RunContext::new();
    ctx.before(Hook::named_fn("quiet hook", || Ok(())));
    ctx.before(Hook::named_fn("loud hook", || expect_truthy(false)));
    ctx.before(Hook::anonymous());
    ctx.describe("suite", |ctx| {
        ctx.it("passes", || Ok(()));
        ctx.it("fails", || expect_equal(1, 2));
        ctx.it("also passes", || Ok(()));
    });

    let events = engine::run_collected(ctx);
    assert_eq!(events.len(), 8);

    // All hook events precede all test events.
    let first_test_event = events
        .iter()
        .position(|e| e.name.starts_with("suite"))
        .unwrap();
    assert!(events[..first_test_event]
        .iter()
        .all(|e| !e.passed));
}

#[test]
fn summary_reflects_the_stream() {
    let mut ctx = RunContext::new();
    ctx.describe("suite", |ctx| {
        ctx.it("passes", || Ok(()));
        ctx.it("fails", || expect_truthy(false));
    });

    let events = engine::run_collected(ctx);
    let summary = RunSummary::from_events(&events);
    assert_eq!(summary.passed, 1);
    assert_eq!(summary.failed, 2);
    assert!(summary.has_failures());
}
