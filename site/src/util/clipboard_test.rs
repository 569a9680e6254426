use futures::executor::block_on;
use std::cell::Cell;

use super::*;

#[test]
fn async_success_skips_manual_fallback() {
    let manual_called = Cell::new(false);
    let outcome = block_on(copy_with_fallbacks(Some(async { true }), || {
        manual_called.set(true);
        true
    }));
    assert_eq!(outcome, CopyOutcome::Clipboard);
    assert!(!manual_called.get());
}

#[test]
fn async_failure_falls_back_to_manual() {
    let outcome = block_on(copy_with_fallbacks(Some(async { false }), || true));
    assert_eq!(outcome, CopyOutcome::Manual);
}

#[test]
fn missing_async_api_goes_straight_to_manual() {
    let outcome = block_on(copy_with_fallbacks(None::<std::future::Ready<bool>>, || true));
    assert_eq!(outcome, CopyOutcome::Manual);
}

#[test]
fn both_failing_means_navigate() {
    let outcome = block_on(copy_with_fallbacks(Some(async { false }), || false));
    assert_eq!(outcome, CopyOutcome::Navigate);
    assert!(!outcome.copied());
}

#[test]
fn copied_is_true_for_either_copy_path() {
    assert!(CopyOutcome::Clipboard.copied());
    assert!(CopyOutcome::Manual.copied());
}

#[test]
fn successful_copy_is_announced_as_success() {
    for outcome in [CopyOutcome::Clipboard, CopyOutcome::Manual] {
        assert_eq!(copied_notice(outcome), Some((COPIED_MESSAGE, Severity::Success)));
    }
    assert_eq!(copied_notice(CopyOutcome::Navigate), None);
}
