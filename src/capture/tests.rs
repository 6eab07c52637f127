//! Unit tests for the capture boundary.

use super::{capture, capture_result};
use crate::Outcome;

#[test]
fn a_normal_return_becomes_a_plain_success() {
    let outcome = capture(|| 42);
    assert_eq!(outcome.value(), Some(&42));
    assert!(outcome.success_messages().is_empty());
}

#[test]
fn a_panic_becomes_a_failure_with_one_message() {
    let outcome = capture(|| -> i32 { panic!("boom") });
    match outcome {
        Outcome::Failure { messages } => {
            assert_eq!(messages.len(), 1);
            let fault = messages.first().map_or_else(|| panic!("missing message"), |m| m);
            assert_eq!(fault.message(), "boom");
            assert_eq!(fault.downcast_ref::<&str>(), Some(&"boom"));
        }
        Outcome::Success { .. } => panic!("expected a failure"),
    }
}

#[test]
fn formatted_panic_payloads_render_their_text() {
    let port = 99;
    let outcome = capture(|| -> i32 { panic!("bad port {port}") });
    let messages = outcome.failed_with();
    assert_eq!(messages.first().map(super::CapturedPanic::message), Some("bad port 99"));
}

#[test]
fn non_textual_payloads_stay_reachable_by_downcast() {
    let outcome = capture(|| -> i32 { std::panic::panic_any(7_u8) });
    let messages = outcome.failed_with();
    let fault = messages.first().map_or_else(|| panic!("missing message"), |m| m);
    assert_eq!(fault.message(), "opaque panic payload");
    assert_eq!(fault.downcast_ref::<u8>(), Some(&7));
}

#[test]
fn capture_result_folds_both_arms() {
    let ok: Outcome<i32, String> = capture_result(|| Ok(5));
    assert_eq!(ok.value(), Some(&5));

    let bad: Outcome<i32, String> = capture_result(|| Err("no".to_owned()));
    assert_eq!(bad.messages(), ["no".to_owned()]);
}
