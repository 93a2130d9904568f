//! Scenario tests for `Optional` and its combinators.
//!
//! These tests exercise the free functions the way a caller chains them:
//! parsing, validating, and converting values that may be absent.

use maybe::{Optional, and_then, fold, identity, is_absent, is_present, map, with_default};
use rstest::rstest;
use std::cell::Cell;

fn parse_int(text: &str) -> Optional<i32> {
    Optional::from(text.parse::<i32>().ok())
}

fn validate_month(month: i32) -> Optional<i32> {
    if (1..=12).contains(&month) {
        Optional::Present(month)
    } else {
        Optional::Absent
    }
}

// =============================================================================
// Presence
// =============================================================================

#[rstest]
#[case(0)]
#[case(-1)]
#[case(i64::MAX)]
fn present_numbers_are_present_including_zero(#[case] value: i64) {
    let input = Optional::Present(value);
    assert!(is_present(&input));
    assert!(!is_absent(&input));
}

#[rstest]
fn presence_is_structural_for_falsy_payloads() {
    assert!(is_present(&Optional::Present(false)));
    assert!(is_present(&Optional::Present(String::new())));
    assert!(is_present(&Optional::Present(Vec::<u8>::new())));
    assert!(is_present(&Optional::Present(())));
    assert!(is_present(&Optional::Present(Optional::<i32>::Absent)));
}

#[rstest]
fn absent_is_absent() {
    let input: Optional<String> = Optional::Absent;
    assert!(!is_present(&input));
    assert!(is_absent(&input));
}

// =============================================================================
// Fold
// =============================================================================

#[rstest]
fn fold_applies_transform_to_present_payload() {
    assert_eq!(fold(String::from("none"), |n: i32| n.to_string(), Optional::Present(12)), "12");
}

#[rstest]
fn fold_returns_default_and_skips_transform_when_absent() {
    let calls = Cell::new(0);
    let result = fold(
        -1,
        |n: i32| {
            calls.set(calls.get() + 1);
            n
        },
        Optional::Absent,
    );
    assert_eq!(result, -1);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn fold_calls_transform_exactly_once_when_present() {
    let calls = Cell::new(0);
    let result = fold(
        0,
        |n: i32| {
            calls.set(calls.get() + 1);
            n + 1
        },
        Optional::Present(1),
    );
    assert_eq!(result, 2);
    assert_eq!(calls.get(), 1);
}

// =============================================================================
// Map
// =============================================================================

#[rstest]
fn map_square_root_of_present() {
    assert_eq!(map(f64::sqrt, Optional::Present(9.0)), Optional::Present(3.0));
}

#[rstest]
fn map_square_root_of_absent() {
    assert_eq!(map(f64::sqrt, Optional::<f64>::Absent), Optional::Absent);
}

#[rstest]
fn map_does_not_invoke_transform_on_absent() {
    let calls = Cell::new(0);
    let result = map(
        |n: i32| {
            calls.set(calls.get() + 1);
            n * 2
        },
        Optional::Absent,
    );
    assert_eq!(result, Optional::Absent);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn map_changes_payload_type() {
    let lengths = map(|text: String| text.len(), Optional::Present(String::from("month")));
    assert_eq!(lengths, Optional::Present(5));
}

#[rstest]
#[case(Optional::Present("kept"))]
#[case(Optional::Absent)]
fn map_identity_returns_input(#[case] input: Optional<&str>) {
    assert_eq!(map(identity, input), input);
}

// =============================================================================
// And Then
// =============================================================================

#[rstest]
#[case("7", Optional::Present(7))]
#[case("12", Optional::Present(12))]
#[case("1", Optional::Present(1))]
#[case("13", Optional::Absent)]
#[case("0", Optional::Absent)]
#[case("-3", Optional::Absent)]
fn parse_then_validate_month(#[case] text: &str, #[case] expected: Optional<i32>) {
    assert_eq!(and_then(parse_int(text), validate_month), expected);
}

#[rstest]
fn parse_failure_skips_validation() {
    let calls = Cell::new(0);
    let result = and_then(parse_int("abc"), |month| {
        calls.set(calls.get() + 1);
        validate_month(month)
    });
    assert_eq!(result, Optional::Absent);
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn and_then_returns_callback_result_unwrapped() {
    let nested = and_then(Optional::Present(2), |n| Optional::Present(Optional::Present(n)));
    assert_eq!(nested, Optional::Present(Optional::Present(2)));
}

#[rstest]
fn chain_short_circuits_after_absent() {
    let first_calls = Cell::new(0);
    let second_calls = Cell::new(0);

    let step1 = |n: i32| {
        first_calls.set(first_calls.get() + 1);
        Optional::Present(n + 1)
    };
    let step2 = |n: i32| {
        second_calls.set(second_calls.get() + 1);
        Optional::Present(n * 2)
    };

    let result = and_then(and_then(Optional::Absent, step1), step2);

    assert_eq!(result, Optional::Absent);
    assert_eq!(first_calls.get(), 0);
    assert_eq!(second_calls.get(), 0);
}

#[rstest]
fn chain_stops_at_first_absent_step() {
    let order = std::cell::RefCell::new(Vec::new());

    let result = Optional::Present(10)
        .and_then(|n| {
            order.borrow_mut().push("first");
            Optional::Present(n - 10)
        })
        .and_then(|n: i32| {
            order.borrow_mut().push("second");
            if n == 0 {
                Optional::Absent
            } else {
                Optional::Present(100 / n)
            }
        })
        .and_then(|n| {
            order.borrow_mut().push("third");
            Optional::Present(n + 1)
        });

    assert_eq!(result, Optional::Absent);
    assert_eq!(*order.borrow(), vec!["first", "second"]);
}

// =============================================================================
// Defaults and Conversions
// =============================================================================

#[rstest]
#[case("5", 5)]
#[case("x", 1)]
fn with_default_falls_back_on_parse_failure(#[case] text: &str, #[case] expected: i32) {
    assert_eq!(with_default(1, parse_int(text)), expected);
}

#[rstest]
fn ok_or_turns_absence_into_typed_error() {
    #[derive(Debug, PartialEq, Eq)]
    enum MonthError {
        Invalid,
    }

    let parsed = and_then(parse_int("13"), validate_month).ok_or(MonthError::Invalid);
    assert_eq!(parsed, Err(MonthError::Invalid));

    let parsed = and_then(parse_int("3"), validate_month).ok_or(MonthError::Invalid);
    assert_eq!(parsed, Ok(3));
}

#[rstest]
fn transform_panic_propagates_unchanged() {
    let outcome = std::panic::catch_unwind(|| {
        map(|_: i32| -> i32 { panic!("transform failed") }, Optional::Present(1))
    });
    let payload = outcome.expect_err("panic should propagate");
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"transform failed"));
}

#[rstest]
fn optional_is_shareable_across_threads() {
    let shared = std::sync::Arc::new(Optional::Present(String::from("shared")));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = std::sync::Arc::clone(&shared);
            std::thread::spawn(move || {
                let value: &Optional<String> = &shared;
                value.as_ref().map(|s| s.len()).with_default(0)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread panicked"), 6);
    }
}
