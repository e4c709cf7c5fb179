//! Fuzz target for card formatting.
//!
//! Tests that formatting never panics and keeps its output invariants.

#![no_main]

use arbitrary::Arbitrary;
use cc_input::format::{format_with_selection, strip_formatting};
use cc_input::pattern::pattern_for_value;
use cc_input::CursorRange;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    value: &'a str,
    start: u16,
    end: u16,
}

fuzz_target!(|input: Input<'_>| {
    let selection = CursorRange::ordered(input.start as usize, input.end as usize);
    let result = format_with_selection(input.value, selection);
    let pattern = pattern_for_value(input.value);

    assert!(result.value().len() <= pattern.len());
    assert!(result.selection_start() <= result.selection_end());
    assert!(result.selection_end() <= result.value().len());

    // Digits survive in order
    let expected: String = strip_formatting(input.value)
        .chars()
        .take(pattern.digit_slots())
        .collect();
    assert_eq!(strip_formatting(result.value()), expected);

    // Formatting is idempotent
    let again = format_with_selection(result.value(), result.selection());
    assert_eq!(again.value(), result.value());
    assert_eq!(again.selection(), result.selection());
});
