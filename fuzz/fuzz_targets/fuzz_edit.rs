//! Fuzz target for the edit guard.
//!
//! Feeds arbitrary snapshots and post-edit values; a revert must restore the
//! snapshot and an accepted edit must come back canonical.

#![no_main]

use arbitrary::Arbitrary;
use cc_input::format::format_card_number;
use cc_input::{apply_edit, CursorRange, EditSnapshot};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    before: &'a str,
    after: &'a str,
    start: u16,
    end: u16,
    key: Option<char>,
}

fuzz_target!(|input: Input<'_>| {
    let selection = CursorRange::ordered(input.start as usize, input.end as usize);
    let snapshot = EditSnapshot::capture(input.before, selection, input.key);
    let outcome = apply_edit(&snapshot, input.after, CursorRange::end_of(input.after));

    if outcome.accepted() {
        assert_eq!(format_card_number(outcome.value()).value(), outcome.value());
    } else {
        assert_eq!(outcome.value(), input.before);
        assert_eq!(outcome.selection(), selection);
        assert!(!outcome.should_notify());
    }
});
