//! Accept-or-revert policy for a single edit.
//!
//! A widget takes an [`EditSnapshot`] when a key goes down, lets the toolkit
//! apply the keystroke or paste, then hands the snapshot and the resulting
//! value to [`apply_edit`]. The outcome is either the reformatted value or
//! the snapshot restored verbatim. The caller applies it either way.
//!
//! # Example
//!
//! ```
//! use cc_input::guard::{apply_edit, EditSnapshot, RejectReason};
//! use cc_input::CursorRange;
//!
//! // Typing a fifth digit
//! let snapshot = EditSnapshot::capture("4111", CursorRange::caret(4), Some('1'));
//! let outcome = apply_edit(&snapshot, "41111", CursorRange::caret(5));
//! assert!(outcome.accepted());
//! assert_eq!(outcome.value(), "4111 1");
//! assert_eq!(outcome.selection(), CursorRange::caret(6));
//!
//! // Pasting letters
//! let snapshot = EditSnapshot::capture("4111", CursorRange::caret(4), None);
//! let outcome = apply_edit(&snapshot, "4111abc", CursorRange::caret(7));
//! assert_eq!(outcome.reject_reason(), Some(RejectReason::InvalidCharacter));
//! assert_eq!(outcome.value(), "4111");
//! ```

use std::fmt;

use zeroize::Zeroize;

use crate::cursor::CursorRange;
use crate::format::{format_with_selection, is_digits_and_spaces, FormatResult};
use crate::pattern::{pattern_for_value, SEPARATOR};

/// Field state captured when a key goes down, before the toolkit edits.
#[derive(Clone, PartialEq, Eq)]
pub struct EditSnapshot {
    value: String,
    selection: CursorRange,
    is_replacing: bool,
    is_adding_space: bool,
}

impl EditSnapshot {
    /// Creates a snapshot from explicit flags.
    ///
    /// The selection is kept as given, even if it does not fit `value`; a
    /// revert restores it unchanged.
    pub fn new(
        value: impl Into<String>,
        selection: CursorRange,
        is_replacing: bool,
        is_adding_space: bool,
    ) -> Self {
        Self {
            value: value.into(),
            selection,
            is_replacing,
            is_adding_space,
        }
    }

    /// Captures a snapshot, deriving the flags from the selection and key.
    ///
    /// `key` is the character the key would type, or `None` for keys that
    /// do not type one (paste shortcuts, Backspace, arrows).
    ///
    /// # Example
    ///
    /// ```
    /// use cc_input::guard::EditSnapshot;
    /// use cc_input::CursorRange;
    ///
    /// let snapshot = EditSnapshot::capture("4111 1111", CursorRange::new(3, 5).unwrap(), Some(' '));
    /// assert!(snapshot.is_replacing());
    /// assert!(snapshot.is_adding_space());
    ///
    /// let snapshot = EditSnapshot::capture("4111 1111", CursorRange::new(4, 5).unwrap(), Some('2'));
    /// assert!(!snapshot.is_replacing());
    /// ```
    pub fn capture(value: &str, selection: CursorRange, key: Option<char>) -> Self {
        let is_replacing = selection
            .selected_text(value)
            .chars()
            .any(|c| c.is_ascii_digit());
        Self::new(value, selection, is_replacing, key == Some(SEPARATOR))
    }

    /// The value shown before the edit.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The selection before the edit.
    #[inline]
    pub fn selection(&self) -> CursorRange {
        self.selection
    }

    /// True if the selection held at least one digit.
    #[inline]
    pub fn is_replacing(&self) -> bool {
        self.is_replacing
    }

    /// True if the key pressed was the space bar.
    #[inline]
    pub fn is_adding_space(&self) -> bool {
        self.is_adding_space
    }
}

impl fmt::Debug for EditSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditSnapshot")
            .field("value", &mask_digits(&self.value))
            .field("selection", &self.selection)
            .field("is_replacing", &self.is_replacing)
            .field("is_adding_space", &self.is_adding_space)
            .finish()
    }
}

impl Drop for EditSnapshot {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// Why an edit was reverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RejectReason {
    /// The edited value contains something other than digits and spaces.
    InvalidCharacter,
    /// The field was full and the edit only inserted.
    FieldFull,
    /// A space was typed where the pattern has no separator.
    MisplacedSpace,
}

impl RejectReason {
    /// Short description.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidCharacter => "only digits and spaces are allowed",
            Self::FieldFull => "card number is already complete",
            Self::MisplacedSpace => "space is only allowed between digit groups",
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// The value and selection a field should show after an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditOutcome {
    rejected: Option<RejectReason>,
    value: String,
    selection: CursorRange,
    changed: bool,
}

impl EditOutcome {
    fn reject(snapshot: &EditSnapshot, reason: RejectReason) -> Self {
        Self {
            rejected: Some(reason),
            value: snapshot.value.clone(),
            selection: snapshot.selection,
            changed: false,
        }
    }

    /// An accepted outcome; notifies if `result` differs from `previous`.
    pub(crate) fn formatted(result: FormatResult, previous: &str) -> Self {
        let (value, selection) = result.into_parts();
        let changed = value != previous;
        Self {
            rejected: None,
            value,
            selection,
            changed,
        }
    }

    /// True if the edit was kept.
    #[inline]
    pub fn accepted(&self) -> bool {
        self.rejected.is_none()
    }

    /// The rule that reverted the edit, if any.
    #[inline]
    pub fn reject_reason(&self) -> Option<RejectReason> {
        self.rejected
    }

    /// Value to display.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Selection to display.
    #[inline]
    pub fn selection(&self) -> CursorRange {
        self.selection
    }

    /// Selection start.
    #[inline]
    pub fn selection_start(&self) -> usize {
        self.selection.start()
    }

    /// Selection end.
    #[inline]
    pub fn selection_end(&self) -> usize {
        self.selection.end()
    }

    /// True if the change observer must hear about this edit.
    ///
    /// Set only for accepted edits whose formatted value differs from the
    /// value shown before the edit.
    #[inline]
    pub fn should_notify(&self) -> bool {
        self.changed
    }
}

/// Decides whether an edit stands, and formats it if it does.
///
/// Rules, first match wins:
///
/// 1. Anything but digits and spaces in `post_value` reverts.
/// 2. A full field that did not shrink reverts, unless digits were selected.
/// 3. A space typed where the pattern has no separator reverts.
/// 4. Otherwise `post_value` is formatted with `post_selection`.
///
/// A revert returns the snapshot's value and selection untouched.
pub fn apply_edit(
    snapshot: &EditSnapshot,
    post_value: &str,
    post_selection: CursorRange,
) -> EditOutcome {
    if !is_digits_and_spaces(post_value) {
        tracing::debug!(
            reason = ?RejectReason::InvalidCharacter,
            post_len = post_value.chars().count(),
            "edit reverted"
        );
        return EditOutcome::reject(snapshot, RejectReason::InvalidCharacter);
    }

    let pattern = pattern_for_value(post_value);
    let pre_len = snapshot.value.chars().count();
    let post_len = post_value.chars().count();

    if pre_len == pattern.len() && post_len >= pattern.len() && !snapshot.is_replacing {
        tracing::debug!(
            reason = ?RejectReason::FieldFull,
            pattern_len = pattern.len(),
            post_len,
            "edit reverted"
        );
        return EditOutcome::reject(snapshot, RejectReason::FieldFull);
    }

    if snapshot.is_adding_space && !pattern.is_separator_at(snapshot.selection.start()) {
        tracing::debug!(
            reason = ?RejectReason::MisplacedSpace,
            offset = snapshot.selection.start(),
            "edit reverted"
        );
        return EditOutcome::reject(snapshot, RejectReason::MisplacedSpace);
    }

    let outcome = EditOutcome::formatted(
        format_with_selection(post_value, post_selection),
        &snapshot.value,
    );
    tracing::trace!(
        layout = %pattern.layout(),
        changed = outcome.changed,
        "edit accepted"
    );
    outcome
}

/// Masks every digit except the last four.
pub(crate) fn mask_digits(value: &str) -> String {
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    let mut seen = 0;
    value
        .chars()
        .map(|c| {
            if c.is_ascii_digit() {
                seen += 1;
                if seen + 4 <= digits {
                    return '*';
                }
            }
            c
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VISA_FULL: &str = "4111 1111 1111 1111 111";

    #[test]
    fn test_accepts_plain_digit() {
        let snapshot = EditSnapshot::capture("4111 111", CursorRange::caret(8), Some('1'));
        let outcome = apply_edit(&snapshot, "4111 1111", CursorRange::caret(9));
        assert!(outcome.accepted());
        assert_eq!(outcome.value(), "4111 1111");
        assert_eq!(outcome.selection(), CursorRange::caret(9));
        assert!(outcome.should_notify());
    }

    #[test]
    fn test_rejects_non_digit() {
        let snapshot = EditSnapshot::new("4111 1111 1111 111", CursorRange::caret(19), false, false);
        let outcome = apply_edit(&snapshot, "4111 1111 1111 1111x", CursorRange::caret(20));
        assert!(!outcome.accepted());
        assert_eq!(outcome.reject_reason(), Some(RejectReason::InvalidCharacter));
        assert_eq!(outcome.value(), "4111 1111 1111 111");
        assert_eq!(outcome.selection(), CursorRange::caret(19));
        assert!(!outcome.should_notify());
    }

    #[test]
    fn test_rejects_paste_with_letters_over_selection() {
        let snapshot = EditSnapshot::capture("4111 1111", CursorRange::new(0, 9).unwrap(), None);
        assert!(snapshot.is_replacing());
        let outcome = apply_edit(&snapshot, "abc123", CursorRange::caret(6));
        assert_eq!(outcome.reject_reason(), Some(RejectReason::InvalidCharacter));
        assert_eq!(outcome.value(), "4111 1111");
        assert_eq!(outcome.selection(), CursorRange::new(0, 9).unwrap());
    }

    #[test]
    fn test_rejects_insert_into_full_field() {
        let snapshot = EditSnapshot::capture(VISA_FULL, CursorRange::caret(23), Some('1'));
        let outcome = apply_edit(&snapshot, "4111 1111 1111 1111 1111", CursorRange::caret(24));
        assert_eq!(outcome.reject_reason(), Some(RejectReason::FieldFull));
        assert_eq!(outcome.value(), VISA_FULL);
    }

    #[test]
    fn test_full_field_accepts_replacement() {
        let snapshot = EditSnapshot::capture(VISA_FULL, CursorRange::new(0, 1).unwrap(), Some('4'));
        assert!(snapshot.is_replacing());
        let outcome = apply_edit(&snapshot, VISA_FULL, CursorRange::caret(1));
        assert!(outcome.accepted());
        assert_eq!(outcome.value(), VISA_FULL);
        assert!(!outcome.should_notify());
    }

    #[test]
    fn test_full_field_accepts_deletion() {
        let snapshot = EditSnapshot::capture(VISA_FULL, CursorRange::caret(23), None);
        let outcome = apply_edit(&snapshot, "4111 1111 1111 1111 11", CursorRange::caret(22));
        assert!(outcome.accepted());
        assert_eq!(outcome.value(), "4111 1111 1111 1111 11");
    }

    #[test]
    fn test_full_field_rejects_space_only_selection_overwrite() {
        let snapshot = EditSnapshot::capture(VISA_FULL, CursorRange::new(4, 5).unwrap(), Some('9'));
        assert!(!snapshot.is_replacing());
        let outcome = apply_edit(&snapshot, "411191111 1111 1111 111", CursorRange::caret(5));
        assert_eq!(outcome.reject_reason(), Some(RejectReason::FieldFull));
    }

    #[test]
    fn test_full_amex_rejects_insert() {
        let full = "3782 822463 10005";
        let snapshot = EditSnapshot::capture(full, CursorRange::caret(2), Some('9'));
        let outcome = apply_edit(&snapshot, "37982 822463 10005", CursorRange::caret(3));
        assert_eq!(outcome.reject_reason(), Some(RejectReason::FieldFull));
        assert_eq!(outcome.selection(), CursorRange::caret(2));
    }

    #[test]
    fn test_space_at_separator_is_accepted() {
        let snapshot = EditSnapshot::capture("4111", CursorRange::caret(4), Some(' '));
        let outcome = apply_edit(&snapshot, "4111 ", CursorRange::caret(5));
        assert!(outcome.accepted());
        assert_eq!(outcome.value(), "4111 ");
        assert_eq!(outcome.selection(), CursorRange::caret(5));
    }

    #[test]
    fn test_space_inside_group_is_rejected() {
        let snapshot = EditSnapshot::capture("4111", CursorRange::caret(2), Some(' '));
        let outcome = apply_edit(&snapshot, "41 11", CursorRange::caret(3));
        assert_eq!(outcome.reject_reason(), Some(RejectReason::MisplacedSpace));
        assert_eq!(outcome.value(), "4111");
        assert_eq!(outcome.selection(), CursorRange::caret(2));
    }

    #[test]
    fn test_space_past_pattern_end_is_rejected() {
        let snapshot = EditSnapshot::capture("3782 822463 10005", CursorRange::caret(40), Some(' '));
        let outcome = apply_edit(&snapshot, "3782 822463 10005 ", CursorRange::caret(18));
        assert_eq!(outcome.reject_reason(), Some(RejectReason::FieldFull));

        let snapshot = EditSnapshot::capture("9", CursorRange::caret(1), Some(' '));
        let outcome = apply_edit(&snapshot, "9 ", CursorRange::caret(2));
        assert_eq!(outcome.reject_reason(), Some(RejectReason::MisplacedSpace));
    }

    #[test]
    fn test_invalid_character_wins_over_other_rules() {
        let snapshot = EditSnapshot::new(VISA_FULL, CursorRange::caret(2), false, true);
        let outcome = apply_edit(&snapshot, "41x11", CursorRange::caret(3));
        assert_eq!(outcome.reject_reason(), Some(RejectReason::InvalidCharacter));
    }

    #[test]
    fn test_unchanged_value_does_not_notify() {
        // Backspace over a separator puts it straight back
        let snapshot = EditSnapshot::capture("4111 1", CursorRange::caret(5), None);
        let outcome = apply_edit(&snapshot, "41111", CursorRange::caret(4));
        assert!(outcome.accepted());
        assert_eq!(outcome.value(), "4111 1");
        assert_eq!(outcome.selection(), CursorRange::caret(5));
        assert!(!outcome.should_notify());
    }

    #[test]
    fn test_snapshot_debug_is_masked() {
        let snapshot = EditSnapshot::capture("4111 1111 1111 1234", CursorRange::caret(0), None);
        let debug = format!("{:?}", snapshot);
        assert!(!debug.contains("4111"));
        assert!(debug.contains("1234"));
    }

    #[test]
    fn test_mask_digits() {
        assert_eq!(mask_digits("4111 1111 1111 1234"), "**** **** **** 1234");
        assert_eq!(mask_digits("123"), "123");
        assert_eq!(mask_digits(""), "");
    }

    #[test]
    fn test_reject_reason_display() {
        assert_eq!(
            RejectReason::MisplacedSpace.to_string(),
            "space is only allowed between digit groups"
        );
    }
}
