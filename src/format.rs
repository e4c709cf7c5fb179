//! As-you-type card number formatting.
//!
//! The formatter walks the input against the grouping pattern for its first
//! digit, producing the canonical spaced value, and carries the caller's
//! selection across so it stays attached to the same digits.
//!
//! # Format Conventions
//!
//! - **Leading 2, 5, 6** (16 digits): `XXXX XXXX XXXX XXXX`
//! - **Leading 4** (up to 19 digits): `XXXX XXXX XXXX XXXX XXX`
//! - **Leading 3** (15 digits): `XXXX XXXXXX XXXXX`
//! - **Other**: up to 19 digits, ungrouped
//!
//! # Example
//!
//! ```
//! use cc_input::format::{format_card_number, format_with_selection};
//! use cc_input::CursorRange;
//!
//! let result = format_card_number("4111111111111111");
//! assert_eq!(result.value(), "4111 1111 1111 1111");
//! assert_eq!(result.selection(), CursorRange::caret(19));
//!
//! // Caret after the fifth typed digit lands after the inserted space.
//! let result = format_with_selection("41111", CursorRange::caret(5));
//! assert_eq!(result.value(), "4111 1");
//! assert_eq!(result.selection(), CursorRange::caret(6));
//! ```

use crate::cursor::CursorRange;
use crate::pattern::{pattern_for_value, PatternSlot, SEPARATOR};

/// A value to format together with the selection the user had in it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatRequest {
    value: String,
    selection: Option<CursorRange>,
}

impl FormatRequest {
    /// Creates a request with the caret at the end of `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            selection: None,
        }
    }

    /// Sets the selection, in character offsets relative to the value.
    pub fn with_selection(mut self, selection: CursorRange) -> Self {
        self.selection = Some(selection);
        self
    }

    /// The raw value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The effective selection; defaults to a caret at the end.
    pub fn selection(&self) -> CursorRange {
        self.selection
            .unwrap_or_else(|| CursorRange::end_of(&self.value))
    }

    /// Formats the request.
    pub fn format(&self) -> FormatResult {
        format_with_selection(&self.value, self.selection())
    }
}

/// A canonically spaced value and the selection mapped into it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatResult {
    value: String,
    selection: CursorRange,
}

impl FormatResult {
    /// The formatted value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The selection relative to [`value`](Self::value).
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

    /// Consumes the result, returning the value and selection.
    #[inline]
    pub fn into_parts(self) -> (String, CursorRange) {
        (self.value, self.selection)
    }
}

/// Formats a card number with the caret at the end of the input.
///
/// # Example
///
/// ```
/// use cc_input::format::format_card_number;
///
/// assert_eq!(format_card_number("378282246310005").value(), "3782 822463 10005");
/// assert_eq!(format_card_number("").value(), "");
/// ```
pub fn format_card_number(value: &str) -> FormatResult {
    format_with_selection(value, CursorRange::end_of(value))
}

/// Formats a card number and maps `selection` into the formatted value.
///
/// Offsets past the end of `value` are clamped. The walk never fails; input
/// with no digits yields an empty value.
pub fn format_with_selection(value: &str, selection: CursorRange) -> FormatResult {
    let input: Vec<char> = value.chars().collect();
    let pattern = pattern_for_value(value);
    let selection = selection.clamp_to(input.len());
    let (sel_start, sel_end) = (selection.start(), selection.end());

    let mut output = String::with_capacity(pattern.len());
    let mut start = 0;
    let mut end = 0;
    let mut i = 0;
    let mut j = 0;

    while let (Some(&c), Some(slot)) = (input.get(i), pattern.slot(j)) {
        let is_digit = c.is_ascii_digit();
        match slot {
            PatternSlot::Digit => {
                if is_digit {
                    output.push(c);
                    if i < sel_start {
                        start += 1;
                    }
                    if i < sel_end {
                        end += 1;
                    }
                    j += 1;
                }
                // Non-digits in a digit slot are dropped.
                i += 1;
            }
            PatternSlot::Separator => {
                output.push(SEPARATOR);
                if is_digit {
                    // Inserted: the digit waits for the next slot.
                    if i <= sel_start {
                        start += 1;
                    }
                    if i <= sel_end {
                        end += 1;
                    }
                } else {
                    if i < sel_start {
                        start += 1;
                    }
                    if i < sel_end {
                        end += 1;
                    }
                    i += 1;
                }
                j += 1;
            }
        }
    }

    FormatResult {
        value: output,
        selection: CursorRange::ordered(start, end),
    }
}

/// Strips all formatting from a card number, leaving only digits.
///
/// # Example
///
/// ```
/// use cc_input::format::strip_formatting;
///
/// assert_eq!(strip_formatting("4111 1111 1111 1111"), "4111111111111111");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats the value and splits it into its digit groups.
///
/// # Example
///
/// ```
/// use cc_input::format::split_into_groups;
///
/// assert_eq!(split_into_groups("378282246310005"), vec!["3782", "822463", "10005"]);
/// assert_eq!(split_into_groups("41111"), vec!["4111", "1"]);
/// ```
pub fn split_into_groups(input: &str) -> Vec<String> {
    format_card_number(input)
        .value()
        .split(SEPARATOR)
        .filter(|group| !group.is_empty())
        .map(str::to_string)
        .collect()
}

/// Returns true if `input` holds only digits and spaces.
#[inline]
pub fn is_digits_and_spaces(input: &str) -> bool {
    input.chars().all(|c| c.is_ascii_digit() || c == SEPARATOR)
}
