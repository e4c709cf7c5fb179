//! Caret and selection offsets.
//!
//! Offsets count characters, not bytes, so a range computed on one string
//! can be compared against `str::chars()` positions of another.

use crate::error::InputError;

/// A selection `(start, end)` into a string, with `start <= end`.
///
/// A zero-width range is a caret.
///
/// # Example
///
/// ```
/// use cc_input::CursorRange;
///
/// let caret = CursorRange::caret(4);
/// assert!(caret.is_caret());
///
/// let selection = CursorRange::new(2, 6).unwrap();
/// assert_eq!(selection.len(), 4);
///
/// assert!(CursorRange::new(6, 2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawRange")
)]
pub struct CursorRange {
    start: usize,
    end: usize,
}

/// Unchecked wire form; deserialized ranges go through [`CursorRange::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRange {
    start: usize,
    end: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRange> for CursorRange {
    type Error = InputError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl CursorRange {
    /// Creates a selection, rejecting `start > end`.
    pub fn new(start: usize, end: usize) -> Result<Self, InputError> {
        if start > end {
            return Err(InputError::InvertedSelection { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a selection and checks it fits inside `value`.
    ///
    /// # Example
    ///
    /// ```
    /// use cc_input::CursorRange;
    ///
    /// assert!(CursorRange::within("4111", 0, 4).is_ok());
    /// assert!(CursorRange::within("4111", 0, 5).is_err());
    /// ```
    pub fn within(value: &str, start: usize, end: usize) -> Result<Self, InputError> {
        let range = Self::new(start, end)?;
        let length = value.chars().count();
        if end > length {
            return Err(InputError::SelectionOutOfBounds { end, length });
        }
        Ok(range)
    }

    /// Creates a zero-width selection at `offset`.
    #[inline]
    pub const fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// A caret placed after the last character of `value`.
    #[inline]
    pub fn end_of(value: &str) -> Self {
        Self::caret(value.chars().count())
    }

    /// Builds a selection from two offsets in either order.
    #[inline]
    pub fn ordered(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Start offset.
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// End offset.
    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of selected characters.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true for a zero-width selection.
    #[inline]
    pub const fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Alias of [`is_caret`](Self::is_caret).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.is_caret()
    }

    /// Clamps both ends to `length`.
    #[inline]
    pub fn clamp_to(self, length: usize) -> Self {
        Self {
            start: self.start.min(length),
            end: self.end.min(length),
        }
    }

    /// Returns the selected characters of `value`.
    ///
    /// Offsets past the end are clamped.
    pub fn selected_text(&self, value: &str) -> String {
        value
            .chars()
            .skip(self.start)
            .take(self.end.saturating_sub(self.start))
            .collect()
    }
}

impl From<(usize, usize)> for CursorRange {
    fn from((a, b): (usize, usize)) -> Self {
        Self::ordered(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_inverted() {
        assert_eq!(
            CursorRange::new(3, 1),
            Err(InputError::InvertedSelection { start: 3, end: 1 })
        );
        assert!(CursorRange::new(1, 1).unwrap().is_caret());
    }

    #[test]
    fn test_within_checks_length() {
        assert_eq!(
            CursorRange::within("4111 1", 2, 7),
            Err(InputError::SelectionOutOfBounds { end: 7, length: 6 })
        );
        assert_eq!(CursorRange::within("4111 1", 2, 6).unwrap().len(), 4);
    }

    #[test]
    fn test_end_of_counts_chars() {
        assert_eq!(CursorRange::end_of(""), CursorRange::caret(0));
        assert_eq!(CursorRange::end_of("4111 1111"), CursorRange::caret(9));
        assert_eq!(CursorRange::end_of("é1"), CursorRange::caret(2));
    }

    #[test]
    fn test_ordered_and_from_tuple() {
        assert_eq!(CursorRange::ordered(7, 3), CursorRange::new(3, 7).unwrap());
        assert_eq!(CursorRange::from((2, 5)), CursorRange::new(2, 5).unwrap());
    }

    #[test]
    fn test_clamp_to() {
        let range = CursorRange::new(4, 30).unwrap().clamp_to(19);
        assert_eq!((range.start(), range.end()), (4, 19));
        assert_eq!(CursorRange::caret(25).clamp_to(3), CursorRange::caret(3));
    }

    #[test]
    fn test_selected_text() {
        let range = CursorRange::new(3, 6).unwrap();
        assert_eq!(range.selected_text("4111 1111"), "1 1");
        assert_eq!(CursorRange::caret(2).selected_text("4111"), "");
        assert_eq!(CursorRange::new(2, 40).unwrap().selected_text("4111"), "11");
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_deserialize_rejects_inverted_range() {
        let range: CursorRange = serde_json::from_str(r#"{"start":2,"end":5}"#).unwrap();
        assert_eq!(range, CursorRange::new(2, 5).unwrap());
        assert_eq!(range.len(), 3);

        let err = serde_json::from_str::<CursorRange>(r#"{"start":5,"end":2}"#).unwrap_err();
        assert!(err.to_string().contains("selection start 5 is after selection end 2"));
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_serialize_round_trips_through_check() {
        let json = serde_json::to_string(&CursorRange::caret(7)).unwrap();
        assert_eq!(json, r#"{"start":7,"end":7}"#);
        assert_eq!(serde_json::from_str::<CursorRange>(&json).unwrap(), CursorRange::caret(7));
    }
}
