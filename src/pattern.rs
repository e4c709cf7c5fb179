//! Grouping patterns keyed by the leading digit.
//!
//! The brand of a partially typed number is guessed from its first digit
//! only. Each guess maps to a fixed template where `#` accepts one digit and
//! a space is a literal separator.
//!
//! | Leading digit | Layout | Template |
//! |---------------|--------|----------|
//! | 2, 5, 6 | `Standard` | `#### #### #### ####` |
//! | 4 | `Visa` | `#### #### #### #### ###` |
//! | 3 | `Amex` | `#### ###### #####` |
//! | anything else | `Unknown` | 19 x `#` |

use std::fmt;

/// Digit placeholder character used in templates.
pub const DIGIT_PLACEHOLDER: char = '#';

/// Separator character used in templates and formatted output.
pub const SEPARATOR: char = ' ';

/// Longest number of digits any layout accepts.
pub const MAX_DIGIT_SLOTS: usize = 19;

/// The grouping families the selector can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardLayout {
    /// Mastercard, Mir, Discover, UnionPay and friends - leading 2, 5 or 6.
    Standard,
    /// Visa - leading 4, with room for a trailing three-digit group.
    Visa,
    /// American Express and Diners - leading 3, grouped 4-6-5.
    Amex,
    /// Brand not yet known.
    Unknown,
}

impl CardLayout {
    /// Picks a layout from a leading character.
    #[inline]
    pub const fn from_leading(leading: Option<char>) -> Self {
        match leading {
            Some('2' | '5' | '6') => Self::Standard,
            Some('4') => Self::Visa,
            Some('3') => Self::Amex,
            _ => Self::Unknown,
        }
    }

    /// Returns the grouping pattern for this layout.
    #[inline]
    pub const fn pattern(&self) -> GroupingPattern {
        match self {
            Self::Standard => GroupingPattern::new(*self, "#### #### #### ####"),
            Self::Visa => GroupingPattern::new(*self, "#### #### #### #### ###"),
            Self::Amex => GroupingPattern::new(*self, "#### ###### #####"),
            Self::Unknown => GroupingPattern::new(*self, "###################"),
        }
    }

    /// Human-readable name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Visa => "Visa",
            Self::Amex => "Amex",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CardLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One position of a grouping pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSlot {
    /// Accepts exactly one digit.
    Digit,
    /// Literal separator.
    Separator,
}

/// A fixed digit grouping template such as `#### ###### #####`.
///
/// Templates are ASCII, so character and byte positions coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupingPattern {
    layout: CardLayout,
    template: &'static str,
}

impl GroupingPattern {
    const fn new(layout: CardLayout, template: &'static str) -> Self {
        Self { layout, template }
    }

    /// The layout this pattern belongs to.
    #[inline]
    pub const fn layout(&self) -> CardLayout {
        self.layout
    }

    /// The template string.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.template
    }

    /// Total number of positions, separators included.
    #[inline]
    pub const fn len(&self) -> usize {
        self.template.len()
    }

    /// Returns false for every built-in pattern, each of which has a digit slot.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.template.is_empty()
    }

    /// Returns the slot at `index`, or `None` past the end.
    #[inline]
    pub fn slot(&self, index: usize) -> Option<PatternSlot> {
        match self.template.as_bytes().get(index) {
            Some(b'#') => Some(PatternSlot::Digit),
            Some(_) => Some(PatternSlot::Separator),
            None => None,
        }
    }

    /// Returns true if `index` is a separator position.
    #[inline]
    pub fn is_separator_at(&self, index: usize) -> bool {
        self.slot(index) == Some(PatternSlot::Separator)
    }

    /// Iterates over the slots in order.
    pub fn slots(&self) -> impl Iterator<Item = PatternSlot> + '_ {
        (0..self.len()).filter_map(move |i| self.slot(i))
    }

    /// Number of digit positions.
    pub fn digit_slots(&self) -> usize {
        self.template.bytes().filter(|&b| b == b'#').count()
    }

    /// Sizes of the digit groups.
    ///
    /// # Example
    ///
    /// ```
    /// use cc_input::pattern::select_pattern;
    ///
    /// assert_eq!(select_pattern("3").group_sizes(), vec![4, 6, 5]);
    /// assert_eq!(select_pattern("9").group_sizes(), vec![19]);
    /// ```
    pub fn group_sizes(&self) -> Vec<usize> {
        self.template
            .split(SEPARATOR)
            .map(str::len)
            .filter(|&len| len > 0)
            .collect()
    }
}

impl fmt::Display for GroupingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template)
    }
}

impl PartialEq<&str> for GroupingPattern {
    fn eq(&self, other: &&str) -> bool {
        self.template == *other
    }
}

/// Selects the grouping pattern from the first character of `leading`.
///
/// Only the first character is inspected. An empty string, a non-digit or a
/// digit without a known layout falls back to 19 ungrouped digits.
///
/// # Example
///
/// ```
/// use cc_input::pattern::select_pattern;
///
/// assert_eq!(select_pattern("37"), "#### ###### #####");
/// assert_eq!(select_pattern("5500"), "#### #### #### ####");
/// assert_eq!(select_pattern(""), "###################");
/// ```
#[inline]
pub fn select_pattern(leading: &str) -> GroupingPattern {
    CardLayout::from_leading(leading.chars().next()).pattern()
}

/// Selects the grouping pattern from the first digit of `value`.
///
/// Leading non-digits are skipped, because the formatter drops them and the
/// first digit ends up as the first character of the output.
///
/// # Example
///
/// ```
/// use cc_input::pattern::{pattern_for_value, CardLayout};
///
/// assert_eq!(pattern_for_value(" 4111").layout(), CardLayout::Visa);
/// assert_eq!(pattern_for_value("   ").layout(), CardLayout::Unknown);
/// ```
#[inline]
pub fn pattern_for_value(value: &str) -> GroupingPattern {
    CardLayout::from_leading(value.chars().find(|c| c.is_ascii_digit())).pattern()
}
