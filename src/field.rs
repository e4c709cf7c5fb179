//! A card number field driven by key-down and change events.
//!
//! [`CardNumberField`] is what a widget layer embeds: it keeps the displayed
//! value and selection, the snapshot taken on the last key-down, and the
//! optional change observer. Each field owns its own snapshot slot.
//!
//! The toolkit side (what a key or a paste does to the raw text before the
//! change event) is simulated by [`CardNumberField::press`] and
//! [`CardNumberField::paste`], so a full keystroke cycle can run headless.
//!
//! # Example
//!
//! ```
//! use cc_input::field::{CardNumberField, Key};
//!
//! let mut field = CardNumberField::new();
//! for c in "41111".chars() {
//!     field.press(Key::Char(c));
//! }
//! assert_eq!(field.value(), "4111 1");
//! assert_eq!(field.selection().start(), 6);
//!
//! // Letters never make it in
//! field.press(Key::Char('x'));
//! assert_eq!(field.value(), "4111 1");
//! ```

use std::fmt;

use zeroize::Zeroize;

use crate::cursor::CursorRange;
use crate::format::format_with_selection;
use crate::guard::{apply_edit, mask_digits, EditOutcome, EditSnapshot};

/// Notification sent to the observer after an accepted edit changed the value.
///
/// Both values are zeroized on drop, clones included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// The new formatted value.
    pub value: String,
    /// The selection in the new value.
    pub selection: CursorRange,
    /// The value displayed before the edit.
    pub previous: String,
}

impl Drop for ChangeEvent {
    fn drop(&mut self) {
        self.value.zeroize();
        self.previous.zeroize();
    }
}

/// Callback invoked with each [`ChangeEvent`].
pub type ChangeObserver = Box<dyn FnMut(&ChangeEvent)>;

/// An edit the toolkit applies for a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Types a character over the selection.
    Char(char),
    /// Deletes the selection, or the character before the caret.
    Backspace,
    /// Deletes the selection, or the character after the caret.
    Delete,
}

impl Key {
    /// The character the key types, if any.
    #[inline]
    pub const fn typed_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            Self::Backspace | Self::Delete => None,
        }
    }
}

/// Builder for [`CardNumberField`].
#[derive(Default)]
pub struct FieldBuilder {
    initial_value: String,
    on_change: Option<ChangeObserver>,
}

impl FieldBuilder {
    /// Sets the initial value; it is formatted when the field is built.
    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = value.into();
        self
    }

    /// Sets the change observer.
    pub fn on_change(mut self, observer: impl FnMut(&ChangeEvent) + 'static) -> Self {
        self.on_change = Some(Box::new(observer));
        self
    }

    /// Builds the field with the caret at the end of the formatted value.
    pub fn build(mut self) -> CardNumberField {
        let (value, selection) = format_with_selection(
            &self.initial_value,
            CursorRange::end_of(&self.initial_value),
        )
        .into_parts();

        CardNumberField {
            value,
            selection,
            pending: None,
            on_change: self.on_change.take(),
        }
    }
}

impl Drop for FieldBuilder {
    fn drop(&mut self) {
        self.initial_value.zeroize();
    }
}

impl fmt::Debug for FieldBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBuilder")
            .field("initial_value", &mask_digits(&self.initial_value))
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// A card number input's state across key-down and change events.
pub struct CardNumberField {
    value: String,
    selection: CursorRange,
    pending: Option<EditSnapshot>,
    on_change: Option<ChangeObserver>,
}

impl CardNumberField {
    /// Creates an empty field with no observer.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts building a field.
    pub fn builder() -> FieldBuilder {
        FieldBuilder::default()
    }

    /// The displayed value.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The displayed selection.
    #[inline]
    pub fn selection(&self) -> CursorRange {
        self.selection
    }

    /// True if a key-down snapshot is waiting for its change event.
    #[inline]
    pub fn has_pending_edit(&self) -> bool {
        self.pending.is_some()
    }

    /// Records a selection change made by the user (click, arrow keys).
    ///
    /// The range is clamped to the current value.
    pub fn select(&mut self, selection: CursorRange) {
        self.selection = selection.clamp_to(self.value.chars().count());
    }

    /// Captures the snapshot for the key going down.
    ///
    /// `key` is the character the key types, or `None`. A second key-down
    /// before the change replaces the first snapshot.
    pub fn key_down(&mut self, key: Option<char>) {
        let snapshot = EditSnapshot::capture(&self.value, self.selection, key);
        tracing::trace!(
            is_replacing = snapshot.is_replacing(),
            is_adding_space = snapshot.is_adding_space(),
            "key down"
        );
        self.pending = Some(snapshot);
    }

    /// Handles the toolkit's change event.
    ///
    /// With a pending snapshot the edit goes through [`apply_edit`]; without
    /// one (programmatic change) the value is formatted directly. The field
    /// takes the outcome's value and selection either way, and notifies the
    /// observer once if an accepted edit changed the value.
    pub fn change(&mut self, post_value: &str, post_selection: CursorRange) -> EditOutcome {
        let outcome = match self.pending.take() {
            Some(snapshot) => apply_edit(&snapshot, post_value, post_selection),
            None => {
                tracing::trace!("change without key down, formatting directly");
                let result = format_with_selection(post_value, post_selection);
                EditOutcome::formatted(result, &self.value)
            }
        };

        self.apply(&outcome);
        outcome
    }

    /// Replaces the value programmatically, without notifying the observer.
    pub fn set_value(&mut self, value: &str) {
        self.pending = None;
        let (value, selection) =
            format_with_selection(value, CursorRange::end_of(value)).into_parts();
        self.replace_value(value);
        self.selection = selection;
    }

    /// Simulates a full key press: key-down, toolkit edit, change.
    ///
    /// Backspace or Delete with nothing to delete leaves the field alone.
    pub fn press(&mut self, key: Key) -> Option<EditOutcome> {
        self.key_down(key.typed_char());
        let (post_value, post_selection) = match key {
            Key::Char(c) => splice(&self.value, self.selection, &c.to_string()),
            Key::Backspace => {
                let range = if self.selection.is_caret() {
                    let start = self.selection.start();
                    if start == 0 {
                        self.pending = None;
                        return None;
                    }
                    CursorRange::ordered(start - 1, start)
                } else {
                    self.selection
                };
                splice(&self.value, range, "")
            }
            Key::Delete => {
                let range = if self.selection.is_caret() {
                    let start = self.selection.start();
                    if start >= self.value.chars().count() {
                        self.pending = None;
                        return None;
                    }
                    CursorRange::ordered(start, start + 1)
                } else {
                    self.selection
                };
                splice(&self.value, range, "")
            }
        };
        Some(self.change(&post_value, post_selection))
    }

    /// Simulates pasting `text` over the current selection.
    pub fn paste(&mut self, text: &str) -> EditOutcome {
        self.key_down(None);
        let (post_value, post_selection) = splice(&self.value, self.selection, text);
        self.change(&post_value, post_selection)
    }

    fn apply(&mut self, outcome: &EditOutcome) {
        let mut previous = std::mem::replace(&mut self.value, outcome.value().to_string());
        self.selection = outcome.selection();

        if outcome.should_notify() {
            if let Some(observer) = self.on_change.as_mut() {
                observer(&ChangeEvent {
                    value: self.value.clone(),
                    selection: self.selection,
                    previous: previous.clone(),
                });
            }
        }
        previous.zeroize();
    }

    fn replace_value(&mut self, value: String) {
        self.value.zeroize();
        self.value = value;
    }
}

impl Default for CardNumberField {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CardNumberField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardNumberField")
            .field("value", &mask_digits(&self.value))
            .field("selection", &self.selection)
            .field("pending", &self.pending)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl Drop for CardNumberField {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// Replaces `range` of `value` with `text`, returning the new value and the
/// caret after the inserted text.
fn splice(value: &str, range: CursorRange, text: &str) -> (String, CursorRange) {
    let chars: Vec<char> = value.chars().collect();
    let range = range.clamp_to(chars.len());
    let mut out: String = chars[..range.start()].iter().collect();
    out.push_str(text);
    out.extend(&chars[range.end()..]);
    let caret = range.start() + text.chars().count();
    (out, CursorRange::caret(caret))
}
