//! WebAssembly bindings for card number input.
//!
//! This module provides JavaScript-friendly bindings for the cc_input library.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { CardInput, format_card, select_pattern } from 'cc_input';
//!
//! await init();
//!
//! // One-off formatting
//! const result = format_card("4111111111111111");
//! console.log(result.value);          // "4111 1111 1111 1111"
//! console.log(result.selectionStart); // 19
//!
//! // Wire a text field
//! const card = new CardInput("", (value) => console.log(`changed: ${value}`));
//! input.addEventListener("keydown", (e) => card.keyDown(e.key.length === 1 ? e.key : undefined));
//! input.addEventListener("input", () => {
//!     const r = card.change(input.value, input.selectionStart, input.selectionEnd);
//!     input.value = r.value;
//!     input.setSelectionRange(r.selectionStart, r.selectionEnd);
//! });
//! ```

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::field::{CardNumberField, Key};
use crate::{CursorRange, EditOutcome};

/// A formatted value and selection, returned to JavaScript.
#[wasm_bindgen]
pub struct FormattedCard {
    value: String,
    selection_start: usize,
    selection_end: usize,
}

#[wasm_bindgen]
impl FormattedCard {
    #[wasm_bindgen(getter)]
    pub fn value(&self) -> String {
        self.value.clone()
    }

    #[wasm_bindgen(getter, js_name = selectionStart)]
    pub fn selection_start(&self) -> usize {
        self.selection_start
    }

    #[wasm_bindgen(getter, js_name = selectionEnd)]
    pub fn selection_end(&self) -> usize {
        self.selection_end
    }
}

/// Outcome of an edit, returned to JavaScript.
#[wasm_bindgen]
pub struct EditResult {
    accepted: bool,
    reason: Option<String>,
    value: String,
    selection_start: usize,
    selection_end: usize,
}

#[wasm_bindgen]
impl EditResult {
    #[wasm_bindgen(getter)]
    pub fn accepted(&self) -> bool {
        self.accepted
    }

    #[wasm_bindgen(getter)]
    pub fn reason(&self) -> Option<String> {
        self.reason.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn value(&self) -> String {
        self.value.clone()
    }

    #[wasm_bindgen(getter, js_name = selectionStart)]
    pub fn selection_start(&self) -> usize {
        self.selection_start
    }

    #[wasm_bindgen(getter, js_name = selectionEnd)]
    pub fn selection_end(&self) -> usize {
        self.selection_end
    }
}

impl From<EditOutcome> for EditResult {
    fn from(outcome: EditOutcome) -> Self {
        Self {
            accepted: outcome.accepted(),
            reason: outcome.reject_reason().map(|r| r.to_string()),
            selection_start: outcome.selection_start(),
            selection_end: outcome.selection_end(),
            value: outcome.value().to_string(),
        }
    }
}

/// Formats a card number; the selection defaults to the end of `value`.
///
/// # Example
/// ```javascript
/// format_card("41111", 5, 5).selectionStart  // 6
/// ```
#[wasm_bindgen]
pub fn format_card(
    value: &str,
    selection_start: Option<usize>,
    selection_end: Option<usize>,
) -> FormattedCard {
    let length = value.chars().count();
    let start = selection_start.unwrap_or(length);
    let end = selection_end.unwrap_or(length);
    let result = crate::format_with_selection(value, CursorRange::ordered(start, end));

    FormattedCard {
        value: result.value().to_string(),
        selection_start: result.selection_start(),
        selection_end: result.selection_end(),
    }
}

/// Returns the grouping template for a leading character.
///
/// # Example
/// ```javascript
/// select_pattern("37")  // "#### ###### #####"
/// ```
#[wasm_bindgen]
pub fn select_pattern(leading: &str) -> String {
    crate::select_pattern(leading).as_str().to_string()
}

/// A card number text field's state.
#[wasm_bindgen]
pub struct CardInput {
    field: CardNumberField,
}

#[wasm_bindgen]
impl CardInput {
    /// Creates a field; `on_change` receives the new formatted value.
    #[wasm_bindgen(constructor)]
    pub fn new(initial_value: Option<String>, on_change: Option<js_sys::Function>) -> CardInput {
        let mut builder = CardNumberField::builder();
        if let Some(value) = initial_value {
            builder = builder.initial_value(value);
        }
        if let Some(callback) = on_change {
            builder = builder.on_change(move |event| {
                // Exceptions thrown by the callback are ignored.
                let _ = callback.call1(&JsValue::NULL, &JsValue::from_str(&event.value));
            });
        }
        CardInput {
            field: builder.build(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn value(&self) -> String {
        self.field.value().to_string()
    }

    #[wasm_bindgen(getter, js_name = selectionStart)]
    pub fn selection_start(&self) -> usize {
        self.field.selection().start()
    }

    #[wasm_bindgen(getter, js_name = selectionEnd)]
    pub fn selection_end(&self) -> usize {
        self.field.selection().end()
    }

    /// Records the user's selection.
    pub fn select(&mut self, start: usize, end: usize) {
        self.field.select(CursorRange::ordered(start, end));
    }

    /// Call on keydown with the typed character, if the key types one.
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: Option<String>) {
        let key = key.and_then(|k| {
            let mut chars = k.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        });
        self.field.key_down(key);
    }

    /// Call on input/change with the toolkit's new value and selection.
    pub fn change(&mut self, value: &str, selection_start: usize, selection_end: usize) -> EditResult {
        self.field
            .change(value, CursorRange::ordered(selection_start, selection_end))
            .into()
    }

    /// Sets the value programmatically.
    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(&mut self, value: &str) {
        self.field.set_value(value);
    }

    /// Simulates a key press: a single character, "Backspace" or "Delete".
    pub fn press(&mut self, key: &str) -> Option<EditResult> {
        let key = match key {
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return None,
                }
            }
        };
        self.field.press(key).map(EditResult::from)
    }

    /// Simulates pasting `text` over the selection.
    pub fn paste(&mut self, text: &str) -> EditResult {
        self.field.paste(text).into()
    }
}
