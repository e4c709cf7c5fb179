//! # cc_input
//!
//! As-you-type credit card number formatting for Rust. Work in progress.
//!
//! ## Features
//!
//! - Grouping pattern guessed from the first digit
//! - Canonical spacing with the caret/selection carried across
//! - Edit guard that reverts letters, overflow and stray spaces
//! - Headless field state machine for widget layers
//! - Multiple interfaces: library, CLI, WASM
//!
//! ## Quick Start
//!
//! ```rust
//! use cc_input::{format_card_number, select_pattern, CursorRange};
//!
//! assert_eq!(select_pattern("37"), "#### ###### #####");
//!
//! let result = format_card_number("4111111111111111");
//! assert_eq!(result.value(), "4111 1111 1111 1111");
//! assert_eq!(result.selection(), CursorRange::caret(19));
//! ```
//!
//! ## Selection Tracking
//!
//! ```rust
//! use cc_input::{format_with_selection, CursorRange};
//!
//! // "4111 1111" with '9' typed after the second digit
//! let result = format_with_selection("41911 1111", CursorRange::caret(3));
//! assert_eq!(result.value(), "4191 1111 1");
//! assert_eq!(result.selection(), CursorRange::caret(3));
//! ```
//!
//! ## Guarding Edits
//!
//! ```rust
//! use cc_input::{apply_edit, CursorRange, EditSnapshot};
//!
//! let full = "3782 822463 10005";
//! let snapshot = EditSnapshot::capture(full, CursorRange::caret(17), Some('9'));
//! let outcome = apply_edit(&snapshot, "3782 822463 100059", CursorRange::caret(18));
//!
//! assert!(!outcome.accepted());
//! assert_eq!(outcome.value(), full);
//! ```
//!
//! ## Field State
//!
//! ```rust
//! use cc_input::{CardNumberField, Key};
//!
//! let mut field = CardNumberField::builder()
//!     .initial_value("4111")
//!     .on_change(|event| println!("now {} digits", event.value.len()))
//!     .build();
//!
//! field.press(Key::Char('1'));
//! assert_eq!(field.value(), "4111 1");
//! ```
//!
//! ## Layouts
//!
//! | Leading digit | Groups | Digits |
//! |---------------|--------|--------|
//! | 2, 5, 6 | 4-4-4-4 | 16 |
//! | 4 | 4-4-4-4-3 | 19 |
//! | 3 | 4-6-5 | 15 |
//! | other | ungrouped | 19 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize/Deserialize for value types |
//! | `json` | `serde` plus `serde_json` |
//! | `cli` | Command-line tool |
//! | `wasm` | WebAssembly support |
//!
//! ## Security
//!
//! - Field values, pending snapshots and change events are zeroized on drop
//! - `Debug` output masks all but the last four digits
//! - Log events carry lengths and reasons, never digits
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cursor;
pub mod error;
pub mod field;
pub mod format;
pub mod guard;
pub mod pattern;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use cursor::CursorRange;
pub use error::InputError;
pub use field::{CardNumberField, ChangeEvent, Key};
pub use format::{format_card_number, format_with_selection, FormatRequest, FormatResult};
pub use guard::{apply_edit, EditOutcome, EditSnapshot, RejectReason};
pub use pattern::{select_pattern, CardLayout, GroupingPattern};
