//! Card number typing example.
//!
//! Run with: `cargo run --example typing`

use cc_input::{format, pattern, CardNumberField, CursorRange, Key};

fn show(field: &CardNumberField) -> String {
    let mut out: String = field.value().chars().take(field.selection().start()).collect();
    out.push('|');
    out.extend(field.value().chars().skip(field.selection().start()));
    out
}

fn main() {
    println!("=== Card Number Input ===\n");

    // -------------------------------------------------------------------------
    // Pattern selection
    // -------------------------------------------------------------------------
    println!("--- Patterns by leading digit ---\n");

    for leading in ["4", "5", "3", "9"] {
        let pattern = pattern::select_pattern(leading);
        println!("  {} -> {:<9} {}", leading, pattern.layout(), pattern);
    }
    println!();

    // -------------------------------------------------------------------------
    // Formatting with a caret
    // -------------------------------------------------------------------------
    println!("--- Formatting (caret shown as |) ---\n");

    let cases = [
        ("4111111111111111", 16),
        ("41111", 4),
        ("41 11  1111", 11),
        ("378282246310005", 6),
    ];
    for (value, caret) in cases {
        let result = format::format_with_selection(value, CursorRange::caret(caret));
        println!(
            "  {:<20} caret {:>2} -> {:<24} caret {:>2}",
            format!("{:?}", value),
            caret,
            format!("{:?}", result.value()),
            result.selection_start()
        );
    }
    println!();

    // -------------------------------------------------------------------------
    // Typing into a field
    // -------------------------------------------------------------------------
    println!("--- Typing an Amex number, then some extra keys ---\n");

    let mut field = CardNumberField::builder()
        .on_change(|event| println!("    change: {:?}", event.value))
        .build();

    for c in "378282246310005x9".chars() {
        let outcome = field.press(Key::Char(c));
        let status = match &outcome {
            Some(o) if o.accepted() => "accepted".to_string(),
            Some(o) => format!("reverted ({})", o.reject_reason().map(|r| r.to_string()).unwrap_or_default()),
            None => "ignored".to_string(),
        };
        println!("  {:?}: {:<45} {}", c, status, show(&field));
    }
    println!();

    // -------------------------------------------------------------------------
    // Editing in the middle
    // -------------------------------------------------------------------------
    println!("--- Backspace across a group boundary ---\n");

    let mut field = CardNumberField::builder()
        .initial_value("5555555555554444")
        .build();
    field.select(CursorRange::caret(6));
    println!("  before:        {}", show(&field));
    field.press(Key::Backspace);
    println!("  backspace:     {}", show(&field));
    field.press(Key::Backspace);
    println!("  backspace:     {}", show(&field));
}
