//! CLI tool for card number input formatting.
//!
//! # Usage
//!
//! ```bash
//! # Format a value, caret at the end
//! ccinput format 4111111111111111
//!
//! # Format with a selection
//! ccinput format 41111 --start 4 --end 5 --output json
//!
//! # Show the grouping pattern for a leading digit
//! ccinput pattern 37
//!
//! # Replay keystrokes ('<' is Backspace, '>' is Delete)
//! ccinput type "4111 1<<2"
//!
//! # Paste over a selection
//! ccinput paste "5500 0000" --initial 4111 --start 0 --end 4
//! ```
//!
//! Set `RUST_LOG=cc_input=debug` to see why edits are reverted.

use cc_input::{
    format_with_selection, select_pattern, CardNumberField, CursorRange, EditOutcome,
    InputError, Key,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ccinput")]
#[command(author, version, about = "As-you-type credit card number formatting")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a value and map a selection into it
    Format {
        /// Raw value (digits and spaces)
        value: String,

        /// Selection start (defaults to the end of the value)
        #[arg(short, long)]
        start: Option<usize>,

        /// Selection end (defaults to the start)
        #[arg(short, long)]
        end: Option<usize>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the grouping pattern chosen for a leading character
    Pattern {
        /// Value whose first character picks the pattern
        #[arg(default_value = "")]
        leading: String,
    },

    /// Replay keystrokes against an empty or pre-filled field
    Type {
        /// Keys to press; '<' is Backspace and '>' is Delete
        keys: String,

        /// Initial field value
        #[arg(short, long, default_value = "")]
        initial: String,
    },

    /// Paste text over a selection
    Paste {
        /// Text to paste
        text: String,

        /// Initial field value
        #[arg(short, long, default_value = "")]
        initial: String,

        /// Selection start in the formatted initial value
        #[arg(short, long)]
        start: Option<usize>,

        /// Selection end in the formatted initial value
        #[arg(short, long)]
        end: Option<usize>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Format {
            value,
            start,
            end,
            output,
        } => cmd_format(&value, start, end, output),
        Commands::Pattern { leading } => {
            cmd_pattern(&leading);
            Ok(())
        }
        Commands::Type { keys, initial } => {
            cmd_type(&keys, &initial);
            Ok(())
        }
        Commands::Paste {
            text,
            initial,
            start,
            end,
            output,
        } => cmd_paste(&text, &initial, start, end, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Builds a selection from optional CLI offsets, defaulting to the end.
fn selection_for(value: &str, start: Option<usize>, end: Option<usize>) -> Result<CursorRange, InputError> {
    let length = value.chars().count();
    let start = start.unwrap_or(length);
    let end = end.unwrap_or(start);
    CursorRange::within(value, start, end)
}

fn cmd_format(
    value: &str,
    start: Option<usize>,
    end: Option<usize>,
    output: OutputFormat,
) -> Result<(), InputError> {
    let selection = selection_for(value, start, end)?;
    let result = format_with_selection(value, selection);

    match output {
        OutputFormat::Text => {
            println!("Value: {}", result.value());
            println!("Selection: {}..{}", result.selection_start(), result.selection_end());
            println!("Display: {}", render(result.value(), result.selection()));
        }
        OutputFormat::Json => print_json(&result),
    }
    Ok(())
}

fn cmd_pattern(leading: &str) {
    let pattern = select_pattern(leading);
    println!("Layout: {}", pattern.layout());
    println!("Pattern: {}", pattern);
    println!("Digits: {}", pattern.digit_slots());
    println!("Groups: {:?}", pattern.group_sizes());
}

fn cmd_type(keys: &str, initial: &str) {
    let mut field = CardNumberField::builder().initial_value(initial).build();
    println!("{:>9}  {:<8}  {}", "start", "", render(field.value(), field.selection()));

    for c in keys.chars() {
        let (label, key) = match c {
            '<' => ("Backspace".to_string(), Key::Backspace),
            '>' => ("Delete".to_string(), Key::Delete),
            other => (format!("{:?}", other), Key::Char(other)),
        };
        let status = match field.press(key) {
            Some(outcome) => status_of(&outcome),
            None => "ignored".to_string(),
        };
        println!(
            "{:>9}  {:<8}  {}",
            label,
            status,
            render(field.value(), field.selection())
        );
    }
}

fn cmd_paste(
    text: &str,
    initial: &str,
    start: Option<usize>,
    end: Option<usize>,
    output: OutputFormat,
) -> Result<(), InputError> {
    let mut field = CardNumberField::builder().initial_value(initial).build();
    let selection = selection_for(field.value(), start, end)?;
    field.select(selection);
    let outcome = field.paste(text);

    match output {
        OutputFormat::Text => {
            println!("Status: {}", status_of(&outcome));
            if let Some(reason) = outcome.reject_reason() {
                println!("Reason: {}", reason);
            }
            println!("Display: {}", render(outcome.value(), outcome.selection()));
        }
        OutputFormat::Json => print_json(&outcome),
    }
    Ok(())
}

fn status_of(outcome: &EditOutcome) -> String {
    if outcome.accepted() {
        "accepted".to_string()
    } else {
        "reverted".to_string()
    }
}

/// Draws the caret as `|` and a selection as `[...]`.
fn render(value: &str, selection: CursorRange) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    for (i, c) in value.chars().enumerate() {
        if selection.is_caret() && i == selection.start() {
            out.push('|');
        } else if !selection.is_caret() && i == selection.start() {
            out.push('[');
        } else if !selection.is_caret() && i == selection.end() {
            out.push(']');
        }
        out.push(c);
    }
    let length = value.chars().count();
    if selection.is_caret() && selection.start() >= length {
        out.push('|');
    } else if !selection.is_caret() && selection.end() >= length {
        out.push(']');
    }
    format!("\"{}\"", out)
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
