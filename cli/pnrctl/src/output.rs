//! Output formatting for CLI commands.

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl OutputFormat {
    /// Parse a format name; anything but `json` falls back to table.
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

/// Print data in the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No items found.".dimmed());
            } else {
                let table = Table::new(data).to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => {
            println!("{}", format_json(data, "[]"));
        }
    }
}

/// Print a single item as JSON.
pub fn print_single<T: Serialize>(data: &T) {
    println!("{}", format_json(data, "{}"));
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| fallback.to_string())
}
