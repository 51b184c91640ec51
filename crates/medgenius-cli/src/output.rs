//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use medgenius_domain::NormalizedRecord;
use medgenius_trials::Trial;
use serde_json::Value;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an analysis result.
    pub fn format_record(&self, title: &str, record: &NormalizedRecord) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(record.to_pretty_json()),
            OutputFormat::Quiet => Ok(serde_json::to_string(record)?),
            OutputFormat::Table => Ok(self.format_record_sections(title, record)),
        }
    }

    /// Format a record as titled sections, one per field.
    fn format_record_sections(&self, title: &str, record: &NormalizedRecord) -> String {
        let mut out = String::new();
        out.push_str(&self.colorize(title, "cyan"));
        out.push('\n');

        for (field, value) in record.iter() {
            out.push('\n');
            out.push_str(&self.colorize(&humanize(field), "green"));
            out.push('\n');
            match value {
                Value::Array(items) if items.iter().all(Value::is_object) && !items.is_empty() => {
                    out.push_str(&render_object_table(items));
                    out.push('\n');
                }
                Value::Array(items) => {
                    if items.is_empty() {
                        out.push_str("  (none)\n");
                    }
                    for item in items {
                        out.push_str(&format!("  - {}\n", render_scalar(item)));
                    }
                }
                Value::Object(map) => {
                    for (key, inner) in map {
                        out.push_str(&format!("  {}: {}\n", humanize(key), render_scalar(inner)));
                    }
                }
                other => {
                    out.push_str(&format!("  {}\n", render_scalar(other)));
                }
            }
        }

        out
    }

    /// Format trial search results.
    pub fn format_trials(&self, trials: &[Trial]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(trials)?),
            OutputFormat::Quiet => {
                let ids: Vec<&str> = trials.iter().map(|t| t.id.as_str()).collect();
                Ok(ids.join("\n"))
            }
            OutputFormat::Table => Ok(self.format_trials_table(trials)),
        }
    }

    fn format_trials_table(&self, trials: &[Trial]) -> String {
        if trials.is_empty() {
            return self.colorize("No matching trials found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Title", "Condition", "Phase", "Status", "Location"]);

        for trial in trials {
            builder.push_record([
                trial.id.as_str(),
                trial.title.as_str(),
                trial.condition.as_str(),
                trial.phase.as_str(),
                trial.status.as_str(),
                trial.location.as_str(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Render a table over a homogeneous array of objects, using the first
/// object's keys as columns.
fn render_object_table(items: &[Value]) -> String {
    let columns: Vec<String> = items
        .first()
        .and_then(Value::as_object)
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default();

    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(|c| humanize(c)));

    for item in items {
        let row: Vec<String> = columns
            .iter()
            .map(|col| {
                item.get(col)
                    .map(render_scalar)
                    .unwrap_or_default()
            })
            .collect();
        builder.push_record(row);
    }

    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// Render a JSON value for display, without quoting strings.
fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Split a camelCase field name into capitalized words.
fn humanize(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 4);
    for (i, ch) in field.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else {
            if ch.is_uppercase() {
                out.push(' ');
            }
            out.push(ch);
        }
    }
    out
}
