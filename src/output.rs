use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use clap::ValueEnum;

use crate::table::TableView;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Global output format setting
static OUTPUT_JSON: AtomicBool = AtomicBool::new(false);
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_format(format: OutputFormat) {
    OUTPUT_JSON.store(format == OutputFormat::Json, Ordering::Relaxed);
}

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_json_output() -> bool {
    OUTPUT_JSON.load(Ordering::Relaxed)
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Print the project table or JSON depending on output mode
pub fn print_table(table: &TableView, loaded_at: Option<DateTime<Utc>>) {
    if is_json_output() {
        println!(
            "{}",
            serde_json::to_string_pretty(&table.rows).unwrap_or_default()
        );
        return;
    }

    if table.is_empty() {
        print_message("No projects found");
        return;
    }

    println!("{}", table.render());

    if !is_quiet() {
        let count = table.rows.len();
        let mut footer = format!("{count} project{}", if count == 1 { "" } else { "s" });
        if let Some(at) = loaded_at {
            footer.push_str(&format!(", loaded {}", format_relative(at, Utc::now())));
        }
        println!("{footer}");
    }
}

/// Print a message (skipped in JSON mode)
pub fn print_message(message: &str) {
    if !is_json_output() {
        println!("{message}");
    }
}

/// Format a relative time (e.g., "2 days ago")
pub fn format_relative(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(at);

    if diff.num_seconds() < 60 {
        "just now".to_string()
    } else if diff.num_minutes() < 60 {
        let mins = diff.num_minutes();
        format!("{} min{} ago", mins, if mins == 1 { "" } else { "s" })
    } else if diff.num_hours() < 24 {
        let hours = diff.num_hours();
        format!("{} hour{} ago", hours, if hours == 1 { "" } else { "s" })
    } else {
        at.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Truncate a string with ellipsis
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn relative_times() {
        let now = Utc::now();
        assert_eq!(format_relative(now, now), "just now");
        assert_eq!(format_relative(now - Duration::minutes(1), now), "1 min ago");
        assert_eq!(format_relative(now - Duration::hours(3), now), "3 hours ago");
    }

    #[test]
    fn truncates_on_char_boundary() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("ééééééééé", 6), "ééé...");
    }
}
