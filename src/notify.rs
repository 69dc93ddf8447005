use std::fmt;

use colored::Colorize;
use serde::Serialize;

use crate::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Success => write!(f, "success"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Fire-and-forget user notifications.
pub trait Notifier {
    fn notify(&self, severity: Severity, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, severity: Severity, message: &str) {
        (**self).notify(severity, message)
    }
}

/// Writes notifications to stderr so stdout stays clean for tables and JSON.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        if output::is_json_output() {
            let line = serde_json::json!({ "severity": severity, "message": message });
            eprintln!("{line}");
            return;
        }

        match severity {
            Severity::Error => eprintln!("{} {message}", "✗".red().bold()),
            Severity::Success if !output::is_quiet() => {
                eprintln!("{} {message}", "✓".green().bold())
            }
            Severity::Info if !output::is_quiet() => eprintln!("{} {message}", "•".blue()),
            _ => {}
        }
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    pub struct RecordingNotifier {
        pub events: RefCell<Vec<(Severity, String)>>,
    }

    impl RecordingNotifier {
        pub fn count(&self, severity: Severity) -> usize {
            self.events
                .borrow()
                .iter()
                .filter(|(s, _)| *s == severity)
                .count()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, severity: Severity, message: &str) {
            self.events.borrow_mut().push((severity, message.to_string()));
        }
    }
}
