//! Command dispatch against a [`ServerControl`].
//!
//! [`dispatch`] maps a parsed [`Command`] to at most one side effect on the
//! server plus a sequence of [`LogEntry`] values for the presentation layer.
//! It never fails: invalid state and missing arguments come back as
//! Error-severity entries.

use bevy::color::Color;

use super::{Command, ServerControl};

/// Severity of a console log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// General information (gray).
    #[default]
    Info,
    /// User-facing error (pink).
    Error,
}

impl Severity {
    /// Suggested display color for this severity.
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => Color::srgba(0.6, 0.6, 0.6, 1.0),
            Severity::Error => Color::srgba(1.0, 0.75, 0.75, 1.0),
        }
    }
}

/// A single console output line.
///
/// Produced by [`dispatch`], consumed by whatever renders the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// The message text.
    pub message: String,
    /// The severity.
    pub severity: Severity,
}

impl LogEntry {
    /// Create an entry with the given severity.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    /// Create an info entry.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Create an error entry.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }
}

/// Result of dispatching a single command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Log entries to display, in order.
    pub entries: Vec<LogEntry>,
    /// Whether the command asked the host application to exit.
    pub exit: bool,
}

impl DispatchOutcome {
    fn entry(entry: LogEntry) -> Self {
        Self {
            entries: vec![entry],
            exit: false,
        }
    }

    fn none() -> Self {
        Self::default()
    }

    fn exit() -> Self {
        Self {
            entries: Vec::new(),
            exit: true,
        }
    }
}

/// Static help line listing the available commands.
pub const HELP_TEXT: &str =
    "Commands: broadcast, list, kick, status, start, stop, restart, exit";

/// Dispatch a command against the server.
///
/// Server state is only touched through `start`/`stop`, and only when the
/// running-state precondition holds: `start` refuses when already running,
/// `stop` and `restart` refuse when not running.
///
/// # Examples
///
/// ```ignore
/// let outcome = dispatch(&parse("status"), &mut server);
/// for entry in &outcome.entries {
///     println!("{}", entry.message);
/// }
/// ```
pub fn dispatch(cmd: &Command, server: &mut dyn ServerControl) -> DispatchOutcome {
    match cmd {
        Command::Help => DispatchOutcome::entry(LogEntry::info(HELP_TEXT)),
        // Broadcast and List are placeholders until the server grows a
        // player-session API.
        Command::Broadcast => DispatchOutcome::none(),
        Command::List => DispatchOutcome::none(),
        Command::Kick(None) => {
            DispatchOutcome::entry(LogEntry::error("Command kick requires <user> to kick"))
        }
        // No removal is performed; ServerControl has no kick capability yet.
        Command::Kick(Some(user)) => {
            DispatchOutcome::entry(LogEntry::info(format!("Kicked {}", user)))
        }
        Command::Status => {
            let message = if server.is_running() {
                "Server is online."
            } else {
                "Server is offline."
            };
            DispatchOutcome::entry(LogEntry::info(message))
        }
        Command::Start => {
            if server.is_running() {
                DispatchOutcome::entry(LogEntry::error("Server is already running."))
            } else {
                server.start();
                DispatchOutcome::none()
            }
        }
        Command::Stop => {
            if server.is_running() {
                server.stop();
                DispatchOutcome::none()
            } else {
                DispatchOutcome::entry(LogEntry::info("Server is not running."))
            }
        }
        Command::Restart => {
            if server.is_running() {
                server.stop();
                server.start();
                DispatchOutcome::none()
            } else {
                DispatchOutcome::entry(LogEntry::info("Server needs to be running to restart."))
            }
        }
        Command::Exit => DispatchOutcome::exit(),
        Command::Unknown(token) => {
            DispatchOutcome::entry(LogEntry::error(format!("Unknown command \"{}\"", token)))
        }
        Command::Empty => DispatchOutcome::none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse;

    /// Test double that records start/stop calls in order.
    #[derive(Default)]
    struct FakeServer {
        running: bool,
        calls: Vec<&'static str>,
    }

    impl FakeServer {
        fn running() -> Self {
            Self {
                running: true,
                calls: Vec::new(),
            }
        }
    }

    impl ServerControl for FakeServer {
        fn is_running(&self) -> bool {
            self.running
        }

        fn start(&mut self) {
            self.running = true;
            self.calls.push("start");
        }

        fn stop(&mut self) {
            self.running = false;
            self.calls.push("stop");
        }
    }

    #[test]
    fn test_help() {
        let mut server = FakeServer::default();
        let outcome = dispatch(&Command::Help, &mut server);
        assert_eq!(outcome.entries, vec![LogEntry::info(HELP_TEXT)]);
        assert!(!outcome.exit);
        assert!(server.calls.is_empty());
    }

    #[test]
    fn test_broadcast_and_list_are_placeholders() {
        let mut server = FakeServer::default();
        assert_eq!(dispatch(&Command::Broadcast, &mut server), DispatchOutcome::none());
        assert_eq!(dispatch(&Command::List, &mut server), DispatchOutcome::none());
        assert!(server.calls.is_empty());
    }

    #[test]
    fn test_kick_without_target() {
        let mut server = FakeServer::default();
        let outcome = dispatch(&Command::Kick(None), &mut server);
        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.entries[0].severity, Severity::Error);
        assert!(outcome.entries[0].message.contains("requires <user>"));
    }

    #[test]
    fn test_kick_with_target_is_message_only() {
        let mut server = FakeServer::running();
        let outcome = dispatch(&Command::Kick(Some("steve".into())), &mut server);
        assert_eq!(outcome.entries, vec![LogEntry::info("Kicked steve")]);
        assert!(server.calls.is_empty());
    }

    #[test]
    fn test_status_reports_running_state() {
        let mut server = FakeServer::running();
        let outcome = dispatch(&Command::Status, &mut server);
        assert_eq!(outcome.entries, vec![LogEntry::info("Server is online.")]);

        let mut server = FakeServer::default();
        let outcome = dispatch(&Command::Status, &mut server);
        assert_eq!(outcome.entries, vec![LogEntry::info("Server is offline.")]);
    }

    #[test]
    fn test_status_is_idempotent() {
        let mut server = FakeServer::running();
        let first = dispatch(&Command::Status, &mut server);
        let second = dispatch(&Command::Status, &mut server);
        assert_eq!(first, second);
        assert!(server.calls.is_empty());
    }

    #[test]
    fn test_start_when_stopped() {
        let mut server = FakeServer::default();
        let outcome = dispatch(&Command::Start, &mut server);
        assert!(outcome.entries.is_empty());
        assert_eq!(server.calls, vec!["start"]);
        assert!(server.running);
    }

    #[test]
    fn test_start_when_running() {
        let mut server = FakeServer::running();
        let outcome = dispatch(&Command::Start, &mut server);
        assert_eq!(
            outcome.entries,
            vec![LogEntry::error("Server is already running.")]
        );
        assert!(server.calls.is_empty());
    }

    #[test]
    fn test_stop_when_running() {
        let mut server = FakeServer::running();
        let outcome = dispatch(&Command::Stop, &mut server);
        assert!(outcome.entries.is_empty());
        assert_eq!(server.calls, vec!["stop"]);
        assert!(!server.running);
    }

    #[test]
    fn test_stop_when_stopped() {
        let mut server = FakeServer::default();
        let outcome = dispatch(&Command::Stop, &mut server);
        assert_eq!(outcome.entries, vec![LogEntry::info("Server is not running.")]);
        assert!(server.calls.is_empty());
    }

    #[test]
    fn test_restart_when_running_stops_then_starts() {
        let mut server = FakeServer::running();
        let outcome = dispatch(&Command::Restart, &mut server);
        assert!(outcome.entries.is_empty());
        assert_eq!(server.calls, vec!["stop", "start"]);
        assert!(server.running);
    }

    #[test]
    fn test_restart_when_stopped() {
        let mut server = FakeServer::default();
        let outcome = dispatch(&Command::Restart, &mut server);
        assert_eq!(
            outcome.entries,
            vec![LogEntry::info("Server needs to be running to restart.")]
        );
        assert!(server.calls.is_empty());
    }

    #[test]
    fn test_exit_requests_exit() {
        let mut server = FakeServer::default();
        let outcome = dispatch(&Command::Exit, &mut server);
        assert!(outcome.exit);
        assert!(outcome.entries.is_empty());
        assert!(server.calls.is_empty());
    }

    #[test]
    fn test_unknown_reports_token() {
        let mut server = FakeServer::default();
        let outcome = dispatch(&Command::Unknown("foo".into()), &mut server);
        assert_eq!(outcome.entries.len(), 1);
        assert_eq!(outcome.entries[0].severity, Severity::Error);
        assert!(outcome.entries[0].message.contains("foo"));
        assert_eq!(outcome.entries[0].message, "Unknown command \"foo\"");
    }

    #[test]
    fn test_empty_is_silent() {
        let mut server = FakeServer::default();
        assert_eq!(dispatch(&Command::Empty, &mut server), DispatchOutcome::none());
    }

    #[test]
    fn test_parse_then_dispatch() {
        let mut server = FakeServer::default();
        let outcome = dispatch(&parse("start"), &mut server);
        assert!(outcome.entries.is_empty());
        assert!(server.running);

        let outcome = dispatch(&parse("STATUS"), &mut server);
        assert_eq!(outcome.entries, vec![LogEntry::info("Server is online.")]);
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(Severity::Info.color(), Color::srgba(0.6, 0.6, 0.6, 1.0));
        assert_eq!(Severity::Error.color(), Color::srgba(1.0, 0.75, 0.75, 1.0));
    }
}
