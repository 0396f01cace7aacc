//! Console events for communication between layers.
//!
//! Events are the primary mechanism for:
//! - Frontend -> Core: submitted command lines
//! - Core -> Frontend: log entries to display

use bevy::prelude::*;

use super::{LogEntry, Severity};

/// Event sent when a command line is submitted to the console.
///
/// The console system will parse and dispatch this line.
///
/// # Examples
///
/// ```ignore
/// fn submit_command(mut events: MessageWriter<ConsoleInputEvent>) {
///     events.write(ConsoleInputEvent::new("restart"));
/// }
/// ```
#[derive(Message, Debug, Clone)]
pub struct ConsoleInputEvent {
    /// The raw line to parse and dispatch.
    pub line: String,
}

impl ConsoleInputEvent {
    /// Create a new input event.
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }
}

/// Event sent when a log entry should be displayed by the console frontend.
///
/// # Examples
///
/// ```ignore
/// fn show_output(mut events: MessageReader<ConsoleOutputEvent>) {
///     for event in events.read() {
///         println!("{}", event.message);
///     }
/// }
/// ```
#[derive(Message, Debug, Clone)]
pub struct ConsoleOutputEvent {
    /// The message text.
    pub message: String,
    /// The severity.
    pub severity: Severity,
}

impl ConsoleOutputEvent {
    /// Create a new output event.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    /// Create an info message.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    /// Create an error message.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }
}

impl From<LogEntry> for ConsoleOutputEvent {
    fn from(entry: LogEntry) -> Self {
        Self {
            message: entry.message,
            severity: entry.severity,
        }
    }
}

/// Plugin that registers all console events.
pub struct ConsoleEventsPlugin;

impl Plugin for ConsoleEventsPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ConsoleInputEvent>()
            .add_message::<ConsoleOutputEvent>();
    }
}
