//! Core console logic with zero optional dependencies.
//!
//! This module provides the fundamental building blocks:
//! - [`Command`] and [`parse`] - Input-line parsing
//! - [`dispatch`] - Command dispatch against a [`ServerControl`]
//! - [`LogEntry`] and [`Severity`] - Console output values
//! - [`ServerControl`] and [`ServerHandle`] - The injected server collaborator
//! - Events for communication between layers

mod command;
mod dispatch;
mod events;
mod server;

pub use command::{Command, parse};
pub use dispatch::{DispatchOutcome, HELP_TEXT, LogEntry, Severity, dispatch};
pub use events::{ConsoleEventsPlugin, ConsoleInputEvent, ConsoleOutputEvent};
pub use server::{ServerControl, ServerHandle};
