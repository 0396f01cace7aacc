//! A minimal game-server console core for Bevy.
//!
//! Parses typed command lines (help, broadcast, list, kick, status, start,
//! stop, restart, exit) and dispatches them against an injected
//! [`ServerControl`] collaborator, producing severity-tagged log entries for
//! whatever frontend renders the console.
//!
//! - **Command / parse**: input-line parsing with deferred validation
//! - **dispatch**: the command table, side effects only through [`ServerControl`]
//! - **Events**: submitted lines in, log entries out
//!
//! # Features
//!
//! - `terminal`: stdin/stdout backend for dedicated servers
//!
//! # Quick Start
//!
//! ```ignore
//! use bevy::prelude::*;
//! use bevy_server_console::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(MinimalPlugins)
//!         .insert_resource(ServerHandle::new(MyServer::default()))
//!         .add_plugins(ServerConsolePlugin)
//!         .run();
//! }
//!
//! fn submit(mut events: MessageWriter<ConsoleInputEvent>) {
//!     events.write(ConsoleInputEvent::new("status"));
//! }
//!
//! fn display(mut events: MessageReader<ConsoleOutputEvent>) {
//!     for event in events.read() {
//!         println!("{}", event.message);
//!     }
//! }
//! ```

use bevy::prelude::*;

// Core module (always available, zero optional deps)
pub mod core;

// Re-export core types at crate root for convenience
pub use self::core::{
    Command, parse,
    DispatchOutcome, HELP_TEXT, LogEntry, Severity, dispatch,
    ServerControl, ServerHandle,
    ConsoleEventsPlugin, ConsoleInputEvent, ConsoleOutputEvent,
};

// Terminal backend (feature-gated)
#[cfg(feature = "terminal")]
pub mod terminal;

#[cfg(feature = "terminal")]
pub use terminal::{TerminalConfig, TerminalPlugin};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::core::{
        Command, parse,
        DispatchOutcome, LogEntry, Severity, dispatch,
        ServerControl, ServerHandle,
        ConsoleInputEvent, ConsoleOutputEvent,
    };
    pub use crate::ServerConsolePlugin;
}

/// Main console plugin.
///
/// Expects a [`ServerHandle`] resource to be inserted by the application;
/// input events arriving without one are dropped with a warning.
#[derive(Default)]
pub struct ServerConsolePlugin;

impl Plugin for ServerConsolePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(crate::core::ConsoleEventsPlugin)
            .add_systems(Update, process_console_input);

        // Terminal backend (feature-gated)
        #[cfg(feature = "terminal")]
        {
            app.add_plugins(terminal::TerminalPlugin);
        }
    }
}

/// System that parses submitted lines and dispatches them against the server.
///
/// One submitted line is handled per event: parse, dispatch, fan the
/// resulting entries out as output events. An `exit` outcome is translated
/// into [`AppExit`] rather than terminating the process from inside the
/// dispatcher.
fn process_console_input(
    mut input_events: MessageReader<ConsoleInputEvent>,
    server: Option<ResMut<ServerHandle>>,
    mut output_events: MessageWriter<ConsoleOutputEvent>,
    mut exit_events: MessageWriter<AppExit>,
) {
    let Some(mut server) = server else {
        for event in input_events.read() {
            warn!("Dropping console input '{}': no ServerHandle resource", event.line);
        }
        return;
    };

    for event in input_events.read() {
        let cmd = crate::core::parse(&event.line);
        let outcome = crate::core::dispatch(&cmd, &mut *server);

        for entry in outcome.entries {
            output_events.write(entry.into());
        }

        if outcome.exit {
            exit_events.write(AppExit::Success);
        }
    }
}
