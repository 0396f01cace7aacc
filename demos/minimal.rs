//! Minimal headless console example.
//!
//! Demonstrates driving the console programmatically without any UI.
//!
//! Run with: `cargo run --example minimal`

use bevy::prelude::*;
use bevy_server_console::prelude::*;

/// Stand-in for a real server-management component.
#[derive(Default)]
struct ToyServer {
    running: bool,
}

impl ServerControl for ToyServer {
    fn is_running(&self) -> bool {
        self.running
    }

    fn start(&mut self) {
        println!("(server process started)");
        self.running = true;
    }

    fn stop(&mut self) {
        println!("(server process stopped)");
        self.running = false;
    }
}

fn main() {
    App::new()
        .add_plugins(MinimalPlugins)
        .insert_resource(ServerHandle::new(ToyServer::default()))
        .add_plugins(ServerConsolePlugin)
        .add_systems(Update, send_test_commands.run_if(run_once))
        .add_systems(Update, print_outputs)
        .run();
}

/// Send some test commands programmatically.
fn send_test_commands(mut events: MessageWriter<ConsoleInputEvent>) {
    println!("--- Sending test commands ---");

    events.write(ConsoleInputEvent::new("help"));
    events.write(ConsoleInputEvent::new("status"));
    events.write(ConsoleInputEvent::new("start"));
    events.write(ConsoleInputEvent::new("status"));
    events.write(ConsoleInputEvent::new("kick steve"));
    events.write(ConsoleInputEvent::new("restart"));
    events.write(ConsoleInputEvent::new("exit"));
}

/// Print console output events.
fn print_outputs(mut events: MessageReader<ConsoleOutputEvent>) {
    for event in events.read() {
        let prefix = match event.severity {
            Severity::Info => "[INFO]",
            Severity::Error => "[ERROR]",
        };
        println!("{} {}", prefix, event.message);
    }
}
