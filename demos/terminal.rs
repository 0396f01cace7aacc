//! Interactive terminal console example.
//!
//! Demonstrates managing a server over stdin/stdout, the dedicated-server
//! setup.
//!
//! Run with: `cargo run --example terminal --features terminal`
//!
//! Commands:
//! - `help` - List available commands
//! - `status` - Show whether the server is running
//! - `start` / `stop` / `restart` - Manage the server
//! - `kick <user>` - Kick a player
//! - `exit` - Exit the application

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
    println!("=== Server Console ===");
    println!("Type commands and press Enter. Type 'exit' to quit.");
    println!();

    // Ensure output is flushed before starting the app
    use std::io::Write;
    let _ = std::io::stdout().flush();

    App::new()
        .add_plugins(MinimalPlugins)
        .insert_resource(ServerHandle::new(ToyServer::default()))
        .add_plugins(ServerConsolePlugin)
        .run();
}
