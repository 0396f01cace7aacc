//! The server collaborator the console drives.
//!
//! The console owns no server state. It talks to the game's server-management
//! component through [`ServerControl`], injected into the ECS as a
//! [`ServerHandle`] resource.

use bevy::prelude::*;

/// Interface to the managed game server.
///
/// Implemented by the surrounding server-management component; the console
/// only queries the running state and requests start/stop transitions.
///
/// # Examples
///
/// ```
/// use bevy_server_console::core::ServerControl;
///
/// #[derive(Default)]
/// struct ToyServer {
///     running: bool,
/// }
///
/// impl ServerControl for ToyServer {
///     fn is_running(&self) -> bool {
///         self.running
///     }
///     fn start(&mut self) {
///         self.running = true;
///     }
///     fn stop(&mut self) {
///         self.running = false;
///     }
/// }
/// ```
pub trait ServerControl {
    /// Whether the server is currently running.
    fn is_running(&self) -> bool;

    /// Start the server. Callers check `is_running` first.
    fn start(&mut self);

    /// Stop the server. Callers check `is_running` first.
    fn stop(&mut self);
}

/// Resource holding the injected [`ServerControl`] implementation.
///
/// Insert one before adding [`ServerConsolePlugin`](crate::ServerConsolePlugin):
///
/// ```ignore
/// App::new()
///     .insert_resource(ServerHandle::new(MyServer::default()))
///     .add_plugins(ServerConsolePlugin)
///     .run();
/// ```
#[derive(Resource)]
pub struct ServerHandle(Box<dyn ServerControl + Send + Sync>);

impl ServerHandle {
    /// Wrap a server implementation for injection.
    pub fn new(server: impl ServerControl + Send + Sync + 'static) -> Self {
        Self(Box::new(server))
    }
}

impl ServerControl for ServerHandle {
    fn is_running(&self) -> bool {
        self.0.is_running()
    }

    fn start(&mut self) {
        self.0.start()
    }

    fn stop(&mut self) {
        self.0.stop()
    }
}
