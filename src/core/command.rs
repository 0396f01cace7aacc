//! Command parsing for the server console.
//!
//! Turns a raw input line into a [`Command`]. Parsing never fails: malformed
//! input still produces a variant, and argument validation happens at
//! dispatch time.

/// A parsed console command.
///
/// The console understands a fixed command set; anything else parses to
/// [`Command::Unknown`] with the offending token, and blank input parses to
/// [`Command::Empty`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the command list.
    Help,
    /// Broadcast a message to all players. Alias: `say`.
    Broadcast,
    /// List all players on the server. Alias: `players`.
    List,
    /// Kick a player. The target is validated at dispatch time.
    Kick(Option<String>),
    /// Report whether the server is running.
    Status,
    /// Start the server.
    Start,
    /// Stop the server.
    Stop,
    /// Stop then start the server.
    Restart,
    /// Exit the host application.
    Exit,
    /// Unrecognized first token (lower-cased).
    Unknown(String),
    /// Blank or whitespace-only input.
    Empty,
}

/// Parse a raw input line into a [`Command`].
///
/// The line is lower-cased and split on whitespace; the first token selects
/// the command and the rest are its arguments.
///
/// # Examples
///
/// ```
/// use bevy_server_console::core::{parse, Command};
///
/// assert_eq!(parse("start"), Command::Start);
/// assert_eq!(parse("  KICK Steve  "), Command::Kick(Some("steve".into())));
/// assert_eq!(parse(""), Command::Empty);
/// assert_eq!(parse("frobnicate"), Command::Unknown("frobnicate".into()));
/// ```
pub fn parse(line: &str) -> Command {
    let lowered = line.to_lowercase();
    let mut tokens = lowered.split_whitespace();

    let Some(head) = tokens.next() else {
        return Command::Empty;
    };

    match head {
        "help" => Command::Help,
        "broadcast" | "say" => Command::Broadcast,
        "list" | "players" => Command::List,
        "kick" => Command::Kick(tokens.next().map(str::to_string)),
        "status" => Command::Status,
        "start" => Command::Start,
        "stop" => Command::Stop,
        "restart" => Command::Restart,
        "exit" => Command::Exit,
        other => Command::Unknown(other.to_string()),
    }
}
