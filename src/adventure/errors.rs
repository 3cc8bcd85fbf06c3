use std::path::PathBuf;

use thiserror::Error;

use crate::adventure::types::Direction;

/// Errors raised while building or loading a game. Player mistakes never
/// surface here; those are narrated instead.
#[derive(Debug, Error)]
pub enum AdventureError {
    /// Wrapper around IO errors (reading a world file, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapper around JSON parse errors in a world document.
    #[error("world document error: {0}")]
    Json(#[from] serde_json::Error),

    /// A world file on disk that is not a valid game document.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate room name: {0}")]
    DuplicateRoom(String),

    #[error("duplicate object name: {0}")]
    DuplicateObject(String),

    /// A room lists a neighbor that is not part of the world.
    #[error("room {room} leads {direction} to unknown room {target}")]
    UnknownNeighbor {
        room: String,
        direction: Direction,
        target: String,
    },

    #[error("object {object} is placed in unknown room {location}")]
    UnknownObjectLocation { object: String, location: String },

    /// An object's required-use or reward field names no registered object.
    #[error("object {object} refers to unknown object {target} in {field}")]
    UnknownObjectReference {
        object: String,
        field: &'static str,
        target: String,
    },

    #[error("room {room} is gated on unknown object {item}")]
    UnknownGateItem { room: String, item: String },

    #[error("starting room not found: {0}")]
    UnknownStartingRoom(String),

    /// Two commands claim the same verb alias.
    #[error("verb alias {alias} is claimed by both {first} and {second}")]
    DuplicateAlias {
        alias: String,
        first: String,
        second: String,
    },

    #[error("command {0} has no verb aliases")]
    EmptyCommand(String),
}
