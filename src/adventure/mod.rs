//! Turn-based text adventure engine.
//!
//! A [`World`] holds the fixed room graph and the object registry, a
//! [`Player`] walks it, and a [`Session`] turns raw input lines into handler
//! calls through the [`CommandTable`]. Narration goes to an [`OutputSink`];
//! state changes are published as [`PlayerEvent`]s.

pub mod command;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod interact;
pub mod loader;
pub mod output;
pub mod player;
pub mod session;
pub mod types;
pub mod world;

pub use command::{Command, CommandContext, CommandTable, Handler};
pub use errors::AdventureError;
pub use events::{EventBus, PlayerEvent};
pub use handlers::default_commands;
pub use interact::{lookup, Lookup};
pub use loader::{load_game_from_json, GameDocument, ObjectSeed, RoomSeed, WorldDocument};
pub use output::{BufferedOutput, OutputSink, StdoutOutput};
pub use player::{MoveOutcome, Player};
pub use session::{Session, DEFAULT_EXIT_MESSAGE, DEFAULT_WELCOME_MESSAGE};
pub use types::{name_key, same_name, Direction, ObjectLocation, Room, WorldObject, INVENTORY_SENTINEL};
pub use world::World;
