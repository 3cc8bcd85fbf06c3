//! World document loader.
//!
//! Games are described in JSON: a starting room, optional banner messages,
//! and the room and object lists. Object locations name a room or the
//! inventory sentinel `"PlayerInventory"`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::adventure::errors::AdventureError;
use crate::adventure::output::OutputSink;
use crate::adventure::session::Session;
use crate::adventure::types::{Direction, ObjectLocation, Room, WorldObject};
use crate::adventure::world::World;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDocument {
    pub starting_location: String,
    #[serde(default)]
    pub welcome_message: Option<String>,
    #[serde(default)]
    pub exit_message: Option<String>,
    pub world: WorldDocument,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldDocument {
    #[serde(default)]
    pub rooms: Vec<RoomSeed>,
    #[serde(default)]
    pub objects: Vec<ObjectSeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSeed {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub neighbors: HashMap<Direction, String>,
    #[serde(default)]
    pub gate_item_name: Option<String>,
    #[serde(default)]
    pub no_gate_item_message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectSeed {
    pub name: String,
    #[serde(default)]
    pub world_description: String,
    #[serde(default)]
    pub examine_description: String,
    pub location: String,
    #[serde(default)]
    pub is_takeable: bool,
    #[serde(default)]
    pub is_equippable: bool,
    #[serde(default)]
    pub equip_slot: Option<String>,
    #[serde(default)]
    pub score_value: i32,
    #[serde(default)]
    pub required_use_object_name: Option<String>,
    #[serde(default)]
    pub reward_object_name: Option<String>,
}

impl From<RoomSeed> for Room {
    fn from(seed: RoomSeed) -> Self {
        Room {
            name: seed.name,
            description: seed.description,
            neighbors: seed.neighbors,
            gate_item: seed.gate_item_name,
            no_gate_item_message: seed.no_gate_item_message,
        }
    }
}

impl From<ObjectSeed> for WorldObject {
    fn from(seed: ObjectSeed) -> Self {
        WorldObject {
            name: seed.name,
            world_description: seed.world_description,
            examine_description: seed.examine_description,
            location: ObjectLocation::parse(&seed.location),
            takeable: seed.is_takeable,
            equippable: seed.is_equippable,
            equip_slot: seed.equip_slot,
            equipped: false,
            score_value: seed.score_value,
            required_use_object: seed.required_use_object_name,
            reward_object: seed.reward_object_name,
        }
    }
}

impl GameDocument {
    pub fn from_json_str(json: &str) -> Result<Self, AdventureError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn build_world(&self) -> Result<World, AdventureError> {
        let rooms = self.world.rooms.iter().cloned().map(Room::from).collect();
        let objects = self
            .world
            .objects
            .iter()
            .cloned()
            .map(WorldObject::from)
            .collect();
        World::new(rooms, objects)
    }

    /// Build the world and a fresh player, wiring `output` as the narration sink.
    pub fn into_session(self, output: impl OutputSink + 'static) -> Result<Session, AdventureError> {
        let world = self.build_world()?;
        let session = Session::new(world, &self.starting_location, output)?;
        Ok(session.with_messages(self.welcome_message, self.exit_message))
    }
}

/// Load a game document from a JSON file.
pub fn load_game_from_json<P: AsRef<Path>>(path: P) -> Result<GameDocument, AdventureError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| AdventureError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
