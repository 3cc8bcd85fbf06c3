use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Location value meaning "held by the player" in persisted world documents.
pub const INVENTORY_SENTINEL: &str = "PlayerInventory";

/// Normalise a room or object name for case-insensitive lookup.
pub fn name_key(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Compare two names the way the registries key them.
pub fn same_name(a: &str, b: &str) -> bool {
    name_key(a) == name_key(b)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    #[serde(alias = "north", alias = "NORTH")]
    North,
    #[serde(alias = "south", alias = "SOUTH")]
    South,
    #[serde(alias = "east", alias = "EAST")]
    East,
    #[serde(alias = "west", alias = "WEST")]
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a world object currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectLocation {
    /// Lying in the named room.
    Room(String),
    /// Held by the player.
    Inventory,
}

impl ObjectLocation {
    /// Parse a persisted location string, recognising the inventory sentinel.
    pub fn parse(raw: &str) -> Self {
        if same_name(raw, INVENTORY_SENTINEL) {
            ObjectLocation::Inventory
        } else {
            ObjectLocation::Room(raw.trim().to_string())
        }
    }

    pub fn is_inventory(&self) -> bool {
        matches!(self, ObjectLocation::Inventory)
    }

    /// True when the object lies in `room` (case-insensitive).
    pub fn is_room(&self, room: &str) -> bool {
        match self {
            ObjectLocation::Room(name) => same_name(name, room),
            ObjectLocation::Inventory => false,
        }
    }
}

impl fmt::Display for ObjectLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectLocation::Room(name) => f.write_str(name),
            ObjectLocation::Inventory => f.write_str(INVENTORY_SENTINEL),
        }
    }
}

/// A location in the room graph. Fixed once the world is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub name: String,
    pub description: String,
    pub neighbors: HashMap<Direction, String>,
    /// Object that must be equipped to enter this room.
    pub gate_item: Option<String>,
    /// Narration shown when the gate item is not equipped.
    pub no_gate_item_message: Option<String>,
}

impl Room {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            neighbors: HashMap::new(),
            gate_item: None,
            no_gate_item_message: None,
        }
    }

    pub fn with_neighbor(mut self, direction: Direction, destination: &str) -> Self {
        self.neighbors.insert(direction, destination.to_string());
        self
    }

    pub fn with_gate(mut self, item: &str, message: &str) -> Self {
        self.gate_item = Some(item.to_string());
        self.no_gate_item_message = Some(message.to_string());
        self
    }

    pub fn neighbor(&self, direction: Direction) -> Option<&str> {
        self.neighbors.get(&direction).map(String::as_str)
    }

    /// True when `object` is this room's gate item.
    pub fn is_gated_on(&self, object: &str) -> bool {
        self.gate_item
            .as_deref()
            .is_some_and(|gate| same_name(gate, object))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorldObject {
    pub name: String,
    /// Narration used when the object is seen lying in a room.
    pub world_description: String,
    pub examine_description: String,
    pub location: ObjectLocation,
    pub takeable: bool,
    pub equippable: bool,
    pub equip_slot: Option<String>,
    /// Runtime only; always false after loading.
    pub equipped: bool,
    /// Score granted on first pickup, zeroed once granted.
    pub score_value: i32,
    /// Object that must be used on this one.
    pub required_use_object: Option<String>,
    /// Object yielded when this one is used correctly.
    pub reward_object: Option<String>,
}

impl WorldObject {
    pub fn new(name: &str, location: ObjectLocation) -> Self {
        Self {
            name: name.to_string(),
            world_description: String::new(),
            examine_description: String::new(),
            location,
            takeable: false,
            equippable: false,
            equip_slot: None,
            equipped: false,
            score_value: 0,
            required_use_object: None,
            reward_object: None,
        }
    }

    pub fn with_descriptions(mut self, world: &str, examine: &str) -> Self {
        self.world_description = world.to_string();
        self.examine_description = examine.to_string();
        self
    }

    pub fn takeable(mut self) -> Self {
        self.takeable = true;
        self
    }

    pub fn equippable(mut self, slot: &str) -> Self {
        self.equippable = true;
        self.equip_slot = Some(slot.to_string());
        self
    }

    pub fn with_score(mut self, value: i32) -> Self {
        self.score_value = value;
        self
    }

    pub fn used_with(mut self, tool: &str, reward: &str) -> Self {
        self.required_use_object = Some(tool.to_string());
        self.reward_object = Some(reward.to_string());
        self
    }
}
