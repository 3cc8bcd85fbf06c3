//! Player state machine.
//!
//! The player is built after the [`World`] and only ever refers to rooms and
//! objects by name. Every write to location, score, moves or the quit latch
//! publishes a [`PlayerEvent`] when, and only when, the value changes.

use log::info;
use tokio::sync::mpsc;

use crate::adventure::errors::AdventureError;
use crate::adventure::events::{EventBus, PlayerEvent};
use crate::adventure::types::{name_key, Direction, ObjectLocation};
use crate::adventure::world::World;

/// Result of a [`Player::move_toward`] attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player entered `room`. `gate` names the equipped item that let
    /// them through, if the room is gated.
    Moved { room: String, gate: Option<String> },
    /// No neighbor in that direction.
    Shut,
    /// Gated room entered without its item equipped.
    Blocked { message: String },
}

#[derive(Debug)]
pub struct Player {
    location: String,
    inventory: Vec<String>,
    score: i32,
    moves: u32,
    has_quit: bool,
    events: EventBus,
}

impl Player {
    /// Place a new player in `starting_room`. Objects whose persisted location
    /// is the inventory sentinel start out held.
    pub fn new(world: &World, starting_room: &str) -> Result<Self, AdventureError> {
        let room = world
            .room(starting_room)
            .ok_or_else(|| AdventureError::UnknownStartingRoom(starting_room.to_string()))?;
        let inventory = world
            .objects()
            .filter(|o| o.location.is_inventory())
            .map(|o| o.name.clone())
            .collect();
        Ok(Self {
            location: room.name.clone(),
            inventory,
            score: 0,
            moves: 0,
            has_quit: false,
            events: EventBus::new(),
        })
    }

    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<PlayerEvent> {
        self.events.subscribe()
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    fn set_location(&mut self, room: &str) {
        if self.location != room {
            info!("player moved: {} -> {}", self.location, room);
            self.location = room.to_string();
            self.events
                .publish(PlayerEvent::LocationChanged(self.location.clone()));
        }
    }

    /// Try to walk one step. Location and inventory are untouched unless the
    /// outcome is [`MoveOutcome::Moved`].
    pub fn move_toward(&mut self, world: &World, direction: Direction) -> MoveOutcome {
        let Some(destination) = world
            .room(&self.location)
            .and_then(|here| here.neighbor(direction))
            .and_then(|target| world.room(target))
        else {
            return MoveOutcome::Shut;
        };

        let gate = match &destination.gate_item {
            Some(item) if !world.is_equipped(item) => {
                return MoveOutcome::Blocked {
                    message: destination
                        .no_gate_item_message
                        .clone()
                        .unwrap_or_else(|| format!("You need the {} to go there.", item)),
                };
            }
            Some(item) => Some(item.clone()),
            None => None,
        };

        let room = destination.name.clone();
        self.set_location(&room);
        MoveOutcome::Moved { room, gate }
    }

    /// Names of held objects, in pickup order.
    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    pub fn is_holding(&self, object: &str) -> bool {
        let key = name_key(object);
        self.inventory.iter().any(|held| name_key(held) == key)
    }

    /// Move an object into the inventory, keeping its location field and the
    /// inventory list in agreement. Returns false if the object is unknown.
    pub fn take_object(&mut self, world: &mut World, object: &str) -> bool {
        let Some(record) = world.object_mut(object) else {
            return false;
        };
        record.location = ObjectLocation::Inventory;
        let name = record.name.clone();
        if !self.is_holding(&name) {
            self.inventory.push(name);
        }
        true
    }

    /// Put a held object down in the current room.
    pub fn release_object(&mut self, world: &mut World, object: &str) -> bool {
        let Some(record) = world.object_mut(object) else {
            return false;
        };
        record.location = ObjectLocation::Room(self.location.clone());
        let key = name_key(object);
        self.inventory.retain(|held| name_key(held) != key);
        true
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn set_score(&mut self, score: i32) {
        if self.score != score {
            self.score = score;
            self.events.publish(PlayerEvent::ScoreChanged(score));
        }
    }

    /// Add `amount` (possibly negative) to the score.
    pub fn reward(&mut self, amount: i32) {
        self.set_score(self.score.saturating_add(amount));
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn set_moves(&mut self, moves: u32) {
        if self.moves != moves {
            self.moves = moves;
            self.events.publish(PlayerEvent::MovesChanged(moves));
        }
    }

    pub fn count_move(&mut self) {
        self.set_moves(self.moves.saturating_add(1));
    }

    pub fn has_quit(&self) -> bool {
        self.has_quit
    }

    /// One-way latch.
    pub fn quit(&mut self) {
        if !self.has_quit {
            self.has_quit = true;
            self.events.publish(PlayerEvent::QuitChanged(true));
        }
    }
}
