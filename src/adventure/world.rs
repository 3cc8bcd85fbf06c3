//! Room graph and object registry.
//!
//! Rooms and their neighbor graph are fixed once [`World::new`] succeeds.
//! Objects keep three mutable fields during play: location, equipped flag and
//! remaining score value. Both registries are keyed by [`name_key`], so every
//! lookup is case-insensitive.

use std::collections::HashMap;

use log::debug;

use crate::adventure::errors::AdventureError;
use crate::adventure::types::{name_key, ObjectLocation, Room, WorldObject};

#[derive(Debug, Clone)]
pub struct World {
    rooms: HashMap<String, Room>,
    room_order: Vec<String>,
    objects: HashMap<String, WorldObject>,
    object_order: Vec<String>,
}

impl World {
    /// Build a world and check every cross reference: neighbor targets,
    /// object rooms, gate items, required-use and reward objects.
    pub fn new(rooms: Vec<Room>, objects: Vec<WorldObject>) -> Result<Self, AdventureError> {
        let mut world = World {
            rooms: HashMap::with_capacity(rooms.len()),
            room_order: Vec::with_capacity(rooms.len()),
            objects: HashMap::with_capacity(objects.len()),
            object_order: Vec::with_capacity(objects.len()),
        };

        for room in rooms {
            let key = name_key(&room.name);
            if world.rooms.contains_key(&key) {
                return Err(AdventureError::DuplicateRoom(room.name));
            }
            world.room_order.push(key.clone());
            world.rooms.insert(key, room);
        }

        for mut object in objects {
            let key = name_key(&object.name);
            if world.objects.contains_key(&key) {
                return Err(AdventureError::DuplicateObject(object.name));
            }
            object.equipped = false;
            world.object_order.push(key.clone());
            world.objects.insert(key, object);
        }

        world.validate()?;
        debug!(
            "world built: rooms={} objects={}",
            world.rooms.len(),
            world.objects.len()
        );
        Ok(world)
    }

    fn validate(&self) -> Result<(), AdventureError> {
        for room in self.rooms() {
            let mut exits: Vec<_> = room.neighbors.iter().collect();
            exits.sort();
            for (direction, target) in exits {
                if self.room(target).is_none() {
                    return Err(AdventureError::UnknownNeighbor {
                        room: room.name.clone(),
                        direction: *direction,
                        target: target.clone(),
                    });
                }
            }
            if let Some(item) = &room.gate_item {
                if self.object(item).is_none() {
                    return Err(AdventureError::UnknownGateItem {
                        room: room.name.clone(),
                        item: item.clone(),
                    });
                }
            }
        }

        for object in self.objects() {
            if let ObjectLocation::Room(location) = &object.location {
                if self.room(location).is_none() {
                    return Err(AdventureError::UnknownObjectLocation {
                        object: object.name.clone(),
                        location: location.clone(),
                    });
                }
            }
            let references = [
                ("required_use_object", &object.required_use_object),
                ("reward_object", &object.reward_object),
            ];
            for (field, target) in references {
                if let Some(target) = target {
                    if self.object(target).is_none() {
                        return Err(AdventureError::UnknownObjectReference {
                            object: object.name.clone(),
                            field,
                            target: target.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.get(&name_key(name))
    }

    /// Rooms in declaration order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.room_order.iter().filter_map(|key| self.rooms.get(key))
    }

    pub fn object(&self, name: &str) -> Option<&WorldObject> {
        self.objects.get(&name_key(name))
    }

    pub fn object_mut(&mut self, name: &str) -> Option<&mut WorldObject> {
        self.objects.get_mut(&name_key(name))
    }

    /// Objects in declaration order.
    pub fn objects(&self) -> impl Iterator<Item = &WorldObject> {
        self.object_order.iter().filter_map(|key| self.objects.get(key))
    }

    pub fn objects_in_room<'a>(&'a self, room: &'a str) -> impl Iterator<Item = &'a WorldObject> {
        self.objects().filter(move |o| o.location.is_room(room))
    }

    /// True when the named object exists and is currently equipped.
    pub fn is_equipped(&self, name: &str) -> bool {
        self.object(name).is_some_and(|o| o.equipped)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}
