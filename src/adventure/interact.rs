//! Object interaction: get, drop, equip, unequip, examine and use.
//!
//! Every handler resolves its subject through [`lookup`], which separates a
//! missing subject ("you can't get nothing") from a name the world doesn't
//! know. Failures narrate a reason and leave the world untouched.

use crate::adventure::command::CommandContext;
use crate::adventure::session::Session;
use crate::adventure::types::{same_name, ObjectLocation};
use crate::adventure::world::World;

/// Outcome of resolving a subject token against the object registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// No subject was given.
    Unspecified,
    /// The world has no object by that name; carries the name as typed.
    NotFound(String),
    /// Carries the object's declared name.
    Found(String),
}

pub fn lookup(world: &World, subject: Option<&str>) -> Lookup {
    match subject {
        None => Lookup::Unspecified,
        Some(name) => match world.object(name) {
            Some(object) => Lookup::Found(object.name.clone()),
            None => Lookup::NotFound(name.to_string()),
        },
    }
}

/// Resolve `subject`, narrating the failure for `verb` when it isn't found.
fn resolve(session: &mut Session, verb: &str, subject: Option<&str>) -> Option<String> {
    match lookup(&session.world, subject) {
        Lookup::Found(name) => Some(name),
        Lookup::Unspecified => {
            session.narrate(&format!("You can't {} nothing.", verb));
            None
        }
        Lookup::NotFound(name) => {
            session.narrate(&format!("There is no {} to be found.", name.to_lowercase()));
            None
        }
    }
}

fn not_here(name: &str) -> String {
    format!("You don't see any {} here.", name.to_lowercase())
}

fn not_carrying(name: &str) -> String {
    format!("You aren't carrying the {}.", name.to_lowercase())
}

pub fn get(session: &mut Session, context: &CommandContext) {
    let Some(name) = resolve(session, "get", context.subject.as_deref()) else {
        return;
    };
    let here = session.player.location().to_string();
    let Some(object) = session.world.object(&name) else {
        return;
    };
    let label = object.name.to_lowercase();

    if object.location.is_inventory() {
        session.narrate(&format!("You already have the {}.", label));
        return;
    }
    if !object.location.is_room(&here) {
        session.narrate(&not_here(&name));
        return;
    }
    if !object.takeable {
        session.narrate(&format!("You can't take the {}.", label));
        return;
    }

    session.player.take_object(&mut session.world, &name);
    session.narrate(&format!("You take the {}.", label));
    let value = session
        .world
        .object_mut(&name)
        .map(|o| std::mem::take(&mut o.score_value))
        .unwrap_or_default();
    session.player.reward(value);
}

pub fn drop(session: &mut Session, context: &CommandContext) {
    let Some(name) = resolve(session, "drop", context.subject.as_deref()) else {
        return;
    };
    if !session.player.is_holding(&name) {
        session.narrate(&not_carrying(&name));
        return;
    }
    if session.world.is_equipped(&name) {
        session.narrate(&format!(
            "You need to unequip the {} first.",
            name.to_lowercase()
        ));
        return;
    }
    session.player.release_object(&mut session.world, &name);
    session.narrate(&format!("You drop the {}.", name.to_lowercase()));
}

pub fn examine(session: &mut Session, context: &CommandContext) {
    let Some(name) = resolve(session, "examine", context.subject.as_deref()) else {
        return;
    };
    let here = session.player.location();
    let text = match session.world.object(&name) {
        Some(object) if object.location.is_inventory() || object.location.is_room(here) => {
            if object.examine_description.trim().is_empty() {
                format!("You see nothing special about the {}.", name.to_lowercase())
            } else {
                object.examine_description.clone()
            }
        }
        _ => not_here(&name),
    };
    session.narrate(&text);
}

pub fn equip(session: &mut Session, context: &CommandContext) {
    let Some(name) = resolve(session, "equip", context.subject.as_deref()) else {
        return;
    };
    if !session.player.is_holding(&name) {
        session.narrate(&not_carrying(&name));
        return;
    }
    let label = name.to_lowercase();
    let Some(object) = session.world.object_mut(&name) else {
        return;
    };
    let message = if !object.equippable {
        format!("You can't equip the {}.", label)
    } else if object.equipped {
        format!("The {} is already equipped.", label)
    } else {
        object.equipped = true;
        match &object.equip_slot {
            Some(slot) => format!("You equip the {} ({}).", label, slot.to_lowercase()),
            None => format!("You equip the {}.", label),
        }
    };
    session.narrate(&message);
}

pub fn unequip(session: &mut Session, context: &CommandContext) {
    let Some(name) = resolve(session, "unequip", context.subject.as_deref()) else {
        return;
    };
    if !session.player.is_holding(&name) {
        session.narrate(&not_carrying(&name));
        return;
    }
    let label = name.to_lowercase();
    let gated_here = session
        .world
        .room(session.player.location())
        .is_some_and(|room| room.is_gated_on(&name));
    let Some(object) = session.world.object_mut(&name) else {
        return;
    };
    let message = if !object.equipped {
        format!("The {} is not equipped.", label)
    } else if gated_here {
        format!("You can't unequip the {} while you still need it here.", label)
    } else {
        object.equipped = false;
        format!("You unequip the {}.", label)
    };
    session.narrate(&message);
}

/// USE <tool> <target>. A correct tool drops the target's reward into the
/// room and picks it straight up through [`get`].
pub fn use_on(session: &mut Session, context: &CommandContext) {
    let Some(tool) = resolve(session, "use", context.subject.as_deref()) else {
        return;
    };
    if !session.player.is_holding(&tool) {
        session.narrate(&not_carrying(&tool));
        return;
    }
    let tool_label = tool.to_lowercase();
    if context.subject_two.is_none() {
        session.narrate(&format!("You can't use the {} on nothing.", tool_label));
        return;
    }
    let Some(target) = resolve(session, "use", context.subject_two.as_deref()) else {
        return;
    };
    let here = session.player.location().to_string();
    let Some(record) = session.world.object(&target) else {
        return;
    };
    if !record.location.is_room(&here) {
        session.narrate(&not_here(&target));
        return;
    }
    let target_label = target.to_lowercase();

    let Some(required) = record.required_use_object.clone() else {
        session.narrate(&format!(
            "The {} doesn't need anything used on it.",
            target_label
        ));
        return;
    };
    if !same_name(&required, &tool) {
        session.narrate(&format!(
            "The {} doesn't work on the {}.",
            tool_label, target_label
        ));
        return;
    }
    let Some(reward) = record.reward_object.clone() else {
        session.narrate(&format!(
            "You use the {} on the {}, but nothing happens.",
            tool_label, target_label
        ));
        return;
    };
    if session.player.is_holding(&reward) {
        session.narrate(&format!("The {} has nothing more to give.", target_label));
        return;
    }

    if let Some(prize) = session.world.object_mut(&reward) {
        prize.location = ObjectLocation::Room(here);
    }
    let pickup = CommandContext::new(&context.raw, "GET").with_subject(&reward);
    get(session, &pickup);
    session.narrate(&format!(
        "You use the {} on the {}. It worked!",
        tool_label, target_label
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventure::output::BufferedOutput;
    use crate::adventure::types::{Direction, Room, WorldObject};

    fn room(name: &str) -> ObjectLocation {
        ObjectLocation::Room(name.to_string())
    }

    fn session() -> (Session, BufferedOutput) {
        let rooms = vec![
            Room::new("Hall", "A long hall.").with_neighbor(Direction::East, "Vault"),
            Room::new("Vault", "A locked vault.")
                .with_neighbor(Direction::West, "Hall")
                .with_gate("Lamp", "It's pitch black."),
        ];
        let objects = vec![
            WorldObject::new("Lamp", ObjectLocation::Inventory).equippable("Hand"),
            WorldObject::new("Key", ObjectLocation::Inventory).takeable(),
            WorldObject::new("Coin", room("Hall")).takeable().with_score(10),
            WorldObject::new("Statue", room("Hall"))
                .with_descriptions("A statue stands here.", "It is carved from marble."),
            WorldObject::new("Chest", room("Vault")).used_with("Key", "Gem"),
            WorldObject::new("Gem", room("Hall")).takeable().with_score(25),
            WorldObject::new("Rug", room("Vault")),
        ];
        let world = World::new(rooms, objects).unwrap();
        let out = BufferedOutput::new();
        (Session::new(world, "Hall", out.clone()).unwrap(), out)
    }

    fn say(session: &mut Session, out: &BufferedOutput, input: &str) -> String {
        out.take();
        session.dispatch(input);
        out.take()
    }

    #[test]
    fn lookup_distinguishes_missing_subject_from_unknown_name() {
        let (session, _) = session();
        assert_eq!(lookup(session.world(), None), Lookup::Unspecified);
        assert_eq!(
            lookup(session.world(), Some("PONY")),
            Lookup::NotFound("PONY".into())
        );
        assert_eq!(lookup(session.world(), Some("coin")), Lookup::Found("Coin".into()));
    }

    #[test]
    fn get_awards_score_once() {
        let (mut s, out) = session();
        assert_eq!(say(&mut s, &out, "GET COIN"), "You take the coin.\n");
        assert_eq!(s.player().score(), 10);
        assert_eq!(s.world().object("Coin").unwrap().score_value, 0);

        say(&mut s, &out, "DROP COIN");
        assert!(s.world().object("Coin").unwrap().location.is_room("Hall"));
        say(&mut s, &out, "GET COIN");
        assert_eq!(s.player().score(), 10);
        assert!(s.player().is_holding("Coin"));
    }

    #[test]
    fn get_failures_are_specific() {
        let (mut s, out) = session();
        assert_eq!(say(&mut s, &out, "GET"), "You can't get nothing.\n");
        assert_eq!(say(&mut s, &out, "GET PONY"), "There is no pony to be found.\n");
        assert_eq!(say(&mut s, &out, "GET CHEST"), "You don't see any chest here.\n");
        assert_eq!(say(&mut s, &out, "GET STATUE"), "You can't take the statue.\n");
        assert_eq!(say(&mut s, &out, "GET KEY"), "You already have the key.\n");
        assert_eq!(s.player().moves(), 5);
        assert_eq!(s.player().score(), 0);
    }

    #[test]
    fn equipped_items_cannot_be_dropped() {
        let (mut s, out) = session();
        say(&mut s, &out, "EQUIP LAMP");
        assert_eq!(
            say(&mut s, &out, "DROP LAMP"),
            "You need to unequip the lamp first.\n"
        );
        assert!(s.player().is_holding("Lamp"));
        assert_eq!(say(&mut s, &out, "DROP COIN"), "You aren't carrying the coin.\n");
    }

    #[test]
    fn equip_and_unequip_report_current_state() {
        let (mut s, out) = session();
        assert_eq!(say(&mut s, &out, "UNEQUIP LAMP"), "The lamp is not equipped.\n");
        assert_eq!(say(&mut s, &out, "EQUIP LAMP"), "You equip the lamp (hand).\n");
        assert_eq!(say(&mut s, &out, "EQUIP LAMP"), "The lamp is already equipped.\n");
        assert!(s.world().is_equipped("Lamp"));
        assert_eq!(say(&mut s, &out, "EQUIP KEY"), "You can't equip the key.\n");
        assert_eq!(say(&mut s, &out, "EQUIP COIN"), "You aren't carrying the coin.\n");
        assert_eq!(say(&mut s, &out, "UNEQUIP LAMP"), "You unequip the lamp.\n");
        assert!(!s.world().is_equipped("Lamp"));
    }

    #[test]
    fn gate_item_stays_equipped_inside_its_room() {
        let (mut s, out) = session();
        say(&mut s, &out, "EQUIP LAMP");
        say(&mut s, &out, "E");
        assert_eq!(s.player().location(), "Vault");
        assert_eq!(
            say(&mut s, &out, "UNEQUIP LAMP"),
            "You can't unequip the lamp while you still need it here.\n"
        );
        assert!(s.world().is_equipped("Lamp"));
    }

    #[test]
    fn examine_covers_room_and_inventory() {
        let (mut s, out) = session();
        assert_eq!(say(&mut s, &out, "X STATUE"), "It is carved from marble.\n");
        assert_eq!(
            say(&mut s, &out, "EXAMINE KEY"),
            "You see nothing special about the key.\n"
        );
        assert_eq!(say(&mut s, &out, "X CHEST"), "You don't see any chest here.\n");
        assert_eq!(say(&mut s, &out, "X"), "You can't examine nothing.\n");
    }

    #[test]
    fn use_without_requirement_changes_nothing() {
        let (mut s, out) = session();
        say(&mut s, &out, "EQUIP LAMP");
        say(&mut s, &out, "E");
        for tool in ["KEY", "LAMP"] {
            assert_eq!(
                say(&mut s, &out, &format!("USE {} RUG", tool)),
                "The rug doesn't need anything used on it.\n"
            );
        }
        assert!(s.world().object("Rug").unwrap().location.is_room("Vault"));
        assert_eq!(s.player().score(), 0);
    }

    #[test]
    fn use_rejects_wrong_tool_and_missing_target() {
        let (mut s, out) = session();
        assert_eq!(say(&mut s, &out, "USE KEY CHEST"), "You don't see any chest here.\n");
        say(&mut s, &out, "EQUIP LAMP");
        say(&mut s, &out, "E");
        assert_eq!(
            say(&mut s, &out, "USE LAMP CHEST"),
            "The lamp doesn't work on the chest.\n"
        );
        assert_eq!(say(&mut s, &out, "USE KEY"), "You can't use the key on nothing.\n");
        assert_eq!(say(&mut s, &out, "USE COIN CHEST"), "You aren't carrying the coin.\n");
    }

    #[test]
    fn correct_use_collects_reward_once() {
        let (mut s, out) = session();
        say(&mut s, &out, "EQUIP LAMP");
        say(&mut s, &out, "E");
        assert_eq!(
            say(&mut s, &out, "USE KEY CHEST"),
            "You take the gem.\nYou use the key on the chest. It worked!\n"
        );
        assert!(s.player().is_holding("Gem"));
        assert_eq!(s.player().score(), 25);
        assert_eq!(
            say(&mut s, &out, "USE KEY CHEST"),
            "The chest has nothing more to give.\n"
        );
        assert_eq!(s.player().score(), 25);
    }
}
