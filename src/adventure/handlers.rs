//! The standard verb table and the handlers that don't target objects.

use crate::adventure::command::{Command, CommandContext};
use crate::adventure::interact;
use crate::adventure::player::MoveOutcome;
use crate::adventure::session::Session;
use crate::adventure::types::Direction;

/// Points granted by the REWARD cheat.
pub const REWARD_POINTS: i32 = 5;

/// Commands in dispatch order.
pub fn default_commands() -> Vec<Command> {
    vec![
        Command::new("NORTH", &["NORTH", "N"], north).with_description("Walk north."),
        Command::new("SOUTH", &["SOUTH", "S"], south).with_description("Walk south."),
        Command::new("EAST", &["EAST", "E"], east).with_description("Walk east."),
        Command::new("WEST", &["WEST", "W"], west).with_description("Walk west."),
        Command::new("LOOK", &["LOOK", "L"], look).with_description("Describe your surroundings."),
        Command::new("INVENTORY", &["INVENTORY", "INV", "I"], inventory)
            .with_description("List what you are carrying."),
        Command::new("GET", &["GET", "TAKE"], interact::get).with_description("Pick something up."),
        Command::new("DROP", &["DROP"], interact::drop).with_description("Put something down."),
        Command::new("EXAMINE", &["EXAMINE", "X"], interact::examine)
            .with_description("Look closely at something."),
        Command::new("EQUIP", &["EQUIP", "WEAR", "WIELD"], interact::equip)
            .with_description("Equip a carried item."),
        Command::new("UNEQUIP", &["UNEQUIP", "REMOVE"], interact::unequip)
            .with_description("Unequip an item."),
        Command::new("USE", &["USE"], interact::use_on)
            .with_description("USE <item> <target>: use an item on something."),
        Command::new("SCORE", &["SCORE"], score).with_description("Show your score."),
        Command::new("REWARD", &["REWARD", "R"], reward),
        Command::new("HELP", &["HELP", "H", "?"], help).with_description("List commands."),
        Command::new("QUIT", &["QUIT", "Q", "BYE"], quit).with_description("Leave the game."),
    ]
}

fn walk(session: &mut Session, direction: Direction) {
    match session.player.move_toward(&session.world, direction) {
        MoveOutcome::Moved { gate: Some(item), .. } => {
            session.narrate(&format!("With the {} equipped, you press on.", item.to_lowercase()))
        }
        MoveOutcome::Moved { gate: None, .. } => {}
        MoveOutcome::Shut => session.narrate("The way is shut!"),
        MoveOutcome::Blocked { message } => session.narrate(&message),
    }
}

fn north(session: &mut Session, _: &CommandContext) {
    walk(session, Direction::North)
}

fn south(session: &mut Session, _: &CommandContext) {
    walk(session, Direction::South)
}

fn east(session: &mut Session, _: &CommandContext) {
    walk(session, Direction::East)
}

fn west(session: &mut Session, _: &CommandContext) {
    walk(session, Direction::West)
}

/// Room description followed by whatever is lying around.
pub fn look(session: &mut Session, _: &CommandContext) {
    let here = session.player.location();
    let mut lines = Vec::new();
    if let Some(room) = session.world.room(here) {
        lines.push(room.description.clone());
    }
    lines.extend(
        session
            .world
            .objects_in_room(here)
            .filter(|o| !o.world_description.trim().is_empty())
            .map(|o| o.world_description.clone()),
    );
    for line in lines {
        session.narrate(&line);
    }
}

fn inventory(session: &mut Session, _: &CommandContext) {
    if session.player.inventory().is_empty() {
        session.narrate("You are empty handed.");
        return;
    }
    let mut lines = vec!["You are carrying:".to_string()];
    for name in session.player.inventory() {
        let line = match session.world.object(name) {
            Some(object) if object.equipped => match &object.equip_slot {
                Some(slot) => format!("  {} (equipped: {})", object.name, slot),
                None => format!("  {} (equipped)", object.name),
            },
            _ => format!("  {}", name),
        };
        lines.push(line);
    }
    for line in lines {
        session.narrate(&line);
    }
}

fn score(session: &mut Session, _: &CommandContext) {
    let line = format!(
        "Your current score is: {} ({} moves)",
        session.player.score(),
        session.player.moves()
    );
    session.narrate(&line);
}

fn reward(session: &mut Session, _: &CommandContext) {
    session.player.reward(REWARD_POINTS);
    session.narrate("You feel a little more accomplished.");
}

fn help(session: &mut Session, _: &CommandContext) {
    let mut lines = vec!["Commands:".to_string()];
    for command in session.commands().iter().filter(|c| c.description.is_some()) {
        lines.push(format!(
            "  {} - {}",
            command.alias_list(),
            command.description.as_deref().unwrap_or_default()
        ));
    }
    for line in lines {
        session.narrate(&line);
    }
}

fn quit(session: &mut Session, _: &CommandContext) {
    session.stop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventure::command::CommandTable;

    #[test]
    fn default_table_has_unique_aliases() {
        let table = CommandTable::new(default_commands()).unwrap();
        let names: Vec<_> = table.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "NORTH", "SOUTH", "EAST", "WEST", "LOOK", "INVENTORY", "GET", "DROP", "EXAMINE",
                "EQUIP", "UNEQUIP", "USE", "SCORE", "REWARD", "HELP", "QUIT"
            ]
        );
    }

    #[test]
    fn reward_is_hidden_from_help() {
        let table = CommandTable::new(default_commands()).unwrap();
        assert!(table.get("REWARD").unwrap().description.is_none());
        assert!(table.get("HELP").unwrap().description.is_some());
    }
}
