//! A single game session: the world, the player, the verb table and the
//! narration sink, plus the dispatcher that ties them together.

use log::{debug, info};
use tokio::sync::mpsc;

use crate::adventure::command::{CommandContext, CommandTable};
use crate::adventure::errors::AdventureError;
use crate::adventure::events::PlayerEvent;
use crate::adventure::handlers::default_commands;
use crate::adventure::output::OutputSink;
use crate::adventure::player::Player;
use crate::adventure::world::World;
use crate::logutil::input_preview;

pub const DEFAULT_WELCOME_MESSAGE: &str = "Welcome, adventurer!";
pub const DEFAULT_EXIT_MESSAGE: &str = "Thank you for playing!";

pub struct Session {
    pub(crate) world: World,
    pub(crate) player: Player,
    commands: CommandTable,
    output: Box<dyn OutputSink>,
    welcome_message: Option<String>,
    exit_message: Option<String>,
    running: bool,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("world", &self.world)
            .field("player", &self.player)
            .field("commands", &self.commands)
            .field("welcome_message", &self.welcome_message)
            .field("exit_message", &self.exit_message)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Build a session with the standard verb table. Fails if the starting
    /// room is missing.
    pub fn new(
        world: World,
        starting_room: &str,
        output: impl OutputSink + 'static,
    ) -> Result<Self, AdventureError> {
        let commands = CommandTable::new(default_commands())?;
        Self::with_commands(world, starting_room, commands, output)
    }

    pub fn with_commands(
        world: World,
        starting_room: &str,
        commands: CommandTable,
        output: impl OutputSink + 'static,
    ) -> Result<Self, AdventureError> {
        let player = Player::new(&world, starting_room)?;
        Ok(Self {
            world,
            player,
            commands,
            output: Box::new(output),
            welcome_message: None,
            exit_message: None,
            running: false,
        })
    }

    pub fn with_messages(mut self, welcome: Option<String>, exit: Option<String>) -> Self {
        self.welcome_message = welcome;
        self.exit_message = exit;
        self
    }

    /// Greet the player and mark the session running.
    pub fn start(&mut self) {
        let welcome = non_blank(&self.welcome_message).unwrap_or(DEFAULT_WELCOME_MESSAGE);
        let welcome = welcome.to_string();
        self.narrate(&welcome);
        self.running = true;
        info!("session started in {}", self.player.location());
    }

    pub fn is_running(&self) -> bool {
        self.running && !self.player.has_quit()
    }

    pub(crate) fn stop(&mut self) {
        self.player.quit();
        self.running = false;
    }

    pub fn exit_message(&self) -> &str {
        non_blank(&self.exit_message).unwrap_or(DEFAULT_EXIT_MESSAGE)
    }

    /// Run one raw input line. A recognised verb always costs one move, even
    /// when the action itself fails; unknown verbs and blank lines cost none.
    pub fn dispatch(&mut self, input: &str) {
        debug!("command received: {}", input_preview(input));
        let Some(context) = CommandContext::parse(input) else {
            self.narrate("Unknown command.");
            return;
        };
        let Some(command) = self.commands.find(&context.verb) else {
            debug!("unknown verb: {}", input_preview(&context.verb));
            self.narrate("Unknown command.");
            return;
        };
        let handler = command.handler;
        debug!("dispatch {} {:?}", command.name, context);
        handler(self, &context);
        self.player.count_move();
    }

    /// Run a command by canonical name without counting a move. Returns false
    /// if no such command exists.
    pub fn invoke(&mut self, name: &str) -> bool {
        let Some(command) = self.commands.get(name) else {
            return false;
        };
        let handler = command.handler;
        let context = CommandContext::new(&command.name, &command.name);
        handler(self, &context);
        true
    }

    pub fn narrate(&mut self, text: &str) {
        self.output.write_line(text);
    }

    pub fn output(&mut self) -> &mut (dyn OutputSink + 'static) {
        self.output.as_mut()
    }

    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<PlayerEvent> {
        self.player.subscribe()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn commands(&self) -> &CommandTable {
        &self.commands
    }
}

fn non_blank(message: &Option<String>) -> Option<&str> {
    message.as_deref().filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adventure::output::BufferedOutput;
    use crate::adventure::types::{Direction, Room};

    fn session() -> (Session, BufferedOutput) {
        let rooms = vec![
            Room::new("Clearing", "A sunny clearing.").with_neighbor(Direction::North, "Forest"),
            Room::new("Forest", "Dense forest."),
        ];
        let world = World::new(rooms, vec![]).unwrap();
        let out = BufferedOutput::new();
        (Session::new(world, "Clearing", out.clone()).unwrap(), out)
    }

    #[test]
    fn start_uses_default_welcome_for_blank_message() {
        let (session, out) = session();
        let mut session = session.with_messages(Some("  ".into()), None);
        assert!(!session.is_running());
        session.start();
        assert!(session.is_running());
        assert_eq!(out.take(), format!("{}\n", DEFAULT_WELCOME_MESSAGE));
        assert_eq!(session.exit_message(), DEFAULT_EXIT_MESSAGE);
    }

    #[test]
    fn unknown_verbs_and_blank_lines_cost_nothing() {
        let (mut session, out) = session();
        session.dispatch("XYZZY");
        session.dispatch("   ");
        assert_eq!(out.lines(), ["Unknown command.", "Unknown command."]);
        assert_eq!(session.player().moves(), 0);
    }

    #[test]
    fn failed_moves_still_count() {
        let (mut session, out) = session();
        session.dispatch("S");
        assert_eq!(out.take(), "The way is shut!\n");
        assert_eq!(session.player().location(), "Clearing");
        assert_eq!(session.player().moves(), 1);
    }

    #[test]
    fn invoke_runs_without_counting_a_move() {
        let (mut session, out) = session();
        assert!(session.invoke("look"));
        assert_eq!(out.take(), "A sunny clearing.\n");
        assert_eq!(session.player().moves(), 0);
        assert!(!session.invoke("DANCE"));
    }

    #[test]
    fn quit_latches_and_stops_running() {
        let (mut session, _out) = session();
        let mut rx = session.subscribe();
        session.start();
        session.dispatch("BYE");
        assert!(!session.is_running());
        assert!(session.player().has_quit());
        assert_eq!(rx.try_recv().unwrap(), PlayerEvent::QuitChanged(true));
        assert_eq!(rx.try_recv().unwrap(), PlayerEvent::MovesChanged(1));
    }
}
