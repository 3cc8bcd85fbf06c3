//! Verb table, command context and the input tokenizer.

use std::collections::HashMap;
use std::fmt;

use crate::adventure::errors::AdventureError;
use crate::adventure::session::Session;
use crate::adventure::types::{name_key, same_name};

/// Handlers narrate failures instead of returning errors.
pub type Handler = fn(&mut Session, &CommandContext);

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    pub raw: String,
    pub verb: String,
    pub subject: Option<String>,
    pub subject_two: Option<String>,
}

impl CommandContext {
    pub fn new(raw: &str, verb: &str) -> Self {
        Self {
            raw: raw.to_string(),
            verb: verb.to_string(),
            subject: None,
            subject_two: None,
        }
    }

    pub fn with_subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    pub fn with_subject_two(mut self, subject: &str) -> Self {
        self.subject_two = Some(subject.to_string());
        self
    }

    /// Split on whitespace into verb / subject / second subject.
    ///
    /// With three or more tokens the *last* token is the second subject and
    /// everything between the first subject and it is dropped. Blank input
    /// yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let (verb, rest) = tokens.split_first()?;
        let context = CommandContext::new(raw, verb);
        Some(match rest {
            [] => context,
            [subject] => context.with_subject(subject),
            [subject, .., last] => context.with_subject(subject).with_subject_two(last),
        })
    }
}

#[derive(Clone)]
pub struct Command {
    pub name: String,
    pub aliases: Vec<String>,
    pub handler: Handler,
    pub description: Option<String>,
}

impl Command {
    pub fn new(name: &str, aliases: &[&str], handler: Handler) -> Self {
        Self {
            name: name.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            handler,
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn matches(&self, verb: &str) -> bool {
        self.aliases.iter().any(|a| same_name(a, verb))
    }

    /// Aliases joined with commas, for help output.
    pub fn alias_list(&self) -> String {
        self.aliases.join(",")
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("description", &self.description)
            .finish()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Ordered command collection. Every alias belongs to exactly one command.
#[derive(Debug, Clone)]
pub struct CommandTable {
    commands: Vec<Command>,
}

impl CommandTable {
    pub fn new(commands: Vec<Command>) -> Result<Self, AdventureError> {
        let mut owners: HashMap<String, String> = HashMap::new();
        for command in &commands {
            if command.aliases.is_empty() {
                return Err(AdventureError::EmptyCommand(command.name.clone()));
            }
            for alias in &command.aliases {
                if let Some(first) = owners.insert(name_key(alias), command.name.clone()) {
                    return Err(AdventureError::DuplicateAlias {
                        alias: alias.clone(),
                        first,
                        second: command.name.clone(),
                    });
                }
            }
        }
        Ok(Self { commands })
    }

    /// Resolve a verb against the aliases, in table order.
    pub fn find(&self, verb: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.matches(verb))
    }

    /// Look up by canonical name.
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| same_name(&c.name, name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
