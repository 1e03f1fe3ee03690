//! Input Script
//!
//! A script is a whitespace-separated token stream: three `NAME COUNT` pairs
//! for the starting inventory, followed by any number of `CRAFT NAME`
//! commands.

use tracing::warn;

use crate::error::ScriptError;

/// Number of `NAME COUNT` pairs a script starts with
pub const INITIAL_ITEMS: usize = 3;

/// Verb expected in front of every command
pub const CRAFT_VERB: &str = "CRAFT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialItem {
    pub name: String,
    /// Negative counts in the script are clamped to zero, and zero counts are
    /// skipped when the inventory is stocked.
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub verb: String,
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Script {
    pub initial: Vec<InitialItem>,
    pub commands: Vec<Command>,
}

impl Script {
    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        let mut tokens = content.split_whitespace();

        let mut initial = Vec::with_capacity(INITIAL_ITEMS);
        for _ in 0..INITIAL_ITEMS {
            let (Some(name), Some(token)) = (tokens.next(), tokens.next()) else {
                return Err(ScriptError::MissingInitialItems {
                    found: initial.len(),
                });
            };
            let Some(count) = parse_count(token) else {
                return Err(ScriptError::InvalidCount {
                    name: name.to_string(),
                    token: token.to_string(),
                });
            };
            initial.push(InitialItem {
                name: name.to_string(),
                count,
            });
        }

        let mut commands = Vec::new();
        loop {
            match (tokens.next(), tokens.next()) {
                (Some(verb), Some(item)) => {
                    if verb != CRAFT_VERB {
                        warn!(
                            "Unexpected command verb '{}', treating as {}",
                            verb, CRAFT_VERB
                        );
                    }
                    commands.push(Command {
                        verb: verb.to_string(),
                        item: item.to_string(),
                    });
                }
                (Some(stray), None) => {
                    warn!("Ignoring incomplete trailing command '{}'", stray);
                    break;
                }
                _ => break,
            }
        }

        Ok(Self { initial, commands })
    }
}

/// Starting count: any integer, with negatives clamped to zero. Counts that do
/// not fit an inventory slot are rejected.
fn parse_count(token: &str) -> Option<u32> {
    let count: i64 = token.parse().ok()?;
    u32::try_from(count.max(0)).ok()
}
