//! Simulation Session
//!
//! Owns one inventory and runs a script's commands against it.

use tracing::{info, warn};

use crate::crafting::{CraftOutcome, CraftingRegistry, Unresolved, craft};
use crate::inventory::Inventory;
use crate::item::ItemKind;
use crate::report::{Event, FinalInventory, Report};
use crate::script::{Command, InitialItem, Script};

pub struct Session<'a> {
    registry: &'a CraftingRegistry,
    inventory: Inventory,
    events: Vec<Event>,
}

impl<'a> Session<'a> {
    pub fn new(registry: &'a CraftingRegistry, initial_capacity: usize) -> Self {
        Self {
            registry,
            inventory: Inventory::with_capacity(initial_capacity),
            events: Vec::new(),
        }
    }

    /// Run a whole script and produce its report
    pub fn run(
        registry: &'a CraftingRegistry,
        initial_capacity: usize,
        script: &Script,
    ) -> Report {
        let mut session = Self::new(registry, initial_capacity);
        session.stock(&script.initial);
        for command in &script.commands {
            session.execute(command);
        }
        session.finish()
    }

    /// Put the starting items into the inventory.
    ///
    /// Zero counts and unknown item names are skipped.
    pub fn stock(&mut self, items: &[InitialItem]) {
        for item in items {
            if item.count == 0 {
                continue;
            }
            let Some(kind) = ItemKind::from_name(&item.name) else {
                warn!("Skipping unknown starting item '{}'", item.name);
                continue;
            };
            if let Some(capacity) = self.inventory.add(kind, item.count) {
                self.events.push(Event::Expanded { capacity });
            }
        }
    }

    /// Execute one craft command, returning the events it produced
    pub fn execute(&mut self, command: &Command) -> &[Event] {
        let start = self.events.len();

        match self.registry.resolve(&command.item) {
            Ok(recipe) => match craft(&mut self.inventory, recipe) {
                CraftOutcome::Crafted { expanded_to } => {
                    if let Some(capacity) = expanded_to {
                        self.events.push(Event::Expanded { capacity });
                    }
                    info!("Crafted {}", recipe.name);
                    self.events.push(Event::Crafted {
                        name: recipe.name.clone(),
                    });
                }
                CraftOutcome::Insufficient => {
                    info!("Not enough resources for {}", recipe.name);
                    self.events.push(Event::Insufficient {
                        name: recipe.name.clone(),
                    });
                }
            },
            Err(reason) => {
                match reason {
                    Unresolved::UnknownItem => warn!("Unknown item '{}'", command.item),
                    Unresolved::NoRecipe(kind) => warn!("No recipe produces {}", kind),
                }
                self.events.push(Event::UnknownRecipe {
                    name: command.item.clone(),
                });
            }
        }

        &self.events[start..]
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn finish(self) -> Report {
        Report {
            inventory: FinalInventory::from(&self.inventory),
            events: self.events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::DEFAULT_CAPACITY;

    fn registry() -> CraftingRegistry {
        CraftingRegistry::builtin().unwrap()
    }

    fn craft_cmd(item: &str) -> Command {
        Command {
            verb: "CRAFT".into(),
            item: item.into(),
        }
    }

    fn items(pairs: &[(&str, u32)]) -> Vec<InitialItem> {
        pairs
            .iter()
            .map(|(name, count)| InitialItem {
                name: name.to_string(),
                count: *count,
            })
            .collect()
    }

    fn crafted(name: &str) -> Event {
        Event::Crafted {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_stock_skips_empty_and_unknown() {
        let registry = registry();
        let mut session = Session::new(&registry, DEFAULT_CAPACITY);
        session.stock(&items(&[("WOOD", 10), ("COBBLESTONE", 0), ("GOLD", 4)]));

        let snapshot = session.inventory().snapshot();
        assert_eq!(snapshot, vec![(ItemKind::Wood, 10)]);
    }

    #[test]
    fn test_stick_from_wood() {
        let registry = registry();
        let mut session = Session::new(&registry, DEFAULT_CAPACITY);
        session.stock(&items(&[("WOOD", 10), ("COBBLESTONE", 0), ("COAL", 0)]));

        let events = session.execute(&craft_cmd("STICK")).to_vec();
        assert_eq!(events, vec![crafted("STICK")]);
        assert_eq!(
            session.inventory().snapshot(),
            vec![(ItemKind::Stick, 4), (ItemKind::Wood, 8)]
        );
    }

    #[test]
    fn test_furnace_without_cobblestone() {
        let registry = registry();
        let mut session = Session::new(&registry, DEFAULT_CAPACITY);
        session.stock(&items(&[("WOOD", 1), ("COAL", 0), ("COBBLESTONE", 0)]));
        let before = session.inventory().clone();

        let events = session.execute(&craft_cmd("FURNACE")).to_vec();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], Event::Insufficient { .. }));
        assert_eq!(events[0].to_string(), "Not enough resources for FURNACE");
        assert_eq!(session.inventory(), &before);
    }

    #[test]
    fn test_unknown_recipe() {
        let registry = registry();
        let mut session = Session::new(&registry, DEFAULT_CAPACITY);
        session.stock(&items(&[("WOOD", 3)]));
        let before = session.inventory().clone();

        let events = session.execute(&craft_cmd("DIAMOND_SWORD")).to_vec();
        assert_eq!(events[0].to_string(), "Unknown recipe: DIAMOND_SWORD");

        // A real item nothing crafts is reported the same way
        let events = session.execute(&craft_cmd("COAL")).to_vec();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].to_string(), "Unknown recipe: COAL");
        assert_eq!(session.inventory(), &before);
    }

    #[test]
    fn test_stick_then_torch() {
        let registry = registry();
        let mut session = Session::new(&registry, DEFAULT_CAPACITY);
        session.stock(&items(&[("WOOD", 5), ("STICK", 0), ("COAL", 1)]));

        session.execute(&craft_cmd("STICK"));
        session.execute(&craft_cmd("TORCH"));

        let report = session.finish();
        assert_eq!(report.events, vec![crafted("STICK"), crafted("TORCH")]);
        assert_eq!(
            report.inventory.entries,
            vec![
                (ItemKind::Stick, 3),
                (ItemKind::Torch, 4),
                (ItemKind::Wood, 3),
            ]
        );
        assert_eq!(report.inventory.occupied, 3);
        assert_eq!(report.inventory.capacity, 3);
    }

    #[test]
    fn test_growth_is_reported() {
        let registry = registry();
        let input = "WOOD 20 COAL 2 COBBLESTONE 8\n\
                     CRAFT STICK\n\
                     CRAFT FURNACE\n\
                     CRAFT TORCH\n";
        let script = Script::parse(input).unwrap();

        let report = Session::run(&registry, DEFAULT_CAPACITY, &script);

        assert_eq!(
            report.to_string(),
            "Inventory expanded, current capacity is 6\n\
             Successfully crafted STICK\n\
             Successfully crafted FURNACE\n\
             Successfully crafted TORCH\n\
             Final inventory (5/6 slots used):\n\
             COAL: 1\n\
             FURNACE: 1\n\
             STICK: 3\n\
             TORCH: 4\n\
             WOOD: 18\n"
        );
    }

    #[test]
    fn test_growth_while_stocking() {
        let registry = registry();
        let mut session = Session::new(&registry, 1);
        session.stock(&items(&[("WOOD", 1), ("COAL", 1), ("COBBLESTONE", 1)]));

        let report = session.finish();
        assert_eq!(
            report.events,
            vec![
                Event::Expanded { capacity: 2 },
                Event::Expanded { capacity: 4 },
            ]
        );
        assert_eq!(report.inventory.occupied, 3);
    }
}
