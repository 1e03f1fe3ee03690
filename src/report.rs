//! Report
//!
//! Text written for each processed command and for the final inventory.

use std::fmt;
use std::io::{self, Write};

use crate::inventory::Inventory;
use crate::item::ItemKind;

/// Something that happened while running a script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Expanded { capacity: usize },
    Crafted { name: String },
    Insufficient { name: String },
    UnknownRecipe { name: String },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Expanded { capacity } => {
                write!(f, "Inventory expanded, current capacity is {}", capacity)
            }
            Event::Crafted { name } => write!(f, "Successfully crafted {}", name),
            Event::Insufficient { name } => write!(f, "Not enough resources for {}", name),
            Event::UnknownRecipe { name } => write!(f, "Unknown recipe: {}", name),
        }
    }
}

/// End-of-run inventory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalInventory {
    pub occupied: usize,
    pub capacity: usize,
    pub entries: Vec<(ItemKind, u32)>,
}

impl From<&Inventory> for FinalInventory {
    fn from(inventory: &Inventory) -> Self {
        Self {
            occupied: inventory.occupied(),
            capacity: inventory.capacity(),
            entries: inventory.snapshot(),
        }
    }
}

impl fmt::Display for FinalInventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Final inventory ({}/{} slots used):",
            self.occupied, self.capacity
        )?;
        for (kind, quantity) in &self.entries {
            writeln!(f, "{}: {}", kind, quantity)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub events: Vec<Event>,
    pub inventory: FinalInventory,
}

impl Report {
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{}", self)?;
        out.flush()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.events {
            writeln!(f, "{}", event)?;
        }
        write!(f, "{}", self.inventory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_lines() {
        let crafted = Event::Crafted {
            name: "STICK".into(),
        };
        assert_eq!(crafted.to_string(), "Successfully crafted STICK");

        let insufficient = Event::Insufficient {
            name: "FURNACE".into(),
        };
        assert_eq!(
            insufficient.to_string(),
            "Not enough resources for FURNACE"
        );

        let unknown = Event::UnknownRecipe {
            name: "DIAMOND_SWORD".into(),
        };
        assert_eq!(unknown.to_string(), "Unknown recipe: DIAMOND_SWORD");

        let expanded = Event::Expanded { capacity: 6 };
        assert_eq!(
            expanded.to_string(),
            "Inventory expanded, current capacity is 6"
        );
    }

    #[test]
    fn test_full_report() {
        let report = Report {
            events: vec![Event::Crafted {
                name: "STICK".into(),
            }],
            inventory: FinalInventory {
                occupied: 2,
                capacity: 3,
                entries: vec![(ItemKind::Stick, 4), (ItemKind::Wood, 8)],
            },
        };

        let mut buf = Vec::new();
        report.write_to(&mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Successfully crafted STICK\n\
             Final inventory (2/3 slots used):\n\
             STICK: 4\n\
             WOOD: 8\n"
        );
    }

    #[test]
    fn test_empty_inventory_report() {
        let inventory = FinalInventory::from(&Inventory::new());
        let expected = "Final inventory (0/3 slots used):\n";
        assert_eq!(inventory.to_string(), expected);
    }
}
