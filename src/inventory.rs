//! Inventory Store
//!
//! Insertion-ordered item slots with a capacity that doubles on demand.

use tracing::debug;

use crate::item::ItemKind;

/// Default number of slots a fresh inventory starts with
pub const DEFAULT_CAPACITY: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventorySlot {
    pub kind: ItemKind,
    pub quantity: u32,
}

impl InventorySlot {
    pub fn new(kind: ItemKind, quantity: u32) -> Self {
        Self { kind, quantity }
    }
}

/// Item storage for a single simulation session.
///
/// Holds at most one slot per [`ItemKind`], never keeps a slot whose quantity
/// dropped to zero, and never holds more slots than `capacity`. Slots stay in
/// the order their kinds were first added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    slots: Vec<InventorySlot>,
    capacity: usize,
}

impl Inventory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Index of the slot holding `kind`, if any
    pub fn find(&self, kind: ItemKind) -> Option<usize> {
        self.slots.iter().position(|slot| slot.kind == kind)
    }

    /// Quantity held of `kind`, zero when absent
    pub fn quantity(&self, kind: ItemKind) -> u32 {
        match self.find(kind) {
            Some(index) => self.slots[index].quantity,
            None => 0,
        }
    }

    /// Add `count` of `kind`, stacking onto an existing slot when there is one.
    ///
    /// Returns the new capacity if a new slot had to grow the storage.
    pub fn add(&mut self, kind: ItemKind, count: u32) -> Option<usize> {
        debug_assert!(count > 0, "add called with a zero count");

        if let Some(index) = self.find(kind) {
            let slot = &mut self.slots[index];
            slot.quantity = slot.quantity.saturating_add(count);
            return None;
        }

        let grown = if self.slots.len() >= self.capacity {
            Some(self.grow())
        } else {
            None
        };

        self.slots.push(InventorySlot::new(kind, count));
        grown
    }

    /// Take `count` of `kind` out. Emptied slots are dropped and the slots
    /// after them shift down, keeping their relative order.
    pub fn remove(&mut self, kind: ItemKind, count: u32) {
        let Some(index) = self.find(kind) else {
            return;
        };

        let slot = &mut self.slots[index];
        if slot.quantity <= count {
            self.slots.remove(index);
        } else {
            slot.quantity -= count;
        }
    }

    /// Contents sorted by item name, for reporting
    pub fn snapshot(&self) -> Vec<(ItemKind, u32)> {
        let mut entries: Vec<(ItemKind, u32)> = self
            .slots
            .iter()
            .filter(|slot| slot.quantity > 0)
            .map(|slot| (slot.kind, slot.quantity))
            .collect();
        entries.sort_by_key(|(kind, _)| kind.name());
        entries
    }

    /// Slots in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &InventorySlot> {
        self.slots.iter()
    }

    /// Number of occupied slots
    pub fn occupied(&self) -> usize {
        self.slots.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn grow(&mut self) -> usize {
        let new_capacity = if self.capacity == 0 {
            1
        } else {
            self.capacity.saturating_mul(2)
        };
        // Allocation failure aborts; there is no fallback storage.
        self.slots.reserve_exact(new_capacity - self.slots.len());
        self.capacity = new_capacity;
        debug!("Inventory grown to {} slots", new_capacity);
        new_capacity
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
