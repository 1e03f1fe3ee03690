use std::fmt;

// ============================================================================
// Item Kinds
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Wood,
    Cobblestone,
    Coal,
    Stick,
    WoodenPickaxe,
    WoodenSword,
    Torch,
    Furnace,
}

impl ItemKind {
    /// Every kind, in declaration order
    pub const ALL: [ItemKind; 8] = [
        ItemKind::Wood,
        ItemKind::Cobblestone,
        ItemKind::Coal,
        ItemKind::Stick,
        ItemKind::WoodenPickaxe,
        ItemKind::WoodenSword,
        ItemKind::Torch,
        ItemKind::Furnace,
    ];

    /// Canonical name, as used in input scripts and reports
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Wood => "WOOD",
            ItemKind::Cobblestone => "COBBLESTONE",
            ItemKind::Coal => "COAL",
            ItemKind::Stick => "STICK",
            ItemKind::WoodenPickaxe => "WOODEN_PICKAXE",
            ItemKind::WoodenSword => "WOODEN_SWORD",
            ItemKind::Torch => "TORCH",
            ItemKind::Furnace => "FURNACE",
        }
    }

    /// Look up a kind by its canonical name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
