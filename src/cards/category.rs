//! Card categories.
//!
//! A card kind belongs to one or more categories. Effects that reward a
//! revealed card by category test membership, so a dual-category card such
//! as Great Hall (Action and Victory) earns both rewards.

use bitflags::bitflags;

bitflags! {
    /// Set of categories a card kind belongs to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct CardCategory: u8 {
        const ACTION   = 1 << 0;
        const TREASURE = 1 << 1;
        const VICTORY  = 1 << 2;
        const CURSE    = 1 << 3;
    }
}

impl CardCategory {
    /// Check for the Action category.
    #[must_use]
    pub fn is_action(self) -> bool {
        self.contains(Self::ACTION)
    }

    /// Check for the Treasure category.
    #[must_use]
    pub fn is_treasure(self) -> bool {
        self.contains(Self::TREASURE)
    }

    /// Check for the Victory category.
    #[must_use]
    pub fn is_victory(self) -> bool {
        self.contains(Self::VICTORY)
    }
}
