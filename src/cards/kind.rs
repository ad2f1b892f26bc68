//! The card catalog.
//!
//! `CardKind` is the fixed set of card kinds the engine knows: the seven
//! base cards (Curse, three Victory cards, three Treasures) and twenty
//! kingdom cards. Each kind has a static category set, cost, coin value
//! and victory-point value.

use serde::{Deserialize, Serialize};

use super::category::CardCategory;

/// A kind of card.
///
/// Discriminants follow the classic engine's numbering, so `index()` is a
/// stable array slot for per-kind tables such as the supply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Curse = 0,
    Estate,
    Duchy,
    Province,

    Copper,
    Silver,
    Gold,

    Adventurer,
    CouncilRoom,
    Feast,
    Gardens,
    Mine,
    Remodel,
    Smithy,
    Village,

    Baron,
    GreatHall,
    Minion,
    Steward,
    Tribute,

    Ambassador,
    Cutpurse,
    Embargo,
    Outpost,
    Salvager,
    SeaHag,
    TreasureMap,
}

impl CardKind {
    /// Number of card kinds in the catalog.
    pub const COUNT: usize = 27;

    /// Every kind, in discriminant order.
    pub const ALL: [CardKind; Self::COUNT] = [
        CardKind::Curse,
        CardKind::Estate,
        CardKind::Duchy,
        CardKind::Province,
        CardKind::Copper,
        CardKind::Silver,
        CardKind::Gold,
        CardKind::Adventurer,
        CardKind::CouncilRoom,
        CardKind::Feast,
        CardKind::Gardens,
        CardKind::Mine,
        CardKind::Remodel,
        CardKind::Smithy,
        CardKind::Village,
        CardKind::Baron,
        CardKind::GreatHall,
        CardKind::Minion,
        CardKind::Steward,
        CardKind::Tribute,
        CardKind::Ambassador,
        CardKind::Cutpurse,
        CardKind::Embargo,
        CardKind::Outpost,
        CardKind::Salvager,
        CardKind::SeaHag,
        CardKind::TreasureMap,
    ];

    /// Table slot for this kind.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a kind by table slot.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CardKind::Curse => "Curse",
            CardKind::Estate => "Estate",
            CardKind::Duchy => "Duchy",
            CardKind::Province => "Province",
            CardKind::Copper => "Copper",
            CardKind::Silver => "Silver",
            CardKind::Gold => "Gold",
            CardKind::Adventurer => "Adventurer",
            CardKind::CouncilRoom => "Council Room",
            CardKind::Feast => "Feast",
            CardKind::Gardens => "Gardens",
            CardKind::Mine => "Mine",
            CardKind::Remodel => "Remodel",
            CardKind::Smithy => "Smithy",
            CardKind::Village => "Village",
            CardKind::Baron => "Baron",
            CardKind::GreatHall => "Great Hall",
            CardKind::Minion => "Minion",
            CardKind::Steward => "Steward",
            CardKind::Tribute => "Tribute",
            CardKind::Ambassador => "Ambassador",
            CardKind::Cutpurse => "Cutpurse",
            CardKind::Embargo => "Embargo",
            CardKind::Outpost => "Outpost",
            CardKind::Salvager => "Salvager",
            CardKind::SeaHag => "Sea Hag",
            CardKind::TreasureMap => "Treasure Map",
        }
    }

    /// Categories this kind belongs to.
    #[must_use]
    pub const fn categories(self) -> CardCategory {
        match self {
            CardKind::Curse => CardCategory::CURSE,
            CardKind::Estate | CardKind::Duchy | CardKind::Province | CardKind::Gardens => {
                CardCategory::VICTORY
            }
            CardKind::Copper | CardKind::Silver | CardKind::Gold => CardCategory::TREASURE,
            CardKind::GreatHall => CardCategory::ACTION.union(CardCategory::VICTORY),
            _ => CardCategory::ACTION,
        }
    }

    /// Check membership in a category.
    #[must_use]
    pub fn is(self, category: CardCategory) -> bool {
        self.categories().intersects(category)
    }

    /// Cost in coins.
    #[must_use]
    pub const fn cost(self) -> u32 {
        match self {
            CardKind::Curse | CardKind::Copper => 0,
            CardKind::Estate | CardKind::Steward | CardKind::Embargo => 2,
            CardKind::Silver | CardKind::Village | CardKind::GreatHall | CardKind::Ambassador => 3,
            CardKind::Feast
            | CardKind::Gardens
            | CardKind::Remodel
            | CardKind::Smithy
            | CardKind::Baron
            | CardKind::Cutpurse
            | CardKind::Salvager
            | CardKind::SeaHag
            | CardKind::TreasureMap => 4,
            CardKind::Duchy
            | CardKind::CouncilRoom
            | CardKind::Mine
            | CardKind::Minion
            | CardKind::Tribute
            | CardKind::Outpost => 5,
            CardKind::Gold | CardKind::Adventurer => 6,
            CardKind::Province => 8,
        }
    }

    /// Coins produced when played as a treasure.
    #[must_use]
    pub const fn coin_value(self) -> u32 {
        match self {
            CardKind::Copper => 1,
            CardKind::Silver => 2,
            CardKind::Gold => 3,
            _ => 0,
        }
    }

    /// Fixed victory points. Gardens scores by deck size and reports 0 here;
    /// see `GameState::score_for`.
    #[must_use]
    pub const fn victory_points(self) -> i32 {
        match self {
            CardKind::Curse => -1,
            CardKind::Estate | CardKind::GreatHall => 1,
            CardKind::Duchy => 3,
            CardKind::Province => 6,
            _ => 0,
        }
    }

    /// The treasure Mine turns this card into, if any.
    #[must_use]
    pub const fn mine_upgrade(self) -> Option<CardKind> {
        match self {
            CardKind::Copper => Some(CardKind::Silver),
            CardKind::Silver => Some(CardKind::Gold),
            _ => None,
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
