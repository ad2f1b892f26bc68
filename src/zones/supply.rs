//! The shared supply.
//!
//! One slot per card kind. A kind that is not part of this game's supply is
//! `None`, distinct from a pile that has been bought out (`Some(0)`).

use serde::{Deserialize, Serialize};

use crate::cards::CardKind;

/// Remaining copies of each card kind available to gain.
///
/// ```
/// use dominion_effects::cards::CardKind;
/// use dominion_effects::zones::Supply;
///
/// let mut supply = Supply::new().with_pile(CardKind::Estate, 1);
///
/// assert!(supply.take(CardKind::Estate));
/// assert!(!supply.take(CardKind::Estate));
/// assert_eq!(supply.get(CardKind::Estate), Some(0));
/// assert_eq!(supply.get(CardKind::Mine), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SupplyRepr")]
pub struct Supply {
    counts: Vec<Option<u32>>,
}

/// Wire form of a `Supply`, which must hold one slot per card kind.
#[derive(Deserialize)]
struct SupplyRepr {
    counts: Vec<Option<u32>>,
}

impl TryFrom<SupplyRepr> for Supply {
    type Error = String;

    fn try_from(repr: SupplyRepr) -> Result<Self, Self::Error> {
        if repr.counts.len() != CardKind::COUNT {
            return Err(format!(
                "supply has {} slots, expected {}",
                repr.counts.len(),
                CardKind::COUNT
            ));
        }
        Ok(Self { counts: repr.counts })
    }
}

impl Default for Supply {
    fn default() -> Self {
        Self {
            counts: vec![None; CardKind::COUNT],
        }
    }
}

impl Supply {
    /// Create a supply with no piles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pile (builder pattern).
    #[must_use]
    pub fn with_pile(mut self, kind: CardKind, count: u32) -> Self {
        self.set(kind, count);
        self
    }

    /// Set a pile's remaining count, entering it into the supply.
    pub fn set(&mut self, kind: CardKind, count: u32) {
        self.counts[kind.index()] = Some(count);
    }

    /// Remaining count, `None` if the kind is not in this supply.
    #[must_use]
    pub fn get(&self, kind: CardKind) -> Option<u32> {
        self.counts[kind.index()]
    }

    /// Remaining count, treating absent piles as empty.
    #[must_use]
    pub fn count(&self, kind: CardKind) -> u32 {
        self.get(kind).unwrap_or(0)
    }

    /// Take one copy. Returns false, changing nothing, if none remain.
    pub fn take(&mut self, kind: CardKind) -> bool {
        match &mut self.counts[kind.index()] {
            Some(n) if *n > 0 => {
                *n -= 1;
                true
            }
            _ => false,
        }
    }

    /// Put `n` copies back, entering the kind if it was absent.
    pub fn give_back(&mut self, kind: CardKind, n: u32) {
        let slot = &mut self.counts[kind.index()];
        *slot = Some(slot.unwrap_or(0) + n);
    }

    /// Kinds in this supply with their remaining counts.
    pub fn iter(&self) -> impl Iterator<Item = (CardKind, u32)> + '_ {
        CardKind::ALL
            .iter()
            .zip(&self.counts)
            .filter_map(|(&kind, count)| count.map(|n| (kind, n)))
    }
}
