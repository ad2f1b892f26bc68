//! Card catalog: kinds and categories.
//!
//! ## Key Types
//!
//! - `CardKind`: The fixed set of card kinds, with cost and value tables
//! - `CardCategory`: Action / Treasure / Victory / Curse membership set

pub mod category;
pub mod kind;

pub use category::CardCategory;
pub use kind::CardKind;
