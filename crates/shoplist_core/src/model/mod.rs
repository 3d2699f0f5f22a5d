//! Shopping list domain model.
//!
//! # Responsibility
//! - Define the canonical record owned by the list store.
//!
//! # Invariants
//! - Operations address items by canonical position, not by `ItemId`.
//! - `ItemId` is emitted on rendered rows only, as a keyed-render prerequisite.

pub mod item;
