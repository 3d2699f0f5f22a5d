//! Canonical list state and its mutation operations.
//!
//! # Responsibility
//! - Own the item sequence and the two view modifiers.
//! - Keep every write behind a closed operation set.
//!
//! # Invariants
//! - Index-based operations fail loudly on out-of-range indexes.
//! - No operation triggers a render; that is the dispatcher's job.

pub mod list_store;
