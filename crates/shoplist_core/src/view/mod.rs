//! Derived list view.
//!
//! # Responsibility
//! - Project canonical state into ordered render rows.
//! - Render rows into a markup fragment for full replacement.
//!
//! # Invariants
//! - Views are recomputed from scratch; nothing here holds state.
//! - Every row carries its canonical index.

pub mod markup;
pub mod projector;
