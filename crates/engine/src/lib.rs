//! Targeted actions for pointer-driven play
//!
//! The keyboard path moves a cursor and then acts on it. Mouse clicks instead
//! name a cell directly; this crate validates such a request against the
//! session and reports why it cannot be carried out.

pub mod place;

pub use place::{apply_place, apply_rotate, PlaceError};
