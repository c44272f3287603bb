//! Library entry point.
//!
//! Combat core of a vertical shooter: a fixed-capacity projectile pool, weapons that fire
//! into it, modifier aggregation, and evolution recipes.
//!
//! Integration tests in `tests/` are compiled as separate crates.
//! A `lib.rs` gives them a stable public API surface to import.

pub mod common;
pub mod game;
pub mod plugins;
