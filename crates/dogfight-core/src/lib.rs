//! Core types and definitions for the DOGFIGHT simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! geometry, the part/connection-point model, projectiles, frame input,
//! the render contract, snapshot views, and constants. It has no
//! dependency on any runtime framework.

pub mod constants;
pub mod input;
pub mod parts;
pub mod projectile;
pub mod render;
pub mod state;
pub mod types;
