//! Simulation engine for DOGFIGHT.
//!
//! Owns the flat world-object list, advances fighters and projectiles one
//! step at a time, and produces WorldSnapshots for the host. Completely
//! headless; rendering and input live behind the core's contracts.

pub mod fighter;
pub mod scenario;
pub mod snapshot;
pub mod space;
pub mod turret;

pub use dogfight_core as core;
pub use space::Space;

#[cfg(test)]
mod tests;
