//! World snapshot — the visible scene state produced after each step.

use serde::{Deserialize, Serialize};

use crate::render::Color;
use crate::types::Point;

/// Complete visible state of the world after one step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    /// Wall-clock milliseconds of the step that produced this snapshot.
    pub now_ms: u64,
    pub fighters: Vec<FighterView>,
    pub projectiles: Vec<ProjectileView>,
}

/// A fighter as seen by the display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FighterView {
    pub coordinate: Point,
    /// World-frame heading in radians, [0, 2*PI).
    pub bearing: f64,
    /// Per-tick speed setting.
    pub speed: f64,
    pub color: Color,
}

/// A live kinetic projectile as seen by the display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub coordinate: Point,
    pub bearing: f64,
    pub radius: f64,
    pub color: Color,
}
