//! Per-frame input context.

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// Everything the host samples once per frame and passes by value into the
/// simulation step: the wall clock, the pointer (None until the pointer has
/// produced a position), and whether the fire control is held.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameInput {
    /// Wall-clock milliseconds. Drives fire cooldowns and projectile
    /// lifetimes; real-time-based, so frame hitches change apparent
    /// projectile range but not lifetime duration.
    pub now_ms: u64,
    /// Current pointer position in world space, if any.
    pub pointer: Option<Point>,
    /// Whether the fire key is held this frame.
    pub fire_held: bool,
}
