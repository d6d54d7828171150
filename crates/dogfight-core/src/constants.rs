//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). The host scheduler drives one full step per
/// tick; per-tick speeds below are tuned for this rate.
pub const TICK_RATE: u32 = 100;

/// Minimum wall-clock milliseconds between two live shots from one turret.
pub const FIRE_COOLDOWN_MS: u64 = 1000;

/// Wall-clock lifetime of a kinetic projectile in milliseconds.
pub const PROJECTILE_LIFETIME_MS: u64 = 1000;

// --- Per-tick speeds (units per tick, unit-step Euler integration) ---

/// Player fighter speed.
pub const PLAYER_SPEED: f64 = 2.0;

/// Rival fighter speed.
pub const RIVAL_SPEED: f64 = 1.0;

/// Kinetic A projectile speed.
pub const KINETIC_A_SPEED: f64 = 5.0;

/// Kinetic B projectile speed.
pub const KINETIC_B_SPEED: f64 = 3.0;

// --- Rendering ---

/// Kinetic A projectile radius.
pub const KINETIC_A_RADIUS: f64 = 5.0;

/// Kinetic B projectile radius.
pub const KINETIC_B_RADIUS: f64 = 8.0;

/// Nominal fighter size (collision-free, display scale only).
pub const FIGHTER_SIZE: f64 = 10.0;
