//! Turret controller: aiming and cooldown-gated firing.
//!
//! Turret data lives in the part tree (`PartKind::Turret`); the logic here
//! operates on that state plus the owning craft's current frame.

use dogfight_core::constants::FIRE_COOLDOWN_MS;
use dogfight_core::parts::TurretState;
use dogfight_core::projectile::{Projectile, ProjectileKind};
use dogfight_core::types::{distance, x_component, y_component, Point, Vector};

/// Point the turret at `target`.
///
/// The direction is computed from the craft origin, not the turret's own
/// world position — aiming is deliberately approximate. A target coincident
/// with the origin has no direction and leaves the previous aim in place.
pub fn aim(state: &mut TurretState, origin: Point, target: Point) {
    let range = distance(origin, target);
    if range <= 0.0 {
        return;
    }
    let target_vector = Vector::new(
        x_component(origin, target),
        y_component(origin, target),
        range,
    );
    state.direction = target_vector.angle();
}

/// Fire the turret once.
///
/// The muzzle is the turret's local center transformed into world space by
/// the craft's current frame. While the cooldown is running this returns a
/// placeholder at the muzzle and leaves `last_shot_ms` untouched; otherwise
/// it stamps `last_shot_ms = now_ms` and returns a kinetic round along the
/// aimed direction. Callers invoke this exactly once per frame per turret.
pub fn shoot(
    center: Point,
    state: &mut TurretState,
    origin: Point,
    bearing: f64,
    now_ms: u64,
) -> Projectile {
    let muzzle = center.to_world(origin, bearing);

    if now_ms.saturating_sub(state.last_shot_ms) < FIRE_COOLDOWN_MS {
        return Projectile::placeholder(muzzle, now_ms);
    }

    state.last_shot_ms = now_ms;
    Projectile::new(ProjectileKind::KineticA, muzzle, state.direction, now_ms)
}
