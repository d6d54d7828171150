//! Projectiles: kinetic rounds and the non-lethal placeholder emitted
//! while a turret's cooldown is running.

use serde::{Deserialize, Serialize};

use crate::constants::{
    KINETIC_A_RADIUS, KINETIC_A_SPEED, KINETIC_B_RADIUS, KINETIC_B_SPEED, PROJECTILE_LIFETIME_MS,
};
use crate::render::Color;
use crate::types::{Point, Vector};

/// Projectile family tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    KineticA,
    KineticB,
    /// Muzzle-flash stand-in produced when a turret fires during cooldown.
    /// Renders nothing, does not move, and expires immediately.
    Placeholder,
}

impl ProjectileKind {
    /// Per-tick speed.
    pub fn speed(self) -> f64 {
        match self {
            ProjectileKind::KineticA => KINETIC_A_SPEED,
            ProjectileKind::KineticB => KINETIC_B_SPEED,
            ProjectileKind::Placeholder => 0.0,
        }
    }

    /// Display radius.
    pub fn radius(self) -> f64 {
        match self {
            ProjectileKind::KineticA => KINETIC_A_RADIUS,
            ProjectileKind::KineticB => KINETIC_B_RADIUS,
            ProjectileKind::Placeholder => 0.0,
        }
    }

    pub fn color(self) -> Color {
        match self {
            ProjectileKind::KineticA => Color::RED,
            ProjectileKind::KineticB => Color::YELLOW,
            ProjectileKind::Placeholder => Color::BLACK,
        }
    }
}

/// A time-stamped, velocity-bearing entity with a fixed lifetime.
///
/// Bearing and velocity are fixed at creation; projectiles fly straight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub coordinate: Point,
    pub bearing: f64,
    pub velocity: Vector,
    pub time_created_ms: u64,
    pub kind: ProjectileKind,
}

impl Projectile {
    pub fn new(kind: ProjectileKind, coordinate: Point, bearing: f64, now_ms: u64) -> Projectile {
        let mut velocity = Vector::new(1.0, 0.0, kind.speed());
        velocity.set_angle(bearing);
        Projectile {
            coordinate,
            bearing,
            velocity,
            time_created_ms: now_ms,
            kind,
        }
    }

    /// A cooldown placeholder at the muzzle position.
    pub fn placeholder(coordinate: Point, now_ms: u64) -> Projectile {
        Projectile::new(ProjectileKind::Placeholder, coordinate, 0.0, now_ms)
    }

    /// One Euler step along the fixed velocity.
    pub fn advance(&mut self) {
        self.coordinate = self.coordinate.offset(self.velocity);
    }

    /// Whether this projectile should be reaped at `now_ms`.
    ///
    /// Kinetic rounds expire at age >= 1000 ms of wall-clock time.
    /// Placeholders are dead from the moment they are created and get
    /// reaped by the next frame's removal pass.
    pub fn is_dead(&self, now_ms: u64) -> bool {
        match self.kind {
            ProjectileKind::Placeholder => true,
            _ => now_ms.saturating_sub(self.time_created_ms) >= PROJECTILE_LIFETIME_MS,
        }
    }
}
