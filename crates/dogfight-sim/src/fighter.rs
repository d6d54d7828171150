//! The fighter craft controller.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use dogfight_core::parts::{Part, PartKind, WingSide};
use dogfight_core::projectile::Projectile;
use dogfight_core::render::{Color, Renderer};
use dogfight_core::types::{distance, x_component, y_component, Point, Vector};

use crate::turret;

/// A composite craft assembled from parts, steerable and armed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fighter {
    /// World coordinate, updated every tick.
    pub coordinate: Point,
    /// World-frame heading in radians.
    pub bearing: f64,
    pub velocity: Vector,
    /// Per-tick speed setting.
    pub speed: f64,
    /// Display size.
    pub size: f64,
    pub color: Color,
    /// Owned parts in draw order: hull, then turrets, then wings, so the
    /// turrets are never occluded by the wings.
    pub parts: Vec<Part>,
}

impl Fighter {
    /// Assemble a fighter at `coordinate`.
    ///
    /// The connection-point tree is built strictly bottom-up — hull, then
    /// wings off the hull's wing roots, then turrets off the wing tips and
    /// the hull's nose mount. Turret centers are captured from the parent
    /// connections here and frozen; parts never move relative to the hull.
    pub fn new(coordinate: Point, size: f64, speed: f64, color: Color) -> Fighter {
        let hull = Part::hull_a(Point::new(0.0, 0.0));
        let left_wing = Part::wing(WingSide::Left, hull.connections[0]);
        let right_wing = Part::wing(WingSide::Right, hull.connections[2]);

        let turrets = [
            Part::turret(left_wing.connections[1]),
            Part::turret(hull.connections[1]),
            Part::turret(right_wing.connections[1]),
        ];

        let mut parts = vec![hull];
        parts.extend(turrets);
        parts.push(left_wing);
        parts.push(right_wing);

        Fighter {
            coordinate,
            bearing: 0.0,
            velocity: Vector::new(1.0, 0.0, speed),
            speed,
            size,
            color,
            parts,
        }
    }

    /// One Euler step along the current velocity.
    pub fn advance(&mut self) {
        self.coordinate = self.coordinate.offset(self.velocity);
    }

    /// Snap the heading toward `target` and re-point the velocity.
    ///
    /// No turn-rate limiting: the bearing jumps straight to the target
    /// angle, wrapped into [0, 2*PI). A target coincident with the craft
    /// zeroes the velocity magnitude instead of dividing by zero.
    pub fn steer(&mut self, target: Point) {
        let target_vector = Vector::new(
            x_component(self.coordinate, target),
            y_component(self.coordinate, target),
            distance(self.coordinate, target),
        );
        self.bearing = self.velocity.angle();

        if target_vector.magnitude > 0.0 {
            self.bearing = target_vector.angle().rem_euclid(TAU);
            self.velocity.set_angle(self.bearing);
            self.velocity.set_magnitude(self.speed);
        } else {
            self.velocity.set_magnitude(0.0);
        }
    }

    /// Point every turret at `target`.
    pub fn aim_turrets(&mut self, target: Point) {
        let origin = self.coordinate;
        for part in &mut self.parts {
            if let PartKind::Turret(state) = &mut part.kind {
                turret::aim(state, origin, target);
            }
        }
    }

    /// Fire every turret once, in part order.
    ///
    /// Returns the ordered per-turret results — a kinetic round where the
    /// cooldown allowed it, a placeholder where it did not — for the caller
    /// to merge into the world.
    pub fn fire_turrets(&mut self, now_ms: u64) -> Vec<Projectile> {
        let origin = self.coordinate;
        let bearing = self.bearing;
        self.parts
            .iter_mut()
            .filter_map(|part| {
                let center = part.center;
                match &mut part.kind {
                    PartKind::Turret(state) => {
                        Some(turret::shoot(center, state, origin, bearing, now_ms))
                    }
                    _ => None,
                }
            })
            .collect()
    }

    /// Draw all parts in their fixed order with the craft's current frame.
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        for part in &self.parts {
            part.draw(self.coordinate, self.bearing, renderer);
        }
    }
}
