//! Fundamental geometric types for the 2D simulation plane.

use serde::{Deserialize, Serialize};

/// Distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// X component of the unit vector from `a` to `b`.
///
/// NaN when `a == b` (division by zero distance). Callers aiming or
/// steering at a possibly coincident target must check the distance first.
pub fn x_component(a: Point, b: Point) -> f64 {
    (b.x - a.x) / distance(a, b)
}

/// Y component of the unit vector from `a` to `b`.
///
/// NaN when `a == b`, same as [`x_component`].
pub fn y_component(a: Point, b: Point) -> f64 {
    (b.y - a.y) / distance(a, b)
}

/// A point in the simulation plane. Used both for world coordinates and
/// for part-local offsets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn sum(self, b: Point) -> Point {
        Point::new(self.x + b.x, self.y + b.y)
    }

    /// Component-wise product.
    pub fn product(self, b: Point) -> Point {
        Point::new(self.x * b.x, self.y * b.y)
    }

    /// Rotate counter-clockwise by `angle` radians about the origin.
    pub fn rotate(self, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point::new(self.x * cos - self.y * sin, self.y * cos + self.x * sin)
    }

    /// Map a part-local point into world space: rotate by the craft's
    /// bearing, then translate by its world coordinate.
    pub fn to_world(self, origin: Point, bearing: f64) -> Point {
        self.rotate(bearing).sum(origin)
    }

    /// Displace by a velocity vector (one Euler step).
    pub fn offset(self, v: Vector) -> Point {
        Point::new(self.x + v.x, self.y + v.y)
    }
}

/// A 2D vector with a *cached* magnitude.
///
/// The magnitude is stored, not derived from (x, y). After [`set_angle`]
/// the components equal magnitude * (cos θ, sin θ). [`set_magnitude`]
/// updates only the cached scalar and leaves (x, y) untouched; a caller
/// that needs consistent components must call [`set_angle`] afterwards
/// (or, as `Fighter::steer` does, call `set_angle` while the magnitude
/// already holds the intended speed).
///
/// [`set_angle`]: Vector::set_angle
/// [`set_magnitude`]: Vector::set_magnitude
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub magnitude: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64, magnitude: f64) -> Self {
        Self { x, y, magnitude }
    }

    pub fn sum(self, b: Vector) -> Vector {
        Vector::new(self.x + b.x, self.y + b.y, self.magnitude)
    }

    /// Scale the components by a scalar. The cached magnitude is carried
    /// over unchanged.
    pub fn scaled(self, b: f64) -> Vector {
        Vector::new(self.x * b, self.y * b, self.magnitude)
    }

    /// Heading angle in radians, range (-PI, PI].
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Point the vector at `angle`, setting (x, y) from the cached
    /// magnitude. This is the only operation that re-derives the
    /// components from the magnitude.
    pub fn set_angle(&mut self, angle: f64) {
        self.x = angle.cos() * self.magnitude;
        self.y = angle.sin() * self.magnitude;
    }

    /// Update the cached magnitude. Does NOT rescale (x, y).
    pub fn set_magnitude(&mut self, magnitude: f64) {
        self.magnitude = magnitude;
    }
}
