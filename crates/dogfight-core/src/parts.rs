//! Craft parts and the connection-point model.
//!
//! A part owns a `center` in its craft's local frame and a list of
//! `connections` — fixed offsets where child parts attach. A child part is
//! constructed with one of its parent's connection points as its own
//! center, building a rigid local-frame tree rooted at the craft origin.
//! The tree is assembled once, bottom-up (hull, then wings, then turrets),
//! and never re-parented; only turret aim/cooldown state mutates afterwards.

use serde::{Deserialize, Serialize};

use crate::render::{Renderer, SpriteId};
use crate::types::Point;

/// Which hull model a hull part uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HullModel {
    A,
    B,
}

/// Which side of the craft a wing sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WingSide {
    Left,
    Right,
}

/// Mutable turret state. The only part state that changes after assembly.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TurretState {
    /// Wall-clock timestamp (ms) of the last live shot.
    pub last_shot_ms: u64,
    /// World-frame aim angle in radians.
    pub direction: f64,
}

/// Part family tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PartKind {
    Hull(HullModel),
    Wing(WingSide),
    Turret(TurretState),
}

/// A rigid sub-component of a craft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Position in the owning craft's local frame.
    pub center: Point,
    /// Sprite-space offset, rendering only.
    pub shift: Point,
    pub sprite: SpriteId,
    /// Attachment points for child parts, in the craft's local frame.
    pub connections: Vec<Point>,
    pub kind: PartKind,
}

impl Part {
    /// Hull model A: three connection points — left wing root, nose mount,
    /// right wing root.
    pub fn hull_a(center: Point) -> Part {
        Part {
            center,
            shift: Point::new(25.0, 25.0),
            sprite: SpriteId::HullA,
            connections: vec![
                Point::new(center.x + 12.5, center.y - 25.0),
                Point::new(center.x + 75.0, center.y),
                Point::new(center.x + 12.5, center.y + 25.0),
            ],
            kind: PartKind::Hull(HullModel::A),
        }
    }

    /// Hull model B: larger sprite, no attachment points.
    pub fn hull_b(center: Point) -> Part {
        Part {
            center,
            shift: Point::new(50.0, 50.0),
            sprite: SpriteId::HullB,
            connections: vec![],
            kind: PartKind::Hull(HullModel::B),
        }
    }

    /// Wing for the given side, with a mid-span and a tip connection point.
    pub fn wing(side: WingSide, center: Point) -> Part {
        let (shift, sprite, connections) = match side {
            WingSide::Left => (
                Point::new(25.0, 100.0),
                SpriteId::LeftWing,
                vec![
                    Point::new(center.x + 12.5, center.y - 50.0),
                    Point::new(center.x - 12.5, center.y - 100.0),
                ],
            ),
            WingSide::Right => (
                Point::new(25.0, 0.0),
                SpriteId::RightWing,
                vec![
                    Point::new(center.x + 12.5, center.y + 50.0),
                    Point::new(center.x - 12.5, center.y + 100.0),
                ],
            ),
        };
        Part {
            center,
            shift,
            sprite,
            connections,
            kind: PartKind::Wing(side),
        }
    }

    /// Turret, aimed along +x with the cooldown expired.
    pub fn turret(center: Point) -> Part {
        Part {
            center,
            shift: Point::new(12.5, 12.5),
            sprite: SpriteId::Turret,
            connections: vec![],
            kind: PartKind::Turret(TurretState::default()),
        }
    }

    /// Mutable turret state, if this part is a turret.
    pub fn turret_state_mut(&mut self) -> Option<&mut TurretState> {
        match &mut self.kind {
            PartKind::Turret(state) => Some(state),
            _ => None,
        }
    }

    /// Describe this part to the renderer in the craft's current frame.
    ///
    /// Every part variant honors the same spatial contract: the sprite is
    /// drawn at `center - shift` inside the context rotated by `bearing`
    /// and translated to `origin`.
    pub fn draw(&self, origin: Point, bearing: f64, renderer: &mut dyn Renderer) {
        let offset = Point::new(self.center.x - self.shift.x, self.center.y - self.shift.y);
        renderer.draw_sprite(self.sprite, origin, bearing, offset);
    }
}
