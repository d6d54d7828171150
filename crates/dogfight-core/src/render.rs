//! Rendering contract between the simulation and the host.
//!
//! The core never touches pixels. Each frame the host hands the sim a
//! `Renderer` and the sim describes the scene through these three calls.

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// Plain RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };
    pub const RED: Color = Color { r: 255, g: 0, b: 0 };
    pub const YELLOW: Color = Color {
        r: 255,
        g: 255,
        b: 0,
    };
}

/// Sprite assets the host is expected to have loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteId {
    HullA,
    HullB,
    LeftWing,
    RightWing,
    Turret,
}

impl SpriteId {
    /// Asset file name for this sprite.
    pub fn asset_name(self) -> &'static str {
        match self {
            SpriteId::HullA => "hullProtoA.png",
            SpriteId::HullB => "hullProtoB.png",
            SpriteId::LeftWing => "leftWingProto.png",
            SpriteId::RightWing => "rightWingProto.png",
            SpriteId::Turret => "shooterProto.png",
        }
    }
}

/// Host-provided drawing surface.
///
/// `draw_sprite` receives the craft's world `origin` and `bearing` plus the
/// sprite's part-local `offset` (center minus sprite shift); the host is
/// expected to draw inside a translated-and-rotated context, exactly as a
/// canvas save/translate/rotate/restore sequence would.
pub trait Renderer {
    /// Fill the whole frame with `color`. Called once per frame, first.
    fn fill_background(&mut self, color: Color);

    /// Draw `sprite` at `offset` in the local frame given by `origin` and
    /// `bearing`.
    fn draw_sprite(&mut self, sprite: SpriteId, origin: Point, bearing: f64, offset: Point);

    /// Draw a filled circle at a world-space `center`.
    fn draw_circle(&mut self, center: Point, radius: f64, color: Color);
}
