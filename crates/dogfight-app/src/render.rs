//! A renderer that narrates draw calls through the log facade.

use dogfight_core::render::{Color, Renderer, SpriteId};
use dogfight_core::types::Point;

/// Headless stand-in for a pixel renderer: every draw call becomes a trace
/// line. A real host implements [`Renderer`] over its drawing surface the
/// same way.
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn fill_background(&mut self, color: Color) {
        log::trace!("fill rgb({}, {}, {})", color.r, color.g, color.b);
    }

    fn draw_sprite(&mut self, sprite: SpriteId, origin: Point, bearing: f64, offset: Point) {
        log::trace!(
            "sprite {} at ({:.1}, {:.1}) bearing {:.3} offset ({:.1}, {:.1})",
            sprite.asset_name(),
            origin.x,
            origin.y,
            bearing,
            offset.x,
            offset.y,
        );
    }

    fn draw_circle(&mut self, center: Point, radius: f64, color: Color) {
        log::trace!(
            "circle r={radius:.1} at ({:.1}, {:.1}) rgb({}, {}, {})",
            center.x,
            center.y,
            color.r,
            color.g,
            color.b,
        );
    }
}
