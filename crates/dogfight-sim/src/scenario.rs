//! Scenario setup.

use dogfight_core::constants::{FIGHTER_SIZE, PLAYER_SPEED, RIVAL_SPEED};
use dogfight_core::render::Color;
use dogfight_core::types::Point;

use crate::fighter::Fighter;
use crate::space::Space;

/// Seed the standard duel: the pointer-steered player fighter in the top
/// left corner and the pursuing rival at the center of the view.
pub fn setup_duel(view_width: f64, view_height: f64) -> Space {
    let player = Fighter::new(
        Point::new(0.0, 0.0),
        FIGHTER_SIZE,
        PLAYER_SPEED,
        Color::WHITE,
    );
    let rival = Fighter::new(
        Point::new(view_width / 2.0, view_height / 2.0),
        FIGHTER_SIZE,
        RIVAL_SPEED,
        Color::RED,
    );

    log::debug!(
        "duel seeded: player at origin, rival at ({:.0}, {:.0})",
        view_width / 2.0,
        view_height / 2.0
    );
    Space::new(player, rival)
}
