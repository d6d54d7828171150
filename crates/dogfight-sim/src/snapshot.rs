//! Builds the per-frame WorldSnapshot from the live object list.

use dogfight_core::state::{FighterView, ProjectileView, WorldSnapshot};

use crate::space::{GameObject, Space};

/// Snapshot everything the display needs: all fighters plus every drawable
/// projectile. Placeholders are invisible and left out.
pub fn build_snapshot(space: &Space, now_ms: u64) -> WorldSnapshot {
    let mut snapshot = WorldSnapshot {
        now_ms,
        ..Default::default()
    };

    for object in &space.objects {
        match object {
            GameObject::Fighter(fighter) => snapshot.fighters.push(FighterView {
                coordinate: fighter.coordinate,
                bearing: fighter.bearing,
                speed: fighter.speed,
                color: fighter.color,
            }),
            GameObject::Projectile(projectile) => {
                if object.capabilities().drawable {
                    snapshot.projectiles.push(ProjectileView {
                        coordinate: projectile.coordinate,
                        bearing: projectile.bearing,
                        radius: projectile.kind.radius(),
                        color: projectile.kind.color(),
                    });
                }
            }
        }
    }

    snapshot
}
