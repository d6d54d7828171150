//! The world container: a flat list of live objects advanced once per tick.

use serde::{Deserialize, Serialize};

use dogfight_core::input::FrameInput;
use dogfight_core::projectile::{Projectile, ProjectileKind};
use dogfight_core::render::{Color, Renderer};

use crate::fighter::Fighter;

/// Index of the pointer-steered fighter in the object list.
pub const PLAYER: usize = 0;

/// Index of the pursuing fighter in the object list.
pub const RIVAL: usize = 1;

/// What an entity variant can do. Declared per variant instead of probed
/// at runtime.
#[derive(Debug, Clone, Copy)]
pub struct Capabilities {
    pub movable: bool,
    pub drawable: bool,
    pub mortal: bool,
}

/// Anything that lives in the world list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameObject {
    Fighter(Fighter),
    Projectile(Projectile),
}

impl GameObject {
    pub fn capabilities(&self) -> Capabilities {
        match self {
            // Fighters move and draw but are never reaped.
            GameObject::Fighter(_) => Capabilities {
                movable: true,
                drawable: true,
                mortal: false,
            },
            // Placeholders render nothing and do not move; they exist only
            // to be reaped on the next frame.
            GameObject::Projectile(p) if p.kind == ProjectileKind::Placeholder => Capabilities {
                movable: false,
                drawable: false,
                mortal: true,
            },
            GameObject::Projectile(_) => Capabilities {
                movable: true,
                drawable: true,
                mortal: true,
            },
        }
    }

    pub fn is_dead(&self, now_ms: u64) -> bool {
        match self {
            GameObject::Fighter(_) => false,
            GameObject::Projectile(p) => p.is_dead(now_ms),
        }
    }

    fn advance(&mut self) {
        match self {
            GameObject::Fighter(f) => f.advance(),
            GameObject::Projectile(p) => p.advance(),
        }
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        match self {
            GameObject::Fighter(f) => f.draw(renderer),
            GameObject::Projectile(p) => {
                renderer.draw_circle(p.coordinate, p.kind.radius(), p.kind.color())
            }
        }
    }
}

/// The container of all live simulation entities.
///
/// The list grows by appending projectiles at the end of the firing phase
/// and shrinks in the reap pass; it is never mutated mid-iteration.
pub struct Space {
    pub objects: Vec<GameObject>,
}

impl Space {
    /// A world seeded with the two dueling fighters. They stay at indices
    /// [`PLAYER`] and [`RIVAL`] for the lifetime of the space, since
    /// fighters are never mortal and projectiles are appended after them.
    pub fn new(player: Fighter, rival: Fighter) -> Space {
        Space {
            objects: vec![GameObject::Fighter(player), GameObject::Fighter(rival)],
        }
    }

    pub fn fighter(&self, index: usize) -> Option<&Fighter> {
        match self.objects.get(index) {
            Some(GameObject::Fighter(f)) => Some(f),
            _ => None,
        }
    }

    pub fn fighter_mut(&mut self, index: usize) -> Option<&mut Fighter> {
        match self.objects.get_mut(index) {
            Some(GameObject::Fighter(f)) => Some(f),
            _ => None,
        }
    }

    /// Reap expired entries.
    ///
    /// Iterates back-to-front: removing by index while walking forward
    /// would skip the element after each removal. Survivors keep their
    /// relative order.
    pub fn remove_expired(&mut self, now_ms: u64) {
        let before = self.objects.len();
        for i in (0..self.objects.len()).rev() {
            let object = &self.objects[i];
            if object.capabilities().mortal && object.is_dead(now_ms) {
                self.objects.remove(i);
            }
        }
        let reaped = before - self.objects.len();
        if reaped > 0 {
            log::debug!("reaped {reaped} expired objects, {} live", self.objects.len());
        }
    }

    /// Advance every movable object one step.
    pub fn advance_all(&mut self) {
        for object in &mut self.objects {
            if object.capabilities().movable {
                object.advance();
            }
        }
    }

    /// Append a turret salvo to the world list.
    pub fn spawn_projectiles(&mut self, salvo: Vec<Projectile>) {
        self.objects
            .extend(salvo.into_iter().map(GameObject::Projectile));
    }

    /// Run one full simulation step.
    ///
    /// Fixed order: reap expired -> aim -> fire (append) -> steer -> move.
    /// Drawing is a separate host-driven `draw` call.
    pub fn step(&mut self, input: &FrameInput) {
        self.remove_expired(input.now_ms);

        let Some(player_position) = self.fighter(PLAYER).map(|f| f.coordinate) else {
            return;
        };

        // Aim. A frame without a pointer position leaves the player's
        // turrets and heading untouched (the zero-information guard).
        if let Some(pointer) = input.pointer {
            if let Some(player) = self.fighter_mut(PLAYER) {
                player.aim_turrets(pointer);
            }
        }
        if let Some(rival) = self.fighter_mut(RIVAL) {
            rival.aim_turrets(player_position);
        }

        // Fire. The rival fires every frame; cooldown misses come back as
        // placeholders and are reaped on the next step.
        if let Some(rival) = self.fighter_mut(RIVAL) {
            let salvo = rival.fire_turrets(input.now_ms);
            self.spawn_projectiles(salvo);
        }
        if input.fire_held {
            if let Some(player) = self.fighter_mut(PLAYER) {
                let salvo = player.fire_turrets(input.now_ms);
                self.spawn_projectiles(salvo);
            }
        }

        // Steer. The rival pursues the player's frame-start coordinate.
        if let Some(pointer) = input.pointer {
            if let Some(player) = self.fighter_mut(PLAYER) {
                player.steer(pointer);
            }
        }
        if let Some(rival) = self.fighter_mut(RIVAL) {
            rival.steer(player_position);
        }

        self.advance_all();
    }

    /// Draw the frame: background first, then every drawable object.
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.fill_background(Color::BLACK);
        for object in &self.objects {
            if object.capabilities().drawable {
                object.draw(renderer);
            }
        }
    }
}
