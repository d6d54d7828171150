//! Tests for the turret controller, fighter controller, world container,
//! and the full per-frame step.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use approx::assert_abs_diff_eq;

use dogfight_core::constants::{FIRE_COOLDOWN_MS, PROJECTILE_LIFETIME_MS};
use dogfight_core::input::FrameInput;
use dogfight_core::parts::{Part, PartKind, TurretState};
use dogfight_core::projectile::{Projectile, ProjectileKind};
use dogfight_core::render::{Color, Renderer, SpriteId};
use dogfight_core::types::{distance, Point};

use crate::fighter::Fighter;
use crate::scenario::setup_duel;
use crate::snapshot::build_snapshot;
use crate::space::{GameObject, Space, PLAYER, RIVAL};
use crate::turret;

fn test_fighter(coordinate: Point) -> Fighter {
    Fighter::new(coordinate, 10.0, 2.0, Color::WHITE)
}

// ---- Turret controller ----

#[test]
fn test_turret_aim_direction() {
    let mut state = TurretState::default();
    turret::aim(&mut state, Point::new(0.0, 0.0), Point::new(10.0, 10.0));
    assert_abs_diff_eq!(state.direction, PI / 4.0, epsilon = 1e-9);

    turret::aim(&mut state, Point::new(5.0, 5.0), Point::new(5.0, -5.0));
    assert_abs_diff_eq!(state.direction, -FRAC_PI_2, epsilon = 1e-9);
}

#[test]
fn test_turret_aim_coincident_target_keeps_direction() {
    let mut state = TurretState {
        last_shot_ms: 0,
        direction: 1.25,
    };
    turret::aim(&mut state, Point::new(3.0, 4.0), Point::new(3.0, 4.0));
    assert_eq!(state.direction, 1.25);
}

#[test]
fn test_turret_cooldown_boundary() {
    let t = 10_000;
    let mut state = TurretState {
        last_shot_ms: t,
        direction: 0.5,
    };
    let center = Point::new(10.0, 0.0);

    // One millisecond early: placeholder, cooldown clock untouched.
    let shot = turret::shoot(
        center,
        &mut state,
        Point::new(0.0, 0.0),
        0.0,
        t + FIRE_COOLDOWN_MS - 1,
    );
    assert_eq!(shot.kind, ProjectileKind::Placeholder);
    assert_eq!(state.last_shot_ms, t);

    // Exactly on the boundary: live round, clock stamped to the call time.
    let shot = turret::shoot(
        center,
        &mut state,
        Point::new(0.0, 0.0),
        0.0,
        t + FIRE_COOLDOWN_MS,
    );
    assert_eq!(shot.kind, ProjectileKind::KineticA);
    assert_eq!(shot.bearing, 0.5);
    assert_eq!(state.last_shot_ms, t + FIRE_COOLDOWN_MS);
}

#[test]
fn test_turret_muzzle_transform() {
    let mut state = TurretState::default();
    // Craft at (100, 50) heading +y: local (10, 0) becomes (100, 60).
    let shot = turret::shoot(
        Point::new(10.0, 0.0),
        &mut state,
        Point::new(100.0, 50.0),
        FRAC_PI_2,
        FIRE_COOLDOWN_MS,
    );
    assert_abs_diff_eq!(shot.coordinate.x, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(shot.coordinate.y, 60.0, epsilon = 1e-9);
}

/// Craft at the origin with a single turret at local (10, 0): a shot at
/// bearing 0 leaves the muzzle at world (10, 0), flying along the last
/// aimed direction.
#[test]
fn test_single_turret_end_to_end() {
    let mut fighter = test_fighter(Point::new(0.0, 0.0));
    fighter.parts = vec![Part::turret(Point::new(10.0, 0.0))];

    fighter.aim_turrets(Point::new(0.0, 50.0));
    let salvo = fighter.fire_turrets(FIRE_COOLDOWN_MS);

    assert_eq!(salvo.len(), 1);
    let shot = &salvo[0];
    assert_eq!(shot.kind, ProjectileKind::KineticA);
    assert_abs_diff_eq!(shot.coordinate.x, 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(shot.coordinate.y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(shot.bearing, FRAC_PI_2, epsilon = 1e-9);
}

// ---- Fighter assembly ----

#[test]
fn test_assembly_part_order() {
    let fighter = test_fighter(Point::new(0.0, 0.0));
    let kinds: Vec<&PartKind> = fighter.parts.iter().map(|p| &p.kind).collect();
    assert_eq!(fighter.parts.len(), 6);
    assert!(matches!(kinds[0], PartKind::Hull(_)));
    assert!(matches!(kinds[1], PartKind::Turret(_)));
    assert!(matches!(kinds[2], PartKind::Turret(_)));
    assert!(matches!(kinds[3], PartKind::Turret(_)));
    assert!(matches!(kinds[4], PartKind::Wing(_)));
    assert!(matches!(kinds[5], PartKind::Wing(_)));
}

/// Turret centers are frozen copies of the parent connection points:
/// left wing tip, hull nose mount, right wing tip.
#[test]
fn test_assembly_turret_centers_from_connections() {
    let fighter = test_fighter(Point::new(0.0, 0.0));
    assert_eq!(fighter.parts[1].center, Point::new(0.0, -125.0));
    assert_eq!(fighter.parts[2].center, Point::new(75.0, 0.0));
    assert_eq!(fighter.parts[3].center, Point::new(0.0, 125.0));

    // Wings sit on the hull's wing roots.
    assert_eq!(fighter.parts[4].center, Point::new(12.5, -25.0));
    assert_eq!(fighter.parts[5].center, Point::new(12.5, 25.0));
}

// ---- Steering ----

#[test]
fn test_steer_snaps_bearing_to_target() {
    let mut fighter = test_fighter(Point::new(0.0, 0.0));
    fighter.steer(Point::new(0.0, 10.0));
    assert_abs_diff_eq!(fighter.bearing, FRAC_PI_2, epsilon = 1e-9);
    assert_abs_diff_eq!(fighter.velocity.x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(fighter.velocity.y, 2.0, epsilon = 1e-9);

    // A target behind the craft wraps into [0, 2*PI).
    fighter.steer(Point::new(0.0, -10.0));
    assert_abs_diff_eq!(fighter.bearing, 1.5 * PI, epsilon = 1e-9);
    assert!(fighter.bearing >= 0.0 && fighter.bearing < TAU);
}

#[test]
fn test_steer_coincident_target_stops() {
    let mut fighter = test_fighter(Point::new(7.0, -3.0));
    fighter.steer(Point::new(7.0, -3.0));
    assert_eq!(fighter.velocity.magnitude, 0.0);
}

/// After a stop, the first steer away leaves the components at zero
/// (set_angle runs while the cached magnitude is still 0); the second
/// steer moves again. Preserved integration quirk of the cached-magnitude
/// vector.
#[test]
fn test_steer_recovery_after_stop() {
    let mut fighter = test_fighter(Point::new(0.0, 0.0));
    fighter.steer(Point::new(0.0, 0.0));
    assert_eq!(fighter.velocity.magnitude, 0.0);

    fighter.steer(Point::new(10.0, 0.0));
    assert_eq!(fighter.velocity.x, 0.0);
    assert_eq!(fighter.velocity.magnitude, 2.0);

    fighter.steer(Point::new(10.0, 0.0));
    assert_abs_diff_eq!(fighter.velocity.x, 2.0, epsilon = 1e-9);
}

#[test]
fn test_advance_is_one_euler_step() {
    let mut fighter = test_fighter(Point::new(1.0, 1.0));
    fighter.steer(Point::new(1.0, 101.0));
    fighter.advance();
    assert_abs_diff_eq!(fighter.coordinate.x, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(fighter.coordinate.y, 3.0, epsilon = 1e-9);
}

// ---- World container ----

fn kinetic_marker(index: usize, created_ms: u64) -> GameObject {
    GameObject::Projectile(Projectile::new(
        ProjectileKind::KineticA,
        Point::new(index as f64, 0.0),
        0.0,
        created_ms,
    ))
}

/// With dead entries at the even indices, the reap pass leaves exactly the
/// odd-indexed entries in their original relative order.
#[test]
fn test_reap_even_indices_leaves_odds_in_order() {
    let now = 10_000;
    let mut space = Space {
        objects: (0..8)
            .map(|i| {
                if i % 2 == 0 {
                    kinetic_marker(i, now - PROJECTILE_LIFETIME_MS)
                } else {
                    kinetic_marker(i, now)
                }
            })
            .collect(),
    };

    space.remove_expired(now);

    let survivors: Vec<f64> = space
        .objects
        .iter()
        .map(|o| match o {
            GameObject::Projectile(p) => p.coordinate.x,
            _ => panic!("unexpected object"),
        })
        .collect();
    assert_eq!(survivors, vec![1.0, 3.0, 5.0, 7.0]);
}

#[test]
fn test_reap_never_touches_fighters() {
    let mut space = Space::new(
        test_fighter(Point::new(0.0, 0.0)),
        test_fighter(Point::new(100.0, 100.0)),
    );
    space.remove_expired(u64::MAX);
    assert_eq!(space.objects.len(), 2);
    assert!(space.fighter(PLAYER).is_some());
    assert!(space.fighter(RIVAL).is_some());
}

#[test]
fn test_reap_is_idempotent() {
    let now = 5_000;
    let mut space = Space {
        objects: vec![kinetic_marker(0, 0), kinetic_marker(1, now)],
    };
    space.remove_expired(now);
    assert_eq!(space.objects.len(), 1);
    space.remove_expired(now);
    assert_eq!(space.objects.len(), 1);
}

// ---- Per-frame step ----

#[test_log::test]
fn test_step_rival_placeholder_exhaust_cycle() {
    let mut space = setup_duel(800.0, 600.0);
    let pointer = Some(Point::new(400.0, 300.0));

    // During cooldown the rival's salvo is three placeholders per frame.
    space.step(&FrameInput {
        now_ms: 10,
        pointer,
        fire_held: false,
    });
    assert_eq!(space.objects.len(), 5);

    // The next step reaps them before the rival fires again.
    space.step(&FrameInput {
        now_ms: 20,
        pointer,
        fire_held: false,
    });
    assert_eq!(space.objects.len(), 5);
}

#[test_log::test]
fn test_step_live_fire_and_expiry() {
    let mut space = setup_duel(800.0, 600.0);
    let pointer = Some(Point::new(400.0, 300.0));

    // Past the cooldown both craft fire live rounds.
    space.step(&FrameInput {
        now_ms: FIRE_COOLDOWN_MS,
        pointer,
        fire_held: true,
    });
    let kinetics = space
        .objects
        .iter()
        .filter(|o| matches!(o, GameObject::Projectile(p) if p.kind == ProjectileKind::KineticA))
        .count();
    assert_eq!(kinetics, 6);

    // Rounds fly straight: each projectile's bearing never changes and the
    // velocity matches it.
    for object in &space.objects {
        if let GameObject::Projectile(p) = object {
            assert_abs_diff_eq!(p.velocity.angle(), p.bearing, epsilon = 1e-9);
        }
    }

    // One lifetime later every round from that volley is gone.
    space.step(&FrameInput {
        now_ms: FIRE_COOLDOWN_MS + PROJECTILE_LIFETIME_MS,
        pointer: None,
        fire_held: false,
    });
    let survivors = space
        .objects
        .iter()
        .filter(|o| matches!(o, GameObject::Projectile(p) if p.time_created_ms == FIRE_COOLDOWN_MS))
        .count();
    assert_eq!(survivors, 0);
}

#[test]
fn test_step_salvo_order_rival_then_player() {
    let mut space = setup_duel(800.0, 600.0);
    let rival_position = space.fighter(RIVAL).unwrap().coordinate;

    space.step(&FrameInput {
        now_ms: 10,
        pointer: Some(Point::new(200.0, 200.0)),
        fire_held: true,
    });

    // Indices 2..5 are the rival's salvo, 5..8 the player's, muzzles near
    // their frame-start coordinates.
    assert_eq!(space.objects.len(), 8);
    for object in &space.objects[2..5] {
        if let GameObject::Projectile(p) = object {
            assert!(distance(p.coordinate, rival_position) < 150.0);
        }
    }
    for object in &space.objects[5..8] {
        if let GameObject::Projectile(p) = object {
            assert!(distance(p.coordinate, Point::new(0.0, 0.0)) < 150.0);
        }
    }
}

#[test]
fn test_step_without_pointer_keeps_player_heading() {
    let mut space = setup_duel(800.0, 600.0);

    space.step(&FrameInput {
        now_ms: 10,
        pointer: None,
        fire_held: false,
    });

    // No steer happened: the player drifted one step along its seeded
    // velocity components and its bearing is untouched.
    let player = space.fighter(PLAYER).unwrap();
    assert_eq!(player.bearing, 0.0);
    assert_eq!(player.coordinate, Point::new(1.0, 0.0));

    // The rival still pursued the player.
    let rival = space.fighter(RIVAL).unwrap();
    assert!(rival.bearing != 0.0);
}

#[test]
fn test_step_rival_pursues_player() {
    let mut space = setup_duel(800.0, 600.0);
    let start = space.fighter(RIVAL).unwrap().coordinate;
    let player_position = space.fighter(PLAYER).unwrap().coordinate;

    for i in 0..50 {
        space.step(&FrameInput {
            now_ms: 10 * i,
            pointer: Some(player_position),
            fire_held: false,
        });
    }

    let end = space.fighter(RIVAL).unwrap().coordinate;
    assert!(distance(end, player_position) < distance(start, player_position));
}

// ---- Drawing ----

#[derive(Debug, PartialEq)]
enum DrawCall {
    Background(Color),
    Sprite(SpriteId),
    Circle(f64, Color),
}

#[derive(Default)]
struct RecordingRenderer {
    calls: Vec<DrawCall>,
}

impl Renderer for RecordingRenderer {
    fn fill_background(&mut self, color: Color) {
        self.calls.push(DrawCall::Background(color));
    }

    fn draw_sprite(&mut self, sprite: SpriteId, _origin: Point, _bearing: f64, _offset: Point) {
        self.calls.push(DrawCall::Sprite(sprite));
    }

    fn draw_circle(&mut self, _center: Point, radius: f64, color: Color) {
        self.calls.push(DrawCall::Circle(radius, color));
    }
}

#[test]
fn test_draw_order_and_stacking() {
    let mut space = setup_duel(800.0, 600.0);
    space.step(&FrameInput {
        now_ms: FIRE_COOLDOWN_MS,
        pointer: Some(Point::new(100.0, 100.0)),
        fire_held: false,
    });

    let mut renderer = RecordingRenderer::default();
    space.draw(&mut renderer);

    // Background first, then each fighter's parts hull-turrets-wings, then
    // the rival's three live rounds.
    assert_eq!(renderer.calls[0], DrawCall::Background(Color::BLACK));
    let fighter_calls = [
        DrawCall::Sprite(SpriteId::HullA),
        DrawCall::Sprite(SpriteId::Turret),
        DrawCall::Sprite(SpriteId::Turret),
        DrawCall::Sprite(SpriteId::Turret),
        DrawCall::Sprite(SpriteId::LeftWing),
        DrawCall::Sprite(SpriteId::RightWing),
    ];
    assert_eq!(renderer.calls[1..7], fighter_calls[..]);
    assert_eq!(renderer.calls[7..13], fighter_calls[..]);
    assert_eq!(renderer.calls.len(), 16);
    for call in &renderer.calls[13..] {
        assert_eq!(*call, DrawCall::Circle(5.0, Color::RED));
    }
}

#[test]
fn test_placeholders_draw_nothing() {
    let mut space = setup_duel(800.0, 600.0);
    // Cooldown running: the rival's salvo is placeholders only.
    space.step(&FrameInput {
        now_ms: 10,
        pointer: None,
        fire_held: false,
    });

    let mut renderer = RecordingRenderer::default();
    space.draw(&mut renderer);
    assert!(renderer
        .calls
        .iter()
        .all(|c| !matches!(c, DrawCall::Circle(..))));
}

// ---- Snapshots ----

#[test]
fn test_snapshot_excludes_placeholders() {
    let mut space = setup_duel(800.0, 600.0);
    space.step(&FrameInput {
        now_ms: 10,
        pointer: None,
        fire_held: false,
    });
    // Three placeholders are in the object list right now.
    assert_eq!(space.objects.len(), 5);

    let snapshot = build_snapshot(&space, 10);
    assert_eq!(snapshot.fighters.len(), 2);
    assert_eq!(snapshot.projectiles.len(), 0);
    assert_eq!(snapshot.now_ms, 10);
}

#[test]
fn test_snapshot_deterministic_for_identical_runs() {
    let script = |space: &mut Space| {
        for i in 0..200u64 {
            space.step(&FrameInput {
                now_ms: i * 10,
                pointer: Some(Point::new(300.0, 150.0)),
                fire_held: i % 3 == 0,
            });
        }
    };

    let mut space_a = setup_duel(800.0, 600.0);
    let mut space_b = setup_duel(800.0, 600.0);
    script(&mut space_a);
    script(&mut space_b);

    let json_a = serde_json::to_string(&build_snapshot(&space_a, 2000)).unwrap();
    let json_b = serde_json::to_string(&build_snapshot(&space_b, 2000)).unwrap();
    assert_eq!(json_a, json_b, "identical runs diverged");
}
