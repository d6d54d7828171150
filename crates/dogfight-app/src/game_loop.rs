//! Game loop thread — steps the simulation at 100 Hz and publishes
//! snapshots.
//!
//! The space is created inside the thread because it's cleaner for
//! ownership. Input updates arrive via `mpsc` channel and are sampled once
//! per frame into a `FrameInput`; the latest snapshot is stored in shared
//! state for synchronous polling.

use std::sync::mpsc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use dogfight_core::constants::TICK_RATE;
use dogfight_core::input::FrameInput;
use dogfight_sim::scenario;
use dogfight_sim::snapshot::build_snapshot;

use crate::render::LogRenderer;
use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// View extent handed to the scenario. A windowed host would pass its real
/// surface size instead.
pub const VIEW_WIDTH: f64 = 1280.0;
pub const VIEW_HEIGHT: f64 = 720.0;

/// Spawns the game loop in a new thread.
///
/// Returns the command sender the host uses to feed input updates.
pub fn spawn_game_loop(latest_snapshot: SharedSnapshot) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("dogfight-game-loop".into())
        .spawn(move || {
            run_game_loop(cmd_rx, &latest_snapshot);
        })
        .expect("failed to spawn game loop thread");

    cmd_tx
}

/// Wall-clock milliseconds since the Unix epoch, the timebase for fire
/// cooldowns and projectile lifetimes.
fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(cmd_rx: mpsc::Receiver<GameLoopCommand>, latest_snapshot: &SharedSnapshot) {
    let mut space = scenario::setup_duel(VIEW_WIDTH, VIEW_HEIGHT);
    let mut renderer = LogRenderer;
    let mut pointer = None;
    let mut fire_held = false;
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending input updates
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Pointer(p)) => pointer = p,
                Ok(GameLoopCommand::FireHeld(held)) => fire_held = held,
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. One full step with this frame's sampled input
        let input = FrameInput {
            now_ms: now_ms(),
            pointer,
            fire_held,
        };
        space.step(&input);
        space.draw(&mut renderer);

        // 3. Publish the snapshot for synchronous polling
        let snapshot = build_snapshot(&space, input.now_ms);
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
