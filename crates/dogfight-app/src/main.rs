//! Headless demo: run the duel for a few seconds with a scripted pointer
//! sweep and fire bursts, then print the final snapshot as JSON.
//!
//! Set RUST_LOG=trace to see every draw call from the log renderer.

use std::f64::consts::TAU;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use dogfight_app::game_loop::{spawn_game_loop, VIEW_HEIGHT, VIEW_WIDTH};
use dogfight_app::state::{GameLoopCommand, SharedSnapshot};
use dogfight_core::types::Point;

fn main() {
    env_logger::init();

    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let cmd_tx = spawn_game_loop(Arc::clone(&latest_snapshot));

    // Sweep the pointer around the view center while holding fire in
    // bursts, standing in for a real mouse and keyboard.
    for i in 0..30u32 {
        let angle = f64::from(i) * TAU / 30.0;
        let pointer = Point::new(
            VIEW_WIDTH / 2.0 + 250.0 * angle.cos(),
            VIEW_HEIGHT / 2.0 + 250.0 * angle.sin(),
        );
        let _ = cmd_tx.send(GameLoopCommand::Pointer(Some(pointer)));
        let _ = cmd_tx.send(GameLoopCommand::FireHeld(i % 10 < 5));
        thread::sleep(Duration::from_millis(100));
    }
    let _ = cmd_tx.send(GameLoopCommand::Shutdown);
    thread::sleep(Duration::from_millis(50));

    let snapshot = latest_snapshot.lock().ok().and_then(|lock| lock.clone());
    match snapshot {
        Some(snapshot) => {
            let json = serde_json::to_string_pretty(&snapshot).expect("snapshot serializes");
            println!("{json}");
        }
        None => eprintln!("no snapshot produced"),
    }
}
