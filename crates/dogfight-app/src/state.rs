//! State shared between the host and the game loop thread.

use std::sync::{Arc, Mutex};

use dogfight_core::state::WorldSnapshot;
use dogfight_core::types::Point;

/// Input updates and control sent from the host to the game loop thread.
/// The loop drains all pending commands at each tick boundary and samples
/// the resulting input state into that frame's `FrameInput`.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// New pointer position (None until the pointer has produced one).
    Pointer(Option<Point>),
    /// Fire key pressed or released.
    FireHeld(bool),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot published by the game loop, for synchronous polling.
pub type SharedSnapshot = Arc<Mutex<Option<WorldSnapshot>>>;
