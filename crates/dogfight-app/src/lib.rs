//! Host-side harness for the DOGFIGHT simulation: the fixed-rate game
//! loop, the input command channel, and a log-backed renderer.

pub mod game_loop;
pub mod render;
pub mod state;
