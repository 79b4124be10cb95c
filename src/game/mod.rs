//! Flappy bird simulation.
//!
//! A fixed-tick simulation: the bird falls under gravity and flaps on input,
//! pipe pairs scroll in from the right on a wall-clock timer, and touching a
//! pipe or the ground ends the run. Nothing here knows about the terminal.

pub mod bird;
pub mod geometry;
pub mod ground;
pub mod logic;
pub mod pipes;
pub mod session;
pub mod spawner;

pub use bird::Bird;
pub use geometry::{Mask, Rect};
pub use ground::Ground;
pub use logic::{check_collision, process_input, process_tick, update_score};
pub use pipes::{update_pipes, PipePair, PipeRole};
pub use session::{Collision, GameInput, GameSession, InputOutcome, Phase, TickResult};
pub use spawner::SpawnTimer;
