//! Flappy - terminal flappy bird.
//!
//! The library exposes the simulation, assets and renderer so the binary and
//! the integration tests share one implementation.

pub mod assets;
pub mod core;
pub mod game;
pub mod input;
pub mod ui;

pub use crate::core::{AppError, ConfigError, GameConfig};
pub use assets::Assets;
pub use game::{GameInput, GameSession, InputOutcome, Phase, TickResult};
