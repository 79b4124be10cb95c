//! Ambient services shared by the simulation, the renderer and the binary.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{ConfigError, GameConfig};
pub use error::AppError;
