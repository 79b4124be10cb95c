//! Game configuration.
//!
//! Every tuning constant of the game lives in [`GameConfig`]. The simulation
//! receives the config at construction time, so tests can run with alternate
//! physics without touching globals.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] io::Error),

    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable game configuration, in world units (pixels of the 450×712
/// reference play field) and per-tick rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // Play field
    pub screen_width: f64,
    pub screen_height: f64,
    /// Target ticks per second.
    pub fps: u32,

    // Bird
    /// Fixed horizontal center of the bird.
    pub bird_x: f64,
    /// Vertical center of the bird on (re)start.
    pub bird_start_y: f64,
    pub bird_width: f64,
    pub bird_height: f64,
    /// Downward acceleration added to the velocity every tick.
    pub gravity: f64,
    /// Velocity set by a flap (negative = upward).
    pub flap_velocity: f64,
    /// Degrees per tick the bird tilts down while falling (doubled when tilting up).
    pub rotation_speed: f64,
    /// Falling velocity above which the bird starts tilting down.
    pub tilt_threshold: f64,
    pub max_upward_rotation: f64,
    pub max_downward_rotation: f64,

    // Pipes
    /// Vertical opening between the two segments of a pair.
    pub pipe_gap: u32,
    /// Wall-clock time between two spawned pairs.
    pub pipe_interval_ms: u64,
    pub pipe_speed: f64,
    /// Smallest top-segment height (gap never starts above this y).
    pub pipe_min_top_height: u32,
    /// Smallest visible bottom-segment height above the screen bottom.
    pub pipe_bottom_margin: u32,
    pub pipe_width: f64,
    /// Height of one pipe sprite tile.
    pub pipe_segment_height: f64,
    /// Distance past the right edge where new pairs appear.
    pub pipe_spawn_offset: f64,

    // Ground
    pub ground_height: f64,
    pub ground_speed: f64,

    /// Use the bird's pixel mask for pipe collisions instead of its bounding box.
    pub pixel_collision: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 450.0,
            screen_height: 712.0,
            fps: 60,

            bird_x: 50.0,
            bird_start_y: 356.0,
            bird_width: 34.0,
            bird_height: 24.0,
            gravity: 0.25,
            flap_velocity: -7.0,
            rotation_speed: 3.0,
            tilt_threshold: 1.0,
            max_upward_rotation: 25.0,
            max_downward_rotation: -90.0,

            pipe_gap: 130,
            pipe_interval_ms: 1500,
            pipe_speed: 2.0,
            pipe_min_top_height: 100,
            pipe_bottom_margin: 100,
            pipe_width: 52.0,
            pipe_segment_height: 320.0,
            pipe_spawn_offset: 50.0,

            ground_height: 100.0,
            ground_speed: 2.0,

            pixel_collision: true,
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&json)?;
        Ok(config.validated())
    }

    /// Load `path` if it exists, otherwise return the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Default location of the config file: `~/.flappy/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".flappy").join("config.json"))
    }

    /// Clamp values that would make the simulation degenerate.
    ///
    /// Configuration is trusted input, so bad values are corrected rather
    /// than rejected.
    pub fn validated(mut self) -> Self {
        self.fps = self.fps.max(1);
        self.screen_width = self.screen_width.max(1.0);
        self.screen_height = self.screen_height.max(1.0);
        self.bird_width = self.bird_width.max(1.0);
        self.bird_height = self.bird_height.max(1.0);
        self.pipe_gap = self.pipe_gap.max(1);
        self.pipe_width = self.pipe_width.max(1.0);
        self.pipe_segment_height = self.pipe_segment_height.max(1.0);
        self.ground_height = self.ground_height.clamp(0.0, self.screen_height);
        if self.max_downward_rotation > self.max_upward_rotation {
            self.max_downward_rotation = self.max_upward_rotation;
        }
        self
    }

    /// Y coordinate of the ground surface; reaching it ends the run.
    pub fn ground_y(&self) -> f64 {
        self.screen_height - self.ground_height
    }

    /// Inclusive range of top-segment heights a spawned pair may use.
    ///
    /// Collapses to the minimum when the field is too short for the margins.
    pub fn top_height_range(&self) -> RangeInclusive<u32> {
        let min = self.pipe_min_top_height;
        let max = (self.screen_height as i64)
            - i64::from(self.pipe_gap)
            - i64::from(self.pipe_bottom_margin);
        let max = u32::try_from(max).unwrap_or(0).max(min);
        min..=max
    }

    /// Duration of one tick at the configured frame rate.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }

    pub fn pipe_interval(&self) -> Duration {
        Duration::from_millis(self.pipe_interval_ms)
    }
}
