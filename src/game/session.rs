//! Per-run game state: phase, entities and scores.

use super::bird::Bird;
use super::geometry::Mask;
use super::ground::Ground;
use super::pipes::PipePair;
use super::spawner::SpawnTimer;
use crate::core::GameConfig;

/// Coarse game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Title screen before the first run.
    Idle,
    Playing,
    GameOver,
}

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Start, flap or restart depending on the phase (Space/Up/Enter).
    Action,
    /// Leave the game (Esc/q/Ctrl-C).
    Quit,
    /// Any other key.
    Other,
}

/// What the game loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    Quit,
}

/// What ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Pipe,
    Ground,
}

/// Result of one tick, for the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickResult {
    /// A new pipe pair entered the field.
    pub spawned_pipe: bool,
    /// Pairs cleared this tick.
    pub points_scored: u32,
    /// Set on the tick the run ended.
    pub collision: Option<Collision>,
}

/// Everything one process run owns: entities, phase and scores.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub phase: Phase,
    pub bird: Bird,
    /// Active pairs, oldest first.
    pub pipes: Vec<PipePair>,
    pub ground: Ground,
    pub score: u32,
    /// Best score of this process; not persisted.
    pub high_score: u32,
    pub spawn_timer: SpawnTimer,
    /// Collision shape of one pipe tile, sized pipe width × tile length.
    pub pipe_mask: Mask,
}

impl GameSession {
    /// New session in [`Phase::Idle`] with solid rectangular bird and
    /// pipe hitboxes.
    pub fn new(config: GameConfig) -> Self {
        let bird = Bird::new(&config);
        let pipe_mask = Mask::solid(
            config.pipe_width.round() as usize,
            config.pipe_segment_height.round() as usize,
        );
        Self::build(config, bird, pipe_mask)
    }

    /// New session whose bird and pipe tiles collide using the given masks.
    pub fn with_masks(config: GameConfig, bird_mask: Mask, pipe_mask: Mask) -> Self {
        let bird = Bird::with_mask(&config, bird_mask);
        Self::build(config, bird, pipe_mask)
    }

    fn build(config: GameConfig, bird: Bird, pipe_mask: Mask) -> Self {
        Self {
            ground: Ground::new(&config),
            spawn_timer: SpawnTimer::new(config.pipe_interval()),
            phase: Phase::Idle,
            bird,
            pipes: Vec::new(),
            score: 0,
            high_score: 0,
            pipe_mask,
            config,
        }
    }

    /// Begin a fresh run (used by both start and restart).
    pub fn start_run(&mut self) {
        self.bird.reset(&self.config);
        self.pipes.clear();
        self.score = 0;
        self.spawn_timer.reset();
        self.phase = Phase::Playing;
    }

    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }
}
