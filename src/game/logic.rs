//! Game logic: input handling, the per-tick update, collision and scoring.

use super::pipes::{update_pipes, PipePair};
use super::session::{Collision, GameInput, GameSession, InputOutcome, Phase, TickResult};
use rand::Rng;
use std::time::Duration;

/// Apply one input event to the session.
pub fn process_input(session: &mut GameSession, input: GameInput) -> InputOutcome {
    match input {
        GameInput::Quit => return InputOutcome::Quit,
        GameInput::Other => {}
        GameInput::Action => match session.phase {
            Phase::Idle | Phase::GameOver => session.start_run(),
            Phase::Playing => session.bird.flap(&session.config),
        },
    }
    InputOutcome::Continue
}

/// Advance the simulation by one tick.
///
/// `elapsed` is the wall-clock time since the previous tick and only drives
/// the pipe spawn timer; movement is per tick. Does nothing unless playing.
pub fn process_tick<R: Rng>(
    session: &mut GameSession,
    elapsed: Duration,
    rng: &mut R,
) -> TickResult {
    let mut result = TickResult::default();
    if !session.is_playing() {
        return result;
    }

    if session.spawn_timer.advance(elapsed) {
        session.pipes.push(PipePair::spawn(&session.config, rng));
        result.spawned_pipe = true;
    }

    session.bird.update(&session.config);
    update_pipes(&mut session.pipes, &session.config);
    session.ground.update(&session.config);

    result.points_scored = update_score(session);

    if let Some(collision) = check_collision(session) {
        end_run(session, collision);
        result.collision = Some(collision);
    }

    result
}

/// Detect a crash into a pipe segment or the ground.
pub fn check_collision(session: &GameSession) -> Option<Collision> {
    let pixel_precise = session.config.pixel_collision;
    let bird = &session.bird;
    let tile = &session.pipe_mask;
    let hit_pipe = session.pipes.iter().any(|pair| {
        pair.segments().iter().any(|segment| {
            bird.collides_with(segment, pixel_precise, |x, y| pair.is_solid_at(tile, x, y))
        })
    });
    if hit_pipe {
        return Some(Collision::Pipe);
    }
    if bird.rect().bottom() >= session.ground.y {
        return Some(Collision::Ground);
    }
    None
}

/// Credit one point per pair whose right edge has passed the bird's left
/// edge. Returns the number of points added.
pub fn update_score(session: &mut GameSession) -> u32 {
    let bird_left = session.bird.rect().left();
    let mut points = 0;
    for pair in session.pipes.iter_mut() {
        if !pair.passed && pair.right() < bird_left {
            pair.passed = true;
            points += 1;
        }
    }
    session.score += points;
    points
}

fn end_run(session: &mut GameSession, collision: Collision) {
    session.phase = Phase::GameOver;
    if session.bird.rect().bottom() >= session.ground.y {
        session.bird.set_bottom(session.ground.y);
        session.bird.velocity_y = 0.0;
    }
    session.high_score = session.high_score.max(session.score);
    log::debug!(
        "run ended by {:?} with score {} (high score {})",
        collision,
        session.score,
        session.high_score
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::game::Mask;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const FRAME: Duration = Duration::from_millis(16);

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    fn playing_session() -> GameSession {
        let mut session = GameSession::new(GameConfig::default());
        process_input(&mut session, GameInput::Action);
        session
    }

    #[test]
    fn test_action_starts_from_idle() {
        let mut session = GameSession::new(GameConfig::default());
        assert_eq!(session.phase, Phase::Idle);
        assert_eq!(process_input(&mut session, GameInput::Action), InputOutcome::Continue);
        assert_eq!(session.phase, Phase::Playing);
        assert_eq!(session.score, 0);
        assert!(session.pipes.is_empty());
    }

    #[test]
    fn test_action_while_playing_flaps() {
        let mut session = playing_session();
        process_input(&mut session, GameInput::Action);
        assert_eq!(session.phase, Phase::Playing);
        assert_eq!(session.bird.velocity_y, session.config.flap_velocity);
        assert_eq!(session.bird.rotation, session.config.max_upward_rotation);
    }

    #[test]
    fn test_quit_from_every_phase() {
        let mut session = GameSession::new(GameConfig::default());
        for phase in [Phase::Idle, Phase::Playing, Phase::GameOver] {
            session.phase = phase;
            assert_eq!(process_input(&mut session, GameInput::Quit), InputOutcome::Quit);
            assert_eq!(session.phase, phase);
        }
    }

    #[test]
    fn test_other_input_is_ignored() {
        let mut session = GameSession::new(GameConfig::default());
        process_input(&mut session, GameInput::Other);
        assert_eq!(session.phase, Phase::Idle);
    }

    #[test]
    fn test_no_tick_when_idle() {
        let mut session = GameSession::new(GameConfig::default());
        let mut rng = create_test_rng();
        let initial_y = session.bird.y;
        for _ in 0..200 {
            assert_eq!(process_tick(&mut session, FRAME, &mut rng), TickResult::default());
        }
        assert_eq!(session.bird.y, initial_y);
        assert!(session.pipes.is_empty());
        assert_eq!(session.spawn_timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_gravity_pulls_bird_down() {
        let mut session = playing_session();
        let mut rng = create_test_rng();
        let initial_y = session.bird.y;
        process_tick(&mut session, FRAME, &mut rng);
        assert!(session.bird.y > initial_y);
        assert_eq!(session.bird.velocity_y, session.config.gravity);
    }

    #[test]
    fn test_ground_collision_ends_run_and_settles_bird() {
        let mut session = playing_session();
        let mut rng = create_test_rng();
        session.bird.y = session.ground.y - 5.0;
        session.bird.velocity_y = 8.0;
        let result = process_tick(&mut session, FRAME, &mut rng);
        assert_eq!(result.collision, Some(Collision::Ground));
        assert_eq!(session.phase, Phase::GameOver);
        assert_eq!(session.bird.rect().bottom(), session.ground.y);
        assert_eq!(session.bird.velocity_y, 0.0);
    }

    #[test]
    fn test_pipe_collision_ends_run() {
        let mut session = playing_session();
        // Gap far below the bird, pair right on top of it.
        session
            .pipes
            .push(PipePair::new(&session.config, session.config.bird_x - 10.0, 450));
        assert_eq!(check_collision(&session), Some(Collision::Pipe));

        let mut rng = create_test_rng();
        let result = process_tick(&mut session, FRAME, &mut rng);
        assert_eq!(result.collision, Some(Collision::Pipe));
        assert_eq!(session.phase, Phase::GameOver);
    }

    #[test]
    fn test_no_collision_inside_gap() {
        let mut session = playing_session();
        // Bird spans y 344..368; gap spans 300..430.
        session
            .pipes
            .push(PipePair::new(&session.config, session.config.bird_x - 10.0, 300));
        assert_eq!(check_collision(&session), None);
    }

    #[test]
    fn test_rect_collision_mode() {
        let config = GameConfig {
            pixel_collision: false,
            ..Default::default()
        };
        let mut session = GameSession::new(config);
        process_input(&mut session, GameInput::Action);
        session
            .pipes
            .push(PipePair::new(&session.config, session.config.bird_x - 10.0, 450));
        assert_eq!(check_collision(&session), Some(Collision::Pipe));
    }

    #[test]
    fn test_transparent_pipe_edge_does_not_collide() {
        let config = GameConfig::default();
        // Tile opaque only in its middle 80%, like the shipped pipe art.
        let tile = Mask::from_fn(52, 320, |u, _| (0.1..0.9).contains(&u));
        let bird_mask = Mask::solid(34, 24);
        let mut session = GameSession::with_masks(config, bird_mask, tile);
        process_input(&mut session, GameInput::Action);
        let bird_right = session.bird.rect().right();

        // Bird overlaps the pipe's first 3 units, all transparent.
        session.pipes.push(PipePair::new(&session.config, bird_right - 3.0, 500));
        assert_eq!(check_collision(&session), None);

        session.config.pixel_collision = false;
        assert_eq!(check_collision(&session), Some(Collision::Pipe));

        // Reaching the opaque shaft is a hit.
        session.config.pixel_collision = true;
        session.pipes[0].x = bird_right - 7.0;
        assert_eq!(check_collision(&session), Some(Collision::Pipe));
    }

    #[test]
    fn test_pass_and_crash_on_same_tick_both_count() {
        let mut session = playing_session();
        let mut rng = create_test_rng();
        session.score = 2;
        session.high_score = 2;
        let bird_left = session.bird.rect().left();
        // Right edge lands 1 unit past the bird's left edge after scrolling.
        session
            .pipes
            .push(PipePair::new(&session.config, bird_left - 52.0 + 1.0, 300));
        session.bird.y = session.ground.y - 5.0;
        session.bird.velocity_y = 8.0;

        let result = process_tick(&mut session, FRAME, &mut rng);
        assert_eq!(result.points_scored, 1);
        assert_eq!(result.collision, Some(Collision::Ground));
        assert_eq!(session.score, 3);
        assert_eq!(session.high_score, 3);
    }

    #[test]
    fn test_score_counts_pair_once() {
        let mut session = playing_session();
        let bird_left = session.bird.rect().left();
        session
            .pipes
            .push(PipePair::new(&session.config, bird_left - 53.0, 300));
        assert_eq!(update_score(&mut session), 1);
        assert_eq!(update_score(&mut session), 0);
        assert_eq!(session.score, 1);
        assert!(session.pipes[0].passed);
    }

    #[test]
    fn test_score_waits_for_right_edge() {
        let mut session = playing_session();
        let bird_left = session.bird.rect().left();
        // Right edge exactly on the bird's left edge: not yet past.
        session
            .pipes
            .push(PipePair::new(&session.config, bird_left - 52.0, 300));
        assert_eq!(update_score(&mut session), 0);
    }

    #[test]
    fn test_high_score_keeps_maximum() {
        let mut session = playing_session();
        let mut rng = create_test_rng();
        session.high_score = 5;
        session.score = 3;
        session.bird.y = session.ground.y;
        process_tick(&mut session, FRAME, &mut rng);
        assert_eq!(session.phase, Phase::GameOver);
        assert_eq!(session.high_score, 5);

        process_input(&mut session, GameInput::Action);
        session.score = 8;
        session.bird.y = session.ground.y;
        process_tick(&mut session, FRAME, &mut rng);
        assert_eq!(session.high_score, 8);
    }

    #[test]
    fn test_restart_resets_run_but_not_high_score() {
        let mut session = playing_session();
        let mut rng = create_test_rng();
        session.score = 4;
        session.pipes.push(PipePair::new(&session.config, 200.0, 200));
        session.bird.y = session.ground.y;
        process_tick(&mut session, FRAME, &mut rng);
        assert_eq!(session.phase, Phase::GameOver);

        process_input(&mut session, GameInput::Action);
        assert_eq!(session.phase, Phase::Playing);
        assert_eq!(session.score, 0);
        assert_eq!(session.high_score, 4);
        assert!(session.pipes.is_empty());
        assert_eq!(session.bird.y, session.config.bird_start_y);
        assert_eq!(session.bird.velocity_y, 0.0);
        assert_eq!(session.bird.rotation, 0.0);
        assert_eq!(session.spawn_timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_game_over_freezes_simulation() {
        let mut session = playing_session();
        let mut rng = create_test_rng();
        session.phase = Phase::GameOver;
        let y = session.bird.y;
        let ground = session.ground.clone();
        process_tick(&mut session, Duration::from_secs(10), &mut rng);
        assert_eq!(session.bird.y, y);
        assert_eq!(session.ground, ground);
        assert!(session.pipes.is_empty());
    }
}
