//! Per-frame simulation advance
//!
//! One call per rendered frame. The step order inside a Playing frame is
//! fixed: boat physics, collision, cull, spawn, obstacle update. A collision
//! ends the frame immediately; the remaining steps do not run on that
//! sample. In GameOver the clock sample is ignored entirely, so obstacles
//! keep the pose they had when the run ended.

use super::spawn;
use super::state::{GamePhase, GameState};

/// Key state sampled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub jump: bool,
    pub retry: bool,
}

/// Advance the session by one frame at the given clock sample.
pub fn tick(state: &mut GameState, input: FrameInput, now: f64) {
    match state.phase {
        GamePhase::GameOver => {
            if input.retry {
                state.retry();
                log::info!("retry: starting a new run");
            }
        }
        GamePhase::Playing => {
            state.boat.advance(input.jump);

            let boat_y = state.boat.pos_y;
            if state.obstacles.iter().any(|o| o.hit(boat_y)) {
                state.phase = GamePhase::GameOver;
                log::info!("boat hit an obstacle, run over");
                return;
            }

            state.cull_expired();

            if let Some(kind) = spawn::maybe_spawn(state, now) {
                log::debug!("spawned {:?} at t={:.2}", kind, now);
            }

            for obstacle in &mut state.obstacles {
                obstacle.update(now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::{Obstacle, ObstacleKind};

    /// A spray parked right on top of the grounded boat
    fn colliding_spray() -> Obstacle {
        let mut spray = Obstacle::new(ObstacleKind::Spray, 0.0);
        spray.update(2.25); // x = 0.0, crest above the hull
        assert!(spray.hit(0.8));
        spray
    }

    #[test]
    fn test_hit_freezes_the_rest_of_the_frame() {
        let mut state = GameState::new(5);

        // An expired spray sits at the head; behind it, one that collides
        let mut expired = Obstacle::new(ObstacleKind::Spray, 0.0);
        expired.update(4.0);
        assert!(!expired.is_visible());
        state.obstacles.push_back(expired);
        state.obstacles.push_back(colliding_spray());

        let poses: Vec<_> = state.obstacles.iter().map(|o| o.pos()).collect();
        tick(&mut state, FrameInput::default(), 100.0);

        assert_eq!(state.phase, GamePhase::GameOver);
        // No cull, no spawn, no update happened on the collision frame
        assert_eq!(state.obstacles.len(), 2);
        let after: Vec<_> = state.obstacles.iter().map(|o| o.pos()).collect();
        assert_eq!(poses, after);
    }

    #[test]
    fn test_game_over_ignores_time_and_jump() {
        let mut state = GameState::new(5);
        state.obstacles.push_back(colliding_spray());
        state.phase = GamePhase::GameOver;

        let pose = state.obstacles[0].pos();
        tick(&mut state, FrameInput { jump: true, retry: false }, 1_000.0);

        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.boat.grounded);
        assert_eq!(state.obstacles[0].pos(), pose);
    }

    #[test]
    fn test_retry_restores_playing() {
        let mut state = GameState::new(5);
        state.obstacles.push_back(colliding_spray());
        tick(&mut state, FrameInput::default(), 3.0);
        assert_eq!(state.phase, GamePhase::GameOver);

        tick(&mut state, FrameInput { jump: false, retry: true }, 4.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.boat.pos_y, crate::consts::SEA_LEVEL);
        assert_eq!(state.boat.vel_y, 0.0);
    }

    #[test]
    fn test_playing_frame_spawns_when_due() {
        let mut state = GameState::new(5);
        tick(&mut state, FrameInput::default(), 5.0);

        // Empty queue means the spawner fires on the first frame
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].spawn_time(), 5.0);
    }

    #[test]
    fn test_playing_frame_culls_expired_obstacles() {
        let mut state = GameState::new(5);
        let mut expired = Obstacle::new(ObstacleKind::Pelican, 0.0);
        expired.update(10.0);
        assert!(!expired.is_visible());
        state.obstacles.push_back(expired);

        tick(&mut state, FrameInput::default(), 10.0);
        assert!(state.obstacles.iter().all(|o| o.is_visible()));
    }

    #[test]
    fn test_identical_runs_from_identical_seeds() {
        let mut a = GameState::new(777);
        let mut b = GameState::new(777);

        let mut now = 0.0;
        for frame in 0..600 {
            now += 1.0 / 60.0;
            let input = FrameInput {
                jump: frame % 90 == 0,
                retry: false,
            };
            tick(&mut a, input, now);
            tick(&mut b, input, now);
        }

        assert_eq!(a.phase, b.phase);
        assert_eq!(a.boat, b.boat);
        assert_eq!(a.obstacles.len(), b.obstacles.len());
        for (x, y) in a.obstacles.iter().zip(b.obstacles.iter()) {
            assert_eq!(x.kind(), y.kind());
            assert_eq!(x.spawn_time(), y.spawn_time());
            assert_eq!(x.pos(), y.pos());
        }
    }
}
