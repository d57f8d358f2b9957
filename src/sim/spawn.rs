//! Randomized obstacle scheduling
//!
//! The spawner is the only code that touches the session RNG: one coin flip
//! per spawn for the variant, one uniform draw for the next gap.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;

use super::obstacle::{Obstacle, ObstacleKind};
use super::state::GameState;

/// Append a new obstacle at the queue tail when one is due.
///
/// An obstacle is due when the queue is empty or the newest entry is older
/// than the gap in force. The variant is a fair coin flip, and a fresh gap
/// is drawn after every spawn. Returns the spawned variant.
pub fn maybe_spawn(state: &mut GameState, now: f64) -> Option<ObstacleKind> {
    let due = match state.obstacles.back() {
        None => true,
        Some(last) => now > last.spawn_time() + state.spawn_interval,
    };
    if !due {
        return None;
    }

    let kind = if state.rng.random::<bool>() {
        ObstacleKind::Spray
    } else {
        ObstacleKind::Pelican
    };
    state.obstacles.push_back(Obstacle::new(kind, now));
    state.spawn_interval = draw_interval(&mut state.rng);
    Some(kind)
}

/// Draw the next spawn gap, uniform over [1, 3) seconds
pub(crate) fn draw_interval(rng: &mut Pcg32) -> f64 {
    rng.random_range(SPAWN_INTERVAL_MIN..SPAWN_INTERVAL_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_queue_spawns_immediately() {
        let mut state = GameState::new(1);
        let spawned = maybe_spawn(&mut state, 5.0);

        assert!(spawned.is_some());
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles.back().unwrap().spawn_time(), 5.0);
    }

    #[test]
    fn test_no_spawn_until_gap_elapses() {
        let mut state = GameState::new(1);
        maybe_spawn(&mut state, 5.0);
        let gap = state.spawn_interval;

        // Exactly at the boundary: not yet due (the comparison is strict)
        assert!(maybe_spawn(&mut state, 5.0 + gap).is_none());
        assert_eq!(state.obstacles.len(), 1);

        assert!(maybe_spawn(&mut state, 5.0 + gap + 0.001).is_some());
        assert_eq!(state.obstacles.len(), 2);
    }

    #[test]
    fn test_spawn_gaps_respect_drawn_intervals() {
        let mut state = GameState::new(99);
        let mut now = 0.0;
        let mut last_spawn: Option<(f64, f64)> = None; // (spawn time, gap in force)

        for _ in 0..2_000 {
            now += 0.016;
            let gap_in_force = state.spawn_interval;
            if maybe_spawn(&mut state, now).is_some() {
                if let Some((prev_time, prev_gap)) = last_spawn {
                    assert!(now - prev_time >= prev_gap);
                }
                last_spawn = Some((now, gap_in_force));
            }
        }

        assert!(state.obstacles.len() > 5, "expected several spawns");
    }

    #[test]
    fn test_both_variants_appear() {
        let mut state = GameState::new(3);
        let mut sprays = 0;
        let mut pelicans = 0;
        let mut now = 0.0;

        for _ in 0..50 {
            now += 3.1;
            match maybe_spawn(&mut state, now) {
                Some(ObstacleKind::Spray) => sprays += 1,
                Some(ObstacleKind::Pelican) => pelicans += 1,
                None => {}
            }
        }

        assert!(sprays > 0);
        assert!(pelicans > 0);
    }

    proptest! {
        #[test]
        fn drawn_intervals_stay_in_range(seed in any::<u64>()) {
            let mut state = GameState::new(seed);
            prop_assert!((SPAWN_INTERVAL_MIN..SPAWN_INTERVAL_MAX).contains(&state.spawn_interval));

            let mut now = 0.0;
            for _ in 0..50 {
                now += SPAWN_INTERVAL_MAX + 0.1;
                maybe_spawn(&mut state, now);
                prop_assert!(
                    (SPAWN_INTERVAL_MIN..SPAWN_INTERVAL_MAX).contains(&state.spawn_interval)
                );
            }
        }
    }
}
