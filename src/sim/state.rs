//! Game state and core simulation types
//!
//! A session owns the boat, the live obstacle queue, and the spawner's RNG.
//! Everything here mutates synchronously inside one frame's pass.

use std::collections::VecDeque;

use rand_pcg::Pcg32;

use crate::consts::*;

use super::obstacle::Obstacle;
use super::spawn::draw_interval;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; only the retry key does anything
    GameOver,
}

/// The player's boat
///
/// Vertical axis only: the boat never moves sideways. y grows downward, so a
/// jump pushes `vel_y` negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boat {
    pub pos_y: f32,
    pub vel_y: f32,
    /// Pinned to the water line; no integration happens while set
    pub grounded: bool,
}

impl Default for Boat {
    fn default() -> Self {
        Self {
            pos_y: SEA_LEVEL,
            vel_y: 0.0,
            grounded: true,
        }
    }
}

impl Boat {
    /// Advance one physics step.
    ///
    /// Exactly one branch runs per step: the impulse frame only sets
    /// velocity, the landing frame snaps back to the water line, and
    /// airborne frames apply a fixed Euler step. Gravity is per frame, not
    /// per second, so jump height tracks the host's frame cadence.
    pub fn advance(&mut self, jump_requested: bool) {
        if self.grounded {
            if jump_requested {
                self.vel_y -= JUMP_IMPULSE;
                self.grounded = false;
            }
        } else if self.pos_y > SEA_LEVEL {
            self.grounded = true;
            self.pos_y = SEA_LEVEL;
            self.vel_y = 0.0;
        } else {
            self.pos_y += self.vel_y;
            self.vel_y += GRAVITY;
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed, kept for logging
    pub seed: u64,
    pub phase: GamePhase,
    pub boat: Boat,
    /// Live obstacles, oldest at the head; spawn times never decrease
    /// toward the tail
    pub obstacles: VecDeque<Obstacle>,
    /// Gap required after the newest obstacle before the next spawn
    pub spawn_interval: f64,
    /// Spawner RNG; the only consumer of randomness in the simulation
    pub rng: Pcg32,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;

        let mut rng = Pcg32::seed_from_u64(seed);
        let spawn_interval = draw_interval(&mut rng);
        Self {
            seed,
            phase: GamePhase::Playing,
            boat: Boat::default(),
            obstacles: VecDeque::new(),
            spawn_interval,
            rng,
        }
    }

    /// Restart after a game over: fresh boat, empty queue, fresh gap draw.
    ///
    /// The RNG keeps its position in the stream across retries.
    pub fn retry(&mut self) {
        self.phase = GamePhase::Playing;
        self.boat = Boat::default();
        self.obstacles.clear();
        self.spawn_interval = draw_interval(&mut self.rng);
    }

    /// Drop expired obstacles from the head of the queue.
    ///
    /// Obstacles expire in spawn order (their motion laws are monotonic in
    /// elapsed time), so culling stops at the first visible entry and never
    /// looks past it.
    pub fn cull_expired(&mut self) {
        while self.obstacles.front().is_some_and(|o| !o.is_visible()) {
            self.obstacles.pop_front();
        }
    }
}
