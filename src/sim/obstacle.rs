//! Obstacle entities and their motion laws
//!
//! An obstacle's pose is a pure function of `now - spawn_time`: `update`
//! recomputes position and visibility from scratch on every call, so a given
//! clock sample always yields the same pose no matter how many frames ran in
//! between. Hit tests are pure predicates over the current pose.

use glam::Vec2;

use crate::consts::*;

/// Obstacle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Wave spray riding the surface on a cosine arc; dissolves after a while
    Spray,
    /// Pelican gliding across the top band; leaves over the left edge
    Pelican,
}

/// An obstacle the boat must clear
#[derive(Debug, Clone)]
pub struct Obstacle {
    kind: ObstacleKind,
    spawn_time: f64,
    pos: Vec2,
    visible: bool,
    /// Wing-flap frame (0 or 1), pelican only, purely cosmetic
    anim_index: usize,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, spawn_time: f64) -> Self {
        let mut obstacle = Self {
            kind,
            spawn_time,
            pos: Vec2::ZERO,
            visible: true,
            anim_index: 0,
        };
        obstacle.update(spawn_time);
        obstacle
    }

    pub fn kind(&self) -> ObstacleKind {
        self.kind
    }

    pub fn spawn_time(&self) -> f64 {
        self.spawn_time
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Once false the entity is eligible for culling
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn anim_index(&self) -> usize {
        self.anim_index
    }

    /// Recompute pose and visibility for the given clock sample.
    pub fn update(&mut self, now: f64) {
        let elapsed = now - self.spawn_time;
        match self.kind {
            ObstacleKind::Spray => {
                self.pos = Vec2::new(
                    (0.9 - f64::from(WAVE_SPEED) * elapsed) as f32,
                    (0.75 + 0.25 * (2.0 * elapsed).cos()) as f32,
                );
                self.visible = elapsed <= SPRAY_LIFETIME;
            }
            ObstacleKind::Pelican => {
                self.pos = Vec2::new((1.0 - f64::from(PELICAN_SPEED) * elapsed) as f32, 0.05);
                self.visible = self.pos.x >= -PELICAN_WIDTH;
                self.anim_index = (elapsed / PELICAN_ANIM_PERIOD) as usize % 2;
            }
        }
    }

    /// Collision test against the boat's fixed horizontal band.
    ///
    /// All comparisons are strict: touching a boundary exactly is not a hit.
    pub fn hit(&self, boat_y: f32) -> bool {
        match self.kind {
            // Overlap past the spray's half-width crest, with the boat hull
            // still below (greater y than) the crest
            ObstacleKind::Spray => {
                BOAT_POS_X + BOAT_WIDTH > self.pos.x + 0.5 * SPRAY_WIDTH
                    && BOAT_POS_X < self.pos.x + SPRAY_WIDTH
                    && boat_y > self.pos.y
            }
            // Horizontal overlap while the boat has jumped high enough to
            // reach the pelican's band
            ObstacleKind::Pelican => {
                BOAT_POS_X + BOAT_WIDTH > self.pos.x
                    && BOAT_POS_X < self.pos.x + PELICAN_WIDTH
                    && boat_y - 0.2 < self.pos.y + 0.2
            }
        }
    }
}
