//! Frame composition: read-only game state in, vertex list out
//!
//! Drawing happens every frame regardless of phase. The clock passed here is
//! the last simulated sample, so the whole scene freezes on game over.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{GamePhase, GameState, ObstacleKind};
use crate::{wave_bob, wave_scroll};

use super::sprites::{self, SpriteImage};
use super::vertex::Vertex;

/// Build the vertex list for one frame.
pub fn build(state: &GameState, time: f64) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    let bob = wave_bob(time);
    let scroll = wave_scroll(time);

    // Two wave tiles cover the screen at any scroll offset
    for i in 0..2 {
        sprites::draw_sprite(
            &mut vertices,
            SpriteImage::WaveBase,
            Vec2::new(scroll + i as f32, SEA_LEVEL + bob),
            SpriteImage::WaveBase.size(),
        );
    }

    // The boat sprite is anchored 0.3 above the physics position and bobs
    // with the wave
    sprites::draw_sprite(
        &mut vertices,
        SpriteImage::Boat,
        Vec2::new(BOAT_POS_X, state.boat.pos_y - 0.3 + bob),
        SpriteImage::Boat.size(),
    );

    for obstacle in &state.obstacles {
        let image = match obstacle.kind() {
            ObstacleKind::Spray => SpriteImage::Spray,
            ObstacleKind::Pelican => match obstacle.anim_index() {
                0 => SpriteImage::Pelican0,
                _ => SpriteImage::Pelican1,
            },
        };
        sprites::draw_sprite(&mut vertices, image, obstacle.pos(), image.size());
    }

    if state.phase == GamePhase::GameOver {
        let size = SpriteImage::GameOver.size();
        let pos = (Vec2::ONE - size) / 2.0;
        sprites::draw_sprite(&mut vertices, SpriteImage::GameOver, pos, size);
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_over_banner_only_when_over() {
        let mut state = GameState::new(11);
        let playing_count = build(&state, 1.0).len();

        state.phase = GamePhase::GameOver;
        let over_count = build(&state, 1.0).len();

        assert!(over_count > playing_count);
    }
}
