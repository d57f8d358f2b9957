//! Compiled-in sprite images and host-side quad expansion
//!
//! The crate ships no image assets: every sprite is a char-grid stencil with
//! a palette lookup, expanded into colored quads when the frame's vertex
//! list is built. Callers only deal in opaque image handles plus a top-left
//! position and an on-screen size; the grid resolution just sets how blocky
//! the art looks.

use glam::Vec2;

use super::vertex::{Vertex, colors};

/// Opaque handle for a drawable image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteImage {
    WaveBase,
    Boat,
    Spray,
    /// Pelican, wings level
    Pelican0,
    /// Pelican, wings raised
    Pelican1,
    GameOver,
}

const WAVE_BASE: &[&str] = &[
    "f..ff..f..ff..f..ff..f..ff..f..f",
    "ffffffffffffffffffffffffffffffff",
    "ssssssssssssssssssssssssssssssss",
    "ssssssssssssssssssssssssssssssss",
    "dddddddddddddddddddddddddddddddd",
    "dddddddddddddddddddddddddddddddd",
];

const BOAT: &[&str] = &[
    ".....m....",
    ".....m....",
    "....wm....",
    "...wwm....",
    "..wwwm....",
    ".wwwwm....",
    ".wwwwm....",
    "wwwwwm....",
    "wwwwwm.ww.",
    "wwwwwmwww.",
    ".wwwwmwww.",
    "..wwwmww..",
    "...wwmw...",
    ".....m....",
    ".....m....",
    "hhhhhhhhhh",
    "khhhhhhhhk",
    ".khhhhhhk.",
    "..khhhhk..",
    "..........",
];

const SPRAY: &[&str] = &[
    "....yccy....",
    "...yccccy...",
    "..yccccccy..",
    ".yccccccccy.",
    ".yccccccccy.",
    "yccccccccccy",
    "yccccccccccy",
    ".yccccccccy.",
    ".yccccccccy.",
    "..yccccccy..",
    "...yccccy...",
    "....yccy....",
];

const PELICAN_0: &[&str] = &[
    "............",
    "....gggg....",
    "..gggggggg..",
    ".obbbbbbbbb.",
    "oobbbbbbbbb.",
    ".o.bbbbbb...",
    "............",
    "............",
];

const PELICAN_1: &[&str] = &[
    "..gg....gg..",
    ".gggg..gggg.",
    ".gggg..gggg.",
    "..gggggggg..",
    ".obbbbbbbbb.",
    "oobbbbbbbbb.",
    ".o.bbbbbb...",
    "............",
    "............",
    "............",
    "............",
    "............",
];

const GAME_OVER: &[&str] = &[
    "eeeeeeeeeeeeeeeeeee",
    "ennnnnnnnnnnnnnnnne",
    "entttntttntntntttne",
    "entnnntntntttntnnne",
    "entntntttntntnttnne",
    "entntntntntntntnnne",
    "entttntntntntntttne",
    "ennnnnnnnnnnnnnnnne",
    "entttntntntttntttne",
    "entntntntntnnntntne",
    "entntntntnttnnttnne",
    "entntntntntnnntntne",
    "entttnntnntttntntne",
    "ennnnnnnnnnnnnnnnne",
    "eeeeeeeeeeeeeeeeeee",
];

fn cell_color(cell: u8) -> Option<[f32; 4]> {
    match cell {
        b'.' => None,
        b'f' => Some(colors::FOAM),
        b's' => Some(colors::SEA),
        b'd' => Some(colors::SEA_DEEP),
        b'h' => Some(colors::HULL),
        b'k' => Some(colors::HULL_DARK),
        b'w' => Some(colors::SAIL),
        b'm' => Some(colors::MAST),
        b'c' => Some(colors::SPRAY_CORE),
        b'y' => Some(colors::SPRAY_MIST),
        b'b' => Some(colors::PELICAN_BODY),
        b'g' => Some(colors::PELICAN_WING),
        b'o' => Some(colors::PELICAN_BEAK),
        b'n' => Some(colors::BANNER),
        b'e' => Some(colors::BANNER_EDGE),
        b't' => Some(colors::BANNER_TEXT),
        other => unreachable!("unknown palette cell {:?}", other as char),
    }
}

impl SpriteImage {
    fn rows(self) -> &'static [&'static str] {
        match self {
            SpriteImage::WaveBase => WAVE_BASE,
            SpriteImage::Boat => BOAT,
            SpriteImage::Spray => SPRAY,
            SpriteImage::Pelican0 => PELICAN_0,
            SpriteImage::Pelican1 => PELICAN_1,
            SpriteImage::GameOver => GAME_OVER,
        }
    }

    /// Canonical on-screen size in normalized units
    pub fn size(self) -> Vec2 {
        match self {
            SpriteImage::WaveBase => Vec2::new(1.0, 0.3),
            SpriteImage::Boat => Vec2::new(0.2, 0.4),
            SpriteImage::Spray => Vec2::new(0.4, 0.5),
            SpriteImage::Pelican0 => Vec2::new(0.2, 0.2),
            SpriteImage::Pelican1 => Vec2::new(0.2, 0.33),
            SpriteImage::GameOver => Vec2::new(0.5, 0.5),
        }
    }
}

/// Append one sprite to the frame's vertex list as colored quads.
///
/// `pos` is the sprite's top-left corner. Horizontal runs of same-colored
/// cells collapse into a single quad to keep the vertex count down.
pub fn draw_sprite(vertices: &mut Vec<Vertex>, image: SpriteImage, pos: Vec2, size: Vec2) {
    let rows = image.rows();
    let cell = Vec2::new(
        size.x / rows[0].len() as f32,
        size.y / rows.len() as f32,
    );

    for (j, row) in rows.iter().enumerate() {
        let y = pos.y + j as f32 * cell.y;
        let mut run: Option<(usize, usize, [f32; 4])> = None; // (start, len, color)

        for (i, &c) in row.as_bytes().iter().enumerate() {
            let color = cell_color(c);
            match (&mut run, color) {
                (Some((_, len, run_color)), Some(color)) if color == *run_color => *len += 1,
                (current, color) => {
                    if let Some((start, len, run_color)) = current.take() {
                        push_run(vertices, pos.x, y, cell, start, len, run_color);
                    }
                    *current = color.map(|color| (i, 1, color));
                }
            }
        }
        if let Some((start, len, run_color)) = run {
            push_run(vertices, pos.x, y, cell, start, len, run_color);
        }
    }
}

fn push_run(
    vertices: &mut Vec<Vertex>,
    origin_x: f32,
    y: f32,
    cell: Vec2,
    start: usize,
    len: usize,
    color: [f32; 4],
) {
    let min_x = origin_x + start as f32 * cell.x;
    let max_x = min_x + len as f32 * cell.x;
    let max_y = y + cell.y;

    vertices.push(Vertex::new(min_x, y, color));
    vertices.push(Vertex::new(max_x, y, color));
    vertices.push(Vertex::new(min_x, max_y, color));

    vertices.push(Vertex::new(max_x, y, color));
    vertices.push(Vertex::new(max_x, max_y, color));
    vertices.push(Vertex::new(min_x, max_y, color));
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [SpriteImage; 6] = [
        SpriteImage::WaveBase,
        SpriteImage::Boat,
        SpriteImage::Spray,
        SpriteImage::Pelican0,
        SpriteImage::Pelican1,
        SpriteImage::GameOver,
    ];

    #[test]
    fn test_stencils_are_rectangular_with_known_cells() {
        for image in ALL {
            let rows = image.rows();
            assert!(!rows.is_empty());
            let width = rows[0].len();
            for row in rows {
                assert_eq!(row.len(), width, "{image:?} has a ragged row");
                for &c in row.as_bytes() {
                    // Panics via unreachable! on an unknown palette char
                    let _ = cell_color(c);
                }
            }
        }
    }

    #[test]
    fn test_quads_stay_inside_the_sprite_rect() {
        for image in ALL {
            let pos = Vec2::new(0.25, 0.5);
            let size = image.size();
            let mut vertices = Vec::new();
            draw_sprite(&mut vertices, image, pos, size);

            assert!(!vertices.is_empty());
            assert_eq!(vertices.len() % 6, 0);
            for v in &vertices {
                assert!(v.position[0] >= pos.x - 1e-5 && v.position[0] <= pos.x + size.x + 1e-5);
                assert!(v.position[1] >= pos.y - 1e-5 && v.position[1] <= pos.y + size.y + 1e-5);
            }
        }
    }
}
