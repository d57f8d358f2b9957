//! WebGPU sprite rendering
//!
//! Everything here consumes read-only simulation state; nothing mutates
//! gameplay. One pipeline, one vertex buffer rebuilt per frame, one draw.

pub mod pipeline;
pub mod scene;
pub mod sprites;
pub mod vertex;

pub use pipeline::RenderState;
pub use sprites::{SpriteImage, draw_sprite};
pub use vertex::Vertex;
