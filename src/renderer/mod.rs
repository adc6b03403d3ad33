//! Rendering
//!
//! The scene is drawn through the [`Surface`] trait, so the backend is
//! replaceable: a canvas 2D context in the browser, wgpu triangles, or a
//! recorded command list for headless runs and tests.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod commands;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use commands::{CommandList, DrawCommand};
pub use pipeline::RenderState;
pub use scene::draw_frame;

/// RGBA, each channel 0-1
pub type Color = [f32; 4];

/// Horizontal anchoring of text relative to its x coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// A 2D drawing target. Coordinates are surface units, origin top-left, y down.
pub trait Surface {
    /// Wipe the whole surface to the background
    fn clear(&mut self);

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Color);

    /// Draw `text` with its baseline at `y`, anchored at `x` per `align`
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color, align: TextAlign);
}
