//! Shape generation for 2D primitives
//!
//! Turns recorded draw commands into triangle lists. Text is limited to what
//! the scoreboard needs: digits and '-' as seven-segment bars.

use glam::Vec2;
use std::f32::consts::PI;

use super::commands::DrawCommand;
use super::vertex::Vertex;
use super::{Color, TextAlign};

/// Triangles per circle
const CIRCLE_SEGMENTS: u32 = 24;

/// Glyph proportions relative to the font size
const GLYPH_HEIGHT: f32 = 0.72;
const GLYPH_WIDTH: f32 = 0.4;
const GLYPH_STROKE: f32 = 0.08;
const GLYPH_ADVANCE: f32 = 0.55;

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(x: f32, y: f32, w: f32, h: f32, color: Color) -> Vec<Vertex> {
    let (x2, y2) = (x + w, y + h);
    vec![
        Vertex::new(x, y, color),
        Vertex::new(x2, y, color),
        Vertex::new(x, y2, color),
        Vertex::new(x, y2, color),
        Vertex::new(x2, y, color),
        Vertex::new(x2, y2, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Lit segments for a character, bits a-g (top, top-right, bottom-right,
/// bottom, bottom-left, top-left, middle)
fn segments_for(ch: char) -> Option<u8> {
    let bits = match ch {
        '0' => 0b0111111,
        '1' => 0b0000110,
        '2' => 0b1011011,
        '3' => 0b1001111,
        '4' => 0b1100110,
        '5' => 0b1101101,
        '6' => 0b1111101,
        '7' => 0b0000111,
        '8' => 0b1111111,
        '9' => 0b1101111,
        '-' => 0b1000000,
        _ => return None,
    };
    Some(bits)
}

/// Seven-segment glyph with its baseline-left corner at (x, baseline)
fn glyph(ch: char, x: f32, baseline: f32, size: f32, color: Color) -> Vec<Vertex> {
    let Some(bits) = segments_for(ch) else {
        return Vec::new();
    };
    let h = size * GLYPH_HEIGHT;
    let w = size * GLYPH_WIDTH;
    let t = size * GLYPH_STROKE;
    let top = baseline - h;
    let mid = top + (h - t) / 2.0;
    let half = (h + t) / 2.0;

    // (x, y, w, h) per segment, in bit order
    let bars = [
        (x, top, w, t),
        (x + w - t, top, t, half),
        (x + w - t, mid, t, half),
        (x, baseline - t, w, t),
        (x, mid, t, half),
        (x, top, t, half),
        (x, mid, w, t),
    ];

    bars.iter()
        .enumerate()
        .filter(|(i, _)| bits & (1 << i) != 0)
        .flat_map(|(_, &(bx, by, bw, bh))| rect(bx, by, bw, bh, color))
        .collect()
}

/// Width a string occupies when drawn as glyphs
pub fn text_width(text: &str, size: f32) -> f32 {
    let n = text.chars().count();
    if n == 0 {
        return 0.0;
    }
    (n - 1) as f32 * size * GLYPH_ADVANCE + size * GLYPH_WIDTH
}

/// Generate vertices for a line of seven-segment text
pub fn text(text: &str, x: f32, baseline: f32, size: f32, color: Color, align: TextAlign) -> Vec<Vertex> {
    let width = text_width(text, size);
    let start = match align {
        TextAlign::Left => x,
        TextAlign::Center => x - width / 2.0,
        TextAlign::Right => x - width,
    };

    text.chars()
        .enumerate()
        .flat_map(|(i, ch)| glyph(ch, start + i as f32 * size * GLYPH_ADVANCE, baseline, size, color))
        .collect()
}

/// Tessellate a frame's commands into one triangle list
pub fn tessellate(commands: &[DrawCommand]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for command in commands {
        match command {
            DrawCommand::Rect { x, y, w, h, color } => {
                vertices.extend(rect(*x, *y, *w, *h, *color));
            }
            DrawCommand::Circle { cx, cy, r, color } => {
                vertices.extend(circle(Vec2::new(*cx, *cy), *r, *color, CIRCLE_SEGMENTS));
            }
            DrawCommand::Text {
                text: value,
                x,
                y,
                size,
                color,
                align,
            } => {
                vertices.extend(text(value, *x, *y, *size, *color, *align));
            }
        }
    }
    vertices
}
