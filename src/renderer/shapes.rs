//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};

/// Segments used for ball, powerup and life markers
pub const CIRCLE_SEGMENTS: u32 = 16;

/// Spacing between life markers, and their distance from the top-right corner
const LIFE_SPACING: f32 = 15.0;
const LIFE_INSET: f32 = 20.0;
const LIFE_RADIUS: f32 = 5.0;

/// Generate vertices for an axis-aligned rectangle centered on `center`
pub fn quad(center: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let half = size / 2.0;
    let min = center - half;
    let max = center + half;

    vec![
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, min.y, color),
        Vertex::new(min.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
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

/// Center of the `index`-th life marker, counting leftward from the
/// top-right corner
pub fn life_marker_position(index: u32, half_extents: Vec2) -> Vec2 {
    Vec2::new(
        half_extents.x - LIFE_INSET - LIFE_SPACING * index as f32,
        half_extents.y - LIFE_INSET,
    )
}

/// One dot per remaining life
pub fn lives_indicator(lives: u32, half_extents: Vec2) -> Vec<Vertex> {
    (0..lives)
        .flat_map(|i| {
            circle(
                life_marker_position(i, half_extents),
                LIFE_RADIUS,
                colors::LIFE,
                CIRCLE_SEGMENTS,
            )
        })
        .collect()
}
