//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors, mix};
use super::{CoinSprite, Frame};

/// Segments used for coin circles
pub const COIN_SEGMENTS: u32 = 32;

/// Glow ring width beyond the coin rim
const GLOW_WIDTH: f32 = 7.5;

/// Highlight offset from the coin center, before rotation
const HIGHLIGHT_OFFSET: Vec2 = Vec2::new(-5.0, -5.0);

fn on_circle(center: Vec2, radius: f32, theta: f32) -> Vec2 {
    Vec2::new(center.x + radius * theta.cos(), center.y + radius * theta.sin())
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let p1 = on_circle(center, radius, theta1);
        let p2 = on_circle(center, radius, theta2);

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Generate vertices for a ring whose color fades from inner to outer edge
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    inner_color: [f32; 4],
    outer_color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let inner1 = on_circle(center, inner_radius, theta1);
        let outer1 = on_circle(center, outer_radius, theta1);
        let inner2 = on_circle(center, inner_radius, theta2);
        let outer2 = on_circle(center, outer_radius, theta2);

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, inner_color));
        vertices.push(Vertex::new(outer1.x, outer1.y, outer_color));
        vertices.push(Vertex::new(inner2.x, inner2.y, inner_color));

        vertices.push(Vertex::new(inner2.x, inner2.y, inner_color));
        vertices.push(Vertex::new(outer1.x, outer1.y, outer_color));
        vertices.push(Vertex::new(outer2.x, outer2.y, outer_color));
    }

    vertices
}

/// Filled circle with a radial gradient.
///
/// `stops` are `(fraction of radius, color)` pairs in increasing order; the
/// first stop is expected at 0.0 and the last at 1.0.
pub fn radial_circle(center: Vec2, radius: f32, stops: &[(f32, [f32; 4])], segments: u32) -> Vec<Vertex> {
    let Some(&first) = stops.first() else {
        return Vec::new();
    };

    let mut vertices = Vec::new();
    let mut inner = first;
    for &(t, color) in stops.iter().skip(1) {
        vertices.extend(ring(center, radius * inner.0, radius * t, inner.1, color, segments));
        inner = (t, color);
    }
    vertices
}

/// Full-field rectangle with a diagonal two-color gradient
pub fn gradient_rect(size: Vec2, from: [f32; 4], to: [f32; 4]) -> Vec<Vertex> {
    let top_left = Vertex::new(0.0, 0.0, from);
    let top_right = Vertex::new(size.x, 0.0, mix(from, to, 0.5));
    let bottom_left = Vertex::new(0.0, size.y, mix(from, to, 0.5));
    let bottom_right = Vertex::new(size.x, size.y, to);

    vec![
        top_left,
        top_right,
        bottom_left,
        bottom_left,
        top_right,
        bottom_right,
    ]
}

/// Glow, gradient body and rotating highlight for one coin
pub fn coin(sprite: &CoinSprite) -> Vec<Vertex> {
    let r = sprite.radius;
    let mut vertices = ring(
        sprite.pos,
        r,
        r + GLOW_WIDTH,
        colors::COIN_GLOW,
        colors::COIN_GLOW_EDGE,
        COIN_SEGMENTS,
    );

    vertices.extend(radial_circle(
        sprite.pos,
        r,
        &[
            (0.0, colors::COIN_CORE),
            (0.7, colors::COIN_MID),
            (1.0, colors::COIN_RIM),
        ],
        COIN_SEGMENTS,
    ));

    let highlight_center = sprite.pos + crate::rotate(HIGHLIGHT_OFFSET, sprite.rotation);
    vertices.extend(circle(
        highlight_center,
        r / 2.0,
        colors::COIN_HIGHLIGHT,
        COIN_SEGMENTS / 2,
    ));

    vertices
}

/// Triangle list for a whole frame, back to front
pub fn frame(frame: &Frame) -> Vec<Vertex> {
    let mut vertices = gradient_rect(frame.size, frame.background[0], frame.background[1]);
    for sprite in &frame.coins {
        vertices.extend(coin(sprite));
    }
    vertices
}
