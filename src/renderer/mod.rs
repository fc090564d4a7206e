//! Drawable frames
//!
//! A [`Frame`] is a full redraw of the play field: the background plus every
//! coin at its current transform. It carries no game logic; the pulsing
//! radius here is for drawing only and never feeds hit testing.

pub mod shapes;
pub mod vertex;

use glam::Vec2;
use serde::Serialize;

use crate::sim::GameState;
pub use vertex::Vertex;

/// One coin as it should be drawn this frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoinSprite {
    pub id: u32,
    pub pos: Vec2,
    pub rotation: f32,
    /// Pulsing draw radius
    pub radius: f32,
}

impl CoinSprite {
    /// Floats per sprite in [`Frame::feed`]
    pub const FLOATS: usize = 5;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Play field size
    pub size: Vec2,
    /// Diagonal gradient, top-left to bottom-right
    pub background: [[f32; 4]; 2],
    /// Coins in back-to-front order
    pub coins: Vec<CoinSprite>,
}

impl Frame {
    /// Snapshot the drawable state of a session
    pub fn capture(state: &GameState) -> Self {
        let amplitude = state.settings.pulse_amplitude;
        Self {
            size: state.settings.field(),
            background: [vertex::colors::BACKGROUND_START, vertex::colors::BACKGROUND_END],
            coins: state
                .coins
                .iter()
                .map(|coin| CoinSprite {
                    id: coin.id,
                    pos: coin.pos,
                    rotation: coin.rotation,
                    radius: coin.render_radius(amplitude),
                })
                .collect(),
        }
    }

    /// Flat `[id, x, y, rotation, radius, ...]` sprite feed
    pub fn feed(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.coins.len() * CoinSprite::FLOATS);
        for sprite in &self.coins {
            out.extend_from_slice(&[
                sprite.id as f32,
                sprite.pos.x,
                sprite.pos.y,
                sprite.rotation,
                sprite.radius,
            ]);
        }
        out
    }

    /// Triangle list, back to front
    pub fn vertices(&self) -> Vec<Vertex> {
        shapes::frame(self)
    }
}
