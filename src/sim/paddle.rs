//! The player's paddle
//!
//! Moves horizontally only and never leaves the scene.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed)
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Width of the scene the paddle is confined to
    scene_width: f32,
}

impl Paddle {
    /// Paddle with its top-left corner at `origin`
    pub fn new(origin: Vec2, width: f32, height: f32, scene_width: f32) -> Self {
        let mut paddle = Self {
            x: origin.x,
            y: origin.y,
            width,
            height,
            scene_width,
        };
        paddle.clamp_to_scene();
        paddle
    }

    /// Shift horizontally, then keep the paddle inside the scene
    pub fn move_by(&mut self, delta_x: f32) {
        self.x += delta_x;
        self.clamp_to_scene();
    }

    /// Pull the paddle back within `[0, scene_width - width]`
    pub fn clamp_to_scene(&mut self) {
        self.x = self.x.clamp(0.0, self.max_x());
    }

    /// Largest legal left-edge position
    pub fn max_x(&self) -> f32 {
        (self.scene_width - self.width).max(0.0)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
