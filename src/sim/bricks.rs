//! Procedural brick field
//!
//! Bricks fill the top half of the scene on a grid with a one-unit gutter.
//! Whole columns and whole rows are knocked out at random, which leaves
//! corridors through the field instead of scattered single holes.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::error::{ConfigError, require_positive};
use crate::settings::Settings;

/// Gap between neighbouring bricks
pub const BRICK_GUTTER: f32 = 1.0;

/// A destructible brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    /// Position in generation order
    pub id: u32,
    pub rect: Rect,
    pub alive: bool,
    /// RGB fill, each channel in [0.1, 1.0)
    pub tint: [f32; 3],
}

/// The grid of bricks and the score earned by destroying them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickField {
    pub brick_width: f32,
    pub brick_height: f32,
    /// Chance that any one row or column is left empty
    pub blocked_frequency: f64,
    /// Left edge of every grid column
    columns: Vec<f32>,
    /// Top edge of every grid row
    rows: Vec<f32>,
    blocked_columns: Vec<usize>,
    blocked_rows: Vec<usize>,
    /// Every brick ever generated, in generation order
    bricks: Vec<Brick>,
    live: usize,
    score: u32,
}

/// Grid line positions `0, step, 2·step, …` up to and including `extent`
fn grid_lines(extent: f32, step: f32) -> Vec<f32> {
    let mut lines = Vec::new();
    let mut i = 0u32;
    loop {
        let pos = i as f32 * step;
        if pos > extent {
            break;
        }
        lines.push(pos);
        i += 1;
    }
    lines
}

/// Indices of the lines whose independent draw falls under `freq`
fn draw_blocked<R: Rng + ?Sized>(count: usize, freq: f64, rng: &mut R) -> Vec<usize> {
    (0..count)
        // Strict so that 0.0 never blocks and 1.0 always does
        .filter(|_| rng.random::<f64>() < freq)
        .collect()
}

impl BrickField {
    /// Lay out a field over the top half of a `scene_width` × `scene_height` scene.
    ///
    /// Columns are drawn first, then rows, each with one uniform draw.
    /// A frequency of 0.0 fills the grid, 1.0 or more leaves it empty.
    pub fn generate<R: Rng + ?Sized>(
        scene_width: f32,
        scene_height: f32,
        brick_width: f32,
        brick_height: f32,
        blocked_frequency: f64,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        require_positive("scene_width", scene_width)?;
        require_positive("scene_height", scene_height)?;
        require_positive("brick_width", brick_width)?;
        require_positive("brick_height", brick_height)?;
        if blocked_frequency.is_nan() {
            return Err(ConfigError::InvalidFrequency(blocked_frequency));
        }

        let columns = grid_lines(scene_width, brick_width + BRICK_GUTTER);
        let rows = grid_lines(scene_height / 2.0, brick_height + BRICK_GUTTER);

        let blocked_columns = draw_blocked(columns.len(), blocked_frequency, rng);
        let blocked_rows = draw_blocked(rows.len(), blocked_frequency, rng);

        let mut bricks = Vec::with_capacity(columns.len() * rows.len());
        for (ci, &x) in columns.iter().enumerate() {
            if blocked_columns.contains(&ci) {
                continue;
            }
            for (ri, &y) in rows.iter().enumerate() {
                if blocked_rows.contains(&ri) {
                    continue;
                }
                bricks.push(Brick {
                    id: bricks.len() as u32,
                    rect: Rect::new(x, y, brick_width, brick_height),
                    alive: true,
                    tint: [0.0; 3],
                });
            }
        }

        // Tints are drawn last so they never shift the layout for a seed
        for brick in &mut bricks {
            brick.tint = [
                rng.random_range(0.1..1.0),
                rng.random_range(0.1..1.0),
                rng.random_range(0.1..1.0),
            ];
        }

        log::info!(
            "Brick field: {}x{} grid, {} columns and {} rows blocked, {} bricks",
            columns.len(),
            rows.len(),
            blocked_columns.len(),
            blocked_rows.len(),
            bricks.len()
        );

        let live = bricks.len();
        Ok(Self {
            brick_width,
            brick_height,
            blocked_frequency,
            columns,
            rows,
            blocked_columns,
            blocked_rows,
            bricks,
            live,
            score: 0,
        })
    }

    /// Generate from session settings
    pub fn from_settings<R: Rng + ?Sized>(
        settings: &Settings,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        Self::generate(
            settings.scene_width,
            settings.scene_height,
            settings.brick_width,
            settings.brick_height,
            settings.blocked_frequency,
            rng,
        )
    }

    /// Find, destroy and score the first live brick touching the circle's
    /// bounding box.
    ///
    /// One call consumes at most one brick, so each collision is worth
    /// exactly one point. The destroyed brick is returned.
    pub fn find_intersecting(&mut self, center: Vec2, radius: f32) -> Option<Brick> {
        let bounds = Rect::around_circle(center, radius);
        let brick = self
            .bricks
            .iter_mut()
            .find(|b| b.alive && b.rect.intersects(&bounds))?;
        brick.alive = false;
        self.live -= 1;
        self.score += 1;
        Some(*brick)
    }

    pub fn has_remaining(&self) -> bool {
        self.live > 0
    }

    /// Number of bricks destroyed so far
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Live bricks in generation order
    pub fn live_bricks(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.alive)
    }

    /// Grid size as (columns, rows), blocked lines included
    pub fn grid_size(&self) -> (usize, usize) {
        (self.columns.len(), self.rows.len())
    }

    pub fn blocked_columns(&self) -> &[usize] {
        &self.blocked_columns
    }

    pub fn blocked_rows(&self) -> &[usize] {
        &self.blocked_rows
    }
}
