//! Per-frame collision detection and response
//!
//! Resolution runs in a fixed order, each stage seeing what the previous one
//! changed: paddle clamp, walls, paddle, bricks. Detection is discrete: the
//! ball is tested where it stands at the start of the frame, so a fast ball
//! or a long frame can carry it straight through a thin brick.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bricks::{Brick, BrickField};
use super::paddle::Paddle;
use super::rect::Rect;
use crate::settings::Settings;

/// Scene edge the ball touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Top,
    /// Fell out of the scene; costs a life instead of bouncing
    Bottom,
}

/// How the ball met the paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PaddleHit {
    /// Level with the paddle: both components reversed
    Side,
    /// On the top face: Y reversed and the angle biased by `bias` radians
    Top { bias: f32 },
}

/// Everything that happened during one resolution pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    pub wall: Option<Wall>,
    pub paddle: Option<PaddleHit>,
    pub brick: Option<Brick>,
}

impl CollisionReport {
    /// The ball crossed the bottom edge and was sent back to spawn
    pub fn ball_lost(&self) -> bool {
        self.wall == Some(Wall::Bottom)
    }
}

/// Degrees of angle bias per unit of distance from the paddle center
pub const PADDLE_BIAS_DEG_PER_UNIT: f32 = 0.5;

/// Check the ball against the scene edges.
///
/// Only the first violated edge is reported, in the order left, right, top,
/// bottom. A ball in a corner is therefore handled on one axis per frame.
pub fn ball_wall_collision(ball: &Ball, scene_width: f32, scene_height: f32) -> Option<Wall> {
    let r = ball.radius;
    if ball.pos.x - r <= 0.0 {
        Some(Wall::Left)
    } else if ball.pos.x + r >= scene_width {
        Some(Wall::Right)
    } else if ball.pos.y - r <= 0.0 {
        Some(Wall::Top)
    } else if ball.pos.y >= scene_height {
        Some(Wall::Bottom)
    } else {
        None
    }
}

/// True if the ball's center is level with the body it hit
#[inline]
pub fn is_side_hit(body: &Rect, ball: &Ball) -> bool {
    body.spans_y(ball.pos.y)
}

/// True if the ball is already under the paddle and must not bounce off it
#[inline]
pub fn is_below(paddle: &Rect, ball: &Ball) -> bool {
    ball.pos.y > paddle.max_y()
}

/// Angle bias (radians) for a top hit, positive when the ball lands left of
/// the paddle center so it rebounds toward the side it struck
#[inline]
pub fn paddle_bias(paddle_center_x: f32, ball_x: f32) -> f32 {
    (PADDLE_BIAS_DEG_PER_UNIT * (paddle_center_x - ball_x)).to_radians()
}

/// Resolves one frame of ball interactions against a fixed scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollisionResolver {
    pub scene_width: f32,
    pub scene_height: f32,
    /// Frames the paddle is ignored after a hit
    pub paddle_cooldown_ticks: u32,
}

impl CollisionResolver {
    pub fn new(scene_width: f32, scene_height: f32, paddle_cooldown_ticks: u32) -> Self {
        Self {
            scene_width,
            scene_height,
            paddle_cooldown_ticks,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.scene_width,
            settings.scene_height,
            settings.paddle_cooldown_ticks,
        )
    }

    /// Run every stage for one frame. The ball is not moved here.
    ///
    /// An idle ball takes part in nothing but the paddle clamp. A ball lost
    /// through the bottom edge is back at spawn and idle, so the paddle and
    /// brick stages are skipped for the rest of the frame.
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        ball: &mut Ball,
        paddle: &mut Paddle,
        bricks: &mut BrickField,
        rng: &mut R,
    ) -> CollisionReport {
        let mut report = CollisionReport::default();

        paddle.clamp_to_scene();

        if !ball.is_moving() {
            return report;
        }

        report.wall = self.resolve_walls(ball, rng);
        if report.ball_lost() {
            return report;
        }

        report.paddle = self.resolve_paddle(ball, paddle);
        report.brick = self.resolve_bricks(ball, bricks);
        report
    }

    fn resolve_walls<R: Rng + ?Sized>(&self, ball: &mut Ball, rng: &mut R) -> Option<Wall> {
        let wall = ball_wall_collision(ball, self.scene_width, self.scene_height)?;
        match wall {
            Wall::Left => {
                ball.pos.x = ball.radius;
                ball.reverse_x();
            }
            Wall::Right => {
                ball.pos.x = self.scene_width - ball.radius;
                ball.reverse_x();
            }
            Wall::Top => {
                ball.pos.y = ball.radius;
                ball.reverse_y();
            }
            Wall::Bottom => ball.reset_to_spawn(rng),
        }
        log::trace!("Wall bounce: {:?} at {:?}", wall, ball.pos);
        Some(wall)
    }

    fn resolve_paddle(&self, ball: &mut Ball, paddle: &Paddle) -> Option<PaddleHit> {
        if ball.paddle_cooldown > 0 {
            ball.paddle_cooldown -= 1;
            return None;
        }

        let rect = paddle.rect();
        if !ball.bounds().intersects(&rect) || is_below(&rect, ball) {
            return None;
        }

        ball.reverse_y();
        let hit = if is_side_hit(&rect, ball) {
            ball.reverse_x();
            PaddleHit::Side
        } else {
            let bias = paddle_bias(paddle.center_x(), ball.pos.x);
            ball.set_angle(ball.angle() + bias);
            PaddleHit::Top { bias }
        };
        ball.paddle_cooldown = self.paddle_cooldown_ticks;
        log::debug!("Paddle hit: {:?}, new angle {:.3}", hit, ball.angle());
        Some(hit)
    }

    fn resolve_bricks(&self, ball: &mut Ball, bricks: &mut BrickField) -> Option<Brick> {
        let brick = bricks.find_intersecting(ball.pos, ball.radius)?;
        if is_side_hit(&brick.rect, ball) {
            ball.reverse_x();
        } else {
            ball.reverse_y();
        }
        log::debug!("Brick {} destroyed, score {}", brick.id, bricks.score());
        Some(brick)
    }
}
