//! The ball: position, angle-derived velocity and motion
//!
//! Angles use screen coordinates (+Y down) with a positive angle meaning
//! upward motion, so the velocity is `(speed·cos θ, −speed·sin θ)`.
//! Only `set_angle` and `reverse_x`/`reverse_y` touch the angle/velocity pair,
//! and each recomputes whichever half it did not set.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::{LAUNCH_ANGLE_MAX, LAUNCH_ANGLE_MIN};
use crate::normalize_angle;

/// Ball state - waiting for launch or free-moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// Sitting at the spawn point until launched
    Idle,
    /// Free-moving
    Moving,
}

/// Draw a launch angle at least 30° away from either horizontal
pub fn random_launch_angle<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.random_range(LAUNCH_ANGLE_MIN..=LAUNCH_ANGLE_MAX)
}

/// The ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub radius: f32,
    pub state: BallState,
    /// Cooldown ticks before the paddle can be hit again
    #[serde(default)]
    pub paddle_cooldown: u32,
    /// Where the ball returns after a lost life
    spawn: Vec2,
    /// Speed magnitude (units per second)
    speed: f32,
    /// Direction of travel (radians, positive = upward)
    angle: f32,
    /// Velocity while moving; always consistent with `angle` and `speed`
    vel: Vec2,
}

impl Ball {
    /// Create an idle ball at `spawn` with a random launch angle
    pub fn new<R: Rng + ?Sized>(spawn: Vec2, radius: f32, speed: f32, rng: &mut R) -> Self {
        let mut ball = Self {
            pos: spawn,
            radius,
            state: BallState::Idle,
            paddle_cooldown: 0,
            spawn,
            speed,
            angle: 0.0,
            vel: Vec2::ZERO,
        };
        ball.set_angle(random_launch_angle(rng));
        ball
    }

    /// Start moving. No effect if already moving.
    pub fn launch(&mut self) {
        if self.state == BallState::Idle {
            self.state = BallState::Moving;
        }
    }

    pub fn is_moving(&self) -> bool {
        self.state == BallState::Moving
    }

    /// Current velocity, zero while idle
    pub fn velocity(&self) -> Vec2 {
        match self.state {
            BallState::Idle => Vec2::ZERO,
            BallState::Moving => self.vel,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn spawn(&self) -> Vec2 {
        self.spawn
    }

    /// Set the direction of travel and rederive the velocity
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = normalize_angle(angle);
        self.vel = Vec2::new(
            self.speed * self.angle.cos(),
            -self.speed * self.angle.sin(),
        );
    }

    /// Flip horizontal motion and rederive the angle from the new components
    pub fn reverse_x(&mut self) {
        self.vel.x = -self.vel.x;
        self.sync_angle();
    }

    /// Flip vertical motion and rederive the angle from the new components
    pub fn reverse_y(&mut self) {
        self.vel.y = -self.vel.y;
        self.sync_angle();
    }

    fn sync_angle(&mut self) {
        // Screen +Y is down, so the upward component is -vel.y
        self.angle = (-self.vel.y).atan2(self.vel.x);
    }

    /// Integrate position over `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.velocity() * dt;
    }

    /// Return to the spawn point with a fresh angle.
    ///
    /// The ball is left idle; the player has to launch it again.
    pub fn reset_to_spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pos = self.spawn;
        self.state = BallState::Idle;
        self.paddle_cooldown = 0;
        self.set_angle(random_launch_angle(rng));
    }

    /// Bounding box used for paddle and brick tests
    pub fn bounds(&self) -> Rect {
        Rect::around_circle(self.pos, self.radius)
    }
}
