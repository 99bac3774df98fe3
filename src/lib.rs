//! Brickfall - a Breakout-style simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddle, brick field, collisions, session)
//! - `settings`: Construction parameters and their validation
//! - `error`: Configuration errors
//!
//! Rendering, input capture and window lifecycle live in the host; the core
//! only consumes commands and exposes read-only state plus game events.

pub mod error;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz reference cadence)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Scene defaults
    pub const SCENE_SIZE: f32 = 800.0;

    /// Brick defaults
    pub const BRICK_SIZE: f32 = 25.0;
    /// Chance of a whole row or column being left empty
    pub const BLOCKED_FREQUENCY: f64 = 0.1;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Distance from the bottom of the scene to the paddle's top edge
    pub const PADDLE_OFFSET: f32 = 50.0;
    /// Horizontal distance covered by one move command
    pub const PADDLE_SPEED: f32 = 25.0;
    /// Frames the paddle is ignored after a hit
    pub const PADDLE_COOLDOWN_TICKS: u32 = 1;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = BRICK_SIZE / 2.5;
    /// Distance from the bottom of the scene to the ball spawn point
    pub const BALL_SPAWN_OFFSET: f32 = PADDLE_OFFSET + 100.0;
    /// Fixed speed magnitude (units per second)
    pub const BALL_SPEED: f32 = 300.0;
    /// Launch angles stay at least 30 degrees away from horizontal
    pub const LAUNCH_ANGLE_MIN: f32 = std::f32::consts::FRAC_PI_6;
    pub const LAUNCH_ANGLE_MAX: f32 = 5.0 * std::f32::consts::FRAC_PI_6;

    pub const INITIAL_LIVES: u8 = 3;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_normalize_angle() {
        assert!((normalize_angle(3.0 * PI) - (-PI)).abs() < 1e-5);
        assert!((normalize_angle(-PI / 2.0) - (-PI / 2.0)).abs() < 1e-6);
        assert!((normalize_angle(2.5 * PI) - PI / 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_launch_window_excludes_horizontal() {
        assert!(consts::LAUNCH_ANGLE_MIN > 0.0);
        assert!(consts::LAUNCH_ANGLE_MAX < PI);
        assert!((consts::LAUNCH_ANGLE_MAX - consts::LAUNCH_ANGLE_MIN - 2.0 * PI / 3.0).abs() < 1e-5);
    }
}
