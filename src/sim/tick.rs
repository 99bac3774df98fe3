//! Fixed timestep simulation tick
//!
//! Input collected between frames is queued in a `TickInput` and applied
//! once, at the frame boundary, before any collision is resolved. The paddle
//! therefore never moves in the middle of a resolution pass.

use super::state::{GameSession, Snapshot};
use crate::settings::Settings;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Net horizontal paddle movement requested since the last tick
    pub paddle_delta: f32,
    /// Launch ball (space/click)
    pub launch: bool,
    /// Idle/demo mode - the paddle follows the ball by itself
    pub idle_mode: bool,
}

impl TickInput {
    /// Queue one paddle key press: `direction` -1 for left, +1 for right
    pub fn nudge(&mut self, direction: f32, settings: &Settings) {
        self.paddle_delta += direction.signum() * settings.paddle_speed;
    }

    /// Forget one-shot commands once they have been applied
    pub fn clear(&mut self) {
        self.paddle_delta = 0.0;
        self.launch = false;
    }
}

/// Apply queued input, then advance the session by one fixed timestep
pub fn tick(session: &mut GameSession, input: &TickInput, dt: f32) -> Snapshot {
    let mut input = input.clone();
    if input.idle_mode {
        autopilot(session, &mut input);
    }

    if input.paddle_delta != 0.0 {
        session.move_paddle(input.paddle_delta);
    }
    if input.launch {
        session.launch_ball();
    }

    session.step(dt)
}

/// Steer the paddle under the ball, at most one key press per tick
fn autopilot(session: &GameSession, input: &mut TickInput) {
    if !session.ball().is_moving() {
        input.launch = true;
    }

    // Oscillating aim point so rebounds do not settle into a perfect loop
    let paddle = session.paddle();
    let time_factor = session.time_ticks() as f32 * 0.05;
    let offset = time_factor.sin() * paddle.width * 0.3;
    let target = session.ball().pos.x + offset;

    let max_step = session.settings().paddle_speed;
    input.paddle_delta = (target - paddle.center_x()).clamp(-max_step, max_step);
}
