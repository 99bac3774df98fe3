//! Game session: lives, score and terminal states
//!
//! The session exclusively owns the ball, paddle and brick field and drives
//! one frame at a time. All randomness comes from a single seeded RNG, so a
//! seed plus an input sequence reproduces a game exactly.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::bricks::BrickField;
use super::collision::{CollisionReport, CollisionResolver, PaddleHit, Wall};
use super::paddle::Paddle;
use super::rect::Rect;
use crate::error::ConfigError;
use crate::settings::Settings;

/// Session state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Active gameplay
    Playing,
    /// Out of lives (terminal)
    Lost,
    /// Every brick destroyed (terminal)
    Won,
}

impl SessionPhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionPhase::Playing)
    }
}

/// Things the host may want to react to (sounds, scene changes)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce(Wall),
    PaddleHit(PaddleHit),
    BrickDestroyed { id: u32 },
    /// The ball fell out; `lives` is what remains
    LifeLost { lives: u8 },
    GameOver,
    GameWon,
}

/// What the host reads back after each step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub lives: u8,
    pub score: u32,
    pub phase: SessionPhase,
}

/// One game from first launch to win or loss
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    settings: Settings,
    rng: Pcg32,
    lives: u8,
    phase: SessionPhase,
    /// Steps simulated while playing
    time_ticks: u64,
    ball: Ball,
    paddle: Paddle,
    bricks: BrickField,
    resolver: CollisionResolver,
    /// Events since the last drain
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Build a session. Fails only on invalid settings.
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;

        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let bricks = BrickField::from_settings(&settings, &mut rng)?;
        let ball = Ball::new(
            settings.ball_spawn(),
            settings.ball_radius,
            settings.ball_speed,
            &mut rng,
        );
        let paddle = Paddle::new(
            settings.paddle_start(),
            settings.paddle_width,
            settings.paddle_height,
            settings.scene_width,
        );
        let resolver = CollisionResolver::from_settings(&settings);

        log::info!(
            "New session (seed {}): {} bricks, {} lives",
            settings.seed,
            bricks.live_count(),
            settings.initial_lives
        );

        Ok(Self {
            seed: settings.seed,
            lives: settings.initial_lives,
            phase: SessionPhase::Playing,
            time_ticks: 0,
            settings,
            rng,
            ball,
            paddle,
            bricks,
            resolver,
            events: Vec::new(),
        })
    }

    /// Advance one frame: resolve collisions against the current position,
    /// then move the ball, then settle lives and terminal states.
    ///
    /// Once the session is terminal this only returns the final snapshot.
    pub fn step(&mut self, dt: f32) -> Snapshot {
        if self.phase.is_terminal() {
            return self.snapshot();
        }

        let report = self.resolver.resolve(
            &mut self.ball,
            &mut self.paddle,
            &mut self.bricks,
            &mut self.rng,
        );
        self.record_collisions(&report);

        self.ball.advance(dt);
        self.time_ticks += 1;

        if report.ball_lost() {
            self.lose_life();
        }

        if self.phase == SessionPhase::Playing && !self.bricks.has_remaining() {
            self.phase = SessionPhase::Won;
            self.events.push(GameEvent::GameWon);
            log::info!(
                "All bricks cleared after {} ticks, score {}",
                self.time_ticks,
                self.bricks.score()
            );
        }

        self.snapshot()
    }

    fn record_collisions(&mut self, report: &CollisionReport) {
        if let Some(wall) = report.wall {
            self.events.push(GameEvent::WallBounce(wall));
        }
        if let Some(hit) = report.paddle {
            self.events.push(GameEvent::PaddleHit(hit));
        }
        if let Some(brick) = report.brick {
            self.events.push(GameEvent::BrickDestroyed { id: brick.id });
        }
    }

    fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.events.push(GameEvent::LifeLost { lives: self.lives });
        log::info!("Ball lost, {} lives left", self.lives);

        if self.lives == 0 {
            self.phase = SessionPhase::Lost;
            self.events.push(GameEvent::GameOver);
            log::info!("Game over, score {}", self.bricks.score());
        }
    }

    /// Shift the paddle horizontally (clamped to the scene)
    pub fn move_paddle(&mut self, delta: f32) {
        if self.phase.is_terminal() {
            return;
        }
        self.paddle.move_by(delta);
    }

    /// Launch the ball if it is waiting at spawn
    pub fn launch_ball(&mut self) {
        if self.phase.is_terminal() {
            return;
        }
        self.ball.launch();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            lives: self.lives,
            score: self.bricks.score(),
            phase: self.phase,
        }
    }

    /// Take every event recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.bricks.score()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn ball_position(&self) -> Vec2 {
        self.ball.pos
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn paddle_rect(&self) -> Rect {
        self.paddle.rect()
    }

    pub fn bricks(&self) -> &BrickField {
        &self.bricks
    }

    /// Rectangles of the bricks still standing, in generation order
    pub fn live_brick_rects(&self) -> Vec<Rect> {
        self.bricks.live_bricks().map(|b| b.rect).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    fn full_grid(seed: u64) -> Settings {
        Settings {
            blocked_frequency: 0.0,
            seed,
            ..Settings::default()
        }
    }

    /// Move the paddle out of the way and drop the ball straight down
    fn drop_ball(session: &mut GameSession) {
        session.move_paddle(-1000.0);
        session.ball.set_angle(-FRAC_PI_2);
        session.launch_ball();
    }

    fn step_until_life_lost(session: &mut GameSession) {
        let start = session.lives();
        for _ in 0..200 {
            session.step(SIM_DT);
            if session.lives() != start {
                return;
            }
        }
        panic!("ball never left the scene");
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new(full_grid(1)).unwrap();
        assert_eq!(session.lives(), 3);
        assert_eq!(session.score(), 0);
        assert_eq!(session.phase(), SessionPhase::Playing);
        assert_eq!(session.live_brick_rects().len(), 31 * 16);
        assert_eq!(session.ball_position(), Vec2::new(400.0, 650.0));
        assert_eq!(session.paddle_rect(), Rect::new(350.0, 750.0, 100.0, 20.0));
        assert!(!session.ball().is_moving());
    }

    #[test]
    fn test_invalid_settings_fail_fast() {
        let settings = Settings {
            brick_height: 0.0,
            ..Settings::default()
        };
        assert!(GameSession::new(settings).is_err());
    }

    #[test]
    fn test_idle_ball_waits_for_launch() {
        let mut session = GameSession::new(full_grid(2)).unwrap();
        for _ in 0..10 {
            session.step(SIM_DT);
        }
        assert_eq!(session.ball_position(), Vec2::new(400.0, 650.0));
        session.launch_ball();
        session.step(SIM_DT);
        assert_ne!(session.ball_position(), Vec2::new(400.0, 650.0));
    }

    #[test]
    fn test_falling_ball_costs_one_life() {
        let mut session = GameSession::new(full_grid(3)).unwrap();
        drop_ball(&mut session);
        step_until_life_lost(&mut session);

        let snap = session.snapshot();
        assert_eq!(snap.lives, 2);
        assert_eq!(snap.phase, SessionPhase::Playing);
        assert_eq!(session.ball_position(), Vec2::new(400.0, 650.0));
        assert!(!session.ball().is_moving());
        assert!(session.drain_events().contains(&GameEvent::LifeLost { lives: 2 }));
    }

    #[test]
    fn test_last_life_ends_game() {
        let settings = Settings {
            initial_lives: 1,
            ..full_grid(4)
        };
        let mut session = GameSession::new(settings).unwrap();
        drop_ball(&mut session);
        step_until_life_lost(&mut session);

        assert_eq!(session.phase(), SessionPhase::Lost);
        assert_eq!(session.lives(), 0);
        let events = session.drain_events();
        assert_eq!(events.last(), Some(&GameEvent::GameOver));

        let pos = session.ball_position();
        let score = session.score();
        let ticks = session.time_ticks();
        session.launch_ball();
        session.move_paddle(300.0);
        for _ in 0..30 {
            let snap = session.step(SIM_DT);
            assert_eq!(snap.phase, SessionPhase::Lost);
        }
        assert_eq!(session.ball_position(), pos);
        assert_eq!(session.score(), score);
        assert_eq!(session.time_ticks(), ticks);
        assert_eq!(session.paddle().x, 0.0);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_lives_never_increase() {
        let mut session = GameSession::new(full_grid(5)).unwrap();
        let mut last = session.lives();
        for _ in 0..3 {
            drop_ball(&mut session);
            step_until_life_lost(&mut session);
            assert!(session.lives() < last);
            last = session.lives();
        }
        assert_eq!(session.phase(), SessionPhase::Lost);
    }

    #[test]
    fn test_empty_field_wins_on_first_step() {
        let settings = Settings {
            blocked_frequency: 1.0,
            ..Settings::default()
        };
        let mut session = GameSession::new(settings).unwrap();
        assert!(session.live_brick_rects().is_empty());
        let snap = session.step(SIM_DT);
        assert_eq!(snap.phase, SessionPhase::Won);
        assert_eq!(session.drain_events(), vec![GameEvent::GameWon]);

        session.step(SIM_DT);
        assert_eq!(session.time_ticks(), 1);
    }

    #[test]
    fn test_brick_hit_scores_and_records_event() {
        let mut session = GameSession::new(full_grid(6)).unwrap();
        // Just under the lowest row, heading up
        session.ball.pos = Vec2::new(402.0, 420.0);
        session.ball.set_angle(FRAC_PI_2);
        session.launch_ball();

        let snap = session.step(SIM_DT);
        assert_eq!(snap.score, 1);
        assert_eq!(session.live_brick_rects().len(), 31 * 16 - 1);
        let events = session.drain_events();
        assert!(matches!(events.as_slice(), [GameEvent::BrickDestroyed { .. }]));
        assert!(session.ball().velocity().y > 0.0);
    }

    #[test]
    fn test_last_brick_wins_game() {
        let mut session = GameSession::new(full_grid(9)).unwrap();
        let last = Rect::new(390.0, 390.0, 25.0, 25.0);
        for rect in session.live_brick_rects() {
            if rect != last {
                assert!(session.bricks.find_intersecting(rect.center(), 1.0).is_some());
            }
        }
        assert_eq!(session.live_brick_rects(), vec![last]);

        session.ball.pos = Vec2::new(402.0, 420.0);
        session.ball.set_angle(FRAC_PI_2);
        session.launch_ball();

        let snap = session.step(SIM_DT);
        assert_eq!(snap.phase, SessionPhase::Won);
        assert_eq!(snap.score, 31 * 16);
        assert_eq!(snap.lives, 3);
        let events = session.drain_events();
        assert!(matches!(
            events.as_slice(),
            [GameEvent::BrickDestroyed { .. }, GameEvent::GameWon]
        ));

        let pos = session.ball_position();
        let ticks = session.time_ticks();
        session.move_paddle(-200.0);
        for _ in 0..10 {
            assert_eq!(session.step(SIM_DT), snap);
        }
        assert_eq!(session.ball_position(), pos);
        assert_eq!(session.time_ticks(), ticks);
        assert_eq!(session.paddle().x, 350.0);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_paddle_rebound_in_session() {
        let mut session = GameSession::new(full_grid(7)).unwrap();
        session.ball.pos = Vec2::new(400.0, 700.0);
        session.ball.set_angle(-FRAC_PI_2);
        session.launch_ball();

        let mut hit = false;
        for _ in 0..20 {
            session.step(SIM_DT);
            if session
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::PaddleHit(PaddleHit::Top { .. })))
            {
                hit = true;
                break;
            }
        }
        assert!(hit);
        assert!(session.ball().velocity().y < 0.0);
        assert_eq!(session.lives(), 3);
    }

    #[test]
    fn test_wall_bounce_event() {
        let mut session = GameSession::new(full_grid(8)).unwrap();
        session.ball.pos = Vec2::new(8.0, 500.0);
        session.ball.set_angle(3.0 * FRAC_PI_4);
        session.launch_ball();
        session.step(SIM_DT);
        assert_eq!(session.drain_events(), vec![GameEvent::WallBounce(Wall::Left)]);
        assert!(session.ball().velocity().x > 0.0);
    }
}
