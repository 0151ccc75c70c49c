use glam::Vec2;
use thiserror::Error;

use crate::{Params, Side};

/// Reasons a configuration cannot host a game
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be a positive finite number, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be a non-negative finite number, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("ball_rebound_factor must be greater than 1 so rallies speed up, got {value}")]
    ReboundTooSlow { value: f32 },

    #[error("court {width}x{height} is too small for paddles {paddle_width}x{paddle_height} with margin {margin}")]
    CourtTooSmall {
        width: f32,
        height: f32,
        paddle_width: f32,
        paddle_height: f32,
        margin: f32,
    },
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub court_width: f32,
    pub court_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub ball_size: f32,
    pub ball_launch_vx: f32,
    pub ball_launch_vy: f32,
    pub ball_rebound_factor: f32,
    pub ball_rebound_jitter: f32,
    pub ai_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_size: Params::BALL_SIZE,
            ball_launch_vx: Params::BALL_LAUNCH_VX,
            ball_launch_vy: Params::BALL_LAUNCH_VY,
            ball_rebound_factor: Params::BALL_REBOUND_FACTOR,
            ball_rebound_jitter: Params::BALL_REBOUND_JITTER,
            ai_speed: Params::AI_SPEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning on a court of the given size (usually the canvas size)
    pub fn with_court(width: f32, height: f32) -> Self {
        Self {
            court_width: width,
            court_height: height,
            ..Self::default()
        }
    }

    /// Get X position (left edge) for the paddle on `side`
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.court_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Y position that vertically centres a paddle
    pub fn paddle_start_y(&self) -> f32 {
        self.court_height / 2.0 - self.paddle_height / 2.0
    }

    /// Top-left corner that puts the ball's centre on the court centre
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            self.court_width / 2.0 - self.ball_size / 2.0,
            self.court_height / 2.0 - self.ball_size / 2.0,
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("court_width", self.court_width),
            ("court_height", self.court_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("ball_launch_vx", self.ball_launch_vx),
            ("ball_launch_vy", self.ball_launch_vy),
            ("ball_rebound_factor", self.ball_rebound_factor),
            ("ai_speed", self.ai_speed),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        let non_negative = [
            ("paddle_margin", self.paddle_margin),
            ("ball_rebound_jitter", self.ball_rebound_jitter),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.ball_rebound_factor <= 1.0 {
            return Err(ConfigError::ReboundTooSlow {
                value: self.ball_rebound_factor,
            });
        }

        let needed_width = 2.0 * (self.paddle_margin + self.paddle_width) + self.ball_size;
        if self.court_height < self.paddle_height
            || self.court_height < self.ball_size
            || self.court_width < needed_width
        {
            return Err(ConfigError::CourtTooSmall {
                width: self.court_width,
                height: self.court_height,
                paddle_width: self.paddle_width,
                paddle_height: self.paddle_height,
                margin: self.paddle_margin,
            });
        }
        Ok(())
    }
}
