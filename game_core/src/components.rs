use glam::Vec2;
use rand::Rng;

use crate::{Aabb, Config, GameRng};

/// Which end of the court a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // pointer-controlled
    Right, // AI-controlled
}

/// Paddle component - a rectangle that only moves vertically
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2, // top-left corner; x never changes
    pub size: Vec2,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            pos: Vec2::new(config.paddle_x(side), config.paddle_start_y()),
            size: Vec2::new(config.paddle_width, config.paddle_height),
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2, // top-left corner
    pub vel: Vec2, // pixels per frame
    pub size: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self {
            pos,
            vel,
            size: Vec2::splat(size),
        }
    }

    /// A ball at the court centre with a random launch direction
    pub fn launched(config: &Config, rng: &mut GameRng) -> Self {
        let mut ball = Self::new(Vec2::ZERO, Vec2::ZERO, config.ball_size);
        ball.relaunch(config, rng);
        ball
    }

    /// Reset ball to centre with a random sign on each velocity axis
    pub fn relaunch(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = config.ball_spawn();
        let sx = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(sx * config.ball_launch_vx, sy * config.ball_launch_vy);
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }
}
