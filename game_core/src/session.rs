use glam::Vec2;
use hecs::{Entity, World};

use crate::{
    create_ball, create_paddle, step, Ball, Config, ConfigError, Court, Events, GameRng, Paddle,
    PointerInput, Side,
};

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct Scene {
    pub court: Court,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
}

/// One continuous game: the world plus the resources the systems share
pub struct Session {
    world: World,
    court: Court,
    config: Config,
    input: PointerInput,
    events: Events,
    rng: GameRng,
    ball: Entity,
    left: Entity,
    right: Entity,
    frame: u64,
}

impl Session {
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let court = Court::new(&config);
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        let left = create_paddle(&mut world, Side::Left, &config);
        let right = create_paddle(&mut world, Side::Right, &config);

        let launched = Ball::launched(&config, &mut rng);
        let ball = create_ball(&mut world, launched.pos, launched.vel, config.ball_size);

        Ok(Self {
            world,
            court,
            config,
            input: PointerInput::new(),
            events: Events::new(),
            rng,
            ball,
            left,
            right,
            frame: 0,
        })
    }

    /// Record the latest pointer-driven paddle y; applied at the next step
    pub fn set_pointer(&mut self, paddle_y: f32) {
        self.input.set(paddle_y);
    }

    /// Advance one frame
    pub fn step(&mut self) -> &Events {
        step(
            &mut self.world,
            &self.court,
            &self.config,
            &mut self.input,
            &mut self.events,
            &mut self.rng,
        );
        self.frame += 1;
        &self.events
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|b| *b)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        let entity = match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
        self.world.get::<&Paddle>(entity).ok().map(|p| *p)
    }

    pub fn scene(&self) -> Option<Scene> {
        Some(Scene {
            court: self.court,
            left: self.paddle(Side::Left)?,
            right: self.paddle(Side::Right)?,
            ball: self.ball()?,
        })
    }

    /// Put the ball at `pos` with velocity `vel`
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        if let Ok(mut ball) = self.world.get::<&mut Ball>(self.ball) {
            ball.pos = pos;
            ball.vel = vel;
        }
    }

    /// Move a paddle directly, bypassing input and AI
    pub fn place_paddle(&mut self, side: Side, y: f32) {
        let entity = match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
        if let Ok(mut paddle) = self.world.get::<&mut Paddle>(entity) {
            paddle.pos.y = self.court.clamp_y(y, paddle.size.y);
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn court(&self) -> &Court {
        &self.court
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    /// Number of completed steps
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
