use crate::Side;

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform offset in `[-width / 2, width / 2)`
    pub fn jitter(&mut self, width: f32) -> f32 {
        use rand::Rng;
        (self.0.gen::<f32>() - 0.5) * width
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: Option<Side>,
    pub ball_exited: Option<Side>, // side of the court the ball left through
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = None;
        self.ball_exited = None;
    }
}

/// Latest pointer-driven paddle position, waiting for the next step
///
/// Pointer events can arrive any number of times between frames; only the
/// most recent value is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerInput {
    target_y: Option<f32>,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, paddle_y: f32) {
        self.target_y = Some(paddle_y);
    }

    pub fn take(&mut self) -> Option<f32> {
        self.target_y.take()
    }

    pub fn peek(&self) -> Option<f32> {
        self.target_y
    }
}
