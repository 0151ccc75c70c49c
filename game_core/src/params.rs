/// Game tuning parameters for canvas Pong
///
/// All distances are canvas pixels and all speeds are pixels per frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 16.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // gap between court edge and paddle

    // Ball
    pub const BALL_SIZE: f32 = 16.0;
    pub const BALL_LAUNCH_VX: f32 = 6.0;
    pub const BALL_LAUNCH_VY: f32 = 4.0;
    pub const BALL_REBOUND_FACTOR: f32 = 1.08; // vx multiplier on paddle hit
    pub const BALL_REBOUND_JITTER: f32 = 4.0; // width of the vy perturbation range

    // AI
    pub const AI_SPEED: f32 = 4.0; // recentring runs at half this

    // Net
    pub const NET_WIDTH: f32 = 4.0;
    pub const NET_DASH: f32 = 16.0;
    pub const NET_SPACING: f32 = 32.0;
}
