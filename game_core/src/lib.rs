pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    use log::LevelFilter;
    let _ = env_logger::builder()
        .format_timestamp_secs()
        .filter_level(LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Advance the Pong simulation by one frame
pub fn step(
    world: &mut World,
    court: &Court,
    config: &Config,
    input: &mut PointerInput,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Apply the latest pointer position to the player paddle
    apply_pointer_input(world, court, input);

    // 2. Move ball
    move_ball(world);

    // 3. Bounce off top/bottom walls
    bounce_walls(world, court, events);

    // 4. Rebound off paddles
    collide_paddles(world, config, events, rng);

    // 5. Relaunch if the ball left the court
    check_relaunch(world, court, config, events, rng);

    // 6. AI paddle follows the ball
    track_ball(world, court, config);

    // 7. Keep paddles inside the court
    clamp_paddles(world, court);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(side, config),))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    pos: glam::Vec2,
    vel: glam::Vec2,
    size: f32,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, size),))
}
