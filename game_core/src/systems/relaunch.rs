use hecs::World;
use log::debug;

use crate::{Ball, Config, Court, Events, GameRng, Side};

/// Relaunch the ball from the centre once it leaves the court sideways
pub fn check_relaunch(
    world: &mut World,
    court: &Court,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if court.contains_x(ball.pos.x) {
            continue;
        }
        let exited = if ball.pos.x < 0.0 {
            Side::Left
        } else {
            Side::Right
        };
        ball.relaunch(config, rng);
        events.ball_exited = Some(exited);
        debug!("ball left through the {:?} side, relaunched with vel={}", exited, ball.vel);
    }
}
