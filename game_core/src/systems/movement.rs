use hecs::World;

use crate::{Ball, Court, Paddle};

/// Move ball by one frame of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

/// Keep every paddle inside the court
pub fn clamp_paddles(world: &mut World, court: &Court) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.pos.y = court.clamp_y(paddle.pos.y, paddle.size.y);
    }
}
