use hecs::World;

use crate::{Ball, Config, Court, Paddle, Side};

/// Steer the AI paddle
///
/// While the ball travels towards it, the paddle chases the ball's centre at
/// full speed. Otherwise it drifts back to the middle of the court at half
/// speed. There is no prediction of where the ball will arrive.
pub fn track_ball(world: &mut World, court: &Court, config: &Config) {
    let Some((ball_center_y, ball_vx)) = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| (ball.center().y, ball.vel.x))
    else {
        return;
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Right {
            continue;
        }
        if ball_vx > 0.0 {
            let paddle_center_y = paddle.center_y();
            if ball_center_y > paddle_center_y {
                paddle.pos.y += config.ai_speed;
            } else if ball_center_y < paddle_center_y {
                paddle.pos.y -= config.ai_speed;
            }
        } else {
            let rest_y = court.height / 2.0 - paddle.size.y / 2.0;
            let recentre_speed = config.ai_speed / 2.0;
            if paddle.pos.y < rest_y {
                paddle.pos.y += recentre_speed;
            } else if paddle.pos.y > rest_y {
                paddle.pos.y -= recentre_speed;
            }
        }
    }
}
