use hecs::World;
use log::trace;

use crate::{Aabb, Ball, Config, Court, Events, GameRng, Paddle, Side};

/// Bounce the ball off the top and bottom walls
pub fn bounce_walls(world: &mut World, court: &Court, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let floor = court.height - ball.size.y;
        if ball.pos.y < 0.0 {
            ball.pos.y = 0.0;
        } else if ball.pos.y > floor {
            ball.pos.y = floor;
        } else {
            continue;
        }
        ball.vel.y = -ball.vel.y;
        events.ball_hit_wall = true;
        trace!("ball rebounded off wall at y={}", ball.pos.y);
    }
}

/// Rebound the ball off whichever paddle it overlaps
///
/// The left paddle is checked first and at most one paddle rebound happens
/// per frame.
pub fn collide_paddles(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // Collect paddle boxes without holding borrows
    let mut paddles: Vec<(Side, Aabb)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.aabb()))
        .collect();
    paddles.sort_by_key(|(side, _)| *side != Side::Left);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let hit = paddles
            .iter()
            .find(|(_side, paddle)| ball.aabb().intersects(paddle));

        if let Some((side, paddle)) = hit {
            // Sit flush against the facing edge so the next frame cannot re-trigger
            ball.pos.x = match side {
                Side::Left => paddle.max.x,
                Side::Right => paddle.min.x - ball.size.x,
            };
            ball.vel.x *= -config.ball_rebound_factor;
            ball.vel.y += rng.jitter(config.ball_rebound_jitter);
            events.ball_hit_paddle = Some(*side);
            trace!("ball rebounded off {:?} paddle, vel={}", side, ball.vel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Court, Events, GameRng) {
        let world = World::new();
        let config = Config::new();
        let court = Court::new(&config);
        let events = Events::new();
        let rng = GameRng::new(12345);
        (world, config, court, events, rng)
    }

    fn ball_of(world: &World, entity: hecs::Entity) -> Ball {
        *world.get::<&Ball>(entity).unwrap()
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, _config, court, mut events, _rng) = setup_world();
        let ball = create_ball(&mut world, Vec2::new(300.0, -3.0), Vec2::new(6.0, -4.0), 16.0);

        bounce_walls(&mut world, &court, &mut events);

        let ball = ball_of(&world, ball);
        assert_eq!(ball.pos.y, 0.0, "Ball should be clamped exactly to the top edge");
        assert_eq!(ball.vel.y, 4.0, "Y velocity should flip");
        assert_eq!(ball.vel.x, 6.0, "X velocity should be unchanged");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, _config, court, mut events, _rng) = setup_world();
        let ball = create_ball(&mut world, Vec2::new(300.0, 390.0), Vec2::new(6.0, 4.0), 16.0);

        bounce_walls(&mut world, &court, &mut events);

        let ball = ball_of(&world, ball);
        assert_eq!(ball.pos.y, 384.0, "Ball should be clamped exactly to the bottom edge");
        assert_eq!(ball.vel.y, -4.0);
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_touching_wall_does_not_bounce() {
        let (mut world, _config, court, mut events, _rng) = setup_world();
        let ball = create_ball(&mut world, Vec2::new(300.0, 0.0), Vec2::new(6.0, -4.0), 16.0);

        bounce_walls(&mut world, &court, &mut events);

        assert_eq!(ball_of(&world, ball).vel.y, -4.0);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, _court, mut events, mut rng) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        // Left paddle spans x 20..36, y 150..250
        let ball = create_ball(&mut world, Vec2::new(30.0, 190.0), Vec2::new(-6.0, 4.0), 16.0);

        collide_paddles(&mut world, &config, &mut events, &mut rng);

        let ball = ball_of(&world, ball);
        assert_eq!(ball.pos.x, 36.0, "Ball should sit flush against the paddle face");
        assert!(
            (ball.vel.x - 6.0 * config.ball_rebound_factor).abs() < 1e-5,
            "Ball should bounce right and speed up, got {}",
            ball.vel.x
        );
        assert_eq!(events.ball_hit_paddle, Some(Side::Left));
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, _court, mut events, mut rng) = setup_world();
        create_paddle(&mut world, Side::Right, &config);
        // Right paddle spans x 764..780
        let ball = create_ball(&mut world, Vec2::new(752.0, 200.0), Vec2::new(6.0, -4.0), 16.0);

        collide_paddles(&mut world, &config, &mut events, &mut rng);

        let ball = ball_of(&world, ball);
        assert_eq!(ball.pos.x, 764.0 - 16.0);
        assert!((ball.vel.x + 6.0 * config.ball_rebound_factor).abs() < 1e-5);
        assert_eq!(events.ball_hit_paddle, Some(Side::Right));
    }

    #[test]
    fn test_rebound_jitter_is_bounded() {
        let (_world, config, _court, _events, mut rng) = setup_world();
        for _ in 0..100 {
            let mut world = World::new();
            let mut events = Events::new();
            create_paddle(&mut world, Side::Left, &config);
            let ball = create_ball(&mut world, Vec2::new(30.0, 190.0), Vec2::new(-6.0, 4.0), 16.0);

            collide_paddles(&mut world, &config, &mut events, &mut rng);

            let dy = ball_of(&world, ball).vel.y - 4.0;
            assert!(
                dy.abs() <= config.ball_rebound_jitter / 2.0,
                "vy perturbation {} out of range",
                dy
            );
        }
    }

    #[test]
    fn test_no_collision_when_ball_misses_paddle() {
        let (mut world, config, _court, mut events, mut rng) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        // Level with the paddle face but above it
        let ball = create_ball(&mut world, Vec2::new(30.0, 100.0), Vec2::new(-6.0, 0.0), 16.0);

        collide_paddles(&mut world, &config, &mut events, &mut rng);

        assert_eq!(ball_of(&world, ball).vel, Vec2::new(-6.0, 0.0));
        assert_eq!(events.ball_hit_paddle, None);
    }

    #[test]
    fn test_ball_flush_with_paddle_does_not_collide() {
        let (mut world, config, _court, mut events, mut rng) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        let ball = create_ball(&mut world, Vec2::new(36.0, 190.0), Vec2::new(6.0, 0.0), 16.0);

        collide_paddles(&mut world, &config, &mut events, &mut rng);

        assert_eq!(ball_of(&world, ball).vel.x, 6.0);
        assert_eq!(events.ball_hit_paddle, None);
    }

    #[test]
    fn test_only_one_paddle_rebound_per_frame() {
        // A ball wide enough to overlap both paddles at once
        let (mut world, config, _court, mut events, mut rng) = setup_world();
        create_paddle(&mut world, Side::Right, &config);
        create_paddle(&mut world, Side::Left, &config);
        let ball = create_ball(&mut world, Vec2::new(30.0, 190.0), Vec2::new(-6.0, 0.0), 740.0);

        collide_paddles(&mut world, &config, &mut events, &mut rng);

        let ball = ball_of(&world, ball);
        assert_eq!(events.ball_hit_paddle, Some(Side::Left), "Left paddle wins ties");
        assert_eq!(ball.pos.x, 36.0);
        assert!(ball.vel.x > 0.0, "Ball should be sent right exactly once");
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, _court, mut events, mut rng) = setup_world();
        create_paddle(&mut world, Side::Left, &config);

        collide_paddles(&mut world, &config, &mut events, &mut rng);

        assert_eq!(events.ball_hit_paddle, None);
        assert!(!events.ball_hit_wall);
    }
}
