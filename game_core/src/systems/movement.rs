use glam::Vec2;
use hecs::World;

use crate::systems::collision::{enters_left_band, enters_right_band, hits_wall, paddle_strike};
use crate::{Ball, Config, Direction, Events, Paddle, Time};

/// Advance the ball one frame.
///
/// The candidate position is computed once and every check reads it, in fixed
/// order: wall reflection, left paddle, right paddle, commit, out-of-bounds.
/// Wall reflection only rewrites the angle; the commit this frame still uses
/// the pre-reflection delta, so the bounce takes effect next frame.
pub fn move_ball(world: &mut World, time: &Time, config: &Config, events: &mut Events) {
    let mut lower_left = None;
    let mut lower_right = None;
    for (_entity, paddle) in world.query::<&Paddle>().iter() {
        match paddle.side {
            Direction::Left => lower_left = Some(paddle.lower_y(config)),
            Direction::Right => lower_right = Some(paddle.lower_y(config)),
        }
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let delta_time = (time.now - time.last_frame) / ball.speed;
        let delta_x = ball.direction.sign() * delta_time;
        let delta_y = ball.direction.sign() * delta_x * ball.angle.tan();
        let next = Vec2::new(ball.pos.x + delta_x, ball.pos.y + delta_y);

        if hits_wall(next.y, config) {
            ball.angle = std::f32::consts::PI - ball.angle;
            events.ball_hit_wall = true;
        }

        if enters_left_band(ball.pos.x, next.x, config) {
            if let Some(lower_y) = lower_left {
                if let Some(offset) = paddle_strike(next.y, lower_y, config) {
                    ball.speed -= config.speed_decay;
                    ball.direction = Direction::Right;
                    ball.angle = offset * config.max_deflect;
                    events.ball_hit_paddle = true;
                }
            }
        }

        if enters_right_band(ball.pos.x, next.x, config) {
            if let Some(lower_y) = lower_right {
                if let Some(offset) = paddle_strike(next.y, lower_y, config) {
                    ball.speed -= config.speed_decay;
                    ball.direction = Direction::Left;
                    ball.angle = offset * config.max_deflect;
                    events.ball_hit_paddle = true;
                }
            }
        }

        ball.pos = next;

        if next.x <= config.out_left {
            events.ball_out = Some(Direction::Left);
        } else if next.x >= config.out_right {
            events.ball_out = Some(Direction::Right);
        }
    }
}
