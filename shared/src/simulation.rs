//! Fixed-timestep game update.
//!
//! One call to [`step`] is one frame of play. The sub-steps are public so each
//! rule can be exercised on its own; `step` runs them in order: move, bricks,
//! walls, paddle, bottom edge.

use crate::constants::{BALL_SPEED_INCREMENT, WORLD_HEIGHT, WORLD_WIDTH};
use crate::world_data::{Ball, Paddle, RunState, WorldData};

/// Something that happened during a tick, in the order it was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BrickDestroyed { index: usize },
    WallBounce,
    PaddleBounce,
    LifeLost { lives_left: u32 },
    GameOver { score: u32 },
}

/// Advances the world by one tick. Does nothing unless the game is playing.
pub fn step(world: &mut WorldData) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if world.run_state != RunState::Playing {
        return events;
    }

    advance_ball(&mut world.ball);

    if let Some(index) = resolve_brick_collision(world) {
        events.push(GameEvent::BrickDestroyed { index });
    }

    if resolve_wall_collision(&mut world.ball) {
        events.push(GameEvent::WallBounce);
    }

    if resolve_paddle_collision(&mut world.ball, &world.paddle) {
        events.push(GameEvent::PaddleBounce);
    }

    if let Some(event) = resolve_ball_lost(world) {
        events.push(event);
    }

    events
}

pub fn advance_ball(ball: &mut Ball) {
    ball.position += ball.direction * ball.speed;
}

/// Destroys the first live brick, in index order, that contains the ball
/// center. Returns its index.
pub fn resolve_brick_collision(world: &mut WorldData) -> Option<usize> {
    let ball_position = world.ball.position;
    let index = world
        .bricks
        .iter()
        .position(|brick| brick.contains(ball_position))?;

    world.bricks[index].destroyed = true;

    let ball = &mut world.ball;
    ball.direction = -ball.direction;
    ball.speed += BALL_SPEED_INCREMENT;

    world.score += 1;

    Some(index)
}

/// Side and top walls. The bottom edge is handled by [`resolve_ball_lost`].
pub fn resolve_wall_collision(ball: &mut Ball) -> bool {
    let mut bounced = false;

    if ball.position.x >= WORLD_WIDTH as f32 || ball.position.x <= 0.0 {
        ball.direction.x *= -1.0;
        bounced = true;
    }

    if ball.position.y <= 0.0 {
        ball.direction.y *= -1.0;
        bounced = true;
    }

    bounced
}

/// Sends the ball up once its center is at or below the paddle's top edge and
/// horizontally over the paddle.
///
/// There is no lower bound on the test: a ball that is already under the top
/// edge keeps bouncing, and speeding up, on every tick it stays there.
pub fn resolve_paddle_collision(ball: &mut Ball, paddle: &Paddle) -> bool {
    let over_paddle = ball.position.x >= paddle.position.x
        && ball.position.x <= paddle.position.x + paddle.width;

    if ball.position.y >= paddle.position.y && over_paddle {
        ball.direction.y = -1.0;
        ball.speed += BALL_SPEED_INCREMENT;
        return true;
    }

    false
}

/// Costs a life once the ball falls past the bottom edge, or ends the game
/// when none are left. The ball is left where it fell on game over.
pub fn resolve_ball_lost(world: &mut WorldData) -> Option<GameEvent> {
    if world.ball.position.y <= WORLD_HEIGHT as f32 {
        return None;
    }

    if world.lives > 0 {
        world.lives -= 1;
        world.ball = Ball::spawn();

        Some(GameEvent::LifeLost {
            lives_left: world.lives,
        })
    } else {
        world.run_state = RunState::GameOver;

        Some(GameEvent::GameOver { score: world.score })
    }
}
