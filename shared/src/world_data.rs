use crate::constants::{
    BALL_RADIUS, BALL_SPAWN_SPEED, BALL_SPAWN_X, BALL_SPAWN_Y, BRICKS_IN_ROW, BRICK_BOTTOM_ROW_Y,
    BRICK_COUNT, BRICK_HEIGHT, BRICK_TOP_ROW_Y, BRICK_WIDTH, PADDLE_HEIGHT, PADDLE_START_X,
    PADDLE_START_Y, PADDLE_WIDTH, STARTING_LIVES, WORLD_WIDTH,
};
use cgmath::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Playing,
    /// Physics are frozen, the loop keeps drawing until quit.
    GameOver,
    Quit,
}

/// Full state of one game, owned by the main loop for the whole session.
#[derive(Debug, Clone)]
pub struct WorldData {
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: [Brick; BRICK_COUNT],
    pub lives: u32,
    pub score: u32,
    pub run_state: RunState,
}

impl WorldData {
    pub fn new() -> Self {
        WorldData {
            paddle: Paddle::new(),
            ball: Ball::spawn(),
            bricks: create_bricks(),
            lives: STARTING_LIVES,
            score: 0,
            run_state: RunState::Playing,
        }
    }

    pub fn remaining_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| !b.destroyed).count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    /// Top-left corner.
    pub position: Vector2<f32>,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new() -> Self {
        Paddle {
            position: Vector2::new(PADDLE_START_X as f32, PADDLE_START_Y as f32),
            width: PADDLE_WIDTH as f32,
            height: PADDLE_HEIGHT as f32,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    /// Center of the ball.
    pub position: Vector2<f32>,
    /// Each component is either `1.0` or `-1.0`; positive y points down.
    pub direction: Vector2<f32>,
    pub radius: f32,
    pub speed: f32,
}

impl Ball {
    pub fn spawn() -> Self {
        Ball {
            position: Vector2::new(BALL_SPAWN_X as f32, BALL_SPAWN_Y as f32),
            direction: Vector2::new(1.0, -1.0),
            radius: BALL_RADIUS as f32,
            speed: BALL_SPAWN_SPEED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brick {
    /// Top-left corner.
    pub position: Vector2<f32>,
    pub width: f32,
    pub height: f32,
    pub destroyed: bool,
}

impl Brick {
    pub fn new(position: Vector2<f32>) -> Self {
        Brick {
            position,
            width: BRICK_WIDTH as f32,
            height: BRICK_HEIGHT as f32,
            destroyed: false,
        }
    }

    /// Inclusive on every edge. Destroyed bricks contain nothing.
    pub fn contains(&self, point: Vector2<f32>) -> bool {
        !self.destroyed
            && point.x >= self.position.x
            && point.x <= self.position.x + self.width
            && point.y >= self.position.y
            && point.y <= self.position.y + self.height
    }
}

fn create_bricks() -> [Brick; BRICK_COUNT] {
    std::array::from_fn(|index| {
        let x = (BRICK_WIDTH * index) % WORLD_WIDTH;
        let y = if index < BRICKS_IN_ROW {
            BRICK_TOP_ROW_Y
        } else {
            BRICK_BOTTOM_ROW_Y
        };

        Brick::new(Vector2::new(x as f32, y as f32))
    })
}
