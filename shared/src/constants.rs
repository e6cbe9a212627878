pub const WORLD_WIDTH: usize = 640;
pub const WORLD_HEIGHT: usize = 480;

pub const BRICK_COUNT: usize = 20;
pub const BRICKS_IN_ROW: usize = WORLD_WIDTH / BRICK_WIDTH;
pub const BRICK_WIDTH: usize = 64;
pub const BRICK_HEIGHT: usize = 20;
pub const BRICK_TOP_ROW_Y: usize = 30;
pub const BRICK_BOTTOM_ROW_Y: usize = 50;

pub const PADDLE_WIDTH: usize = 75;
pub const PADDLE_HEIGHT: usize = 10;
pub const PADDLE_START_X: usize = 250;
pub const PADDLE_START_Y: usize = WORLD_HEIGHT - 20;
pub const PADDLE_STEP: usize = 10;

pub const BALL_RADIUS: usize = 7;
pub const BALL_SPAWN_X: usize = 250;
pub const BALL_SPAWN_Y: usize = WORLD_HEIGHT - 30;
pub const BALL_SPAWN_SPEED: f32 = 2.0;

/// Added to the ball speed on every brick or paddle hit.
pub const BALL_SPEED_INCREMENT: f32 = 0.10;

pub const STARTING_LIVES: u32 = 2;
