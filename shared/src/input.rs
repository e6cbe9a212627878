use crate::constants::{PADDLE_STEP, WORLD_WIDTH};
use crate::world_data::{RunState, WorldData};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Movement {
    #[default]
    None,
    Left,
    Right,
}

/// What the player asked for during one tick, independent of the input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerIntent {
    pub movement: Movement,
    pub quit: bool,
}

impl PlayerIntent {
    pub fn from_keys(left: bool, right: bool, quit: bool) -> Self {
        let movement = match (left, right) {
            (true, false) => Movement::Left,
            (false, true) => Movement::Right,
            _ => Movement::None,
        };

        PlayerIntent { movement, quit }
    }
}

/// Applies the intent before the simulation step. Runs in every run state so
/// quitting stays reachable after game over.
pub fn apply_intent(world: &mut WorldData, intent: PlayerIntent) {
    if intent.quit {
        world.run_state = RunState::Quit;
    }

    let offset = match intent.movement {
        Movement::None => return,
        Movement::Left => -(PADDLE_STEP as f32),
        Movement::Right => PADDLE_STEP as f32,
    };

    let paddle = &mut world.paddle;
    let next_x = paddle.position.x + offset;

    if next_x >= 0.0 && next_x + paddle.width <= WORLD_WIDTH as f32 {
        paddle.position.x = next_x;
    }
}
