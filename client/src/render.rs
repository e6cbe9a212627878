use raylib::color::Color;
use raylib::drawing::{RaylibDraw, RaylibDrawHandle};
use raylib::math::Vector2;
use raylib::text::Font;
use shared::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use shared::world_data::{RunState, WorldData};

const BRICK_BORDER: i32 = 2;
const HUD_TEXT_WIDTH: f32 = 110.0;
const HUD_FONT_SIZE: f32 = 24.0;
const BANNER_FONT_SIZE: f32 = 40.0;
const TEXT_SPACING: f32 = 1.0;

pub fn draw_world(draw_handle: &mut RaylibDrawHandle, font: &Font, world_data: &WorldData) {
    draw_handle.clear_background(Color::BLACK);

    let paddle = &world_data.paddle;
    draw_handle.draw_rectangle(
        paddle.position.x as i32,
        paddle.position.y as i32,
        paddle.width as i32,
        paddle.height as i32,
        Color::WHITE,
    );

    let ball = &world_data.ball;
    draw_handle.draw_circle(
        ball.position.x as i32,
        ball.position.y as i32,
        ball.radius,
        Color::WHITE,
    );

    for brick in world_data.bricks.iter().filter(|b| !b.destroyed) {
        let x = brick.position.x as i32;
        let y = brick.position.y as i32;
        let width = brick.width as i32;
        let height = brick.height as i32;

        draw_handle.draw_rectangle(x, y, width, height, Color::new(100, 100, 100, 255));
        draw_handle.draw_rectangle(
            x + BRICK_BORDER,
            y + BRICK_BORDER,
            width - BRICK_BORDER * 2,
            height - BRICK_BORDER * 2,
            Color::new(255, 165, 20, 255),
        );
    }

    draw_hud(draw_handle, font, world_data);
}

fn draw_hud(draw_handle: &mut RaylibDrawHandle, font: &Font, world_data: &WorldData) {
    if world_data.run_state == RunState::GameOver {
        draw_handle.draw_text_ex(
            font,
            "GAME OVER",
            Vector2::new(
                WORLD_WIDTH as f32 / 2.0 - 45.0,
                WORLD_HEIGHT as f32 / 2.0 - 20.0,
            ),
            BANNER_FONT_SIZE,
            TEXT_SPACING,
            Color::WHITE,
        );
        return;
    }

    draw_handle.draw_text_ex(
        font,
        &format!("Hearts: {}", world_data.lives),
        Vector2::new(0.0, 0.0),
        HUD_FONT_SIZE,
        TEXT_SPACING,
        Color::WHITE,
    );

    draw_handle.draw_text_ex(
        font,
        &format!("Score: {}", world_data.score),
        Vector2::new(WORLD_WIDTH as f32 - HUD_TEXT_WIDTH, 0.0),
        HUD_FONT_SIZE,
        TEXT_SPACING,
        Color::WHITE,
    );
}
