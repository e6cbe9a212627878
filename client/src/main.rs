mod input;
mod render;

use anyhow::{anyhow, bail, Context, Result};
use log::{debug, info};
use raylib::audio::RaylibAudio;
use raylib::init;
use shared::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use shared::input::apply_intent;
use shared::simulation::{step, GameEvent};
use shared::world_data::{RunState, WorldData};
use std::any::Any;
use std::panic;
use std::path::Path;
use std::process::ExitCode;
use tracing::info_span;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const WINDOW_TITLE: &str = "Arkanoid by elnawe";
const FONT_PATH: &str = "assets/Roboto-Regular.ttf";
const MUSIC_PATH: &str = "assets/tetris.ogg";

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();
}

fn run() -> Result<()> {
    let (mut handle, thread) = panic::catch_unwind(|| {
        init()
            .size(WORLD_WIDTH as i32, WORLD_HEIGHT as i32)
            .title(WINDOW_TITLE)
            .vsync()
            .build()
    })
    .map_err(|payload| anyhow!("{}", panic_message(&*payload)))
    .context("Couldn't create window")?;

    // Escape goes through the input sampler like every other key.
    handle.set_exit_key(None);
    info!("Window ready ({}x{})", WORLD_WIDTH, WORLD_HEIGHT);

    // raylib falls back to its built-in font instead of failing on a missing file.
    require_asset(FONT_PATH)?;
    let font = handle
        .load_font(&thread, FONT_PATH)
        .map_err(|e| anyhow!("{}", e))
        .with_context(|| format!("Couldn't load font '{}'", FONT_PATH))?;
    info!("Loaded font '{}'", FONT_PATH);

    let audio = RaylibAudio::init_audio_device()
        .map_err(|e| anyhow!("{:?}", e))
        .context("Couldn't open audio device")?;

    if !audio.is_audio_device_ready() {
        bail!("Couldn't open audio device");
    }

    require_asset(MUSIC_PATH)?;
    let mut music = audio
        .new_music(MUSIC_PATH)
        .map_err(|e| anyhow!("{}", e))
        .with_context(|| format!("Couldn't load music '{}'", MUSIC_PATH))?;
    music.play_stream();
    info!("Playing '{}'", MUSIC_PATH);

    let mut world_data = WorldData::new();

    let session = info_span!("session");
    let _entered = session.enter();

    while world_data.run_state != RunState::Quit {
        let intent = input::sample_intent(&handle);
        apply_intent(&mut world_data, intent);

        for event in step(&mut world_data) {
            log_event(event);
        }

        music.update_stream();

        let mut draw_handle = handle.begin_drawing(&thread);
        render::draw_world(&mut draw_handle, &font, &world_data);
    }

    info!(
        "Session ended: score {}, lives {}, bricks left {}",
        world_data.score,
        world_data.lives,
        world_data.remaining_bricks()
    );

    Ok(())
}

fn log_event(event: GameEvent) {
    match event {
        GameEvent::BrickDestroyed { index } => info!("Brick {} destroyed", index),
        GameEvent::LifeLost { lives_left } => info!("Ball lost, {} lives left", lives_left),
        GameEvent::GameOver { score } => info!("Game over with score {}", score),
        GameEvent::WallBounce | GameEvent::PaddleBounce => debug!("{:?}", event),
    }
}

fn require_asset(path: &str) -> Result<()> {
    if !Path::new(path).is_file() {
        bail!("Couldn't load file '{}': not found", path);
    }

    Ok(())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_title() {
        assert_eq!(WINDOW_TITLE, "Arkanoid by elnawe");
    }

    #[test]
    fn test_require_asset_rejects_missing_file() {
        let error = require_asset("assets/does-not-exist.ttf").unwrap_err();

        assert!(error.to_string().contains("does-not-exist.ttf"));
    }

    #[test]
    fn test_require_asset_rejects_directory() {
        assert!(require_asset(env!("CARGO_MANIFEST_DIR")).is_err());
    }

    #[test]
    fn test_require_asset_accepts_existing_file() {
        let manifest = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");

        assert!(require_asset(manifest).is_ok());
    }

    #[test]
    fn test_window_panic_becomes_error() {
        let result =
            panic::catch_unwind(|| -> u32 { panic!("Attempting to create window failed!") })
                .map_err(|payload| anyhow!("{}", panic_message(&*payload)))
                .context("Couldn't create window");

        let error = result.unwrap_err();
        assert_eq!(
            format!("{:#}", error),
            "Couldn't create window: Attempting to create window failed!"
        );
    }

    #[test]
    fn test_panic_message_formatted() {
        let payload = panic::catch_unwind(|| -> u32 { panic!("code {}", 7) }).unwrap_err();

        assert_eq!(panic_message(&*payload), "code 7");
    }
}
