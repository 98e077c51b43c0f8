mod achievements;
mod animation;
mod bird;
mod collision;
mod config;
mod game;
mod gui;
mod input_system;
mod lifecycle;
mod obstacles;
mod particle;
mod pipe;
mod save;
mod skin;
mod sound;
mod sprite;
mod text;
mod ui;

use config::{GameConfig, CONFIG_PATH};
use game::rendering::Screens;
use game::{Game, GameTextures};
use input_system::InputSystem;
use rand::rngs::StdRng;
use rand::SeedableRng;
use save::SaveManager;
use sdl2::image::LoadSurface;
use sdl2::surface::Surface;
use sound::RodioSound;
use sprite::{load_texture, BirdSprites};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const IMAGE_DIR: &str = "assets/img";
const SOUND_DIR: &str = "assets/sound";

fn init_logging() -> Result<(), String> {
    let directive: Directive = "flappy=info"
        .parse()
        .map_err(|e| format!("Bad log directive: {}", e))?;
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(directive))
        .init();
    Ok(())
}

/// Largest scale (at most 1) at which the logical screen fits the desktop
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem, config: &GameConfig) -> f32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => {
            // Leave 10% margin for taskbars/decorations
            let usable_w = display_mode.w as f32 * 0.9;
            let usable_h = display_mode.h as f32 * 0.9;

            let scale_w = usable_w / config.screen.width as f32;
            let scale_h = usable_h / config.screen.height as f32;

            scale_w.min(scale_h).clamp(0.25, 1.0)
        }
        Err(e) => {
            tracing::warn!("Could not detect monitor size, using native size: {}", e);
            1.0
        }
    }
}

fn main() -> Result<(), String> {
    init_logging()?;
    tracing::info!("Starting Flappy Bird");

    let config = GameConfig::load_or_default(CONFIG_PATH)?;
    let image_dir = Path::new(IMAGE_DIR);

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window_scale = calculate_window_scale(&video_subsystem, &config);
    let window_width = (config.screen.width as f32 * window_scale) as u32;
    let window_height = (config.screen.height as f32 * window_scale) as u32;
    tracing::info!("Window {}x{} (scale {:.2})", window_width, window_height, window_scale);

    let mut window = video_subsystem
        .window("Flappy Bird", window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let icon_path = image_dir.join("yellow").join("bird1.png");
    let icon = Surface::from_file(&icon_path)
        .map_err(|e| format!("Failed to load icon {}: {}", icon_path.display(), e))?;
    window.set_icon(icon);

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Set logical size for automatic scaling
    canvas
        .set_logical_size(config.screen.width, config.screen.height)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;

    let bird_sprites = BirdSprites::load(&texture_creator, image_dir)?;
    let background = load_texture(&texture_creator, &image_dir.join("bg.png"))?;
    let ground = load_texture(&texture_creator, &image_dir.join("ground.png"))?;
    let pipe = load_texture(&texture_creator, &image_dir.join("pipe.png"))?;
    let restart = load_texture(&texture_creator, &image_dir.join("restart.png"))?;

    let bird_size = bird_sprites.frame_size()?;
    let pipe_query = pipe.query();
    let textures = GameTextures {
        birds: &bird_sprites,
        background: &background,
        ground: &ground,
        pipe: &pipe,
        restart: &restart,
    };

    let mut sound = RodioSound::load(Path::new(SOUND_DIR))?;

    let store = SaveManager::open(SaveManager::default_directory());
    tracing::info!("Profile directory: {}", store.directory().display());

    let frame_duration = Duration::from_secs_f64(1.0 / config.screen.fps as f64);
    let mut game = Game::new(
        config,
        store,
        StdRng::from_entropy(),
        bird_size,
        (pipe_query.width, pipe_query.height),
    );
    let screens = Screens::new(&game.layout);
    let mut input_system = InputSystem::new();

    let start = Instant::now();
    loop {
        let frame_start = Instant::now();

        let input = input_system.poll(&mut event_pump);
        if input.quit {
            break;
        }

        let now = start.elapsed().as_millis() as u64;
        game.tick(&input, now, &mut sound);
        game.render(&mut canvas, &textures, &screens, now)?;
        canvas.present();

        // Sleep off the rest of the tick
        if let Some(remaining) = frame_duration.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    tracing::info!("Quit with high score {}", game.session.high_score);
    Ok(())
}
