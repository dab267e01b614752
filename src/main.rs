use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;

use hero_carousel::banner::engine::BannerEngine;
use hero_carousel::coverflow::engine::CoverflowEngine;
use hero_carousel::engine::{Engine, BACKGROUND};
use hero_carousel::library::Library;
use hero_carousel::texture_loader::TextureCache;
use hero_carousel::{Catalog, Config, Direction, Layout, Presenter, Variant};

/// Featured-titles hero carousel
#[derive(Parser, Debug)]
#[command(name = "hero-carousel")]
#[command(version, about = "Coverflow hero carousel for a featured media catalog", long_about = None)]
struct Args {
    /// Catalog of featured slides (TOML)
    catalog: PathBuf,

    /// Config file path
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Presentation style
    #[arg(long, value_enum)]
    variant: Option<Variant>,

    /// Auto-advance delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Start without auto-advance
    #[arg(long)]
    no_autoplay: bool,

    /// Show the catalog in random order
    #[arg(long)]
    shuffle: bool,

    /// Window width
    #[arg(long)]
    width: Option<i32>,

    /// Window height
    #[arg(long)]
    height: Option<i32>,
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = Config::load(args.config.as_deref()).context("failed to load configuration")?;

    if let Some(variant) = args.variant {
        config.carousel.variant = variant;
    }
    if let Some(delay_ms) = args.delay_ms {
        anyhow::ensure!(delay_ms > 0, "--delay-ms must be greater than 0");
        config.carousel.delay_ms = Some(delay_ms);
    }
    if args.no_autoplay {
        config.carousel.autoplay = false;
    }
    if let Some(width) = args.width {
        config.window.width = width;
    }
    if let Some(height) = args.height {
        config.window.height = height;
    }
    Ok(config)
}

fn engine_for(variant: Variant) -> Box<dyn Engine> {
    match variant {
        Variant::Coverflow => Box::new(CoverflowEngine::new()),
        Variant::Banner => Box::new(BannerEngine::new()),
    }
}

fn main() -> Result<()> {
    init_logger();
    let args = Args::parse();
    let config = load_config(&args)?;

    // A catalog that can't be read is treated like "no featured titles yet"
    let catalog = match Catalog::load(&args.catalog) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("{:#}", anyhow::Error::from(e));
            Catalog::default()
        }
    };

    let (mut rl, thread) = raylib::init()
        .size(config.window.width, config.window.height)
        .title("Hero Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(config.window.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut textures = TextureCache::new();
    textures.load_missing(&mut rl, &thread, catalog.slides());

    let mut rng = rand::rng();
    let items = if args.shuffle {
        catalog.shuffled(&mut rng)
    } else {
        catalog.to_shared()
    };

    let mut presenter = Presenter::new(items, config.layout(), Library::new())
        .with_autoplay(config.carousel.autoplay);
    if let Some(delay) = config.delay() {
        presenter = presenter.with_delay(delay);
    }
    let mut engine = engine_for(presenter.layout().variant());

    log::info!(
        "{} slides, {:?} variant, auto-advance every {:?}",
        presenter.len(),
        presenter.layout().variant(),
        presenter.delay()
    );

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = Duration::from_secs_f32(rl.get_frame_time());
        let screen = Vector2::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);

        // --- Input ---
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            presenter.advance(Direction::Next);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            presenter.advance(Direction::Prev);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            presenter.toggle_pause();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ENTER) {
            presenter.play_current();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_I) {
            presenter.select_current();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_B) {
            presenter.toggle_bookmark_current();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_S) {
            presenter.replace_items(catalog.shuffled(&mut rng));
        }
        if rl.is_key_pressed(KeyboardKey::KEY_V) {
            let variant = match presenter.layout().variant() {
                Variant::Coverflow => Variant::Banner,
                Variant::Banner => Variant::Coverflow,
            };
            presenter.set_layout(Layout::new(variant, config.geometry()));
            engine = engine_for(variant);
        }
        for (number, key) in NUMBER_KEYS.iter().enumerate() {
            if rl.is_key_pressed(*key) {
                presenter.jump_to(number);
            }
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let point = rl.get_mouse_position();
            let hit = presenter
                .view(screen.x)
                .and_then(|view| engine.hit_test(&view, point, screen));
            if let Some(index) = hit {
                presenter.activate(index);
            }
        }

        // --- Update ---
        presenter.update(dt);

        // --- Draw ---
        let mut d = rl.begin_drawing(&thread);
        match presenter.view(screen.x) {
            Some(view) => engine.render_frame(&view, &textures, &mut d),
            None => {
                d.clear_background(BACKGROUND);
                d.draw_text("No featured titles", 20, 20, 20, Color::LIGHTGRAY);
            }
        }
    }

    let library = presenter.actions();
    log::info!(
        "session ended: {} bookmarks, {} requests",
        library.bookmarks().count(),
        library.requests().len()
    );
    Ok(())
}

const NUMBER_KEYS: [KeyboardKey; 9] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];
