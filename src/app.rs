use std::time::{Duration, Instant};

use sdl2::Sdl;
use tracing::{debug, info, trace, warn};

use crate::config::Config;
use crate::constants::{CANVAS_SIZE, FONT_SIZE, LOOP_TIME, WINDOW_TITLE};
use crate::error::{GameError, GameResult};
use crate::formatter;
use crate::game::Game;
use crate::platform;
use crate::texture::text::TextRenderer;

/// Main application wrapper that manages SDL initialization, window lifecycle, and the game loop.
pub struct App {
    pub game: Game,
    // Keep SDL alive for the app lifetime
    _sdl_context: Sdl,
}

impl App {
    /// Initializes SDL, creates the window, loads the font, and sets up the game state.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if any SDL initialization step fails, and
    /// `GameError::Font` if the configured font cannot be loaded.
    pub fn new(config: &Config) -> GameResult<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;

        debug!("Initializing SDL2 subsystems");
        let ttf_context = sdl2::ttf::init().map_err(|e| GameError::Sdl(e.to_string()))?;
        // Fonts borrow the TTF context, and the font lives as long as the app.
        // The context is leaked on purpose and stays alive until the process exits.
        let ttf_context = Box::leak(Box::new(ttf_context));
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

        trace!(width = CANVAS_SIZE.x, height = CANVAS_SIZE.y, "Creating game window");
        let window = video_subsystem
            .window(WINDOW_TITLE, CANVAS_SIZE.x, CANVAS_SIZE.y)
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let mut canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        canvas
            .set_logical_size(CANVAS_SIZE.x, CANVAS_SIZE.y)
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        debug!(renderer_info = ?canvas.info(), "Canvas renderer initialized");

        debug!(path = %config.font_path.display(), size = FONT_SIZE, "Loading font");
        let text_renderer = TextRenderer::new(ttf_context, canvas.texture_creator(), &config.font_path, FONT_SIZE)?;

        match config.seed {
            Some(seed) => info!(seed, "Using fixed seed"),
            None => debug!("Seeding from the operating system"),
        }
        let game = Game::new(canvas, text_renderer, event_pump, platform::rng(config.seed));

        info!("Application initialization completed successfully");
        Ok(App {
            game,
            _sdl_context: sdl_context,
        })
    }

    /// Executes a single frame and sleeps away whatever is left of `LOOP_TIME`.
    ///
    /// # Returns
    ///
    /// `true` if the game should continue running, `false` if the game requested exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        formatter::increment_frame();

        if self.game.tick() {
            return false;
        }

        let elapsed = start.elapsed();
        if elapsed < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(elapsed);
            if time != Duration::ZERO {
                platform::sleep(time);
            }
        } else {
            warn!("Game loop behind schedule by: {:?}", elapsed - LOOP_TIME);
        }

        true
    }
}
