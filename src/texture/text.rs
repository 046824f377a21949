//! TTF text rendering.
//!
//! Text is rasterized with SDL2_ttf into a surface, uploaded as a texture and
//! copied onto the canvas. The game draws only a handful of short strings per
//! frame, so nothing is cached.

use std::path::Path;

use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::{Canvas, TextureCreator};
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::{Window, WindowContext};

use crate::error::{GameError, RenderError};

/// Where a piece of text is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// The text's top-left corner sits on the point.
    TopLeft(Point),
    /// The text's center sits on the point.
    Center(Point),
}

impl Anchor {
    /// The destination rectangle for text of the given size.
    pub fn place(&self, width: u32, height: u32) -> Rect {
        match *self {
            Anchor::TopLeft(point) => Rect::new(point.x(), point.y(), width, height),
            Anchor::Center(point) => Rect::from_center(point, width, height),
        }
    }
}

pub struct TextRenderer {
    font: Font<'static, 'static>,
    texture_creator: TextureCreator<WindowContext>,
}

impl TextRenderer {
    /// Loads the font at `path`. The TTF context must outlive the renderer, hence `'static`.
    pub fn new(
        ttf_context: &'static Sdl2TtfContext,
        texture_creator: TextureCreator<WindowContext>,
        path: &Path,
        point_size: u16,
    ) -> Result<Self, GameError> {
        let font = ttf_context.load_font(path, point_size).map_err(|reason| GameError::Font {
            path: path.to_path_buf(),
            reason,
        })?;

        Ok(Self { font, texture_creator })
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, text: &str, color: Color, anchor: Anchor) -> Result<(), RenderError> {
        let failed = |reason: String| RenderError::Text {
            text: text.to_string(),
            reason,
        };

        let surface = self.font.render(text).blended(color).map_err(|e| failed(e.to_string()))?;
        let texture = self
            .texture_creator
            .create_texture_from_surface(&surface)
            .map_err(|e| failed(e.to_string()))?;

        let dest = anchor.place(surface.width(), surface.height());
        canvas.copy(&texture, None, dest).map_err(failed)
    }
}
