//! Sprite atlases and the rectangles that index into them.
//!
//! Every texture is built once at startup by [`Assets::load`]. The simulation
//! only ever stores a [`TextureId`] and a source [`Rect`]; the renderer looks
//! the texture up when drawing.

pub mod art;

use crate::constants::*;
use crate::game::geometry::Rect;
use serde::{Deserialize, Serialize};

/// 24-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A texel grid; `None` is transparent.
#[derive(Debug, Clone)]
pub struct Texture {
    width: u32,
    height: u32,
    texels: Vec<Option<Rgb>>,
}

impl Texture {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            texels: vec![None; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x < self.width && y < self.height {
            self.texels[(y * self.width + x) as usize]
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u32, y: u32, color: Rgb) {
        if x < self.width && y < self.height {
            self.texels[(y * self.width + x) as usize] = Some(color);
        }
    }
}

/// Which atlas an entity samples from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureId {
    Background,
    Bird,
    Pipe,
    Numbers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BirdColor {
    #[default]
    Yellow,
    Blue,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipeColor {
    #[default]
    Green,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Day,
    Night,
}

/// Which end of a pipe pair a sprite is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeEnd {
    /// Hangs from the ceiling, opening faces down.
    Upper,
    /// Rises from the ground, opening faces up.
    Lower,
}

/// Source rectangle of one bird animation frame (`frame` in `0..3`).
///
/// Yellow and blue share the first atlas row, red sits on the second.
pub fn bird_frame(color: BirdColor, frame: usize) -> Rect {
    let frame = (frame % 3) as f32;
    let (col, row) = match color {
        BirdColor::Yellow => (frame, 0.0),
        BirdColor::Blue => (3.0 + frame, 0.0),
        BirdColor::Red => (frame, 1.0),
    };
    Rect::new(
        col * BIRD_FRAME_WIDTH,
        row * BIRD_FRAME_HEIGHT,
        BIRD_FRAME_WIDTH,
        BIRD_FRAME_HEIGHT,
    )
}

/// Atlas column order: red up, red down, green down, green up.
pub fn pipe_sprite(color: PipeColor, end: PipeEnd) -> Rect {
    let col = match (color, end) {
        (PipeColor::Red, PipeEnd::Lower) => 0.0,
        (PipeColor::Red, PipeEnd::Upper) => 1.0,
        (PipeColor::Green, PipeEnd::Upper) => 2.0,
        (PipeColor::Green, PipeEnd::Lower) => 3.0,
    };
    Rect::new(
        col * PIPE_SPRITE_WIDTH,
        0.0,
        PIPE_SPRITE_WIDTH,
        PIPE_SPRITE_HEIGHT,
    )
}

pub fn background_tile(theme: Theme) -> Rect {
    let col = match theme {
        Theme::Day => 0.0,
        Theme::Night => 1.0,
    };
    Rect::new(col * BG_TILE_WIDTH, 0.0, BG_TILE_WIDTH, BG_TILE_HEIGHT)
}

/// Source rectangle of a decimal digit in the numbers atlas.
pub fn digit_glyph(digit: u32) -> Rect {
    Rect::new(
        (digit % 10) as f32 * GLYPH_WIDTH,
        0.0,
        GLYPH_WIDTH,
        GLYPH_HEIGHT,
    )
}

/// All textures the game draws with.
pub struct Assets {
    background: Texture,
    bird: Texture,
    pipe: Texture,
    numbers: Texture,
}

impl Assets {
    /// Build every atlas.
    pub fn load() -> Self {
        let assets = Self {
            background: build_backgrounds(),
            bird: build_birds(),
            pipe: build_pipes(),
            numbers: build_numbers(),
        };
        log::debug!(
            "assets built: background {}x{}, bird {}x{}, pipe {}x{}, numbers {}x{}",
            assets.background.width,
            assets.background.height,
            assets.bird.width,
            assets.bird.height,
            assets.pipe.width,
            assets.pipe.height,
            assets.numbers.width,
            assets.numbers.height
        );
        assets
    }

    pub fn texture(&self, id: TextureId) -> &Texture {
        match id {
            TextureId::Background => &self.background,
            TextureId::Bird => &self.bird,
            TextureId::Pipe => &self.pipe,
            TextureId::Numbers => &self.numbers,
        }
    }
}

fn build_backgrounds() -> Texture {
    let (w, h) = (BG_TILE_WIDTH as u32, BG_TILE_HEIGHT as u32);
    let mut tex = Texture::new(w * 2, h);
    art::paint_background(&mut tex, 0, w, h, &art::DAY_SKY);
    art::paint_background(&mut tex, w, w, h, &art::NIGHT_SKY);
    tex
}

fn build_birds() -> Texture {
    let (w, h) = (BIRD_FRAME_WIDTH as u32, BIRD_FRAME_HEIGHT as u32);
    let mut tex = Texture::new(w * 6, h * 2);
    for (color, palette) in [
        (BirdColor::Yellow, &art::YELLOW_BIRD),
        (BirdColor::Blue, &art::BLUE_BIRD),
        (BirdColor::Red, &art::RED_BIRD),
    ] {
        for (frame, sprite) in art::BIRD_FRAMES.iter().enumerate() {
            let src = bird_frame(color, frame);
            art::paint_bird(&mut tex, src.x as u32, src.y as u32, sprite, palette);
        }
    }
    tex
}

fn build_pipes() -> Texture {
    let (w, h) = (PIPE_SPRITE_WIDTH as u32, PIPE_SPRITE_HEIGHT as u32);
    let mut tex = Texture::new(w * 4, h);
    for color in [PipeColor::Red, PipeColor::Green] {
        let palette = match color {
            PipeColor::Red => &art::RED_PIPE,
            PipeColor::Green => &art::GREEN_PIPE,
        };
        for end in [PipeEnd::Upper, PipeEnd::Lower] {
            let src = pipe_sprite(color, end);
            art::paint_pipe(&mut tex, src.x as u32, w, h, end == PipeEnd::Lower, palette);
        }
    }
    tex
}

fn build_numbers() -> Texture {
    let (w, h) = (GLYPH_WIDTH as u32, GLYPH_HEIGHT as u32);
    let mut tex = Texture::new(w * 10, h);
    for (digit, glyph) in art::DIGITS.iter().enumerate() {
        art::paint_digit(&mut tex, digit as u32 * w, w, h, glyph);
    }
    tex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atlas_dimensions() {
        let assets = Assets::load();
        let bg = assets.texture(TextureId::Background);
        assert_eq!((bg.width(), bg.height()), (288, 256));
        let bird = assets.texture(TextureId::Bird);
        assert_eq!((bird.width(), bird.height()), (102, 24));
        let pipe = assets.texture(TextureId::Pipe);
        assert_eq!((pipe.width(), pipe.height()), (104, 256));
        let numbers = assets.texture(TextureId::Numbers);
        assert_eq!((numbers.width(), numbers.height()), (120, 18));
    }

    #[test]
    fn test_bird_frames_tile_the_atlas() {
        assert_eq!(bird_frame(BirdColor::Yellow, 0), Rect::new(0.0, 0.0, 17.0, 12.0));
        assert_eq!(bird_frame(BirdColor::Blue, 2), Rect::new(85.0, 0.0, 17.0, 12.0));
        assert_eq!(bird_frame(BirdColor::Red, 1), Rect::new(17.0, 12.0, 17.0, 12.0));
    }

    #[test]
    fn test_every_bird_frame_has_pixels() {
        let assets = Assets::load();
        let tex = assets.texture(TextureId::Bird);
        for color in [BirdColor::Yellow, BirdColor::Blue, BirdColor::Red] {
            for frame in 0..3 {
                let src = bird_frame(color, frame);
                let center = tex.get((src.x + 8.0) as u32, (src.y + 6.0) as u32);
                assert!(center.is_some(), "{:?} frame {} is empty", color, frame);
            }
        }
    }

    #[test]
    fn test_pipe_sprites_are_distinct_columns() {
        let mut xs: Vec<f32> = [
            (PipeColor::Red, PipeEnd::Lower),
            (PipeColor::Red, PipeEnd::Upper),
            (PipeColor::Green, PipeEnd::Upper),
            (PipeColor::Green, PipeEnd::Lower),
        ]
        .iter()
        .map(|(c, e)| pipe_sprite(*c, *e).x)
        .collect();
        xs.dedup();
        assert_eq!(xs, vec![0.0, 26.0, 52.0, 78.0]);
    }

    #[test]
    fn test_digit_glyphs_have_ink() {
        let assets = Assets::load();
        let tex = assets.texture(TextureId::Numbers);
        for digit in 0..10 {
            let src = digit_glyph(digit);
            let ink = (0..18)
                .flat_map(|y| (0..12).map(move |x| (x, y)))
                .filter(|(x, y)| tex.get(src.x as u32 + x, *y) == Some(Rgb(255, 255, 255)))
                .count();
            assert!(ink > 0, "digit {} has no fill", digit);
        }
    }

    #[test]
    fn test_theme_config_names() {
        let theme: Theme = serde_json::from_str("\"night\"").unwrap();
        assert_eq!(theme, Theme::Night);
        let color: BirdColor = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(color, BirdColor::Red);
    }
}
