//! Draws a run into a [`PixelBuffer`]: looping background, entities, score.

use super::blit::{blit, draw_texture_pro, Camera};
use super::pixels::PixelBuffer;
use crate::assets::{background_tile, digit_glyph, Assets, Rgb, TextureId, Theme};
use crate::constants::*;
use crate::game::geometry::Rect;
use crate::game::Game;

/// Two background tiles covering the view around `player_x`.
pub fn background_tiles(player_x: f32) -> [Rect; 2] {
    let x0 = player_x - player_x.rem_euclid(WORLD_WIDTH) - WORLD_WIDTH / 2.0;
    [
        Rect::new(x0, 0.0, WORLD_WIDTH, WORLD_HEIGHT),
        Rect::new(x0 + WORLD_WIDTH, 0.0, WORLD_WIDTH, WORLD_HEIGHT),
    ]
}

/// Decimal digits of `n`, most significant first.
pub fn digits(n: u32) -> Vec<u32> {
    n.to_string().chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Glyph size in buffer pixels at `zoom`, floored at half the atlas glyph.
pub fn glyph_size(zoom: f32) -> (f32, f32) {
    let width = (GLYPH_WIDTH * SCALE * zoom).max(GLYPH_WIDTH / 2.0);
    let height = (GLYPH_HEIGHT * SCALE * zoom).max(GLYPH_HEIGHT / 2.0);
    (width, height)
}

/// Blit `n` centred on `center_x` with its top edge at `top`.
pub fn draw_number(
    pixels: &mut PixelBuffer,
    assets: &Assets,
    n: u32,
    center_x: f32,
    top: f32,
    zoom: f32,
) {
    let (w, h) = glyph_size(zoom);
    let digits = digits(n);
    let left = center_x - w * digits.len() as f32 / 2.0;
    let numbers = assets.texture(TextureId::Numbers);
    for (i, d) in digits.into_iter().enumerate() {
        let dst = Rect::new((left + i as f32 * w).round(), top.round(), w, h);
        blit(pixels, numbers, &digit_glyph(d), &dst, 0.0);
    }
}

/// Render the whole scene for the current frame.
pub fn draw_world(pixels: &mut PixelBuffer, assets: &Assets, game: &Game, theme: Theme) {
    pixels.fill(Rgb::default());
    if !game.world.is_live() {
        return;
    }

    let player_x = game.world.player().position.x;
    let camera = Camera::follow(player_x, pixels.width(), pixels.height());

    let background = assets.texture(TextureId::Background);
    let tile = background_tile(theme);
    for dst in background_tiles(player_x) {
        draw_texture_pro(pixels, &camera, background, &tile, &dst, 0.0);
    }

    // Pipes first so the bird is always on top.
    let view_left = camera.origin_x - PIPE_WIDTH;
    let view_right = camera.origin_x + pixels.width() as f32 / camera.zoom.max(f32::EPSILON);
    for pipe in game.world.pipes() {
        if pipe.rect.right() < view_left || pipe.rect.x > view_right {
            continue;
        }
        let texture = assets.texture(pipe.texture);
        draw_texture_pro(pixels, &camera, texture, &pipe.src, &pipe.rect, pipe.rotation);
    }

    let player = game.world.player();
    let texture = assets.texture(player.texture);
    draw_texture_pro(pixels, &camera, texture, &player.src, &player.rect, player.rotation);

    let center_x = pixels.width() as f32 / 2.0;
    let top = pixels.height() as f32 * 0.05;
    draw_number(pixels, assets, game.run.score, center_x, top, camera.zoom);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_background_tiles_cover_view() {
        for player_x in [0.0, 100.0, 575.0, 576.0, 12_345.0] {
            let [a, b] = background_tiles(player_x);
            assert!(a.x <= player_x - WORLD_WIDTH / 2.0);
            assert!(b.right() >= player_x + WORLD_WIDTH / 2.0);
            assert_eq!(a.right(), b.x);
        }
    }

    #[test]
    fn test_digits() {
        assert_eq!(digits(0), vec![0]);
        assert_eq!(digits(40), vec![4, 0]);
        assert_eq!(digits(123), vec![1, 2, 3]);
    }

    #[test]
    fn test_glyphs_never_shrink_below_half() {
        let (w, h) = glyph_size(0.01);
        assert_eq!((w, h), (GLYPH_WIDTH / 2.0, GLYPH_HEIGHT / 2.0));
        let (w, _) = glyph_size(1.0);
        assert_eq!(w, GLYPH_WIDTH * SCALE);
    }

    #[test]
    fn test_draw_world_puts_bird_in_centre() {
        let assets = Assets::load();
        let game = Game::new(GameConfig {
            seed: Some(1),
            pipe_pairs: 2,
            ..GameConfig::default()
        });
        let mut pixels = PixelBuffer::new(72, 128);
        draw_world(&mut pixels, &assets, &game, Theme::Day);
        // Background is opaque, so nothing is left at the clear colour.
        assert_ne!(pixels.get(0, 100), Rgb::default());

        let mut without_bird = PixelBuffer::new(72, 128);
        let mut empty = Game::new(GameConfig {
            seed: Some(1),
            pipe_pairs: 2,
            ..GameConfig::default()
        });
        empty.world.player_mut().src = Rect::new(0.0, 0.0, 0.0, 0.0);
        draw_world(&mut without_bird, &assets, &empty, Theme::Day);
        assert_ne!(pixels.get(36, 64), without_bird.get(36, 64));
    }
}
