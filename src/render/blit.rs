//! Sprite blitting: world-to-screen mapping and scaled, rotated copies out
//! of a texture atlas.

use super::pixels::PixelBuffer;
use crate::assets::Texture;
use crate::constants::WORLD_HEIGHT;
use crate::game::geometry::{Rect, Vec2};

/// Maps world coordinates to buffer pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Buffer pixels per world unit.
    pub zoom: f32,
    /// World x that lands on buffer column 0.
    pub origin_x: f32,
}

impl Camera {
    /// Full world height fits the buffer; `target_x` sits at the centre column.
    pub fn follow(target_x: f32, buffer_width: usize, buffer_height: usize) -> Self {
        let zoom = buffer_height as f32 / WORLD_HEIGHT;
        let half_view = if zoom > 0.0 {
            buffer_width as f32 / 2.0 / zoom
        } else {
            0.0
        };
        Self {
            zoom,
            origin_x: target_x - half_view,
        }
    }

    pub fn to_screen(&self, p: Vec2) -> Vec2 {
        Vec2::new((p.x - self.origin_x) * self.zoom, p.y * self.zoom)
    }

    pub fn rect_to_screen(&self, r: &Rect) -> Rect {
        let top_left = self.to_screen(Vec2::new(r.x, r.y));
        Rect::new(top_left.x, top_left.y, r.width * self.zoom, r.height * self.zoom)
    }
}

/// Copy `src` texels of `texture` into `dst` (buffer pixels), rotated by
/// `rotation` degrees clockwise about the centre of `dst`.
///
/// Nearest-neighbour; transparent texels leave the buffer untouched.
pub fn blit(pixels: &mut PixelBuffer, texture: &Texture, src: &Rect, dst: &Rect, rotation: f32) {
    if dst.width <= 0.0 || dst.height <= 0.0 || src.width <= 0.0 || src.height <= 0.0 {
        return;
    }

    let center = dst.center();
    let (sin, cos) = rotation.to_radians().sin_cos();
    let half_w = (dst.width * cos.abs() + dst.height * sin.abs()) / 2.0;
    let half_h = (dst.width * sin.abs() + dst.height * cos.abs()) / 2.0;

    let x0 = ((center.x - half_w).floor() as i32).max(0);
    let y0 = ((center.y - half_h).floor() as i32).max(0);
    let x1 = ((center.x + half_w).ceil() as i32).min(pixels.width() as i32);
    let y1 = ((center.y + half_h).ceil() as i32).min(pixels.height() as i32);

    for py in y0..y1 {
        for px in x0..x1 {
            let dx = px as f32 + 0.5 - center.x;
            let dy = py as f32 + 0.5 - center.y;
            // Undo the rotation to find where this pixel sits in the sprite.
            let lx = dx * cos + dy * sin;
            let ly = -dx * sin + dy * cos;
            let u = (lx + dst.width / 2.0) / dst.width;
            let v = (ly + dst.height / 2.0) / dst.height;
            if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
                continue;
            }
            let tx = (src.x + (u * src.width).floor()) as u32;
            let ty = (src.y + (v * src.height).floor()) as u32;
            if let Some(color) = texture.get(tx, ty) {
                pixels.set(px, py, color);
            }
        }
    }
}

/// [`blit`] with `dst` given in world space.
pub fn draw_texture_pro(
    pixels: &mut PixelBuffer,
    camera: &Camera,
    texture: &Texture,
    src: &Rect,
    dst: &Rect,
    rotation: f32,
) {
    blit(pixels, texture, src, &camera.rect_to_screen(dst), rotation);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::Rgb;

    const RED: Rgb = Rgb(255, 0, 0);
    const BLUE: Rgb = Rgb(0, 0, 255);

    fn two_by_two() -> Texture {
        let mut tex = Texture::new(2, 2);
        tex.set(0, 0, RED);
        tex.set(1, 1, BLUE);
        tex
    }

    #[test]
    fn test_camera_centres_target() {
        let camera = Camera::follow(1000.0, 100, 200);
        assert!((camera.zoom - 200.0 / 1024.0).abs() < 1e-6);
        let p = camera.to_screen(Vec2::new(1000.0, 1024.0));
        assert!((p.x - 50.0).abs() < 1e-3);
        assert!((p.y - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_straight_blit_scales_up() {
        let mut pixels = PixelBuffer::new(4, 4);
        let src = Rect::new(0.0, 0.0, 2.0, 2.0);
        blit(&mut pixels, &two_by_two(), &src, &Rect::new(0.0, 0.0, 4.0, 4.0), 0.0);
        assert_eq!(pixels.get(0, 0), RED);
        assert_eq!(pixels.get(1, 1), RED);
        assert_eq!(pixels.get(3, 3), BLUE);
        // Transparent texels leave the clear colour.
        assert_eq!(pixels.get(3, 0), Rgb::default());
    }

    #[test]
    fn test_half_turn_flips() {
        let mut pixels = PixelBuffer::new(2, 2);
        let src = Rect::new(0.0, 0.0, 2.0, 2.0);
        blit(&mut pixels, &two_by_two(), &src, &Rect::new(0.0, 0.0, 2.0, 2.0), 180.0);
        assert_eq!(pixels.get(0, 0), BLUE);
        assert_eq!(pixels.get(1, 1), RED);
    }

    #[test]
    fn test_clips_offscreen() {
        let mut pixels = PixelBuffer::new(2, 2);
        let src = Rect::new(0.0, 0.0, 2.0, 2.0);
        blit(&mut pixels, &two_by_two(), &src, &Rect::new(-10.0, -10.0, 4.0, 4.0), 30.0);
        blit(&mut pixels, &two_by_two(), &src, &Rect::new(1.0, 1.0, 0.0, 4.0), 0.0);
        assert_eq!(pixels.get(1, 1), Rgb::default());
    }

    #[test]
    fn test_sub_rect_sampling() {
        let mut tex = Texture::new(4, 1);
        tex.set(2, 0, BLUE);
        tex.set(3, 0, BLUE);
        let mut pixels = PixelBuffer::new(1, 1);
        let src = Rect::new(2.0, 0.0, 2.0, 1.0);
        blit(&mut pixels, &tex, &src, &Rect::new(0.0, 0.0, 1.0, 1.0), 0.0);
        assert_eq!(pixels.get(0, 0), BLUE);
    }
}
