//! Software rendering into a half-block pixel buffer.

pub mod blit;
pub mod pixels;
pub mod world;

pub use blit::{draw_texture_pro, Camera};
pub use pixels::{PixelBuffer, PixelView};
pub use world::draw_world;
