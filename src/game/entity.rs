//! World entities: the bird and the pipes, as one tagged type.

use super::geometry::{Rect, Vec2};
use crate::assets::{bird_frame, pipe_sprite, BirdColor, PipeColor, PipeEnd, TextureId};
use crate::constants::*;

/// Player-only state.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub color: BirdColor,
    /// Vertical displacement applied this frame (positive = down).
    pub vel: f32,
    /// Seconds since the last jump input. Starts outside the jump window.
    pub time_since_jump: f32,
    /// Current animation frame, `0..3`.
    pub frame: usize,
}

/// Pipe-only state.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub end: PipeEnd,
    /// Index of the pair this pipe belongs to.
    pub pair: usize,
    /// Set once the player's left edge is past this pipe's right edge.
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    Bird(Bird),
    Pipe(Pipe),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub kind: EntityKind,
    pub texture: TextureId,
    /// Sprite rectangle inside the texture.
    pub src: Rect,
    /// Where the sprite lands in world space.
    pub rect: Rect,
    /// Bird: centre. Pipe: midpoint of the edge facing the gap.
    pub position: Vec2,
    /// Degrees, positive is clockwise (nose down).
    pub rotation: f32,
}

impl Entity {
    /// The player, vertically centred at the start line.
    pub fn bird(color: BirdColor) -> Self {
        let position = Vec2::new(0.0, WORLD_HEIGHT / 2.0);
        Self {
            kind: EntityKind::Bird(Bird {
                color,
                vel: 0.0,
                time_since_jump: f32::MAX,
                frame: 0,
            }),
            texture: TextureId::Bird,
            src: bird_frame(color, 0),
            rect: Rect::centered(position, PLAYER_WIDTH, PLAYER_HEIGHT),
            position,
            rotation: 0.0,
        }
    }

    /// One end of a pipe pair. `gap_edge` is the y where the pipe stops.
    pub fn pipe(color: PipeColor, end: PipeEnd, pair: usize, x: f32, gap_edge: f32) -> Self {
        let top = match end {
            PipeEnd::Upper => gap_edge - PIPE_HEIGHT,
            PipeEnd::Lower => gap_edge,
        };
        Self {
            kind: EntityKind::Pipe(Pipe {
                end,
                pair,
                passed: false,
            }),
            texture: TextureId::Pipe,
            src: pipe_sprite(color, end),
            rect: Rect::new(x, top, PIPE_WIDTH, PIPE_HEIGHT),
            position: Vec2::new(x + PIPE_WIDTH / 2.0, gap_edge),
            rotation: 0.0,
        }
    }

    pub fn is_bird(&self) -> bool {
        matches!(self.kind, EntityKind::Bird(_))
    }

    /// Collision rectangle. The bird's is shrunk so grazing a pipe with a
    /// wing tip is forgiven; pipes use their full sprite.
    pub fn hitbox(&self) -> Rect {
        match self.kind {
            EntityKind::Bird(_) => self.rect.scaled_about_center(PLAYER_HITBOX_RATIO),
            EntityKind::Pipe(_) => self.rect,
        }
    }

    /// Keep `rect` centred on `position` after the bird moves.
    pub fn sync_rect(&mut self) {
        self.rect = Rect::centered(self.position, self.rect.width, self.rect.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bird_starts_centered_vertically() {
        let bird = Entity::bird(BirdColor::Yellow);
        assert!(bird.is_bird());
        assert_eq!(bird.rect.center(), Vec2::new(0.0, WORLD_HEIGHT / 2.0));
        assert!((bird.rect.width - 68.0).abs() < f32::EPSILON);
        assert!((bird.rect.height - 48.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_bird_hitbox_is_smaller_than_sprite() {
        let bird = Entity::bird(BirdColor::Yellow);
        let hit = bird.hitbox();
        assert!(hit.width < bird.rect.width);
        assert!(hit.height < bird.rect.height);
        assert_eq!(hit.center(), bird.rect.center());
    }

    #[test]
    fn test_pipe_ends_bound_the_gap() {
        let upper = Entity::pipe(PipeColor::Green, PipeEnd::Upper, 0, 1000.0, 400.0);
        let lower = Entity::pipe(PipeColor::Green, PipeEnd::Lower, 0, 1000.0, 600.0);
        assert!((upper.rect.bottom() - 400.0).abs() < f32::EPSILON);
        assert!((lower.rect.y - 600.0).abs() < f32::EPSILON);
        assert_eq!(upper.hitbox(), upper.rect);
        assert!(!upper.is_bird());
    }
}
