// Atlas geometry (texels)
pub const BG_TILE_WIDTH: f32 = 144.0;
pub const BG_TILE_HEIGHT: f32 = 256.0;
pub const BIRD_FRAME_WIDTH: f32 = 17.0;
pub const BIRD_FRAME_HEIGHT: f32 = 12.0;
pub const PIPE_SPRITE_WIDTH: f32 = 26.0;
pub const PIPE_SPRITE_HEIGHT: f32 = 256.0;
pub const GLYPH_WIDTH: f32 = 12.0;
pub const GLYPH_HEIGHT: f32 = 18.0;

// World space is the atlas scaled up; the background tile fills the screen.
pub const SCALE: f32 = 4.0;
pub const WORLD_WIDTH: f32 = BG_TILE_WIDTH * SCALE;
pub const WORLD_HEIGHT: f32 = BG_TILE_HEIGHT * SCALE;

// Obstacle field
pub const FIRST_PIPE_X: f32 = 1000.0;
pub const PIPE_SPACING: f32 = 125.0 * SCALE;
pub const PIPE_WIDTH: f32 = PIPE_SPRITE_WIDTH * SCALE;
pub const PIPE_HEIGHT: f32 = PIPE_SPRITE_HEIGHT * SCALE;
pub const DEFAULT_PIPE_PAIRS: usize = 40;
/// Upper bound accepted from config files.
pub const MAX_PIPE_PAIRS: usize = 10_000;

/// Gap half-height by pipe-pair index: `(first_index, half_height)`, ascending.
pub const GAP_RAMP: &[(usize, f32)] = &[(0, 100.0), (10, 90.0), (20, 80.0), (30, 70.0)];

/// Speed multiplier by current score: `(min_score, multiplier)`, ascending.
pub const SPEED_RAMP: &[(u32, f32)] = &[(0, 1.0), (10, 1.15), (20, 1.3), (30, 1.5)];

// Player
pub const PLAYER_WIDTH: f32 = BIRD_FRAME_WIDTH * SCALE;
pub const PLAYER_HEIGHT: f32 = BIRD_FRAME_HEIGHT * SCALE;
pub const PLAYER_SPEED: f32 = 200.0;
pub const PLAYER_HITBOX_RATIO: f32 = 0.7;
pub const JUMP_WINDOW_SECONDS: f32 = 0.25;
pub const JUMP_STRENGTH: f32 = 1800.0;
pub const GRAVITY: f32 = 25.0;
/// Cap on downward displacement per frame.
pub const TERMINAL_VELOCITY: f32 = 17.0;
pub const MAX_TILT_DEGREES: f32 = 45.0;
pub const BIRD_IDLE_FPS: f32 = 3.0;

// Debug fly-through
pub const FLY_THROUGH_MULTIPLIER: f32 = 4.0;

// Win sequence
pub const WIN_BANNER_SECONDS: f32 = 2.5;
pub const WIN_CREDITS_SECONDS: f32 = 2.5;

// Frame loop
pub const SIM_DT: f32 = 1.0 / 60.0;
pub const MAX_STEPS_PER_FRAME: u32 = 5;
pub const REALTIME_FRAME_MS: u64 = 16;
