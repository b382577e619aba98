//! Pixel art for the sprite atlases.
//!
//! The bird frames and digit glyphs are hand-drawn character maps. Pipes and
//! backgrounds are generated from a few parameters since they are mostly
//! repeated columns.

use super::{Rgb, Texture};

/// Wing raised. First frame of a flap.
pub const BIRD_WING_UP: &str = "\
......KKKKKK.....
....KKBBBKWWK....
.KKKBBBBKWWWWK...
KLLLKBBBKWWWKWK..
KLLLLKBBKWWWKWK..
KbLLLbKBBKWWWWK..
.KbbbKBBBBKKKKKK.
..KKKBBBBKOOOOOOK
...KbbbbKoKKKKKK.
...KbbbbbKOOOOOK.
....KKbbbbbKKKKK.
......KKKKK......";

/// Wing lowered.
pub const BIRD_WING_DOWN: &str = "\
......KKKKKK.....
....KKBBBKWWK....
...KBBBBKWWWWK...
..KKBBBBKWWWKWK..
.KBBBBBBKWWWKWK..
.KKKKKBBBKWWWWK..
KLLLLLKBBBKKKKKK.
KLLLLLKBBKOOOOOOK
.KbLLKbbbKoKKKKKK
..KKKbbbbKOOOOOK.
....KKbbbbbKKKKK.
......KKKKK......";

/// Wing level.
pub const BIRD_WING_MID: &str = "\
......KKKKKK.....
....KKBBBKWWK....
...KBBBBKWWWWK...
.KKKKBBBKWWWKWK..
KLLLLKBBKWWWKWK..
KLLLLLKBBKWWWWK..
KbLLLbKBBBKKKKKK.
.KbbbKBBBKOOOOOOK
..KKKbbbKoKKKKKK.
...KbbbbbKOOOOOK.
....KKbbbbbKKKKK.
......KKKKK......";

/// Atlas order of the three animation frames.
pub const BIRD_FRAMES: [&str; 3] = [BIRD_WING_UP, BIRD_WING_DOWN, BIRD_WING_MID];

/// Body colours for one bird variant: main, shade, wing.
#[derive(Debug, Clone, Copy)]
pub struct BirdPalette {
    pub body: Rgb,
    pub shade: Rgb,
    pub wing: Rgb,
}

pub const YELLOW_BIRD: BirdPalette = BirdPalette {
    body: Rgb(250, 200, 50),
    shade: Rgb(225, 140, 30),
    wing: Rgb(255, 245, 200),
};

pub const BLUE_BIRD: BirdPalette = BirdPalette {
    body: Rgb(80, 170, 230),
    shade: Rgb(40, 110, 190),
    wing: Rgb(210, 240, 255),
};

pub const RED_BIRD: BirdPalette = BirdPalette {
    body: Rgb(235, 80, 60),
    shade: Rgb(180, 40, 40),
    wing: Rgb(255, 210, 200),
};

const OUTLINE: Rgb = Rgb(30, 24, 30);
const EYE: Rgb = Rgb(250, 250, 250);
const BEAK: Rgb = Rgb(245, 110, 40);
const BEAK_SHADE: Rgb = Rgb(200, 70, 30);

impl BirdPalette {
    fn color(&self, symbol: char) -> Option<Rgb> {
        match symbol {
            'K' => Some(OUTLINE),
            'B' => Some(self.body),
            'b' => Some(self.shade),
            'L' => Some(self.wing),
            'W' => Some(EYE),
            'O' => Some(BEAK),
            'o' => Some(BEAK_SHADE),
            _ => None,
        }
    }
}

/// Paint a character map into `texture` with its top-left at `(ox, oy)`.
pub fn paint_art(
    texture: &mut Texture,
    ox: u32,
    oy: u32,
    art: &str,
    palette: impl Fn(char) -> Option<Rgb>,
) {
    for (row, line) in art.lines().enumerate() {
        for (col, symbol) in line.chars().enumerate() {
            if let Some(color) = palette(symbol) {
                texture.set(ox + col as u32, oy + row as u32, color);
            }
        }
    }
}

pub fn paint_bird(texture: &mut Texture, ox: u32, oy: u32, art: &str, palette: &BirdPalette) {
    paint_art(texture, ox, oy, art, |c| palette.color(c));
}

/// Pipe body colours, left highlight to right shadow.
#[derive(Debug, Clone, Copy)]
pub struct PipePalette {
    pub light: Rgb,
    pub mid: Rgb,
    pub dark: Rgb,
}

pub const GREEN_PIPE: PipePalette = PipePalette {
    light: Rgb(160, 225, 80),
    mid: Rgb(110, 180, 45),
    dark: Rgb(70, 125, 25),
};

pub const RED_PIPE: PipePalette = PipePalette {
    light: Rgb(240, 130, 110),
    mid: Rgb(200, 70, 55),
    dark: Rgb(140, 40, 35),
};

const PIPE_CAP_ROWS: u32 = 12;
const PIPE_BODY_INSET: u32 = 2;

/// Draw one pipe sprite. `cap_on_top` is the pipe rising from the ground.
pub fn paint_pipe(
    texture: &mut Texture,
    ox: u32,
    width: u32,
    height: u32,
    cap_on_top: bool,
    palette: &PipePalette,
) {
    let shade = |col: u32, left: u32, right: u32| -> Rgb {
        if col == left || col + 1 == right {
            OUTLINE
        } else if col < left + (right - left) / 4 {
            palette.light
        } else if col + (right - left) / 4 >= right {
            palette.dark
        } else {
            palette.mid
        }
    };

    for row in 0..height {
        let in_cap = if cap_on_top {
            row < PIPE_CAP_ROWS
        } else {
            row >= height - PIPE_CAP_ROWS
        };
        let cap_edge = if cap_on_top {
            row == 0 || row + 1 == PIPE_CAP_ROWS
        } else {
            row + 1 == height || row == height - PIPE_CAP_ROWS
        };

        let (left, right) = if in_cap {
            (0, width)
        } else {
            (PIPE_BODY_INSET, width - PIPE_BODY_INSET)
        };
        for col in left..right {
            let color = if in_cap && cap_edge {
                OUTLINE
            } else {
                shade(col, left, right)
            };
            texture.set(ox + col, row, color);
        }
    }
}

/// Background palette for one time of day.
#[derive(Debug, Clone, Copy)]
pub struct SkyPalette {
    pub sky: Rgb,
    pub cloud: Rgb,
    pub city: Rgb,
    pub window: Rgb,
    pub bush: Rgb,
    pub ground: Rgb,
    pub grass: Rgb,
    pub grass_stripe: Rgb,
}

pub const DAY_SKY: SkyPalette = SkyPalette {
    sky: Rgb(78, 192, 202),
    cloud: Rgb(230, 248, 235),
    city: Rgb(165, 215, 195),
    window: Rgb(200, 235, 215),
    bush: Rgb(95, 190, 80),
    ground: Rgb(222, 216, 149),
    grass: Rgb(115, 190, 46),
    grass_stripe: Rgb(155, 225, 90),
};

pub const NIGHT_SKY: SkyPalette = SkyPalette {
    sky: Rgb(0, 135, 147),
    cloud: Rgb(40, 160, 170),
    city: Rgb(20, 90, 110),
    window: Rgb(240, 220, 90),
    bush: Rgb(20, 120, 60),
    ground: Rgb(222, 216, 149),
    grass: Rgb(115, 190, 46),
    grass_stripe: Rgb(155, 225, 90),
};

const GROUND_ROWS: u32 = 56;
const GRASS_ROWS: u32 = 6;
const BUSH_ROWS: u32 = 16;
const CITY_MAX_ROWS: u32 = 48;

/// Cheap deterministic hash so the skyline looks irregular but never changes.
fn hash(n: u32) -> u32 {
    let mut x = n.wrapping_mul(0x9E37_79B9) ^ 0x5bd1_e995;
    x ^= x >> 15;
    x = x.wrapping_mul(0x2c1b_3c6d);
    x ^= x >> 12;
    x
}

/// Draw one background tile. The tile must wrap horizontally so that two
/// copies side by side form a seamless strip.
pub fn paint_background(texture: &mut Texture, ox: u32, width: u32, height: u32, sky: &SkyPalette) {
    let ground_top = height - GROUND_ROWS;
    let bush_top = ground_top - BUSH_ROWS;
    let city_floor = bush_top + 8;

    for col in 0..width {
        // Buildings are 8 texels wide; heights repeat with the tile width.
        let building = col / 8;
        let building_rows = 16 + hash(building) % (CITY_MAX_ROWS - 16);
        let city_top = city_floor - building_rows;
        // Bush crowns: a wave with period 16.
        let phase = (col % 16) as i32 - 8;
        let bush_crown = bush_top + (phase * phase) as u32 / 8;
        // Cloud band just above the skyline.
        let cloud_phase = ((col + 5) % 24) as i32 - 12;
        let cloud_top = city_floor - CITY_MAX_ROWS - 14 + (cloud_phase * cloud_phase) as u32 / 12;

        for row in 0..height {
            let color = if row >= ground_top + GRASS_ROWS {
                sky.ground
            } else if row >= ground_top {
                if (col + row) % 8 < 4 {
                    sky.grass
                } else {
                    sky.grass_stripe
                }
            } else if row >= bush_crown {
                sky.bush
            } else if row >= city_top && row < city_floor {
                let lit = col % 8 > 1 && col % 8 < 6 && (row - city_top) % 6 == 2;
                if lit && hash(col * 31 + row) % 3 == 0 {
                    sky.window
                } else {
                    sky.city
                }
            } else if row >= cloud_top && row < city_top {
                sky.cloud
            } else {
                sky.sky
            };
            texture.set(ox + col, row, color);
        }
    }
}

/// 5×7 digit font, `#` filled.
pub const DIGITS: [&str; 10] = [
    ".###.\n#...#\n#..##\n#.#.#\n##..#\n#...#\n.###.",
    "..#..\n.##..\n..#..\n..#..\n..#..\n..#..\n.###.",
    ".###.\n#...#\n....#\n..##.\n.#...\n#....\n#####",
    ".###.\n#...#\n....#\n..##.\n....#\n#...#\n.###.",
    "...#.\n..##.\n.#.#.\n#..#.\n#####\n...#.\n...#.",
    "#####\n#....\n####.\n....#\n....#\n#...#\n.###.",
    "..##.\n.#...\n#....\n####.\n#...#\n#...#\n.###.",
    "#####\n....#\n...#.\n..#..\n.#...\n.#...\n.#...",
    ".###.\n#...#\n#...#\n.###.\n#...#\n#...#\n.###.",
    ".###.\n#...#\n#...#\n.####\n....#\n...#.\n.##..",
];

const GLYPH_FILL: Rgb = Rgb(255, 255, 255);
const GLYPH_SCALE: u32 = 2;

/// Draw a digit doubled in size with a one-texel dark outline, inside a
/// `cell_w × cell_h` cell starting at `ox`.
pub fn paint_digit(texture: &mut Texture, ox: u32, cell_w: u32, cell_h: u32, glyph: &str) {
    let rows: Vec<&str> = glyph.lines().collect();
    let glyph_w = rows.first().map_or(0, |r| r.len() as u32) * GLYPH_SCALE;
    let glyph_h = rows.len() as u32 * GLYPH_SCALE;
    let left = ox + (cell_w.saturating_sub(glyph_w)) / 2;
    let top = cell_h.saturating_sub(glyph_h) / 2;

    let filled = |x: i64, y: i64| -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (gx, gy) = ((x as u32) / GLYPH_SCALE, (y as u32) / GLYPH_SCALE);
        rows.get(gy as usize)
            .and_then(|r| r.as_bytes().get(gx as usize))
            .is_some_and(|b| *b == b'#')
    };

    for y in -1..=glyph_h as i64 {
        for x in -1..=glyph_w as i64 {
            let color = if filled(x, y) {
                Some(GLYPH_FILL)
            } else if (-1..=1).any(|dy| (-1..=1).any(|dx| filled(x + dx, y + dy))) {
                Some(OUTLINE)
            } else {
                None
            };
            let (px, py) = (left as i64 + x, top as i64 + y);
            if let Some(color) = color {
                if px >= ox as i64 && px < (ox + cell_w) as i64 && py >= 0 && py < cell_h as i64 {
                    texture.set(px as u32, py as u32, color);
                }
            }
        }
    }
}
