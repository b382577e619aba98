//! Per-frame update: player motion, collisions, scoring, death and the win
//! script.

use super::entity::{Entity, EntityKind};
use super::geometry::Rect;
use super::state::{Game, WinStage};
use crate::assets::bird_frame;
use crate::constants::*;

/// Inputs gathered since the previous frame. All are edge-triggered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub jump: bool,
    pub toggle_pause: bool,
    pub toggle_fly_through: bool,
    pub toggle_invulnerable: bool,
    /// Death-panel confirmation.
    pub restart: bool,
}

impl FrameInput {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fold a later input into this one so nothing is lost between steps.
    pub fn merge(&mut self, other: FrameInput) {
        self.jump |= other.jump;
        self.toggle_pause ^= other.toggle_pause;
        self.toggle_fly_through ^= other.toggle_fly_through;
        self.toggle_invulnerable ^= other.toggle_invulnerable;
        self.restart |= other.restart;
    }
}

/// Things that happened during a frame, for sound and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jumped,
    /// Score reached this value.
    Scored(u32),
    Died { score: u32 },
    NewBest(u32),
    WinStarted,
    WinStageAdvanced(WinStage),
    RunRestarted,
    Paused(bool),
    FlyThrough(bool),
    Invulnerable(bool),
}

/// Speed multiplier for the current score.
pub fn speed_multiplier(score: u32) -> f32 {
    SPEED_RAMP
        .iter()
        .rev()
        .find(|(min_score, _)| score >= *min_score)
        .map_or(1.0, |(_, mult)| *mult)
}

/// Pipe pairs fully cleared by a player whose sprite starts at `left`.
///
/// Depends only on position, so it never decreases while the player moves
/// right.
pub fn score_for(left: f32, pipe_pairs: usize) -> u32 {
    let cleared = (left - (FIRST_PIPE_X + PIPE_WIDTH)) / PIPE_SPACING;
    if cleared < 0.0 {
        return 0;
    }
    (cleared.floor() as usize + 1).min(pipe_pairs) as u32
}

/// Whether `player` touches `other`. Only entities within one screen width
/// of the player are considered.
pub fn collides(player: &Entity, other: &Entity) -> bool {
    let distance = (other.rect.x - player.rect.x).abs();
    distance < WORLD_WIDTH && player.hitbox().overlaps(&other.hitbox())
}

/// Whether the hitbox has left the top or bottom of the screen.
pub fn out_of_bounds(hitbox: &Rect) -> bool {
    hitbox.y < 0.0 || hitbox.bottom() > WORLD_HEIGHT
}

/// Advance the player one frame.
///
/// `vel` is a per-frame displacement: a jump replaces it with a decaying
/// upward push for `JUMP_WINDOW_SECONDS`, after which gravity accrues it
/// back down to `TERMINAL_VELOCITY`.
pub fn update_player(player: &mut Entity, jump: bool, speed: f32, dt: f32) {
    let EntityKind::Bird(bird) = &mut player.kind else {
        return;
    };

    player.position.x += speed * dt;

    if jump {
        bird.time_since_jump = 0.0;
    }

    if bird.time_since_jump <= JUMP_WINDOW_SECONDS {
        let d = 1.0 - bird.time_since_jump / JUMP_WINDOW_SECONDS;
        bird.time_since_jump += dt;
        bird.vel = -d * 0.5 * d * JUMP_STRENGTH * dt;
        player.rotation = -MAX_TILT_DEGREES * d;
        bird.frame = if d <= 1.0 / 3.0 {
            1
        } else if d <= 2.0 / 3.0 {
            2
        } else {
            0
        };
    } else {
        bird.vel = (bird.vel + GRAVITY * dt).min(TERMINAL_VELOCITY);
        player.rotation = MAX_TILT_DEGREES * bird.vel / TERMINAL_VELOCITY;
    }

    player.position.y += bird.vel;
    player.src = bird_frame(bird.color, bird.frame);
    player.sync_rect();
}

/// Cycle the bird's wings while the start prompt is up.
fn animate_idle(game: &mut Game, dt: f32) {
    game.run.idle_clock += dt;
    let frame = (game.run.idle_clock * BIRD_IDLE_FPS) as usize % 3;
    let player = game.world.player_mut();
    if let EntityKind::Bird(bird) = &mut player.kind {
        bird.frame = frame;
        player.src = bird_frame(bird.color, frame);
    }
}

fn hits_anything(game: &Game) -> bool {
    let player = game.world.player();
    game.world.pipes().any(|pipe| collides(player, pipe))
        || out_of_bounds(&player.hitbox())
}

fn mark_passed(game: &mut Game) {
    let left = game.world.player().rect.x;
    for entity in game.world.entities.iter_mut().skip(1) {
        let right = entity.rect.right();
        if let EntityKind::Pipe(pipe) = &mut entity.kind {
            if !pipe.passed && left >= right {
                pipe.passed = true;
            }
        }
    }
}

fn die(game: &mut Game, events: &mut Vec<GameEvent>) {
    let score = game.run.score;
    game.run.dead = true;
    events.push(GameEvent::Died { score });
    if score > game.run.best {
        game.run.best = score;
        events.push(GameEvent::NewBest(score));
    }
    log::info!("died with score {} (best {})", score, game.run.best);
}

fn advance_win(game: &mut Game, dt: f32, events: &mut Vec<GameEvent>) {
    let before = game.run.win_stage();
    game.run.win_timer += dt;
    match game.run.win_stage() {
        Some(stage) if Some(stage) != before => {
            log::debug!("win sequence: {:?}", stage);
            events.push(GameEvent::WinStageAdvanced(stage));
        }
        None => {
            game.restart();
            events.push(GameEvent::RunRestarted);
        }
        _ => {}
    }
}

/// Advance the game by one frame of `dt` seconds.
pub fn frame(game: &mut Game, input: &FrameInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.toggle_fly_through {
        game.run.debug.fly_through = !game.run.debug.fly_through;
        events.push(GameEvent::FlyThrough(game.run.debug.fly_through));
        log::debug!("fly-through {}", game.run.debug.fly_through);
    }
    if input.toggle_invulnerable {
        game.run.debug.invulnerable = !game.run.debug.invulnerable;
        events.push(GameEvent::Invulnerable(game.run.debug.invulnerable));
        log::debug!("invulnerable {}", game.run.debug.invulnerable);
    }

    if game.run.dead {
        if input.restart {
            game.restart();
            events.push(GameEvent::RunRestarted);
        }
        return events;
    }

    if input.toggle_pause {
        game.run.paused = !game.run.paused;
        events.push(GameEvent::Paused(game.run.paused));
    }

    if game.run.paused {
        if !input.jump {
            if game.run.awaiting_start() {
                animate_idle(game, dt);
            }
            return events;
        }
        game.run.paused = false;
        events.push(GameEvent::Paused(false));
    }

    game.run.elapsed += dt;
    let previous_score = game.run.score;

    let mut speed = PLAYER_SPEED * speed_multiplier(previous_score);
    if game.run.debug.fly_through {
        speed *= FLY_THROUGH_MULTIPLIER;
    }
    update_player(game.world.player_mut(), input.jump, speed, dt);
    if input.jump {
        events.push(GameEvent::Jumped);
    }

    if !game.run.deathless() && hits_anything(game) {
        die(game, &mut events);
        return events;
    }

    mark_passed(game);
    let pairs = game.world.pipe_pairs();
    game.run.score = score_for(game.world.player().rect.x, pairs);
    for reached in previous_score + 1..=game.run.score {
        events.push(GameEvent::Scored(reached));
    }

    if !game.run.won && pairs > 0 && game.run.score as usize >= pairs {
        game.run.won = true;
        game.run.win_timer = 0.0;
        events.push(GameEvent::WinStarted);
        log::info!("cleared all {} pipe pairs", pairs);
    }

    if game.run.won {
        advance_win(game, dt, &mut events);
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{BirdColor, PipeColor, PipeEnd};
    use crate::config::GameConfig;
    use crate::game::geometry::Vec2;

    fn game(pairs: usize) -> Game {
        Game::new(GameConfig {
            seed: Some(11),
            pipe_pairs: pairs,
            ..GameConfig::default()
        })
    }

    fn jump() -> FrameInput {
        FrameInput {
            jump: true,
            ..FrameInput::default()
        }
    }

    #[test]
    fn test_paused_game_does_not_move() {
        let mut g = game(3);
        let before = g.world.player().position;
        let events = frame(&mut g, &FrameInput::default(), SIM_DT);
        assert!(events.is_empty());
        assert_eq!(g.world.player().position, before);
    }

    #[test]
    fn test_jump_unpauses_and_moves() {
        let mut g = game(3);
        let before = g.world.player().position;
        let events = frame(&mut g, &jump(), SIM_DT);
        assert!(events.contains(&GameEvent::Paused(false)));
        assert!(events.contains(&GameEvent::Jumped));
        assert!(!g.run.paused);
        let after = g.world.player().position;
        assert!(after.x > before.x);
        assert!(after.y < before.y, "jump should lift the bird");
    }

    #[test]
    fn test_gravity_caps_at_terminal_velocity() {
        let mut bird = Entity::bird(BirdColor::Yellow);
        for _ in 0..600 {
            update_player(&mut bird, false, 0.0, SIM_DT);
        }
        let EntityKind::Bird(state) = &bird.kind else {
            panic!("not a bird");
        };
        assert!((state.vel - TERMINAL_VELOCITY).abs() < 0.001);
        assert!((bird.rotation - MAX_TILT_DEGREES).abs() < 0.001);
    }

    #[test]
    fn test_jump_tilts_nose_up_then_frames_cycle() {
        let mut bird = Entity::bird(BirdColor::Yellow);
        update_player(&mut bird, true, 0.0, SIM_DT);
        assert!(bird.rotation < 0.0);
        let mut frames = Vec::new();
        for _ in 0..15 {
            update_player(&mut bird, false, 0.0, SIM_DT);
            if let EntityKind::Bird(state) = &bird.kind {
                frames.push(state.frame);
            }
        }
        assert!(frames.contains(&0));
        assert!(frames.contains(&1));
        assert!(frames.contains(&2));
    }

    #[test]
    fn test_score_for_counts_cleared_pairs() {
        let first_clear = FIRST_PIPE_X + PIPE_WIDTH;
        assert_eq!(score_for(0.0, 40), 0);
        assert_eq!(score_for(first_clear - 1.0, 40), 0);
        assert_eq!(score_for(first_clear, 40), 1);
        assert_eq!(score_for(first_clear + PIPE_SPACING, 40), 2);
        assert_eq!(score_for(1.0e9, 40), 40);
    }

    #[test]
    fn test_speed_ramp() {
        assert_eq!(speed_multiplier(0), 1.0);
        assert_eq!(speed_multiplier(9), 1.0);
        assert_eq!(speed_multiplier(10), 1.15);
        assert_eq!(speed_multiplier(25), 1.3);
        assert_eq!(speed_multiplier(99), 1.5);
    }

    #[test]
    fn test_collision_ignores_far_entities() {
        let bird = Entity::bird(BirdColor::Yellow);
        let mut far = Entity::pipe(PipeColor::Green, PipeEnd::Lower, 0, 0.0, 0.0);
        // Wide enough to cover the bird, but starts a full screen away.
        far.rect = Rect::new(bird.rect.x + WORLD_WIDTH, 0.0, 1.0e6, WORLD_HEIGHT);
        assert!(!collides(&bird, &far));
        far.rect.x = bird.rect.x - 10.0;
        assert!(collides(&bird, &far));
    }

    #[test]
    fn test_collision_with_pipe_kills() {
        let mut g = game(3);
        frame(&mut g, &jump(), SIM_DT);
        // Drop a pipe right on the bird.
        let center = g.world.player().rect.center();
        let (x, gap_edge) = (center.x - 10.0, center.y - 10.0);
        g.world.entities[1] = Entity::pipe(PipeColor::Green, PipeEnd::Lower, 0, x, gap_edge);
        let events = frame(&mut g, &FrameInput::default(), SIM_DT);
        assert!(g.run.dead);
        assert!(events.contains(&GameEvent::Died { score: 0 }));
    }

    #[test]
    fn test_invulnerable_ignores_pipes() {
        let mut g = game(3);
        g.run.debug.invulnerable = true;
        frame(&mut g, &jump(), SIM_DT);
        let center = g.world.player().rect.center();
        let (x, gap_edge) = (center.x - 10.0, center.y - 10.0);
        g.world.entities[1] = Entity::pipe(PipeColor::Green, PipeEnd::Lower, 0, x, gap_edge);
        frame(&mut g, &FrameInput::default(), SIM_DT);
        assert!(!g.run.dead);
    }

    #[test]
    fn test_leaving_screen_kills() {
        let mut g = game(3);
        frame(&mut g, &jump(), SIM_DT);
        g.world.player_mut().position = Vec2::new(0.0, WORLD_HEIGHT + 100.0);
        g.world.player_mut().sync_rect();
        frame(&mut g, &FrameInput::default(), SIM_DT);
        assert!(g.run.dead);
    }

    #[test]
    fn test_dead_game_only_restarts() {
        let mut g = game(3);
        g.run.paused = false;
        g.run.dead = true;
        g.run.score = 2;
        let events = frame(&mut g, &jump(), SIM_DT);
        assert!(events.is_empty());
        assert!(g.run.dead);

        let events = frame(
            &mut g,
            &FrameInput {
                restart: true,
                ..FrameInput::default()
            },
            SIM_DT,
        );
        assert_eq!(events, vec![GameEvent::RunRestarted]);
        assert!(!g.run.dead);
        assert_eq!(g.run.best, 2);
        assert_eq!(g.run.score, 0);
    }

    #[test]
    fn test_pause_toggle() {
        let mut g = game(3);
        frame(&mut g, &jump(), SIM_DT);
        let toggle = FrameInput {
            toggle_pause: true,
            ..FrameInput::default()
        };
        let events = frame(&mut g, &toggle, SIM_DT);
        assert_eq!(events, vec![GameEvent::Paused(true)]);
        let x = g.world.player().position.x;
        frame(&mut g, &FrameInput::default(), SIM_DT);
        assert_eq!(g.world.player().position.x, x);
        assert!(!g.run.awaiting_start());
    }

    /// Horizontal distance covered by one running step.
    fn step_dx(g: &mut Game, input: &FrameInput) -> f32 {
        let before = g.world.player().position.x;
        frame(g, input, SIM_DT);
        g.world.player().position.x - before
    }

    #[test]
    fn test_speed_follows_score_ramp() {
        for (score, mult) in [(0, 1.0), (9, 1.0), (10, 1.15), (20, 1.3), (30, 1.5), (39, 1.5)] {
            let mut g = game(40);
            g.run.paused = false;
            g.run.score = score;
            let dx = step_dx(&mut g, &FrameInput::default());
            let expected = PLAYER_SPEED * mult * SIM_DT;
            assert!((dx - expected).abs() < 1e-4, "score {}: {} vs {}", score, dx, expected);
        }
    }

    #[test]
    fn test_fly_through_toggle_speeds_up() {
        let mut g = game(40);
        let toggle = FrameInput {
            jump: true,
            toggle_fly_through: true,
            ..FrameInput::default()
        };
        let before = g.world.player().position.x;
        let events = frame(&mut g, &toggle, SIM_DT);
        assert!(events.contains(&GameEvent::FlyThrough(true)));
        assert!(g.run.debug.fly_through);
        let dx = g.world.player().position.x - before;
        let expected = PLAYER_SPEED * FLY_THROUGH_MULTIPLIER * SIM_DT;
        assert!((dx - expected).abs() < 1e-4);

        // Stacks with the score ramp.
        g.run.score = 10;
        let dx = step_dx(&mut g, &FrameInput::default());
        let expected = PLAYER_SPEED * 1.15 * FLY_THROUGH_MULTIPLIER * SIM_DT;
        assert!((dx - expected).abs() < 1e-4);

        let off = FrameInput {
            toggle_fly_through: true,
            ..FrameInput::default()
        };
        g.run.score = 0;
        let before = g.world.player().position.x;
        let events = frame(&mut g, &off, SIM_DT);
        assert!(events.contains(&GameEvent::FlyThrough(false)));
        let dx = g.world.player().position.x - before;
        assert!((dx - PLAYER_SPEED * SIM_DT).abs() < 1e-4);
    }

    #[test]
    fn test_invulnerable_toggle_emits_events() {
        let mut g = game(3);
        let toggle = FrameInput {
            toggle_invulnerable: true,
            ..FrameInput::default()
        };
        assert_eq!(frame(&mut g, &toggle, SIM_DT), vec![GameEvent::Invulnerable(true)]);
        assert!(g.run.debug.invulnerable);
        assert!(g.run.deathless());
        assert_eq!(frame(&mut g, &toggle, SIM_DT), vec![GameEvent::Invulnerable(false)]);
        assert!(!g.run.deathless());
    }

    #[test]
    fn test_merge_keeps_jumps_and_cancels_double_toggles() {
        let mut input = jump();
        input.merge(FrameInput {
            toggle_pause: true,
            ..FrameInput::default()
        });
        input.merge(FrameInput {
            toggle_pause: true,
            ..FrameInput::default()
        });
        assert!(input.jump);
        assert!(!input.toggle_pause);
        assert!(!input.is_empty());
    }

    #[test]
    fn test_idle_animation_cycles_on_prompt() {
        let mut g = game(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..90 {
            frame(&mut g, &FrameInput::default(), SIM_DT);
            if let Some(bird) = g.world.bird() {
                seen.insert(bird.frame);
            }
        }
        assert_eq!(seen.len(), 3);
    }
}
