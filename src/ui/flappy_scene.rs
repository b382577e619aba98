//! The game screen: letterboxed play field, overlays, status bar, info panel.

use crate::assets::{Assets, Theme};
use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::game::logic::speed_multiplier;
use crate::game::{Game, WinStage};
use crate::render::{draw_world, PixelBuffer, PixelView};
use crate::ui::game_common::{
    centered_rect, create_game_layout, game_layout, letterbox, render_game_over_banner,
    render_info_panel_frame, render_status_bar, GameResultType,
};
use crate::ui::responsive;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TITLE: &str = " Flappy ";
const CONTENT_MIN_HEIGHT: u16 = 10;
const INFO_PANEL_WIDTH: u16 = 24;
const DEATH_PANEL_WIDTH: u16 = 22;
const DEATH_PANEL_HEIGHT: u16 = 9;
const RESTART_BUTTON_WIDTH: u16 = 13;
const RESTART_BUTTON_HEIGHT: u16 = 3;

/// Where the death panel and its restart button sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeathPanelLayout {
    pub panel: Rect,
    pub button: Rect,
}

/// Letterboxed play field for a full terminal area.
pub fn play_area(area: Rect) -> Rect {
    let layout = game_layout(area, CONTENT_MIN_HEIGHT, INFO_PANEL_WIDTH);
    letterbox(layout.content, WORLD_WIDTH / WORLD_HEIGHT)
}

/// Death panel centred in the play field, button along its bottom.
pub fn death_panel_layout(play: Rect) -> DeathPanelLayout {
    let panel = centered_rect(play, DEATH_PANEL_WIDTH, DEATH_PANEL_HEIGHT);
    let width = RESTART_BUTTON_WIDTH.min(panel.width.saturating_sub(2));
    let height = RESTART_BUTTON_HEIGHT.min(panel.height.saturating_sub(2));
    let button = Rect::new(
        panel.x + (panel.width - width) / 2,
        (panel.y + panel.height).saturating_sub(height + 1),
        width,
        height,
    );
    DeathPanelLayout { panel, button }
}

/// Whether terminal cell (`column`, `row`) is on the restart button.
///
/// Always false while the screen is too small to draw the button.
pub fn restart_button_hit(area: Rect, column: u16, row: u16) -> bool {
    if !responsive::fits(area.width, area.height) {
        return false;
    }
    let button = death_panel_layout(play_area(area)).button;
    column >= button.x
        && column < button.x + button.width
        && row >= button.y
        && row < button.y + button.height
}

/// Render the game screen.
pub fn render_flappy(frame: &mut Frame, area: Rect, game: &Game, assets: &Assets, theme: Theme) {
    let layout = create_game_layout(
        frame,
        area,
        TITLE,
        Color::Cyan,
        CONTENT_MIN_HEIGHT,
        INFO_PANEL_WIDTH,
    );
    let play = letterbox(layout.content, WORLD_WIDTH / WORLD_HEIGHT);

    render_play_area(frame, play, game, assets, theme);
    render_overlay(frame, play, game);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

fn render_play_area(frame: &mut Frame, play: Rect, game: &Game, assets: &Assets, theme: Theme) {
    if play.width == 0 || play.height == 0 {
        return;
    }
    let mut pixels = PixelBuffer::for_area(play);
    draw_world(&mut pixels, assets, game, theme);
    if game.run.dead || (game.run.paused && !game.run.awaiting_start()) {
        pixels.dim(140);
    }
    frame.render_widget(PixelView(&pixels), play);
}

fn render_overlay(frame: &mut Frame, play: Rect, game: &Game) {
    if game.run.dead {
        render_death_panel(frame, play, game);
    } else if let Some(stage) = game.run.win_stage() {
        match stage {
            WinStage::Banner => render_game_over_banner(
                frame,
                play,
                GameResultType::Win,
                "YOU WIN!",
                &format!("All {} pipes cleared", game.world.pipe_pairs()),
            ),
            WinStage::Credits => {
                render_game_over_banner(frame, play, GameResultType::Win, "THANKS FOR PLAYING", "")
            }
        }
    } else if game.run.awaiting_start() {
        render_notice(frame, play, "GET READY", "Space or click to flap", Color::Yellow);
    } else if game.run.paused {
        render_notice(frame, play, "PAUSED", "P to resume", Color::Cyan);
    }
}

/// Small boxed message in the upper third of the play field.
fn render_notice(frame: &mut Frame, play: Rect, title: &str, hint: &str, color: Color) {
    let width = (hint.len().max(title.len()) as u16 + 4).min(play.width);
    let upper = Rect {
        height: play.height / 2,
        ..play
    };
    let area = centered_rect(upper, width, 4);
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(hint, Style::default().fg(Color::White))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_death_panel(frame: &mut Frame, play: Rect, game: &Game) {
    let layout = death_panel_layout(play);
    let color = GameResultType::Loss.color();

    frame.render_widget(Clear, layout.panel);
    let block = Block::default()
        .title(" Game Over ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(layout.panel);
    frame.render_widget(block, layout.panel);

    let new_best = game.run.score > 0 && game.run.score == game.run.best;
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Score ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.run.score.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best ", Style::default().fg(Color::DarkGray)),
            Span::styled(game.run.best.to_string(), Style::default().fg(Color::Yellow)),
        ]),
    ];
    if new_best {
        lines.push(Line::from(Span::styled(
            "New best!",
            Style::default().fg(Color::Green),
        )));
    }
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);

    let button = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));
    let label_area = button.inner(layout.button);
    frame.render_widget(button, layout.button);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Restart",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        label_area,
    );
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &Game) {
    let run = &game.run;
    if run.dead {
        render_status_bar(
            frame,
            area,
            &format!("Crashed after {} pipes", run.score),
            Color::Red,
            &[("[Enter/R/Click]", "Restart"), ("[Q]", "Quit")],
        );
    } else if run.won {
        render_status_bar(frame, area, "You made it!", Color::Green, &[("[Q]", "Quit")]);
    } else if run.awaiting_start() {
        render_status_bar(
            frame,
            area,
            "Press Space to start!",
            Color::Yellow,
            &[("[Space/Up/Click]", "Flap"), ("[P]", "Pause"), ("[Q]", "Quit")],
        );
    } else if run.paused {
        render_status_bar(
            frame,
            area,
            "Paused",
            Color::Cyan,
            &[("[P]", "Resume"), ("[Space]", "Flap"), ("[Q]", "Quit")],
        );
    } else {
        render_status_bar(
            frame,
            area,
            &format!("Score: {} / {}", run.score, game.world.pipe_pairs()),
            Color::Green,
            &[("[Space/Up/Click]", "Flap"), ("[P]", "Pause"), ("[Q]", "Quit")],
        );
    }
}

fn flag_line(label: &str, on: bool) -> Line<'static> {
    let (text, color) = if on {
        ("ON", Color::Magenta)
    } else {
        ("off", Color::DarkGray)
    };
    Line::from(vec![
        Span::styled(format!(" {}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(text, Style::default().fg(color)),
    ])
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &Game) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let run = &game.run;
    let pairs = game.world.pipe_pairs();
    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                run.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best: ", Style::default().fg(Color::DarkGray)),
            Span::styled(run.best.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Pipes: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}/{}", run.score, pairs),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Speed: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("x{:.2}", speed_multiplier(run.score)),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Seed: ", Style::default().fg(Color::DarkGray)),
            Span::styled(game.seed().to_string(), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ];

    // Progress bar
    let progress = if pairs > 0 {
        (run.score as f64 / pairs as f64).min(1.0)
    } else {
        0.0
    };
    let bar_width = (inner.width as usize).saturating_sub(2);
    let filled = (progress * bar_width as f64) as usize;
    let empty = bar_width.saturating_sub(filled);

    lines.push(Line::from(Span::styled(
        " Progress:",
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(vec![
        Span::raw(" "),
        Span::styled("█".repeat(filled), Style::default().fg(Color::Green)),
        Span::styled("░".repeat(empty), Style::default().fg(Color::DarkGray)),
    ]));

    lines.push(Line::from(""));
    lines.push(flag_line("Fly-through", run.debug.fly_through));
    lines.push(flag_line("Invulnerable", run.debug.invulnerable));

    frame.render_widget(Paragraph::new(lines), inner);
}
