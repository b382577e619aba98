//! Terminal events to game input.

use crate::game::FrameInput;
use crate::ui::flappy_scene::restart_button_hit;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Game(FrameInput),
    Quit,
    None,
}

fn game(input: FrameInput) -> InputAction {
    InputAction::Game(input)
}

pub fn map_key(key: &KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }
    let none = FrameInput::default();
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,
        KeyCode::Char(' ') | KeyCode::Up => game(FrameInput { jump: true, ..none }),
        KeyCode::Char('p') | KeyCode::Char('P') => game(FrameInput {
            toggle_pause: true,
            ..none
        }),
        KeyCode::Char('d') | KeyCode::Char('D') => game(FrameInput {
            toggle_fly_through: true,
            ..none
        }),
        KeyCode::Char('i') | KeyCode::Char('I') => game(FrameInput {
            toggle_invulnerable: true,
            ..none
        }),
        KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => game(FrameInput {
            restart: true,
            ..none
        }),
        _ => InputAction::None,
    }
}

/// A left click flaps, or restarts when it lands on the death panel button.
pub fn map_mouse(mouse: &MouseEvent, screen: Rect, dead: bool) -> InputAction {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return InputAction::None;
    }
    let none = FrameInput::default();
    if dead && restart_button_hit(screen, mouse.column, mouse.row) {
        game(FrameInput {
            restart: true,
            ..none
        })
    } else {
        game(FrameInput { jump: true, ..none })
    }
}

pub fn map_event(event: &Event, screen: Rect, dead: bool) -> InputAction {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse, screen, dead),
        _ => InputAction::None,
    }
}
