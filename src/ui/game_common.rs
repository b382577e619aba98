//! Shared layout pieces: bordered frame, status bar, info panel, banners.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `game_layout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    /// Main content area - top left, inside outer border
    pub content: Rect,
    /// Status bar area (2 lines) - bottom left, inside outer border
    pub status_bar: Rect,
    /// Info panel area - right side, with its own border
    pub info_panel: Rect,
}

/// Compute the standard layout without drawing anything.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   [content area]                │  [info]     │
/// │                                 │             │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
///
/// Mouse hit-tests call this with the same arguments the renderer used.
pub fn game_layout(area: Rect, content_min_height: u16, info_panel_width: u16) -> GameLayout {
    let inner = Block::default().borders(Borders::ALL).inner(area);

    // Horizontal split: content area (left) | info panel (right)
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    // Left side: content (top) + status bar (bottom 2 lines)
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(content_min_height), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Clear `area`, draw the titled outer border and return the inner layout.
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    content_min_height: u16,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    game_layout(area, content_min_height, info_panel_width)
}

/// Largest rectangle inside `area` with the given pixel aspect ratio
/// (width / height), centred. Each cell holds two pixels stacked vertically.
pub fn letterbox(area: Rect, aspect: f32) -> Rect {
    let cells_per_row = aspect * 2.0;
    let full_width = (area.height as f32 * cells_per_row).round() as u16;
    if full_width <= area.width {
        Rect {
            x: area.x + (area.width - full_width) / 2,
            width: full_width,
            ..area
        }
    } else {
        let height = ((area.width as f32 / cells_per_row).round() as u16).min(area.height);
        Rect {
            y: area.y + (area.height - height) / 2,
            height,
            ..area
        }
    }
}

/// A `width` x `height` rectangle centred in `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render a standardized status bar (2 lines: status message + controls).
///
/// `controls` is a slice of (key, action) pairs, e.g. `[("[Space]", "Flap")]`.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Result type for banner colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResultType {
    Win,
    Loss,
}

impl GameResultType {
    pub fn color(self) -> Color {
        match self {
            GameResultType::Win => Color::Green,
            GameResultType::Loss => Color::Red,
        }
    }
}

/// Compact banner at the bottom of `area`. Does not clear what is behind
/// the banner rows, so the play field stays visible above it.
pub fn render_game_over_banner(
    frame: &mut Frame,
    area: Rect,
    result_type: GameResultType,
    title: &str,
    message: &str,
) {
    let banner_height: u16 = if message.is_empty() { 3 } else { 4 };
    let banner_area = Rect {
        y: area.y + area.height.saturating_sub(banner_height),
        height: banner_height.min(area.height),
        ..area
    };

    frame.render_widget(Clear, banner_area);

    let title_color = result_type.color();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(title_color));
    let inner = block.inner(banner_area);
    frame.render_widget(block, banner_area);

    let mut lines = vec![Line::from(Span::styled(
        title,
        Style::default()
            .fg(title_color)
            .add_modifier(Modifier::BOLD),
    ))];
    if !message.is_empty() {
        lines.push(Line::from(Span::styled(
            message,
            Style::default().fg(Color::White),
        )));
    }

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

/// Render an info panel frame with standard " Info " title and DarkGray border.
///
/// Returns the inner Rect for content rendering.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_reserves_status_and_info() {
        let layout = game_layout(Rect::new(0, 0, 80, 30), 10, 24);
        assert_eq!(layout.info_panel.width, 24);
        assert_eq!(layout.status_bar.height, 2);
        assert_eq!(layout.content.x, 1);
        assert_eq!(layout.content.y, 1);
        assert_eq!(layout.content.height + layout.status_bar.height, 28);
    }

    #[test]
    fn test_letterbox_wide_area_narrows() {
        let area = Rect::new(0, 0, 100, 32);
        let boxed = letterbox(area, 0.5625);
        assert_eq!(boxed.height, 32);
        assert_eq!(boxed.width, 36);
        assert_eq!(boxed.x, 32);
    }

    #[test]
    fn test_letterbox_tall_area_shortens() {
        let area = Rect::new(0, 0, 18, 40);
        let boxed = letterbox(area, 0.5625);
        assert_eq!(boxed.width, 18);
        assert_eq!(boxed.height, 16);
        assert_eq!(boxed.y, 12);
    }

    #[test]
    fn test_centered_rect_clamps() {
        let r = centered_rect(Rect::new(10, 10, 6, 4), 20, 2);
        assert_eq!(r, Rect::new(10, 11, 6, 2));
    }
}
