//! Minimum terminal size handling.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

/// Room for the info panel plus a play field a few cells wide.
pub const MIN_COLS: u16 = 50;
pub const MIN_ROWS: u16 = 16;

pub fn fits(cols: u16, rows: u16) -> bool {
    cols >= MIN_COLS && rows >= MIN_ROWS
}

/// Render a "terminal too small" message in place of the game.
pub fn render_too_small(frame: &mut Frame) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Need: {}x{}   Have: {}x{}",
                MIN_COLS, MIN_ROWS, area.width, area.height
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please resize your terminal.",
            Style::default().fg(Color::White),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits() {
        assert!(fits(80, 30));
        assert!(fits(MIN_COLS, MIN_ROWS));
        assert!(!fits(MIN_COLS - 1, 40));
        assert!(!fits(120, MIN_ROWS - 1));
    }
}
