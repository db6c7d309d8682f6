//! Rendering of the lookup screen.
//!
//! Layout: title bar, city input, body (empty-state message, loading line,
//! or the conditions panel), and a footer naming the backdrop image for the
//! current condition. Terminals don't draw image URLs, so the backdrop also
//! picks the accent color used across the panel.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use skycast_core::WeatherSnapshot;

use crate::app::{App, Panel};

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let accent = accent_color(app);

    let title = Paragraph::new("skycast")
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_input(frame, app, chunks[1], accent);

    match app.panel() {
        Panel::Empty => draw_empty(frame, chunks[2]),
        Panel::Loading => draw_loading(frame, app, chunks[2]),
        Panel::Loaded(snapshot) => draw_conditions(frame, snapshot, chunks[2], accent),
    }

    let footer = Paragraph::new(format!("backdrop: {}", app.backdrop().url))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[3]);
}

fn draw_input(frame: &mut Frame, app: &App, area: Rect, accent: Color) {
    let input = Paragraph::new(app.input()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(" Enter your city (Esc quits) "),
    );
    frame.render_widget(input, area);
    frame.set_cursor_position((area.x + 1 + cursor_offset(app.input(), area.width), area.y + 1));
}

/// Cursor column within the input box: one cell per char, kept inside the
/// borders even when the text overflows the box.
fn cursor_offset(input: &str, box_width: u16) -> u16 {
    let chars = u16::try_from(input.chars().count()).unwrap_or(u16::MAX);
    chars.min(box_width.saturating_sub(2))
}

fn draw_empty(frame: &mut Frame, area: Rect) {
    let msg = Paragraph::new("No data found. Enter a valid city.")
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(msg, centered_line(area));
}

fn draw_loading(frame: &mut Frame, app: &App, area: Rect) {
    let msg = Paragraph::new(format!("Fetching weather for {}…", app.input()))
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC))
        .alignment(Alignment::Center);
    frame.render_widget(msg, centered_line(area));
}

fn draw_conditions(frame: &mut Frame, snapshot: &WeatherSnapshot, area: Rect, accent: Color) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(area);

    let city = Paragraph::new(Line::from(Span::styled(
        snapshot.city.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(city, rows[0]);

    let headline = Paragraph::new(format!("{:.0}°C feels like", snapshot.feels_like_c))
        .style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(headline, rows[1]);

    let description = Paragraph::new(snapshot.description.clone()).alignment(Alignment::Center);
    frame.render_widget(description, rows[2]);

    let cells = [
        (format!("{:.1}°C", snapshot.temp_max_c), "Maximum Temp"),
        (format!("{:.1}°C", snapshot.temp_min_c), "Minimum Temp"),
        (format!("{}%", snapshot.humidity_pct), "Humidity"),
        (format!("{} m/s", snapshot.wind_speed_mps), "Wind Speed"),
    ];

    let grid_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(rows[4]);

    for (row_idx, row_area) in grid_rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row_area);

        for (col_idx, col_area) in cols.iter().enumerate() {
            let (value, label) = &cells[row_idx * 2 + col_idx];
            let cell = Paragraph::new(vec![
                Line::from(Span::styled(
                    value.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(*label, Style::default().fg(Color::Gray))),
            ])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(accent)));
            frame.render_widget(cell, *col_area);
        }
    }
}

/// Middle line of an area, for single-line centered messages.
fn centered_line(area: Rect) -> Rect {
    let y = area.y + area.height / 2;
    Rect { x: area.x, y, width: area.width, height: 1.min(area.height) }
}

fn accent_color(app: &App) -> Color {
    match app.backdrop().condition {
        "Clear" => Color::Yellow,
        "Clouds" => Color::Gray,
        "Rain" | "Drizzle" => Color::Blue,
        "Thunderstorm" => Color::Magenta,
        "Snow" => Color::White,
        "Haze" | "Smoke" | "Mist" | "Fog" => Color::DarkGray,
        _ => Color::Cyan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_counts_chars_not_bytes() {
        // "Zürich" is 7 bytes but 6 chars; the cursor sits after 6 cells.
        assert_eq!(cursor_offset("Zürich", 40), 6);
        assert_eq!(cursor_offset("", 40), 0);
    }

    #[test]
    fn cursor_stays_inside_the_box_on_overflow() {
        let long = "a".repeat(100);
        assert_eq!(cursor_offset(&long, 20), 18);

        // Degenerate widths never underflow.
        assert_eq!(cursor_offset(&long, 1), 0);
        assert_eq!(cursor_offset(&long, 0), 0);
    }
}
