//! Loading screen rendering

use crate::state::{Owner, SplashState};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

/// Build the loading screen text with styling
fn build_splash_text(owner: &Owner, dots: usize) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            owner.name.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            owner.title.clone(),
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(Span::styled(
            format!("Loading{:<3}", ".".repeat(dots)),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

/// Draw the loading screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState, owner: &Owner, now: Instant) {
    let elapsed = now.saturating_duration_since(splash_state.start_time);
    let dots = (elapsed.as_millis() / 250 % 4) as usize;
    let lines = build_splash_text(owner, dots);

    let text_height = lines.len() as u16;

    // Center position with scroll offset (can go negative/above screen)
    let base_y = area.y as i32 + (area.height.saturating_sub(text_height)) as i32 / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;

    // Lines that have scrolled off the top
    let lines_off_top = if y_pos < 0 { (-y_pos) as usize } else { 0 };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible_lines: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let visible_height = visible_lines.len() as u16;
    let render_y = if y_pos < 0 { area.y } else { y_pos as u16 };

    let text_area = Rect {
        x: area.x,
        y: render_y,
        width: area.width,
        height: visible_height.min(area.bottom().saturating_sub(render_y)),
    };
    frame.render_widget(
        Paragraph::new(visible_lines).alignment(Alignment::Center),
        text_area,
    );

    // Skip hint at the bottom (only before the exit animation)
    if splash_state.scroll_offset < 1.0 && area.height > 2 {
        let hint = "Press any key to skip";
        let hint_area = Rect {
            x: area.x,
            y: area.y + area.height - 2,
            width: area.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                hint,
                Style::default().fg(Color::DarkGray),
            )))
            .alignment(Alignment::Center),
            hint_area,
        );
    }
}
