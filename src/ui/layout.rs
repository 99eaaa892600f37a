//! Layout components (navbar row, page area, status bar)

use crate::app::App;
use crate::platform::{COPY_EMAIL_SHORTCUT, SEND_SHORTCUT};
use crate::state::{Focus, NAVBAR_HEIGHT, STATUS_BAR_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into navbar, page and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAVBAR_HEIGHT),     // Navbar
            Constraint::Min(0),                    // Page
            Constraint::Length(STATUS_BAR_HEIGHT), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// The scrolling page viewport
pub fn page_area(area: Rect) -> Rect {
    create_layout(area).1
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Submission indicator
    let indicator = if app.is_submitting() {
        Span::styled(" ◌ ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(indicator);

    // Current section
    if let Some(section) = app.state.active_section() {
        spans.push(Span::styled(
            format!("{} ", section.label()),
            Style::default().fg(Color::Cyan),
        ));
    }

    // Focus-specific hints
    spans.push(Span::styled(
        get_hints(app),
        Style::default().fg(Color::Gray),
    ));

    // Copy message
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.right().saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current focus
fn get_hints(app: &App) -> String {
    match app.state.focus {
        Focus::Page => {
            let mut hints = String::from("j/k:scroll  1-9:section  t:top  c:contact");
            if app.state.has_form() {
                hints.push_str("  f:form");
            }
            if app.is_compact() {
                hints.push_str("  m:menu");
            }
            if app.state.portfolio.contact_email().is_some() {
                hints.push_str(&format!("  {COPY_EMAIL_SHORTCUT}:copy email"));
            }
            hints.push_str("  q:quit");
            hints
        }
        Focus::Menu => "j/k:nav  Enter:go  Esc:close".to_string(),
        Focus::Form => format!("Tab:next  S-Tab:prev  {SEND_SHORTCUT}:send  Esc:leave"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_reserves_bars() {
        let (navbar, page, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(navbar.height, 3);
        assert_eq!(page.y, 3);
        assert_eq!(page.height, 20);
        assert_eq!(status.y, 23);
    }
}
