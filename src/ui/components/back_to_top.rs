//! Floating back-to-top button in the bottom-right corner of the page

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BACK_TO_TOP_HEIGHT: u16 = 3;

const ARROW: &str = "↑";
const LABEL: &str = "Top";
const SHORTCUT: &str = "t";

fn content_width() -> u16 {
    // "↑ Top (t)"
    (ARROW.chars().count() + LABEL.len() + SHORTCUT.len() + 4) as u16
}

/// Area of the button inside the page viewport, one column in from the right edge
pub fn back_to_top_area(page_area: Rect) -> Rect {
    let width = (content_width() + 2).min(page_area.width);
    let height = BACK_TO_TOP_HEIGHT.min(page_area.height);
    Rect {
        x: page_area.right().saturating_sub(width + 1),
        y: page_area.bottom().saturating_sub(height),
        width,
        height,
    }
}

fn content(returning: bool) -> Line<'static> {
    let (arrow_style, label_style) = if returning {
        let active = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        (active, active)
    } else {
        (
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Gray),
        )
    };
    Line::from(vec![
        Span::styled(format!("{ARROW} "), arrow_style),
        Span::styled(LABEL, label_style),
        Span::styled(format!(" ({SHORTCUT})"), Style::default().fg(Color::DarkGray)),
    ])
}

/// Draw the button over the page content.
///
/// `returning` is set while the page is scrolling back to the top.
pub fn render_back_to_top(frame: &mut Frame, page_area: Rect, returning: bool) {
    let area = back_to_top_area(page_area);
    let border_style = if returning {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(content(returning))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_sits_bottom_right() {
        let area = back_to_top_area(Rect::new(0, 3, 80, 20));
        assert_eq!(area.height, BACK_TO_TOP_HEIGHT);
        assert_eq!(area.bottom(), 23);
        assert_eq!(area.right(), 79);
        assert_eq!(area.width, content_width() + 2);
    }

    #[test]
    fn test_area_shrinks_to_tiny_page() {
        let area = back_to_top_area(Rect::new(0, 3, 6, 2));
        assert_eq!(area.width, 6);
        assert_eq!(area.height, 2);
    }

    #[test]
    fn test_content_fits_width() {
        let line = content(false);
        assert_eq!(line.width() as u16, content_width());
    }

    #[test]
    fn test_returning_highlights_label() {
        let idle = content(false);
        let active = content(true);
        assert_eq!(idle.spans[1].style.bg, None);
        assert_eq!(active.spans[1].style.bg, Some(Color::Cyan));
    }
}
