//! Navbar with section links and the compact menu overlay

use crate::app::App;
use crate::state::{link_hit_areas, NAVBAR_HEIGHT};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Toggle shown in place of the links on narrow terminals
const MENU_TOGGLE: &str = "☰ Menu (m)";
/// Gap between the brand and the first link
const BRAND_GAP: &str = "   ";

/// Column of the first link: border, padding, brand, gap
pub fn links_start(brand: &str) -> u16 {
    1 + 1 + brand.chars().count() as u16 + BRAND_GAP.len() as u16
}

/// Whether the links overflow a navbar `width` columns wide
pub fn needs_menu(brand: &str, labels: &[&str], width: u16) -> bool {
    link_hit_areas(labels, links_start(brand))
        .last()
        .is_some_and(|(_, end)| *end + 1 > width)
}

/// Dropdown area below the navbar, aligned to the right edge
pub fn menu_area(screen: Rect, labels: &[&str]) -> Rect {
    let label_width = labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0) as u16;
    // Borders, number prefix and padding
    let width = (label_width + 8).min(screen.width);
    let height = (labels.len() as u16 + 2).min(screen.height.saturating_sub(NAVBAR_HEIGHT));
    Rect {
        x: screen.right().saturating_sub(width + 1),
        y: screen.y + NAVBAR_HEIGHT,
        width,
        height,
    }
}

/// Menu entry under a position, if any
pub fn menu_entry_at(menu: Rect, count: usize, position: Position) -> Option<usize> {
    if !menu.contains(position) || position.y <= menu.y || position.y + 1 >= menu.bottom() {
        return None;
    }
    let index = (position.y - menu.y - 1) as usize;
    (index < count).then_some(index)
}

/// Draw the navbar
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let scrolled = app.is_navbar_compact();
    let border_style = if scrolled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let brand = &app.state.portfolio.owner.name;
    let brand_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    if app.is_compact() {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(" "),
                Span::styled(brand.as_str(), brand_style),
            ])),
            inner,
        );
        let toggle_style = if app.state.navigation.menu_open {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(
            Paragraph::new(format!("{MENU_TOGGLE} "))
                .alignment(Alignment::Right)
                .style(toggle_style),
            inner,
        );
        return;
    }

    let active = app.state.active_section();
    let mut spans = vec![
        Span::raw(" "),
        Span::styled(brand.as_str(), brand_style),
        Span::raw(BRAND_GAP),
    ];
    for id in app.state.nav_sections() {
        let style = if Some(id) == active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", id.label()), style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

/// Draw the compact menu over the page
pub fn draw_menu(frame: &mut Frame, screen: Rect, app: &App) {
    let labels = app.nav_labels();
    let area = menu_area(screen, &labels);
    let active = app.state.active_section();
    let sections = app.state.nav_sections();

    let lines: Vec<Line> = labels
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            let is_selected = idx == app.state.navigation.menu_index;
            let is_active = sections.get(idx).copied() == active;
            let style = if is_selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if is_active {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!(" {} {label} ", idx + 1), style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: [&str; 3] = ["Home", "About", "Contact"];

    #[test]
    fn test_links_start_after_brand() {
        assert_eq!(links_start("Ada"), 8);
    }

    #[test]
    fn test_needs_menu_when_links_overflow() {
        // Links end at column 8 + 6 + 1 + 7 + 1 + 9 = 32
        assert!(!needs_menu("Ada", &LABELS, 40));
        assert!(needs_menu("Ada", &LABELS, 32));
    }

    #[test]
    fn test_menu_area_below_navbar() {
        let area = menu_area(Rect::new(0, 0, 60, 30), &LABELS);
        assert_eq!(area.y, NAVBAR_HEIGHT);
        assert_eq!(area.height, 5);
        assert_eq!(area.width, 15);
        assert_eq!(area.right(), 59);
    }

    #[test]
    fn test_menu_entry_at() {
        let menu = menu_area(Rect::new(0, 0, 60, 30), &LABELS);
        let x = menu.x + 2;
        assert_eq!(menu_entry_at(menu, 3, Position::new(x, menu.y)), None);
        assert_eq!(menu_entry_at(menu, 3, Position::new(x, menu.y + 1)), Some(0));
        assert_eq!(menu_entry_at(menu, 3, Position::new(x, menu.y + 3)), Some(2));
        assert_eq!(menu_entry_at(menu, 3, Position::new(x, menu.y + 4)), None);
        assert_eq!(menu_entry_at(menu, 3, Position::new(0, menu.y + 1)), None);
    }
}
