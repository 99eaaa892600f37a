//! The scrolling portfolio page

pub use super::components::back_to_top_area;
use super::components::render_back_to_top;
use super::contact_form;
use crate::app::App;
use crate::state::{BlockKind, PageBlock};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

/// Fade progress below which a line renders dimmed
const DIM_UNTIL: f32 = 0.5;

/// Apply a fade-in: hidden, then dimmed, then the full style
fn fade(style: Style, progress: f32) -> Option<Style> {
    if progress <= 0.0 {
        None
    } else if progress < DIM_UNTIL {
        Some(style.fg(Color::DarkGray).remove_modifier(Modifier::BOLD))
    } else {
        Some(style)
    }
}

fn bar_line(level: u8, fill: f32, width: usize) -> Line<'static> {
    let bar_width = width.saturating_sub(4);
    let target = bar_width as f32 * f32::from(level.min(100)) / 100.0;
    let filled = (target * fill).round() as usize;
    Line::from(vec![
        Span::raw("  "),
        Span::styled("█".repeat(filled), Style::default().fg(Color::Cyan)),
        Span::styled(
            "░".repeat(bar_width.saturating_sub(filled)),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn hero_style(index: usize) -> Style {
    match index {
        0 => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        1 => Style::default().add_modifier(Modifier::BOLD),
        2 => Style::default().fg(Color::Gray),
        _ => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    }
}

/// Base style of one line of a content block
fn line_style(kind: &BlockKind, offset: usize, text: &str) -> Style {
    match kind {
        BlockKind::Heading if offset == 0 => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        BlockKind::Heading => Style::default().fg(Color::DarkGray),
        BlockKind::EducationCard | BlockKind::TimelineItem if offset == 0 => {
            Style::default().add_modifier(Modifier::BOLD)
        }
        BlockKind::TimelineItem => Style::default().fg(Color::Gray),
        BlockKind::SkillCategory if offset == 0 => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        BlockKind::ProjectCard if offset == 0 => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        BlockKind::ProjectCard if text.trim_start().starts_with('↗') => {
            Style::default().fg(Color::Blue)
        }
        BlockKind::ProjectCard if text.trim_start().starts_with('[') => {
            Style::default().fg(Color::Magenta)
        }
        BlockKind::AchievementCard if offset == 0 => Style::default().fg(Color::Yellow),
        BlockKind::ContactItem => Style::default().fg(Color::Gray),
        _ => Style::default(),
    }
}

fn render_block_line(
    app: &App,
    index: usize,
    block: &PageBlock,
    offset: usize,
    width: usize,
    form: &mut Option<Vec<Line<'static>>>,
    now: Instant,
) -> Line<'static> {
    let text = &block.lines[offset];
    let reveal = &app.state.reveal;

    match &block.kind {
        BlockKind::Spacer => Line::default(),
        BlockKind::ContactForm => form
            .get_or_insert_with(|| contact_form::form_lines(app, width, now))
            .get(offset)
            .cloned()
            .unwrap_or_default(),
        BlockKind::Hero(i) => match fade(hero_style(*i), app.state.hero.progress(*i, now)) {
            Some(style) => Line::from(Span::styled(text.clone(), style)).alignment(Alignment::Center),
            None => Line::default(),
        },
        BlockKind::ProgressItem { level } if offset == 1 => {
            if reveal.is_revealed(index) {
                bar_line(*level, reveal.bar_fill(index, now), width)
            } else {
                Line::default()
            }
        }
        BlockKind::SkillCategory if offset > 0 => {
            let progress = reveal.item_progress(index, offset - 1, now);
            match fade(Style::default(), progress) {
                Some(style) => Line::from(Span::styled(text.clone(), style)),
                None => Line::default(),
            }
        }
        kind => {
            let style = line_style(kind, offset, text);
            let progress = if kind.reveals_on_scroll() {
                reveal.progress(index, now)
            } else {
                1.0
            };
            match fade(style, progress) {
                Some(style) => Line::from(Span::styled(text.clone(), style)),
                None => Line::default(),
            }
        }
    }
}

/// Draw the visible slice of the page
pub fn draw(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let scroll = app.state.navigation.scroll;
    let height = area.height as usize;
    let content = Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    };
    let width = content.width as usize;

    let mut form = None;
    let mut lines = Vec::with_capacity(height);
    for (index, block) in app.state.layout.blocks.iter().enumerate() {
        if block.bottom() <= scroll || block.top >= scroll + height {
            continue;
        }
        for offset in 0..block.height() {
            let row = block.top + offset;
            if row < scroll || row >= scroll + height {
                continue;
            }
            lines.push(render_block_line(
                app, index, block, offset, width, &mut form, now,
            ));
        }
    }
    frame.render_widget(Paragraph::new(lines), content);

    if app.is_back_to_top_visible() {
        render_back_to_top(frame, area, app.state.navigation.is_returning_to_top());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_stages() {
        let style = Style::default().fg(Color::Cyan);
        assert_eq!(fade(style, 0.0), None);
        assert_eq!(fade(style, 0.2).unwrap().fg, Some(Color::DarkGray));
        assert_eq!(fade(style, 1.0), Some(style));
    }

    #[test]
    fn test_bar_line_scales_with_level_and_fill() {
        let filled = |line: Line| line.spans[1].content.chars().count();
        assert_eq!(filled(bar_line(50, 1.0, 44)), 20);
        assert_eq!(filled(bar_line(50, 0.5, 44)), 10);
        assert_eq!(filled(bar_line(100, 0.0, 44)), 0);
    }
}
