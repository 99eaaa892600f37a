//! Contact form rendering
//!
//! The form is drawn as plain lines so it can scroll with the rest of the
//! page. Row positions come from `ContactForm::row_layout`.

use crate::app::App;
use crate::state::{BannerPhase, Field, Focus, Severity, MESSAGE_INPUT_ROWS};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::time::Instant;

const CURSOR: &str = "▌";
const SEND_LABEL: &str = "[ Send Message ]";
const SENDING_LABEL: &str = "[ Sending... ]";

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Blue,
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
    }
}

fn banner_line(app: &App, now: Instant) -> Line<'static> {
    let banner = app.state.validator.banner();
    let (Some(message), Some(phase)) = (banner.current(), banner.phase(now)) else {
        return Line::default();
    };
    let color = severity_color(message.severity);
    let style = match phase {
        BannerPhase::Visible => Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD),
        // Fading out
        BannerPhase::Leaving(progress) if progress < 0.5 => Style::default().fg(color),
        BannerPhase::Leaving(_) => Style::default().fg(Color::DarkGray),
    };
    let icon = match message.severity {
        Severity::Success => "✓",
        Severity::Error => "✗",
        Severity::Info => "ℹ",
    };
    Line::from(Span::styled(format!(" {icon} {} ", message.text), style))
}

/// Keep the tail of a value that is wider than the input
fn tail(text: &str, width: usize) -> String {
    let count = text.chars().count();
    text.chars().skip(count.saturating_sub(width)).collect()
}

fn input_lines(field: &Field, is_active: bool, has_error: bool, width: usize) -> Vec<Line<'static>> {
    let edge_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text_width = width.saturating_sub(4);
    let rows = if field.is_multiline {
        MESSAGE_INPUT_ROWS
    } else {
        1
    };

    let mut values: Vec<String> = if field.is_multiline {
        field.value.split('\n').map(|l| tail(l, text_width)).collect()
    } else {
        vec![tail(&field.value, text_width)]
    };
    // Show the last rows of a long message
    if values.len() > rows {
        values.drain(..values.len() - rows);
    }
    let cursor_row = values.len().saturating_sub(1);
    values.resize(rows, String::new());

    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            let mut spans = vec![Span::styled("  │ ", edge_style), Span::raw(value)];
            if is_active && row == cursor_row {
                spans.push(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
            }
            Line::from(spans)
        })
        .collect()
}

/// Render every row of the contact form
pub fn form_lines(app: &App, width: usize, now: Instant) -> Vec<Line<'static>> {
    let form = &app.state.contact_form;
    let validator = &app.state.validator;
    let form_focused = app.state.focus == Focus::Form;

    let mut lines = vec![Line::default(); form.height()];
    lines[0] = banner_line(app, now);

    for (idx, (field, rows)) in form.fields.iter().zip(form.row_layout()).enumerate() {
        let is_active = form_focused && idx == form.active_field_index;
        let error = validator.field_error(&field.name);

        let label_style = if is_active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines[rows.label] = Line::from(Span::styled(format!("  {}", field.display_label()), label_style));

        let inputs = input_lines(field, is_active, error.is_some(), width);
        for (row, line) in rows.input.clone().zip(inputs) {
            lines[row] = line;
        }

        if let Some(error) = error {
            lines[rows.error] = Line::from(Span::styled(
                format!("    {}", error.message),
                Style::default().fg(Color::Red),
            ));
        }
    }

    let enabled = validator.is_submit_enabled();
    let selected = form_focused && form.is_submit_active();
    let (label, style) = if !enabled {
        (SENDING_LABEL, Style::default().fg(Color::DarkGray))
    } else if selected {
        (
            SEND_LABEL,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (SEND_LABEL, Style::default().fg(Color::Cyan))
    };
    lines[form.submit_row()] = Line::from(vec![Span::raw("  "), Span::styled(label, style)]);

    lines
}
