// UI module for rendering the TUI.
// Contains widgets for the panel bar, form, results, and overlays.

mod common;
mod form;
mod modal;
mod results;
mod tabs;

use std::time::Instant;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Focus};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Panel bar
            Constraint::Percentage(40), // Form
            Constraint::Min(8),         // Results
            Constraint::Length(1),      // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);
    form::draw_form(frame, app, chunks[1]);
    results::draw_results(frame, app, chunks[2]);
    draw_status_bar(frame, app, chunks[3]);

    if let Some(notice) = app.notice.current(Instant::now()) {
        modal::draw_notice(frame, notice, chunks[2]);
    }

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        modal::draw_help_overlay(frame);
    }
}

/// Draw the status bar with keybinding hints and request state.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let analyze_style = if app.request.can_submit() {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    };

    let mut hints = vec![
        Span::styled(" ^R Analyze", analyze_style),
        Span::raw("  Tab "),
        Span::styled("Panel", Style::default().fg(Color::DarkGray)),
    ];

    if matches!(app.focus, Focus::Matched | Focus::Missing) {
        hints.push(Span::raw("  ←→ "));
        hints.push(Span::styled("Category", Style::default().fg(Color::DarkGray)));
    }
    if app.results.has_results() {
        hints.push(Span::raw("  ^S "));
        hints.push(Span::styled("Save", Style::default().fg(Color::DarkGray)));
    }
    hints.extend([
        Span::raw("  F1 "),
        Span::styled("Help", Style::default().fg(Color::DarkGray)),
        Span::raw("  ^Q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ]);

    if app.request.is_loading() {
        hints.push(Span::styled(
            "  ⏳ Analyzing...",
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(status) = &app.status {
        hints.push(Span::styled(
            format!("  {}", status),
            Style::default().fg(Color::Cyan),
        ));
    }

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}
