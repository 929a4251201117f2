// Form rendering.
// Job description editor and the resume drop zone.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Focus};
use crate::intake::format_file_size;

use super::common::{input_line, panel_block};

/// Draw the form row: editor on the left, drop zone on the right.
pub fn draw_form(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    draw_editor(frame, app, chunks[0]);
    draw_dropzone(frame, app, chunks[1]);
}

fn draw_editor(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::JobDescription;
    let block = panel_block(
        format!(" Job Description ({} chars) ", app.form.char_count()),
        focused,
    );

    if app.form.job_desc.is_empty() && !focused {
        let text = Paragraph::new("Paste or type the job description")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let mut lines: Vec<Line> = app.form.job_desc.split('\n').map(Line::raw).collect();
    if focused {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("█", Style::default().fg(Color::Yellow)));
        }
    }

    // Keep the end of the text in view
    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;
    let wrapped: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(inner_width).max(1))
        .sum();
    let scroll = wrapped.saturating_sub(inner_height) as u16;

    let text = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(text, area);
}

fn draw_dropzone(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Resume;
    let block = panel_block(" Resume (PDF) ".to_string(), focused);

    let mut lines = match app.form.selected_file() {
        Some(file) => vec![
            Line::from(vec![
                Span::raw("📄 "),
                Span::styled(
                    file.name.as_str(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format_file_size(file.size),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "Ctrl-X to remove",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
        ],
        None => vec![
            Line::from(Span::styled(
                "Drop a PDF onto the terminal",
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(
                "or type its path and press Enter",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                format!("PDF only, up to {}", format_file_size(app.config.max_upload_bytes)),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
        ],
    };
    lines.push(input_line("Path: ", &app.form.path_input, focused));

    let text = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(text, area);
}
