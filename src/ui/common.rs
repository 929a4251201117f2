// Shared rendering helpers.
// Loading, empty-state, and focus styling used by several panels.

use ratatui::{prelude::*, widgets::*};

/// Border style for a panel, highlighted when focused.
pub fn panel_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, block: Block, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(block);
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, block: Block, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(block);
    frame.render_widget(text, area);
}

/// Text input line with a block cursor.
pub fn input_line<'a>(prefix: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let mut spans = vec![
        Span::styled(prefix, Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}
