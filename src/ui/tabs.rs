// Panel bar rendering.
// Shows which panel has focus and whether results are available.

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Focus};

/// Draw the panel bar at the top of the screen.
pub fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Focus::ALL
        .iter()
        .map(|focus| {
            let title = match focus.keyword_kind() {
                Some(kind) => match app.results.result() {
                    Some(result) => format!("{} ({})", focus.title(), result.keywords(kind).len()),
                    None => focus.title().to_string(),
                },
                None => focus.title().to_string(),
            };

            let style = if *focus == app.focus {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            Line::from(Span::styled(title, style))
        })
        .collect();

    let selected_index = Focus::ALL
        .iter()
        .position(|f| *f == app.focus)
        .unwrap_or(0);

    let tabs_widget = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" resume-match ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .select(selected_index)
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider(Span::raw(" │ "));

    frame.render_widget(tabs_widget, area);
}
