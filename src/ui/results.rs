// Results rendering.
// Score gauge, band label, and the matched/missing keyword sections.

use ratatui::{prelude::*, widgets::*};

use crate::api::{AnalysisResult, KeywordKind, ScoreBand};
use crate::app::{App, Focus};
use crate::state::ResultsState;

use super::common::{panel_block, render_empty, render_loading};

/// Color for a score band.
fn band_color(band: ScoreBand) -> Color {
    match band {
        ScoreBand::Strong => Color::Green,
        ScoreBand::Good => Color::Cyan,
        ScoreBand::Moderate => Color::Yellow,
        ScoreBand::Weak => Color::Red,
    }
}

/// Draw the results area.
pub fn draw_results(frame: &mut Frame, app: &App, area: Rect) {
    if app.request.is_loading() {
        let block = panel_block(" Results ".to_string(), false);
        render_loading(frame, area, block, "Analyzing resume");
        return;
    }

    let Some(result) = app.results.result() else {
        let block = panel_block(" Results ".to_string(), false);
        render_empty(frame, area, block, "Press Ctrl-R to analyze your resume");
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    draw_score(frame, result, chunks[0]);

    let sections = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_keywords(
        frame,
        &app.results,
        KeywordKind::Matched,
        app.focus == Focus::Matched,
        sections[0],
    );
    draw_keywords(
        frame,
        &app.results,
        KeywordKind::Missing,
        app.focus == Focus::Missing,
        sections[1],
    );
}

fn draw_score(frame: &mut Frame, result: &AnalysisResult, area: Rect) {
    let band = result.band();
    let color = band_color(band);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Line::from(vec![
            Span::raw(" Match Score: "),
            Span::styled(
                format!("{}%", result.score),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ]))
        .title(
            Line::from(vec![
                Span::styled(
                    format!(" Matched {} ", result.matched.len()),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!(" Missing {} ", result.missing.len()),
                    Style::default().fg(Color::Red),
                ),
            ])
            .right_aligned(),
        );

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(result.ratio())
        .label("");
    frame.render_widget(gauge, rows[0]);

    let label = Paragraph::new(Span::styled(
        band.label(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(label, rows[1]);
}

fn draw_keywords(
    frame: &mut Frame,
    results: &ResultsState,
    kind: KeywordKind,
    focused: bool,
    area: Rect,
) {
    let block = panel_block(format!(" {} ", kind.title()), focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let tabs = results.tabs(kind);
    let selected = results.tab_index(kind, &tabs);
    let titles: Vec<Line> = tabs.iter().map(|t| Line::from(t.title())).collect();

    let tabs_widget = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("│"));
    frame.render_widget(tabs_widget, rows[0]);

    let keywords = results.visible_keywords(kind);
    if keywords.is_empty() {
        let none = Paragraph::new("None").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(none, rows[1]);
        return;
    }

    let tag_style = match kind {
        KeywordKind::Matched => Style::default().fg(Color::Black).bg(Color::Green),
        KeywordKind::Missing => Style::default().fg(Color::Black).bg(Color::Red),
    };

    let mut spans = Vec::with_capacity(keywords.len() * 2);
    for keyword in keywords {
        spans.push(Span::styled(format!(" {} ", keyword), tag_style));
        spans.push(Span::raw(" "));
    }

    let tags = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true });
    frame.render_widget(tags, rows[1]);
}
