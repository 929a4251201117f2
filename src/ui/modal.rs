// Overlay UI components.
// Error banner and help popup drawn on top of the current view.

use ratatui::{prelude::*, widgets::*};

use crate::state::NoticeMessage;

/// Draw the transient error banner above the status bar.
pub fn draw_notice(frame: &mut Frame, notice: &NoticeMessage, area: Rect) {
    let width = area.width.saturating_sub(4).min(80);
    let height = 3;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + area.height.saturating_sub(height + 1);
    let banner_area = Rect::new(x, y, width, height.min(area.height));

    // Clear the area behind the banner
    frame.render_widget(Clear, banner_area);

    let time = notice
        .shown_at
        .with_timezone(&chrono::Local)
        .format("%H:%M:%S")
        .to_string();

    let banner = Paragraph::new(Line::from(vec![
        Span::raw("❌ "),
        Span::styled(notice.message.as_str(), Style::default().fg(Color::Red)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(format!(" Error {} ", time))
            .title_bottom(Line::from(" Esc to dismiss ").right_aligned()),
    )
    .wrap(Wrap { trim: true });

    frame.render_widget(banner, banner_area);
}

/// Draw the help overlay.
pub fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Create a centered popup
    let popup_width = 56.min(area.width);
    let popup_height = 20.min(area.height);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let bindings = [
        ("Tab/Shift-Tab ", "Move between panels"),
        ("Ctrl-R        ", "Analyze resume"),
        ("Ctrl-S        ", "Save report"),
        ("Ctrl-X        ", "Remove selected resume"),
        ("Ctrl-U        ", "Clear focused input"),
        ("Enter         ", "Newline / select typed path"),
        ("←/→ or h/l    ", "Switch keyword category"),
        ("1-9           ", "Jump to keyword category"),
        ("Esc           ", "Dismiss error / close help"),
        ("F1            ", "Show/hide this help"),
        ("Ctrl-Q        ", "Quit"),
    ];

    let mut help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
    ];
    help_text.extend(bindings.iter().map(|(keys, action)| {
        Line::from(vec![
            Span::styled(format!("  {}", keys), Style::default().fg(Color::Cyan)),
            Span::raw(*action),
        ])
    }));
    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        "  Drag a PDF onto the terminal to select it.",
        Style::default().fg(Color::DarkGray),
    )));
    help_text.push(Line::from(Span::styled(
        "  Paste into the editor to add text.",
        Style::default().fg(Color::DarkGray),
    )));
    help_text.push(Line::from(""));
    help_text.push(Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Yellow)),
        Span::styled(" or ", Style::default().fg(Color::DarkGray)),
        Span::styled("F1", Style::default().fg(Color::Yellow)),
        Span::styled(" to close", Style::default().fg(Color::DarkGray)),
    ]));

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}
