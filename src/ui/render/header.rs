use crate::app::{AppState, NoticeLevel};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::super::state::InputMode;

pub(in crate::ui) fn draw_header(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let status = if app.composed.is_some() {
        Span::styled(" URL ready ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" no URL yet ", Style::default().fg(Color::Gray))
    };

    let header = Line::from(vec![
        Span::styled(
            " utmlink",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(
            "Generate clean, trackable URLs in seconds.",
            Style::default().fg(Color::Gray),
        ),
        Span::raw(" │"),
        status,
    ]);

    let paragraph = Paragraph::new(header).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

pub(in crate::ui) fn draw_footer(frame: &mut ratatui::Frame, area: Rect, mode: InputMode) {
    let hints = match mode {
        InputMode::Form => vec![
            ("Tab/↓", "Next field"),
            ("Shift-Tab/↑", "Prev"),
            ("Enter", "Generate"),
            ("^Y", "Copy"),
            ("^R", "Reset"),
            ("^U", "Clear field"),
            ("F1", "Help"),
            ("Esc", "Quit"),
        ],
        InputMode::Help => vec![("Esc", "Close")],
    };

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(format!(" {key} "), Style::default().fg(Color::Yellow)),
                Span::styled(format!("{action} "), Style::default().fg(Color::Gray)),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(footer, area);
}

pub(in crate::ui) fn draw_notice(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let Some(notice) = &app.notice else {
        return;
    };

    let style = match notice.level {
        NoticeLevel::Success => Style::default().fg(Color::Green),
        NoticeLevel::Error => Style::default().fg(Color::Red),
    };

    let line = Line::from(Span::styled(format!(" {} ", notice.text), style));
    frame.render_widget(Paragraph::new(line), area);
}
