use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::super::state::{MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};
use super::format::centered_rect;

pub(in crate::ui) fn draw_help_popup(frame: &mut ratatui::Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    frame.render_widget(Clear, popup_area);

    let key = |text: &'static str| Span::styled(text, Style::default().fg(Color::Green));
    let help_text = vec![
        Line::from(vec![Span::styled(
            "  Keyboard Shortcuts  ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::styled("─── Form ───", Style::default().fg(Color::Yellow)),
        Line::from(vec![
            key("  Tab, Down     "),
            Span::raw("Focus next field"),
        ]),
        Line::from(vec![
            key("  Shift-Tab, Up "),
            Span::raw("Focus previous field"),
        ]),
        Line::from(vec![key("  Enter         "), Span::raw("Generate the URL")]),
        Line::from(vec![
            key("  Ctrl+U        "),
            Span::raw("Clear the focused field"),
        ]),
        Line::from(vec![
            key("  Ctrl+R        "),
            Span::raw("Reset the form and output"),
        ]),
        Line::from(""),
        Line::styled("─── Output ───", Style::default().fg(Color::Yellow)),
        Line::from(vec![
            key("  Ctrl+Y        "),
            Span::raw("Copy the generated URL"),
        ]),
        Line::from(""),
        Line::styled("─── General ───", Style::default().fg(Color::Yellow)),
        Line::from(vec![key("  F1            "), Span::raw("Toggle this help")]),
        Line::from(vec![key("  Esc, Ctrl+C   "), Span::raw("Quit")]),
    ];

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help "),
    );

    frame.render_widget(paragraph, popup_area);
}

/// Draw a warning when terminal is too small
pub(in crate::ui) fn draw_terminal_too_small(frame: &mut ratatui::Frame, area: Rect) {
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::styled(
            "Terminal Too Small",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("Current: "),
            Span::styled(
                format!("{}x{}", area.width, area.height),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::raw("Minimum: "),
            Span::styled(
                format!("{}x{}", MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(""),
        Line::styled(
            "Please resize your terminal",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" utmlink"),
    );

    frame.render_widget(paragraph, area);
}
