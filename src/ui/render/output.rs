use crate::app::AppState;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

pub(in crate::ui) fn draw_output(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let block = Block::default().title("Generated URL").borders(Borders::ALL);

    let paragraph = match &app.composed {
        Some(url) => Paragraph::new(vec![
            Line::from(Span::styled(
                format!(" {url}"),
                Style::default().fg(Color::Cyan),
            )),
            Line::from(""),
            Line::styled(
                " Press ^Y to copy the URL to your clipboard.",
                Style::default().fg(Color::DarkGray),
            ),
        ])
        .wrap(Wrap { trim: false }),
        None => Paragraph::new(Line::styled(
            " No URL yet. Fill in the form and press Enter.",
            Style::default().fg(Color::DarkGray),
        )),
    };

    frame.render_widget(paragraph.block(block), area);
}
