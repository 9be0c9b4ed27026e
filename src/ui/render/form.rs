use crate::app::AppState;
use crate::form::FieldId;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const LABEL_WIDTH: usize = 24;

pub(in crate::ui) fn draw_form(frame: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .title("Campaign Parameters")
        .borders(Borders::ALL);

    let mut lines = vec![
        Line::styled(
            " Fill in the details to generate your UTM-tagged URL.",
            Style::default().fg(Color::DarkGray),
        ),
        Line::from(""),
    ];
    for field in FieldId::ALL {
        lines.push(field_line(app, field));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn field_line(app: &AppState, field: FieldId) -> Line<'static> {
    let focused = app.form.focus() == field;
    let value = app.form.value(field);

    let marker = if focused {
        Span::styled(
            " >> ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("    ")
    };

    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    let label = Span::styled(
        format!("{:<width$}", field.label(), width = LABEL_WIDTH),
        label_style,
    );

    let mut spans = vec![marker, label];
    if value.is_empty() && !focused {
        spans.push(Span::styled(
            field.placeholder().to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    } else {
        spans.push(Span::raw(value.to_string()));
    }
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Gray)));
    }
    if let Some(error) = app.form.error(field) {
        spans.push(Span::styled(
            format!("  {}", error.message(field)),
            Style::default().fg(Color::Red),
        ));
    }

    Line::from(spans)
}
