mod input;
mod render;
mod state;

use crate::app::AppState;
use crate::clipboard::{ClipboardHandle, CopyOutcome};
use crossbeam_channel::Receiver;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{QueueableCommand, execute};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use input::{handle_form_key, handle_help_key};
use render::{
    draw_footer, draw_form, draw_header, draw_help_popup, draw_notice, draw_output,
    draw_terminal_too_small,
};
use state::{FORM_HEIGHT, InputMode, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH};

const TICK_RATE: Duration = Duration::from_millis(100);

pub fn run_ui(
    mut app: AppState,
    outcome_rx: Receiver<CopyOutcome>,
    mut clipboard: ClipboardHandle,
) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut input_mode = InputMode::Form;
    let mut should_quit = false;
    let mut last_tick = Instant::now();

    while !should_quit {
        while let Ok(outcome) = outcome_rx.try_recv() {
            app.apply_copy_outcome(outcome);
        }
        app.tick();

        terminal.draw(|frame| {
            let size = frame.area();

            if size.width < MIN_TERMINAL_WIDTH || size.height < MIN_TERMINAL_HEIGHT {
                draw_terminal_too_small(frame, size);
                return;
            }

            // Main layout: Header, Content, Notice (optional), Footer
            let mut constraints = vec![
                Constraint::Length(1), // Header
                Constraint::Min(10),   // Content
            ];
            if app.notice.is_some() {
                constraints.push(Constraint::Length(1)); // Notice
            }
            constraints.push(Constraint::Length(1)); // Footer

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints(constraints)
                .split(size);

            draw_header(frame, chunks[0], &app);

            let content = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(FORM_HEIGHT), Constraint::Min(4)])
                .split(chunks[1]);
            draw_form(frame, content[0], &app);
            draw_output(frame, content[1], &app);

            let footer_idx = if app.notice.is_some() {
                draw_notice(frame, chunks[2], &app);
                3
            } else {
                2
            };
            draw_footer(frame, chunks[footer_idx], input_mode);

            if input_mode == InputMode::Help {
                draw_help_popup(frame, size);
            }
        })?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
        {
            match input_mode {
                InputMode::Form => {
                    if handle_form_key(key, &mut app, &mut input_mode, &clipboard) {
                        should_quit = true;
                    }
                }
                InputMode::Help => handle_help_key(key, &mut input_mode),
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
        }
    }

    clipboard.shutdown();
    cleanup_terminal(&mut terminal)?;
    Ok(())
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().queue(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    terminal.backend_mut().flush()?;
    Ok(())
}
