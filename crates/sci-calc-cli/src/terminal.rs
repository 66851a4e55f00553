//! Terminal lifecycle and the window event loop

use std::io::{self, Stdout};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sci_calc::tui::{render, CalculatorApp, InputHandler, KeyAction};
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::error::CliResult;

/// Restores the terminal when dropped, on every exit path
#[derive(Debug)]
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

/// Opens the calculator window and runs until the user quits
pub fn run_window(config: &CliConfig) -> CliResult<()> {
    info!(mode = %config.mode, "opening window");
    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = CalculatorApp::with_mode(config.mode);
    let result = run_app(&mut terminal, &mut app);

    let _ = terminal.show_cursor();
    drop(terminal);
    drop(guard);
    info!(evaluations = app.session().history().len(), "window closed");
    result
}

/// Maps one terminal event to an app action
#[must_use]
pub fn translate_event(input: &InputHandler, event: &Event) -> KeyAction {
    match event {
        Event::Key(key) => input.handle_key(*key),
        Event::Mouse(mouse) => input.handle_mouse(*mouse),
        _ => KeyAction::None,
    }
}

fn set_title(title: &str) -> io::Result<()> {
    execute!(io::stdout(), SetTitle(title))
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut CalculatorApp,
) -> CliResult<()> {
    let input = InputHandler::new();
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    let mut title = app.session().title();
    set_title(&title)?;

    loop {
        terminal.draw(|frame| render(app, frame))?;

        let event = event::read()?;
        if let Event::Resize(width, height) = event {
            app.resize(width, height);
            continue;
        }

        let action = translate_event(&input, &event);
        if action != KeyAction::None {
            debug!(?action, "input");
        }
        app.handle_action(action);

        if app.session().title() != title {
            title = app.session().title();
            set_title(&title)?;
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
