use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use scrolly_core::{AppConfig, Storyboard};
use scrolly_tui::{
    app::{App, ModeOverride},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    ui,
};

pub fn run(config: &AppConfig, storyboard: &Storyboard, continuous: bool) -> Result<()> {
    let mode_override = if continuous {
        ModeOverride::Continuous
    } else {
        ModeOverride::Auto
    };

    // Build the engine before touching the terminal so errors print normally
    let mut app = App::new(storyboard, config, mode_override)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Scrolly"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app, config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &AppConfig,
) -> Result<()> {
    let event_handler = EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    let (cols, rows) = terminal::size()?;
    app.handle_resize(cols, rows);
    tracing::info!(cols, rows, mode = ?app.engine.mode(), "Stage started");

    loop {
        app.tick();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll faster while a tween, timer or page scroll is running
        let event = if app.needs_animation() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => app.handle_action(handle_key_event(key)),
                AppEvent::Mouse(mouse) => app.handle_action(handle_mouse_event(mouse)),
                AppEvent::Resize(cols, rows) => app.handle_resize(cols, rows),
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(frame = app.engine.current_frame(), "Stage closed");
    Ok(())
}
