use crate::config::Config;
use crate::logger::Logger;
use crate::ui::app::App;
use crate::ui::core::{Component, EventHandler, EventType};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Run the demo form until the user quits
pub async fn run_app(config: &Config, logger: Logger) -> anyhow::Result<()> {
    // Build the form first so a bad field never leaves the terminal in raw mode
    let mut app = App::new(config, logger)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.platform.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut event_handler = EventHandler::new();
    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        // Render when needed, capped by the frame timer
        if needs_render && event_handler.should_render() {
            terminal.draw(|f| app.render(f, f.area()))?;
            event_handler.mark_rendered();
            needs_render = false;
        }

        match event_handler.next_event().await? {
            EventType::Tick | EventType::Other => {}
            event => {
                let action = app.handle_events(event.into_event());
                app.update(action);
                needs_render = true;
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
