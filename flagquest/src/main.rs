mod app;
mod config;
mod data;
mod effects;
mod screens;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;

use app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = config::load()?;

    // A data problem is shown inside the TUI, not as a crash
    let app = match data::load(&config.data_dir) {
        Ok(data) if data.catalog.is_empty() => {
            App::with_load_error("The country catalog has no entries.", &config)
        }
        Ok(data) => App::new(data.catalog, data.flags, &config),
        Err(report) => App::with_load_error(format!("{report:#}"), &config),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> color_eyre::Result<()> {
    loop {
        terminal.draw(|frame| {
            app.render(frame);
        })?;

        // Poll with ~30fps tick for animations and the reveal timer
        if event::poll(Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        if app.handle_key(key) {
                            break; // Quit signal
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse);
                }
                Event::Resize(w, h) => {
                    app.handle_resize(w, h);
                }
                _ => {}
            }
        }

        app.tick();
    }

    Ok(())
}
