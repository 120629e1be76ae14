pub mod events;
pub mod state;
pub mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use metricboard_core::DashboardInfo;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::CliError;
use crate::settings::Settings;
use events::handle_key;
use state::App;
use ui::draw_ui;

/// Mount the dashboard over the payload and run until quit.
///
/// One synchronous render tree per call; mounting a new payload means
/// calling this again.
pub fn run(info: DashboardInfo, settings: Settings) -> Result<(), CliError> {
    let mut app = App::new(info, settings);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.on_resize(terminal.size()?.width);
    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), CliError> {
    let tick = Duration::from_millis(app.settings.tick_rate_ms);
    while !app.should_quit {
        terminal.draw(|frame| draw_ui(frame, app))?;

        if event::poll(tick)? {
            match event::read()? {
                event::Event::Key(key) => handle_key(app, key),
                // Re-layout with the last known width; charts pick it up on
                // the next draw.
                event::Event::Resize(width, _) => app.on_resize(width),
                _ => {}
            }
        }
    }
    Ok(())
}
