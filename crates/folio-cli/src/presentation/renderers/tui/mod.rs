mod app;
mod hit_map;
mod input;
mod layout;

pub use app::{App, NARROW_WIDTH};
pub use hit_map::{HitMap, HitTarget};
pub use input::{Intent, Scroll, has_platform_modifier, is_palette_shortcut, map_key, map_mouse};
pub use layout::ShellLayout;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

const TICK_RATE: Duration = Duration::from_millis(250);

/// Owns the terminal for the lifetime of the interactive shell
pub struct TuiRenderer;

impl TuiRenderer {
    pub fn run(mut app: App<'_>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            std::process::exit(0);
        })?;

        if let Ok(size) = terminal.size() {
            app.fit_width(size.width);
        }

        let result = event_loop(&mut terminal, &mut app);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        log::info!("shell closed");
        result
    }
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App<'_>) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| app.draw(f))?;

        let timeout = app.poll_timeout(Instant::now(), TICK_RATE);
        if event::poll(timeout)? {
            app.handle_event(event::read()?);
        }

        app.tick(Instant::now());
    }
    Ok(())
}
