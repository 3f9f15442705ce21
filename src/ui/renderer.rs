//! Terminal setup and the main event loop

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Stdout};

use crate::config::Config;
use crate::logger::Logger;
use crate::service::TaskService;
use crate::ui::app_component::AppComponent;
use crate::ui::core::EventHandler;

/// Raw mode plus alternate screen, undone when dropped.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl TerminalGuard {
    fn enter(mouse_enabled: bool) -> Result<Self> {
        enable_raw_mode()?;
        match Self::setup(mouse_enabled) {
            Ok(terminal) => Ok(Self {
                terminal,
                restored: false,
            }),
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
                Err(e)
            }
        }
    }

    fn setup(mouse_enabled: bool) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        if mouse_enabled {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(stdout, EnterAlternateScreen)?;
        }
        Ok(Terminal::new(CrosstermBackend::new(stdout))?)
    }

    /// Every step runs even if an earlier one fails; the first error is returned.
    fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        let raw = disable_raw_mode();
        let screen = execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture);
        let cursor = self.terminal.show_cursor();
        raw?;
        screen?;
        cursor?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Run the TUI until the user quits. The terminal is restored on every exit
/// path, including errors and panics inside the loop.
pub async fn run_app(service: TaskService, config: &Config, logger: Logger) -> Result<()> {
    let mut guard = TerminalGuard::enter(config.ui.mouse_enabled)?;

    let mut app = AppComponent::new(service, config, logger);
    // Owns the frame timer; dropped together with the loop
    let mut event_handler = EventHandler::new();

    let result = run_app_loop(&mut guard.terminal, &mut app, &mut event_handler).await;
    let restored = guard.restore();

    // A loop error takes precedence over a restore error
    result.and(restored)
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
        }

        let event = event_handler.next_event().await?;
        needs_render = app.handle_event(event).await?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
