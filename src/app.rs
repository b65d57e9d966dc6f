use crate::config::Config;
use crate::error::AppError;
use crate::events::{self, terminal::Handler as TerminalEventHandler, EventReceiver};
use crate::events::timer::Timer;
use crate::logger::LogBuffer;
use crate::state::{RngSource, SpinSource, State};
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};

type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: State,
}

impl App {
    /// Start a new application according to the given configuration. Spins
    /// draw from a generator seeded with `seed` when given. Returns the
    /// result of the application execution.
    ///
    pub async fn start(config: Config, seed: Option<u64>, log_buffer: LogBuffer) -> Result<()> {
        info!("Starting application...");
        let theme = config.theme()?;
        let source: Box<dyn SpinSource> = match seed {
            Some(seed) => {
                info!("Using seeded random source ({})", seed);
                Box::new(RngSource::seeded(seed))
            }
            None => Box::new(RngSource::from_entropy()),
        };

        let (tx, rx) = events::channel();
        let state = State::new(source)
            .with_timer(Timer::new(tx.clone()))
            .with_theme(theme)
            .with_hotkeys(config.hotkeys.clone())
            .with_log_buffer(log_buffer);
        let mut app = App { state };

        events::terminal::spawn_input_thread(tx);
        app.start_ui(rx).await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Take over the terminal, run the render loop on the current task, and
    /// restore the terminal whatever the outcome.
    ///
    async fn start_ui(&mut self, rx: EventReceiver) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| AppError::Terminal(format!("Failed to enter alternate screen: {}", e)))?;
        enable_raw_mode()
            .map_err(|e| AppError::Terminal(format!("Failed to enable raw mode: {}", e)))?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run(&mut terminal, rx).await;

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Draw, then wait for the next event, until an exit is requested.
    ///
    async fn run(&mut self, terminal: &mut AppTerminal, rx: EventReceiver) -> Result<()> {
        let mut event_handler = TerminalEventHandler::new(rx);
        loop {
            terminal.draw(|frame| crate::ui::render(frame, &self.state))?;
            if !event_handler.handle_next(&mut self.state).await? {
                debug!("Received application exit request.");
                break;
            }
        }
        if self.state.has_pending_completion() {
            info!("Exiting during spin #{}", self.state.current_spin_id());
        }
        self.state.cancel_spin();
        Ok(())
    }
}
