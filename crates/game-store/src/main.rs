use std::io;
use std::sync::Arc;
use std::time::Duration;

use game_store::actions::{Action, GlobalAction};
use game_store::middleware::{
    CheckoutMiddleware, ContactMiddleware, KeyboardMiddleware, LoggingMiddleware,
    SearchMiddleware, SessionMiddleware,
};
use game_store::scheduler::{Clock, SystemClock};
use game_store::state::AppState;
use game_store::store::Store;
use game_store::{logger, views};
use game_store_config::AppConfig;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};

/// How long to wait for input before checking deferred actions again
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting game-store, logging to {}", log_file.display());

    let config = AppConfig::load();
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // Initialize store with middleware
    let mut store = Store::new(AppState::new(config), Arc::clone(&clock));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(SessionMiddleware::new(Arc::clone(&clock))));
    store.add_middleware(Box::new(CheckoutMiddleware::new(Arc::clone(&clock))));
    store.add_middleware(Box::new(SearchMiddleware::new()));
    store.add_middleware(Box::new(ContactMiddleware::new()));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Fatal: {}", err);
    }

    log::info!("Exiting game-store");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> anyhow::Result<()> {
    loop {
        // Render
        terminal.draw(|frame| views::render(store.state(), frame))?;

        // Check if we should quit
        if !store.state().running {
            break;
        }

        // Handle events
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }

        // Deliver simulated work that has completed
        store.tick();
    }

    Ok(())
}
