use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::Duration;

mod actions;
mod capabilities;
mod dispatcher;
mod domain_models;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod selectors;
mod state;
mod store;
mod view_models;
mod views;

#[cfg(test)]
mod test_support;

use actions::{Action, GlobalAction};
use domain_models::Route;
use middleware::{
    api_middleware::ApiMiddleware, forms_middleware::FormsMiddleware,
    keyboard_middleware::KeyboardMiddleware, logging::LoggingMiddleware,
    router_middleware::RouterMiddleware, session_middleware::SessionMiddleware,
};
use selectors::Selectors;
use six_cities_client::{ApiClient, HttpApiClient};
use six_cities_config::{AppConfig, FileTokenStore, TokenStorage};
use state::AppState;
use store::Store;

fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let log_file = logger::init()?;
    log::info!("Starting six-cities, logging to {}", log_file.display());

    let config = AppConfig::load();
    let tokens: Arc<dyn TokenStorage> = Arc::new(FileTokenStore::open_default()?);
    let client: Arc<dyn ApiClient> = Arc::new(HttpApiClient::new(&config.api, tokens.clone())?);
    log::info!("Using API at {}", config.api.base_url);

    let runtime = tokio::runtime::Runtime::new()?;

    let mut store = Store::new(AppState::default(), runtime.handle().clone());

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(RouterMiddleware::new()));
    store.add_middleware(Box::new(SessionMiddleware::new()));
    store.add_middleware(Box::new(FormsMiddleware::new()));
    store.add_middleware(Box::new(ApiMiddleware::new(client, tokens)));

    store.dispatch(Action::Global(GlobalAction::Bootstrap));
    let start = std::env::args()
        .nth(1)
        .map(|path| Route::parse(&path))
        .unwrap_or_default();
    store.dispatch(Action::navigate(start));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut store);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if store.in_flight() > 0 {
        log::info!("Dropping {} unsettled request(s)", store.in_flight());
    }
    runtime.shutdown_timeout(Duration::from_millis(500));

    log::info!("Exiting six-cities");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
) -> anyhow::Result<()> {
    let selectors = Selectors::default();

    loop {
        // Apply settled requests before drawing
        store.drain();

        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), &selectors, area, frame);
        })?;

        if !store.state().running {
            break;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
            }
        }
    }

    Ok(())
}
