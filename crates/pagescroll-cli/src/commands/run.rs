use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use pagescroll_core::PagerConfig;
use pagescroll_tui::{
    app::{App, AppOptions},
    event::EventHandler,
};

/// Poll interval for the event loop; quiet polls become animation ticks.
const TICK_RATE_MS: u64 = 33;

const DEFAULT_CONFIG_FILE: &str = "config.json";

pub fn run(
    deck: PathBuf,
    config_source: Option<String>,
    stylesheet: Option<PathBuf>,
    arrow_nav: bool,
    steady: bool,
) -> Result<()> {
    let mut config = load_config(config_source.as_deref());
    // CLI flags only ever turn features on; the config file stays the
    // source of truth otherwise.
    config.enable_arrow_key_nav |= arrow_nav;
    config.steady_pages |= steady;
    info!(?config, deck = %deck.display(), "starting pager");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("pagescroll"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let result = event_loop(
        AppOptions {
            deck_path: deck,
            config,
            stylesheet,
            position_path: None,
        },
        (size.width, size.height),
        &mut terminal,
    );

    // Restore terminal before surfacing any error.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    options: AppOptions,
    size: (u16, u16),
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let mut app = App::new(options, size)?;
    let events = EventHandler::new(TICK_RATE_MS);

    while !app.should_quit() {
        if let Some(event) = events.next()? {
            app.handle_event(event)?;
        }
        terminal.draw(|frame| app.draw(frame))?;
    }

    app.shutdown();
    Ok(())
}

fn load_config(source: Option<&str>) -> PagerConfig {
    match source {
        Some(source) => PagerConfig::load_or_default(source),
        // Mirror the web behavior of fetching ./config.json when present.
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            PagerConfig::load_or_default(DEFAULT_CONFIG_FILE)
        }
        None => PagerConfig::default(),
    }
}
