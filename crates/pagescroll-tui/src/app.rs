use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use tracing::warn;

use pagescroll_core::{DocumentHost, FilePositionStore, Pager, PagerConfig};

use crate::deck::Deck;
use crate::event::AppEvent;
use crate::host::TerminalHost;
use crate::input::{handle_key_event, Action};
use crate::scroll::ScrollConfig;
use crate::widgets::{PageDots, ProgressRail, SlidesWidget, Status, StatusBarWidget};

/// Launch options for the viewer.
pub struct AppOptions {
    pub deck_path: PathBuf,
    pub config: PagerConfig,
    /// Optional style overlay applied at startup.
    pub stylesheet: Option<PathBuf>,
    /// Override for the persisted-position file; defaults to the data dir.
    pub position_path: Option<PathBuf>,
}

/// Application state: the paging engine, its terminal host, and the render
/// handles of the bus-registered widgets.
pub struct App {
    pager: Pager,
    host: TerminalHost,
    rail: ProgressRail,
    dots: PageDots,
    deck_name: String,
    should_quit: bool,
}

impl App {
    /// `terminal_size` is the full terminal (columns, rows).
    pub fn new(options: AppOptions, terminal_size: (u16, u16)) -> Result<Self> {
        let deck = Deck::load(&options.deck_path)?;
        let deck_name = options
            .deck_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "deck".to_string());

        let store = FilePositionStore::new(
            options
                .position_path
                .unwrap_or_else(FilePositionStore::default_path),
        );
        let mut pager = Pager::new(options.config, Box::new(store));
        let mut host = TerminalHost::new(deck, ScrollConfig::default(), slides_size(terminal_size));
        pager.init(&mut host)?;

        if let Some(sheet) = &options.stylesheet {
            if let Err(err) = host.add_stylesheet(&sheet.to_string_lossy()) {
                warn!(error = %err, "stylesheet load failed");
            }
        }

        let rail = ProgressRail::new();
        pager.register_plugin(&mut host, "progress-rail", Box::new(rail.clone()));
        let dots = PageDots::new();
        pager.register_plugin(&mut host, "page-dots", Box::new(dots.clone()));

        Ok(Self {
            pager,
            host,
            rail,
            dots,
            deck_name,
            should_quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Key(key) => match handle_key_event(key) {
                Action::Quit => self.should_quit = true,
                Action::Nav(nav) => {
                    self.pager.handle_nav_key(&mut self.host, nav)?;
                }
                Action::None => {}
            },
            AppEvent::Resize(width, height) => {
                self.host.reflow(slides_size((width, height)));
                self.pager.handle_resize(Instant::now());
            }
            AppEvent::Tick => self.tick(Instant::now())?,
        }
        Ok(())
    }

    /// One frame of deferred work: debounced resize recomputation, then the
    /// scroll animation — each movement becomes a scroll event for the engine.
    fn tick(&mut self, now: Instant) -> Result<()> {
        self.pager.tick(&mut self.host, now)?;
        if let Some(offset) = self.host.poll_scroll(now) {
            self.pager.handle_scroll(&mut self.host, offset);
        }
        Ok(())
    }

    /// Persist the scroll position; call once on the way out.
    pub fn shutdown(&mut self) {
        let offset = self.host.scroll_offset();
        self.pager.persist_position(offset);
    }

    pub fn draw(&self, frame: &mut Frame) {
        let palette = self.host.palette();
        let [main, status_area] = vsplit(frame.area());
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(main);
        let slides_area = chunks[0];
        let rail_area = chunks[1];

        let offset = self.host.scroll_offset();
        SlidesWidget::render(frame, slides_area, &self.host, offset);
        self.rail.render(frame, rail_area, &palette);

        // Dots float over the last slide row, above the status bar.
        if slides_area.height > 1 {
            let dots_area = Rect {
                x: slides_area.x,
                y: slides_area.y + slides_area.height - 1,
                width: slides_area.width,
                height: 1,
            };
            self.dots.render(frame, dots_area, &palette);
        }

        StatusBarWidget::render(
            frame,
            status_area,
            &Status {
                deck_name: &self.deck_name,
                page: self.pager.current_page(),
                page_count: self.pager.page_count(),
                progress: self.pager.scroll_progress(),
                arrow_nav: self.pager.config().enable_arrow_key_nav,
                steady: self.host.is_steady(),
            },
        );
    }
}

/// The slides viewport inside the full terminal: one column reserved for the
/// progress rail, one row for the status bar.
fn slides_size(terminal_size: (u16, u16)) -> (u16, u16) {
    (
        terminal_size.0.saturating_sub(1),
        terminal_size.1.saturating_sub(1),
    )
}

fn vsplit(area: Rect) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    [chunks[0], chunks[1]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagescroll_core::NavKey;
    use std::io::Write;
    use std::time::Duration;

    fn write_deck(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("demo.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "One\nbody\n---\nTwo\nbody\n---\nThree\nbody\n").unwrap();
        path
    }

    fn app(dir: &tempfile::TempDir, config: PagerConfig) -> App {
        App::new(
            AppOptions {
                deck_path: write_deck(dir),
                config,
                stylesheet: None,
                position_path: Some(dir.path().join("scrollpos")),
            },
            (80, 24),
        )
        .unwrap()
    }

    #[test]
    fn test_starts_on_page_zero() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&dir, PagerConfig::default());
        assert_eq!(app.pager.current_page(), 0);
        assert_eq!(app.pager.page_count(), 3);
    }

    #[test]
    fn test_arrow_navigation_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app(
            &dir,
            PagerConfig {
                enable_arrow_key_nav: true,
                ..Default::default()
            },
        );

        app.pager.handle_nav_key(&mut app.host, NavKey::Down).unwrap();
        // Drive the animation well past its duration; the resulting scroll
        // events advance the engine to page 1.
        let deadline = Instant::now() + Duration::from_millis(400);
        app.tick(deadline).unwrap();
        assert_eq!(app.pager.current_page(), 1);
    }

    #[test]
    fn test_quit_persists_position_for_next_session() {
        let dir = tempfile::tempdir().unwrap();
        let config = PagerConfig {
            enable_arrow_key_nav: true,
            ..Default::default()
        };
        {
            let mut app = app(&dir, config);
            app.pager.handle_nav_key(&mut app.host, NavKey::Down).unwrap();
            app.tick(Instant::now() + Duration::from_millis(400)).unwrap();
            app.shutdown();
        }
        let mut restored = app(&dir, config);
        // The restore jump is still animating at startup; drive it home.
        restored.tick(Instant::now() + Duration::from_millis(400)).unwrap();
        assert_eq!(restored.pager.current_page(), 1);
    }
}
