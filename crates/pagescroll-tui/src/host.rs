//! Terminal implementation of the engine's document contract.

use std::fs;
use std::time::Instant;

use ratatui::style::Color;
use serde::Deserialize;
use tracing::debug;

use pagescroll_core::{Activation, DocumentHost, Error};

use crate::deck::{self, Deck};
use crate::scroll::{ScrollAnimator, ScrollConfig};

/// Horizontal margin around slide text, in columns, applied on both sides.
pub const TEXT_MARGIN: u16 = 2;

/// Width available for slide text inside an area of the given width.
pub fn text_width(area_width: u16) -> u16 {
    area_width.saturating_sub(TEXT_MARGIN * 2).max(1)
}

/// Per-page presentation state tracked for rendering.
#[derive(Debug, Clone, Copy)]
pub struct PageState {
    pub index: usize,
    pub activation: Activation,
}

/// Color overrides loaded through the stylesheet hook. Values are `#rrggbb`
/// hex strings; anything unparseable falls back to the default palette entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleOverlay {
    pub accent: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub rail: Option<String>,
}

impl StyleOverlay {
    fn merge(&mut self, other: StyleOverlay) {
        if other.accent.is_some() {
            self.accent = other.accent;
        }
        if other.title.is_some() {
            self.title = other.title;
        }
        if other.body.is_some() {
            self.body = other.body;
        }
        if other.rail.is_some() {
            self.rail = other.rail;
        }
    }
}

/// Resolved rendering colors.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: Color,
    pub title: Color,
    pub body: Color,
    pub rail: Color,
    pub dim: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            title: Color::White,
            body: Color::Gray,
            rail: Color::Cyan,
            dim: Color::DarkGray,
        }
    }
}

impl Palette {
    fn resolve(overlay: &StyleOverlay) -> Self {
        let defaults = Self::default();
        Self {
            accent: parse_hex(&overlay.accent).unwrap_or(defaults.accent),
            title: parse_hex(&overlay.title).unwrap_or(defaults.title),
            body: parse_hex(&overlay.body).unwrap_or(defaults.body),
            rail: parse_hex(&overlay.rail).unwrap_or(defaults.rail),
            dim: defaults.dim,
        }
    }
}

fn parse_hex(value: &Option<String>) -> Option<Color> {
    let value = value.as_deref()?.trim_start_matches('#');
    if value.len() != 6 || !value.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&value[0..2], 16).ok()?;
    let g = u8::from_str_radix(&value[2..4], 16).ok()?;
    let b = u8::from_str_radix(&value[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Terminal document: the deck plus everything the paging engine manipulates
/// through [`DocumentHost`] — activation markers, index tags, the synthesized
/// container height, the smooth-scroll animator, and the style overlay.
pub struct TerminalHost {
    deck: Deck,
    heights: Vec<u32>,
    states: Vec<PageState>,
    animator: ScrollAnimator,
    container_height: Option<u32>,
    steady: bool,
    viewport: (u16, u16),
    palette: Palette,
    overlay: StyleOverlay,
}

impl TerminalHost {
    /// `viewport` is the (columns, rows) of the area slides render into.
    pub fn new(deck: Deck, scroll_config: ScrollConfig, viewport: (u16, u16)) -> Self {
        let states = (0..deck.len())
            .map(|index| PageState {
                index,
                activation: Activation::Inactive,
            })
            .collect();
        let mut host = Self {
            deck,
            heights: Vec::new(),
            states,
            animator: ScrollAnimator::new(scroll_config),
            container_height: None,
            steady: false,
            viewport,
            palette: Palette::default(),
            overlay: StyleOverlay::default(),
        };
        host.reflow(viewport);
        host
    }

    /// Recompute slide heights for a new viewport. Cheap enough to run on
    /// every resize event; the engine's own boundary rebuild stays debounced.
    pub fn reflow(&mut self, viewport: (u16, u16)) {
        self.viewport = viewport;
        let width = text_width(viewport.0);
        self.heights = self
            .deck
            .slides
            .iter()
            .map(|slide| deck::slide_height(slide, width, viewport.1))
            .collect();
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn states(&self) -> &[PageState] {
        &self.states
    }

    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn is_steady(&self) -> bool {
        self.steady
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Total scrollable document height: the synthesized container height in
    /// steady mode, otherwise the natural sum of slide heights.
    pub fn total_height(&self) -> u32 {
        self.container_height
            .unwrap_or_else(|| self.heights.iter().sum())
    }

    pub fn max_scroll(&self) -> u32 {
        self.total_height().saturating_sub(self.viewport.1 as u32)
    }

    /// Advance the scroll animation. Returns the new offset when the viewport
    /// moved since the last poll — each movement is one scroll event for the
    /// engine.
    pub fn poll_scroll(&mut self, now: Instant) -> Option<u32> {
        let max_scroll = self.max_scroll();
        let before = self.animator.current();
        let after = self.animator.update(max_scroll, now);
        (after != before).then_some(after)
    }

    /// Index of the active page, if any. Rendering falls back to page 0.
    pub fn active_page(&self) -> Option<usize> {
        self.states
            .iter()
            .position(|s| s.activation == Activation::Active)
    }
}

impl DocumentHost for TerminalHost {
    fn page_count(&self) -> usize {
        self.deck.len()
    }

    fn page_height(&self, index: usize) -> u32 {
        self.heights.get(index).copied().unwrap_or(0)
    }

    fn tag_page(&mut self, index: usize) {
        if let Some(state) = self.states.get_mut(index) {
            state.index = index;
        }
    }

    fn set_activation(&mut self, index: usize, activation: Activation) {
        if let Some(state) = self.states.get_mut(index) {
            state.activation = activation;
        }
    }

    fn set_container_height(&mut self, total: u32) {
        self.container_height = Some(total);
    }

    fn mark_steady(&mut self) {
        self.steady = true;
    }

    fn scroll_offset(&self) -> u32 {
        self.animator.current()
    }

    fn scroll_to(&mut self, offset: u32) {
        let max_scroll = self.max_scroll();
        debug!(offset, max_scroll, "smooth scroll requested");
        self.animator.scroll_to(offset, max_scroll, Instant::now());
    }

    fn add_stylesheet(&mut self, href: &str) -> pagescroll_core::Result<()> {
        let content = fs::read_to_string(href)
            .map_err(|err| Error::Stylesheet(format!("{href}: {err}")))?;
        let overlay: StyleOverlay = serde_json::from_str(&content)
            .map_err(|err| Error::Stylesheet(format!("{href}: {err}")))?;
        self.overlay.merge(overlay);
        self.palette = Palette::resolve(&self.overlay);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;
    use std::io::Write;

    fn host() -> TerminalHost {
        let deck = Deck::parse("One\n---\nTwo\n---\nThree\n");
        let config = ScrollConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        TerminalHost::new(deck, config, (80, 24))
    }

    #[test]
    fn test_heights_fill_viewport() {
        let host = host();
        assert_eq!(host.page_count(), 3);
        assert_eq!(host.page_height(0), 24);
        assert_eq!(host.total_height(), 72);
        assert_eq!(host.max_scroll(), 48);
    }

    #[test]
    fn test_reflow_tracks_viewport() {
        let mut host = host();
        host.reflow((80, 30));
        assert_eq!(host.page_height(1), 30);
        assert_eq!(host.max_scroll(), 60);
    }

    #[test]
    fn test_activation_and_tags() {
        let mut host = host();
        host.tag_page(1);
        host.set_activation(1, Activation::Active);
        assert_eq!(host.active_page(), Some(1));
        host.set_activation(1, Activation::Inactive);
        assert_eq!(host.active_page(), None);
    }

    #[test]
    fn test_container_height_overrides_natural_sum() {
        let mut host = host();
        host.set_container_height(100);
        assert_eq!(host.total_height(), 100);
    }

    #[test]
    fn test_instant_scroll_reports_one_event() {
        let mut host = host();
        host.scroll_to(30);
        let now = Instant::now();
        assert_eq!(host.poll_scroll(now), Some(30));
        assert_eq!(host.poll_scroll(now), None);
        assert_eq!(host.scroll_offset(), 30);
    }

    #[test]
    fn test_stylesheet_overrides_palette() {
        let mut host = host();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r##"{{"accent": "#ff0000"}}"##).unwrap();
        host.add_stylesheet(file.path().to_str().unwrap()).unwrap();
        assert_eq!(host.palette().accent, Color::Rgb(255, 0, 0));
        // Untouched entries keep their defaults.
        assert_eq!(host.palette().body, Palette::default().body);
    }

    #[test]
    fn test_missing_stylesheet_is_an_error() {
        let mut host = host();
        assert!(host.add_stylesheet("/nonexistent/style.json").is_err());
    }
}
