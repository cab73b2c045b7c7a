use std::time::Instant;

use tracing::{debug, warn};

use crate::config::PagerConfig;
use crate::debounce::ResizeDebouncer;
use crate::error::Result;
use crate::host::{Activation, DocumentHost};
use crate::navigator::{self, NavKey};
use crate::plugin::{Plugin, PluginBus, PluginInit};
use crate::registry;
use crate::store::PositionStore;
use crate::tracker;

/// The paging engine. One instance per document.
///
/// Owns all shared scroll state — section boundaries, the current page, the
/// plugin registry, the resize debouncer, the position store — and operates on
/// whatever [`DocumentHost`] the caller hands in. Everything runs on the
/// caller's thread in response to discrete events; nothing here blocks.
pub struct Pager {
    config: PagerConfig,
    store: Box<dyn PositionStore>,
    section_heights: Vec<u32>,
    current_page: usize,
    scroll_progress: f64,
    plugins: PluginBus,
    resize: ResizeDebouncer,
}

impl Pager {
    pub fn new(config: PagerConfig, store: Box<dyn PositionStore>) -> Self {
        Self {
            config,
            store,
            section_heights: Vec::new(),
            current_page: 0,
            scroll_progress: 0.0,
            plugins: PluginBus::new(),
            resize: ResizeDebouncer::default(),
        }
    }

    /// Build the page registry, apply the steady layout when configured, and
    /// restore the last persisted position by jumping to the page containing
    /// the stored offset.
    pub fn init(&mut self, host: &mut dyn DocumentHost) -> Result<()> {
        if self.config.steady_pages {
            host.mark_steady();
        }
        self.section_heights = registry::init_pages(host, self.current_page, &self.config)?;
        self.current_page = self.current_page.min(self.section_heights.len() - 1);

        match self.store.load() {
            Ok(Some(offset)) => {
                let page = tracker::page_at_offset(&self.section_heights, offset);
                debug!(offset, page, "restoring persisted scroll position");
                navigator::jump_to_page(host, &self.section_heights, page)?;
            }
            Ok(None) => {}
            Err(err) => warn!(error = %err, "failed to read persisted scroll position"),
        }
        Ok(())
    }

    /// Process one scroll event at the given raw offset.
    ///
    /// Progress is measured against the page that was current when the event
    /// began, not the page the offset resolves to. Plugins are notified on
    /// every event; the activation transition happens only when the resolved
    /// page differs from the current one.
    pub fn handle_scroll(&mut self, host: &mut dyn DocumentHost, offset: u32) {
        if self.section_heights.is_empty() {
            return;
        }
        let progress = tracker::page_progress(&self.section_heights, self.current_page, offset);
        let scrolled_page = tracker::page_at_offset(&self.section_heights, offset);
        self.scroll_progress = progress;

        self.plugins.notify_scroll(scrolled_page, progress);

        if scrolled_page != self.current_page {
            host.set_activation(self.current_page, Activation::Inactive);
            host.set_activation(scrolled_page, Activation::Active);
            self.current_page = scrolled_page;
        }
    }

    /// Record a resize. The registry rebuild is deferred until the burst has
    /// settled; see [`Pager::tick`].
    pub fn handle_resize(&mut self, now: Instant) {
        self.resize.schedule(now);
    }

    /// Drive deferred work. Returns `true` when a resize recomputation ran.
    pub fn tick(&mut self, host: &mut dyn DocumentHost, now: Instant) -> Result<bool> {
        if !self.resize.fire(now) {
            return Ok(false);
        }
        self.rebuild(host)?;
        Ok(true)
    }

    /// Recompute the section boundaries wholesale and push the new sequence to
    /// every plugin.
    fn rebuild(&mut self, host: &mut dyn DocumentHost) -> Result<()> {
        self.section_heights = registry::init_pages(host, self.current_page, &self.config)?;
        self.current_page = self.current_page.min(self.section_heights.len() - 1);
        self.plugins.update_section_heights(&self.section_heights);
        Ok(())
    }

    /// Handle a navigation key. Returns `true` when the key produced a jump;
    /// `false` when navigation is disabled or the deck end was already reached.
    pub fn handle_nav_key(&mut self, host: &mut dyn DocumentHost, key: NavKey) -> Result<bool> {
        if !self.config.enable_arrow_key_nav {
            return Ok(false);
        }
        match navigator::resolve_nav(key, self.current_page, self.page_count()) {
            Some(target) => {
                navigator::jump_to_page(host, &self.section_heights, target)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Smooth-scroll to a page. State catches up through later scroll events.
    pub fn jump_to_page(&mut self, host: &mut dyn DocumentHost, page: usize) -> Result<()> {
        navigator::jump_to_page(host, &self.section_heights, page)
    }

    /// Register a named plugin. Re-registering a name replaces the previous
    /// plugin in place; `init` runs exactly once per registration and a
    /// failure there is logged without unseating the registration.
    pub fn register_plugin(
        &mut self,
        host: &mut dyn DocumentHost,
        name: &str,
        plugin: Box<dyn Plugin>,
    ) {
        let slot = self.plugins.insert(name, plugin);
        let mut ctx = PluginInit::new(&self.section_heights, self.current_page, host);
        let (name, plugin) = self.plugins.get_mut(slot);
        if let Err(err) = plugin.init(&mut ctx) {
            warn!(plugin = %name, error = %err, "plugin init failed");
        }
    }

    /// Persist the given scroll offset for the next session. Meant to run once
    /// at shutdown, mirroring a before-unload hook.
    pub fn persist_position(&mut self, offset: u32) {
        if let Err(err) = self.store.save(offset) {
            warn!(error = %err, "failed to persist scroll position");
        }
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Progress through the current page at the last scroll event, in percent.
    pub fn scroll_progress(&self) -> f64 {
        self.scroll_progress
    }

    pub fn section_heights(&self) -> &[u32] {
        &self.section_heights
    }

    pub fn page_count(&self) -> usize {
        self.section_heights.len()
    }

    pub fn plugin_names(&self) -> impl Iterator<Item = &str> {
        self.plugins.names()
    }
}
