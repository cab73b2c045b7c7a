//! Plugin bus: named extensions that follow scroll state.

use tracing::warn;

use crate::error::Result;
use crate::host::{Activation, DocumentHost};
use crate::navigator;

/// Extension point for auxiliary widgets (progress indicators, page markers)
/// that react to scroll state.
///
/// `handle_scroll` runs synchronously on every scroll tick, in registration
/// order, whether or not the active page changed — continuous progress updates
/// within a single page are part of the contract. `update_section_heights`
/// replaces the boundary sequence wholesale after a resize recomputation;
/// treat it as hot-swappable state, not a one-time snapshot.
pub trait Plugin {
    /// Called exactly once, at registration time.
    fn init(&mut self, ctx: &mut PluginInit<'_>) -> Result<()>;

    /// Called on every scroll tick with the page the offset resolved to and
    /// the progress through the page that was current when the tick began.
    fn handle_scroll(&mut self, page: usize, progress: f64) -> Result<()>;

    /// Called with the freshly recomputed boundary sequence after a resize.
    fn update_section_heights(&mut self, section_heights: &[u32]);
}

/// Registration-time snapshot and capability set handed to [`Plugin::init`].
///
/// Activation is unbound — the plugin names the page it wants to flip — while
/// `jump_to_page` comes pre-bound to the boundary sequence current at
/// registration time.
pub struct PluginInit<'a> {
    section_heights: &'a [u32],
    current_page: usize,
    host: &'a mut dyn DocumentHost,
}

impl<'a> PluginInit<'a> {
    pub(crate) fn new(
        section_heights: &'a [u32],
        current_page: usize,
        host: &'a mut dyn DocumentHost,
    ) -> Self {
        Self {
            section_heights,
            current_page,
            host,
        }
    }

    pub fn section_heights(&self) -> &[u32] {
        self.section_heights
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn activate(&mut self, page: usize) {
        self.host.set_activation(page, Activation::Active);
    }

    pub fn deactivate(&mut self, page: usize) {
        self.host.set_activation(page, Activation::Inactive);
    }

    pub fn add_stylesheet(&mut self, href: &str) -> Result<()> {
        self.host.add_stylesheet(href)
    }

    pub fn jump_to_page(&mut self, page: usize) -> Result<()> {
        navigator::jump_to_page(self.host, self.section_heights, page)
    }
}

/// Insertion-ordered plugin registry.
///
/// Re-registering a name replaces the stored plugin in place, keeping its
/// original position — last write wins, notification order stays stable.
#[derive(Default)]
pub struct PluginBus {
    entries: Vec<(String, Box<dyn Plugin>)>,
}

impl PluginBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Store `plugin` under `name`, returning its slot for a follow-up `init`.
    pub(crate) fn insert(&mut self, name: &str, plugin: Box<dyn Plugin>) -> usize {
        if let Some(position) = self.entries.iter().position(|(n, _)| n == name) {
            self.entries[position].1 = plugin;
            position
        } else {
            self.entries.push((name.to_string(), plugin));
            self.entries.len() - 1
        }
    }

    pub(crate) fn get_mut(&mut self, slot: usize) -> (&str, &mut dyn Plugin) {
        let (name, plugin) = &mut self.entries[slot];
        (name.as_str(), plugin.as_mut())
    }

    /// Notify every plugin, in registration order. A failing plugin is logged
    /// and skipped so it cannot block the rest of the bus.
    pub(crate) fn notify_scroll(&mut self, page: usize, progress: f64) {
        for (name, plugin) in &mut self.entries {
            if let Err(err) = plugin.handle_scroll(page, progress) {
                warn!(plugin = %name, error = %err, "plugin scroll handler failed");
            }
        }
    }

    pub(crate) fn update_section_heights(&mut self, section_heights: &[u32]) {
        for (_, plugin) in &mut self.entries {
            plugin.update_section_heights(section_heights);
        }
    }
}
