use crate::error::Result;

/// Visual activation state of a page. Exactly one page is `Active` at steady
/// state; the engine flips states as the viewport crosses page boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Active,
    Inactive,
}

/// The document environment the engine drives.
///
/// The engine never touches a rendering surface directly. Everything it needs
/// from the outside world — page geometry, activation markers, smooth
/// scrolling, container sizing, stylesheet loading — goes through this trait,
/// so the same engine runs against a terminal, a test double, or any other
/// scrollable surface.
pub trait DocumentHost {
    /// Number of page sections currently in the document.
    fn page_count(&self) -> usize;

    /// Rendered height of one page, in document units (rows, pixels).
    /// May change between calls when the surface is resized.
    fn page_height(&self, index: usize) -> u32;

    /// Record the assigned index on the page itself.
    fn tag_page(&mut self, index: usize);

    /// Apply an activation state to a page.
    fn set_activation(&mut self, index: usize, state: Activation);

    /// Fix the scroll container to an explicit total height. Used when pages
    /// are overlaid rather than stacked, so natural document height must be
    /// synthesized.
    fn set_container_height(&mut self, total: u32);

    /// Mark the document roots as using the steady (overlaid) layout.
    fn mark_steady(&mut self);

    /// Current vertical scroll offset of the viewport.
    fn scroll_offset(&self) -> u32;

    /// Smooth-scroll the viewport to an absolute offset. Fire-and-forget: the
    /// engine learns about the resulting movement through later scroll events,
    /// and a newer request simply supersedes an in-flight one.
    fn scroll_to(&mut self, offset: u32);

    /// Attach a stylesheet to the document. Exposed to plugins so auxiliary
    /// widgets can carry their own styling.
    fn add_stylesheet(&mut self, href: &str) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod mock {
    use super::{Activation, DocumentHost};
    use crate::error::Result;

    /// Recording host used across the crate's tests. Scrolling is instant.
    pub struct MockHost {
        pub heights: Vec<u32>,
        pub tags: Vec<Option<usize>>,
        pub states: Vec<Option<Activation>>,
        pub container_height: Option<u32>,
        pub steady: bool,
        pub offset: u32,
        pub scroll_targets: Vec<u32>,
        pub stylesheets: Vec<String>,
    }

    impl MockHost {
        pub fn new(heights: Vec<u32>) -> Self {
            let count = heights.len();
            Self {
                heights,
                tags: vec![None; count],
                states: vec![None; count],
                container_height: None,
                steady: false,
                offset: 0,
                scroll_targets: Vec::new(),
                stylesheets: Vec::new(),
            }
        }

        pub fn active_pages(&self) -> Vec<usize> {
            self.states
                .iter()
                .enumerate()
                .filter(|(_, s)| **s == Some(Activation::Active))
                .map(|(i, _)| i)
                .collect()
        }
    }

    impl DocumentHost for MockHost {
        fn page_count(&self) -> usize {
            self.heights.len()
        }

        fn page_height(&self, index: usize) -> u32 {
            self.heights.get(index).copied().unwrap_or(0)
        }

        fn tag_page(&mut self, index: usize) {
            if let Some(tag) = self.tags.get_mut(index) {
                *tag = Some(index);
            }
        }

        fn set_activation(&mut self, index: usize, state: Activation) {
            if let Some(slot) = self.states.get_mut(index) {
                *slot = Some(state);
            }
        }

        fn set_container_height(&mut self, total: u32) {
            self.container_height = Some(total);
        }

        fn mark_steady(&mut self) {
            self.steady = true;
        }

        fn scroll_offset(&self) -> u32 {
            self.offset
        }

        fn scroll_to(&mut self, offset: u32) {
            self.scroll_targets.push(offset);
            self.offset = offset;
        }

        fn add_stylesheet(&mut self, href: &str) -> Result<()> {
            self.stylesheets.push(href.to_string());
            Ok(())
        }
    }
}
