//! Programmatic page activation: keyboard navigation and smooth jumps.

use tracing::debug;

use crate::error::{Error, Result};
use crate::host::DocumentHost;

/// The four navigation keys the pager claims. Anything else stays with the
/// host's own key handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Left,
    Right,
}

/// Resolve a navigation key against the current position.
///
/// Up/Left step back, Down/Right step forward. There is no wraparound: at
/// either end the request resolves to `None` and is silently dropped.
pub fn resolve_nav(key: NavKey, current_page: usize, page_count: usize) -> Option<usize> {
    match key {
        NavKey::Up | NavKey::Left => current_page.checked_sub(1),
        NavKey::Down | NavKey::Right => {
            let next = current_page + 1;
            (next < page_count).then_some(next)
        }
    }
}

/// Smooth-scroll the viewport to the given page.
///
/// The target offset is `section_heights[page] - section_heights[0]`: offsets
/// are normalized so page 0's top is the origin even when the first boundary
/// carries a nonzero base. Current-page state is not updated here — it follows
/// asynchronously from the scroll events the host emits as the animation runs.
pub fn jump_to_page(
    host: &mut dyn DocumentHost,
    section_heights: &[u32],
    page: usize,
) -> Result<()> {
    let Some(&boundary) = section_heights.get(page) else {
        return Err(Error::PageOutOfRange {
            index: page,
            count: section_heights.len(),
        });
    };
    let origin = section_heights.first().copied().unwrap_or(0);
    debug!(page, "jumping to page");
    host.scroll_to(boundary.saturating_sub(origin));
    Ok(())
}
