//! Page registry: discovers page geometry and produces the cumulative
//! section-height sequence the rest of the engine works from.

use crate::config::PagerConfig;
use crate::error::{Error, Result};
use crate::host::{Activation, DocumentHost};

/// Index every page, reset activation, and accumulate section boundaries.
///
/// Entry `i` of the returned sequence is the sum of the heights of pages
/// `0..=i`, i.e. the bottom boundary of page `i` in document coordinates. The
/// sequence is non-decreasing and has one entry per page.
///
/// Every page is forced inactive before exactly `current_page` (clamped to the
/// final index) is activated, so re-running after a resize converges to the
/// same state regardless of what was active before. With `steady_pages` set,
/// the container height is pinned to the total sum because overlaid pages
/// contribute no natural document height.
pub fn init_pages(
    host: &mut dyn DocumentHost,
    current_page: usize,
    config: &PagerConfig,
) -> Result<Vec<u32>> {
    let count = host.page_count();
    if count == 0 {
        return Err(Error::NoPages);
    }

    let mut sum: u32 = 0;
    let mut section_heights = Vec::with_capacity(count);
    for index in 0..count {
        host.tag_page(index);
        host.set_activation(index, Activation::Inactive);
        sum = sum.saturating_add(host.page_height(index));
        section_heights.push(sum);
    }

    host.set_activation(current_page.min(count - 1), Activation::Active);

    if config.steady_pages {
        host.set_container_height(sum);
    }

    Ok(section_heights)
}
