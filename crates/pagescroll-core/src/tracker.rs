//! Scroll tracking: pure mappings from a raw scroll offset to the active page
//! and the progress through it.

/// Map a scroll offset to the page containing it.
///
/// Returns the smallest index `i` with `offset < section_heights[i]` — each
/// boundary is an exclusive upper bound, so an offset sitting exactly on a
/// boundary already belongs to the following page. Offsets past the last
/// boundary resolve to the last page.
pub fn page_at_offset(section_heights: &[u32], offset: u32) -> usize {
    let mut page = 0;
    for (index, boundary) in section_heights.iter().enumerate() {
        page = index;
        if offset < *boundary {
            break;
        }
    }
    page
}

/// Progress through `page` at `offset`, as a percentage clamped to [0, 100].
///
/// The lower clamp is deliberate: a raw ratio can dip below zero transiently
/// during fast backward scrolling or a resize race, and callers only ever want
/// the saturated value. A degenerate zero-height page reports 0.
pub fn page_progress(section_heights: &[u32], page: usize, offset: u32) -> f64 {
    let Some(&bottom) = section_heights.get(page) else {
        return 0.0;
    };
    let top = if page == 0 { 0 } else { section_heights[page - 1] };
    let height = bottom.saturating_sub(top);
    if height == 0 {
        return 0.0;
    }
    let scrolled = (offset as f64 - top as f64) / height as f64 * 100.0;
    scrolled.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEIGHTS: [u32; 3] = [100, 300, 450];

    #[test]
    fn test_offset_zero_is_page_zero() {
        assert_eq!(page_at_offset(&HEIGHTS, 0), 0);
    }

    #[test]
    fn test_offset_within_page() {
        assert_eq!(page_at_offset(&HEIGHTS, 50), 0);
        assert_eq!(page_at_offset(&HEIGHTS, 250), 1);
        assert_eq!(page_at_offset(&HEIGHTS, 350), 2);
    }

    #[test]
    fn test_boundary_belongs_to_next_page() {
        assert_eq!(page_at_offset(&HEIGHTS, 99), 0);
        assert_eq!(page_at_offset(&HEIGHTS, 100), 1);
        assert_eq!(page_at_offset(&HEIGHTS, 299), 1);
        assert_eq!(page_at_offset(&HEIGHTS, 300), 2);
    }

    #[test]
    fn test_offset_past_end_is_last_page() {
        assert_eq!(page_at_offset(&HEIGHTS, 450), 2);
        assert_eq!(page_at_offset(&HEIGHTS, 10_000), 2);
    }

    #[test]
    fn test_mapping_matches_boundary_invariant() {
        // For every offset, H[i-1] <= offset < H[i] (H[-1] treated as 0),
        // with the last index absorbing everything past the final boundary.
        for offset in 0..500 {
            let page = page_at_offset(&HEIGHTS, offset);
            let top = if page == 0 { 0 } else { HEIGHTS[page - 1] };
            assert!(offset >= top, "offset {offset} below page {page}");
            if offset < *HEIGHTS.last().unwrap() {
                assert!(offset < HEIGHTS[page], "offset {offset} past page {page}");
            } else {
                assert_eq!(page, HEIGHTS.len() - 1);
            }
        }
    }

    #[test]
    fn test_progress_at_lower_boundary_is_zero() {
        assert_eq!(page_progress(&HEIGHTS, 0, 0), 0.0);
        assert_eq!(page_progress(&HEIGHTS, 1, 100), 0.0);
    }

    #[test]
    fn test_progress_midway() {
        // Page 1 spans 100..300; offset 250 is 75% through it.
        assert_eq!(page_progress(&HEIGHTS, 1, 250), 75.0);
    }

    #[test]
    fn test_progress_at_upper_boundary_is_full() {
        assert_eq!(page_progress(&HEIGHTS, 2, 450), 100.0);
    }

    #[test]
    fn test_progress_clamped_above() {
        assert_eq!(page_progress(&HEIGHTS, 0, 5_000), 100.0);
    }

    #[test]
    fn test_progress_clamped_below() {
        // Offset behind the page's top edge (fast backward scroll) saturates
        // at zero instead of going negative.
        assert_eq!(page_progress(&HEIGHTS, 2, 0), 0.0);
    }

    #[test]
    fn test_zero_height_page_reports_zero() {
        let heights = [100, 100, 300];
        assert_eq!(page_progress(&heights, 1, 100), 0.0);
    }

    #[test]
    fn test_out_of_range_page_reports_zero() {
        assert_eq!(page_progress(&HEIGHTS, 7, 200), 0.0);
    }
}
