use std::cell::RefCell;
use std::rc::Rc;

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use pagescroll_core::{Plugin, PluginInit, Result};

use crate::host::Palette;

#[derive(Debug, Default)]
struct RailState {
    page: usize,
    progress: f64,
    section_heights: Vec<u32>,
}

/// Right-edge document progress indicator, fed entirely by the plugin bus.
///
/// Clones share state, so the app keeps one handle for rendering while the
/// bus owns and drives another.
#[derive(Clone, Default)]
pub struct ProgressRail {
    state: Rc<RefCell<RailState>>,
}

impl ProgressRail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overall document progress in [0, 1]: boundaries of completed pages
    /// plus the reported fraction of the current one.
    fn fraction(&self) -> f64 {
        let state = self.state.borrow();
        let Some(&total) = state.section_heights.last() else {
            return 0.0;
        };
        if total == 0 {
            return 0.0;
        }
        let top = if state.page == 0 {
            0
        } else {
            state.section_heights[state.page - 1]
        };
        let bottom = state
            .section_heights
            .get(state.page)
            .copied()
            .unwrap_or(total);
        let position = top as f64 + bottom.saturating_sub(top) as f64 * (state.progress / 100.0);
        (position / total as f64).clamp(0.0, 1.0)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let filled = (area.height as f64 * self.fraction()).round() as u16;
        let mut lines = Vec::with_capacity(area.height as usize);
        for row in 0..area.height {
            let (symbol, style) = if row < filled {
                ("┃", Style::default().fg(palette.rail))
            } else {
                ("│", Style::default().fg(palette.dim))
            };
            lines.push(Line::from(Span::styled(symbol, style)));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }
}

impl Plugin for ProgressRail {
    fn init(&mut self, ctx: &mut PluginInit<'_>) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.section_heights = ctx.section_heights().to_vec();
        state.page = ctx.current_page();
        Ok(())
    }

    fn handle_scroll(&mut self, page: usize, progress: f64) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.page = page;
        state.progress = progress;
        Ok(())
    }

    fn update_section_heights(&mut self, section_heights: &[u32]) {
        self.state.borrow_mut().section_heights = section_heights.to_vec();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rail_with(heights: Vec<u32>, page: usize, progress: f64) -> ProgressRail {
        let rail = ProgressRail::new();
        {
            let mut state = rail.state.borrow_mut();
            state.section_heights = heights;
            state.page = page;
            state.progress = progress;
        }
        rail
    }

    #[test]
    fn test_fraction_at_document_start() {
        let rail = rail_with(vec![100, 300, 450], 0, 0.0);
        assert_eq!(rail.fraction(), 0.0);
    }

    #[test]
    fn test_fraction_mid_document() {
        // Page 1 spans 100..300; 75% through it puts the viewport at 250.
        let rail = rail_with(vec![100, 300, 450], 1, 75.0);
        assert!((rail.fraction() - 250.0 / 450.0).abs() < 1e-9);
    }

    #[test]
    fn test_fraction_at_document_end() {
        let rail = rail_with(vec![100, 300, 450], 2, 100.0);
        assert_eq!(rail.fraction(), 1.0);
    }

    #[test]
    fn test_fraction_without_heights() {
        let rail = rail_with(Vec::new(), 0, 50.0);
        assert_eq!(rail.fraction(), 0.0);
    }

    #[test]
    fn test_shared_state_between_clones() {
        let rail = ProgressRail::new();
        let mut bus_side = rail.clone();
        bus_side.handle_scroll(2, 100.0).unwrap();
        bus_side.update_section_heights(&[100, 300, 450]);
        assert_eq!(rail.fraction(), 1.0);
    }
}
