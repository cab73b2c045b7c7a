use std::cell::RefCell;
use std::rc::Rc;

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use pagescroll_core::{Plugin, PluginInit, Result};

use crate::host::Palette;

#[derive(Debug, Default)]
struct DotsState {
    page: usize,
    count: usize,
}

/// One dot per page, the current one highlighted. Registered on the plugin
/// bus; clones share state for rendering.
#[derive(Clone, Default)]
pub struct PageDots {
    state: Rc<RefCell<DotsState>>,
}

impl PageDots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let state = self.state.borrow();
        if state.count == 0 {
            return;
        }
        let mut spans = Vec::with_capacity(state.count * 2);
        for page in 0..state.count {
            let (dot, style) = if page == state.page {
                ("●", Style::default().fg(palette.accent))
            } else {
                ("○", Style::default().fg(palette.dim))
            };
            spans.push(Span::styled(dot, style));
            if page + 1 < state.count {
                spans.push(Span::raw(" "));
            }
        }
        let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
    }
}

impl Plugin for PageDots {
    fn init(&mut self, ctx: &mut PluginInit<'_>) -> Result<()> {
        let mut state = self.state.borrow_mut();
        state.count = ctx.section_heights().len();
        state.page = ctx.current_page();
        Ok(())
    }

    fn handle_scroll(&mut self, page: usize, _progress: f64) -> Result<()> {
        self.state.borrow_mut().page = page;
        Ok(())
    }

    fn update_section_heights(&mut self, section_heights: &[u32]) {
        let mut state = self.state.borrow_mut();
        state.count = section_heights.len();
        state.page = state.page.min(state.count.saturating_sub(1));
    }
}
