use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use pagescroll_core::{Activation, DocumentHost};

use crate::deck::{wrap_line, Slide};
use crate::host::{text_width, Palette, TerminalHost, TEXT_MARGIN};

/// Renders the slice of the document visible at the current scroll offset.
pub struct SlidesWidget;

impl SlidesWidget {
    pub fn render(frame: &mut Frame, area: Rect, host: &TerminalHost, offset: u32) {
        if host.is_steady() {
            Self::render_steady(frame, area, host);
        } else {
            Self::render_flow(frame, area, host, offset);
        }
    }

    /// Normal flow: slides stack vertically and the viewport is a window over
    /// the stacked document.
    fn render_flow(frame: &mut Frame, area: Rect, host: &TerminalHost, offset: u32) {
        let palette = host.palette();
        let width = text_width(area.width) as usize;
        let end = offset + area.height as u32;
        let mut lines: Vec<Line> = Vec::with_capacity(area.height as usize);
        let mut top = 0u32;

        for (index, slide) in host.deck().slides.iter().enumerate() {
            let height = host.page_height(index);
            let bottom = top + height;
            if bottom <= offset {
                top = bottom;
                continue;
            }
            if top >= end {
                break;
            }
            let activation = host.states()[index].activation;
            let rendered = slide_lines(slide, activation, height, width, &palette);
            let skip = offset.saturating_sub(top) as usize;
            let take = (end.min(bottom) - top.max(offset)) as usize;
            lines.extend(rendered.into_iter().skip(skip).take(take));
            top = bottom;
        }

        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Steady layout: pages are overlaid, so only the active one is drawn,
    /// pinned to the top of the viewport. Scrolling stays virtual.
    fn render_steady(frame: &mut Frame, area: Rect, host: &TerminalHost) {
        let palette = host.palette();
        let width = text_width(area.width) as usize;
        let page = host.active_page().unwrap_or(0);
        let Some(slide) = host.deck().slides.get(page) else {
            return;
        };
        let rendered = slide_lines(slide, Activation::Active, area.height as u32, width, &palette);
        frame.render_widget(Paragraph::new(rendered), area);
    }
}

/// Lay out one slide as exactly `height` rows: title, spacer, wrapped body,
/// blank padding.
fn slide_lines(
    slide: &Slide,
    activation: Activation,
    height: u32,
    width: usize,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let active = activation == Activation::Active;
    let indent = " ".repeat(TEXT_MARGIN as usize);
    let title_style = if active {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.dim)
    };
    let body_style = if active {
        Style::default().fg(palette.body)
    } else {
        Style::default().fg(palette.dim)
    };

    let height = height as usize;
    let mut lines = Vec::with_capacity(height);
    lines.push(Line::from(Span::styled(
        format!("{indent}{}", slide.title),
        title_style,
    )));
    lines.push(Line::default());
    for raw in &slide.body {
        for row in wrap_line(raw, width) {
            lines.push(Line::from(Span::styled(format!("{indent}{row}"), body_style)));
        }
    }
    lines.truncate(height);
    while lines.len() < height {
        lines.push(Line::default());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_lines_are_exactly_height() {
        let slide = Slide {
            title: "Title".to_string(),
            body: vec!["some body text".to_string()],
        };
        let palette = Palette::default();
        let lines = slide_lines(&slide, Activation::Active, 10, 40, &palette);
        assert_eq!(lines.len(), 10);
        let lines = slide_lines(&slide, Activation::Inactive, 2, 40, &palette);
        assert_eq!(lines.len(), 2);
    }
}
