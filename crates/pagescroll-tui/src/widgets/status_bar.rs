use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Snapshot of engine state shown in the status bar.
pub struct Status<'a> {
    pub deck_name: &'a str,
    pub page: usize,
    pub page_count: usize,
    pub progress: f64,
    pub arrow_nav: bool,
    pub steady: bool,
}

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, status: &Status) {
        let mut left = format!(
            " {} | Page {}/{} | {:>3.0}%",
            status.deck_name,
            status.page + 1,
            status.page_count.max(1),
            status.progress,
        );
        if status.arrow_nav {
            left.push_str(" | nav");
        }
        if status.steady {
            left.push_str(" | steady");
        }

        let hint = " arrows:pages q:quit ";
        let padding = area
            .width
            .saturating_sub(left.len() as u16 + hint.len() as u16) as usize;

        let bar = Style::default().bg(Color::DarkGray);
        let line = Line::from(vec![
            Span::styled(left, bar.fg(Color::White)),
            Span::styled(" ".repeat(padding), bar),
            Span::styled(hint, bar.fg(Color::Gray)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
