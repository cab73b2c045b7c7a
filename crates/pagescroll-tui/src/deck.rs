//! Deck parsing and slide geometry.
//!
//! A deck is a plain text file split into full-screen slides by `---` lines.
//! The first non-empty line of each slide is its title; the rest is body text,
//! word-wrapped at render time. Slide heights depend on the terminal width and
//! are recomputed on every resize.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use unicode_width::UnicodeWidthStr;

const SLIDE_SEPARATOR: &str = "---";

/// A single full-screen section of the deck.
#[derive(Debug, Clone)]
pub struct Slide {
    pub title: String,
    pub body: Vec<String>,
}

/// An ordered deck of slides.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    pub slides: Vec<Slide>,
}

impl Deck {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read deck file {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    pub fn parse(content: &str) -> Self {
        let mut slides = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for line in content.lines() {
            if line.trim() == SLIDE_SEPARATOR {
                push_slide(&mut slides, &current);
                current.clear();
            } else {
                current.push(line);
            }
        }
        push_slide(&mut slides, &current);
        Self { slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

fn push_slide(slides: &mut Vec<Slide>, lines: &[&str]) {
    // Leading blank lines separate the title from nothing; skip them.
    let mut iter = lines.iter().skip_while(|l| l.trim().is_empty());
    let Some(title) = iter.next() else {
        return;
    };
    let body: Vec<String> = iter.map(|l| l.to_string()).collect();
    slides.push(Slide {
        title: title.trim().to_string(),
        body,
    });
}

/// Greedy word wrap of one logical line into rows of at most `width` cells.
/// An empty line still occupies one row. A single word wider than `width`
/// keeps its own row rather than being split.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    if line.trim().is_empty() {
        return vec![String::new()];
    }
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;
    for word in line.split_whitespace() {
        let word_width = UnicodeWidthStr::width(word);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            rows.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }
    rows.push(current);
    rows
}

/// Rendered height of a slide in rows at the given text width: title row,
/// spacer, wrapped body. Never less than the viewport height, so every slide
/// fills at least one full screen.
pub fn slide_height(slide: &Slide, text_width: u16, viewport_rows: u16) -> u32 {
    let width = text_width.max(1) as usize;
    let mut rows: u32 = 2;
    for line in &slide.body {
        rows += wrap_line(line, width).len() as u32;
    }
    rows.max(viewport_rows as u32)
}
