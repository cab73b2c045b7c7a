mod page_dots;
mod progress_rail;
mod slides;
mod status_bar;

pub use page_dots::PageDots;
pub use progress_rail::ProgressRail;
pub use slides::SlidesWidget;
pub use status_bar::{Status, StatusBarWidget};
