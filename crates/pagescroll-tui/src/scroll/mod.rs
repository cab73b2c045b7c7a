//! Smooth scrolling for the terminal host.
//!
//! The engine treats scrolling as fire-and-forget: it requests an absolute
//! target and learns about the resulting movement through later scroll
//! events. This module supplies that collaborator — an animator that
//! interpolates the viewport offset toward the most recent target with a
//! configurable easing curve. A new request simply supersedes an in-flight
//! animation; the last request wins.

pub mod animation;
pub mod easing;
pub mod timing;

pub use animation::{ScrollAnimator, ScrollConfig};
pub use easing::Easing;
