pub mod config;
pub mod debounce;
pub mod error;
pub mod host;
pub mod navigator;
pub mod pager;
pub mod plugin;
pub mod registry;
pub mod store;
pub mod tracker;

pub use config::{PagerConfig, RawConfig};
pub use debounce::ResizeDebouncer;
pub use error::{Error, Result};
pub use host::{Activation, DocumentHost};
pub use navigator::NavKey;
pub use pager::Pager;
pub use plugin::{Plugin, PluginInit};
pub use store::{FilePositionStore, MemoryPositionStore, PositionStore};
