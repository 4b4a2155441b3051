//! a11ybar core
//!
//! Platform-agnostic logic for the accessibility toolbar: feature flags and
//! their exclusion groups, the toggle controller, persistence and page-style
//! seams, the page-structure extractor and reading-mask geometry.
//! This crate has no browser dependencies.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod feature;
pub mod flags;
pub mod mask;
pub mod store;
pub mod structure;
pub mod style;

// Re-export commonly used types
pub use catalog::{CatalogEntry, catalog, offered};
pub use config::{ConfigError, DEFAULT_MAX_FONT_SIZE, Theme, WidgetConfig};
pub use controller::Controller;
pub use feature::{ExclusionGroup, Feature};
pub use flags::{FlagSet, derive_class_list};
pub use mask::{MASK_MARGIN, MaskBands, track_pointer};
pub use store::{FlagStore, MemoryStore, MemoryStoreError, PRESENCE_MARKER};
pub use structure::{HeadingNode, LinkEntry, PageDocument, PageNode, PageStructure, extract};
pub use style::{FONT_SIZE_PROPERTY, PageStyle, RecordedStyle};
