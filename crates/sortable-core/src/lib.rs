//! Sortable Core
//!
//! Shared building blocks for the sortable drag-reorder engine: the host
//! contract through which the engine reads element boxes and sends style
//! commands, pointer events, geometry primitives and the ambient utilities
//! (collections, logging, profiling).

pub mod alloc;
pub mod event;
pub mod geometry;
pub mod host;
pub mod logging;
pub mod math;
pub mod profiling;
pub mod style;
