//! Test utilities for the sortable engine.
//!
//! The main component is `MockHost` (requires the `mock` feature): an
//! in-memory element tree implementing [`Host`](sortable_core::host::Host)
//! that records every call for later assertions.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use sortable_core::geometry::Size;
//! use sortable_core::host::Host;
//! use sortable_core::math::Vec2;
//! use sortable_test_utils::MockHost;
//!
//! let mut host = MockHost::new();
//! let list = host.add_root(Size::new(200.0, 250.0));
//! let items = host.stacked_list(list, Vec2::ZERO, Size::new(200.0, 50.0), 5);
//!
//! assert_eq!(host.bounding_rect(items[2]).y, 100.0);
//! assert_eq!(host.parent(items[2]), Some(list));
//! # }
//! ```

#[cfg(feature = "mock")]
pub mod mock_host;

#[cfg(feature = "mock")]
pub use mock_host::*;
