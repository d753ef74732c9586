//! Vector math re-exported from [`glam`].
//!
//! Pointer positions, translate deltas and box origins are all [`Vec2`]
//! values in client (viewport) pixels.
//!
//! ```
//! use sortable_core::math::Vec2;
//!
//! let pressed_at = Vec2::new(10.0, 20.0);
//! let now = Vec2::new(15.0, 80.0);
//! assert_eq!(now - pressed_at, Vec2::new(5.0, 60.0));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::Vec2;
