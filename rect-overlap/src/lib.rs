//! Exact overlap test for rotated rectangles, based on the Separating Axis Theorem (SAT).
//!
//! ```
//! use rect_overlap::geometry::primitives::Rectangle;
//!
//! let a = Rectangle::new(0.0, 0.0, 2.0, 2.0, 0.0);
//! let b = Rectangle::new(10.0, 0.0, 2.0, 2.0, 0.0);
//!
//! let (overlapped, axis) = a.overlapped_with_axis(&b);
//! assert!(!overlapped);
//! assert!(axis.is_some());
//! ```

/// Geometric primitives and the separating axis test
pub mod geometry;

/// Importing scenes into and exporting results out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
