//! Core types for Horizon Listable.
//!
//! This crate provides the foundation shared by the list builders and the
//! layout adapter:
//!
//! - **Geometry**: points, sizes, rectangles, insets, colors, and the
//!   [`SizeConstraint`] offered during measurement
//! - **Identity**: [`Key`], the stable identifier for sections and rows
//! - **Errors**: [`ListableError`] for validation and view-type mismatches
//! - **Logging**: `tracing` targets and span helpers
//! - **Backing views**: the [`BackingView`] contract implemented by the
//!   platform's scrollable list engine
//!
//! # Example
//!
//! ```
//! use horizon_listable_core::{Key, Size, SizeConstraint};
//!
//! let constraint = SizeConstraint::new(320.0, f32::INFINITY);
//! assert_eq!(constraint.maximum().width, 320.0);
//! assert!(!constraint.height.is_bounded());
//!
//! let section = Key::from("podcasts");
//! assert_eq!(section.to_string(), "podcasts");
//! # let _ = Size::ZERO;
//! ```

pub mod error;
pub mod geometry;
pub mod key;
pub mod logging;
pub mod view;

pub use error::{ListableError, ListableResult};
pub use geometry::{Axis, Color, EdgeInsets, Point, Rect, Size, SizeConstraint};
pub use key::Key;
pub use logging::PerfSpan;
pub use view::{BackingView, ViewProperties};

static_assertions::assert_impl_all!(Key: Send, Sync);
static_assertions::assert_impl_all!(ListableError: Send, Sync);
