//! Contract for the scrollable view engine that displays built content.
//!
//! Horizon Listable does not implement cell recycling, diffing, or scrolling.
//! Those live in a backing view supplied by the platform layer. This module
//! describes the three capabilities the builders and layout adapter rely on:
//!
//! 1. constructing a view from a frame and an appearance,
//! 2. applying a full properties snapshot through one `configure` entry point,
//!    callable any number of times,
//! 3. reporting the natural size of the configured content for a constraint.
//!
//! # Example
//!
//! ```ignore
//! struct PlatformListView { /* native handle */ }
//!
//! impl BackingView for PlatformListView {
//!     type Properties = ListProperties;
//!
//!     fn new(frame: Rect, appearance: &Appearance) -> Self { /* ... */ }
//!     fn configure(&mut self, properties: &ListProperties) { /* ... */ }
//!     fn content_size(&mut self, constraint: &SizeConstraint) -> Size { /* ... */ }
//! }
//! ```

use crate::geometry::{Rect, Size, SizeConstraint};

/// A properties snapshot that a backing view can be configured with.
pub trait ViewProperties: Send + Sync + 'static {
    /// Visual settings needed at construction time.
    type Appearance;

    /// Returns the appearance used when creating a fresh view.
    fn appearance(&self) -> &Self::Appearance;
}

/// The native view that renders a properties snapshot.
///
/// Implementations must treat [`configure`](Self::configure) as idempotent:
/// applying the same snapshot twice leaves the view in the same observable
/// state as applying it once.
pub trait BackingView: Send + 'static {
    /// The snapshot type this view displays.
    type Properties: ViewProperties;

    /// Create a view occupying `frame` with the given appearance.
    fn new(frame: Rect, appearance: &<Self::Properties as ViewProperties>::Appearance) -> Self
    where
        Self: Sized;

    /// Apply a full properties snapshot to the view.
    ///
    /// Used both right after construction and for every later update.
    fn configure(&mut self, properties: &Self::Properties);

    /// Report the natural size of the configured content within `constraint`.
    ///
    /// The result may be zero for empty content, or far larger than the
    /// constraint's bounded axis for long lists.
    fn content_size(&mut self, constraint: &SizeConstraint) -> Size;
}
