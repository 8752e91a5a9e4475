//! The element contract used by the host layout tree.
//!
//! An [`Element`] is a node in a declarative layout tree. The host asks it
//! two things, in two passes:
//!
//! 1. **Measurement**: [`Element::content`] returns an [`ElementContent`]
//!    that maps the parent's [`SizeConstraint`] to the size the element
//!    wants. The host may call it many times per layout pass with different
//!    constraints.
//! 2. **Realization**: once final bounds are known,
//!    [`Element::backing_view_description`] returns a [`ViewDescription`]
//!    the host uses to create or update the native view.

use std::fmt;
use std::sync::Arc;

use horizon_listable_core::{Rect, Size, SizeConstraint};

use crate::description::ViewDescription;

/// Measurement function stored by [`ElementContent`].
pub type MeasureFn = dyn Fn(&SizeConstraint) -> Size + Send + Sync;

/// A node in a declarative layout tree.
pub trait Element: Send + Sync {
    /// Describe how this element is measured.
    fn content(&self) -> ElementContent;

    /// Describe the native view that displays this element within `bounds`.
    ///
    /// `subtree_extent` is the union of the bounds of this element's
    /// descendants, when the host tracks it. Returns `None` for elements
    /// without a backing view.
    fn backing_view_description(
        &self,
        bounds: Rect,
        subtree_extent: Option<Rect>,
    ) -> Option<ViewDescription>;
}

/// How an element answers measurement requests.
///
/// Cloning is cheap; clones share the same measurement function.
#[derive(Clone)]
pub struct ElementContent {
    measure: Arc<MeasureFn>,
}

impl ElementContent {
    /// Create content measured by the given function.
    pub fn new<F>(measure: F) -> Self
    where
        F: Fn(&SizeConstraint) -> Size + Send + Sync + 'static,
    {
        Self {
            measure: Arc::new(measure),
        }
    }

    /// Content that always reports the same size.
    pub fn fixed(size: Size) -> Self {
        Self::new(move |_| size)
    }

    /// Content that takes all the space the parent offers.
    pub fn fill() -> Self {
        Self::new(SizeConstraint::maximum)
    }

    /// Measure the content within `constraint`.
    pub fn measure(&self, constraint: &SizeConstraint) -> Size {
        (self.measure)(constraint)
    }
}

impl fmt::Debug for ElementContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementContent").finish_non_exhaustive()
    }
}
