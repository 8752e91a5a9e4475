//! Off-screen measurement of backing views.
//!
//! Measuring content means building a backing view off screen, configuring
//! it with the properties snapshot, and asking it for its natural size.
//! [`ContentMeasurer`] owns that procedure and decides whether each call gets
//! a fresh view or reuses one cached view.
//!
//! A measurer is an explicit value injected into elements, never global
//! state, so tests can hand elements a measurer backed by a fake view and
//! separate lists never share a measurement view by accident.

use std::fmt;

use parking_lot::Mutex;

use horizon_listable_core::logging::{span_names, targets};
use horizon_listable_core::{
    BackingView, PerfSpan, Rect, Size, SizeConstraint, ViewProperties,
};

/// Whether a [`ContentMeasurer`] reuses its off-screen view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MeasurementPolicy {
    /// Construct a new view for every measurement.
    #[default]
    FreshPerCall,
    /// Construct one view on first use and reconfigure it for every later
    /// measurement. The view lives as long as the measurer.
    Reuse,
}

/// Measures properties snapshots using off-screen instances of `V`.
///
/// Under [`MeasurementPolicy::Reuse`] the cached view sits behind a mutex,
/// so overlapping measurements from different layout passes run one at a
/// time instead of interleaving configure and size queries.
pub struct ContentMeasurer<V> {
    policy: MeasurementPolicy,
    cached: Mutex<Option<V>>,
}

impl<V: BackingView> ContentMeasurer<V> {
    /// Create a measurer with the given policy.
    pub fn new(policy: MeasurementPolicy) -> Self {
        Self {
            policy,
            cached: Mutex::new(None),
        }
    }

    /// Create a measurer that builds a new view per measurement.
    pub fn fresh() -> Self {
        Self::new(MeasurementPolicy::FreshPerCall)
    }

    /// Create a measurer that lazily builds and then reuses one view.
    pub fn reusing() -> Self {
        Self::new(MeasurementPolicy::Reuse)
    }

    /// The policy this measurer was created with.
    pub fn policy(&self) -> MeasurementPolicy {
        self.policy
    }

    /// Check whether a reusable view has been created yet.
    pub fn has_cached_view(&self) -> bool {
        self.cached.lock().is_some()
    }

    /// Measure the natural size of `properties` within `constraint`.
    pub fn measure(&self, properties: &V::Properties, constraint: &SizeConstraint) -> Size {
        let _span = PerfSpan::new(span_names::MEASURE);
        let frame = measurement_frame(constraint);

        let size = match self.policy {
            MeasurementPolicy::FreshPerCall => {
                let mut view = V::new(frame, properties.appearance());
                view.configure(properties);
                view.content_size(constraint)
            }
            MeasurementPolicy::Reuse => {
                let mut cached = self.cached.lock();
                let view = cached.get_or_insert_with(|| {
                    tracing::debug!(target: targets::MEASURE, "creating reusable measurement view");
                    V::new(frame, properties.appearance())
                });
                view.configure(properties);
                view.content_size(constraint)
            }
        };

        tracing::trace!(
            target: targets::MEASURE,
            policy = ?self.policy,
            width = size.width,
            height = size.height,
            "measured content"
        );
        size
    }
}

impl<V: BackingView> Default for ContentMeasurer<V> {
    fn default() -> Self {
        Self::fresh()
    }
}

impl<V> fmt::Debug for ContentMeasurer<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentMeasurer")
            .field("policy", &self.policy)
            .field("view_type", &std::any::type_name::<V>())
            .finish()
    }
}

/// Frame used for off-screen views: bounded axes keep their bound,
/// unbounded axes start at zero.
fn measurement_frame(constraint: &SizeConstraint) -> Rect {
    Rect::from_size(Size::new(
        constraint.width.bound().unwrap_or(0.0),
        constraint.height.bound().unwrap_or(0.0),
    ))
}
