//! Generic element adapter for backing-view-driven content.
//!
//! [`BackedElement`] holds an immutable properties snapshot, a [`Sizing`]
//! policy fixed at construction, and a shared [`ContentMeasurer`]. It
//! implements [`Element`] by:
//!
//! - measuring with either the parent's maximum size or the measurer,
//! - describing a backing view that is built from the snapshot's appearance
//!   and configured through [`BackingView::configure`] for both creation and
//!   updates.

use std::fmt;
use std::sync::Arc;

use horizon_listable_core::logging::{span_names, targets};
use horizon_listable_core::{
    BackingView, PerfSpan, Rect, Size, SizeConstraint, ViewProperties,
};

use crate::description::ViewDescription;
use crate::element::{Element, ElementContent};
use crate::measurement::ContentMeasurer;
use crate::sizing::Sizing;

/// A layout element displaying a properties snapshot in a backing view `V`.
pub struct BackedElement<V: BackingView> {
    properties: Arc<V::Properties>,
    sizing: Sizing,
    measurer: Arc<ContentMeasurer<V>>,
}

impl<V: BackingView> BackedElement<V> {
    /// Create an element for `properties` with the given sizing.
    ///
    /// Measurement uses a fresh off-screen view per call; see
    /// [`with_measurer`](Self::with_measurer) to share one.
    pub fn new(properties: V::Properties, sizing: Sizing) -> Self {
        Self::from_shared(Arc::new(properties), sizing)
    }

    /// Create an element for an already shared snapshot.
    pub fn from_shared(properties: Arc<V::Properties>, sizing: Sizing) -> Self {
        Self {
            properties,
            sizing,
            measurer: Arc::new(ContentMeasurer::fresh()),
        }
    }

    /// Use `measurer` for [`Sizing::MeasureContent`] measurements.
    pub fn with_measurer(mut self, measurer: Arc<ContentMeasurer<V>>) -> Self {
        self.measurer = measurer;
        self
    }

    /// The properties snapshot displayed by this element.
    pub fn properties(&self) -> &V::Properties {
        &self.properties
    }

    /// The shared handle to the properties snapshot.
    pub fn shared_properties(&self) -> &Arc<V::Properties> {
        &self.properties
    }

    /// The sizing policy chosen at construction.
    pub fn sizing(&self) -> Sizing {
        self.sizing
    }

    /// The measurer used under [`Sizing::MeasureContent`].
    pub fn measurer(&self) -> &Arc<ContentMeasurer<V>> {
        &self.measurer
    }

    /// Measure this element within `constraint`.
    pub fn measure(&self, constraint: &SizeConstraint) -> Size {
        measure_with::<V>(self.sizing, &self.properties, &self.measurer, constraint)
    }
}

fn measure_with<V: BackingView>(
    sizing: Sizing,
    properties: &V::Properties,
    measurer: &ContentMeasurer<V>,
    constraint: &SizeConstraint,
) -> Size {
    match sizing {
        Sizing::FillAvailableSpace => constraint.maximum(),
        Sizing::MeasureContent => measurer.measure(properties, constraint),
    }
}

impl<V: BackingView> Element for BackedElement<V> {
    fn content(&self) -> ElementContent {
        let sizing = self.sizing;
        let properties = Arc::clone(&self.properties);
        let measurer = Arc::clone(&self.measurer);
        ElementContent::new(move |constraint| {
            measure_with::<V>(sizing, &properties, &measurer, constraint)
        })
    }

    fn backing_view_description(
        &self,
        bounds: Rect,
        _subtree_extent: Option<Rect>,
    ) -> Option<ViewDescription> {
        tracing::trace!(
            target: targets::DESCRIPTION,
            width = bounds.width(),
            height = bounds.height(),
            "describing backing view"
        );

        let build_properties = Arc::clone(&self.properties);
        let apply_properties = Arc::clone(&self.properties);
        Some(ViewDescription::new(
            move || V::new(bounds, build_properties.appearance()),
            move |view: &mut V| {
                let _span = PerfSpan::new(span_names::CONFIGURE);
                view.configure(&apply_properties);
            },
        ))
    }
}

impl<V: BackingView> Clone for BackedElement<V> {
    fn clone(&self) -> Self {
        Self {
            properties: Arc::clone(&self.properties),
            sizing: self.sizing,
            measurer: Arc::clone(&self.measurer),
        }
    }
}

impl<V> fmt::Debug for BackedElement<V>
where
    V: BackingView,
    V::Properties: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackedElement")
            .field("properties", &self.properties)
            .field("sizing", &self.sizing)
            .field("measurer", &self.measurer)
            .finish()
    }
}
