//! Embedding a table in a declarative layout tree.

use std::fmt;
use std::sync::Arc;

use horizon_listable_core::logging::targets;
use horizon_listable_core::{BackingView, Rect, Size, SizeConstraint};
use horizon_listable_layout::{
    BackedElement, ContentMeasurer, Element, ElementContent, Sizing, ViewDescription,
};

use super::properties::{TableProperties, TablePropertiesBuilder};

/// A layout element displaying a table in a backing view `V`.
///
/// Behaves like [`List`](crate::list::List): it fills the offered space by
/// default and can measure its content instead.
pub struct Table<V: BackingView<Properties = TableProperties>> {
    inner: BackedElement<V>,
}

impl<V: BackingView<Properties = TableProperties>> Table<V> {
    /// Build table properties with `configure` and wrap them.
    pub fn new(configure: impl FnOnce(&mut TablePropertiesBuilder)) -> Self {
        Self::from_properties(TableProperties::build(configure))
    }

    /// Wrap an existing properties snapshot.
    pub fn from_properties(properties: TableProperties) -> Self {
        if let Err(err) = properties.content().validate() {
            tracing::warn!(
                target: targets::BUILDER,
                error = %err,
                "table content has duplicate identifiers"
            );
        }
        Self {
            inner: BackedElement::new(properties, Sizing::default()),
        }
    }

    /// Choose how the table is measured.
    pub fn with_sizing(self, sizing: Sizing) -> Self {
        Self {
            inner: BackedElement::from_shared(Arc::clone(self.inner.shared_properties()), sizing)
                .with_measurer(Arc::clone(self.inner.measurer())),
        }
    }

    /// Use `measurer` for content measurement.
    pub fn with_measurer(self, measurer: Arc<ContentMeasurer<V>>) -> Self {
        Self {
            inner: self.inner.with_measurer(measurer),
        }
    }

    /// The properties snapshot.
    pub fn properties(&self) -> &TableProperties {
        self.inner.properties()
    }

    /// The sizing policy.
    pub fn sizing(&self) -> Sizing {
        self.inner.sizing()
    }

    /// Measure the table within `constraint`.
    pub fn measure(&self, constraint: &SizeConstraint) -> Size {
        self.inner.measure(constraint)
    }
}

impl<V: BackingView<Properties = TableProperties>> Element for Table<V> {
    fn content(&self) -> ElementContent {
        self.inner.content()
    }

    fn backing_view_description(
        &self,
        bounds: Rect,
        subtree_extent: Option<Rect>,
    ) -> Option<ViewDescription> {
        self.inner.backing_view_description(bounds, subtree_extent)
    }
}

impl<V: BackingView<Properties = TableProperties>> Clone for Table<V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<V: BackingView<Properties = TableProperties>> fmt::Debug for Table<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("sizing", &self.inner.sizing())
            .field("style", &self.properties().appearance().style)
            .field("rows", &self.properties().content().row_count())
            .finish()
    }
}
