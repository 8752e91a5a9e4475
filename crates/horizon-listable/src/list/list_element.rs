//! Embedding a list in a declarative layout tree.
//!
//! [`List`] is a layout element whose backing view is a platform list view
//! `V`. It measures either by filling the space its parent offers or by
//! asking an off-screen `V` how tall the configured content is.
//!
//! ```ignore
//! let list = List::<PlatformListView>::new(|list| {
//!     list.add(Section::build("podcasts", |section| {
//!         section.add_all(podcasts.iter().cloned());
//!     }));
//! })
//! .with_sizing(Sizing::MeasureContent);
//! ```

use std::fmt;
use std::sync::Arc;

use horizon_listable_core::logging::targets;
use horizon_listable_core::{BackingView, Rect, Size, SizeConstraint};
use horizon_listable_layout::{
    BackedElement, ContentMeasurer, Element, ElementContent, Sizing, ViewDescription,
};

use super::properties::{ListProperties, ListPropertiesBuilder};

/// A layout element displaying a list in a backing view `V`.
pub struct List<V: BackingView<Properties = ListProperties>> {
    inner: BackedElement<V>,
}

impl<V: BackingView<Properties = ListProperties>> List<V> {
    /// Build list properties with `configure` and wrap them.
    ///
    /// The list fills the space offered by its parent; use
    /// [`with_sizing`](Self::with_sizing) to measure content instead.
    pub fn new(configure: impl FnOnce(&mut ListPropertiesBuilder)) -> Self {
        Self::from_properties(ListProperties::build(configure))
    }

    /// Wrap an existing properties snapshot.
    ///
    /// Content with duplicate identifiers is accepted, but logged, since the
    /// backing view cannot track such rows across updates.
    pub fn from_properties(properties: ListProperties) -> Self {
        if let Err(err) = properties.content().validate() {
            tracing::warn!(
                target: targets::BUILDER,
                error = %err,
                "list content has duplicate identifiers"
            );
        }
        Self {
            inner: BackedElement::new(properties, Sizing::default()),
        }
    }

    /// Choose how the list is measured.
    ///
    /// [`Sizing::MeasureContent`] can report a height of zero for empty
    /// content, or a very large height for long lists. Place such a list
    /// inside an element that constrains its size.
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
    pub fn properties(&self) -> &ListProperties {
        self.inner.properties()
    }

    /// The sizing policy.
    pub fn sizing(&self) -> Sizing {
        self.inner.sizing()
    }

    /// Measure the list within `constraint`.
    pub fn measure(&self, constraint: &SizeConstraint) -> Size {
        self.inner.measure(constraint)
    }
}

impl<V: BackingView<Properties = ListProperties>> Element for List<V> {
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

impl<V: BackingView<Properties = ListProperties>> Clone for List<V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<V: BackingView<Properties = ListProperties>> fmt::Debug for List<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("sizing", &self.inner.sizing())
            .field("sections", &self.properties().content().sections().len())
            .field("rows", &self.properties().content().row_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{Appearance, ItemElement, Section};
    use horizon_listable_core::Key;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(u32);

    impl ItemElement for Item {
        fn identifier(&self) -> Key {
            Key::from(self.0)
        }

        fn is_equivalent(&self, other: &Self) -> bool {
            self == other
        }
    }

    struct StubListView {
        row_height: f32,
        rows: usize,
    }

    impl BackingView for StubListView {
        type Properties = ListProperties;

        fn new(_frame: Rect, appearance: &Appearance) -> Self {
            Self {
                row_height: appearance.default_row_height,
                rows: 0,
            }
        }

        fn configure(&mut self, properties: &ListProperties) {
            self.rows = properties.content().row_count();
        }

        fn content_size(&mut self, constraint: &SizeConstraint) -> Size {
            Size::new(constraint.maximum().width, self.rows as f32 * self.row_height)
        }
    }

    #[test]
    fn test_default_sizing_fills() {
        let list = List::<StubListView>::new(|_| {});
        assert_eq!(list.sizing(), Sizing::FillAvailableSpace);
        assert_eq!(
            list.measure(&SizeConstraint::new(320.0, 480.0)),
            Size::new(320.0, 480.0)
        );
    }

    #[test]
    fn test_with_sizing_keeps_snapshot() {
        let list = List::<StubListView>::new(|list| {
            list.add(Section::new("a").with_rows([Item(1), Item(2)]));
        });
        let measured = list.clone().with_sizing(Sizing::MeasureContent);

        assert_eq!(measured.properties(), list.properties());
        assert_eq!(
            measured.measure(&SizeConstraint::new(320.0, None)),
            Size::new(320.0, 100.0)
        );
    }

    #[test]
    fn test_duplicate_content_is_accepted() {
        let list = List::<StubListView>::new(|list| {
            list.add(Section::new("a").with_rows([Item(1), Item(1)]));
        });
        assert_eq!(list.properties().content().row_count(), 2);
    }
}
