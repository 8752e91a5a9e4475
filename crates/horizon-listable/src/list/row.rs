//! Rows: typed content paired with display and identity metadata.
//!
//! [`Row<E>`] keeps the element's concrete type. [`AnyRow`] erases it so a
//! section can hold rows of several element types in one ordered sequence.
//! Converting either a bare element or a `Row<E>` into an `AnyRow` is
//! lossless; [`AnyRow::element`] recovers the typed value.

use std::any::{Any, TypeId};
use std::fmt;

use serde::{Deserialize, Serialize};

use horizon_listable_core::Key;

use super::item::{ItemElement, ReuseIdentifier};

/// How tall a row is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowSizing {
    /// Use the list's default height for this kind of item.
    #[default]
    Default,
    /// Always use exactly this height.
    Fixed(f32),
    /// Use the content's natural height, clamped to `min` and `max`.
    ThatFits {
        /// Smallest allowed height.
        min: f32,
        /// Largest allowed height, if any.
        max: Option<f32>,
    },
}

impl RowSizing {
    /// Resolve a final height.
    ///
    /// `default_height` comes from the list appearance; `natural_height` is
    /// what the content would like when laid out at the current width.
    pub fn resolve(self, default_height: f32, natural_height: f32) -> f32 {
        match self {
            Self::Default => default_height,
            Self::Fixed(height) => height,
            Self::ThatFits { min, max } => {
                let height = natural_height.max(min);
                max.map_or(height, |max| height.min(max))
            }
        }
    }
}

/// How a row reacts to taps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelectionStyle {
    /// The row does not highlight or select.
    #[default]
    NotSelectable,
    /// The row highlights while pressed but does not stay selected.
    Tappable,
    /// The row can be selected and stays selected.
    Selectable {
        /// Whether the row starts selected.
        is_selected: bool,
    },
}

/// Identity of a row: its element type plus its element's key.
///
/// Rows of different element types never collide, even with equal keys.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RowIdentifier {
    element_type: TypeId,
    element_name: &'static str,
    key: Key,
}

impl RowIdentifier {
    /// The identifier of an `E` row with the given key.
    pub fn new<E: 'static>(key: impl Into<Key>) -> Self {
        Self {
            element_type: TypeId::of::<E>(),
            element_name: std::any::type_name::<E>(),
            key: key.into(),
        }
    }

    /// The element's key.
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// The element type name.
    pub fn element_name(&self) -> &'static str {
        self.element_name
    }
}

impl fmt::Debug for RowIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RowIdentifier({}, {:?})", self.element_name, self.key)
    }
}

/// One row of a list section.
#[derive(Debug, Clone)]
pub struct Row<E: ItemElement> {
    /// The content shown by the row.
    pub element: E,
    /// Height policy.
    pub sizing: RowSizing,
    /// Tap behavior.
    pub selection_style: SelectionStyle,
    /// Recycling group, defaulting to the element type's.
    pub reuse_identifier: ReuseIdentifier,
}

impl<E: ItemElement> Row<E> {
    /// Wrap `element` with default metadata.
    pub fn new(element: E) -> Self {
        Self {
            element,
            sizing: RowSizing::Default,
            selection_style: SelectionStyle::NotSelectable,
            reuse_identifier: E::reuse_identifier(),
        }
    }

    /// Set the height policy.
    pub fn with_sizing(mut self, sizing: RowSizing) -> Self {
        self.sizing = sizing;
        self
    }

    /// Set the tap behavior.
    pub fn with_selection_style(mut self, selection_style: SelectionStyle) -> Self {
        self.selection_style = selection_style;
        self
    }

    /// The row's identity.
    pub fn identifier(&self) -> RowIdentifier {
        RowIdentifier::new::<E>(self.element.identifier())
    }

    /// Whether both rows render identically.
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.sizing == other.sizing
            && self.selection_style == other.selection_style
            && self.reuse_identifier == other.reuse_identifier
            && self.element.is_equivalent(&other.element)
    }
}

trait ErasedRow: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn identifier(&self) -> RowIdentifier;
    fn reuse_identifier(&self) -> ReuseIdentifier;
    fn sizing(&self) -> RowSizing;
    fn selection_style(&self) -> SelectionStyle;
    fn element_type_name(&self) -> &'static str;
    fn is_equivalent(&self, other: &dyn ErasedRow) -> bool;
    fn clone_box(&self) -> Box<dyn ErasedRow>;
}

impl<E: ItemElement> ErasedRow for Row<E> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn identifier(&self) -> RowIdentifier {
        Row::identifier(self)
    }

    fn reuse_identifier(&self) -> ReuseIdentifier {
        self.reuse_identifier
    }

    fn sizing(&self) -> RowSizing {
        self.sizing
    }

    fn selection_style(&self) -> SelectionStyle {
        self.selection_style
    }

    fn element_type_name(&self) -> &'static str {
        std::any::type_name::<E>()
    }

    fn is_equivalent(&self, other: &dyn ErasedRow) -> bool {
        other
            .as_any()
            .downcast_ref::<Row<E>>()
            .is_some_and(|other| Row::is_equivalent(self, other))
    }

    fn clone_box(&self) -> Box<dyn ErasedRow> {
        Box::new(self.clone())
    }
}

/// A row whose element type has been erased.
///
/// Cloning an `AnyRow` deep-copies the row, so clones never share state.
pub struct AnyRow {
    inner: Box<dyn ErasedRow>,
}

impl AnyRow {
    /// Erase the element type of `row`.
    pub fn new<E: ItemElement>(row: Row<E>) -> Self {
        Self {
            inner: Box::new(row),
        }
    }

    /// The row's identity.
    pub fn identifier(&self) -> RowIdentifier {
        self.inner.identifier()
    }

    /// The row's recycling group.
    pub fn reuse_identifier(&self) -> ReuseIdentifier {
        self.inner.reuse_identifier()
    }

    /// The row's height policy.
    pub fn sizing(&self) -> RowSizing {
        self.inner.sizing()
    }

    /// The row's tap behavior.
    pub fn selection_style(&self) -> SelectionStyle {
        self.inner.selection_style()
    }

    /// The type name of the row's element.
    pub fn element_type_name(&self) -> &'static str {
        self.inner.element_type_name()
    }

    /// Check whether the row holds an `E`.
    pub fn is<E: ItemElement>(&self) -> bool {
        self.inner.as_any().is::<Row<E>>()
    }

    /// Borrow the typed row, if it holds an `E`.
    pub fn row<E: ItemElement>(&self) -> Option<&Row<E>> {
        self.inner.as_any().downcast_ref::<Row<E>>()
    }

    /// Mutably borrow the typed row, if it holds an `E`.
    pub fn row_mut<E: ItemElement>(&mut self) -> Option<&mut Row<E>> {
        self.inner.as_any_mut().downcast_mut::<Row<E>>()
    }

    /// Borrow the row's element, if it is an `E`.
    pub fn element<E: ItemElement>(&self) -> Option<&E> {
        self.row::<E>().map(|row| &row.element)
    }

    /// Whether both rows hold the same element type and render identically.
    pub fn is_equivalent(&self, other: &AnyRow) -> bool {
        self.inner.is_equivalent(other.inner.as_ref())
    }
}

impl Clone for AnyRow {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_box(),
        }
    }
}

impl PartialEq for AnyRow {
    fn eq(&self, other: &Self) -> bool {
        self.is_equivalent(other)
    }
}

impl fmt::Debug for AnyRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<E: ItemElement> From<Row<E>> for AnyRow {
    fn from(row: Row<E>) -> Self {
        Self::new(row)
    }
}

impl<E: ItemElement> From<E> for AnyRow {
    fn from(element: E) -> Self {
        Self::new(Row::new(element))
    }
}
