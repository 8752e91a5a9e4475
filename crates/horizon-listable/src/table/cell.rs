//! Table rows and the trait implemented by their content.

use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};

use horizon_listable_core::Key;

use crate::list::{ReuseIdentifier, RowIdentifier, RowSizing, SelectionStyle};

/// Content displayed by one table cell.
pub trait TableCellElement: fmt::Debug + Clone + Send + Sync + 'static {
    /// Identity of this value within its section.
    fn identifier(&self) -> Key;

    /// Whether `self` and `other` render identically.
    fn is_equivalent(&self, other: &Self) -> bool;

    /// The reuse group of cells displaying this type.
    fn reuse_identifier() -> ReuseIdentifier
    where
        Self: Sized,
    {
        ReuseIdentifier::of::<Self>()
    }
}

/// Decoration drawn at the trailing edge of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableAccessory {
    /// No accessory.
    #[default]
    None,
    /// A chevron suggesting navigation.
    DisclosureIndicator,
    /// A checkmark.
    Checkmark,
}

/// One row of a table section.
#[derive(Debug, Clone)]
pub struct TableRow<E: TableCellElement> {
    /// The cell content.
    pub element: E,
    /// Height policy.
    pub sizing: RowSizing,
    /// Tap behavior.
    pub selection_style: SelectionStyle,
    /// Trailing decoration.
    pub accessory: TableAccessory,
    /// Recycling group.
    pub reuse_identifier: ReuseIdentifier,
}

impl<E: TableCellElement> TableRow<E> {
    /// Wrap `element` with default metadata.
    pub fn new(element: E) -> Self {
        Self {
            element,
            sizing: RowSizing::Default,
            selection_style: SelectionStyle::NotSelectable,
            accessory: TableAccessory::None,
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

    /// Set the trailing decoration.
    pub fn with_accessory(mut self, accessory: TableAccessory) -> Self {
        self.accessory = accessory;
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
            && self.accessory == other.accessory
            && self.reuse_identifier == other.reuse_identifier
            && self.element.is_equivalent(&other.element)
    }
}

trait ErasedTableRow: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn identifier(&self) -> RowIdentifier;
    fn sizing(&self) -> RowSizing;
    fn accessory(&self) -> TableAccessory;
    fn is_equivalent(&self, other: &dyn ErasedTableRow) -> bool;
    fn clone_box(&self) -> Box<dyn ErasedTableRow>;
}

impl<E: TableCellElement> ErasedTableRow for TableRow<E> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn identifier(&self) -> RowIdentifier {
        TableRow::identifier(self)
    }

    fn sizing(&self) -> RowSizing {
        self.sizing
    }

    fn accessory(&self) -> TableAccessory {
        self.accessory
    }

    fn is_equivalent(&self, other: &dyn ErasedTableRow) -> bool {
        other
            .as_any()
            .downcast_ref::<TableRow<E>>()
            .is_some_and(|other| TableRow::is_equivalent(self, other))
    }

    fn clone_box(&self) -> Box<dyn ErasedTableRow> {
        Box::new(self.clone())
    }
}

/// A table row whose cell type has been erased.
pub struct AnyTableRow {
    inner: Box<dyn ErasedTableRow>,
}

impl AnyTableRow {
    /// Erase the cell type of `row`.
    pub fn new<E: TableCellElement>(row: TableRow<E>) -> Self {
        Self {
            inner: Box::new(row),
        }
    }

    /// The row's identity.
    pub fn identifier(&self) -> RowIdentifier {
        self.inner.identifier()
    }

    /// The row's height policy.
    pub fn sizing(&self) -> RowSizing {
        self.inner.sizing()
    }

    /// The row's trailing decoration.
    pub fn accessory(&self) -> TableAccessory {
        self.inner.accessory()
    }

    /// Borrow the typed row, if it holds an `E`.
    pub fn row<E: TableCellElement>(&self) -> Option<&TableRow<E>> {
        self.inner.as_any().downcast_ref()
    }

    /// Mutably borrow the typed row, if it holds an `E`.
    pub fn row_mut<E: TableCellElement>(&mut self) -> Option<&mut TableRow<E>> {
        self.inner.as_any_mut().downcast_mut()
    }

    /// Borrow the cell content, if it is an `E`.
    pub fn element<E: TableCellElement>(&self) -> Option<&E> {
        self.row::<E>().map(|row| &row.element)
    }

    /// Whether both rows hold the same cell type and render identically.
    pub fn is_equivalent(&self, other: &AnyTableRow) -> bool {
        self.inner.is_equivalent(other.inner.as_ref())
    }
}

impl Clone for AnyTableRow {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_box(),
        }
    }
}

impl PartialEq for AnyTableRow {
    fn eq(&self, other: &Self) -> bool {
        self.is_equivalent(other)
    }
}

impl fmt::Debug for AnyTableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<E: TableCellElement> From<TableRow<E>> for AnyTableRow {
    fn from(row: TableRow<E>) -> Self {
        Self::new(row)
    }
}

impl<E: TableCellElement> From<E> for AnyTableRow {
    fn from(element: E) -> Self {
        Self::new(TableRow::new(element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Setting(&'static str);

    impl TableCellElement for Setting {
        fn identifier(&self) -> Key {
            Key::from(self.0)
        }

        fn is_equivalent(&self, other: &Self) -> bool {
            self == other
        }
    }

    #[test]
    fn test_bare_and_wrapped_rows_match() {
        let bare = AnyTableRow::from(Setting("wifi"));
        let wrapped = AnyTableRow::from(TableRow::new(Setting("wifi")));
        assert_eq!(bare, wrapped);
        assert_eq!(bare.identifier(), RowIdentifier::new::<Setting>("wifi"));
    }

    #[test]
    fn test_accessory() {
        let row = AnyTableRow::from(
            TableRow::new(Setting("wifi")).with_accessory(TableAccessory::DisclosureIndicator),
        );
        assert_eq!(row.accessory(), TableAccessory::DisclosureIndicator);
        assert_ne!(row, AnyTableRow::from(Setting("wifi")));
    }
}
