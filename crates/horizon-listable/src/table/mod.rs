//! Declarative table content.
//!
//! The table module mirrors [`list`](crate::list) for platforms whose
//! scrollable view is a classic table: cells implement
//! [`TableCellElement`], sections are [`TableSection`]s, and a
//! [`Table`] element embeds the result in a layout tree. Headers and footers
//! share the list's [`HeaderFooterElement`](crate::list::HeaderFooterElement)
//! contract.

mod builder;
mod cell;
mod content;
mod properties;
mod section;
mod table_element;

pub use builder::{TableContentBuilder, TableSectionBuilder};
pub use cell::{AnyTableRow, TableAccessory, TableCellElement, TableRow};
pub use content::TableContent;
pub use properties::{
    SeparatorStyle, TableAppearance, TableProperties, TablePropertiesBuilder, TableStyle,
};
pub use section::TableSection;
pub use table_element::Table;

/// A table header or footer wrapping typed content.
pub type TableHeaderFooter<E> = crate::list::HeaderFooter<E>;

/// A table header or footer whose element type has been erased.
pub type AnyTableHeaderFooter = crate::list::AnyHeaderFooter;
