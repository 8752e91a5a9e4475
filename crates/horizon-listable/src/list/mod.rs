//! Declarative list content.
//!
//! A list is described as an optional header and footer plus ordered
//! [`Section`]s of ordered rows. Application content types implement
//! [`ItemElement`] (rows) or [`HeaderFooterElement`] (headers and footers)
//! and are appended through [`SectionBuilder`] and [`ContentBuilder`]. The
//! result is frozen into [`ListProperties`] and displayed by a [`List`]
//! element.

mod builder;
mod content;
mod header_footer;
mod item;
mod list_element;
mod properties;
mod row;
mod section;

pub use builder::{ContentBuilder, SectionBuilder};
pub use content::{Content, IndexPath};
pub use header_footer::{AnyHeaderFooter, HeaderFooter, HeaderFooterSizing};
pub use item::{HeaderFooterElement, ItemElement, ReuseIdentifier};
pub use list_element::List;
pub use properties::{
    Appearance, Behavior, KeyboardDismissMode, LayoutDirection, ListProperties,
    ListPropertiesBuilder, SelectionMode, UnderflowAlignment,
};
pub use row::{AnyRow, Row, RowIdentifier, RowSizing, SelectionStyle};
pub use section::Section;
