//! Horizon Listable - declarative list and table builders.
//!
//! This is the main umbrella crate. It re-exports the core types and the
//! layout adapter, and provides the [`list`] and [`table`] content models.
//!
//! # Example
//!
//! ```
//! use horizon_listable::list::{ContentBuilder, ItemElement, Section};
//! use horizon_listable::Key;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Contact {
//!     id: i64,
//!     name: String,
//! }
//!
//! impl ItemElement for Contact {
//!     fn identifier(&self) -> Key {
//!         Key::from(self.id)
//!     }
//!
//!     fn is_equivalent(&self, other: &Self) -> bool {
//!         self == other
//!     }
//! }
//!
//! let content = ContentBuilder::build(|list| {
//!     list.add(Section::build("favorites", |section| {
//!         section.add(Contact { id: 1, name: "Ada".into() });
//!     }));
//!     list.add(Section::new("everyone"));
//!     list.remove_empty();
//! });
//!
//! assert_eq!(content.sections().len(), 1);
//! assert_eq!(content.row_count(), 1);
//! ```

pub use horizon_listable_core::*;

/// Layout-tree adapter.
pub mod layout {
    pub use horizon_listable_layout::*;
}

pub mod list;
pub mod prelude;
mod sections;
pub mod table;

pub use horizon_listable_layout::Sizing;

static_assertions::assert_impl_all!(list::AnyRow: Send, Sync, Clone);
static_assertions::assert_impl_all!(list::Content: Send, Sync, Clone);
static_assertions::assert_impl_all!(list::ListProperties: Send, Sync);
static_assertions::assert_impl_all!(table::AnyTableRow: Send, Sync, Clone);
static_assertions::assert_impl_all!(table::TableProperties: Send, Sync);
