//! Prelude module for Horizon Listable.
//!
//! ```ignore
//! use horizon_listable::prelude::*;
//! ```
//!
//! This provides access to:
//! - List content (`Section`, `Row`, `ContentBuilder`, `ListProperties`)
//! - Table content (`TableSection`, `TableRow`, `TableProperties`)
//! - Layout elements (`List`, `Table`, `Sizing`)
//! - Identity and geometry (`Key`, `Size`, `SizeConstraint`, `Rect`)

// ============================================================================
// List
// ============================================================================

pub use crate::list::{
    AnyHeaderFooter, AnyRow, Appearance, Behavior, Content, ContentBuilder, HeaderFooter,
    HeaderFooterElement, ItemElement, List, ListProperties, Row, RowSizing, Section,
    SectionBuilder, SelectionStyle,
};

// ============================================================================
// Table
// ============================================================================

pub use crate::table::{
    AnyTableRow, Table, TableAppearance, TableCellElement, TableContent, TableContentBuilder,
    TableProperties, TableRow, TableSection, TableSectionBuilder,
};

// ============================================================================
// Layout
// ============================================================================

pub use horizon_listable_layout::{ContentMeasurer, Element, MeasurementPolicy, Sizing};

// ============================================================================
// Core
// ============================================================================

pub use horizon_listable_core::{BackingView, Key, Rect, Size, SizeConstraint, ViewProperties};
