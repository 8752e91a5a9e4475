//! Mutable accumulators for table content.
//!
//! These mirror the list builders: rows are appended one at a time, as bare
//! cell values, or in batches, and order is always call order.

use std::ops::AddAssign;

use horizon_listable_core::Key;
use horizon_listable_core::logging::targets;

use super::AnyTableHeaderFooter;
use super::cell::{AnyTableRow, TableCellElement, TableRow};
use super::content::TableContent;
use super::section::TableSection;
use crate::sections;

/// Accumulates the rows of one table section.
#[derive(Debug, Clone, Default)]
pub struct TableSectionBuilder {
    /// Optional section header.
    pub header: Option<AnyTableHeaderFooter>,
    /// Optional section footer.
    pub footer: Option<AnyTableHeaderFooter>,
    /// Rows appended so far.
    pub rows: Vec<AnyTableRow>,
}

impl TableSectionBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row or bare cell value.
    pub fn add(&mut self, row: impl Into<AnyTableRow>) {
        self.rows.push(row.into());
    }

    /// Append a sequence of rows or bare cell values.
    pub fn add_all<R: Into<AnyTableRow>>(&mut self, rows: impl IntoIterator<Item = R>) {
        self.rows.extend(rows.into_iter().map(Into::into));
    }

    /// Whether no rows have been appended.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows appended.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Freeze the builder into a section with the given identifier.
    pub fn into_section(self, identifier: impl Into<Key>) -> TableSection {
        TableSection {
            identifier: identifier.into(),
            header: self.header,
            footer: self.footer,
            rows: self.rows,
        }
    }
}

impl<E: TableCellElement> AddAssign<E> for TableSectionBuilder {
    fn add_assign(&mut self, element: E) {
        self.add(element);
    }
}

impl<E: TableCellElement> AddAssign<TableRow<E>> for TableSectionBuilder {
    fn add_assign(&mut self, row: TableRow<E>) {
        self.add(row);
    }
}

impl AddAssign<AnyTableRow> for TableSectionBuilder {
    fn add_assign(&mut self, row: AnyTableRow) {
        self.add(row);
    }
}

impl<R: Into<AnyTableRow>> AddAssign<Vec<R>> for TableSectionBuilder {
    fn add_assign(&mut self, rows: Vec<R>) {
        self.add_all(rows);
    }
}

/// Accumulates the header, footer, and sections of a table.
#[derive(Debug, Clone, Default)]
pub struct TableContentBuilder {
    /// Optional table header.
    pub header: Option<AnyTableHeaderFooter>,
    /// Optional table footer.
    pub footer: Option<AnyTableHeaderFooter>,
    /// Sections appended so far, in display order.
    pub sections: Vec<TableSection>,
}

impl TableContentBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `configure` against a fresh builder and snapshot the result.
    pub fn build(configure: impl FnOnce(&mut TableContentBuilder)) -> TableContent {
        let mut builder = Self::new();
        configure(&mut builder);
        builder.into_content()
    }

    /// Append one section.
    pub fn add(&mut self, section: TableSection) {
        self.sections.push(section);
    }

    /// Append a sequence of sections.
    pub fn add_all(&mut self, sections: impl IntoIterator<Item = TableSection>) {
        self.sections.extend(sections);
    }

    /// Whether every section has zero rows. Headers and footers do not count.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(TableSection::is_empty)
    }

    /// Total number of rows across all sections.
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(TableSection::row_count).sum()
    }

    /// Drop every section without rows, keeping the order of the rest.
    pub fn remove_empty(&mut self) {
        let before = self.sections.len();
        self.sections.retain(|section| !section.is_empty());
        tracing::trace!(
            target: targets::BUILDER,
            removed = before - self.sections.len(),
            remaining = self.sections.len(),
            "removed empty table sections"
        );
    }

    /// The first section with the given identifier.
    pub fn section_mut(&mut self, identifier: &Key) -> Option<&mut TableSection> {
        sections::find_mut(&mut self.sections, identifier)
    }

    /// Snapshot the current state. Later builder changes do not affect it.
    pub fn content(&self) -> TableContent {
        self.clone().into_content()
    }

    /// Consume the builder into a snapshot.
    pub fn into_content(self) -> TableContent {
        tracing::trace!(
            target: targets::BUILDER,
            sections = self.sections.len(),
            rows = self.row_count(),
            "snapshotting table content"
        );
        TableContent::from_parts(self.header, self.footer, self.sections)
    }
}

impl AddAssign<TableSection> for TableContentBuilder {
    fn add_assign(&mut self, section: TableSection) {
        self.add(section);
    }
}

impl AddAssign<Vec<TableSection>> for TableContentBuilder {
    fn add_assign(&mut self, sections: Vec<TableSection>) {
        self.add_all(sections);
    }
}
