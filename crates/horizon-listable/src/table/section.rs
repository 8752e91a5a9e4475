//! Table sections.

use horizon_listable_core::Key;

use super::builder::TableSectionBuilder;
use super::cell::AnyTableRow;
use super::AnyTableHeaderFooter;
use crate::list::RowIdentifier;
use crate::sections;

/// One section of a table.
#[derive(Debug, Clone)]
pub struct TableSection {
    /// Identity of the section within its content.
    pub identifier: Key,
    /// Optional header shown above the rows.
    pub header: Option<AnyTableHeaderFooter>,
    /// Optional footer shown below the rows.
    pub footer: Option<AnyTableHeaderFooter>,
    /// Rows in display order.
    pub rows: Vec<AnyTableRow>,
}

impl TableSection {
    /// Create an empty section.
    pub fn new(identifier: impl Into<Key>) -> Self {
        Self {
            identifier: identifier.into(),
            header: None,
            footer: None,
            rows: Vec::new(),
        }
    }

    /// Create a section by running `configure` against a fresh builder.
    pub fn build(
        identifier: impl Into<Key>,
        configure: impl FnOnce(&mut TableSectionBuilder),
    ) -> Self {
        let mut builder = TableSectionBuilder::new();
        configure(&mut builder);
        builder.into_section(identifier)
    }

    /// Replace the rows.
    pub fn with_rows<R: Into<AnyTableRow>>(mut self, rows: impl IntoIterator<Item = R>) -> Self {
        self.rows = rows.into_iter().map(Into::into).collect();
        self
    }

    /// Set the header.
    pub fn with_header(mut self, header: impl Into<AnyTableHeaderFooter>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set the footer.
    pub fn with_footer(mut self, footer: impl Into<AnyTableHeaderFooter>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the section has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row at `index`.
    pub fn row(&self, index: usize) -> Option<&AnyTableRow> {
        self.rows.get(index)
    }

    /// Position of the row with the given identity.
    pub fn index_of(&self, identifier: &RowIdentifier) -> Option<usize> {
        sections::row_index_of(self, identifier)
    }
}

impl PartialEq for TableSection {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
            && self.header == other.header
            && self.footer == other.footer
            && self.rows == other.rows
    }
}
