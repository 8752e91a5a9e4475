//! Immutable snapshots of table content.

use horizon_listable_core::{Key, ListableResult};

use super::AnyTableHeaderFooter;
use super::cell::AnyTableRow;
use super::section::TableSection;
use crate::list::{IndexPath, RowIdentifier};
use crate::sections;

/// A frozen description of everything a table displays.
#[derive(Debug, Clone, Default)]
pub struct TableContent {
    header: Option<AnyTableHeaderFooter>,
    footer: Option<AnyTableHeaderFooter>,
    sections: Vec<TableSection>,
}

impl TableContent {
    pub(crate) fn from_parts(
        header: Option<AnyTableHeaderFooter>,
        footer: Option<AnyTableHeaderFooter>,
        sections: Vec<TableSection>,
    ) -> Self {
        Self {
            header,
            footer,
            sections,
        }
    }

    /// Sections in display order.
    pub fn sections(&self) -> &[TableSection] {
        &self.sections
    }

    /// The table header.
    pub fn header(&self) -> Option<&AnyTableHeaderFooter> {
        self.header.as_ref()
    }

    /// The table footer.
    pub fn footer(&self) -> Option<&AnyTableHeaderFooter> {
        self.footer.as_ref()
    }

    /// Total number of rows.
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(TableSection::row_count).sum()
    }

    /// Whether every section has zero rows.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(TableSection::is_empty)
    }

    /// The first section with the given identifier.
    pub fn section(&self, identifier: &Key) -> Option<&TableSection> {
        sections::find(&self.sections, identifier)
    }

    /// The row at `path`.
    pub fn row(&self, path: IndexPath) -> Option<&AnyTableRow> {
        self.sections.get(path.section)?.row(path.row)
    }

    /// Path of the first row, skipping empty sections.
    pub fn first_index_path(&self) -> Option<IndexPath> {
        sections::first_index_path(&self.sections)
    }

    /// Path of the last row, skipping empty sections.
    pub fn last_index_path(&self) -> Option<IndexPath> {
        sections::last_index_path(&self.sections)
    }

    /// Path of the first row with the given identity.
    pub fn index_path_of(&self, identifier: &RowIdentifier) -> Option<IndexPath> {
        sections::index_path_of(&self.sections, identifier)
    }

    /// Check that section identifiers are unique, and that row identities
    /// are unique within each section.
    pub fn validate(&self) -> ListableResult<()> {
        sections::validate(&self.sections)
    }
}

impl PartialEq for TableContent {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header
            && self.footer == other.footer
            && self.sections == other.sections
    }
}
