//! Queries shared by list and table content.
//!
//! Both content kinds are an ordered run of identified sections, each
//! holding rows with a [`RowIdentifier`]. The helpers here work over any
//! such run so the two snapshots answer lookups and validation the same way.

use std::collections::HashSet;

use horizon_listable_core::{Key, ListableError, ListableResult};

use crate::list::{IndexPath, RowIdentifier, Section};
use crate::table::TableSection;

/// An identified, ordered group of rows.
pub(crate) trait SectionRows {
    /// Identity of the section within its content.
    fn identifier(&self) -> &Key;

    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Row identities in display order.
    fn row_identifiers(&self) -> impl Iterator<Item = RowIdentifier> + '_;
}

impl SectionRows for Section {
    fn identifier(&self) -> &Key {
        &self.identifier
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row_identifiers(&self) -> impl Iterator<Item = RowIdentifier> + '_ {
        self.rows.iter().map(|row| row.identifier())
    }
}

impl SectionRows for TableSection {
    fn identifier(&self) -> &Key {
        &self.identifier
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row_identifiers(&self) -> impl Iterator<Item = RowIdentifier> + '_ {
        self.rows.iter().map(|row| row.identifier())
    }
}

/// The first section with the given identifier.
pub(crate) fn find<'a, S: SectionRows>(sections: &'a [S], identifier: &Key) -> Option<&'a S> {
    sections
        .iter()
        .find(|section| section.identifier() == identifier)
}

/// The first section with the given identifier, mutably.
pub(crate) fn find_mut<'a, S: SectionRows>(
    sections: &'a mut [S],
    identifier: &Key,
) -> Option<&'a mut S> {
    sections
        .iter_mut()
        .find(|section| section.identifier() == identifier)
}

/// Position of the row with the given identity inside one section.
pub(crate) fn row_index_of<S: SectionRows>(section: &S, identifier: &RowIdentifier) -> Option<usize> {
    section.row_identifiers().position(|row| row == *identifier)
}

/// Path of the first row with the given identity.
pub(crate) fn index_path_of<S: SectionRows>(
    sections: &[S],
    identifier: &RowIdentifier,
) -> Option<IndexPath> {
    sections
        .iter()
        .enumerate()
        .find_map(|(section_index, section)| {
            row_index_of(section, identifier).map(|row| IndexPath::new(section_index, row))
        })
}

/// Path of the first row, skipping empty sections.
pub(crate) fn first_index_path<S: SectionRows>(sections: &[S]) -> Option<IndexPath> {
    sections
        .iter()
        .position(|section| section.row_count() > 0)
        .map(|section| IndexPath::new(section, 0))
}

/// Path of the last row, skipping empty sections.
pub(crate) fn last_index_path<S: SectionRows>(sections: &[S]) -> Option<IndexPath> {
    sections
        .iter()
        .enumerate()
        .rev()
        .find(|(_, section)| section.row_count() > 0)
        .map(|(index, section)| IndexPath::new(index, section.row_count() - 1))
}

/// Check that section identifiers are unique, and that row identities are
/// unique within each section. Reports the first duplicate in display order.
pub(crate) fn validate<S: SectionRows>(sections: &[S]) -> ListableResult<()> {
    let mut section_ids = HashSet::with_capacity(sections.len());
    for section in sections {
        if !section_ids.insert(section.identifier()) {
            return Err(ListableError::DuplicateSection {
                identifier: section.identifier().clone(),
            });
        }

        let mut row_ids = HashSet::with_capacity(section.row_count());
        for identifier in section.row_identifiers() {
            if row_ids.contains(&identifier) {
                return Err(ListableError::DuplicateRow {
                    section: section.identifier().clone(),
                    element: identifier.element_name(),
                    identifier: identifier.key().clone(),
                });
            }
            row_ids.insert(identifier);
        }
    }
    Ok(())
}
