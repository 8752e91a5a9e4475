//! Mutable accumulators used while describing list content.
//!
//! Builders are short-lived: application code receives one inside a
//! configuration closure, appends to it, and the result is frozen into a
//! [`Section`] or [`Content`] snapshot. All builder operations are total.
//!
//! Rows can be appended in four shapes, all of which keep call order:
//!
//! | shape                       | method                 | operator          |
//! |-----------------------------|------------------------|-------------------|
//! | one `Row<E>`                | [`SectionBuilder::add`]     | `+= row`          |
//! | one bare `E: ItemElement`   | [`SectionBuilder::add`]     | `+= element`      |
//! | mixed `Vec<AnyRow>`         | [`SectionBuilder::add_all`] | `+= vec![..]`     |
//! | `Vec<E>` or `Vec<Row<E>>`   | [`SectionBuilder::add_all`] | `+= vec![..]`     |

use std::ops::AddAssign;

use horizon_listable_core::Key;
use horizon_listable_core::logging::targets;

use super::content::Content;
use super::header_footer::AnyHeaderFooter;
use super::item::ItemElement;
use super::row::{AnyRow, Row};
use super::section::Section;
use crate::sections;

/// Accumulates the rows of one section.
#[derive(Debug, Clone, Default)]
pub struct SectionBuilder {
    /// Optional section header.
    pub header: Option<AnyHeaderFooter>,
    /// Optional section footer.
    pub footer: Option<AnyHeaderFooter>,
    /// Rows appended so far.
    pub rows: Vec<AnyRow>,
}

impl SectionBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row or bare element.
    pub fn add(&mut self, row: impl Into<AnyRow>) {
        self.rows.push(row.into());
    }

    /// Append a sequence of rows or bare elements.
    pub fn add_all<R: Into<AnyRow>>(&mut self, rows: impl IntoIterator<Item = R>) {
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
    pub fn into_section(self, identifier: impl Into<Key>) -> Section {
        Section {
            identifier: identifier.into(),
            header: self.header,
            footer: self.footer,
            rows: self.rows,
        }
    }
}

impl<E: ItemElement> AddAssign<E> for SectionBuilder {
    fn add_assign(&mut self, element: E) {
        self.add(element);
    }
}

impl<E: ItemElement> AddAssign<Row<E>> for SectionBuilder {
    fn add_assign(&mut self, row: Row<E>) {
        self.add(row);
    }
}

impl AddAssign<AnyRow> for SectionBuilder {
    fn add_assign(&mut self, row: AnyRow) {
        self.add(row);
    }
}

impl<R: Into<AnyRow>> AddAssign<Vec<R>> for SectionBuilder {
    fn add_assign(&mut self, rows: Vec<R>) {
        self.add_all(rows);
    }
}

/// Accumulates the header, footer, and sections of a list.
#[derive(Debug, Clone, Default)]
pub struct ContentBuilder {
    /// Optional list header.
    pub header: Option<AnyHeaderFooter>,
    /// Optional list footer.
    pub footer: Option<AnyHeaderFooter>,
    /// Sections appended so far, in display order.
    pub sections: Vec<Section>,
}

impl ContentBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `configure` against a fresh builder and snapshot the result.
    pub fn build(configure: impl FnOnce(&mut ContentBuilder)) -> Content {
        let mut builder = Self::new();
        configure(&mut builder);
        builder.into_content()
    }

    /// Append one section.
    pub fn add(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Append a sequence of sections.
    pub fn add_all(&mut self, sections: impl IntoIterator<Item = Section>) {
        self.sections.extend(sections);
    }

    /// Whether every section has zero rows.
    ///
    /// Headers and footers do not count: a builder holding only a list
    /// header, or only empty sections, is empty.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(Section::is_empty)
    }

    /// Total number of rows across all sections.
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(Section::row_count).sum()
    }

    /// Drop every section without rows, keeping the order of the rest.
    pub fn remove_empty(&mut self) {
        let before = self.sections.len();
        self.sections.retain(|section| !section.is_empty());
        tracing::trace!(
            target: targets::BUILDER,
            removed = before - self.sections.len(),
            remaining = self.sections.len(),
            "removed empty sections"
        );
    }

    /// The first section with the given identifier.
    pub fn section_mut(&mut self, identifier: &Key) -> Option<&mut Section> {
        sections::find_mut(&mut self.sections, identifier)
    }

    /// Snapshot the current state.
    ///
    /// The snapshot owns deep copies of every row; later changes to the
    /// builder do not affect it.
    pub fn content(&self) -> Content {
        self.clone().into_content()
    }

    /// Consume the builder into a snapshot.
    pub fn into_content(self) -> Content {
        tracing::trace!(
            target: targets::BUILDER,
            sections = self.sections.len(),
            rows = self.row_count(),
            has_header = self.header.is_some(),
            has_footer = self.footer.is_some(),
            "snapshotting content"
        );
        Content::from_parts(self.header, self.footer, self.sections)
    }
}

impl AddAssign<Section> for ContentBuilder {
    fn add_assign(&mut self, section: Section) {
        self.add(section);
    }
}

impl AddAssign<Vec<Section>> for ContentBuilder {
    fn add_assign(&mut self, sections: Vec<Section>) {
        self.add_all(sections);
    }
}
