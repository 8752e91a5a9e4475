//! Immutable snapshots of list content.

use horizon_listable_core::{Key, ListableResult};

use super::header_footer::AnyHeaderFooter;
use super::row::{AnyRow, RowIdentifier};
use super::section::Section;
use crate::sections;

/// Address of a row inside a [`Content`] snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IndexPath {
    /// Index of the section.
    pub section: usize,
    /// Index of the row within the section.
    pub row: usize,
}

impl IndexPath {
    /// Create an index path.
    pub const fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// A frozen description of everything a list displays.
///
/// Produced by [`ContentBuilder`](super::ContentBuilder); once built it only
/// offers read access. Cloning copies every row.
#[derive(Debug, Clone, Default)]
pub struct Content {
    header: Option<AnyHeaderFooter>,
    footer: Option<AnyHeaderFooter>,
    sections: Vec<Section>,
}

impl Content {
    pub(crate) fn from_parts(
        header: Option<AnyHeaderFooter>,
        footer: Option<AnyHeaderFooter>,
        sections: Vec<Section>,
    ) -> Self {
        Self {
            header,
            footer,
            sections,
        }
    }

    /// Sections in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The list header.
    pub fn header(&self) -> Option<&AnyHeaderFooter> {
        self.header.as_ref()
    }

    /// The list footer.
    pub fn footer(&self) -> Option<&AnyHeaderFooter> {
        self.footer.as_ref()
    }

    /// Total number of rows.
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(Section::row_count).sum()
    }

    /// Whether every section has zero rows.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(Section::is_empty)
    }

    /// The first section with the given identifier.
    pub fn section(&self, identifier: &Key) -> Option<&Section> {
        sections::find(&self.sections, identifier)
    }

    /// The row at `path`.
    pub fn row(&self, path: IndexPath) -> Option<&AnyRow> {
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

impl PartialEq for Content {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header
            && self.footer == other.footer
            && self.sections == other.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{ContentBuilder, ItemElement};
    use horizon_listable_core::ListableError;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(u32);

    impl ItemElement for Item {
        fn identifier(&self) -> Key {
            Key::from(self.0)
        }

        fn is_equivalent(&self, other: &Self) -> bool {
            self == other
        }
    }

    fn sample() -> Content {
        ContentBuilder::build(|list| {
            list.add(Section::new("empty"));
            list.add(Section::new("a").with_rows([Item(1), Item(2)]));
            list.add(Section::new("b").with_rows([Item(3)]));
            list.add(Section::new("tail"));
        })
    }

    #[test]
    fn test_default_is_empty() {
        let content = Content::default();
        assert!(content.is_empty());
        assert_eq!(content.first_index_path(), None);
        assert_eq!(content.last_index_path(), None);
    }

    #[test]
    fn test_index_paths() {
        let content = sample();
        assert_eq!(content.first_index_path(), Some(IndexPath::new(1, 0)));
        assert_eq!(content.last_index_path(), Some(IndexPath::new(2, 0)));
        assert_eq!(
            content.index_path_of(&RowIdentifier::new::<Item>(2)),
            Some(IndexPath::new(1, 1))
        );
        assert_eq!(
            content.row(IndexPath::new(2, 0)).and_then(|row| row.element::<Item>()),
            Some(&Item(3))
        );
        assert!(content.row(IndexPath::new(9, 0)).is_none());
    }

    #[test]
    fn test_section_lookup() {
        let content = sample();
        assert_eq!(content.section(&Key::from("b")).map(Section::row_count), Some(1));
        assert!(content.section(&Key::from("zzz")).is_none());
    }

    #[test]
    fn test_validate() {
        assert_eq!(sample().validate(), Ok(()));

        let duplicate_section = ContentBuilder::build(|list| {
            list.add(Section::new("a"));
            list.add(Section::new("a"));
        });
        assert_eq!(
            duplicate_section.validate(),
            Err(ListableError::DuplicateSection {
                identifier: Key::from("a")
            })
        );

        let duplicate_row = ContentBuilder::build(|list| {
            list.add(Section::new("a").with_rows([Item(1), Item(1)]));
        });
        assert!(matches!(
            duplicate_row.validate(),
            Err(ListableError::DuplicateRow { identifier, .. }) if identifier == Key::from(1)
        ));
    }

    #[test]
    fn test_equality_uses_equivalence() {
        assert_eq!(sample(), sample());
        assert_ne!(sample(), Content::default());
    }
}
