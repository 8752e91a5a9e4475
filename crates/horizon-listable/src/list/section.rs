//! Sections: an identified, ordered group of rows.

use horizon_listable_core::Key;

use super::builder::SectionBuilder;
use super::header_footer::AnyHeaderFooter;
use super::row::{AnyRow, RowIdentifier};
use crate::sections;

/// One section of a list.
///
/// Rows are displayed in the order they appear in [`rows`](Self::rows).
#[derive(Debug, Clone)]
pub struct Section {
    /// Identity of the section within its content.
    pub identifier: Key,
    /// Optional header shown above the rows.
    pub header: Option<AnyHeaderFooter>,
    /// Optional footer shown below the rows.
    pub footer: Option<AnyHeaderFooter>,
    /// Rows in display order.
    pub rows: Vec<AnyRow>,
}

impl Section {
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
    ///
    /// ```
    /// use horizon_listable::list::{ItemElement, Section};
    /// use horizon_listable::Key;
    ///
    /// #[derive(Debug, Clone, PartialEq)]
    /// struct Episode(i64);
    ///
    /// impl ItemElement for Episode {
    ///     fn identifier(&self) -> Key {
    ///         Key::from(self.0)
    ///     }
    ///
    ///     fn is_equivalent(&self, other: &Self) -> bool {
    ///         self == other
    ///     }
    /// }
    ///
    /// let section = Section::build("episodes", |section| {
    ///     section.add(Episode(1));
    ///     *section += vec![Episode(2), Episode(3)];
    /// });
    /// assert_eq!(section.row_count(), 3);
    /// ```
    pub fn build(identifier: impl Into<Key>, configure: impl FnOnce(&mut SectionBuilder)) -> Self {
        let mut builder = SectionBuilder::new();
        configure(&mut builder);
        builder.into_section(identifier)
    }

    /// Replace the rows.
    pub fn with_rows<R: Into<AnyRow>>(mut self, rows: impl IntoIterator<Item = R>) -> Self {
        self.rows = rows.into_iter().map(Into::into).collect();
        self
    }

    /// Set the header.
    pub fn with_header(mut self, header: impl Into<AnyHeaderFooter>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set the footer.
    pub fn with_footer(mut self, footer: impl Into<AnyHeaderFooter>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the section has no rows. Header and footer are not counted.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The row at `index`.
    pub fn row(&self, index: usize) -> Option<&AnyRow> {
        self.rows.get(index)
    }

    /// Position of the row with the given identity.
    pub fn index_of(&self, identifier: &RowIdentifier) -> Option<usize> {
        sections::row_index_of(self, identifier)
    }

    /// Whether both sections render identically.
    pub fn is_equivalent(&self, other: &Section) -> bool {
        self == other
    }
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
            && self.header == other.header
            && self.footer == other.footer
            && self.rows == other.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::ItemElement;

    #[derive(Debug, Clone, PartialEq)]
    struct Name(&'static str);

    impl ItemElement for Name {
        fn identifier(&self) -> Key {
            Key::from(self.0)
        }

        fn is_equivalent(&self, other: &Self) -> bool {
            self == other
        }
    }

    #[test]
    fn test_new_section_is_empty() {
        let section = Section::new("a");
        assert!(section.is_empty());
        assert_eq!(section.identifier, Key::from("a"));
    }

    #[test]
    fn test_index_of() {
        let section = Section::new(1).with_rows([Name("x"), Name("y")]);
        assert_eq!(section.index_of(&RowIdentifier::new::<Name>("y")), Some(1));
        assert_eq!(section.index_of(&RowIdentifier::new::<Name>("z")), None);
        assert_eq!(section.row(0).and_then(|row| row.element::<Name>()), Some(&Name("x")));
    }

    #[test]
    fn test_build_keeps_order() {
        let section = Section::build("letters", |section| {
            section.add(Name("a"));
            section.add_all([Name("b"), Name("c")]);
        });
        let names: Vec<_> = section
            .rows
            .iter()
            .filter_map(|row| row.element::<Name>())
            .map(|name| name.0)
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }
}
