//! Shared fixtures for integration tests.

#![allow(dead_code)]

use horizon_listable::list::{Appearance, HeaderFooterElement, ItemElement, ListProperties};
use horizon_listable::table::{TableAppearance, TableCellElement, TableProperties};
use horizon_listable::{BackingView, Color, Key, Rect, Size, SizeConstraint};
use tracing_subscriber::EnvFilter;

/// Install a test subscriber; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Debug, Clone, PartialEq)]
pub struct Podcast {
    pub id: i64,
    pub title: String,
}

impl Podcast {
    pub fn new(id: i64, title: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
        }
    }
}

impl ItemElement for Podcast {
    fn identifier(&self) -> Key {
        Key::from(self.id)
    }

    fn is_equivalent(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Episode(pub u32);

impl ItemElement for Episode {
    fn identifier(&self) -> Key {
        Key::from(self.0)
    }

    fn is_equivalent(&self, other: &Self) -> bool {
        self == other
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Title(pub &'static str);

impl HeaderFooterElement for Title {
    fn is_equivalent(&self, other: &Self) -> bool {
        self == other
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Setting(pub &'static str);

impl TableCellElement for Setting {
    fn identifier(&self) -> Key {
        Key::from(self.0)
    }

    fn is_equivalent(&self, other: &Self) -> bool {
        self == other
    }
}

/// A list view that records what it was built and configured with.
///
/// Its content height is the number of rows times the default row height,
/// plus one default header height per header present.
#[derive(Debug)]
pub struct RecordingListView {
    pub frame: Rect,
    pub background: Color,
    pub row_height: f32,
    pub header_height: f32,
    pub configure_calls: usize,
    pub sections: Vec<(Key, usize)>,
    pub headers: usize,
}

impl BackingView for RecordingListView {
    type Properties = ListProperties;

    fn new(frame: Rect, appearance: &Appearance) -> Self {
        Self {
            frame,
            background: appearance.background_color,
            row_height: appearance.default_row_height,
            header_height: appearance.default_header_footer_height,
            configure_calls: 0,
            sections: Vec::new(),
            headers: 0,
        }
    }

    fn configure(&mut self, properties: &ListProperties) {
        let content = properties.content();
        self.configure_calls += 1;
        self.background = properties.appearance().background_color;
        self.sections = content
            .sections()
            .iter()
            .map(|section| (section.identifier.clone(), section.row_count()))
            .collect();
        self.headers = usize::from(content.header().is_some())
            + content
                .sections()
                .iter()
                .filter(|section| section.header.is_some())
                .count();
    }

    fn content_size(&mut self, constraint: &SizeConstraint) -> Size {
        let rows: usize = self.sections.iter().map(|(_, rows)| rows).sum();
        let height = rows as f32 * self.row_height + self.headers as f32 * self.header_height;
        Size::new(constraint.width.bound().unwrap_or(self.frame.width()), height)
    }
}

/// Table counterpart of [`RecordingListView`].
#[derive(Debug)]
pub struct RecordingTableView {
    pub frame: Rect,
    pub row_height: f32,
    pub configure_calls: usize,
    pub rows: usize,
}

impl BackingView for RecordingTableView {
    type Properties = TableProperties;

    fn new(frame: Rect, appearance: &TableAppearance) -> Self {
        Self {
            frame,
            row_height: appearance.default_row_height,
            configure_calls: 0,
            rows: 0,
        }
    }

    fn configure(&mut self, properties: &TableProperties) {
        self.configure_calls += 1;
        self.rows = properties.content().row_count();
    }

    fn content_size(&mut self, constraint: &SizeConstraint) -> Size {
        Size::new(
            constraint.width.bound().unwrap_or(self.frame.width()),
            self.rows as f32 * self.row_height,
        )
    }
}
