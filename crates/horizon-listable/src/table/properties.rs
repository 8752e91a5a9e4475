//! The complete description handed to a table backing view.

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use horizon_listable_core::logging::targets;
use horizon_listable_core::{Color, EdgeInsets, ViewProperties};

use super::builder::TableContentBuilder;
use super::content::TableContent;
use super::section::TableSection;
use crate::list::Behavior;

/// Overall presentation of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStyle {
    /// Edge-to-edge rows with floating section headers.
    #[default]
    Plain,
    /// Sections drawn as separate inset groups.
    Grouped,
}

/// How rows are separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparatorStyle {
    /// No separators.
    None,
    /// A hairline between rows.
    #[default]
    SingleLine,
}

/// Visual settings of a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableAppearance {
    /// Presentation style.
    pub style: TableStyle,
    /// Color behind all content.
    pub background_color: Color,
    /// Separator drawing.
    pub separator_style: SeparatorStyle,
    /// Separator color.
    pub separator_color: Color,
    /// Insets applied to separators.
    pub separator_insets: EdgeInsets,
    /// Height of rows using the default sizing.
    pub default_row_height: f32,
    /// Height of headers and footers using the default sizing.
    pub default_header_footer_height: f32,
}

impl Default for TableAppearance {
    fn default() -> Self {
        Self {
            style: TableStyle::Plain,
            background_color: Color::WHITE,
            separator_style: SeparatorStyle::SingleLine,
            separator_color: Color::from_rgba8(60, 60, 67, 74),
            separator_insets: EdgeInsets::new(15.0, 0.0, 0.0, 0.0),
            default_row_height: 44.0,
            default_header_footer_height: 28.0,
        }
    }
}

/// Mutable form of [`TableProperties`] handed to configuration closures.
#[derive(Debug, Clone)]
pub struct TablePropertiesBuilder {
    /// Sections, header, and footer.
    pub content: TableContentBuilder,
    /// Visual settings.
    pub appearance: TableAppearance,
    /// Interaction settings.
    pub behavior: Behavior,
    /// Whether content changes are animated.
    pub animates_changes: bool,
}

impl Default for TablePropertiesBuilder {
    fn default() -> Self {
        Self {
            content: TableContentBuilder::new(),
            appearance: TableAppearance::default(),
            behavior: Behavior::default(),
            animates_changes: true,
        }
    }
}

impl TablePropertiesBuilder {
    /// Append a section to the content.
    pub fn add(&mut self, section: TableSection) {
        self.content.add(section);
    }

    /// Append sections to the content.
    pub fn add_all(&mut self, sections: impl IntoIterator<Item = TableSection>) {
        self.content.add_all(sections);
    }

    /// Freeze into properties.
    pub fn build(self) -> TableProperties {
        TableProperties {
            content: self.content.into_content(),
            appearance: self.appearance,
            behavior: self.behavior,
            animates_changes: self.animates_changes,
        }
    }
}

impl AddAssign<TableSection> for TablePropertiesBuilder {
    fn add_assign(&mut self, section: TableSection) {
        self.add(section);
    }
}

impl AddAssign<Vec<TableSection>> for TablePropertiesBuilder {
    fn add_assign(&mut self, sections: Vec<TableSection>) {
        self.add_all(sections);
    }
}

/// Immutable description of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableProperties {
    content: TableContent,
    appearance: TableAppearance,
    behavior: Behavior,
    animates_changes: bool,
}

impl TableProperties {
    /// Build properties by running `configure` once against defaults.
    pub fn build(configure: impl FnOnce(&mut TablePropertiesBuilder)) -> Self {
        let mut builder = TablePropertiesBuilder::default();
        configure(&mut builder);
        let properties = builder.build();
        tracing::trace!(
            target: targets::BUILDER,
            sections = properties.content.sections().len(),
            rows = properties.content.row_count(),
            "built table properties"
        );
        properties
    }

    /// The content snapshot.
    pub fn content(&self) -> &TableContent {
        &self.content
    }

    /// Visual settings.
    pub fn appearance(&self) -> &TableAppearance {
        &self.appearance
    }

    /// Interaction settings.
    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// Whether content changes are animated.
    pub fn animates_changes(&self) -> bool {
        self.animates_changes
    }
}

impl Default for TableProperties {
    fn default() -> Self {
        TablePropertiesBuilder::default().build()
    }
}

impl ViewProperties for TableProperties {
    type Appearance = TableAppearance;

    fn appearance(&self) -> &TableAppearance {
        &self.appearance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let properties = TableProperties::default();
        assert!(properties.content().is_empty());
        assert_eq!(properties.appearance().style, TableStyle::Plain);
        assert_eq!(properties.appearance().default_row_height, 44.0);
        assert!(properties.animates_changes());
    }

    #[test]
    fn test_appearance_from_json() {
        let appearance: TableAppearance =
            serde_json::from_str(r#"{ "style": "grouped", "separator_style": "none" }"#).unwrap();
        assert_eq!(appearance.style, TableStyle::Grouped);
        assert_eq!(appearance.separator_style, SeparatorStyle::None);
        assert_eq!(appearance.default_header_footer_height, 28.0);
    }

    #[test]
    fn test_build() {
        let properties = TableProperties::build(|table| {
            table.appearance.style = TableStyle::Grouped;
            *table += TableSection::new("general");
        });
        assert_eq!(properties.content().sections().len(), 1);
        assert_eq!(properties.appearance().style, TableStyle::Grouped);
    }
}
