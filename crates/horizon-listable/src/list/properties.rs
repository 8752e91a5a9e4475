//! The complete description handed to a list backing view.
//!
//! [`ListProperties`] bundles a [`Content`] snapshot with visual
//! [`Appearance`] and interaction [`Behavior`]. It is built once through a
//! configuration closure and never mutated afterwards.
//!
//! Appearance and behavior derive serde traits so list styling can be
//! loaded from application settings:
//!
//! ```
//! use horizon_listable::list::Appearance;
//!
//! let appearance: Appearance = serde_json::from_str(r#"{ "row_spacing": 8.0 }"#).unwrap();
//! assert_eq!(appearance.row_spacing, 8.0);
//! assert_eq!(appearance.default_row_height, 50.0);
//! ```

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use horizon_listable_core::logging::targets;
use horizon_listable_core::{Color, EdgeInsets, ViewProperties};

use super::builder::ContentBuilder;
use super::content::Content;
use super::section::Section;

/// Scrolling direction of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    /// Rows stack top to bottom.
    #[default]
    Vertical,
    /// Rows stack leading to trailing.
    Horizontal,
}

/// Visual settings of a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    /// Color behind all content.
    pub background_color: Color,
    /// Scrolling direction.
    pub direction: LayoutDirection,
    /// Padding around the whole content.
    pub content_insets: EdgeInsets,
    /// Gap between rows of one section.
    pub row_spacing: f32,
    /// Gap between sections.
    pub section_spacing: f32,
    /// Height of rows using the default sizing.
    pub default_row_height: f32,
    /// Height of headers and footers using the default sizing.
    pub default_header_footer_height: f32,
    /// Whether scroll indicators are shown.
    pub shows_scroll_indicators: bool,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            background_color: Color::WHITE,
            direction: LayoutDirection::Vertical,
            content_insets: EdgeInsets::ZERO,
            row_spacing: 0.0,
            section_spacing: 0.0,
            default_row_height: 50.0,
            default_header_footer_height: 60.0,
            shows_scroll_indicators: true,
        }
    }
}

/// How many rows can be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Selection is disabled.
    None,
    /// Selecting a row deselects the previous one.
    #[default]
    Single,
    /// Any number of rows can be selected.
    Multiple,
}

/// When the on-screen keyboard is dismissed by scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyboardDismissMode {
    /// Scrolling never dismisses the keyboard.
    None,
    /// The keyboard is dismissed when a drag begins.
    #[default]
    OnDrag,
    /// The keyboard follows the drag and can be pulled back up.
    Interactive,
}

/// Where content shorter than the viewport is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnderflowAlignment {
    /// Pin to the start of the scroll axis.
    #[default]
    Top,
    /// Center along the scroll axis.
    Center,
    /// Pin to the end of the scroll axis.
    Bottom,
}

/// Interaction settings of a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Behavior {
    /// Row selection.
    pub selection_mode: SelectionMode,
    /// Keyboard handling while scrolling.
    pub keyboard_dismiss_mode: KeyboardDismissMode,
    /// Placement of short content.
    pub underflow: UnderflowAlignment,
    /// Whether short content still bounces when dragged.
    pub always_bounce: bool,
    /// Whether touches on rows are delayed until scrolling is ruled out.
    pub delays_content_touches: bool,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            selection_mode: SelectionMode::Single,
            keyboard_dismiss_mode: KeyboardDismissMode::OnDrag,
            underflow: UnderflowAlignment::Top,
            always_bounce: true,
            delays_content_touches: true,
        }
    }
}

/// Mutable form of [`ListProperties`] handed to configuration closures.
#[derive(Debug, Clone)]
pub struct ListPropertiesBuilder {
    /// Sections, header, and footer.
    pub content: ContentBuilder,
    /// Visual settings.
    pub appearance: Appearance,
    /// Interaction settings.
    pub behavior: Behavior,
    /// Whether content changes are animated.
    pub animates_changes: bool,
    /// Identifier exposed to accessibility tooling.
    pub accessibility_identifier: Option<String>,
    /// Name shown in debugging output.
    pub debugging_identifier: Option<String>,
}

impl Default for ListPropertiesBuilder {
    fn default() -> Self {
        Self {
            content: ContentBuilder::new(),
            appearance: Appearance::default(),
            behavior: Behavior::default(),
            animates_changes: true,
            accessibility_identifier: None,
            debugging_identifier: None,
        }
    }
}

impl ListPropertiesBuilder {
    /// Append a section to the content.
    pub fn add(&mut self, section: Section) {
        self.content.add(section);
    }

    /// Append sections to the content.
    pub fn add_all(&mut self, sections: impl IntoIterator<Item = Section>) {
        self.content.add_all(sections);
    }

    /// Freeze into properties.
    pub fn build(self) -> ListProperties {
        ListProperties {
            content: self.content.into_content(),
            appearance: self.appearance,
            behavior: self.behavior,
            animates_changes: self.animates_changes,
            accessibility_identifier: self.accessibility_identifier,
            debugging_identifier: self.debugging_identifier,
        }
    }
}

impl AddAssign<Section> for ListPropertiesBuilder {
    fn add_assign(&mut self, section: Section) {
        self.add(section);
    }
}

impl AddAssign<Vec<Section>> for ListPropertiesBuilder {
    fn add_assign(&mut self, sections: Vec<Section>) {
        self.add_all(sections);
    }
}

/// Immutable description of a list: content, appearance, and behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct ListProperties {
    content: Content,
    appearance: Appearance,
    behavior: Behavior,
    animates_changes: bool,
    accessibility_identifier: Option<String>,
    debugging_identifier: Option<String>,
}

impl ListProperties {
    /// Build properties by running `configure` once against defaults.
    pub fn build(configure: impl FnOnce(&mut ListPropertiesBuilder)) -> Self {
        let mut builder = ListPropertiesBuilder::default();
        configure(&mut builder);
        let properties = builder.build();
        tracing::trace!(
            target: targets::BUILDER,
            sections = properties.content.sections().len(),
            rows = properties.content.row_count(),
            "built list properties"
        );
        properties
    }

    /// The content snapshot.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Visual settings.
    pub fn appearance(&self) -> &Appearance {
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

    /// Identifier exposed to accessibility tooling.
    pub fn accessibility_identifier(&self) -> Option<&str> {
        self.accessibility_identifier.as_deref()
    }

    /// Name shown in debugging output.
    pub fn debugging_identifier(&self) -> Option<&str> {
        self.debugging_identifier.as_deref()
    }
}

impl Default for ListProperties {
    fn default() -> Self {
        ListPropertiesBuilder::default().build()
    }
}

impl ViewProperties for ListProperties {
    type Appearance = Appearance;

    fn appearance(&self) -> &Appearance {
        &self.appearance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let properties = ListProperties::default();
        assert!(properties.content().is_empty());
        assert!(properties.animates_changes());
        assert_eq!(properties.appearance().default_row_height, 50.0);
        assert_eq!(properties.appearance().default_header_footer_height, 60.0);
        assert_eq!(properties.behavior().selection_mode, SelectionMode::Single);
        assert_eq!(properties.debugging_identifier(), None);
    }

    #[test]
    fn test_build_runs_closure_once() {
        let mut calls = 0;
        let properties = ListProperties::build(|list| {
            calls += 1;
            list.animates_changes = false;
            list.appearance.row_spacing = 4.0;
            list.behavior.underflow = UnderflowAlignment::Center;
            list.debugging_identifier = Some("settings".into());
            *list += Section::new("a");
            *list += vec![Section::new("b"), Section::new("c")];
        });

        assert_eq!(calls, 1);
        assert!(!properties.animates_changes());
        assert_eq!(properties.appearance().row_spacing, 4.0);
        assert_eq!(properties.behavior().underflow, UnderflowAlignment::Center);
        assert_eq!(properties.debugging_identifier(), Some("settings"));
        assert_eq!(properties.content().sections().len(), 3);
    }

    #[test]
    fn test_view_properties_appearance() {
        let properties = ListProperties::build(|list| {
            list.appearance.direction = LayoutDirection::Horizontal;
        });
        assert_eq!(
            ViewProperties::appearance(&properties).direction,
            LayoutDirection::Horizontal
        );
    }

    #[test]
    fn test_behavior_from_json() {
        let behavior: Behavior =
            serde_json::from_str(r#"{ "selection_mode": "multiple", "always_bounce": false }"#)
                .unwrap();
        assert_eq!(behavior.selection_mode, SelectionMode::Multiple);
        assert!(!behavior.always_bounce);
        assert_eq!(behavior.keyboard_dismiss_mode, KeyboardDismissMode::OnDrag);
    }
}
