//! Sizing policies for elements backed by scrollable views.

use serde::{Deserialize, Serialize};

/// How a list or table element is measured by the host layout.
///
/// ```text
/// FillAvailableSpace:        MeasureContent:
/// ┌───────────┐              ┌───────────┐
/// │┌─────────┐│              │           │
/// ││         ││              │           │
/// ││         ││              │┌─────────┐│
/// ││         ││              ││         ││
/// ││         ││              ││         ││
/// │└─────────┘│              │└─────────┘│
/// └───────────┘              └───────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sizing {
    /// Take all the space the parent offers, regardless of content.
    ///
    /// Use this when the list fills a screen, for example inside a
    /// navigation or tab container.
    #[default]
    FillAvailableSpace,

    /// Measure the content within the offered space and report that size.
    ///
    /// Suited to sheets and popovers that should be as small as possible.
    ///
    /// **Note**: the measured size can be 0 for empty content, or far taller
    /// than the screen for long content. Wrap the element in a size-clamping
    /// element when using this mode.
    MeasureContent,
}

impl Sizing {
    /// Returns `true` if this policy consults the backing view.
    #[inline]
    pub fn measures_content(self) -> bool {
        matches!(self, Self::MeasureContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fills() {
        assert_eq!(Sizing::default(), Sizing::FillAvailableSpace);
        assert!(!Sizing::default().measures_content());
        assert!(Sizing::MeasureContent.measures_content());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Sizing::MeasureContent).unwrap();
        assert_eq!(json, "\"measure_content\"");

        let sizing: Sizing = serde_json::from_str("\"fill_available_space\"").unwrap();
        assert_eq!(sizing, Sizing::FillAvailableSpace);
    }
}
