//! Headers and footers for lists and sections.

use std::any::Any;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::item::{HeaderFooterElement, ReuseIdentifier};

/// How tall a header or footer is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderFooterSizing {
    /// Use the list's default header/footer height.
    #[default]
    Default,
    /// Always use exactly this height.
    Fixed(f32),
    /// Use the content's natural height, clamped to `min` and `max`.
    ThatFits {
        /// Smallest allowed height.
        min: f32,
        /// Largest allowed height, if any.
        max: Option<f32>,
    },
}

impl HeaderFooterSizing {
    /// Resolve a final height from the list default and the natural height.
    pub fn resolve(self, default_height: f32, natural_height: f32) -> f32 {
        match self {
            Self::Default => default_height,
            Self::Fixed(height) => height,
            Self::ThatFits { min, max } => {
                let height = natural_height.max(min);
                max.map_or(height, |max| height.min(max))
            }
        }
    }
}

/// A header or footer wrapping typed content.
#[derive(Debug, Clone)]
pub struct HeaderFooter<E: HeaderFooterElement> {
    /// The content shown.
    pub element: E,
    /// Height policy.
    pub sizing: HeaderFooterSizing,
    /// Recycling group, defaulting to the element type's.
    pub reuse_identifier: ReuseIdentifier,
}

impl<E: HeaderFooterElement> HeaderFooter<E> {
    /// Wrap `element` with default metadata.
    pub fn new(element: E) -> Self {
        Self {
            element,
            sizing: HeaderFooterSizing::Default,
            reuse_identifier: E::reuse_identifier(),
        }
    }

    /// Set the height policy.
    pub fn with_sizing(mut self, sizing: HeaderFooterSizing) -> Self {
        self.sizing = sizing;
        self
    }

    /// Whether both header/footers render identically.
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.sizing == other.sizing
            && self.reuse_identifier == other.reuse_identifier
            && self.element.is_equivalent(&other.element)
    }
}

trait ErasedHeaderFooter: fmt::Debug + Send + Sync {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn sizing(&self) -> HeaderFooterSizing;
    fn reuse_identifier(&self) -> ReuseIdentifier;
    fn is_equivalent(&self, other: &dyn ErasedHeaderFooter) -> bool;
    fn clone_box(&self) -> Box<dyn ErasedHeaderFooter>;
}

impl<E: HeaderFooterElement> ErasedHeaderFooter for HeaderFooter<E> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn sizing(&self) -> HeaderFooterSizing {
        self.sizing
    }

    fn reuse_identifier(&self) -> ReuseIdentifier {
        self.reuse_identifier
    }

    fn is_equivalent(&self, other: &dyn ErasedHeaderFooter) -> bool {
        other
            .as_any()
            .downcast_ref::<HeaderFooter<E>>()
            .is_some_and(|other| HeaderFooter::is_equivalent(self, other))
    }

    fn clone_box(&self) -> Box<dyn ErasedHeaderFooter> {
        Box::new(self.clone())
    }
}

/// A header or footer whose element type has been erased.
pub struct AnyHeaderFooter {
    inner: Box<dyn ErasedHeaderFooter>,
}

impl AnyHeaderFooter {
    /// Erase the element type of `header_footer`.
    pub fn new<E: HeaderFooterElement>(header_footer: HeaderFooter<E>) -> Self {
        Self {
            inner: Box::new(header_footer),
        }
    }

    /// The height policy.
    pub fn sizing(&self) -> HeaderFooterSizing {
        self.inner.sizing()
    }

    /// The recycling group.
    pub fn reuse_identifier(&self) -> ReuseIdentifier {
        self.inner.reuse_identifier()
    }

    /// Borrow the typed header/footer, if it holds an `E`.
    pub fn header_footer<E: HeaderFooterElement>(&self) -> Option<&HeaderFooter<E>> {
        self.inner.as_any().downcast_ref()
    }

    /// Mutably borrow the typed header/footer, if it holds an `E`.
    pub fn header_footer_mut<E: HeaderFooterElement>(&mut self) -> Option<&mut HeaderFooter<E>> {
        self.inner.as_any_mut().downcast_mut()
    }

    /// Borrow the element, if it is an `E`.
    pub fn element<E: HeaderFooterElement>(&self) -> Option<&E> {
        self.header_footer::<E>().map(|hf| &hf.element)
    }

    /// Whether both hold the same element type and render identically.
    pub fn is_equivalent(&self, other: &AnyHeaderFooter) -> bool {
        self.inner.is_equivalent(other.inner.as_ref())
    }
}

impl Clone for AnyHeaderFooter {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_box(),
        }
    }
}

impl PartialEq for AnyHeaderFooter {
    fn eq(&self, other: &Self) -> bool {
        self.is_equivalent(other)
    }
}

impl fmt::Debug for AnyHeaderFooter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.fmt(f)
    }
}

impl<E: HeaderFooterElement> From<HeaderFooter<E>> for AnyHeaderFooter {
    fn from(header_footer: HeaderFooter<E>) -> Self {
        Self::new(header_footer)
    }
}

impl<E: HeaderFooterElement> From<E> for AnyHeaderFooter {
    fn from(element: E) -> Self {
        Self::new(HeaderFooter::new(element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Caption(&'static str);

    impl HeaderFooterElement for Caption {
        fn is_equivalent(&self, other: &Self) -> bool {
            self == other
        }
    }

    #[test]
    fn test_erasure_round_trip() {
        let header = AnyHeaderFooter::from(Caption("Recent"));
        assert_eq!(header.element::<Caption>(), Some(&Caption("Recent")));
        assert_eq!(header.sizing(), HeaderFooterSizing::Default);
        assert_eq!(header.reuse_identifier(), ReuseIdentifier::of::<Caption>());
    }

    #[test]
    fn test_equivalence() {
        let a = AnyHeaderFooter::from(Caption("Recent"));
        let b = AnyHeaderFooter::from(HeaderFooter::new(Caption("Recent")));
        let c = AnyHeaderFooter::from(
            HeaderFooter::new(Caption("Recent")).with_sizing(HeaderFooterSizing::Fixed(30.0)),
        );
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_sizing_resolve() {
        let fits = HeaderFooterSizing::ThatFits {
            min: 20.0,
            max: None,
        };
        assert_eq!(fits.resolve(60.0, 5.0), 20.0);
        assert_eq!(HeaderFooterSizing::Default.resolve(60.0, 5.0), 60.0);
    }
}
