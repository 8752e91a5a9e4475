//! Traits implemented by application content shown in a list.
//!
//! Rows and header/footers wrap plain Rust values. Those values implement
//! [`ItemElement`] or [`HeaderFooterElement`] to tell the list how they are
//! identified and when two versions render the same.
//!
//! # Example
//!
//! ```
//! use horizon_listable::list::ItemElement;
//! use horizon_listable::Key;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct PodcastRow {
//!     id: i64,
//!     title: String,
//! }
//!
//! impl ItemElement for PodcastRow {
//!     fn identifier(&self) -> Key {
//!         Key::from(self.id)
//!     }
//!
//!     fn is_equivalent(&self, other: &Self) -> bool {
//!         self == other
//!     }
//! }
//! ```

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use horizon_listable_core::Key;

/// Groups views that can be recycled for one another.
///
/// By default every element type gets its own reuse identifier derived from
/// its Rust type.
#[derive(Clone, Copy)]
pub struct ReuseIdentifier {
    type_id: TypeId,
    name: &'static str,
}

impl ReuseIdentifier {
    /// The reuse identifier for values of type `T`.
    pub fn of<T: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The type name this identifier was derived from.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ReuseIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ReuseIdentifier {}

impl Hash for ReuseIdentifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for ReuseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReuseIdentifier({})", self.name)
    }
}

/// Content displayed by one row of a list.
pub trait ItemElement: fmt::Debug + Clone + Send + Sync + 'static {
    /// Identity of this value within its section.
    ///
    /// Must stay the same across configurations for the same logical item.
    fn identifier(&self) -> Key;

    /// Whether `self` and `other` render identically.
    ///
    /// Used to compare snapshots; rows that are equivalent are not
    /// reapplied by the backing view.
    fn is_equivalent(&self, other: &Self) -> bool;

    /// The reuse group of rows displaying this type.
    fn reuse_identifier() -> ReuseIdentifier
    where
        Self: Sized,
    {
        ReuseIdentifier::of::<Self>()
    }
}

/// Content displayed in a list or section header or footer.
pub trait HeaderFooterElement: fmt::Debug + Clone + Send + Sync + 'static {
    /// Whether `self` and `other` render identically.
    fn is_equivalent(&self, other: &Self) -> bool;

    /// The reuse group of header/footers displaying this type.
    fn reuse_identifier() -> ReuseIdentifier
    where
        Self: Sized,
    {
        ReuseIdentifier::of::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct A;

    #[derive(Debug, Clone)]
    struct B;

    #[test]
    fn test_reuse_identifier_per_type() {
        assert_eq!(ReuseIdentifier::of::<A>(), ReuseIdentifier::of::<A>());
        assert_ne!(ReuseIdentifier::of::<A>(), ReuseIdentifier::of::<B>());
        assert!(ReuseIdentifier::of::<A>().name().ends_with("A"));
    }
}
