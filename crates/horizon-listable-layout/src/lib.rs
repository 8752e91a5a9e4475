//! Layout-tree adapter for Horizon Listable.
//!
//! This crate connects immutable list and table snapshots to a host
//! declarative layout system:
//!
//! - [`Element`] and [`ElementContent`]: the measurement contract of a layout
//!   node
//! - [`ViewDescription`] and [`ViewHandle`]: how a node's native view is
//!   created and updated
//! - [`Sizing`]: fill the offered space, or measure the content
//! - [`ContentMeasurer`]: injectable off-screen measurement of backing views
//! - [`BackedElement`]: the generic element used by `List` and `Table`
//!
//! # Example
//!
//! ```ignore
//! use horizon_listable_layout::{BackedElement, Element, Sizing};
//! use horizon_listable_core::SizeConstraint;
//!
//! let element = BackedElement::<PlatformListView>::new(properties, Sizing::MeasureContent);
//! let size = element.content().measure(&SizeConstraint::new(320.0, f32::INFINITY));
//! ```

pub mod adapter;
pub mod description;
pub mod element;
pub mod measurement;
pub mod sizing;

pub use adapter::BackedElement;
pub use description::{ViewDescription, ViewHandle};
pub use element::{Element, ElementContent, MeasureFn};
pub use measurement::{ContentMeasurer, MeasurementPolicy};
pub use sizing::Sizing;

static_assertions::assert_impl_all!(ElementContent: Send, Sync);
static_assertions::assert_impl_all!(ViewDescription: Send, Sync);
static_assertions::assert_impl_all!(ViewHandle: Send);
