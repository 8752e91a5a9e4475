//! Descriptions of native views backing layout elements.
//!
//! A [`ViewDescription`] pairs two closures for one concrete view type:
//! a *build* closure that creates a fresh view, and an *apply* closure that
//! pushes the element's current state onto an existing view. The host layout
//! system keeps the native views; elements only hand out descriptions.
//!
//! ```text
//!  first layout pass            later layout passes
//!  ─────────────────            ───────────────────
//!  description.build()          description.is_compatible(&handle)?
//!     ├─ build closure             ├─ yes: description.apply(&mut handle)
//!     └─ apply closure             └─ no:  description.build()
//! ```
//!
//! Because creation always ends with the same apply closure used for
//! updates, a description applied repeatedly with unchanged state leaves the
//! view unchanged.

use std::any::{Any, TypeId};
use std::fmt;

use horizon_listable_core::logging::targets;
use horizon_listable_core::{ListableError, ListableResult};

type BuildFn = dyn Fn() -> Box<dyn Any + Send> + Send + Sync;
type ApplyFn = dyn Fn(&mut (dyn Any + Send + 'static)) + Send + Sync;

/// An owned, type-erased native view created from a [`ViewDescription`].
pub struct ViewHandle {
    view: Box<dyn Any + Send>,
    type_id: TypeId,
    type_name: &'static str,
}

impl ViewHandle {
    /// Wrap an existing view.
    pub fn new<V: Any + Send>(view: V) -> Self {
        Self {
            view: Box::new(view),
            type_id: TypeId::of::<V>(),
            type_name: std::any::type_name::<V>(),
        }
    }

    /// The type name of the wrapped view.
    pub fn view_type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check whether the wrapped view is a `V`.
    pub fn is<V: Any>(&self) -> bool {
        self.type_id == TypeId::of::<V>()
    }

    /// Borrow the wrapped view as a `V`.
    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        self.view.downcast_ref::<V>()
    }

    /// Mutably borrow the wrapped view as a `V`.
    pub fn downcast_mut<V: Any>(&mut self) -> Option<&mut V> {
        self.view.downcast_mut::<V>()
    }

    /// Take the wrapped view out as a `V`, or get the handle back on mismatch.
    pub fn into_inner<V: Any>(self) -> Result<V, Self> {
        if !self.is::<V>() {
            return Err(self);
        }
        let Self {
            view,
            type_id,
            type_name,
        } = self;
        match view.downcast::<V>() {
            Ok(view) => Ok(*view),
            Err(view) => Err(Self {
                view,
                type_id,
                type_name,
            }),
        }
    }
}

impl fmt::Debug for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewHandle")
            .field("view_type", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// How to create and update the native view behind an element.
pub struct ViewDescription {
    view_type: TypeId,
    view_type_name: &'static str,
    build: Box<BuildFn>,
    apply: Box<ApplyFn>,
}

impl ViewDescription {
    /// Describe a view of type `V`.
    ///
    /// `build` creates a fresh view; `apply` configures an existing one.
    /// [`build`](Self::build) runs both, so initial creation and updates go
    /// through the same configuration path.
    pub fn new<V, B, A>(build: B, apply: A) -> Self
    where
        V: Any + Send,
        B: Fn() -> V + Send + Sync + 'static,
        A: Fn(&mut V) + Send + Sync + 'static,
    {
        Self {
            view_type: TypeId::of::<V>(),
            view_type_name: std::any::type_name::<V>(),
            build: Box::new(move || -> Box<dyn Any + Send> { Box::new(build()) }),
            apply: Box::new(move |view: &mut (dyn Any + Send + 'static)| {
                if let Some(view) = view.downcast_mut::<V>() {
                    apply(view);
                }
            }),
        }
    }

    /// The type name of the described view.
    pub fn view_type_name(&self) -> &'static str {
        self.view_type_name
    }

    /// Check whether `handle` holds a view this description can update.
    pub fn is_compatible(&self, handle: &ViewHandle) -> bool {
        handle.type_id == self.view_type
    }

    /// Create a fresh view and apply this description to it.
    pub fn build(&self) -> ViewHandle {
        tracing::trace!(
            target: targets::DESCRIPTION,
            view_type = self.view_type_name,
            "building backing view"
        );
        let mut view = (self.build)();
        (self.apply)(&mut *view);
        ViewHandle {
            view,
            type_id: self.view_type,
            type_name: self.view_type_name,
        }
    }

    /// Apply this description to an existing view.
    ///
    /// # Errors
    ///
    /// Returns [`ListableError::ViewTypeMismatch`] if `handle` holds a view
    /// of a different type; the view is left untouched.
    pub fn apply(&self, handle: &mut ViewHandle) -> ListableResult<()> {
        if !self.is_compatible(handle) {
            return Err(ListableError::ViewTypeMismatch {
                expected: self.view_type_name,
                found: handle.type_name,
            });
        }
        tracing::trace!(
            target: targets::DESCRIPTION,
            view_type = self.view_type_name,
            "updating backing view"
        );
        (self.apply)(&mut *handle.view);
        Ok(())
    }

    /// Update `handle` in place when compatible, or replace it with a fresh view.
    ///
    /// Returns `true` if a new view was built.
    pub fn update_or_rebuild(&self, handle: &mut ViewHandle) -> bool {
        if self.apply(handle).is_ok() {
            false
        } else {
            *handle = self.build();
            true
        }
    }
}

impl fmt::Debug for ViewDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewDescription")
            .field("view_type", &self.view_type_name)
            .finish_non_exhaustive()
    }
}
