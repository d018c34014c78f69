//! `RelinkableHandle<T>` — a shared, rebindable reference to a value.
//!
//! A model holds a handle to the market term structure rather than owning
//! the curve itself: the embedding application can relink the handle to a
//! fresh curve at any time and every holder of a clone observes the new
//! value on its next read.  The handle may also be null (unlinked), in
//! which case reads return `None` and consumers surface
//! [`Error::NoTermStructure`][crate::errors::Error::NoTermStructure].
//!
//! `T` may be unsized (`RelinkableHandle<dyn Trait>`); use
//! [`from_arc`](RelinkableHandle::from_arc) / [`link_to_arc`](RelinkableHandle::link_to_arc)
//! with a coerced `Arc` in that case.

use std::sync::{Arc, Mutex};

/// A shared reference whose contained value can be relinked at runtime.
///
/// The internal pointer is protected by a `Mutex` so that relinking from one
/// thread is visible to all threads holding a clone of this handle.
pub struct RelinkableHandle<T: ?Sized> {
    inner: Arc<Mutex<Option<Arc<T>>>>,
}

impl<T: ?Sized> RelinkableHandle<T> {
    /// Create a new relinkable handle, initially null.
    pub fn null() -> Self {
        Self {
            inner: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a new relinkable handle wrapping an existing `Arc`.
    pub fn from_arc(arc: Arc<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(arc))),
        }
    }

    /// Replace the contained value with an existing `Arc`.
    pub fn link_to_arc(&self, arc: Arc<T>) {
        let mut guard = self.inner.lock().expect("RelinkableHandle mutex poisoned");
        *guard = Some(arc);
    }

    /// Detach the handle from any value (make it null).
    pub fn unlink(&self) {
        let mut guard = self.inner.lock().expect("RelinkableHandle mutex poisoned");
        *guard = None;
    }

    /// Return `true` if the handle currently contains no value.
    pub fn is_empty(&self) -> bool {
        self.inner
            .lock()
            .expect("RelinkableHandle mutex poisoned")
            .is_none()
    }

    /// Execute a closure with a reference to the contained value.
    ///
    /// Returns `None` if the handle is null.
    pub fn with<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        let guard = self.inner.lock().expect("RelinkableHandle mutex poisoned");
        guard.as_deref().map(f)
    }

    /// Obtain a snapshot `Arc<T>` of the current value.
    ///
    /// Returns `None` if the handle is null.
    pub fn current(&self) -> Option<Arc<T>> {
        let guard = self.inner.lock().expect("RelinkableHandle mutex poisoned");
        guard.clone()
    }
}

impl<T> RelinkableHandle<T> {
    /// Create a new relinkable handle wrapping `value`.
    pub fn new(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Replace the contained value with `value`.
    pub fn link_to(&self, value: T) {
        self.link_to_arc(Arc::new(value));
    }
}

// Manual impls: derive would require `T: Clone` / `T: Default` / `T: Debug`
// even though only the Arc is cloned.

impl<T: ?Sized> Clone for RelinkableHandle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> Default for RelinkableHandle<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: ?Sized> std::fmt::Debug for RelinkableHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            write!(f, "RelinkableHandle(null)")
        } else {
            write!(f, "RelinkableHandle(..)")
        }
    }
}
