//! Lazily resolved values
//!
//! `ValueOrFn` holds either a literal or a function of some argument that is
//! only evaluated at render time. This lets callers render content that
//! depends on the snapshot it belongs to (elapsed time, a counter, a status
//! string) without deriving a new snapshot for every change.

use std::fmt;
use std::rc::Rc;

/// A literal value or a function computing it from an argument
pub enum ValueOrFn<T, A: ?Sized> {
    /// A literal value
    Value(T),
    /// A function evaluated with the argument at resolution time
    Computed(Rc<dyn Fn(&A) -> T>),
}

impl<T, A: ?Sized> ValueOrFn<T, A> {
    /// Wrap a function
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&A) -> T + 'static,
    {
        ValueOrFn::Computed(Rc::new(f))
    }

    /// Check if this is a literal (never changes)
    pub fn is_static(&self) -> bool {
        matches!(self, ValueOrFn::Value(_))
    }
}

impl<T: Clone, A: ?Sized> ValueOrFn<T, A> {
    /// Resolve the current value
    pub fn resolve(&self, arg: &A) -> T {
        match self {
            ValueOrFn::Value(v) => v.clone(),
            ValueOrFn::Computed(f) => f(arg),
        }
    }
}

impl<T: Clone, A: ?Sized> Clone for ValueOrFn<T, A> {
    fn clone(&self) -> Self {
        match self {
            ValueOrFn::Value(v) => ValueOrFn::Value(v.clone()),
            ValueOrFn::Computed(f) => ValueOrFn::Computed(Rc::clone(f)),
        }
    }
}

impl<T: fmt::Debug, A: ?Sized> fmt::Debug for ValueOrFn<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueOrFn::Value(v) => f.debug_tuple("Value").field(v).finish(),
            ValueOrFn::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

impl<T, A: ?Sized> From<T> for ValueOrFn<T, A> {
    fn from(value: T) -> Self {
        ValueOrFn::Value(value)
    }
}
