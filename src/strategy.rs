//! Pattern 1 and 2: per-field copy strategies and the clone traits.
//!
//! A `Shared<T>` handle is how a root entity owns a sub-object that a
//! copy may either alias or rebuild. Copying a handle (`alias`) and
//! copying the value behind it (`reconstruct`) are the two strategies;
//! `ShallowClone` and `DeepClone` pick one per field.

use std::cell::RefCell;
use std::rc::Rc;

/// Single-threaded shared ownership with interior mutability. Mutations
/// through one handle are visible through every handle to the same
/// allocation.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a value in a fresh shared handle.
pub fn share<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// The shallow strategy for one field: copy the handle, not the value.
/// Both handles point at the same allocation afterwards.
pub fn alias<T>(handle: &Shared<T>) -> Shared<T> {
    Rc::clone(handle)
}

/// The deep strategy for one field: read the value and allocate a fresh
/// handle around a copy of it. The source handle is never mutated.
pub fn reconstruct<T: Clone>(handle: &Shared<T>) -> Shared<T> {
    Rc::new(RefCell::new(handle.borrow().clone()))
}

/// Identity check: do both handles point at the same allocation?
pub fn same_instance<T>(a: &Shared<T>, b: &Shared<T>) -> bool {
    Rc::ptr_eq(a, b)
}

/// A copy that duplicates primitive fields by value and aliases every
/// owned sub-object. Total: every implementor can always be copied.
pub trait ShallowClone {
    fn shallow_clone(&self) -> Self;
}

/// A copy that duplicates primitive fields by value and rebuilds every
/// owned sub-object behind a fresh handle. Total as well.
pub trait DeepClone {
    fn deep_clone(&self) -> Self;
}
