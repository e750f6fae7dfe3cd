//! Core, non-public data structures for the container.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

/// A single cached instance.
///
/// The `Rc<T>` handle is boxed behind `dyn Any` for type erasure. Alongside it
/// lives the list of interface exposures declared for this instance at
/// registration time, which the container scans when a lookup misses on the
/// exact type.
pub(crate) struct CachedInstance {
  pub(crate) handle: Box<dyn Any>,
  pub(crate) exposures: Vec<Exposure>,
}

impl CachedInstance {
  pub(crate) fn new<T: ?Sized + Any>(handle: Rc<T>) -> Self {
    Self {
      handle: Box::new(handle),
      exposures: Vec::new(),
    }
  }
}

/// A registration-time declaration that a concrete instance is discoverable
/// under a trait-object type.
///
/// The cast thunk goes from the erased `Rc<C>` handle to a freshly erased
/// `Rc<I>` handle. It returns `None` if the stored handle is not actually an
/// `Rc<C>`, which only happens if the entry was replaced under our feet.
pub(crate) struct Exposure {
  pub(crate) interface: TypeId,
  cast: Box<dyn Fn(&dyn Any) -> Option<Box<dyn Any>>>,
}

impl Exposure {
  pub(crate) fn new<C: Any, I: ?Sized + Any>(cast: fn(Rc<C>) -> Rc<I>) -> Self {
    Self {
      interface: TypeId::of::<I>(),
      cast: Box::new(move |handle: &dyn Any| {
        let concrete = handle.downcast_ref::<Rc<C>>()?;
        let erased: Box<dyn Any> = Box::new(cast(Rc::clone(concrete)));
        Some(erased)
      }),
    }
  }

  pub(crate) fn apply(&self, handle: &dyn Any) -> Option<Box<dyn Any>> {
    (self.cast)(handle)
  }
}

/// An RAII guard to detect and prevent circular bean assembly.
///
/// When created, it adds the bean type to the container's assembly stack. If
/// the type is already present, assembly has re-entered itself and the guard
/// panics. When the guard is dropped, it removes the type from the stack.
pub(crate) struct AssemblyGuard<'a> {
  stack: &'a RefCell<HashSet<TypeId>>,
  key: TypeId,
}

impl<'a> AssemblyGuard<'a> {
  pub(crate) fn new(stack: &'a RefCell<HashSet<TypeId>>, key: TypeId, bean: &str) -> Self {
    // `insert` returns `false` if the type was already being assembled.
    if !stack.borrow_mut().insert(key) {
      panic!("Circular assembly detected while creating bean: {}", bean);
    }
    Self { stack, key }
  }
}

impl Drop for AssemblyGuard<'_> {
  fn drop(&mut self) {
    self.stack.borrow_mut().remove(&self.key);
  }
}
