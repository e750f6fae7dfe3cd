//! The main `Container` struct and its associated methods.

use crate::core::{AssemblyGuard, CachedInstance, Exposure};
use crate::wire::{InitError, Wire};
use log::{debug, trace};
use std::any::{type_name, Any, TypeId};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// The autowiring test-support container.
///
/// This struct holds pre-built instances keyed by their exact type, named
/// scalar values keyed by string, and the machinery to assemble a system
/// under test from them. Anything a lookup cannot satisfy is filled in with
/// a synthesized mock, so resolution through [`get_or_mock`](Self::get_or_mock)
/// never fails.
///
/// The container is single-threaded by construction (`Rc` handles, `RefCell`
/// caches). Tests running in parallel must each create their own.
#[derive(Default)]
pub struct Container {
  instances: RefCell<HashMap<TypeId, CachedInstance>>,
  values: RefCell<HashMap<String, Rc<dyn Any>>>,
  assembling: RefCell<HashSet<TypeId>>,
}

impl Container {
  /// Creates a new, empty `Container`.
  pub fn new() -> Self {
    Self::default()
  }

  // --- Instance Registration ---

  /// Registers a pre-built instance under its exact type and returns a shared
  /// handle to it.
  ///
  /// Registration is unconditional: a later registration for the same type
  /// replaces the earlier one.
  pub fn register<T: Any>(&self, instance: T) -> Rc<T> {
    let handle = Rc::new(instance);
    self.register_rc(Rc::clone(&handle));
    handle
  }

  /// Registers an already-shared instance under its exact type.
  pub fn register_rc<T: Any>(&self, instance: Rc<T>) {
    debug!("registering instance of `{}`", type_name::<T>());
    self
      .instances
      .borrow_mut()
      .insert(TypeId::of::<T>(), CachedInstance::new(instance));
  }

  /// Registers a handle directly under a trait-object type.
  ///
  /// The caller performs the coercion:
  ///
  /// ```
  /// # use mockwire::Container;
  /// # use std::rc::Rc;
  /// trait Greeter { fn greet(&self) -> String; }
  /// struct English;
  /// impl Greeter for English {
  ///   fn greet(&self) -> String { "Hello!".to_string() }
  /// }
  ///
  /// let container = Container::new();
  /// container.register_trait::<dyn Greeter>(Rc::new(English));
  ///
  /// let greeter = container.get::<dyn Greeter>().unwrap();
  /// assert_eq!(greeter.greet(), "Hello!");
  /// ```
  pub fn register_trait<I: ?Sized + Any>(&self, instance: Rc<I>) {
    debug!("registering instance under `{}`", type_name::<I>());
    self
      .instances
      .borrow_mut()
      .insert(TypeId::of::<I>(), CachedInstance::new(instance));
  }

  /// Registers an instance under its exact type and declares it discoverable
  /// under the trait-object type `I`.
  ///
  /// The instance itself is cached only under `C`; the association with `I` is
  /// established lazily, the first time a lookup for `I` scans the cache. Use
  /// the [`register!`](crate::register) macro instead of spelling out the cast.
  ///
  /// Calling this again with the same handle adds another exposure; calling it
  /// with a different instance of `C` replaces the entry, dropping the earlier
  /// instance and its exposures.
  pub fn register_exposed<C: Any, I: ?Sized + Any>(
    &self,
    instance: Rc<C>,
    cast: fn(Rc<C>) -> Rc<I>,
  ) {
    debug!(
      "registering instance of `{}`, discoverable as `{}`",
      type_name::<C>(),
      type_name::<I>()
    );
    let mut instances = self.instances.borrow_mut();
    let entry = instances
      .entry(TypeId::of::<C>())
      .and_modify(|existing| {
        let same_instance = existing
          .handle
          .downcast_ref::<Rc<C>>()
          .is_some_and(|held| Rc::ptr_eq(held, &instance));
        if !same_instance {
          *existing = CachedInstance::new(Rc::clone(&instance));
        }
      })
      .or_insert_with(|| CachedInstance::new(Rc::clone(&instance)));
    entry.exposures.push(Exposure::new::<C, I>(cast));
  }

  // --- Named Values ---

  /// Stores a named scalar value for configuration-style injection points.
  pub fn set_value(&self, key: impl Into<String>, value: impl Any) {
    let key = key.into();
    debug!("setting value `{}`", key);
    self.values.borrow_mut().insert(key, Rc::new(value));
  }

  /// Reads back a named value, downcast to `V`.
  ///
  /// Returns `None` if the key was never set. A stored value of a different
  /// type also reads as `None`; the raw entry stays available through
  /// [`value_any`](Self::value_any).
  pub fn value<V: Any>(&self, key: &str) -> Option<Rc<V>> {
    self.value_any(key)?.downcast::<V>().ok()
  }

  /// Reads back a named value without any type checking.
  pub fn value_any(&self, key: &str) -> Option<Rc<dyn Any>> {
    self.values.borrow().get(key).cloned()
  }

  // --- Resolution ---

  /// Looks up an instance of `T` without synthesizing anything.
  ///
  /// Returns the cached instance if one is mapped to `T` exactly. Otherwise
  /// the cache is scanned for a registered instance exposed as `T`; a match is
  /// cached under `T` and returned. Returns `None` when the container knows
  /// nothing assignable to `T`.
  pub fn get<T: ?Sized + Any>(&self) -> Option<Rc<T>> {
    if let Some(entry) = self.instances.borrow().get(&TypeId::of::<T>()) {
      trace!("cache hit for `{}`", type_name::<T>());
      return entry.handle.downcast_ref::<Rc<T>>().cloned();
    }
    self.discover::<T>()
  }

  /// Looks up an instance of `T`, synthesizing and caching a mock if the
  /// lookup comes up empty.
  ///
  /// The mock is `T::default()`, which is exactly what mock types generated by
  /// `mockall` provide. Subsequent lookups for `T` return the same instance.
  ///
  /// ```
  /// # use mockwire::Container;
  /// # use std::rc::Rc;
  /// #[derive(Default)]
  /// struct Clock;
  ///
  /// let container = Container::new();
  /// let first = container.get_or_mock::<Clock>();
  /// let second = container.get_or_mock::<Clock>();
  /// assert!(Rc::ptr_eq(&first, &second));
  /// ```
  pub fn get_or_mock<T: Any + Default>(&self) -> Rc<T> {
    if let Some(existing) = self.get::<T>() {
      return existing;
    }
    debug!(
      "no instance assignable to `{}`, synthesizing a mock",
      type_name::<T>()
    );
    self.register(T::default())
  }

  /// Trait-object flavor of [`get_or_mock`](Self::get_or_mock).
  ///
  /// A trait object has no `Default`, so the caller supplies the mock
  /// constructor. It runs only on a miss, and the synthesized mock is cached
  /// under `T` like any other instance.
  pub fn get_or_mock_with<T: ?Sized + Any>(&self, mock: impl FnOnce() -> Rc<T>) -> Rc<T> {
    if let Some(existing) = self.get::<T>() {
      return existing;
    }
    debug!(
      "no instance assignable to `{}`, synthesizing a mock via the supplied constructor",
      type_name::<T>()
    );
    let handle = mock();
    self.register_trait(Rc::clone(&handle));
    handle
  }

  // Scans the cached instances for one exposed as `T` and caches the
  // association under `T`. Which entry wins when several expose `T` follows
  // map iteration order and is unspecified.
  fn discover<T: ?Sized + Any>(&self) -> Option<Rc<T>> {
    let mut instances = self.instances.borrow_mut();
    let key = TypeId::of::<T>();
    let cast_handle = instances.values().find_map(|entry| {
      entry
        .exposures
        .iter()
        .filter(|exposure| exposure.interface == key)
        .find_map(|exposure| exposure.apply(entry.handle.as_ref()))
    })?;
    debug!(
      "discovered a registered instance assignable to `{}`",
      type_name::<T>()
    );
    let handle = cast_handle.downcast_ref::<Rc<T>>().cloned();
    instances.insert(
      key,
      CachedInstance {
        handle: cast_handle,
        exposures: Vec::new(),
      },
    );
    handle
  }

  // --- Bean Assembly ---

  /// Assembles a bean of type `B` and runs its initialization hook, returning
  /// the bean by value.
  ///
  /// Dependencies the bean resolves through the total lookups are mocked when
  /// missing, so assembly itself cannot fail on an unregistered dependency.
  ///
  /// # Panics
  ///
  /// Panics if the bean's [`init`](Wire::init) hook returns an error; a bean
  /// that cannot initialize should fail the test loudly. For a non-panicking
  /// version, use [`try_create`](Self::try_create). Also panics if assembly
  /// re-enters itself for the same bean type.
  pub fn create<B: Wire + Any>(&self) -> B {
    self
      .try_create::<B>()
      .unwrap_or_else(|error| panic!("{}", error))
  }

  /// Assembles a bean of type `B`, surfacing an initialization failure as an
  /// [`InitError`] instead of panicking.
  pub fn try_create<B: Wire + Any>(&self) -> Result<B, InitError> {
    let _guard = AssemblyGuard::new(&self.assembling, TypeId::of::<B>(), type_name::<B>());
    debug!("assembling bean `{}`", type_name::<B>());
    let mut bean = B::wire(self);
    bean.init().map_err(|source| InitError {
      bean: type_name::<B>(),
      source,
    })?;
    Ok(bean)
  }
}
