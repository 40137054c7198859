use crate::component::{Component, Exports};
use crate::core::{Cast, Erased, TypeKey};
use crate::error::ConstructError;
use crate::slot::DependencySlot;
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

type ConstructFn = fn() -> Result<Erased, ConstructError>;
type ExportsFn = fn() -> Vec<(TypeKey, Cast)>;
type SlotsFn = for<'a> fn(&'a (dyn Any + Send + Sync)) -> Vec<&'a dyn DependencySlot>;

/// Metadata identifying a constructible component type.
///
/// A descriptor captures everything the container needs about `T` without knowing `T`
/// statically: how to construct it, what it can be injected as, and where its
/// dependency slots are. Two descriptors are equal when they describe the same type.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
  key: TypeKey,
  construct: ConstructFn,
  exports: ExportsFn,
  slots: SlotsFn,
}

impl TypeDescriptor {
  pub fn of<T: Component>() -> Self {
    Self {
      key: TypeKey::of::<T>(),
      construct: construct_erased::<T>,
      exports: exports_of::<T>,
      slots: slots_of::<T>,
    }
  }

  pub fn key(&self) -> TypeKey {
    self.key
  }

  pub fn type_name(&self) -> &'static str {
    self.key.name()
  }

  pub fn namespace(&self) -> &'static str {
    self.key.namespace()
  }

  pub(crate) fn construct(&self) -> Result<Erased, ConstructError> {
    (self.construct)()
  }

  pub(crate) fn exports(&self) -> Vec<(TypeKey, Cast)> {
    (self.exports)()
  }

  /// The dependency slots of `instance`, which must have been built by this descriptor.
  pub(crate) fn slots<'a>(&self, instance: &'a (dyn Any + Send + Sync)) -> Vec<&'a dyn DependencySlot> {
    (self.slots)(instance)
  }
}

impl PartialEq for TypeDescriptor {
  fn eq(&self, other: &Self) -> bool {
    self.key == other.key
  }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.key.hash(state);
  }
}

impl fmt::Debug for TypeDescriptor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("TypeDescriptor")
      .field("type_name", &self.key.name())
      .finish()
  }
}

fn construct_erased<T: Component>() -> Result<Erased, ConstructError> {
  // A panicking constructor is a failed constructor, not a crashed build.
  match panic::catch_unwind(AssertUnwindSafe(T::construct)) {
    Ok(result) => result.map(|instance| Arc::new(instance) as Erased),
    Err(payload) => Err(ConstructError::Panicked(panic_message(payload.as_ref()))),
  }
}

fn exports_of<T: Component>() -> Vec<(TypeKey, Cast)> {
  let mut exports = Exports::<T>::new();
  T::provides(&mut exports);
  exports.into_casts()
}

fn slots_of<T: Component>(instance: &(dyn Any + Send + Sync)) -> Vec<&dyn DependencySlot> {
  instance
    .downcast_ref::<T>()
    .map(T::slots)
    .unwrap_or_default()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
  if let Some(message) = payload.downcast_ref::<&str>() {
    (*message).to_string()
  } else if let Some(message) = payload.downcast_ref::<String>() {
    message.clone()
  } else {
    "non-string panic payload".to_string()
  }
}
