//! Dependency slots: the fields the container fills in during wiring.

use crate::core::TypeKey;
use once_cell::sync::OnceCell;
use std::any::Any;
use std::fmt;
use std::sync::{Arc, Weak};

/// An injection point on a component.
///
/// The container asks each slot for its target type, finds an instance exporting that
/// type, and hands the slot a boxed `Arc<Target>` to bind.
pub trait DependencySlot: Send + Sync {
  /// The type this slot wants injected. May be a `dyn Trait`.
  fn target(&self) -> TypeKey;

  /// Whether wiring has bound this slot, whether or not the target is still alive.
  fn is_bound(&self) -> bool;

  /// Binds the slot to `view`, a boxed `Arc` of the target type.
  ///
  /// Returns `false` if `view` holds a different type or the slot is already bound.
  fn bind(&self, view: Box<dyn Any + Send + Sync>) -> bool;
}

/// A slot holding a reference to another component of type `T`.
///
/// The container keeps the only strong references to its components, so slots hold
/// `Weak` handles and mutually dependent components never form an `Arc` cycle.
/// [`Inject::get`] returns `None` while the slot is unbound, or once the owning
/// container has been dropped.
pub struct Inject<T: ?Sized> {
  cell: OnceCell<Weak<T>>,
}

impl<T: ?Sized + Any + Send + Sync> Inject<T> {
  pub const fn new() -> Self {
    Self {
      cell: OnceCell::new(),
    }
  }

  /// The injected component, if wiring bound one and it is still alive.
  pub fn get(&self) -> Option<Arc<T>> {
    self.cell.get().and_then(Weak::upgrade)
  }

  /// Whether wiring filled this slot.
  ///
  /// This reports the wiring outcome only. Once the container is dropped the slot
  /// stays bound but [`get`](Self::get) returns `None`; pair the two to check liveness.
  pub fn is_bound(&self) -> bool {
    self.cell.get().is_some()
  }
}

impl<T: ?Sized + Any + Send + Sync> Default for Inject<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: ?Sized + Any + Send + Sync> DependencySlot for Inject<T> {
  fn target(&self) -> TypeKey {
    TypeKey::of::<T>()
  }

  fn is_bound(&self) -> bool {
    Inject::is_bound(self)
  }

  fn bind(&self, view: Box<dyn Any + Send + Sync>) -> bool {
    match view.downcast::<Arc<T>>() {
      Ok(instance) => self.cell.set(Arc::downgrade(&instance)).is_ok(),
      Err(_) => false,
    }
  }
}

impl<T: ?Sized> fmt::Debug for Inject<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let state = if self.cell.get().is_some() {
      "bound"
    } else {
      "unbound"
    };
    write!(f, "Inject<{}>({})", std::any::type_name::<T>(), state)
  }
}
