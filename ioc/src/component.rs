//! The `Component` trait: how a type describes itself to the container.

use crate::core::{Cast, Erased, TypeKey, View};
use crate::error::ConstructError;
use crate::slot::DependencySlot;
use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

/// A type the container can instantiate and wire.
///
/// All three methods have defaults, so an implementation only spells out what applies:
///
/// - `construct` is the zero-argument constructor. Without it the type is rejected at
///   build time with [`ConstructError::NoConstructor`].
/// - `provides` declares capabilities (usually trait objects) the type can be injected as,
///   in addition to its own concrete type.
/// - `slots` lists the dependency slots to wire after every component exists.
///
/// For `Default` types the [`component!`](crate::component) macro writes the impl.
///
/// # Examples
///
/// ```
/// use fibre_wiring::{Component, ConstructError, DependencySlot, Exports, Inject};
///
/// trait Clock: Send + Sync {
///   fn now(&self) -> u64;
/// }
///
/// struct FixedClock;
/// impl Clock for FixedClock {
///   fn now(&self) -> u64 {
///     42
///   }
/// }
///
/// impl Component for FixedClock {
///   fn construct() -> Result<Self, ConstructError> {
///     Ok(FixedClock)
///   }
///
///   fn provides(exports: &mut Exports<Self>) {
///     exports.provide::<dyn Clock>(|this| this);
///   }
/// }
///
/// struct Scheduler {
///   clock: Inject<dyn Clock>,
/// }
///
/// impl Component for Scheduler {
///   fn construct() -> Result<Self, ConstructError> {
///     Ok(Scheduler { clock: Inject::new() })
///   }
///
///   fn slots(&self) -> Vec<&dyn DependencySlot> {
///     vec![&self.clock as &dyn DependencySlot]
///   }
/// }
/// ```
pub trait Component: Any + Send + Sync + Sized {
  fn construct() -> Result<Self, ConstructError> {
    Err(ConstructError::NoConstructor)
  }

  fn provides(_exports: &mut Exports<Self>) {}

  fn slots(&self) -> Vec<&dyn DependencySlot> {
    Vec::new()
  }
}

/// The table of types a component can be viewed as.
///
/// A fresh table always contains the component's own concrete type.
pub struct Exports<T> {
  casts: Vec<(TypeKey, Cast)>,
  _marker: PhantomData<fn() -> T>,
}

impl<T: Component> Exports<T> {
  pub(crate) fn new() -> Self {
    let mut exports = Self {
      casts: Vec::new(),
      _marker: PhantomData,
    };
    exports.provide::<T>(|this| this);
    exports
  }

  /// Declares that the component can be injected wherever an `Arc<I>` is expected.
  ///
  /// `cast` is almost always `|this| this`, letting unsized coercion turn `Arc<T>`
  /// into `Arc<dyn Trait>`. It must return the same allocation it was given; a cast
  /// producing a different `Arc` is treated as not matching, and the slot it would
  /// have filled stays unbound. Declaring the same type twice keeps the first cast.
  pub fn provide<I>(&mut self, cast: impl Fn(Arc<T>) -> Arc<I> + Send + Sync + 'static) -> &mut Self
  where
    I: ?Sized + Any + Send + Sync,
  {
    let key = TypeKey::of::<I>();
    if self.exports(key) {
      return self;
    }
    let erased: Cast = Box::new(move |instance: &Erased| {
      let concrete = Arc::clone(instance).downcast::<T>().ok()?;
      let origin = Arc::as_ptr(&concrete) as *const ();
      let viewed = cast(concrete);
      // Slots keep only a `Weak`, so a view onto a fresh allocation would die at once.
      if Arc::as_ptr(&viewed) as *const () != origin {
        return None;
      }
      Some(Box::new(viewed) as View)
    });
    self.casts.push((key, erased));
    self
  }

  /// Whether `key` has already been declared, the component's own type included.
  pub fn exports(&self, key: TypeKey) -> bool {
    self.casts.iter().any(|(k, _)| *k == key)
  }

  pub(crate) fn into_casts(self) -> Vec<(TypeKey, Cast)> {
    self.casts
  }
}
