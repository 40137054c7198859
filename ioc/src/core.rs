//! Core, mostly non-public data structures shared by the container and its collaborators.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A constructed component with its concrete type erased.
pub(crate) type Erased = Arc<dyn Any + Send + Sync>;

/// A boxed `Arc<I>` presenting an instance as some exported type `I`.
pub(crate) type View = Box<dyn Any + Send + Sync>;

/// Produces a view of an erased instance, or `None` if the instance is of the wrong type.
pub(crate) type Cast = Box<dyn Fn(&Erased) -> Option<View> + Send + Sync>;

/// Identity of a type, concrete or `dyn Trait`, together with its readable name.
///
/// Equality and hashing only consider the `TypeId`; the name is carried along for
/// diagnostics and namespace matching.
#[derive(Clone, Copy)]
pub struct TypeKey {
  id: TypeId,
  name: &'static str,
}

impl TypeKey {
  pub fn of<T: ?Sized + Any>() -> Self {
    Self {
      id: TypeId::of::<T>(),
      name: std::any::type_name::<T>(),
    }
  }

  pub fn id(&self) -> TypeId {
    self.id
  }

  pub fn name(&self) -> &'static str {
    self.name
  }

  /// The module path the type was declared in, e.g. `app::services` for
  /// `app::services::Mailer<app::Smtp>`.
  pub fn namespace(&self) -> &'static str {
    namespace_of(self.name)
  }
}

impl PartialEq for TypeKey {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id
  }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.id.hash(state);
  }
}

impl fmt::Debug for TypeKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "TypeKey({})", self.name)
  }
}

impl fmt::Display for TypeKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name)
  }
}

fn namespace_of(type_name: &'static str) -> &'static str {
  // Generic arguments carry their own paths; only the outer path counts.
  let outer = match type_name.find('<') {
    Some(idx) => &type_name[..idx],
    None => type_name,
  };
  match outer.rfind("::") {
    Some(idx) => &outer[..idx],
    None => "",
  }
}
