//! Component discovery: where a container's descriptors come from.

use crate::component::Component;
use crate::core::TypeKey;
use crate::descriptor::TypeDescriptor;
use dashmap::DashMap;

/// Finds the component types declared under a root namespace.
///
/// Namespaces are Rust module paths such as `my_app::services`. Any closure of the
/// right shape is a scanner, which keeps containers easy to build from fixed sets in
/// tests.
pub trait Scanner {
  fn scan(&self, root: &str) -> Vec<TypeDescriptor>;
}

impl<F> Scanner for F
where
  F: Fn(&str) -> Vec<TypeDescriptor>,
{
  fn scan(&self, root: &str) -> Vec<TypeDescriptor> {
    self(root)
  }
}

/// A thread-safe registry of component descriptors, searchable by namespace.
///
/// Components can be registered from anywhere and at any time; a scan sees everything
/// registered before it started.
#[derive(Default)]
pub struct Catalog {
  entries: DashMap<TypeKey, TypeDescriptor>,
}

impl Catalog {
  /// Creates a new, empty `Catalog`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds `T` to the catalog. Registering a type twice is a no-op.
  pub fn register<T: Component>(&self) -> &Self {
    self.register_descriptor(TypeDescriptor::of::<T>())
  }

  /// Re-registering a type is a no-op.
  pub fn register_descriptor(&self, descriptor: TypeDescriptor) -> &Self {
    self.entries.entry(descriptor.key()).or_insert(descriptor);
    self
  }

  /// Whether `T` has been registered.
  pub fn contains<T: Component>(&self) -> bool {
    self.entries.contains_key(&TypeKey::of::<T>())
  }

  /// Number of registered types.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl Scanner for Catalog {
  /// Returns the descriptors under `root`, sorted by type name.
  fn scan(&self, root: &str) -> Vec<TypeDescriptor> {
    let mut found: Vec<TypeDescriptor> = self
      .entries
      .iter()
      .filter(|entry| in_namespace(entry.value().namespace(), root))
      .map(|entry| *entry.value())
      .collect();
    found.sort_by_key(TypeDescriptor::type_name);
    found
  }
}

/// Whether `namespace` is `root` or nested under it, comparing whole path segments.
pub(crate) fn in_namespace(namespace: &str, root: &str) -> bool {
  let root = root.trim_end_matches("::");
  if root.is_empty() {
    return true;
  }
  match namespace.strip_prefix(root) {
    Some(rest) => rest.is_empty() || rest.starts_with("::"),
    None => false,
  }
}

#[cfg(test)]
mod tests {
  use super::in_namespace;

  #[test]
  fn namespace_matching_respects_segments() {
    assert!(in_namespace("app::services", "app"));
    assert!(in_namespace("app::services", "app::services"));
    assert!(in_namespace("app::services", "app::services::"));
    assert!(in_namespace("app::services::mail", "app::services"));
    assert!(!in_namespace("app::servicesx", "app::services"));
    assert!(!in_namespace("application", "app"));
    assert!(!in_namespace("app", "app::services"));
  }

  #[test]
  fn empty_root_matches_everything() {
    assert!(in_namespace("anything::at::all", ""));
    assert!(in_namespace("", ""));
  }
}
