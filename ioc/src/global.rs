//! The global component catalog and namespace-based container construction.

use crate::container::Container;
use crate::error::Result;
use crate::scanner::Catalog;
use once_cell::sync::Lazy;

// The one and only global catalog instance.
// It will be created on its first access in a thread-safe manner.
static GLOBAL_CATALOG: Lazy<Catalog> = Lazy::new(Catalog::default);

/// Provides a reference to the global catalog instance.
///
/// Components registered here are found by [`Container::for_namespace`].
///
/// # Examples
///
/// ```
/// use fibre_wiring::{component, global};
///
/// #[derive(Default)]
/// struct Mailer;
/// component!(Mailer);
///
/// fn register_components() {
///   global().register::<Mailer>();
/// }
/// ```
pub fn global() -> &'static Catalog {
  &GLOBAL_CATALOG
}

impl Container {
  /// Builds a container from every globally registered component declared in
  /// `root_namespace` or a module beneath it.
  pub fn for_namespace(root_namespace: &str) -> Result<Self> {
    Self::scan(global(), root_namespace)
  }
}
