//! The main `Container` struct and its two-phase build.

use crate::config::{AmbiguityPolicy, ContainerConfig, UnboundPolicy};
use crate::core::{Cast, Erased, TypeKey, View};
use crate::descriptor::TypeDescriptor;
use crate::error::{Error, Result};
use crate::scanner::Scanner;
use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// One constructed component plus the metadata needed to wire and view it.
struct Bean {
  descriptor: TypeDescriptor,
  instance: Erased,
  exports: Vec<(TypeKey, Cast)>,
}

impl Bean {
  fn provides(&self, target: TypeKey) -> bool {
    self.exports.iter().any(|(key, _)| *key == target)
  }

  fn view(&self, target: TypeKey) -> Option<View> {
    self
      .exports
      .iter()
      .find(|(key, _)| *key == target)
      .and_then(|(_, cast)| cast(&self.instance))
  }

  fn type_name(&self) -> &'static str {
    self.descriptor.type_name()
  }
}

/// The dependency-injection container.
///
/// A container is built once from a set of [`TypeDescriptor`]s and never changes
/// afterwards. Building happens in two phases: every component is instantiated through
/// its zero-argument constructor, and only then are dependency slots wired, so
/// components may depend on each other in any shape, cycles included.
///
/// The container owns every component. Lookups hand out shared `Arc`s and the same
/// allocation is returned on every call.
pub struct Container {
  beans: Vec<Bean>,
  index: HashMap<TypeKey, usize>,
}

impl Container {
  /// Builds a container with the default (lenient) wiring policies.
  pub fn new<I>(descriptors: I) -> Result<Self>
  where
    I: IntoIterator<Item = TypeDescriptor>,
  {
    Self::with_config(descriptors, &ContainerConfig::default())
  }

  /// Builds a container, applying `config`'s policies while wiring.
  pub fn with_config<I>(descriptors: I, config: &ContainerConfig) -> Result<Self>
  where
    I: IntoIterator<Item = TypeDescriptor>,
  {
    let beans = instantiate(descriptors)?;
    let bound = wire(&beans, config)?;

    let index = beans
      .iter()
      .enumerate()
      .map(|(position, bean)| (bean.descriptor.key(), position))
      .collect();

    debug!(
      components = beans.len(),
      bound_slots = bound,
      "container built"
    );
    Ok(Self { beans, index })
  }

  /// Builds a container from every component `scanner` finds under `root`.
  pub fn scan<S>(scanner: &S, root: &str) -> Result<Self>
  where
    S: Scanner + ?Sized,
  {
    Self::scan_with_config(scanner, root, &ContainerConfig::default())
  }

  pub fn scan_with_config<S>(scanner: &S, root: &str, config: &ContainerConfig) -> Result<Self>
  where
    S: Scanner + ?Sized,
  {
    let descriptors = scanner.scan(root);
    debug!(root, found = descriptors.len(), "scanned for components");
    Self::with_config(descriptors, config)
  }

  // --- Resolution ---

  /// Returns the component whose concrete type is exactly `T`.
  ///
  /// Exported capabilities play no part here; `T` must be the component's own type.
  pub fn get_bean<T: Any + Send + Sync>(&self) -> Result<Arc<T>> {
    self
      .index
      .get(&TypeKey::of::<T>())
      .and_then(|&position| Arc::clone(&self.beans[position].instance).downcast::<T>().ok())
      .ok_or(Error::NoSuchBean {
        type_name: std::any::type_name::<T>(),
      })
  }

  /// Whether a component of concrete type `T` was built.
  pub fn contains<T: Any + Send + Sync>(&self) -> bool {
    self.index.contains_key(&TypeKey::of::<T>())
  }

  /// Number of components, one per distinct descriptor.
  pub fn len(&self) -> usize {
    self.beans.len()
  }

  /// Whether the container was built from no descriptors at all.
  pub fn is_empty(&self) -> bool {
    self.beans.is_empty()
  }

  /// Names of the contained component types, in wiring order.
  pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
    self.beans.iter().map(Bean::type_name)
  }
}

impl fmt::Debug for Container {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Container")
      .field("components", &self.type_names().collect::<Vec<_>>())
      .finish()
  }
}

/// Phase one: one instance per distinct descriptor, in supplied order.
fn instantiate<I>(descriptors: I) -> Result<Vec<Bean>>
where
  I: IntoIterator<Item = TypeDescriptor>,
{
  let mut seen = HashSet::new();
  let mut beans = Vec::new();

  for descriptor in descriptors {
    if !seen.insert(descriptor.key()) {
      debug!(component = descriptor.type_name(), "duplicate descriptor ignored");
      continue;
    }

    let instance = descriptor
      .construct()
      .map_err(|cause| Error::Instantiation {
        type_name: descriptor.type_name(),
        cause,
      })?;
    trace!(component = descriptor.type_name(), "instantiated");

    beans.push(Bean {
      descriptor,
      exports: descriptor.exports(),
      instance,
    });
  }

  Ok(beans)
}

/// Phase two: bind every slot of every bean. Returns the number of slots bound.
fn wire(beans: &[Bean], config: &ContainerConfig) -> Result<usize> {
  let mut bound = 0;

  for bean in beans {
    for slot in bean.descriptor.slots(&*bean.instance) {
      let target = slot.target();
      let mut candidates = beans.iter().filter(|candidate| candidate.provides(target));

      let Some(chosen) = candidates.next() else {
        match config.unbound {
          UnboundPolicy::Ignore => {
            debug!(
              component = bean.type_name(),
              target = target.name(),
              "no candidate for dependency, leaving it unbound"
            );
            continue;
          }
          UnboundPolicy::Reject => {
            return Err(Error::UnsatisfiedDependency {
              component: bean.type_name(),
              target: target.name(),
            });
          }
        }
      };

      let others: Vec<&'static str> = candidates.map(Bean::type_name).collect();
      if !others.is_empty() {
        match config.ambiguity {
          AmbiguityPolicy::FirstMatch => debug!(
            component = bean.type_name(),
            target = target.name(),
            chosen = chosen.type_name(),
            skipped = ?others,
            "ambiguous dependency, binding first candidate"
          ),
          AmbiguityPolicy::Reject => {
            let mut all = vec![chosen.type_name()];
            all.extend(others);
            return Err(Error::AmbiguousDependency {
              component: bean.type_name(),
              target: target.name(),
              candidates: all,
            });
          }
        }
      }

      // Binding fails for a slot listed twice by `Component::slots`, or for a
      // capability whose cast did not return the candidate itself.
      if chosen.view(target).is_some_and(|view| slot.bind(view)) {
        trace!(
          component = bean.type_name(),
          target = target.name(),
          bound_to = chosen.type_name(),
          "slot bound"
        );
        bound += 1;
      } else if !slot.is_bound() && config.unbound == UnboundPolicy::Reject {
        return Err(Error::UnsatisfiedDependency {
          component: bean.type_name(),
          target: target.name(),
        });
      } else {
        warn!(
          component = bean.type_name(),
          target = target.name(),
          candidate = chosen.type_name(),
          "slot rejected its candidate"
        );
      }
    }
  }

  Ok(bound)
}
