//! Wiring policies and their YAML representation.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// What to do when more than one component can fill a dependency slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityPolicy {
  /// Bind the first candidate in the order the descriptors were supplied.
  #[default]
  FirstMatch,
  /// Fail the build with `Error::AmbiguousDependency`.
  Reject,
}

/// What to do when no component can fill a dependency slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnboundPolicy {
  /// Leave the slot unbound.
  #[default]
  Ignore,
  /// Fail the build with `Error::UnsatisfiedDependency`.
  Reject,
}

/// Options controlling how a `Container` wires its components.
///
/// The defaults are lenient: ties go to the first candidate and unmatched slots stay
/// empty. A YAML document can tighten either policy:
///
/// ```yaml
/// ambiguity: reject
/// unbound: ignore
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContainerConfig {
  #[serde(default)]
  pub ambiguity: AmbiguityPolicy,
  #[serde(default)]
  pub unbound: UnboundPolicy,
}

impl ContainerConfig {
  /// Both policies set to `Reject`.
  pub fn strict() -> Self {
    Self {
      ambiguity: AmbiguityPolicy::Reject,
      unbound: UnboundPolicy::Reject,
    }
  }

  /// Replaces the policy for slots with several candidates.
  pub fn with_ambiguity(mut self, policy: AmbiguityPolicy) -> Self {
    self.ambiguity = policy;
    self
  }

  /// Replaces the policy for slots with no candidate.
  pub fn with_unbound(mut self, policy: UnboundPolicy) -> Self {
    self.unbound = policy;
    self
  }

  /// Parses a config from YAML; absent keys keep their defaults.
  pub fn from_yaml_str(yaml: &str) -> Result<Self> {
    serde_yaml::from_str(yaml).map_err(|e| Error::ConfigParse(e.to_string()))
  }

  /// Reads and parses a YAML config file.
  pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if !path.exists() {
      return Err(Error::ConfigNotFound(path.display().to_string()));
    }
    let contents = std::fs::read_to_string(path)?;
    Self::from_yaml_str(&contents)
  }
}
