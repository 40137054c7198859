use thiserror::Error;

/// Why a component's zero-argument constructor could not produce an instance.
#[derive(Debug, Error)]
pub enum ConstructError {
  #[error("no zero-argument constructor")]
  NoConstructor,

  #[error("constructor failed: {0}")]
  Failed(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("constructor panicked: {0}")]
  Panicked(String),
}

impl ConstructError {
  /// Wraps any error (or message) raised by a constructor.
  pub fn failed(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
    ConstructError::Failed(err.into())
  }
}

/// The main error type for the `fibre_wiring` library.
#[derive(Debug, Error)]
pub enum Error {
  #[error("Failed to instantiate component '{type_name}': {cause}")]
  Instantiation {
    type_name: &'static str,
    #[source]
    cause: ConstructError,
  },

  #[error("No bean of type '{type_name}' in container")]
  NoSuchBean { type_name: &'static str },

  #[error("Dependency '{target}' of '{component}' is ambiguous between {candidates:?}")]
  AmbiguousDependency {
    component: &'static str,
    target: &'static str,
    candidates: Vec<&'static str>,
  },

  #[error("No component satisfies dependency '{target}' of '{component}'")]
  UnsatisfiedDependency {
    component: &'static str,
    target: &'static str,
  },

  #[error("Configuration file not found: {0}")]
  ConfigNotFound(String),

  #[error("Failed to read configuration file: {0}")]
  ConfigRead(#[from] std::io::Error),

  #[error("Failed to parse configuration: {0}")]
  ConfigParse(String),
}

/// A specialized `Result` type for `fibre_wiring` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
