//! # Fibre Wiring
//!
//! A small, two-phase dependency-injection container for Rust.
//!
//! Given a set of component types, Fibre Wiring instantiates each of them exactly once,
//! then wires the dependency slots declared on every instance to a compatible instance
//! from the same set. The finished object graph is immutable and can be queried by
//! concrete type.
//!
//! ## Core Concepts
//!
//! - **Component**: a type that knows how to construct itself with no arguments and
//!   which slots it wants filled. Implement [`Component`] by hand, or use the
//!   [`component!`] macro for `Default` types.
//! - **Slots**: fields of type [`Inject<T>`], where `T` is either a concrete component or
//!   a capability such as `dyn Trait`.
//! - **Capabilities**: components declare the trait objects they can be injected as
//!   through [`Exports::provide`].
//! - **Container**: built from [`TypeDescriptor`]s, or by scanning a namespace through a
//!   [`Scanner`] such as the [`global()`] [`Catalog`].
//!
//! Building instantiates everything before wiring anything, so mutually dependent
//! components are fine. A slot that nothing can satisfy is left unbound unless
//! [`ContainerConfig`] says otherwise.
//!
//! ## Quick Start
//!
//! ```
//! use fibre_wiring::{component, Container, Inject, TypeDescriptor};
//! use std::sync::Arc;
//!
//! trait Store: Send + Sync {
//!   fn load(&self, id: u32) -> String;
//! }
//!
//! #[derive(Default)]
//! struct MemoryStore;
//! impl Store for MemoryStore {
//!   fn load(&self, id: u32) -> String {
//!     format!("user-{}", id)
//!   }
//! }
//! component!(MemoryStore, provides = [dyn Store]);
//!
//! #[derive(Default)]
//! struct UserService {
//!   store: Inject<dyn Store>,
//! }
//! component!(UserService, slots = [store]);
//!
//! fn main() -> Result<(), fibre_wiring::Error> {
//!   let container = Container::new([
//!     TypeDescriptor::of::<UserService>(),
//!     TypeDescriptor::of::<MemoryStore>(),
//!   ])?;
//!
//!   let users = container.get_bean::<UserService>()?;
//!   let store = users.store.get().expect("store is wired");
//!   assert_eq!(store.load(7), "user-7");
//!
//!   // Lookups are by concrete type and always hand back the same instance.
//!   assert!(Arc::ptr_eq(
//!     &container.get_bean::<MemoryStore>()?,
//!     &container.get_bean::<MemoryStore>()?
//!   ));
//!   Ok(())
//! }
//! ```

mod component;
mod config;
mod container;
mod core;
mod descriptor;
mod error;
mod global;
mod macros;
mod scanner;
mod slot;

pub use component::{Component, Exports};
pub use config::{AmbiguityPolicy, ContainerConfig, UnboundPolicy};
pub use container::Container;
pub use crate::core::TypeKey;
pub use descriptor::TypeDescriptor;
pub use error::{ConstructError, Error, Result};
pub use global::global;
pub use scanner::{Catalog, Scanner};
pub use slot::{DependencySlot, Inject};
