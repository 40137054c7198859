use fibre_wiring::{component, Component, ConstructError, Container, Error, TypeDescriptor};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

// --- Test Fixtures ---

#[derive(Debug, Default)]
struct Alpha;
component!(Alpha);

#[derive(Debug, Default)]
struct Beta;
component!(Beta);

#[derive(Debug)]
struct Gamma {
  id: u32,
}

impl Component for Gamma {
  fn construct() -> Result<Self, ConstructError> {
    Ok(Gamma { id: 303 })
  }
}

// A type that is never registered.
#[derive(Debug)]
struct Unregistered;

// --- Basic Tests ---

#[test]
fn test_one_instance_per_descriptor() {
  // Arrange
  let descriptors = [
    TypeDescriptor::of::<Alpha>(),
    TypeDescriptor::of::<Beta>(),
    TypeDescriptor::of::<Gamma>(),
  ];

  // Act
  let container = Container::new(descriptors).unwrap();

  // Assert
  assert_eq!(container.len(), 3);
  assert!(container.get_bean::<Alpha>().is_ok());
  assert!(container.get_bean::<Beta>().is_ok());
  assert_eq!(container.get_bean::<Gamma>().unwrap().id, 303);
}

#[test]
fn test_get_bean_is_identity_stable() {
  let container = Container::new([TypeDescriptor::of::<Gamma>()]).unwrap();

  let r1 = container.get_bean::<Gamma>().unwrap();
  let r2 = container.get_bean::<Gamma>().unwrap();

  // Same allocation, not a copy.
  assert!(Arc::ptr_eq(&r1, &r2));
}

#[test]
fn test_missing_bean_is_a_typed_error() {
  let container = Container::new([TypeDescriptor::of::<Alpha>()]).unwrap();

  let err = container.get_bean::<Unregistered>().unwrap_err();

  match err {
    Error::NoSuchBean { type_name } => assert!(type_name.ends_with("Unregistered")),
    other => panic!("expected NoSuchBean, got {:?}", other),
  }
  // The failed lookup leaves the container usable.
  assert!(container.get_bean::<Alpha>().is_ok());
}

#[test]
fn test_duplicate_descriptors_collapse() {
  let container = Container::new([
    TypeDescriptor::of::<Alpha>(),
    TypeDescriptor::of::<Alpha>(),
    TypeDescriptor::of::<Beta>(),
  ])
  .unwrap();

  assert_eq!(container.len(), 2);
  assert_eq!(
    container.type_names().collect::<Vec<_>>(),
    vec![std::any::type_name::<Alpha>(), std::any::type_name::<Beta>()]
  );
}

#[test]
fn test_descriptor_set_input() {
  let set: std::collections::HashSet<TypeDescriptor> =
    [TypeDescriptor::of::<Alpha>(), TypeDescriptor::of::<Beta>()]
      .into_iter()
      .collect();

  let container = Container::new(set).unwrap();

  assert!(container.contains::<Alpha>());
  assert!(container.contains::<Beta>());
  assert!(!container.contains::<Gamma>());
}

#[test]
fn test_empty_container() {
  let container = Container::new(Vec::<TypeDescriptor>::new()).unwrap();

  assert!(container.is_empty());
  assert!(container.get_bean::<Alpha>().is_err());
}

#[test]
fn test_capability_exporters_are_looked_up_by_concrete_type() {
  trait Marker: Send + Sync {}

  #[derive(Default)]
  struct First;
  impl Marker for First {}
  component!(First, provides = [dyn Marker]);

  #[derive(Default)]
  struct Second;
  impl Marker for Second {}
  component!(Second, provides = [dyn Marker]);

  let container = Container::new([
    TypeDescriptor::of::<First>(),
    TypeDescriptor::of::<Second>(),
  ])
  .unwrap();

  // Sharing a capability does not make the two lookups collide.
  assert_eq!(container.len(), 2);
  assert!(container.get_bean::<First>().is_ok());
  assert!(container.get_bean::<Second>().is_ok());
}

#[test]
fn test_each_constructor_runs_exactly_once() {
  static CONSTRUCTED: AtomicUsize = AtomicUsize::new(0);

  struct Counted;
  impl Component for Counted {
    fn construct() -> Result<Self, ConstructError> {
      CONSTRUCTED.fetch_add(1, Ordering::SeqCst);
      Ok(Counted)
    }
  }

  let container = Container::new([TypeDescriptor::of::<Counted>()]).unwrap();
  for _ in 0..5 {
    container.get_bean::<Counted>().unwrap();
  }

  assert_eq!(CONSTRUCTED.load(Ordering::SeqCst), 1);
}

#[test]
fn test_concurrent_lookups_share_one_instance() {
  let container = Container::new([TypeDescriptor::of::<Gamma>()]).unwrap();
  let expected = container.get_bean::<Gamma>().unwrap();

  thread::scope(|s| {
    let handles: Vec<_> = (0..16)
      .map(|_| s.spawn(|| container.get_bean::<Gamma>().unwrap()))
      .collect();

    for handle in handles {
      let resolved = handle.join().unwrap();
      assert!(Arc::ptr_eq(&resolved, &expected));
    }
  });
}
