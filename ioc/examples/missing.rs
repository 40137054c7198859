use fibre_wiring::{component, Container, ContainerConfig, Error, Inject, TypeDescriptor};

#[derive(Default)]
struct MetricsSink;
component!(MetricsSink);

#[derive(Default)]
struct Checkout {
  metrics: Inject<MetricsSink>,
}
component!(Checkout, slots = [metrics]);

fn main() {
  // --- Unsatisfied slots are left empty by default ---
  let container = Container::new([TypeDescriptor::of::<Checkout>()]).unwrap();
  let checkout = container.get_bean::<Checkout>().unwrap();
  assert!(checkout.metrics.get().is_none());
  println!("MetricsSink was not supplied; Checkout.metrics stays unbound.");

  // --- Lookups of unknown types are typed errors, not panics ---
  match container.get_bean::<MetricsSink>() {
    Ok(_) => panic!("Should not have found the sink!"),
    Err(err @ Error::NoSuchBean { .. }) => println!("Lookup failed as expected: {}", err),
    Err(other) => panic!("Unexpected error: {}", other),
  }

  // --- A strict configuration turns the empty slot into a build error ---
  let strict = ContainerConfig::strict();
  match Container::with_config([TypeDescriptor::of::<Checkout>()], &strict) {
    Ok(_) => panic!("Strict wiring should have failed!"),
    Err(err) => println!("Strict build refused: {}", err),
  }
}
