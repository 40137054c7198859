use fibre_wiring::{component, Container, Inject, TypeDescriptor};
use std::sync::Arc;

// Two components that need each other. Construction would be impossible if each
// had to receive the other in its constructor; wiring after instantiation is not.
#[derive(Default)]
struct OrderBook {
  engine: Inject<MatchingEngine>,
}
component!(OrderBook, slots = [engine]);

#[derive(Default)]
struct MatchingEngine {
  book: Inject<OrderBook>,
}
component!(MatchingEngine, slots = [book]);

fn main() -> Result<(), fibre_wiring::Error> {
  let container = Container::new([
    TypeDescriptor::of::<OrderBook>(),
    TypeDescriptor::of::<MatchingEngine>(),
  ])?;

  let book = container.get_bean::<OrderBook>()?;
  let engine = container.get_bean::<MatchingEngine>()?;

  assert!(book.engine.get().is_some_and(|e| Arc::ptr_eq(&e, &engine)));
  assert!(engine.book.get().is_some_and(|b| Arc::ptr_eq(&b, &book)));
  println!("OrderBook and MatchingEngine are wired to each other.");

  // Slots hold weak references, so the pair is freed with the container.
  let weak_book = Arc::downgrade(&book);
  drop((book, engine, container));
  assert!(weak_book.upgrade().is_none());
  println!("Dropping the container released both components.");
  Ok(())
}
