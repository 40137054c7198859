use fibre_wiring::{component, Container, Inject, TypeDescriptor};

// 1. Define the abstraction (the trait)
trait Logger: Send + Sync {
  fn log(&self, message: &str);
}

// 2. Define a concrete implementation and export it as the abstraction
#[derive(Default)]
struct ConsoleLogger;
impl Logger for ConsoleLogger {
  fn log(&self, message: &str) {
    println!("[CONSOLE LOG]: {}", message);
  }
}
component!(ConsoleLogger, provides = [dyn Logger]);

// 3. Define a service that depends on the abstraction, not the implementation
#[derive(Default)]
struct ReportService {
  logger: Inject<dyn Logger>,
}
component!(ReportService, slots = [logger]);

impl ReportService {
  fn generate_report(&self) {
    let Some(logger) = self.logger.get() else {
      println!("No logger wired, generating silently.");
      return;
    };
    logger.log("Starting report generation.");
    // ... logic to generate report ...
    logger.log("Finished report generation.");
  }
}

fn main() -> Result<(), fibre_wiring::Error> {
  // The container stores the ConsoleLogger once and hands it to every
  // `Inject<dyn Logger>` slot it wires.
  let container = Container::new([
    TypeDescriptor::of::<ReportService>(),
    TypeDescriptor::of::<ConsoleLogger>(),
  ])?;

  println!("Resolving the high-level service...");
  let report_service = container.get_bean::<ReportService>()?;

  println!("Using the service...");
  report_service.generate_report();
  Ok(())
}
