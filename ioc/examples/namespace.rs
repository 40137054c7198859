use fibre_wiring::{global, Container};

mod services {
  use fibre_wiring::{component, Inject};

  #[derive(Default)]
  pub struct Clock;
  component!(Clock);

  impl Clock {
    pub fn now(&self) -> &'static str {
      "12:00"
    }
  }

  #[derive(Default)]
  pub struct Scheduler {
    pub clock: Inject<Clock>,
  }
  component!(Scheduler, slots = [clock]);
}

mod tools {
  use fibre_wiring::component;

  #[derive(Default)]
  pub struct Profiler;
  component!(Profiler);
}

fn main() -> Result<(), fibre_wiring::Error> {
  // Components can be registered from anywhere in the application.
  global()
    .register::<services::Clock>()
    .register::<services::Scheduler>()
    .register::<tools::Profiler>();

  // Only components declared in `services` (or below) end up in this container.
  let root = format!("{}::services", module_path!());
  let container = Container::for_namespace(&root)?;

  println!("Components under {}:", root);
  for name in container.type_names() {
    println!("  - {}", name);
  }
  assert!(!container.contains::<tools::Profiler>());

  let scheduler = container.get_bean::<services::Scheduler>()?;
  if let Some(clock) = scheduler.clock.get() {
    println!("Scheduler sees the time as {}", clock.now());
  }
  Ok(())
}
