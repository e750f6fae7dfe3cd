use mockwire::{register, Container};
use std::rc::Rc;

// 1. Define the abstraction (the trait).
trait Logger {
  fn log(&self, message: &str);
}

// 2. Define a concrete implementation.
struct ConsoleLogger;
impl Logger for ConsoleLogger {
  fn log(&self, message: &str) {
    println!("[CONSOLE LOG]: {}", message);
  }
}

fn main() {
  let container = Container::new();

  // Register the concrete logger once, exposing it under the trait. The
  // container stores Rc<ConsoleLogger> but can serve it as Rc<dyn Logger>.
  let concrete = register!(container, ConsoleLogger, as dyn Logger);

  // The first trait lookup scans the registered instances, finds the
  // exposure and caches the association under `dyn Logger`.
  let logger = container.get::<dyn Logger>().unwrap();
  logger.log("resolved through the trait");

  // Both handles point at the very same instance.
  assert_eq!(
    Rc::as_ptr(&concrete) as *const (),
    Rc::as_ptr(&logger) as *const ()
  );
  println!("concrete and trait lookups share one instance");
}
