use mockwire::{register, resolve, Container, Wire};
use std::rc::Rc;

// 1. Define the abstraction the service depends on.
trait Notifier {
  fn notify(&self, message: &str);
}

// 2. Define a concrete implementation the test wants in place.
struct ConsoleNotifier;
impl Notifier for ConsoleNotifier {
  fn notify(&self, message: &str) {
    println!("[NOTIFY]: {}", message);
  }
}

// 3. A dependency nobody registers; the container will mock it.
#[derive(Default)]
struct Metrics {
  // A real implementation would talk to a collector.
}

// 4. The system under test declares its injection points in `wire`.
struct OrderService {
  notifier: Rc<dyn Notifier>,
  metrics: Rc<Metrics>,
}

impl Wire for OrderService {
  fn wire(container: &Container) -> Self {
    Self {
      notifier: resolve!(container, trait Notifier),
      metrics: resolve!(container, Metrics),
    }
  }
}

impl OrderService {
  fn place_order(&self, sku: &str) {
    self.notifier.notify(&format!("order placed for {}", sku));
  }
}

fn main() {
  let container = Container::new();

  // Register only what this scenario cares about. `Metrics` is left out on
  // purpose and gets synthesized on first resolution.
  register!(container, ConsoleNotifier, as dyn Notifier);

  println!("Assembling the service under test...");
  let service: OrderService = container.create();

  service.place_order("SKU-1234");

  // The mocked dependency is a cached singleton within this container.
  let metrics = resolve!(container, Metrics);
  assert!(Rc::ptr_eq(&metrics, &service.metrics));
  println!("The unregistered Metrics dependency was silently mocked.");
}
