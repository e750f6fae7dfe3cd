use mockwire::{Container, Wire};

// A service that reads configuration-style scalars during assembly.
struct HttpClient {
  base_url: String,
  timeout_ms: u64,
}

impl Wire for HttpClient {
  fn wire(container: &Container) -> Self {
    Self {
      base_url: container
        .value::<String>("base_url")
        .map(|url| (*url).clone())
        .unwrap_or_else(|| "http://localhost".to_string()),
      timeout_ms: container
        .value::<u64>("timeout_ms")
        .map(|timeout| *timeout)
        .unwrap_or(1_000),
    }
  }
}

fn main() {
  let container = Container::new();

  // Values are stored by name; nothing checks the type until a reader asks
  // for one.
  container.set_value("base_url", "https://staging.example".to_string());
  container.set_value("timeout_ms", 250_u64);

  let client: HttpClient = container.create();
  println!(
    "client configured with base_url={} timeout_ms={}",
    client.base_url, client.timeout_ms
  );

  // An unset key simply reads as absent.
  assert!(container.value::<String>("proxy").is_none());
  println!("the `proxy` key was never set and reads as None");
}
