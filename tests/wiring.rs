use mockwire::{register, resolve, Container, Wire};
use std::error::Error;
use std::rc::Rc;

// --- Test Fixtures ---

trait TokenSource {
  fn token(&self) -> String;
}

struct StaticTokenSource {
  token: String,
}

impl TokenSource for StaticTokenSource {
  fn token(&self) -> String {
    self.token.clone()
  }
}

#[derive(Default)]
struct RequestLog;

// A service with one trait dependency, one concrete dependency and one
// configuration value.
struct ApiClient {
  tokens: Rc<dyn TokenSource>,
  log: Rc<RequestLog>,
  base_url: String,
}

impl Wire for ApiClient {
  fn wire(container: &Container) -> Self {
    Self {
      tokens: resolve!(container, trait TokenSource, or StaticTokenSource {
        token: "mock-token".to_string(),
      }),
      log: resolve!(container, RequestLog),
      base_url: container
        .value::<String>("base_url")
        .map(|url| (*url).clone())
        .unwrap_or_default(),
    }
  }
}

// --- Assembly Tests ---

#[test]
fn test_assembly_with_registered_dependencies() {
  // Arrange
  let container = Container::new();
  register!(
    container,
    StaticTokenSource {
      token: "real-token".to_string()
    },
    as dyn TokenSource
  );
  let log = container.register(RequestLog);
  container.set_value("base_url", "https://api.invalid".to_string());

  // Act
  let client: ApiClient = container.create();

  // Assert
  assert_eq!(client.tokens.token(), "real-token");
  assert!(Rc::ptr_eq(&client.log, &log));
  assert_eq!(client.base_url, "https://api.invalid");
}

#[test]
fn test_assembly_never_fails_on_missing_dependencies() {
  // An empty container: every dependency falls back to a mock and every value
  // read comes back absent.
  let container = Container::new();

  let client: ApiClient = container.create();

  assert_eq!(client.tokens.token(), "mock-token");
  assert_eq!(client.base_url, "");
}

#[test]
fn test_assembled_beans_share_cached_dependencies() {
  // Two beans assembled from the same container share the mocked singleton.
  let container = Container::new();

  let first: ApiClient = container.create();
  let second: ApiClient = container.create();

  assert!(Rc::ptr_eq(&first.log, &second.log));
  assert!(Rc::ptr_eq(&first.tokens, &second.tokens));
}

// --- Initialization Hook Tests ---

struct WarmedCache {
  entries: usize,
}

impl Wire for WarmedCache {
  fn wire(_container: &Container) -> Self {
    Self { entries: 0 }
  }

  fn init(&mut self) -> Result<(), Box<dyn Error>> {
    self.entries = 16;
    Ok(())
  }
}

#[derive(Debug)]
struct BrokenBean;

impl Wire for BrokenBean {
  fn wire(_container: &Container) -> Self {
    Self
  }

  fn init(&mut self) -> Result<(), Box<dyn Error>> {
    Err("connection refused".into())
  }
}

#[test]
fn test_init_hook_runs_after_assembly() {
  let container = Container::new();

  let cache: WarmedCache = container.create();

  assert_eq!(cache.entries, 16);
}

#[test]
#[should_panic(expected = "failed to initialize: connection refused")]
fn test_create_panics_when_init_fails() {
  let container = Container::new();
  let _bean: BrokenBean = container.create();
}

#[test]
fn test_try_create_surfaces_the_wrapped_cause() {
  // Arrange
  let container = Container::new();

  // Act
  let error = container.try_create::<BrokenBean>().unwrap_err();

  // Assert: the message names the bean and carries the original cause, and
  // the cause stays reachable through the error chain.
  let message = error.to_string();
  assert!(message.contains("BrokenBean"), "message was: {message}");
  assert!(
    message.contains("connection refused"),
    "message was: {message}"
  );
  assert_eq!(error.source().unwrap().to_string(), "connection refused");
}

// --- Nested Assembly Tests ---

struct Inner {
  log: Rc<RequestLog>,
}

impl Wire for Inner {
  fn wire(container: &Container) -> Self {
    Self {
      log: resolve!(container, RequestLog),
    }
  }
}

struct Outer {
  inner: Inner,
  log: Rc<RequestLog>,
}

impl Wire for Outer {
  fn wire(container: &Container) -> Self {
    Self {
      inner: container.create(),
      log: resolve!(container, RequestLog),
    }
  }
}

#[test]
fn test_nested_beans_resolve_through_the_same_cache() {
  let container = Container::new();

  let outer: Outer = container.create();

  assert!(Rc::ptr_eq(&outer.log, &outer.inner.log));
}

// --- Circular Assembly Tests ---

struct Ouroboros;

impl Wire for Ouroboros {
  fn wire(container: &Container) -> Self {
    // Assembling ourselves while being assembled must be caught.
    let _nested: Ouroboros = container.create();
    Self
  }
}

#[test]
#[should_panic(expected = "Circular assembly detected")]
fn test_circular_assembly_panics() {
  let container = Container::new();
  let _bean: Ouroboros = container.create();
}
