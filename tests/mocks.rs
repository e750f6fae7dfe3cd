//! The bridge to the mocking framework: `mockall`-generated mocks go through
//! the container like any hand-written instance.

use mockall::automock;
use mockall::predicate::eq;
use mockwire::{register, resolve, Container, Wire};
use std::rc::Rc;

// --- Test Fixtures ---

#[automock]
trait PaymentGateway {
  fn charge(&self, amount_cents: u64) -> bool;
}

struct CheckoutService {
  gateway: Rc<dyn PaymentGateway>,
}

impl Wire for CheckoutService {
  fn wire(container: &Container) -> Self {
    Self {
      gateway: resolve!(container, trait PaymentGateway, or MockPaymentGateway::new()),
    }
  }
}

impl CheckoutService {
  fn checkout(&self, amount_cents: u64) -> bool {
    self.gateway.charge(amount_cents)
  }
}

// --- Mock Bridge Tests ---

#[test]
fn test_configured_mock_is_injected() {
  // Arrange: configure the mock before handing it to the container.
  let mut gateway = MockPaymentGateway::new();
  gateway
    .expect_charge()
    .with(eq(1500))
    .times(1)
    .returning(|_| true);

  let container = Container::new();
  register!(container, gateway, as dyn PaymentGateway);

  // Act
  let checkout: CheckoutService = container.create();

  // Assert: the stubbed behavior is what the service observes, and the
  // expectation is verified when the mock drops with the container.
  assert!(checkout.checkout(1500));
}

#[test]
fn test_missing_gateway_becomes_an_unstubbed_mock() {
  // No registration at all: assembly still succeeds.
  let container = Container::new();
  let checkout: CheckoutService = container.create();

  // The substituted mock is cached like any instance.
  let cached = container.get::<dyn PaymentGateway>().unwrap();
  assert!(Rc::ptr_eq(&cached, &checkout.gateway));
}

#[test]
#[should_panic(expected = "charge")]
fn test_unstubbed_mock_fails_loudly_when_called() {
  // Absence is masked at resolution time; calling the substituted mock
  // without expectations is where the test finally hears about it.
  let container = Container::new();
  let checkout: CheckoutService = container.create();

  checkout.checkout(999);
}

#[test]
fn test_default_constructed_mock_via_total_lookup() {
  // `mockall` mocks implement `Default`, so the concrete total lookup can
  // synthesize one without help.
  let container = Container::new();

  let first = container.get_or_mock::<MockPaymentGateway>();
  let second = container.get_or_mock::<MockPaymentGateway>();

  assert!(Rc::ptr_eq(&first, &second));
}
