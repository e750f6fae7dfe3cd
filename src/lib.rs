//! # Mockwire
//!
//! An autowiring test-support container for Rust unit tests.
//!
//! Mockwire lets a test wire up a system under test from its dependencies
//! without bootstrapping a real application wiring layer. Dependencies the
//! test cares about are registered as pre-built instances; every other
//! dependency is transparently filled in with a synthesized mock, so
//! resolution never fails on a missing registration.
//!
//! ## Core Concepts
//!
//! - **Container**: a per-test registry of instances and named values. Create
//!   one per test; it is single-threaded on purpose.
//! - **Registration**: hand the container a pre-built instance (often a
//!   `mockall` mock), optionally exposing the traits it should be
//!   discoverable under.
//! - **Total resolution**: `get_or_mock` and the `resolve!` macro always
//!   produce a value, mocking on the spot when nothing is registered.
//! - **Assembly**: a type implementing [`Wire`] is built by
//!   [`Container::create`], which resolves its dependencies, runs its
//!   initialization hook, and hands the finished bean to the test.
//!
//! ## Quick Start
//!
//! ```
//! use mockwire::{register, resolve, Container, Wire};
//! use std::rc::Rc;
//!
//! // A dependency the test wants to control.
//! trait Mailer {
//!   fn deliver(&self, to: &str) -> bool;
//! }
//!
//! struct AcceptingMailer;
//! impl Mailer for AcceptingMailer {
//!   fn deliver(&self, _to: &str) -> bool {
//!     true
//!   }
//! }
//!
//! // A dependency the test does not care about; it will be auto-mocked.
//! #[derive(Default)]
//! struct AuditLog;
//!
//! // The system under test declares its injection points in `wire`.
//! struct SignupService {
//!   mailer: Rc<dyn Mailer>,
//!   audit: Rc<AuditLog>,
//! }
//!
//! impl Wire for SignupService {
//!   fn wire(container: &Container) -> Self {
//!     Self {
//!       mailer: resolve!(container, trait Mailer),
//!       audit: resolve!(container, AuditLog),
//!     }
//!   }
//! }
//!
//! let container = Container::new();
//! register!(container, AcceptingMailer, as dyn Mailer);
//!
//! let service: SignupService = container.create();
//! assert!(service.mailer.deliver("someone@example.com"));
//! ```

mod container;
mod core;
mod macros;
mod wire;

pub use container::Container;
pub use wire::{InitError, Wire};
