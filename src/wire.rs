//! The assembly trait for systems under test and its error type.

use crate::container::Container;
use std::error::Error;
use thiserror::Error;

/// A type that can be assembled from dependencies held in a [`Container`].
///
/// Implementing `wire` is the Rust spelling of declaring injection points:
/// every dependency the type needs is resolved through the container, and
/// anything the container does not know is filled in with a mock.
///
/// ```
/// use mockwire::{Container, Wire};
/// use std::rc::Rc;
///
/// #[derive(Default)]
/// struct Repository;
///
/// struct Service {
///   repository: Rc<Repository>,
/// }
///
/// impl Wire for Service {
///   fn wire(container: &Container) -> Self {
///     Self {
///       repository: container.get_or_mock(),
///     }
///   }
/// }
///
/// let container = Container::new();
/// let service: Service = container.create();
/// # let _ = service.repository;
/// ```
pub trait Wire: Sized {
  /// Resolves the type's dependencies through the container and builds it.
  fn wire(container: &Container) -> Self;

  /// Post-assembly initialization hook.
  ///
  /// The default does nothing. A bean overrides this to run the setup it
  /// would normally perform after all dependencies are in place; an error
  /// here fails assembly.
  fn init(&mut self) -> Result<(), Box<dyn Error>> {
    Ok(())
  }
}

/// A bean was assembled but its initialization hook failed.
///
/// The message carries the bean's type name and the original cause, which
/// stays reachable through [`Error::source`] as well.
#[derive(Debug, Error)]
#[error("bean `{bean}` failed to initialize: {source}")]
pub struct InitError {
  pub bean: &'static str,
  pub source: Box<dyn Error>,
}
