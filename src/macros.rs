//! Public macros for ergonomic registration and resolution.

/// Registers a pre-built instance, optionally declaring the trait-object
/// types it is discoverable under, and returns a shared handle to it.
///
/// # Examples
///
/// ```
/// use mockwire::{register, Container};
///
/// let container = Container::new();
/// let handle = register!(container, String::from("hello"));
/// assert_eq!(*container.get::<String>().unwrap(), *handle);
/// ```
///
/// ```
/// use mockwire::{register, Container};
/// use std::rc::Rc;
///
/// trait Greeter { fn greet(&self) -> String; }
/// struct English;
/// impl Greeter for English {
///   fn greet(&self) -> String { "Hello!".to_string() }
/// }
///
/// let container = Container::new();
/// register!(container, English, as dyn Greeter);
///
/// // The instance is found under the exposed trait as well.
/// let greeter = container.get::<dyn Greeter>().unwrap();
/// assert_eq!(greeter.greet(), "Hello!");
/// ```
#[macro_export]
macro_rules! register {
  // Arm for a plain registration: register!(container, instance)
  ($container:expr, $instance:expr) => {
    $container.register($instance)
  };

  // Arm declaring trait exposures: register!(container, instance, as dyn A, dyn B)
  ($container:expr, $instance:expr, as $($interface:ty),+ $(,)?) => {{
    let handle = ::std::rc::Rc::new($instance);
    $(
      $container.register_exposed::<_, $interface>(
        ::std::rc::Rc::clone(&handle),
        |concrete| concrete,
      );
    )+
    handle
  }};
}

/// Resolves an instance from a container.
///
/// The concrete-type arm is total: a type the container does not know is
/// mocked on the spot (see [`Container::get_or_mock`](crate::Container::get_or_mock)).
/// The trait arm has no way to conjure an implementation, so it panics when
/// nothing assignable was registered; pass a fallback with `or` to make it
/// total as well.
///
/// # Panics
///
/// The `trait` arm without a fallback panics if no instance assignable to the
/// trait is registered.
///
/// # Examples
///
/// ```
/// use mockwire::{resolve, Container};
///
/// #[derive(Default)]
/// struct Clock;
///
/// let container = Container::new();
/// // Never registered: synthesized and cached on first resolution.
/// let clock = resolve!(container, Clock);
/// assert!(std::rc::Rc::ptr_eq(&clock, &resolve!(container, Clock)));
/// ```
///
/// ```
/// use mockwire::{register, resolve, Container};
///
/// trait Greeter { fn greet(&self) -> String; }
/// struct English;
/// impl Greeter for English {
///   fn greet(&self) -> String { "Hello!".to_string() }
/// }
///
/// let container = Container::new();
/// register!(container, English, as dyn Greeter);
///
/// let greeter = resolve!(container, trait Greeter);
/// assert_eq!(greeter.greet(), "Hello!");
/// ```
#[macro_export]
macro_rules! resolve {
  // Arm for a concrete type: resolve!(container, MyService)
  ($container:expr, $type:ty) => {
    $container.get_or_mock::<$type>()
  };

  // Arm for a trait object: resolve!(container, trait MyTrait)
  ($container:expr, trait $trait_ident:ident) => {
    $container.get::<dyn $trait_ident>().unwrap_or_else(|| {
      panic!(
        "Failed to resolve required trait service: {}",
        ::std::any::type_name::<dyn $trait_ident>()
      )
    })
  };

  // Arm for a trait object with a mock fallback:
  // resolve!(container, trait MyTrait, or MockMyTrait::new())
  ($container:expr, trait $trait_ident:ident, or $mock:expr) => {{
    let fallback = || -> ::std::rc::Rc<dyn $trait_ident> { ::std::rc::Rc::new($mock) };
    $container.get_or_mock_with(fallback)
  }};
}
