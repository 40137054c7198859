//! Public macros for ergonomic component declaration.

/// Implements [`Component`](crate::Component) for a `Default` type.
///
/// The type is constructed with `Default::default()`. Two optional lists follow the
/// type, in this order:
///
/// - `provides = [dyn TraitA, dyn TraitB]`: capabilities the component exports.
/// - `slots = [field_a, field_b]`: fields holding [`Inject`](crate::Inject) slots.
///
/// # Examples
///
/// ```
/// use fibre_wiring::{component, Container, Inject, TypeDescriptor};
///
/// trait Greeter: Send + Sync {
///   fn greet(&self) -> String;
/// }
///
/// #[derive(Default)]
/// struct EnglishGreeter;
/// impl Greeter for EnglishGreeter {
///   fn greet(&self) -> String {
///     "Hello!".to_string()
///   }
/// }
/// component!(EnglishGreeter, provides = [dyn Greeter]);
///
/// #[derive(Default)]
/// struct Frontdesk {
///   greeter: Inject<dyn Greeter>,
/// }
/// component!(Frontdesk, slots = [greeter]);
///
/// let container = Container::new([
///   TypeDescriptor::of::<Frontdesk>(),
///   TypeDescriptor::of::<EnglishGreeter>(),
/// ])
/// .unwrap();
///
/// let desk = container.get_bean::<Frontdesk>().unwrap();
/// assert_eq!(desk.greeter.get().unwrap().greet(), "Hello!");
/// ```
#[macro_export]
macro_rules! component {
    (
        $type:ty
        $(, provides = [$($cap:ty),* $(,)?])?
        $(, slots = [$($slot:ident),* $(,)?])?
        $(,)?
    ) => {
        impl $crate::Component for $type {
            fn construct() -> ::std::result::Result<Self, $crate::ConstructError> {
                ::std::result::Result::Ok(<Self as ::std::default::Default>::default())
            }

            #[allow(unused_variables)]
            fn provides(exports: &mut $crate::Exports<Self>) {
                $($(
                    exports.provide::<$cap>(
                        |this: ::std::sync::Arc<Self>| -> ::std::sync::Arc<$cap> { this },
                    );
                )*)?
            }

            fn slots(&self) -> ::std::vec::Vec<&dyn $crate::DependencySlot> {
                ::std::vec![$($(&self.$slot as &dyn $crate::DependencySlot),*)?]
            }
        }
    };
}
