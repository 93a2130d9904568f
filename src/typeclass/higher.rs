//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Optional<_>`
//! directly. `TypeConstructor` names the constructor's current payload type
//! (`Inner`) and the same constructor applied to another type
//! (`WithType<B>`), which is enough to state `Functor` and `Monad`.

use crate::optional::Optional;

/// A type constructor applied to some payload type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
///
/// # Example
///
/// ```rust
/// use maybe::Optional;
/// use maybe::typeclass::TypeConstructor;
///
/// fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
/// where
///     T::WithType<String>: Default,
/// {
///     Default::default()
/// }
///
/// let text: Optional<String> = emptied(Optional::Present(42));
/// assert_eq!(text, Optional::Absent);
/// ```
pub trait TypeConstructor {
    /// The payload type, `T` for `Optional<T>`.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}
