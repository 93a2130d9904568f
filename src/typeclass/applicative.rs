//! Applicative type class - lifting values and combining independent payloads.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! Self::pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! Self::pure(a).map2(Self::pure(b), f) == Self::pure(f(a, b))
//! ```

use super::functor::Functor;
use crate::optional::{self, Optional};

/// A `Functor` that can lift plain values and combine two contexts.
///
/// # Examples
///
/// ```rust
/// use maybe::Optional;
/// use maybe::typeclass::Applicative;
///
/// let lifted: Optional<i32> = <Optional<()>>::pure(42);
/// assert_eq!(lifted, Optional::Present(42));
///
/// let sum = Optional::Present(1).map2(Optional::Present(2), |a, b| a + b);
/// assert_eq!(sum, Optional::Present(3));
/// ```
pub trait Applicative: Functor {
    /// Lifts `value` into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines `self` and `other` with `function` when both hold a payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    /// use maybe::typeclass::Applicative;
    ///
    /// let missing = Optional::Present(1).map2(Optional::<i32>::Absent, |a, b| a + b);
    /// assert_eq!(missing, Optional::Absent);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Applies a function held in `self` to the payload of `other`.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self::Inner: FnOnce(B) -> Output;

    /// Pairs the payloads of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    /// use maybe::typeclass::Applicative;
    ///
    /// let paired = Optional::Present(1).product(Optional::Present('a'));
    /// assert_eq!(paired, Optional::Present((1, 'a')));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }
}

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Present(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        optional::map2(function, self, other)
    }

    #[inline]
    fn apply<B, Output>(self, other: Optional<B>) -> Optional<Output>
    where
        A: FnOnce(B) -> Output,
    {
        optional::map2(|function, b| function(b), self, other)
    }
}
