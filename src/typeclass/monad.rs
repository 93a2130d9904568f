//! Monad type class - sequencing computations where each step depends on the
//! previous payload.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe::Optional;
//! use maybe::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Optional<i32> {
//!     Optional::from(text.parse::<i32>().ok()).filter(|&n| n > 0)
//! }
//!
//! let result = Optional::Present("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Optional::Present(n * 2));
//! assert_eq!(result, Optional::Present(84));
//! ```

use super::applicative::Applicative;
use crate::optional::Optional;

/// A type class for types that support sequencing of computations.
pub trait Monad: Applicative {
    /// Feeds the payload to `function` and returns its result.
    ///
    /// For `Optional` this is the same operation as
    /// [`Optional::and_then`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    /// use maybe::typeclass::Monad;
    ///
    /// let small = Optional::Present(5).flat_map(|n| {
    ///     if n > 10 {
    ///         Optional::Present(n)
    ///     } else {
    ///         Optional::Absent
    ///     }
    /// });
    /// assert_eq!(small, Optional::Absent);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences `self` then `next`, discarding the payload of `self`.
    ///
    /// Absence in `self` propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    /// use maybe::typeclass::Monad;
    ///
    /// let next = Optional::Present(5).then(Optional::Present("hello"));
    /// assert_eq!(next, Optional::Present("hello"));
    /// assert_eq!(Optional::<i32>::Absent.then(Optional::Present("hello")), Optional::Absent);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        self.and_then(function)
    }
}
