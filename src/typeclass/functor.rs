//! Functor type class - mapping over a payload.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use maybe::Optional;
//! use maybe::typeclass::Functor;
//!
//! let transformed: Optional<String> = Optional::Present(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Optional::Present("5".to_string()));
//!
//! let absent: Optional<String> = Optional::<i32>::Absent.fmap(|n| n.to_string());
//! assert_eq!(absent, Optional::Absent);
//! ```

use super::higher::TypeConstructor;
use crate::optional::Optional;

/// A type class for types whose payload can be transformed without changing
/// their shape.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    /// use maybe::typeclass::Functor;
    ///
    /// assert_eq!(Optional::Present(5).fmap(|n| n * 2), Optional::Present(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a reference to the payload, leaving `self` intact.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    /// use maybe::typeclass::Functor;
    ///
    /// let name = Optional::Present("hello".to_string());
    /// assert_eq!(name.fmap_ref(|s| s.len()), Optional::Present(5));
    /// assert_eq!(name, Optional::Present("hello".to_string()));
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the payload with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    /// use maybe::typeclass::Functor;
    ///
    /// assert_eq!(Optional::Present(5).replace("replaced"), Optional::Present("replaced"));
    /// assert_eq!(Optional::<i32>::Absent.replace("replaced"), Optional::Absent);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the payload, keeping only the shape.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Optional<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Optional<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}
