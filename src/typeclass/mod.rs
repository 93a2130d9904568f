//! Type class traits for `Optional`.
//!
//! - [`TypeConstructor`]: Higher-kinded type emulation through GATs
//! - [`Functor`]: Mapping over the payload
//! - [`Applicative`]: Lifting values and combining independent payloads
//! - [`Monad`]: Sequencing dependent computations
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native higher-kinded types. `TypeConstructor` uses
//! Generic Associated Types so that `Functor` and `Monad` can name
//! `Optional<B>` from an `Optional<A>`.
//!
//! # Examples
//!
//! ```rust
//! use maybe::Optional;
//! use maybe::typeclass::{Applicative, Functor, Monad};
//!
//! fn double_all<M>(value: M) -> M::WithType<i64>
//! where
//!     M: Functor<Inner = i64>,
//! {
//!     value.fmap(|n| n * 2)
//! }
//!
//! assert_eq!(double_all(Optional::Present(21)), Optional::Present(42));
//!
//! let chained = <Optional<()>>::pure(3).flat_map(|n| Optional::Present(n + 1));
//! assert_eq!(chained, Optional::Present(4));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
