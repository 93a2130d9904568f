//! # maybe
//!
//! An optional-value type with a small combinator algebra.
//!
//! ## Overview
//!
//! [`Optional<T>`] is a closed enum with two variants, `Present(T)` and
//! `Absent`. Absence is a first-class state distinguished by the type rather
//! than a sentinel. The crate provides:
//!
//! - **Elimination**: [`fold`], the single case analysis everything else uses
//! - **Inspection**: [`is_present`], [`is_absent`]
//! - **Transformation**: [`map`], [`and_then`], plus `filter`, `or_else`, ...
//! - **Type Classes**: `Functor`, `Applicative`, `Monad` instances
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and the instances for `Optional`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use maybe::prelude::*;
//!
//! fn parse_int(text: &str) -> Optional<u32> {
//!     Optional::from(text.parse::<u32>().ok())
//! }
//!
//! fn validate_month(month: u32) -> Optional<u32> {
//!     present(month).filter(|m| (1..=12).contains(m))
//! }
//!
//! assert_eq!(and_then(parse_int("7"), validate_month), present(7));
//! assert!(is_absent(&and_then(parse_int("13"), validate_month)));
//! assert!(is_absent(&and_then(parse_int("abc"), validate_month)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the `Optional` type, its free functions and, with the
/// `typeclass` feature, the type class traits.
///
/// # Usage
///
/// ```rust
/// use maybe::prelude::*;
/// ```
pub mod prelude {
    pub use crate::optional::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod optional;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use optional::{
    Optional, absent, and_then, fold, fold_with, identity, is_absent, is_present, map, map2,
    present, with_default,
};
