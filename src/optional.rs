//! Optional type - a value that may be absent.
//!
//! This module provides `Optional<T>`, a closed sum type with exactly two
//! variants: `Present(T)` holding one value, and `Absent` holding nothing.
//! Absence is a first-class, type-distinguished state rather than a sentinel.
//!
//! Every operation comes in two forms: a free function taking the input as
//! its last (or first, for `and_then`) argument, and an inherent method.
//!
//! - [`fold`]: the elimination primitive the inspectors are defined through
//! - [`is_present`] / [`is_absent`]: structural inspection
//! - [`map`]: transform the payload when present
//! - [`and_then`]: chain computations that may be absent
//!
//! # Examples
//!
//! ```rust
//! use maybe::{and_then, fold, map, Optional};
//!
//! fn parse_int(text: &str) -> Optional<i32> {
//!     Optional::from(text.parse::<i32>().ok())
//! }
//!
//! fn validate_month(month: i32) -> Optional<i32> {
//!     if (1..=12).contains(&month) {
//!         Optional::Present(month)
//!     } else {
//!         Optional::Absent
//!     }
//! }
//!
//! assert_eq!(and_then(parse_int("7"), validate_month), Optional::Present(7));
//! assert_eq!(and_then(parse_int("13"), validate_month), Optional::Absent);
//!
//! let label = fold("none".to_string(), |n: i32| n.to_string(), map(|n| n * 2, parse_int("21")));
//! assert_eq!(label, "42");
//! ```

/// A value that is either `Present(T)` or `Absent`.
///
/// Instances are never changed by the combinators in this crate; each
/// combinator consumes its input and produces a new `Optional`.
///
/// `Optional<T>` is `Send` and `Sync` exactly when `T` is.
///
/// # Type Parameters
///
/// * `T` - The payload type. No bound is required.
///
/// # Examples
///
/// ```rust
/// use maybe::Optional;
///
/// let present: Optional<i32> = Optional::Present(42);
/// let absent: Optional<i32> = Optional::Absent;
///
/// assert!(present.is_present());
/// assert!(absent.is_absent());
/// assert_eq!(present.map(|n| n + 1), Optional::Present(43));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// No value.
    Absent,
    /// Exactly one value.
    Present(T),
}

// Send/Sync follow the payload
static_assertions::assert_impl_all!(Optional<i32>: Send, Sync);
static_assertions::assert_impl_all!(Optional<std::sync::Arc<String>>: Send, Sync);
static_assertions::assert_not_impl_any!(Optional<std::rc::Rc<i32>>: Send, Sync);
static_assertions::assert_not_impl_any!(Optional<std::cell::Cell<i32>>: Sync);

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps `value` in `Present`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    ///
    /// assert_eq!(Optional::present("hello"), Optional::Present("hello"));
    /// ```
    #[inline]
    pub const fn present(value: T) -> Self {
        Self::Present(value)
    }

    /// Returns `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    ///
    /// let absent: Optional<u8> = Optional::absent();
    /// assert_eq!(absent, Optional::Absent);
    /// ```
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Optional`: `transform(v)` for `Present(v)`, `default`
    /// for `Absent`.
    ///
    /// `transform` is called at most once, and only when a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    ///
    /// assert_eq!(Optional::Present(4).fold(0, |n| n * 10), 40);
    /// assert_eq!(Optional::<i32>::Absent.fold(0, |n| n * 10), 0);
    /// ```
    #[inline]
    pub fn fold<B, F>(self, default: B, transform: F) -> B
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Present(value) => transform(value),
            Self::Absent => default,
        }
    }

    /// Like [`fold`](Self::fold), but computes the default only when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    ///
    /// let text = Optional::<usize>::Absent.fold_with(|| "empty".to_string(), |n| n.to_string());
    /// assert_eq!(text, "empty");
    /// ```
    #[inline]
    pub fn fold_with<B, D, F>(self, default: D, transform: F) -> B
    where
        D: FnOnce() -> B,
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Present(value) => transform(value),
            Self::Absent => default(),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` for `Present(_)`, whatever the payload is.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    ///
    /// assert!(Optional::Present(0).is_present());
    /// assert!(Optional::Present(false).is_present());
    /// assert!(!Optional::<()>::Absent.is_present());
    /// ```
    #[inline]
    pub fn is_present(&self) -> bool {
        self.as_ref().fold(false, |_| true)
    }

    /// Returns `true` for `Absent`. Always the negation of
    /// [`is_present`](Self::is_present).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    ///
    /// assert!(Optional::<String>::Absent.is_absent());
    /// assert!(!Optional::Present(String::new()).is_absent());
    /// ```
    #[inline]
    pub fn is_absent(&self) -> bool {
        self.as_ref().fold(true, |_| false)
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `transform` to a present payload. `Absent` stays `Absent` and
    /// `transform` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    ///
    /// assert_eq!(Optional::Present(9.0_f64).map(f64::sqrt), Optional::Present(3.0));
    /// assert_eq!(Optional::<f64>::Absent.map(f64::sqrt), Optional::Absent);
    /// ```
    #[inline]
    pub fn map<B, F>(self, transform: F) -> Optional<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Present(value) => Optional::Present(transform(value)),
            Self::Absent => Optional::Absent,
        }
    }

    /// Feeds a present payload to `transform`, which decides the result.
    /// `Absent` short-circuits without calling `transform`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    ///
    /// let halve = |n: i32| {
    ///     if n % 2 == 0 {
    ///         Optional::Present(n / 2)
    ///     } else {
    ///         Optional::Absent
    ///     }
    /// };
    ///
    /// assert_eq!(Optional::Present(8).and_then(halve).and_then(halve), Optional::Present(2));
    /// assert_eq!(Optional::Present(6).and_then(halve).and_then(halve), Optional::Absent);
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, transform: F) -> Optional<B>
    where
        F: FnOnce(T) -> Optional<B>,
    {
        match self {
            Self::Present(value) => transform(value),
            Self::Absent => Optional::Absent,
        }
    }

    /// Keeps a present payload only if `predicate` accepts it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    ///
    /// assert_eq!(Optional::Present(4).filter(|n| n % 2 == 0), Optional::Present(4));
    /// assert_eq!(Optional::Present(3).filter(|n| n % 2 == 0), Optional::Absent);
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.and_then(|value| {
            if predicate(&value) {
                Self::Present(value)
            } else {
                Self::Absent
            }
        })
    }

    /// Calls `function` with a reference to a present payload and returns
    /// `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    ///
    /// let mut seen = Vec::new();
    /// let value = Optional::Present(5).inspect(|n| seen.push(*n)).map(|n| n + 1);
    /// assert_eq!(value, Optional::Present(6));
    /// assert_eq!(seen, vec![5]);
    /// ```
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Present(value) = &self {
            function(value);
        }
        self
    }

    // =========================================================================
    // Alternatives
    // =========================================================================

    /// Returns `self` if present, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    ///
    /// assert_eq!(Optional::Present(1).or(Optional::Present(2)), Optional::Present(1));
    /// assert_eq!(Optional::Absent.or(Optional::Present(2)), Optional::Present(2));
    /// ```
    #[inline]
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Present(_) => self,
            Self::Absent => other,
        }
    }

    /// Returns `self` if present, otherwise the result of `alternative`.
    /// `alternative` runs only when `self` is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    ///
    /// let fallback = Optional::Absent.or_else(|| Optional::Present("default"));
    /// assert_eq!(fallback, Optional::Present("default"));
    /// ```
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => alternative(),
        }
    }

    /// Returns the payload, or `default` when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    ///
    /// assert_eq!(Optional::Present(3).with_default(0), 3);
    /// assert_eq!(Optional::Absent.with_default(0), 0);
    /// ```
    #[inline]
    pub fn with_default(self, default: T) -> T {
        self.fold(default, |value| value)
    }

    // =========================================================================
    // Reference Views
    // =========================================================================

    /// Converts `&Optional<T>` into `Optional<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    ///
    /// let name = Optional::Present("maybe".to_string());
    /// assert_eq!(name.as_ref().map(|s| s.len()), Optional::Present(5));
    /// assert!(name.is_present());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Present(value) => Optional::Present(value),
            Self::Absent => Optional::Absent,
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a `Result`, using `error` for `Absent`.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    ///
    /// assert_eq!(Optional::Present(1).ok_or("missing"), Ok(1));
    /// assert_eq!(Optional::<i32>::Absent.ok_or("missing"), Err("missing"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        self.fold(Err(error), Ok)
    }

    /// Converts into a `Result`, computing the error only for `Absent`.
    ///
    /// # Errors
    ///
    /// Returns `Err(error())` if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    ///
    /// let result = Optional::<u16>::Absent.ok_or_else(|| "no port".to_string());
    /// assert_eq!(result, Err("no port".to_string()));
    /// ```
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.fold_with(|| Err(error()), Ok)
    }

    /// Converts into the standard library's `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    ///
    /// assert_eq!(Optional::Present(1).into_option(), Some(1));
    /// assert_eq!(Optional::<i32>::Absent.into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.fold(None, Some)
    }
}

impl<T> Default for Optional<T> {
    /// Returns `Absent`.
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Optional<T> {
    /// `Some(v)` becomes `Present(v)`, `None` becomes `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybe::Optional;
    ///
    /// let optional: Optional<i32> = Some(3).into();
    /// assert_eq!(optional, Optional::Present(3));
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(optional: Optional<T>) -> Self {
        optional.into_option()
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// Wraps `value` in [`Optional::Present`].
#[inline]
pub const fn present<T>(value: T) -> Optional<T> {
    Optional::Present(value)
}

/// Returns [`Optional::Absent`].
#[inline]
pub const fn absent<T>() -> Optional<T> {
    Optional::Absent
}

/// The identity function, handy for stating `map(identity, x) == x`.
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Eliminates `input`: `transform(v)` for `Present(v)`, `default` for `Absent`.
///
/// This is the single case analysis the other inspectors are built on.
///
/// # Examples
///
/// ```rust
/// use maybe::{fold, Optional};
///
/// assert_eq!(fold(0, |n: i32| n + 1, Optional::Present(1)), 2);
/// assert_eq!(fold(0, |n: i32| n + 1, Optional::Absent), 0);
/// ```
#[inline]
pub fn fold<A, B, F>(default: B, transform: F, input: Optional<A>) -> B
where
    F: FnOnce(A) -> B,
{
    input.fold(default, transform)
}

/// Like [`fold`], with a lazily computed default.
#[inline]
pub fn fold_with<A, B, D, F>(default: D, transform: F, input: Optional<A>) -> B
where
    D: FnOnce() -> B,
    F: FnOnce(A) -> B,
{
    input.fold_with(default, transform)
}

/// Returns `true` iff `input` is `Present(_)`.
///
/// # Examples
///
/// ```rust
/// use maybe::{is_present, Optional};
///
/// assert!(is_present(&Optional::Present("")));
/// assert!(!is_present(&Optional::<&str>::Absent));
/// ```
#[inline]
pub fn is_present<A>(input: &Optional<A>) -> bool {
    fold(false, |_| true, input.as_ref())
}

/// Returns `true` iff `input` is `Absent`.
///
/// # Examples
///
/// ```rust
/// use maybe::{is_absent, Optional};
///
/// assert!(is_absent(&Optional::<i32>::Absent));
/// assert!(!is_absent(&Optional::Present(0)));
/// ```
#[inline]
pub fn is_absent<A>(input: &Optional<A>) -> bool {
    fold(true, |_| false, input.as_ref())
}

/// Applies `transform` to the payload of `input` when present.
///
/// # Examples
///
/// ```rust
/// use maybe::{map, Optional};
///
/// assert_eq!(map(|s: &str| s.len(), Optional::Present("four")), Optional::Present(4));
/// ```
#[inline]
pub fn map<A, B, F>(transform: F, input: Optional<A>) -> Optional<B>
where
    F: FnOnce(A) -> B,
{
    input.map(transform)
}

/// Chains `transform` after `input`, short-circuiting on `Absent`.
///
/// # Examples
///
/// ```rust
/// use maybe::{and_then, Optional};
///
/// let checked_inverse = |n: f64| {
///     if n == 0.0 {
///         Optional::Absent
///     } else {
///         Optional::Present(1.0 / n)
///     }
/// };
///
/// assert_eq!(and_then(Optional::Present(4.0), checked_inverse), Optional::Present(0.25));
/// assert_eq!(and_then(Optional::Present(0.0), checked_inverse), Optional::Absent);
/// ```
#[inline]
pub fn and_then<A, B, F>(input: Optional<A>, transform: F) -> Optional<B>
where
    F: FnOnce(A) -> Optional<B>,
{
    input.and_then(transform)
}

/// Returns the payload of `input`, or `default` when absent.
#[inline]
pub fn with_default<A>(default: A, input: Optional<A>) -> A {
    input.with_default(default)
}

/// Combines two optionals with `function` when both are present.
///
/// `function` is not called if either side is absent.
///
/// # Examples
///
/// ```rust
/// use maybe::{map2, Optional};
///
/// let add = |a: i32, b: i32| a + b;
///
/// assert_eq!(map2(add, Optional::Present(1), Optional::Present(2)), Optional::Present(3));
/// assert_eq!(map2(add, Optional::Present(1), Optional::Absent), Optional::Absent);
/// ```
#[inline]
pub fn map2<A, B, C, F>(function: F, first: Optional<A>, second: Optional<B>) -> Optional<C>
where
    F: FnOnce(A, B) -> C,
{
    match (first, second) {
        (Optional::Present(a), Optional::Present(b)) => Optional::Present(function(a, b)),
        _ => Optional::Absent,
    }
}
