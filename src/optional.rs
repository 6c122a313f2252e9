use crate::any_value::AnyRef;
use crate::error::OptionalError;
use std::any::Any;
use std::convert::Infallible;
use std::fmt;
use tracing::trace;

/// A value that may be absent at an argument or result boundary.
///
/// This is the absence marker accepted by constructors and returned by
/// fallback operations. It is deliberately distinct from [`Optional`] itself.
pub type Nullable<T> = Option<T>;

/// An immutable container that either holds exactly one value or is empty.
///
/// Every operation that needs a caller-supplied function takes it as
/// `Option<F>`, where `None` stands for an absent function. Operations report
/// contract violations as [`OptionalError`] instead of panicking.
///
/// # Examples
///
/// ```
/// use optional_value::{Optional, OptionalError};
///
/// let name = Optional::of(Some("ferris".to_string()))?
///     .filter(Some(|n: &String| !n.is_empty()))?
///     .map(Some(|n: String| Some(n.to_uppercase())))?;
///
/// assert_eq!(name.get()?, "FERRIS");
/// assert_eq!(name.to_string(), "Optional[FERRIS]");
/// # Ok::<(), OptionalError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optional<T> {
    /// No value
    Empty,
    /// A value that is known to be present
    Present(T),
}

fn null_reference(what: &'static str) -> OptionalError {
    trace!(argument = what, "absent argument or result");
    OptionalError::NullReference(what)
}

fn require<F>(arg: Option<F>, what: &'static str) -> Result<F, OptionalError> {
    arg.ok_or_else(|| null_reference(what))
}

fn unsupported(op: &'static str) -> OptionalError {
    trace!(operation = op, "unsupported operation");
    OptionalError::UnsupportedOperation(op)
}

impl<T> Optional<T> {
    /// The shared empty instance.
    pub const EMPTY: Self = Optional::Empty;

    /// Returns an empty `Optional`.
    ///
    /// Every empty `Optional` of a given type compares equal to every other.
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    /// Creates an `Optional` holding `value`.
    ///
    /// # Errors
    ///
    /// Returns `OptionalError::NullReference` if `value` is absent.
    pub fn of(value: Nullable<T>) -> Result<Self, OptionalError> {
        match value {
            Some(value) => Ok(Optional::Present(value)),
            None => Err(null_reference("value")),
        }
    }

    /// Creates an `Optional` from a value that may be absent.
    ///
    /// An absent value yields [`Optional::empty`]; this never fails.
    pub fn of_nullable(value: Nullable<T>) -> Self {
        match value {
            Some(value) => Optional::Present(value),
            None => Self::empty(),
        }
    }

    /// Returns true if a value is present
    pub const fn is_present(&self) -> bool {
        matches!(self, Optional::Present(_))
    }

    /// Returns true if no value is present
    pub const fn is_empty(&self) -> bool {
        matches!(self, Optional::Empty)
    }

    /// Borrows the contained value.
    ///
    /// # Errors
    ///
    /// Returns `OptionalError::NoSuchElement` if the container is empty.
    pub fn get(&self) -> Result<&T, OptionalError> {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Empty => Err(OptionalError::NoSuchElement),
        }
    }

    /// Takes the contained value out of the container.
    ///
    /// # Errors
    ///
    /// Returns `OptionalError::NoSuchElement` if the container is empty.
    pub fn into_inner(self) -> Result<T, OptionalError> {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Empty => Err(OptionalError::NoSuchElement),
        }
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    ///
    /// Lets the consuming transforms run against a borrowed container.
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Present(value) => Optional::Present(value),
            Optional::Empty => Optional::Empty,
        }
    }

    /// Invokes `action` with the value if one is present.
    ///
    /// An empty container returns immediately without looking at `action`.
    ///
    /// # Errors
    ///
    /// Returns `OptionalError::NullReference` if a value is present and
    /// `action` is absent.
    pub fn if_present<F>(&self, action: Option<F>) -> Result<(), OptionalError>
    where
        F: FnOnce(&T),
    {
        match self {
            Optional::Empty => Ok(()),
            Optional::Present(value) => {
                let action = require(action, "action")?;
                action(value);
                Ok(())
            }
        }
    }

    /// Invokes `action` with the value if present, otherwise `empty_action`.
    ///
    /// Only the function that applies to the current state must be present.
    ///
    /// # Errors
    ///
    /// Returns `OptionalError::NullReference` if the applicable function is absent.
    pub fn if_present_or_else<F, G>(
        &self,
        action: Option<F>,
        empty_action: Option<G>,
    ) -> Result<(), OptionalError>
    where
        F: FnOnce(&T),
        G: FnOnce(),
    {
        match self {
            Optional::Present(value) => {
                let action = require(action, "action")?;
                action(value);
            }
            Optional::Empty => {
                let empty_action = require(empty_action, "empty action")?;
                empty_action();
            }
        }
        Ok(())
    }

    /// Keeps the value only if it matches `predicate`.
    ///
    /// An empty container is returned unchanged and the predicate is not called.
    ///
    /// # Errors
    ///
    /// Returns `OptionalError::NullReference` if `predicate` is absent, whether
    /// or not a value is present.
    pub fn filter<P>(self, predicate: Option<P>) -> Result<Self, OptionalError>
    where
        P: FnOnce(&T) -> bool,
    {
        let predicate = require(predicate, "predicate")?;
        match self {
            Optional::Present(value) => {
                if predicate(&value) {
                    Ok(Optional::Present(value))
                } else {
                    Ok(Self::empty())
                }
            }
            Optional::Empty => Ok(self),
        }
    }

    /// Applies `mapper` to the value and wraps whatever it returns.
    ///
    /// A mapper returning `None` produces an empty container rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `OptionalError::NullReference` if `mapper` is absent, whether or
    /// not a value is present.
    pub fn map<U, F>(self, mapper: Option<F>) -> Result<Optional<U>, OptionalError>
    where
        F: FnOnce(T) -> Nullable<U>,
    {
        let mapper = require(mapper, "mapper")?;
        match self {
            Optional::Present(value) => Ok(Optional::of_nullable(mapper(value))),
            Optional::Empty => Ok(Optional::empty()),
        }
    }

    /// Applies `mapper` to the value and returns its `Optional` without re-wrapping.
    ///
    /// On an empty container the mapper is never called and the result is empty.
    ///
    /// # Errors
    ///
    /// - Returns `OptionalError::NullReference` if `mapper` is absent
    /// - Returns `OptionalError::NullReference` if `mapper` itself returns `None`
    pub fn flat_map<U, F>(self, mapper: Option<F>) -> Result<Optional<U>, OptionalError>
    where
        F: FnOnce(T) -> Nullable<Optional<U>>,
    {
        let mapper = require(mapper, "mapper")?;
        match self {
            Optional::Present(value) => {
                mapper(value).ok_or_else(|| null_reference("mapper result"))
            }
            Optional::Empty => Ok(Optional::empty()),
        }
    }

    /// Returns this container if a value is present, otherwise the one
    /// produced by `supplier`.
    ///
    /// # Errors
    ///
    /// - Returns `OptionalError::NullReference` if `supplier` is absent
    /// - Returns `OptionalError::NullReference` if `supplier` is called and returns `None`
    pub fn or<S>(self, supplier: Option<S>) -> Result<Self, OptionalError>
    where
        S: FnOnce() -> Nullable<Optional<T>>,
    {
        let supplier = require(supplier, "supplier")?;
        match self {
            Optional::Present(_) => Ok(self),
            Optional::Empty => supplier().ok_or_else(|| null_reference("supplier result")),
        }
    }

    /// Returns the value if present, otherwise `other` exactly as given.
    ///
    /// `other` may itself be absent.
    pub fn or_else(self, other: Nullable<T>) -> Nullable<T> {
        match self {
            Optional::Present(value) => Some(value),
            Optional::Empty => other,
        }
    }

    /// Returns the value if present, otherwise the result of `supplier`.
    ///
    /// The supplier's result is returned as-is and may be absent.
    ///
    /// # Errors
    ///
    /// Returns `OptionalError::NullReference` if the container is empty and
    /// `supplier` is absent.
    pub fn or_else_get<S>(self, supplier: Option<S>) -> Result<Nullable<T>, OptionalError>
    where
        S: FnOnce() -> Nullable<T>,
    {
        match self {
            Optional::Present(value) => Ok(Some(value)),
            Optional::Empty => {
                let supplier = require(supplier, "supplier")?;
                Ok(supplier())
            }
        }
    }

    /// Returns the value if present, otherwise the error built by `exception_supplier`.
    ///
    /// The caller picks the error type; it only needs to be convertible from
    /// [`OptionalError`] so the contract failures below can be reported in it.
    ///
    /// # Errors
    ///
    /// - Returns `OptionalError::NullReference` (converted into `E`) if the
    ///   container is empty and `exception_supplier` is absent
    /// - Returns the supplied error if the container is empty
    /// - Returns `OptionalError::NoSuchElement` (converted into `E`) if the
    ///   supplier returns `None`
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_value::{Optional, OptionalError};
    ///
    /// let port: Optional<u16> = Optional::empty();
    /// let result = port.or_else_throw(Some(|| None::<OptionalError>));
    /// assert_eq!(result, Err(OptionalError::NoSuchElement));
    /// ```
    pub fn or_else_throw<E, S>(self, exception_supplier: Option<S>) -> Result<T, E>
    where
        S: FnOnce() -> Nullable<E>,
        E: From<OptionalError>,
    {
        match self {
            Optional::Present(value) => Ok(value),
            Optional::Empty => {
                let exception_supplier = require(exception_supplier, "exception supplier")?;
                Err(exception_supplier().unwrap_or_else(|| E::from(OptionalError::NoSuchElement)))
            }
        }
    }

    /// Would expose the contents as a stream. Always unsupported.
    ///
    /// # Errors
    ///
    /// Always returns `OptionalError::UnsupportedOperation`.
    pub fn stream(&self) -> Result<Infallible, OptionalError> {
        Err(unsupported("stream"))
    }

    /// Would compute a hash of the container. Always unsupported, which is
    /// also why `Optional` does not implement [`std::hash::Hash`].
    ///
    /// # Errors
    ///
    /// Always returns `OptionalError::UnsupportedOperation`.
    pub fn hash_code(&self) -> Result<u64, OptionalError> {
        Err(unsupported("hash_code"))
    }
}

impl<T> Optional<T>
where
    T: PartialEq + 'static,
{
    /// Compares this container against a value of unknown type.
    ///
    /// - The very same container is always equal to itself
    /// - Anything that is not an `Optional<T>` is never equal
    /// - Two empty containers of the same element type are equal
    /// - A present and an empty container are never equal
    /// - Two present containers are equal when their values are
    ///
    /// # Examples
    ///
    /// ```
    /// use optional_value::Optional;
    ///
    /// let a = Optional::of_nullable(Some(1));
    /// let b = Optional::of_nullable(Some(1));
    ///
    /// assert!(a.equals(&b));
    /// assert!(!a.equals(&1));
    /// assert!(Optional::<i32>::empty().equals(&Optional::<i32>::empty()));
    /// ```
    pub fn equals(&self, other: &dyn Any) -> bool {
        let other = AnyRef::new(other);
        if other.addr() == self as *const Self as *const () && other.is_type::<Self>() {
            return true;
        }

        match other.downcast_ref::<Self>() {
            Some(other) => self == other,
            None => false,
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Nullable<T>> for Optional<T> {
    fn from(value: Nullable<T>) -> Self {
        Optional::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Nullable<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Present(value) => Some(value),
            Optional::Empty => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Optional::Present(value) => write!(f, "Optional[{}]", value),
            Optional::Empty => write!(f, "Optional.empty"),
        }
    }
}
