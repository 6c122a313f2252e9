use std::fmt;

/// Errors that can occur when using an `Optional`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalError {
    /// A required argument, or the result of a caller-supplied function, was absent.
    ///
    /// Carries the name of the argument or result that was missing.
    NullReference(&'static str),
    /// A value was requested from an empty `Optional`
    NoSuchElement,
    /// The operation is not supported by `Optional`, regardless of its contents
    UnsupportedOperation(&'static str),
}

impl OptionalError {
    /// Returns true for errors caused by an absent argument or callback result
    pub fn is_null_reference(&self) -> bool {
        matches!(self, OptionalError::NullReference(_))
    }

    /// Returns true when the error reports a missing value
    pub fn is_no_such_element(&self) -> bool {
        matches!(self, OptionalError::NoSuchElement)
    }

    /// Returns true for operations that are never supported
    pub fn is_unsupported(&self) -> bool {
        matches!(self, OptionalError::UnsupportedOperation(_))
    }
}

impl fmt::Display for OptionalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OptionalError::NullReference(what) => write!(f, "Required {} was absent", what),
            OptionalError::NoSuchElement => write!(f, "No value present"),
            OptionalError::UnsupportedOperation(op) => {
                write!(f, "Operation {} is not supported", op)
            }
        }
    }
}

impl std::error::Error for OptionalError {}
