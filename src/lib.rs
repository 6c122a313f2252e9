//! # optional-value
//!
//! An immutable container for a value that may or may not be there.
//!
//! `optional-value` provides [`Optional<T>`], which is either present (holding
//! exactly one value) or empty. Construction and every chainable operation check
//! their arguments and report contract violations through [`OptionalError`]
//! rather than letting an absent value travel silently through a program.
//!
//! ## Key Features
//!
//! - **Explicit absence**: argument-level absence is `None`, kept apart from the container's own empty state
//! - **Checked callbacks**: absent functions and absent callback results are errors, not panics
//! - **Immutable**: transforms hand back new containers; nothing is modified in place
//! - **Lazy**: callbacks run at most once, and only when the container's state calls for them
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use optional_value::{Optional, OptionalError};
//!
//! fn main() -> Result<(), OptionalError> {
//!     // A value that is required to be present
//!     let port = Optional::of(Some(8080u16))?;
//!
//!     // A value that may be missing
//!     let host: Optional<String> = Optional::of_nullable(None);
//!
//!     println!("Port: {}", port.get()?);
//!     println!("Host: {}", host);
//!
//!     // Handle errors properly
//!     match host.get() {
//!         Ok(value) => println!("Host: {}", value),
//!         Err(OptionalError::NoSuchElement) => println!("No host configured"),
//!         Err(e) => println!("Other error: {}", e),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Chaining Transforms
//!
//! ```rust
//! use optional_value::{Optional, OptionalError};
//!
//! fn main() -> Result<(), OptionalError> {
//!     let raw = Optional::of(Some(" 42 ".to_string()))?;
//!
//!     let parsed = raw
//!         .map(Some(|s: String| Some(s.trim().to_string())))?
//!         .filter(Some(|s: &String| !s.is_empty()))?
//!         .flat_map(Some(|s: String| Some(Optional::of_nullable(s.parse::<i64>().ok()))))?;
//!
//!     assert_eq!(parsed.or_else(Some(0)), Some(42));
//!
//!     // A mapper that yields nothing produces an empty container
//!     let nothing = Optional::of(Some(1))?.map(Some(|_: i32| None::<i32>))?;
//!     assert!(nothing.is_empty());
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Falling Back
//!
//! ```rust
//! use optional_value::{Optional, OptionalError};
//!
//! #[derive(Debug, PartialEq)]
//! enum ConfigError {
//!     Missing(&'static str),
//!     Optional(OptionalError),
//! }
//!
//! impl From<OptionalError> for ConfigError {
//!     fn from(err: OptionalError) -> Self {
//!         ConfigError::Optional(err)
//!     }
//! }
//!
//! let timeout: Optional<u64> = Optional::empty();
//!
//! // Lazily computed default
//! assert_eq!(timeout.or_else_get(Some(|| Some(30))), Ok(Some(30)));
//!
//! // Another container as the fallback
//! let fallback = timeout.or(Some(|| Some(Optional::of_nullable(Some(60)))));
//! assert_eq!(fallback, Ok(Optional::Present(60)));
//!
//! // A caller-defined error
//! let err = timeout.or_else_throw(Some(|| Some(ConfigError::Missing("timeout"))));
//! assert_eq!(err, Err(ConfigError::Missing("timeout")));
//! ```
//!
//! ### Error Handling
//!
//! ```rust
//! use optional_value::{Optional, OptionalError};
//!
//! // Absent values cannot be wrapped with `of`
//! match Optional::<i32>::of(None) {
//!     Ok(_) => println!("unexpected"),
//!     Err(OptionalError::NullReference(what)) => println!("{} was absent", what),
//!     Err(e) => println!("Other error: {}", e),
//! }
//!
//! // Absent callbacks are reported, not ignored
//! let present = Optional::of_nullable(Some(1));
//! assert!(present.filter(None::<fn(&i32) -> bool>).is_err());
//!
//! // Some operations are never available
//! assert!(matches!(
//!     present.hash_code(),
//!     Err(OptionalError::UnsupportedOperation(_))
//! ));
//! ```

mod any_value;
mod error;
mod optional;

pub use error::OptionalError;
pub use optional::{Nullable, Optional};
