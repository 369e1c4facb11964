//! Tagged tree value model, path model, and error type for `diffx_core`.
//!
//! This crate is the foundation every other crate in the workspace builds
//! on: it has no notion of diffing, normalization, or file formats. It just
//! defines what a structured value *is* (`Value`), how a location inside one
//! is addressed (`Path`), and the one error kind the rest of the system
//! raises (`DiffError`).
//!
//! # Example
//!
//! ```rust
//! use diffx_value::{Path, Value};
//!
//! let v = Value::Integer(30);
//! assert_eq!(v.kind().to_string(), "integer");
//!
//! let path = Path::root().push_key("a").push_index(2).push_key("name");
//! assert_eq!(path.render(), "a[2].name");
//! ```

mod error;
mod path;
mod value;

pub use error::{DiffError, DiffErrorKind};
pub use path::{Path, Segment};
pub use value::{Value, ValueKind};
