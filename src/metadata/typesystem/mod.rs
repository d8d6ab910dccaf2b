//! Type descriptions captured at registration time.
//!
//! Every parameter position is described twice: once as a [`TypeName`] - the
//! nominal identity with generic arguments discarded - and once as a
//! [`TypeSig`] - the full parameterized view. The pair stands in for the
//! `Class` / `Type` split that reflective runtimes expose, without requiring
//! any runtime type introspection.
//!
//! # Examples
//!
//! ```rust
//! use bindscope::metadata::typesystem::{TypeName, TypeSig};
//!
//! let sig = TypeSig::generic(
//!     TypeName::new("alloc::vec", "Vec"),
//!     vec![TypeSig::Str],
//! );
//!
//! // The parameterized view keeps the argument, the erased view drops it
//! assert_eq!(format!("{}", sig), "alloc::vec::Vec<str>");
//! assert_eq!(sig.erased().fullname(), "alloc::vec::Vec");
//! ```

mod base;

pub use base::{TypeName, TypeSig};
