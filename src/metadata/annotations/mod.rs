//! Annotation values attached to parameter positions.
//!
//! Annotations are the declarative metadata that binding code matches against
//! when deciding how to fill a parameter from an incoming request - a
//! path-variable marker carrying the variable name, a header marker carrying
//! the header key, and so on. This module contains the types used to represent
//! captured annotation data: argument values, named arguments, and the overall
//! annotation value structure.
//!
//! ## Usage
//!
//! ```rust
//! use bindscope::metadata::annotations::{AnnotationArgument, AnnotationValue};
//! use bindscope::metadata::typesystem::TypeName;
//!
//! let header = AnnotationValue::new(TypeName::new("bindscope::bind", "Header"))
//!     .with_arg(AnnotationArgument::Str("X-Request-Id".into()))
//!     .with_named_arg("required", AnnotationArgument::Bool(false));
//!
//! assert!(header.is_kind(&TypeName::new("bindscope::bind", "Header")));
//! ```

mod types;

pub use types::*;
