// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # bindscope
//!
//! A thread-safe callable-metadata registry and parameter descriptor library for
//! HTTP parameter binding.
//!
//! Dispatch frameworks need to know, for every method or constructor they can
//! invoke, what each parameter position looks like: its declared type, its full
//! parameterized type, and the annotations that drive binding decisions. In
//! runtimes with reflection this information is pulled out of the callable at
//! request time; `bindscope` instead captures it once, explicitly, when the
//! callable is registered, and serves it back through immutable
//! [`Parameter`] descriptors.
//!
//! ## Features
//!
//! - **Explicit metadata capture** - Parameter tables are built at registration
//!   time, no runtime type introspection required
//! - **Immutable descriptors** - [`Parameter`] values are resolved once at
//!   construction and freely shareable across threads
//! - **Lock-free registry** - Token-keyed member storage with concurrent
//!   registration and wait-free lookup
//! - **Generic-aware types** - Both the erased and the parameterized view of
//!   every parameter type are preserved
//!
//! ## Quick Start
//!
//! Add `bindscope` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bindscope = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust
//! use bindscope::prelude::*;
//!
//! let registry = MemberRegistry::new();
//!
//! // Register a dispatchable method together with its parameter table
//! let show = registry.register_method(
//!     MethodBuilder::new(TypeName::new("app::users", "UsersController"), "show")
//!         .param(
//!             ParamMeta::new(TypeSig::I64).with_annotation(
//!                 AnnotationValue::new(TypeName::new("bindscope::bind", "PathVariable"))
//!                     .with_arg(AnnotationArgument::Str("id".into())),
//!             ),
//!         ),
//! )?;
//!
//! // Fan a descriptor out over the parameter position
//! let id = Parameter::new(0, "id", show.clone())?;
//! assert_eq!(id.declared_type().fullname(), "i64");
//! assert!(id.is_annotation_present(&TypeName::new("bindscope::bind", "PathVariable")));
//! # Ok::<(), bindscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `bindscope` is organized into several key modules:
//!
//! - [`prelude`] - Convenient re-exports of commonly used types
//! - [`metadata`] - Member registration, type descriptions, annotations, and
//!   the parameter descriptor itself
//! - [`Error`] and [`Result`] - Comprehensive error handling
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result):
//!
//! ```rust
//! use bindscope::{Error, prelude::*};
//!
//! let registry = MemberRegistry::new();
//! let price = registry.register_field(
//!     TypeName::new("app::orders", "Order"),
//!     "price",
//!     TypeName::primitive("u64"),
//! )?;
//!
//! // Fields own no parameters; the descriptor refuses them at construction
//! match Parameter::new(0, "price", price) {
//!     Err(Error::UnsupportedOwner { kind }) => assert_eq!(kind, MemberKind::Field),
//!     _ => unreachable!(),
//! }
//! # Ok::<(), bindscope::Error>(())
//! ```

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use bindscope::prelude::*;
///
/// let registry = MemberRegistry::new();
/// assert!(registry.is_empty());
/// ```
pub mod prelude;

/// Member registration, type descriptions, annotations, and parameter
/// descriptors.
///
/// # Key Components
///
/// ## Member Capture
/// - [`metadata::member::MemberRegistry`] - Thread-safe token-keyed store
/// - [`metadata::member::MethodBuilder`] / [`metadata::member::ConstructorBuilder`] -
///   Registration-time construction of parameter tables
/// - [`metadata::token`] - Compact member identity
///
/// ## Type Descriptions
/// - [`metadata::typesystem::TypeName`] - Nominal (erased) type identity
/// - [`metadata::typesystem::TypeSig`] - Parameterized view preserving generic
///   arguments
///
/// ## Binding Metadata
/// - [`metadata::annotations`] - Annotation values attached to parameter
///   positions
/// - [`metadata::parameter::Parameter`] - The immutable per-position descriptor
pub mod metadata;

/// `bindscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is
/// always [`Error`]. Used consistently throughout the crate for all fallible
/// operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `bindscope` Error type
///
/// The main error type for all operations in this crate. See [`Error`] for the
/// full taxonomy.
pub use error::Error;

/// The parameter descriptor - the value object this crate exists to serve.
///
/// See [`metadata::parameter::Parameter`] for the construction contract and
/// accessor surface.
pub use metadata::parameter::Parameter;

/// The member registry - the explicit replacement for runtime reflection.
///
/// See [`metadata::member::MemberRegistry`] for registration and lookup.
pub use metadata::member::MemberRegistry;
