//! Registered members and their parameter metadata tables.
//!
//! A member is the owning side of every parameter descriptor: a method, a
//! constructor, or a field. Methods and constructors carry a pre-built
//! parameter table - one [`ParamMeta`] row per position, populated when the
//! member is registered - which is the explicit stand-in for what reflective
//! runtimes would compute on demand. Fields carry no table and are rejected as
//! parameter owners.
//!
//! The module follows a capture-then-share pattern:
//! - [`MethodBuilder`] / [`ConstructorBuilder`]: accumulate parameter rows at
//!   registration time
//! - [`MemberRegistry`]: assigns tokens and stores the finished, immutable
//!   members for concurrent lookup
//!
//! ## Usage
//!
//! ```rust
//! use bindscope::prelude::*;
//!
//! let registry = MemberRegistry::new();
//! let ctor = registry.register_constructor(
//!     ConstructorBuilder::new(TypeName::new("app::orders", "OrdersController"))
//!         .param(ParamMeta::new(TypeSig::named("app::orders", "OrderRepository"))),
//! )?;
//!
//! assert_eq!(ctor.kind(), MemberKind::Constructor);
//! assert_eq!(ctor.params().map(|params| params.len()), Some(1));
//! # Ok::<(), bindscope::Error>(())
//! ```

mod builder;
mod registry;
mod types;

pub use builder::*;
pub use registry::*;
pub use types::*;

use std::sync::Arc;

/// A reference to a `Member`
pub type MemberRc = Arc<Member>;
