//! Callable metadata capture and introspection.
//!
//! This module replaces runtime reflection with explicit metadata capture:
//! framework code registers every dispatchable method or constructor once,
//! together with a pre-built per-parameter table, and downstream binding code
//! reads that table back through immutable parameter descriptors.
//!
//! # Key Components
//!
//! - [`token`] - Compact member identity (kind tag + registration ordinal)
//! - [`typesystem`] - Erased and parameterized type descriptions
//! - [`annotations`] - Declarative metadata attached to parameter positions
//! - [`member`] - The member union, registration builders, and the registry
//! - [`parameter`] - The parameter descriptor value object

pub mod annotations;
pub mod member;
pub mod parameter;
pub mod token;
pub mod typesystem;
