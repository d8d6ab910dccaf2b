//! # bindscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types
//! from the bindscope library. Import this module to get quick access to the
//! essential types for member registration and parameter introspection.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all bindscope operations
pub use crate::Error;

/// The result type used throughout bindscope
pub use crate::Result;

// ================================================================================================
// Member Identity
// ================================================================================================

/// Member token type for referencing registered members
pub use crate::metadata::token::Token;

// ================================================================================================
// Type System
// ================================================================================================

/// Erased and parameterized type descriptions
pub use crate::metadata::typesystem::{TypeName, TypeSig};

// ================================================================================================
// Annotations
// ================================================================================================

/// Annotation values and their arguments
pub use crate::metadata::annotations::{
    AnnotationArgument, AnnotationNamedArgument, AnnotationValue, AnnotationValueList,
    AnnotationValueRc,
};

// ================================================================================================
// Members and Registration
// ================================================================================================

/// Member shapes and the registry
pub use crate::metadata::member::{
    Constructor, ConstructorBuilder, Field, Member, MemberKind, MemberRc, MemberRegistry, Method,
    MethodBuilder, ParamMeta,
};

// ================================================================================================
// Parameter Descriptors
// ================================================================================================

/// The parameter descriptor and its storage aliases
pub use crate::metadata::parameter::{Parameter, ParameterList, ParameterRc};
