//! The parameter descriptor value object.
//!
//! A [`Parameter`] adapts one position of a registered method's or
//! constructor's parameter table into a uniform abstraction carrying a name, a
//! declared type, a parameterized type, and an annotation list. Binding code
//! treats method and constructor parameters identically through it.
//!
//! All four derived facts are resolved exactly once, at construction, from the
//! owning member's table; the descriptor is immutable afterwards and safe to
//! share across threads without synchronization.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::{
    metadata::{
        annotations::{AnnotationValueList, AnnotationValueRc},
        member::{Member, MemberRc},
        typesystem::{TypeName, TypeSig},
    },
    Error, Result,
};

/// A reference-counted pointer to a `Parameter`
pub type ParameterRc = Arc<Parameter>;
/// A vector that holds a list of `Parameter` instances for storage on parent objects
pub type ParameterList = Arc<boxcar::Vec<ParameterRc>>;

/// Represents a method or constructor parameter.
///
/// Constructed once per `(owner, index)` pair, typically fanned out over the
/// owner's parameter count when a callable's metadata is first assembled, and
/// held for the lifetime of that cached metadata.
///
/// # Equality
///
/// Two descriptors are equal iff they have the same index and the same owner
/// identity (compared through the owner's token). The name, types and
/// annotations are derived from `(owner, index)` and deliberately excluded.
///
/// # Examples
///
/// ```rust
/// use bindscope::prelude::*;
///
/// let registry = MemberRegistry::new();
/// let show = registry.register_method(
///     MethodBuilder::new(TypeName::new("app::users", "UsersController"), "show")
///         .param(ParamMeta::new(TypeSig::I64)),
/// )?;
///
/// let id = Parameter::new(0, "id", show)?;
/// assert_eq!(id.name(), "id");
/// assert_eq!(id.declared_type(), &TypeName::primitive("i64"));
/// # Ok::<(), bindscope::Error>(())
/// ```
#[derive(Clone)]
pub struct Parameter {
    index: usize,
    name: String,
    owner: MemberRc,
    declared_type: TypeName,
    generic_type: TypeSig,
    annotations: AnnotationValueList,
}

impl Parameter {
    /// Builds the descriptor for position `index` of `owner`, resolving the
    /// declared type, parameterized type, and annotation list from the owner's
    /// parameter table.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedOwner`] if `owner` is not a method or
    /// constructor; this is a caller bug, not a recoverable runtime condition.
    /// An out-of-range `index` fails with the metadata layer's own
    /// [`Error::ParamOutOfBounds`], propagated untranslated.
    pub fn new(index: usize, name: impl Into<String>, owner: MemberRc) -> Result<Parameter> {
        let (declared_type, generic_type, annotations) = match &*owner {
            Member::Method(method) => {
                let meta = method.param(index)?;
                (
                    meta.declared_type.clone(),
                    meta.generic_type.clone(),
                    meta.annotations.clone(),
                )
            }
            Member::Constructor(constructor) => {
                let meta = constructor.param(index)?;
                (
                    meta.declared_type.clone(),
                    meta.generic_type.clone(),
                    meta.annotations.clone(),
                )
            }
            Member::Field(_) => {
                return Err(Error::UnsupportedOwner {
                    kind: owner.kind(),
                })
            }
        };

        Ok(Parameter {
            index,
            name: name.into(),
            owner,
            declared_type,
            generic_type,
            annotations,
        })
    }

    /// Builds descriptors for `owner`'s parameter table, one per supplied
    /// name, in declaration order.
    ///
    /// # Errors
    ///
    /// Fails like [`Parameter::new`] does: [`Error::UnsupportedOwner`] for a
    /// non-callable owner, [`Error::ParamOutOfBounds`] when more names are
    /// supplied than the owner has parameters.
    pub fn for_member<I>(owner: &MemberRc, names: I) -> Result<Vec<Parameter>>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        names
            .into_iter()
            .enumerate()
            .map(|(index, name)| Parameter::new(index, name, owner.clone()))
            .collect()
    }

    /// The zero-based position of this parameter in its owner's table
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The caller-supplied logical name of this parameter
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The member owning this parameter
    #[must_use]
    pub fn owner(&self) -> &MemberRc {
        &self.owner
    }

    /// The declared type of this parameter, with generic arguments discarded
    #[must_use]
    pub fn declared_type(&self) -> &TypeName {
        &self.declared_type
    }

    /// The full parameterized type of this parameter
    #[must_use]
    pub fn parameterized_type(&self) -> &TypeSig {
        &self.generic_type
    }

    /// Returns true if an annotation of the given kind is attached to this
    /// parameter position
    #[must_use]
    pub fn is_annotation_present(&self, kind: &TypeName) -> bool {
        self.annotation(kind).is_some()
    }

    /// The first annotation of the given kind, if any.
    ///
    /// Parameter annotation lists are single-digit length in practice, so this
    /// is a linear scan.
    #[must_use]
    pub fn annotation(&self, kind: &TypeName) -> Option<AnnotationValueRc> {
        self.annotations
            .iter()
            .map(|(_, value)| value)
            .find(|value| value.is_kind(kind))
            .cloned()
    }

    /// All annotations attached to this parameter position
    #[must_use]
    pub fn annotations(&self) -> &AnnotationValueList {
        &self.annotations
    }

    /// Same sequence as [`Parameter::annotations`]; parameters have no
    /// annotation inheritance to distinguish.
    #[must_use]
    pub fn declared_annotations(&self) -> &AnnotationValueList {
        &self.annotations
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.owner.token() == other.owner.token()
    }
}

impl Eq for Parameter {}

impl Hash for Parameter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
        self.owner.token().hash(state);
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parameter(index: {}, name: {}, owner: {})",
            self.index,
            self.name,
            self.owner.token()
        )
    }
}
