use std::fmt;
use std::sync::Arc;

use strum::{EnumCount, EnumIter, IntoEnumIterator};

use crate::{
    metadata::{
        annotations::{AnnotationValue, AnnotationValueList},
        token::Token,
        typesystem::{TypeName, TypeSig},
    },
    Error, Result,
};

/// The shape of a registered member.
///
/// Only methods and constructors carry parameter tables; fields complete the
/// member space but are rejected as parameter owners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum MemberKind {
    /// A dispatchable method
    Method,
    /// A constructor
    Constructor,
    /// A data field
    Field,
}

impl MemberKind {
    /// Returns the tag stored in the high byte of tokens of this kind
    #[must_use]
    pub fn tag(self) -> u8 {
        match self {
            MemberKind::Method => 0x01,
            MemberKind::Constructor => 0x02,
            MemberKind::Field => 0x03,
        }
    }

    /// Resolves a token tag back to a member kind
    #[must_use]
    pub fn from_tag(tag: u8) -> Option<MemberKind> {
        MemberKind::iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberKind::Method => write!(f, "method"),
            MemberKind::Constructor => write!(f, "constructor"),
            MemberKind::Field => write!(f, "field"),
        }
    }
}

/// One row of a member's parameter table.
///
/// Captures everything the binding layer needs to know about a single
/// parameter position: the declared (erased) type, the full parameterized
/// type, and the annotations attached to that position. The declared type is
/// resolved once, when the row is built, by erasing the parameterized type.
#[derive(Clone)]
pub struct ParamMeta {
    /// The declared type, with generic arguments discarded
    pub declared_type: TypeName,
    /// The full parameterized type
    pub generic_type: TypeSig,
    /// Annotations attached to this parameter position
    pub annotations: AnnotationValueList,
}

impl ParamMeta {
    /// Captures a parameter position from its parameterized type
    #[must_use]
    pub fn new(generic_type: TypeSig) -> Self {
        ParamMeta {
            declared_type: generic_type.erased(),
            generic_type,
            annotations: Arc::new(boxcar::Vec::new()),
        }
    }

    /// Attaches an annotation to this parameter position
    #[must_use]
    pub fn with_annotation(self, value: AnnotationValue) -> Self {
        self.annotations.push(Arc::new(value));
        self
    }
}

/// A registered method with its pre-built parameter table.
pub struct Method {
    /// Token assigned at registration
    pub token: Token,
    /// The type declaring this method
    pub declaring_type: TypeName,
    /// The method name
    pub name: String,
    params: Vec<ParamMeta>,
}

impl Method {
    pub(crate) fn new(
        token: Token,
        declaring_type: TypeName,
        name: String,
        params: Vec<ParamMeta>,
    ) -> Self {
        Method {
            token,
            declaring_type,
            name,
            params,
        }
    }

    /// Number of rows in this method's parameter table
    #[must_use]
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// All parameter rows in declaration order
    #[must_use]
    pub fn params(&self) -> &[ParamMeta] {
        &self.params
    }

    /// The parameter row at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParamOutOfBounds`] if `index` is not within this
    /// method's parameter table.
    pub fn param(&self, index: usize) -> Result<&ParamMeta> {
        self.params.get(index).ok_or(Error::ParamOutOfBounds {
            token: self.token,
            index,
            count: self.params.len(),
        })
    }
}

/// A registered constructor with its pre-built parameter table.
pub struct Constructor {
    /// Token assigned at registration
    pub token: Token,
    /// The type this constructor produces
    pub declaring_type: TypeName,
    params: Vec<ParamMeta>,
}

impl Constructor {
    pub(crate) fn new(token: Token, declaring_type: TypeName, params: Vec<ParamMeta>) -> Self {
        Constructor {
            token,
            declaring_type,
            params,
        }
    }

    /// Number of rows in this constructor's parameter table
    #[must_use]
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// All parameter rows in declaration order
    #[must_use]
    pub fn params(&self) -> &[ParamMeta] {
        &self.params
    }

    /// The parameter row at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParamOutOfBounds`] if `index` is not within this
    /// constructor's parameter table.
    pub fn param(&self, index: usize) -> Result<&ParamMeta> {
        self.params.get(index).ok_or(Error::ParamOutOfBounds {
            token: self.token,
            index,
            count: self.params.len(),
        })
    }
}

/// A registered field. Fields own no parameters; they exist so the member
/// space covers everything a registry may hold.
pub struct Field {
    /// Token assigned at registration
    pub token: Token,
    /// The type declaring this field
    pub declaring_type: TypeName,
    /// The field name
    pub name: String,
    /// The field's type
    pub field_type: TypeName,
}

/// A registered member, tagged by shape.
pub enum Member {
    /// A method with a parameter table
    Method(Method),
    /// A constructor with a parameter table
    Constructor(Constructor),
    /// A field, which carries no parameter table
    Field(Field),
}

impl Member {
    /// The kind of this member
    #[must_use]
    pub fn kind(&self) -> MemberKind {
        match self {
            Member::Method(_) => MemberKind::Method,
            Member::Constructor(_) => MemberKind::Constructor,
            Member::Field(_) => MemberKind::Field,
        }
    }

    /// The registry-assigned token identifying this member
    #[must_use]
    pub fn token(&self) -> Token {
        match self {
            Member::Method(method) => method.token,
            Member::Constructor(constructor) => constructor.token,
            Member::Field(field) => field.token,
        }
    }

    /// The type declaring this member
    #[must_use]
    pub fn declaring_type(&self) -> &TypeName {
        match self {
            Member::Method(method) => &method.declaring_type,
            Member::Constructor(constructor) => &constructor.declaring_type,
            Member::Field(field) => &field.declaring_type,
        }
    }

    /// The member's parameter table, if it has one
    #[must_use]
    pub fn params(&self) -> Option<&[ParamMeta]> {
        match self {
            Member::Method(method) => Some(method.params()),
            Member::Constructor(constructor) => Some(constructor.params()),
            Member::Field(_) => None,
        }
    }
}
