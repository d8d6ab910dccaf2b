use crate::metadata::{
    member::{Constructor, Method, ParamMeta},
    token::Token,
    typesystem::TypeName,
};

/// Accumulates the parameter table of a method before registration.
///
/// Rows are appended in declaration order; the finished builder is handed to
/// [`MemberRegistry::register_method`](crate::MemberRegistry::register_method),
/// which assigns the token and freezes the table.
pub struct MethodBuilder {
    declaring_type: TypeName,
    name: String,
    params: Vec<ParamMeta>,
}

impl MethodBuilder {
    /// Starts a method registration for `declaring_type` and `name`
    #[must_use]
    pub fn new(declaring_type: TypeName, name: impl Into<String>) -> Self {
        MethodBuilder {
            declaring_type,
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Appends one parameter row in declaration order
    #[must_use]
    pub fn param(mut self, meta: ParamMeta) -> Self {
        self.params.push(meta);
        self
    }

    pub(crate) fn build(self, token: Token) -> Method {
        Method::new(token, self.declaring_type, self.name, self.params)
    }
}

/// Accumulates the parameter table of a constructor before registration.
///
/// The constructor counterpart of [`MethodBuilder`]; handed to
/// [`MemberRegistry::register_constructor`](crate::MemberRegistry::register_constructor).
pub struct ConstructorBuilder {
    declaring_type: TypeName,
    params: Vec<ParamMeta>,
}

impl ConstructorBuilder {
    /// Starts a constructor registration for `declaring_type`
    #[must_use]
    pub fn new(declaring_type: TypeName) -> Self {
        ConstructorBuilder {
            declaring_type,
            params: Vec::new(),
        }
    }

    /// Appends one parameter row in declaration order
    #[must_use]
    pub fn param(mut self, meta: ParamMeta) -> Self {
        self.params.push(meta);
        self
    }

    pub(crate) fn build(self, token: Token) -> Constructor {
        Constructor::new(token, self.declaring_type, self.params)
    }
}
