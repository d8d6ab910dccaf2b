//! Central member registry for callable metadata capture.
//!
//! The `MemberRegistry` is the explicit replacement for a reflective runtime's
//! view of methods, constructors and fields: framework code registers each
//! member once, and the registry assigns it a [`Token`] and stores it for
//! concurrent lookup for the rest of the process lifetime.
//!
//! # Registry Architecture
//!
//! - **Token-based lookup**: Primary index keyed by member token (`SkipMap`)
//! - **Name-based lookup**: Secondary index from method name to tokens
//!   (`DashMap`)
//! - **Ordinal assignment**: One atomic counter per member kind
//!
//! # Thread Safety
//!
//! Registration and lookup are safe from multiple threads: the primary index
//! is lock-free, the name index uses sharded locking, and ordinals are
//! assigned with atomic operations. Members are immutable once registered.

use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc,
};

use crossbeam_skiplist::SkipMap;
use dashmap::DashMap;
use strum::EnumCount;

use crate::{
    metadata::{
        member::{ConstructorBuilder, Field, Member, MemberKind, MemberRc, MethodBuilder},
        token::Token,
        typesystem::TypeName,
    },
    Error, Result,
};

/// Largest ordinal representable in the low 24 bits of a token
const MAX_ORDINAL: u32 = 0x00FF_FFFF;

/// Thread-safe registry of members, keyed by token.
///
/// # Examples
///
/// ```rust
/// use bindscope::prelude::*;
///
/// let registry = MemberRegistry::new();
///
/// let show = registry.register_method(
///     MethodBuilder::new(TypeName::new("app::users", "UsersController"), "show")
///         .param(ParamMeta::new(TypeSig::I64)),
/// )?;
///
/// // Look up by token
/// let found = registry.resolve(&show.token())?;
/// assert_eq!(found.token(), show.token());
///
/// // Look up by method name
/// assert_eq!(registry.methods_by_name("show").len(), 1);
/// # Ok::<(), bindscope::Error>(())
/// ```
pub struct MemberRegistry {
    /// Primary index: token to member
    members: SkipMap<Token, MemberRc>,
    /// Secondary index: method name to registration tokens
    methods_by_name: DashMap<String, Vec<Token>>,
    /// Next ordinal per member kind
    ordinals: [AtomicU32; MemberKind::COUNT],
}

impl MemberRegistry {
    /// Creates an empty registry. Ordinal 0 is the null token of each kind and
    /// is never assigned, so counters start at 1.
    #[must_use]
    pub fn new() -> Self {
        MemberRegistry {
            members: SkipMap::new(),
            methods_by_name: DashMap::new(),
            ordinals: std::array::from_fn(|_| AtomicU32::new(1)),
        }
    }

    fn next_token(&self, kind: MemberKind) -> Result<Token> {
        let ordinal = self.ordinals[kind as usize].fetch_add(1, Ordering::Relaxed);
        if ordinal > MAX_ORDINAL {
            return Err(Error::TokenSpaceExhausted(kind));
        }
        Ok(Token::from_parts(kind.tag(), ordinal))
    }

    /// Registers a method and returns the shared member handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TokenSpaceExhausted`] when the 24-bit ordinal space
    /// for methods is used up.
    pub fn register_method(&self, builder: MethodBuilder) -> Result<MemberRc> {
        let token = self.next_token(MemberKind::Method)?;
        let method = builder.build(token);

        self.methods_by_name
            .entry(method.name.clone())
            .or_default()
            .push(token);

        let member = Arc::new(Member::Method(method));
        self.members.insert(token, member.clone());
        Ok(member)
    }

    /// Registers a constructor and returns the shared member handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TokenSpaceExhausted`] when the 24-bit ordinal space
    /// for constructors is used up.
    pub fn register_constructor(&self, builder: ConstructorBuilder) -> Result<MemberRc> {
        let token = self.next_token(MemberKind::Constructor)?;
        let member = Arc::new(Member::Constructor(builder.build(token)));
        self.members.insert(token, member.clone());
        Ok(member)
    }

    /// Registers a field and returns the shared member handle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TokenSpaceExhausted`] when the 24-bit ordinal space
    /// for fields is used up.
    pub fn register_field(
        &self,
        declaring_type: TypeName,
        name: impl Into<String>,
        field_type: TypeName,
    ) -> Result<MemberRc> {
        let token = self.next_token(MemberKind::Field)?;
        let member = Arc::new(Member::Field(Field {
            token,
            declaring_type,
            name: name.into(),
            field_type,
        }));
        self.members.insert(token, member.clone());
        Ok(member)
    }

    /// Looks up a member by token
    #[must_use]
    pub fn get(&self, token: &Token) -> Option<MemberRc> {
        self.members.get(token).map(|entry| entry.value().clone())
    }

    /// Looks up a member by token, failing when absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MemberNotFound`] if no member carries the token.
    pub fn resolve(&self, token: &Token) -> Result<MemberRc> {
        self.get(token).ok_or(Error::MemberNotFound(*token))
    }

    /// All methods registered under `name`, in registration order
    #[must_use]
    pub fn methods_by_name(&self, name: &str) -> Vec<MemberRc> {
        match self.methods_by_name.get(name) {
            Some(tokens) => tokens.iter().filter_map(|token| self.get(token)).collect(),
            None => Vec::new(),
        }
    }

    /// Number of registered members
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if nothing has been registered yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Default for MemberRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{member::ParamMeta, typesystem::TypeSig};

    fn controller() -> TypeName {
        TypeName::new("app::users", "UsersController")
    }

    #[test]
    fn test_register_assigns_kind_tagged_tokens() {
        let registry = MemberRegistry::new();

        let method = registry
            .register_method(MethodBuilder::new(controller(), "show"))
            .unwrap();
        let constructor = registry
            .register_constructor(ConstructorBuilder::new(controller()))
            .unwrap();
        let field = registry
            .register_field(controller(), "repository", controller())
            .unwrap();

        assert_eq!(method.token().tag(), MemberKind::Method.tag());
        assert_eq!(constructor.token().tag(), MemberKind::Constructor.tag());
        assert_eq!(field.token().tag(), MemberKind::Field.tag());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_ordinals_are_per_kind_and_start_at_one() {
        let registry = MemberRegistry::new();

        let first = registry
            .register_method(MethodBuilder::new(controller(), "index"))
            .unwrap();
        let second = registry
            .register_method(MethodBuilder::new(controller(), "show"))
            .unwrap();
        let constructor = registry
            .register_constructor(ConstructorBuilder::new(controller()))
            .unwrap();

        assert_eq!(first.token().ordinal(), 1);
        assert_eq!(second.token().ordinal(), 2);
        assert_eq!(constructor.token().ordinal(), 1);
        assert!(!first.token().is_null());
    }

    #[test]
    fn test_get_and_resolve() {
        let registry = MemberRegistry::new();
        let method = registry
            .register_method(MethodBuilder::new(controller(), "show"))
            .unwrap();

        assert!(registry.get(&method.token()).is_some());
        assert!(registry.resolve(&method.token()).is_ok());

        let missing = Token::from_parts(MemberKind::Method.tag(), 999);
        assert!(registry.get(&missing).is_none());
        match registry.resolve(&missing) {
            Err(Error::MemberNotFound(token)) => assert_eq!(token, missing),
            other => panic!("expected MemberNotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_methods_by_name_in_registration_order() {
        let registry = MemberRegistry::new();
        registry
            .register_method(
                MethodBuilder::new(controller(), "show").param(ParamMeta::new(TypeSig::I64)),
            )
            .unwrap();
        registry
            .register_method(
                MethodBuilder::new(TypeName::new("app::orders", "OrdersController"), "show")
                    .param(ParamMeta::new(TypeSig::Str)),
            )
            .unwrap();

        let methods = registry.methods_by_name("show");
        assert_eq!(methods.len(), 2);
        assert!(methods[0].token().ordinal() < methods[1].token().ordinal());
        assert!(registry.methods_by_name("missing").is_empty());
    }

    #[test]
    fn test_concurrent_registration_yields_unique_tokens() {
        let registry = MemberRegistry::new();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..25 {
                        registry
                            .register_method(MethodBuilder::new(controller(), "show"))
                            .unwrap();
                    }
                });
            }
        });

        assert_eq!(registry.len(), 100);
        assert_eq!(registry.methods_by_name("show").len(), 100);
    }
}
