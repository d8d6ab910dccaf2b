use thiserror::Error;

use crate::metadata::{member::MemberKind, token::Token};

/// The generic Error type, which provides coverage for all errors this library
/// can potentially return.
///
/// This enum covers all failure modes of member registration, lookup, and
/// parameter descriptor construction. Each variant provides specific context
/// about the failure to enable appropriate error handling.
///
/// # Error Categories
///
/// ## Descriptor Construction Errors
/// - [`Error::UnsupportedOwner`] - A non-callable member was passed as a
///   parameter owner
/// - [`Error::ParamOutOfBounds`] - A parameter index beyond the owner's table
///
/// ## Registry Errors
/// - [`Error::TokenSpaceExhausted`] - No ordinals left for a member kind
/// - [`Error::MemberNotFound`] - Token lookup failed
#[derive(Error, Debug)]
pub enum Error {
    /// A parameter descriptor was requested for a member that owns no
    /// parameters.
    ///
    /// Only methods and constructors carry parameter tables. Passing any other
    /// member kind is a caller bug, not a recoverable runtime condition, and
    /// is surfaced at construction time.
    #[error("Parameters can only be evaluated for methods or constructors - got a {kind}")]
    UnsupportedOwner {
        /// The kind of member the caller supplied as owner
        kind: MemberKind,
    },

    /// A parameter index points beyond the owner's parameter table.
    ///
    /// Raised by the member metadata layer itself and propagated untranslated
    /// by descriptor construction.
    #[error("Parameter index {index} is out of bounds for member {token} with {count} parameters")]
    ParamOutOfBounds {
        /// Token of the member whose table was indexed
        token: Token,
        /// The out-of-range index the caller supplied
        index: usize,
        /// Length of the member's parameter table
        count: usize,
    },

    /// The 24-bit ordinal space for a member kind is used up.
    ///
    /// Tokens carry the registration ordinal in their low 24 bits, so a single
    /// registry can hold at most 0xFFFFFF members of each kind.
    #[error("Token space for {0} members is exhausted")]
    TokenSpaceExhausted(MemberKind),

    /// Failed to find a member in the `MemberRegistry`.
    ///
    /// The associated [`Token`] identifies which member was not found.
    #[error("Failed to find member in MemberRegistry - {0}")]
    MemberNotFound(Token),
}
