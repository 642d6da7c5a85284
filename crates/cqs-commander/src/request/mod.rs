//! Request markers for the two dispatch families.
//!
//! A request is any owned value tagged as either a [`Command`] (an intent to
//! change state) or a [`Query`] (an intent to read state). Both markers carry
//! the result type through an associated `Output` type and no behaviour of
//! their own. Routing keys on the request's concrete Rust type, so two
//! distinct types never share a handler even when one wraps the other.

use std::any::{TypeId, type_name};
use std::fmt;

/// Marker for requests that change system state.
///
/// # Example
///
/// ```
/// use cqs_commander::Command;
///
/// struct Greet {
///     name: String,
/// }
///
/// impl Command for Greet {
///     type Output = String;
/// }
/// ```
pub trait Command: Send + 'static {
    /// Value produced by the command's handler.
    type Output;
}

/// Marker for requests that read data without side effects.
///
/// # Example
///
/// ```
/// use cqs_commander::Query;
///
/// struct Double(u32);
///
/// impl Query for Double {
///     type Output = u32;
/// }
/// ```
pub trait Query: Send + 'static {
    /// Value produced by the query's handler.
    type Output;
}

/// Request family searched during dispatch.
///
/// Commands and queries share one resolution algorithm but never each
/// other's handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RequestKind {
    /// State-changing request.
    Command,
    /// Read-only request.
    Query,
}

impl RequestKind {
    /// Returns the capitalised label used in messages and log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Command => "Command",
            Self::Query => "Query",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime identity of one concrete request type within a family.
///
/// Only the family and the [`TypeId`] take part in equality and hashing; the
/// type name is carried for diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct RequestType {
    kind: RequestKind,
    id: TypeId,
    name: &'static str,
}

impl RequestType {
    /// Identifies the command type `C`.
    #[must_use]
    pub fn command<C: Command>() -> Self {
        Self::of::<C>(RequestKind::Command)
    }

    /// Identifies the query type `Q`.
    #[must_use]
    pub fn query<Q: Query>() -> Self {
        Self::of::<Q>(RequestKind::Query)
    }

    fn of<R: 'static>(kind: RequestKind) -> Self {
        Self {
            kind,
            id: TypeId::of::<R>(),
            name: type_name::<R>(),
        }
    }

    /// Returns the request family.
    #[must_use]
    pub const fn kind(&self) -> RequestKind {
        self.kind
    }

    /// Returns the [`TypeId`] of the concrete request type.
    #[must_use]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the fully qualified name of the concrete request type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for RequestType {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.id == other.id
    }
}

impl Eq for RequestType {}

impl std::hash::Hash for RequestType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.id.hash(state);
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.name)
    }
}
