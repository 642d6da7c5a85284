//! Errors raised by the mediator and the handler registry.
//!
//! Every variant names the request family and, where one exists, the concrete
//! request type so a failed dispatch can be traced to its request without a
//! debugger. Failures produced by handlers are not represented here: they are
//! part of the request's `Output` and pass through unchanged.

use thiserror::Error;

use crate::request::RequestKind;

/// Errors arising while wiring or dispatching requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediatorError {
    /// The request value was absent.
    #[error("{kind} must not be absent")]
    InvalidInput {
        /// Family of the rejected request.
        kind: RequestKind,
    },

    /// No handler is bound to the request's concrete type.
    #[error("no handler found for {kind}: {request}")]
    HandlerNotFound {
        /// Family of the request.
        kind: RequestKind,
        /// Fully qualified request type name.
        request: &'static str,
    },

    /// More than one handler is bound to the request's concrete type.
    #[error("ambiguous handlers for {kind} {request}: {}", .handlers.join(", "))]
    AmbiguousHandler {
        /// Family of the request.
        kind: RequestKind,
        /// Fully qualified request type name.
        request: &'static str,
        /// Type names of every competing handler.
        handlers: Vec<&'static str>,
    },

    /// The bound handler does not implement the contract for the request.
    #[error("handler {handler} cannot serve {kind} {request}")]
    HandlerMismatch {
        /// Family of the request.
        kind: RequestKind,
        /// Fully qualified request type name.
        request: &'static str,
        /// Type name of the offending handler.
        handler: &'static str,
    },
}
