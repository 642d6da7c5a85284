//! Mediator routing commands and queries to their handlers.
//!
//! The [`Mediator`] is the single entry point callers use. For each request it
//! derives the concrete [`RequestType`], asks its [`HandlerLookup`] for the
//! bindings of that type, and invokes the unique handler found. The handler's
//! output is returned as-is; mediator failures are reported through
//! [`MediatorError`] before any handler runs.
//!
//! A mediator keeps no state between calls besides its read-only lookup, so a
//! single instance can serve any number of threads.

use tracing::debug;

use crate::error::MediatorError;
use crate::registry::{HandlerBinding, HandlerLookup, HandlerRegistry};
use crate::request::{Command, Query, RequestKind, RequestType};

/// Tracing target for dispatch operations.
const MEDIATOR_TARGET: &str = "cqs_commander::mediator";

/// Dispatches requests to the handler bound to their concrete type.
///
/// # Example
///
/// ```
/// use cqs_commander::{Command, CommandHandler, HandlerRegistry, Mediator, MediatorError};
///
/// struct Greet {
///     name: String,
/// }
///
/// impl Command for Greet {
///     type Output = String;
/// }
///
/// struct GreetHandler;
///
/// impl CommandHandler<Greet> for GreetHandler {
///     fn handle(&self, command: Greet) -> String {
///         format!("Hello, {}", command.name)
///     }
/// }
///
/// let mut registry = HandlerRegistry::new();
/// registry
///     .register_command::<Greet, _>(GreetHandler)
///     .expect("registration succeeds");
///
/// let mediator = Mediator::new(registry);
/// let greeting = mediator
///     .send_command(Greet { name: "Ada".into() })
///     .expect("handler is bound");
/// assert_eq!(greeting, "Hello, Ada");
///
/// let absent = mediator.send_optional_command(None::<Greet>);
/// assert!(matches!(absent, Err(MediatorError::InvalidInput { .. })));
/// ```
#[derive(Debug, Default)]
pub struct Mediator<L = HandlerRegistry> {
    lookup: L,
}

impl<L> Mediator<L> {
    /// Creates a mediator that resolves handlers through `lookup`.
    #[must_use]
    pub const fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Returns the lookup consulted on every dispatch.
    #[must_use]
    pub const fn lookup(&self) -> &L {
        &self.lookup
    }
}

impl<L: HandlerLookup> Mediator<L> {
    /// Sends a command to its handler and returns the handler's result.
    ///
    /// # Errors
    ///
    /// Returns [`MediatorError::HandlerNotFound`] when no handler is bound to
    /// `C`, [`MediatorError::AmbiguousHandler`] when several are, and
    /// [`MediatorError::HandlerMismatch`] when the binding does not serve `C`.
    pub fn send_command<C: Command>(&self, command: C) -> Result<C::Output, MediatorError> {
        let request = RequestType::command::<C>();
        let binding = self.resolve(&request)?;
        let handler = binding
            .as_command::<C>()
            .ok_or_else(|| mismatch(&request, &binding))?;
        trace_dispatch(&request, &binding);
        Ok(handler.handle(command))
    }

    /// Sends a query to its handler and returns the handler's result.
    ///
    /// # Errors
    ///
    /// Returns [`MediatorError::HandlerNotFound`] when no handler is bound to
    /// `Q`, [`MediatorError::AmbiguousHandler`] when several are, and
    /// [`MediatorError::HandlerMismatch`] when the binding does not serve `Q`.
    pub fn send_query<Q: Query>(&self, query: Q) -> Result<Q::Output, MediatorError> {
        let request = RequestType::query::<Q>();
        let binding = self.resolve(&request)?;
        let handler = binding
            .as_query::<Q>()
            .ok_or_else(|| mismatch(&request, &binding))?;
        trace_dispatch(&request, &binding);
        Ok(handler.handle(query))
    }

    /// Sends a command that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`MediatorError::InvalidInput`] for `None` without consulting
    /// the lookup; otherwise fails as [`Self::send_command`] does.
    pub fn send_optional_command<C: Command>(
        &self,
        command: Option<C>,
    ) -> Result<C::Output, MediatorError> {
        command.map_or_else(
            || Err(absent(RequestKind::Command)),
            |present| self.send_command(present),
        )
    }

    /// Sends a query that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`MediatorError::InvalidInput`] for `None` without consulting
    /// the lookup; otherwise fails as [`Self::send_query`] does.
    pub fn send_optional_query<Q: Query>(
        &self,
        query: Option<Q>,
    ) -> Result<Q::Output, MediatorError> {
        query.map_or_else(
            || Err(absent(RequestKind::Query)),
            |present| self.send_query(present),
        )
    }

    /// Finds the single binding for `request`.
    fn resolve(&self, request: &RequestType) -> Result<HandlerBinding, MediatorError> {
        let mut bindings = self.lookup.find(request).into_iter();
        match (bindings.next(), bindings.next()) {
            (None, _) => Err(MediatorError::HandlerNotFound {
                kind: request.kind(),
                request: request.name(),
            }),
            (Some(binding), None) => Ok(binding),
            (Some(first), Some(second)) => Err(MediatorError::AmbiguousHandler {
                kind: request.kind(),
                request: request.name(),
                handlers: [first, second]
                    .into_iter()
                    .chain(bindings)
                    .map(|binding| binding.handler_name())
                    .collect(),
            }),
        }
    }
}

impl From<HandlerRegistry> for Mediator {
    fn from(registry: HandlerRegistry) -> Self {
        Self::new(registry)
    }
}

const fn absent(kind: RequestKind) -> MediatorError {
    MediatorError::InvalidInput { kind }
}

fn mismatch(request: &RequestType, binding: &HandlerBinding) -> MediatorError {
    MediatorError::HandlerMismatch {
        kind: request.kind(),
        request: request.name(),
        handler: binding.handler_name(),
    }
}

fn trace_dispatch(request: &RequestType, binding: &HandlerBinding) {
    debug!(
        target: MEDIATOR_TARGET,
        kind = %request.kind(),
        request = request.name(),
        handler = binding.handler_name(),
        "dispatching request"
    );
}
