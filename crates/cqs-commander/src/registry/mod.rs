//! Handler registry keyed by concrete request type.
//!
//! The [`HandlerRegistry`] stores one type-erased handler per
//! [`RequestType`]. It is populated during application wiring and then moved
//! into a [`Mediator`](crate::Mediator), after which it is only read. A second
//! handler for the same request type is rejected at registration, so lookups
//! against a registry never observe ambiguity.
//!
//! The mediator reaches handlers through the [`HandlerLookup`] trait, which
//! lets applications substitute their own binding source.

use std::any::{Any, type_name};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tracing::debug;

use crate::error::MediatorError;
use crate::handler::{CommandHandler, QueryHandler};
use crate::request::{Command, Query, RequestKind, RequestType};

/// Tracing target for registry operations.
const REGISTRY_TARGET: &str = "cqs_commander::registry";

/// A type-erased handler together with its type name.
///
/// Cloning a binding is cheap; the handler itself is shared.
#[derive(Debug, Clone)]
pub struct HandlerBinding {
    handler: Arc<dyn Any + Send + Sync>,
    handler_name: &'static str,
}

impl HandlerBinding {
    /// Erases a command handler for storage in a lookup.
    #[must_use]
    pub fn command<C, H>(handler: H) -> Self
    where
        C: Command,
        H: CommandHandler<C>,
    {
        let typed: Arc<dyn CommandHandler<C>> = Arc::new(handler);
        Self {
            handler: Arc::new(typed),
            handler_name: type_name::<H>(),
        }
    }

    /// Erases a query handler for storage in a lookup.
    #[must_use]
    pub fn query<Q, H>(handler: H) -> Self
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        let typed: Arc<dyn QueryHandler<Q>> = Arc::new(handler);
        Self {
            handler: Arc::new(typed),
            handler_name: type_name::<H>(),
        }
    }

    /// Returns the fully qualified type name of the bound handler.
    #[must_use]
    pub const fn handler_name(&self) -> &'static str {
        self.handler_name
    }

    /// Recovers the handler as a command handler for `C`, if it is one.
    pub(crate) fn as_command<C: Command>(&self) -> Option<&dyn CommandHandler<C>> {
        self.handler
            .downcast_ref::<Arc<dyn CommandHandler<C>>>()
            .map(|handler| &**handler)
    }

    /// Recovers the handler as a query handler for `Q`, if it is one.
    pub(crate) fn as_query<Q: Query>(&self) -> Option<&dyn QueryHandler<Q>> {
        self.handler
            .downcast_ref::<Arc<dyn QueryHandler<Q>>>()
            .map(|handler| &**handler)
    }
}

/// Source of handler bindings consulted on every dispatch.
///
/// Implementations answer synchronously and must not change their answers
/// while a mediator holds them. Returning more than one binding marks the
/// request type as ambiguous.
///
/// # Example
///
/// ```
/// use cqs_commander::{HandlerBinding, HandlerLookup, Mediator, RequestType};
///
/// struct EmptyLookup;
///
/// impl HandlerLookup for EmptyLookup {
///     fn find(&self, _request: &RequestType) -> Vec<HandlerBinding> {
///         Vec::new()
///     }
/// }
///
/// let mediator = Mediator::new(EmptyLookup);
/// # let _ = mediator;
/// ```
pub trait HandlerLookup: Send + Sync {
    /// Returns every binding registered for the request type.
    fn find(&self, request: &RequestType) -> Vec<HandlerBinding>;
}

/// Summary of one registry entry, for startup diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingDescriptor {
    /// Request family.
    pub kind: RequestKind,
    /// Fully qualified request type name.
    pub request: &'static str,
    /// Fully qualified handler type name.
    pub handler: &'static str,
}

/// Registry mapping each concrete request type to its unique handler.
///
/// # Example
///
/// ```
/// use cqs_commander::{HandlerRegistry, Query, QueryHandler};
///
/// struct Double(u32);
///
/// impl Query for Double {
///     type Output = u32;
/// }
///
/// struct Doubler;
///
/// impl QueryHandler<Double> for Doubler {
///     fn handle(&self, query: Double) -> u32 {
///         query.0 * 2
///     }
/// }
///
/// let mut registry = HandlerRegistry::new();
/// registry.register_query::<Double, _>(Doubler).expect("first binding");
/// assert!(registry.contains_query::<Double>());
/// assert!(registry.register_query::<Double, _>(Doubler).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HandlerRegistry {
    bindings: HashMap<RequestType, HandlerBinding>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `handler` to the command type `C`.
    ///
    /// # Errors
    ///
    /// Returns [`MediatorError::AmbiguousHandler`] if `C` already has a
    /// command handler. The existing binding is kept.
    pub fn register_command<C, H>(&mut self, handler: H) -> Result<(), MediatorError>
    where
        C: Command,
        H: CommandHandler<C>,
    {
        self.bind(RequestType::command::<C>(), HandlerBinding::command::<C, H>(handler))
    }

    /// Binds `handler` to the query type `Q`.
    ///
    /// # Errors
    ///
    /// Returns [`MediatorError::AmbiguousHandler`] if `Q` already has a
    /// query handler. The existing binding is kept.
    pub fn register_query<Q, H>(&mut self, handler: H) -> Result<(), MediatorError>
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        self.bind(RequestType::query::<Q>(), HandlerBinding::query::<Q, H>(handler))
    }

    fn bind(&mut self, request: RequestType, binding: HandlerBinding) -> Result<(), MediatorError> {
        match self.bindings.entry(request) {
            Entry::Occupied(existing) => Err(MediatorError::AmbiguousHandler {
                kind: request.kind(),
                request: request.name(),
                handlers: vec![existing.get().handler_name(), binding.handler_name()],
            }),
            Entry::Vacant(slot) => {
                debug!(
                    target: REGISTRY_TARGET,
                    kind = %request.kind(),
                    request = request.name(),
                    handler = binding.handler_name(),
                    "bound handler"
                );
                slot.insert(binding);
                Ok(())
            }
        }
    }

    /// Returns `true` when a handler is bound to the command type `C`.
    #[must_use]
    pub fn contains_command<C: Command>(&self) -> bool {
        self.bindings.contains_key(&RequestType::command::<C>())
    }

    /// Returns `true` when a handler is bound to the query type `Q`.
    #[must_use]
    pub fn contains_query<Q: Query>(&self) -> bool {
        self.bindings.contains_key(&RequestType::query::<Q>())
    }

    /// Describes every binding, ordered by family, request name, then handler
    /// name.
    #[must_use]
    pub fn descriptors(&self) -> Vec<BindingDescriptor> {
        let mut descriptors: Vec<BindingDescriptor> = self
            .bindings
            .iter()
            .map(|(request, binding)| BindingDescriptor {
                kind: request.kind(),
                request: request.name(),
                handler: binding.handler_name(),
            })
            .collect();
        descriptors.sort_by_key(|descriptor| {
            (descriptor.kind, descriptor.request, descriptor.handler)
        });
        descriptors
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` when nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl HandlerLookup for HandlerRegistry {
    fn find(&self, request: &RequestType) -> Vec<HandlerBinding> {
        self.bindings.get(request).cloned().into_iter().collect()
    }
}
