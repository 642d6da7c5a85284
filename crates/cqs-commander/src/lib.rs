//! Command-query separation dispatch for in-process requests.
//!
//! Callers describe what they want as a typed request, either a [`Command`]
//! that changes state or a [`Query`] that only reads it, and hand it to a
//! [`Mediator`]. The mediator finds the one handler bound to the request's
//! concrete type and returns that handler's result, so callers depend on
//! request types alone and never on handler implementations.
//!
//! # Architecture
//!
//! Handlers are bound during application wiring in a [`HandlerRegistry`],
//! keyed by [`RequestType`]. The registry refuses a second handler for the
//! same request type. Once wired, the registry is moved into a [`Mediator`]
//! and only read from then on, which makes a mediator safe to share across
//! threads. Other binding sources plug in through [`HandlerLookup`].
//!
//! # Example
//!
//! ```
//! use cqs_commander::{HandlerRegistry, Mediator, Query, QueryHandler};
//!
//! struct Double {
//!     n: u32,
//! }
//!
//! impl Query for Double {
//!     type Output = u32;
//! }
//!
//! struct Doubler;
//!
//! impl QueryHandler<Double> for Doubler {
//!     fn handle(&self, query: Double) -> u32 {
//!         query.n * 2
//!     }
//! }
//!
//! let mut registry = HandlerRegistry::new();
//! registry
//!     .register_query::<Double, _>(Doubler)
//!     .expect("registration succeeds");
//!
//! let mediator = Mediator::new(registry);
//! assert_eq!(mediator.send_query(Double { n: 5 }), Ok(10));
//! ```

pub mod error;
pub mod handler;
pub mod mediator;
pub mod registry;
pub mod request;

#[cfg(test)]
mod tests;

pub use self::error::MediatorError;
pub use self::handler::{CommandHandler, QueryHandler};
pub use self::mediator::Mediator;
pub use self::registry::{BindingDescriptor, HandlerBinding, HandlerLookup, HandlerRegistry};
pub use self::request::{Command, Query, RequestKind, RequestType};
