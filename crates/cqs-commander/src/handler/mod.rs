//! Handler contracts for commands and queries.
//!
//! Each concrete request type is served by exactly one handler. Handler
//! failures travel inside the request's `Output` (for example
//! `Output = Result<T, E>`) and reach the caller untouched.

use crate::request::{Command, Query};

/// Processes one concrete command type.
///
/// # Example
///
/// ```
/// use cqs_commander::{Command, CommandHandler};
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
/// ```
pub trait CommandHandler<C: Command>: Send + Sync + 'static {
    /// Executes the command and returns its result.
    fn handle(&self, command: C) -> C::Output;
}

/// Answers one concrete query type.
pub trait QueryHandler<Q: Query>: Send + Sync + 'static {
    /// Evaluates the query and returns its result.
    fn handle(&self, query: Q) -> Q::Output;
}
