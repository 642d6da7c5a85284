//! Crate-level fixtures, integration and BDD tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::handler::{CommandHandler, QueryHandler};
use crate::mediator::Mediator;
use crate::registry::HandlerRegistry;
use crate::request::{Command, Query};


// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub(crate) struct Greet {
    pub(crate) name: String,
}

impl Greet {
    pub(crate) fn named(name: &str) -> Self {
        Self {
            name: name.to_owned(),
        }
    }
}

impl Command for Greet {
    type Output = String;
}

/// Wraps [`Greet`] but is routed as a type of its own.
pub(crate) struct LoudGreet(pub(crate) Greet);

impl Command for LoudGreet {
    type Output = String;
}

pub(crate) struct Double {
    pub(crate) n: u32,
}

impl Query for Double {
    type Output = u32;
}

/// Both a command and a query.
pub(crate) struct Ping;

impl Command for Ping {
    type Output = &'static str;
}

impl Query for Ping {
    type Output = &'static str;
}

pub(crate) struct Withdraw {
    pub(crate) amount: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InsufficientFunds {
    pub(crate) shortfall: u64,
}

impl Command for Withdraw {
    type Output = Result<u64, InsufficientFunds>;
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

pub(crate) struct GreetHandler;

impl CommandHandler<Greet> for GreetHandler {
    fn handle(&self, command: Greet) -> String {
        format!("Hello, {}", command.name)
    }
}

pub(crate) struct FormalGreetHandler;

impl CommandHandler<Greet> for FormalGreetHandler {
    fn handle(&self, command: Greet) -> String {
        format!("Good day, {}", command.name)
    }
}

pub(crate) struct LoudGreetHandler;

impl CommandHandler<LoudGreet> for LoudGreetHandler {
    fn handle(&self, command: LoudGreet) -> String {
        format!("HELLO, {}", command.0.name.to_uppercase())
    }
}

pub(crate) struct DoubleHandler;

impl QueryHandler<Double> for DoubleHandler {
    fn handle(&self, query: Double) -> u32 {
        query.n * 2
    }
}

pub(crate) struct PingCommandHandler;

impl CommandHandler<Ping> for PingCommandHandler {
    fn handle(&self, _command: Ping) -> &'static str {
        "command"
    }
}

pub(crate) struct PingQueryHandler;

impl QueryHandler<Ping> for PingQueryHandler {
    fn handle(&self, _query: Ping) -> &'static str {
        "query"
    }
}

pub(crate) struct WithdrawHandler {
    pub(crate) balance: u64,
}

impl CommandHandler<Withdraw> for WithdrawHandler {
    fn handle(&self, command: Withdraw) -> Result<u64, InsufficientFunds> {
        self.balance
            .checked_sub(command.amount)
            .ok_or_else(|| InsufficientFunds {
                shortfall: command.amount - self.balance,
            })
    }
}

/// Greets like [`GreetHandler`] and counts its invocations.
#[derive(Clone, Default)]
pub(crate) struct CountingGreetHandler {
    calls: Arc<AtomicUsize>,
}

impl CountingGreetHandler {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CommandHandler<Greet> for CountingGreetHandler {
    fn handle(&self, command: Greet) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        format!("Hello, {}", command.name)
    }
}

// ---------------------------------------------------------------------------
// End-to-end
// ---------------------------------------------------------------------------

#[test]
fn end_to_end_command_and_query_share_one_mediator() {
    let mut registry = HandlerRegistry::new();
    registry
        .register_command::<Greet, _>(GreetHandler)
        .expect("register greet");
    registry
        .register_command::<LoudGreet, _>(LoudGreetHandler)
        .expect("register loud greet");
    registry
        .register_query::<Double, _>(DoubleHandler)
        .expect("register double");
    registry
        .register_command::<Withdraw, _>(WithdrawHandler { balance: 100 })
        .expect("register withdraw");

    let mediator: Mediator = Mediator::from(registry);

    assert_eq!(
        mediator.send_command(Greet::named("Ada")).expect("greet"),
        "Hello, Ada"
    );
    assert_eq!(
        mediator
            .send_command(LoudGreet(Greet::named("Ada")))
            .expect("loud greet"),
        "HELLO, ADA"
    );
    assert_eq!(mediator.send_query(Double { n: 21 }).expect("double"), 42);
    assert_eq!(
        mediator
            .send_command(Withdraw { amount: 30 })
            .expect("withdraw"),
        Ok(70)
    );
}
