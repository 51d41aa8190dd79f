//! Adapter implementations for event ports.

mod memory_broker;
mod memory_dead_letter;

pub use memory_broker::{BrokerClosed, BrokerPoisoned, InMemoryBroker};
pub use memory_dead_letter::{DEFAULT_DEAD_LETTER_CAPACITY, InMemoryDeadLetterSink};
