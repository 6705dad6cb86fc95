/*!
## Rust Machine Module

This Rust module is the saturating stack machine that evaluates SRPN
tokens.

*/

mod random;
mod runtime;
mod saturate;
mod stack;
mod state;

#[cfg(test)]
mod tests;

pub use random::RandomCursor;
pub use random::RANDOM_NUMBERS;
pub use runtime::Event;
pub use runtime::Runtime;
pub use saturate::saturate;
pub use saturate::{MAX, MIN};
pub use stack::Stack;
pub use stack::STACK_LIMIT;
pub use state::ProgramState;
