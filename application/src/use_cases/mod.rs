//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod chat_session;
pub mod generate;

#[cfg(test)]
pub(crate) mod test_support;
