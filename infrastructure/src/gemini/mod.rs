//! Gemini REST adapter
//!
//! Implements LlmGateway for the Gemini `generateContent` API over HTTPS.

pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_server;
