//! Logging setup shared by the bazaar native binaries.
//!
//! Library crates only emit `tracing` events; binaries call one of the
//! [`logging`] initialisers once at startup to decide where they go.

pub mod logging;

pub use logging::{LogFormat, init, init_logging, init_logging_json};
