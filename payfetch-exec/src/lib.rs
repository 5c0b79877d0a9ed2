#![forbid(unsafe_code)]

//! Concurrent fetch engine: bounded-parallelism dispatch over per-worker
//! HTTP clients, with a retry policy that honors server-provided hints.

pub mod executor;
pub mod retry;
pub mod transport;

pub use crate::executor::Executor;
pub use crate::transport::{HttpClientFactory, ReqwestClientFactory, Token, TransportConfig};
