pub mod events;
pub mod http;
pub mod response;
mod result;
mod scheduler;
mod types;
pub mod worker;

pub use events::{CompositeEventSink, Event, EventSink, NoOpEventSink, StdoutEventSink};
pub use http::{HttpClient, HttpError, HttpResponseParts, ReqwestHttpClient};
pub use result::{ExecutionError, ExecutionResult};
pub use scheduler::Executor;
pub use types::ExecutorConfig;
pub use worker::{fetch_payment, Worker};
