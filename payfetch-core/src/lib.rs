#![forbid(unsafe_code)]

pub mod error;
pub mod parser;
pub mod types;

pub use crate::error::SourceError;
pub use crate::parser::{parse_ids_str, read_ids_file};
pub use crate::types::{Outcome, PaymentId};
