mod outcome;

pub use outcome::{Outcome, PaymentId};
