//! Human-readable rendering of presence data

mod elapsed;

pub use elapsed::{pluralize, Elapsed};
