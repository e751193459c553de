//! Transport trait (port) - the boundary to the protocol layer

mod transport;

pub use transport::{ChatTransport, TransportError, TransportResult};
