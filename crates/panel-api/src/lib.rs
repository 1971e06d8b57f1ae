// panel-api: Async Rust client for the panel's administrative HTTP API.

pub mod admin;
pub mod error;
pub mod settings;
pub mod transport;

pub use admin::AdminClient;
pub use error::Error;
pub use transport::{TlsMode, TransportConfig};
