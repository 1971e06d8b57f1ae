// Administrative API client for the panel.
//
// Hand-crafted async HTTP client for the `/admin/` resource collections.
// Uses Bearer-token authentication and RESTful JSON endpoints; the one
// exception is the CSV export, which is fetched as an opaque byte payload.

pub mod client;
pub mod redeem;
pub mod types;

pub use client::AdminClient;
