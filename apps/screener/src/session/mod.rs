// Per-session resume state and the HTTP handlers that drive it.
// A session holds at most one processed resume; each upload replaces it.

pub mod handlers;
pub mod ingest;
pub mod pipeline;
pub mod store;

pub use store::SessionStore;
