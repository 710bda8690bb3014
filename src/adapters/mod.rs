//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST endpoints (axum)
//! - `storage` - Session store implementations (in-memory)

pub mod http;
pub mod storage;

pub use http::{team_router, TeamAppState};
pub use storage::InMemoryRosterSessionStore;
