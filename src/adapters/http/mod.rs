//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod team;

// Re-export key types for convenience
pub use team::team_router;
pub use team::TeamAppState;
