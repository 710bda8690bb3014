//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `RosterSessionStore` - Team session persistence

mod roster_session_store;

pub use roster_session_store::{RosterSessionStore, SessionEdit};
