//! Storage Adapters
//!
//! Implementations of the `RosterSessionStore` port.
//!
//! ## Available Adapters
//!
//! - **InMemoryRosterSessionStore** - Keeps sessions in memory
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryRosterSessionStore;
//!
//! let store = Arc::new(InMemoryRosterSessionStore::new());
//! ```

mod in_memory_session_store;

pub use in_memory_session_store::InMemoryRosterSessionStore;
