//! Session domain module.
//!
//! A `TeamSession` holds one roster between requests. Nothing is persisted
//! beyond the process; export and import move rosters in and out.

mod aggregate;

pub use aggregate::TeamSession;
