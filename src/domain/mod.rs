//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (tags, categories, names, IDs, errors)
//! - `team` - Member profiles, the roster, and its JSON document form
//! - `analysis` - Pure domain services (distribution, phase coverage, relationship graph)
//! - `dashboard` - Read model assembled for one render pass
//! - `session` - Team editing session aggregate

pub mod analysis;
pub mod dashboard;
pub mod foundation;
pub mod session;
pub mod team;
