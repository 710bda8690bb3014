//! Team Genius - Working Genius team profiles and analysis
//!
//! This crate models a team's Working Genius profiles (Genius, Competency,
//! Frustration over the six tags W, I, D, G, E, T) and derives tag
//! distributions, project-phase coverage and a member/tag relationship graph,
//! served over a small REST API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
