//! # Backlog API Endpoints
//!
//! Organized endpoint implementations for the Backlog resource types this
//! crate covers: projects and issues.

pub mod issues;
pub mod projects;
