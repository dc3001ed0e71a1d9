//! Test utilities for the Jira client workspace
//!
//! This crate provides:
//! - An in-process mock Jira server ([`MockJiraServer`]) that routes requests
//!   by path pattern to canned JSON responses
//! - The fixtures it serves ([`fixtures`]), reusable on hand-built mocks
//! - Environment variable isolation ([`EnvVarGuard`])

pub mod env;
pub mod fixtures;
pub mod router;
pub mod server;

// Re-export commonly used items
pub use env::EnvVarGuard;
pub use router::{JiraRoute, JiraRouter, RouterMode};
pub use server::MockJiraServer;
