//! # Jira API Endpoints
//!
//! Endpoint implementations grouped by resource: server and identity, field
//! metadata, projects, and issue creation with its create metadata.

pub mod fields;
pub mod issues;
pub mod projects;
pub mod server;
