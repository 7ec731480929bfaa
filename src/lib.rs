//! xpcost - normalize Crossplane managed resources for cost estimation
//!
//! # Module Structure
//!
//! - [`resource`] - Field access, resource registry and normalized records
//! - [`region`] - Region resolution, display names and billing zones
//! - [`manifest`] - YAML manifest ingestion
//! - [`convert`] - CloudFormation to Crossplane conversion
//! - [`config`] - Persistent user configuration

pub mod config;
pub mod convert;
pub mod manifest;
pub mod region;
pub mod resource;

/// Version injected at compile time via XPCOST_VERSION env var (set by CI/CD),
/// or "dev" for local builds.
pub const VERSION: &str = match option_env!("XPCOST_VERSION") {
    Some(v) => v,
    None => "dev",
};
