//! Resource abstraction layer
//!
//! Turns Crossplane managed-resource manifests into normalized records for
//! the pricing engine.
//!
//! # Architecture
//!
//! - [`data`] - Typed, defaulting field access over one manifest
//! - [`registry`] - Maps `<api-group>/<Kind>` to the constructor for that kind
//! - [`flags`] - Boolean attributes derived from string sentinels
//! - [`types`] - The normalized records themselves
//!
//! # Example
//!
//! ```
//! use xpcost::resource::{get_registry, ResourceData};
//! use serde_json::json;
//!
//! let d = ResourceData::new(
//!     "rds.aws.upbound.io/Cluster",
//!     "rds.aws.upbound.io/Cluster.orders",
//!     json!({"forProvider": {"region": "us-east-1", "storageType": "aurora-iopt1"}}),
//!     "us-east-1",
//! );
//! let record = get_registry().build(&d).unwrap();
//! assert_eq!(record.kind(), "RdsCluster");
//! ```

mod aws;
pub mod data;
pub mod flags;
pub mod registry;
pub mod types;

pub use data::{Lookup, ResourceData};
pub use registry::{
    get_registry, CoreRFunc, FromResourceData, Registry, RegistryError, RegistryItem,
};
pub use types::*;
