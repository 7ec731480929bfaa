//! Resource Registry - map resource types to constructors
//!
//! Each supported Crossplane kind registers the constructor that turns its
//! manifest into a [`CoreResource`]. The ingestion pipeline looks up the
//! manifest's type here; an unknown type is skipped, never an error.

use super::aws;
use super::data::ResourceData;
use super::types::CoreResource;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Constructor from manifest data to a normalized record
pub type CoreRFunc = fn(&ResourceData) -> CoreResource;

/// Implemented by every record that can be built from a manifest
pub trait FromResourceData: Into<CoreResource> {
    /// Provider/API-group qualified type, e.g. `ec2.aws.upbound.io/Instance`
    const RESOURCE_TYPE: &'static str;

    fn from_resource_data(d: &ResourceData) -> Self;
}

fn construct<T: FromResourceData>(d: &ResourceData) -> CoreResource {
    T::from_resource_data(d).into()
}

/// Registry entry: resource type and its constructor
#[derive(Clone)]
pub struct RegistryItem {
    pub name: String,
    pub core_rfunc: CoreRFunc,
}

impl fmt::Debug for RegistryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryItem")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl RegistryItem {
    pub fn new(name: impl Into<String>, core_rfunc: CoreRFunc) -> Self {
        Self {
            name: name.into(),
            core_rfunc,
        }
    }

    /// Entry for a record type implementing [`FromResourceData`]
    pub fn of<T: FromResourceData>() -> Self {
        Self::new(T::RESOURCE_TYPE, construct::<T>)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("resource type '{0}' is already registered")]
    DuplicateResourceType(String),
    #[error("resource type '{0}' is not of the form <api-group>/<Kind>")]
    InvalidResourceType(String),
}

/// Resource type -> constructor map
#[derive(Debug, Clone, Default)]
pub struct Registry {
    items: HashMap<String, RegistryItem>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in AWS resource
    pub fn aws() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for item in aws::registry_items() {
            registry.register(item)?;
        }
        Ok(registry)
    }

    /// Add an entry. Registering a type twice is rejected rather than
    /// silently replacing the first constructor.
    pub fn register(&mut self, item: RegistryItem) -> Result<(), RegistryError> {
        if !is_qualified_type(&item.name) {
            return Err(RegistryError::InvalidResourceType(item.name));
        }
        if self.items.contains_key(&item.name) {
            return Err(RegistryError::DuplicateResourceType(item.name));
        }
        self.items.insert(item.name.clone(), item);
        Ok(())
    }

    pub fn lookup(&self, resource_type: &str) -> Option<CoreRFunc> {
        self.items.get(resource_type).map(|item| item.core_rfunc)
    }

    /// Build the record for `d`, or `None` when its type has no constructor
    pub fn build(&self, d: &ResourceData) -> Option<CoreResource> {
        let Some(core_rfunc) = self.lookup(d.resource_type()) else {
            tracing::debug!(
                "Skipping {}: no constructor for resource type {}",
                d.address(),
                d.resource_type()
            );
            return None;
        };
        Some(core_rfunc(d))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Registered types, sorted
    pub fn resource_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.items.keys().map(|s| s.as_str()).collect();
        types.sort_unstable();
        types
    }
}

fn is_qualified_type(name: &str) -> bool {
    match name.split_once('/') {
        Some((group, kind)) => !group.is_empty() && !kind.is_empty() && !kind.contains('/'),
        None => false,
    }
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Process-wide registry of built-in resources (built on first access)
pub fn get_registry() -> &'static Registry {
    REGISTRY.get_or_init(|| {
        Registry::aws().unwrap_or_else(|e| panic!("Failed to build resource registry: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::types::{CloudFormationStack, S3Bucket};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static CALLS: AtomicUsize = AtomicUsize::new(0);

    fn counted(d: &ResourceData) -> CoreResource {
        CALLS.fetch_add(1, Ordering::SeqCst);
        stack(d)
    }

    fn stack(d: &ResourceData) -> CoreResource {
        CloudFormationStack {
            address: d.address().to_string(),
            region: "us-east-1".to_string(),
            template_body: String::new(),
        }
        .into()
    }

    fn bucket(d: &ResourceData) -> CoreResource {
        S3Bucket {
            address: d.address().to_string(),
            region: "us-east-1".to_string(),
            object_lock_enabled: false,
        }
        .into()
    }

    fn data(resource_type: &str) -> ResourceData {
        ResourceData::new(resource_type, format!("{resource_type}.x"), json!({}), "us-east-1")
    }

    #[test]
    fn test_registry_loads_successfully() {
        let registry = get_registry();
        assert!(!registry.is_empty(), "Registry should have resources");
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_builtin_types_registered() {
        let registry = get_registry();
        for ty in [
            "cloudformation.aws.upbound.io/Stack",
            "ec2.aws.upbound.io/Instance",
            "rds.aws.upbound.io/Cluster",
            "s3.aws.upbound.io/Bucket",
        ] {
            assert!(registry.lookup(ty).is_some(), "{ty} should be registered");
        }
    }

    #[test]
    fn test_distinct_constructors() {
        let mut registry = Registry::new();
        registry
            .register(RegistryItem::new("a.example.io/Stack", stack))
            .unwrap();
        registry
            .register(RegistryItem::new("b.example.io/Bucket", bucket))
            .unwrap();

        let stk = registry.lookup("a.example.io/Stack").unwrap();
        let bkt = registry.lookup("b.example.io/Bucket").unwrap();
        assert_eq!(stk(&data("a.example.io/Stack")).kind(), "CloudFormationStack");
        assert_eq!(bkt(&data("b.example.io/Bucket")).kind(), "S3Bucket");
        assert!(registry.lookup("c.example.io/Queue").is_none());
    }

    #[test]
    fn test_unknown_type_is_skipped_without_constructing() {
        let mut registry = Registry::new();
        registry
            .register(RegistryItem::new("a.example.io/Counted", counted))
            .unwrap();

        let before = CALLS.load(Ordering::SeqCst);
        assert!(registry.build(&data("a.example.io/Other")).is_none());
        assert_eq!(CALLS.load(Ordering::SeqCst), before);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = Registry::new();
        registry
            .register(RegistryItem::new("a.example.io/Stack", stack))
            .unwrap();
        let err = registry
            .register(RegistryItem::new("a.example.io/Stack", bucket))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateResourceType("a.example.io/Stack".to_string())
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unqualified_type_rejected() {
        let mut registry = Registry::new();
        for name in ["Stack", "/Stack", "a.example.io/", "a/b/c"] {
            assert!(matches!(
                registry.register(RegistryItem::new(name, bucket)),
                Err(RegistryError::InvalidResourceType(_))
            ));
        }
    }

    #[test]
    fn test_resource_types_sorted() {
        let types = get_registry().resource_types();
        let mut sorted = types.clone();
        sorted.sort_unstable();
        assert_eq!(types, sorted);
    }
}
