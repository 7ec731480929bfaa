//! Manifest ingestion
//!
//! Parses Crossplane managed-resource YAML and feeds each document through
//! the resource registry.

use crate::resource::{CoreResource, Registry, ResourceData};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("document {index}: invalid YAML: {source}")]
    Yaml {
        index: usize,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("document {index}: missing '{field}'")]
    MissingField { index: usize, field: &'static str },
}

/// One managed-resource document
#[derive(Debug, Clone)]
pub struct Manifest {
    pub api_version: String,
    pub kind: String,
    pub name: Option<String>,
    pub spec: Value,
    /// File or stream the document was read from, when known
    pub source: Option<String>,
    /// Position of the document in its source stream
    pub index: usize,
}

impl Manifest {
    fn from_value(value: Value, index: usize, source: Option<&str>) -> Result<Self, ManifestError> {
        let field = |name: &'static str| -> Result<String, ManifestError> {
            value
                .get(name)
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(String::from)
                .ok_or(ManifestError::MissingField { index, field: name })
        };

        let api_version = field("apiVersion")?;
        let kind = field("kind")?;
        let name = value
            .get("metadata")
            .and_then(|m| m.get("name"))
            .and_then(|n| n.as_str())
            .filter(|s| !s.is_empty())
            .map(String::from);
        let spec = value.get("spec").cloned().unwrap_or(Value::Null);

        Ok(Self {
            api_version,
            kind,
            name,
            spec,
            source: source.map(String::from),
            index,
        })
    }

    /// API group of the manifest, e.g. `rds.aws.upbound.io` for
    /// `rds.aws.upbound.io/v1beta1`. Core-group resources use the bare version.
    pub fn api_group(&self) -> &str {
        match self.api_version.rsplit_once('/') {
            Some((group, _)) => group,
            None => &self.api_version,
        }
    }

    /// Registry key, `<api-group>/<Kind>`
    pub fn resource_type(&self) -> String {
        format!("{}/{}", self.api_group(), self.kind)
    }

    /// Address used to correlate the record in reports; never empty.
    /// Unnamed documents are keyed by source and position.
    pub fn address(&self) -> String {
        match (&self.name, &self.source) {
            (Some(name), _) => format!("{}.{}", self.resource_type(), name),
            (None, Some(source)) => format!("{}[{}:{}]", self.resource_type(), source, self.index),
            (None, None) => format!("{}[{}]", self.resource_type(), self.index),
        }
    }

    pub fn resource_data(&self, default_region: &str) -> ResourceData {
        ResourceData::new(
            self.resource_type(),
            self.address(),
            self.spec.clone(),
            default_region,
        )
    }
}

/// Parse a stream of `---`-separated YAML documents. Empty documents are
/// ignored and documents without `apiVersion` or `kind` are skipped with a
/// warning; only malformed YAML fails the stream.
pub fn parse_manifests(content: &str) -> Result<Vec<Manifest>, ManifestError> {
    parse_manifests_from(content, None)
}

/// Like [`parse_manifests`], tagging each manifest with `source` so unnamed
/// documents from different files get distinct addresses
pub fn parse_manifests_from(
    content: &str,
    source: Option<&str>,
) -> Result<Vec<Manifest>, ManifestError> {
    let mut manifests = Vec::new();

    for (index, document) in serde_yaml::Deserializer::from_str(content).enumerate() {
        let value = Value::deserialize(document)
            .map_err(|source| ManifestError::Yaml { index, source })?;
        if value.is_null() {
            continue;
        }
        match Manifest::from_value(value, index, source) {
            Ok(manifest) => manifests.push(manifest),
            Err(e) => tracing::warn!("Skipping {}: {}", source.unwrap_or("manifest"), e),
        }
    }

    Ok(manifests)
}

/// A resource the registry has no constructor for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skipped {
    pub address: String,
    pub resource_type: String,
}

/// Output of a normalization run
#[derive(Debug, Clone, Default, Serialize)]
pub struct Normalized {
    pub resources: Vec<CoreResource>,
    pub skipped: Vec<Skipped>,
}

impl Normalized {
    pub fn extend(&mut self, other: Normalized) {
        self.resources.extend(other.resources);
        self.skipped.extend(other.skipped);
    }
}

/// Build a record for every manifest whose type is registered
pub fn normalize(
    registry: &Registry,
    manifests: &[Manifest],
    default_region: &str,
) -> Normalized {
    let mut out = Normalized::default();

    for manifest in manifests {
        let d = manifest.resource_data(default_region);
        match registry.build(&d) {
            Some(resource) => out.resources.push(resource),
            None => out.skipped.push(Skipped {
                address: d.address().to_string(),
                resource_type: d.resource_type().to_string(),
            }),
        }
    }

    tracing::debug!(
        "Normalized {} resources, skipped {}",
        out.resources.len(),
        out.skipped.len()
    );
    out
}
