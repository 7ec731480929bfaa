//! CloudFormation to Crossplane conversion
//!
//! Translates the resources of a CloudFormation template into Upbound AWS
//! provider manifests that the normalizer understands.

use serde_json::{json, Map, Value};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Unsupported CloudFormation resource type: {0}")]
    UnsupportedResourceType(String),
    #[error("resource '{0}' has no Type")]
    MissingType(String),
    #[error("failed to parse template: {0}")]
    Parse(String),
    #[error("failed to render manifest: {0}")]
    Render(#[from] serde_yaml::Error),
}

/// Result of converting a whole template
#[derive(Debug, Default)]
pub struct Conversion {
    pub manifests: Vec<Value>,
    /// Logical resource id and the reason it was not converted
    pub errors: Vec<(String, ConvertError)>,
}

impl Conversion {
    /// Render all manifests as one multi-document YAML stream
    pub fn to_yaml(&self) -> Result<String, ConvertError> {
        let docs = self
            .manifests
            .iter()
            .map(|m| serde_yaml::to_string(m).map(|s| s.trim_end().to_string()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(docs.join("\n---\n"))
    }
}

/// Parse a template, as JSON when `path` ends in `.json` and YAML otherwise
pub fn parse_template(path: &Path, content: &str) -> Result<Value, ConvertError> {
    let is_json = path.extension().is_some_and(|ext| ext == "json");
    if is_json {
        serde_json::from_str(content).map_err(|e| ConvertError::Parse(e.to_string()))
    } else {
        serde_yaml::from_str(content).map_err(|e| ConvertError::Parse(e.to_string()))
    }
}

fn prop<'a>(props: &'a Value, key: &str, default: &'a str) -> &'a str {
    match props.get(key) {
        Some(Value::String(s)) => s,
        Some(other) => {
            tracing::debug!(
                "Property {} is not a literal string ({}), using {}",
                key,
                other,
                default
            );
            default
        }
        None => default,
    }
}

fn manifest(api_version: &str, kind: &str, name: &str, for_provider: Value) -> Value {
    json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": { "name": name },
        "spec": { "forProvider": for_provider },
    })
}

/// Convert a single CloudFormation resource
pub fn convert_resource(resource_type: &str, props: &Value) -> Result<Value, ConvertError> {
    match resource_type {
        "AWS::S3::Bucket" => Ok(manifest(
            "s3.aws.upbound.io/v1beta1",
            "Bucket",
            prop(props, "BucketName", "example-bucket"),
            json!({ "region": prop(props, "Region", "us-east-1") }),
        )),
        "AWS::EC2::Instance" => Ok(manifest(
            "ec2.aws.upbound.io/v1beta1",
            "Instance",
            "example-instance",
            json!({
                "region": prop(props, "Region", "us-east-1"),
                "instanceType": prop(props, "InstanceType", "t3.micro"),
                "ami": prop(props, "ImageId", "ami-12345678"),
            }),
        )),
        "AWS::RDS::DBCluster" => Ok(manifest(
            "rds.aws.upbound.io/v1beta1",
            "Cluster",
            prop(props, "DBClusterIdentifier", "example-cluster"),
            json!({
                "engine": prop(props, "Engine", "aurora"),
                "masterUsername": prop(props, "MasterUsername", "admin"),
            }),
        )),
        other => Err(ConvertError::UnsupportedResourceType(other.to_string())),
    }
}

/// Convert every entry under `Resources`; failures are collected, not fatal
pub fn convert_template(template: &Value) -> Conversion {
    let empty = Map::new();
    let resources = template
        .get("Resources")
        .and_then(|r| r.as_object())
        .unwrap_or(&empty);

    let mut conversion = Conversion::default();
    for (logical_id, details) in resources {
        let Some(resource_type) = details.get("Type").and_then(|t| t.as_str()) else {
            conversion
                .errors
                .push((logical_id.clone(), ConvertError::MissingType(logical_id.clone())));
            continue;
        };
        let props = details.get("Properties").cloned().unwrap_or(Value::Null);

        match convert_resource(resource_type, &props) {
            Ok(m) => conversion.manifests.push(m),
            Err(e) => {
                tracing::warn!("{}: {}", logical_id, e);
                conversion.errors.push((logical_id.clone(), e));
            }
        }
    }
    conversion
}
