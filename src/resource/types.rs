//! Normalized resource records
//!
//! One struct per supported resource kind, wrapped in [`CoreResource`] so the
//! pricing side can dispatch on `kind`.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloudFormationStack {
    pub address: String,
    pub region: String,
    pub template_body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ec2Host {
    pub address: String,
    pub region: String,
    pub instance_type: String,
    pub tenancy: String,
    pub dedicated_host: bool,
    pub detailed_monitoring: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RdsCluster {
    pub address: String,
    pub region: String,
    pub engine: String,
    pub engine_mode: String,
    pub backup_retention_period: i64,
    pub io_optimized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct S3Bucket {
    pub address: String,
    pub region: String,
    pub object_lock_enabled: bool,
}

/// A normalized resource handed to the pricing engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum CoreResource {
    CloudFormationStack(CloudFormationStack),
    Ec2Host(Ec2Host),
    RdsCluster(RdsCluster),
    S3Bucket(S3Bucket),
}

impl CoreResource {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CloudFormationStack(_) => "CloudFormationStack",
            Self::Ec2Host(_) => "Ec2Host",
            Self::RdsCluster(_) => "RdsCluster",
            Self::S3Bucket(_) => "S3Bucket",
        }
    }

    pub fn address(&self) -> &str {
        match self {
            Self::CloudFormationStack(r) => &r.address,
            Self::Ec2Host(r) => &r.address,
            Self::RdsCluster(r) => &r.address,
            Self::S3Bucket(r) => &r.address,
        }
    }

    pub fn region(&self) -> &str {
        match self {
            Self::CloudFormationStack(r) => &r.region,
            Self::Ec2Host(r) => &r.region,
            Self::RdsCluster(r) => &r.region,
            Self::S3Bucket(r) => &r.region,
        }
    }
}

impl From<CloudFormationStack> for CoreResource {
    fn from(r: CloudFormationStack) -> Self {
        Self::CloudFormationStack(r)
    }
}

impl From<Ec2Host> for CoreResource {
    fn from(r: Ec2Host) -> Self {
        Self::Ec2Host(r)
    }
}

impl From<RdsCluster> for CoreResource {
    fn from(r: RdsCluster) -> Self {
        Self::RdsCluster(r)
    }
}

impl From<S3Bucket> for CoreResource {
    fn from(r: S3Bucket) -> Self {
        Self::S3Bucket(r)
    }
}
