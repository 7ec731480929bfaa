//! AWS resources managed by the Upbound AWS provider family

mod cloudformation_stack;
mod ec2_host;
mod rds_cluster;
mod s3_bucket;

use super::registry::RegistryItem;
use super::types::{CloudFormationStack, Ec2Host, RdsCluster, S3Bucket};

/// Every AWS resource this crate knows how to normalize
pub fn registry_items() -> Vec<RegistryItem> {
    vec![
        RegistryItem::of::<CloudFormationStack>(),
        RegistryItem::of::<Ec2Host>(),
        RegistryItem::of::<RdsCluster>(),
        RegistryItem::of::<S3Bucket>(),
    ]
}
