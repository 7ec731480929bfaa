use crate::region::lookup_region;
use crate::resource::registry::FromResourceData;
use crate::resource::types::S3Bucket;
use crate::resource::ResourceData;

impl FromResourceData for S3Bucket {
    const RESOURCE_TYPE: &'static str = "s3.aws.upbound.io/Bucket";

    fn from_resource_data(d: &ResourceData) -> Self {
        Self {
            address: d.address().to_string(),
            region: lookup_region(d, &[]),
            object_lock_enabled: d.get_bool_or_default("forProvider.objectLockEnabled", false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_s3_bucket() {
        let d = ResourceData::new(
            S3Bucket::RESOURCE_TYPE,
            "s3.aws.upbound.io/Bucket.logs",
            json!({"forProvider": {"region": "us-west-1", "objectLockEnabled": true}}),
            "us-east-1",
        );
        let b = S3Bucket::from_resource_data(&d);
        assert_eq!(b.region, "us-west-1");
        assert!(b.object_lock_enabled);
    }
}
