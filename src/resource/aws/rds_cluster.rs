use crate::region::lookup_region;
use crate::resource::flags::AURORA_IO_OPTIMIZED;
use crate::resource::registry::FromResourceData;
use crate::resource::types::RdsCluster;
use crate::resource::ResourceData;

const DEFAULT_ENGINE: &str = "aurora";
const DEFAULT_ENGINE_MODE: &str = "provisioned";
const DEFAULT_BACKUP_RETENTION_PERIOD: i64 = 1;

impl FromResourceData for RdsCluster {
    const RESOURCE_TYPE: &'static str = "rds.aws.upbound.io/Cluster";

    fn from_resource_data(d: &ResourceData) -> Self {
        Self {
            address: d.address().to_string(),
            region: lookup_region(d, &[]),
            engine: d.get_string_or_default("forProvider.engine", DEFAULT_ENGINE),
            engine_mode: d.get_string_or_default("forProvider.engineMode", DEFAULT_ENGINE_MODE),
            backup_retention_period: d.get_int64_or_default(
                "forProvider.backupRetentionPeriod",
                DEFAULT_BACKUP_RETENTION_PERIOD,
            ),
            io_optimized: AURORA_IO_OPTIMIZED.eval(d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cluster(raw: serde_json::Value) -> RdsCluster {
        let address = "rds.aws.upbound.io/Cluster.db";
        let d = ResourceData::new(RdsCluster::RESOURCE_TYPE, address, raw, "us-east-1");
        RdsCluster::from_resource_data(&d)
    }

    #[test]
    fn test_defaults() {
        let c = cluster(json!({"forProvider": {}}));
        assert_eq!(c.engine, "aurora");
        assert_eq!(c.engine_mode, "provisioned");
        assert_eq!(c.backup_retention_period, 1);
        assert!(!c.io_optimized);
        assert_eq!(c.region, "us-east-1");
    }

    #[test]
    fn test_io_optimized_storage() {
        let c = cluster(json!({"forProvider": {"storageType": "aurora-iopt1"}}));
        assert!(c.io_optimized);

        let c = cluster(json!({"forProvider": {"storageType": "aurora"}}));
        assert!(!c.io_optimized);
    }

    #[test]
    fn test_configured_values() {
        let c = cluster(json!({"forProvider": {
            "region": "eu-central-1",
            "engine": "aurora-postgresql",
            "engineMode": "serverless",
            "backupRetentionPeriod": 7
        }}));
        assert_eq!(c.region, "eu-central-1");
        assert_eq!(c.engine, "aurora-postgresql");
        assert_eq!(c.engine_mode, "serverless");
        assert_eq!(c.backup_retention_period, 7);
    }

    #[test]
    fn test_unknown_engine_and_bad_retention() {
        let c = cluster(json!({"forProvider": {
            "engine": "cobol-db",
            "backupRetentionPeriod": "a week"
        }}));
        assert_eq!(c.engine, "cobol-db");
        assert_eq!(c.backup_retention_period, 1);
    }
}
