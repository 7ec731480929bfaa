//! Derived feature flags
//!
//! Some boolean attributes are not set directly in a manifest but implied by a
//! string field holding a known sentinel (a storage type, a tenancy mode).
//! Every such derivation is declared here so new sentinels are added in one
//! place.

use super::ResourceData;

/// A boolean derived from a string field matching one of a set of sentinels
#[derive(Debug, Clone, Copy)]
pub struct FlagRule {
    pub name: &'static str,
    /// Dot-notation path of the source field
    pub path: &'static str,
    /// Values (exact, case-sensitive) that set the flag
    pub sentinels: &'static [&'static str],
}

impl FlagRule {
    pub fn matches(&self, value: &str) -> bool {
        self.sentinels.contains(&value)
    }

    /// Evaluate the rule; a missing field never sets the flag
    pub fn eval(&self, d: &ResourceData) -> bool {
        self.matches(&d.get(self.path))
    }
}

/// RDS cluster using Aurora I/O-Optimized storage
pub const AURORA_IO_OPTIMIZED: FlagRule = FlagRule {
    name: "io_optimized",
    path: "forProvider.storageType",
    sentinels: &["aurora-iopt1"],
};

/// EC2 instance placed on a dedicated host
pub const EC2_DEDICATED_HOST: FlagRule = FlagRule {
    name: "dedicated_host",
    path: "forProvider.tenancy",
    sentinels: &["host"],
};

pub const ALL_RULES: &[FlagRule] = &[AURORA_IO_OPTIMIZED, EC2_DEDICATED_HOST];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(raw: serde_json::Value) -> ResourceData {
        ResourceData::new(
            "rds.aws.upbound.io/Cluster",
            "rds.aws.upbound.io/Cluster.db",
            raw,
            "us-east-1",
        )
    }

    #[test]
    fn test_sentinel_sets_flag() {
        let d = data(json!({"forProvider": {"storageType": "aurora-iopt1"}}));
        assert!(AURORA_IO_OPTIMIZED.eval(&d));
    }

    #[test]
    fn test_other_values_do_not_set_flag() {
        for value in ["aurora", "gp3", "AURORA-IOPT1", ""] {
            let d = data(json!({"forProvider": {"storageType": value}}));
            assert!(!AURORA_IO_OPTIMIZED.eval(&d), "{value} should not set the flag");
        }
        assert!(!AURORA_IO_OPTIMIZED.eval(&data(json!({}))));
    }

    #[test]
    fn test_rule_names_unique() {
        let mut names: Vec<_> = ALL_RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL_RULES.len());
    }
}
