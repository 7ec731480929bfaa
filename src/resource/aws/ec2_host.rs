use crate::region::lookup_region;
use crate::resource::flags::EC2_DEDICATED_HOST;
use crate::resource::registry::FromResourceData;
use crate::resource::types::Ec2Host;
use crate::resource::ResourceData;

const DEFAULT_TENANCY: &str = "default";

impl FromResourceData for Ec2Host {
    const RESOURCE_TYPE: &'static str = "ec2.aws.upbound.io/Instance";

    fn from_resource_data(d: &ResourceData) -> Self {
        Self {
            address: d.address().to_string(),
            region: lookup_region(d, &[]),
            instance_type: d.get("forProvider.instanceType"),
            tenancy: d.get_string_or_default("forProvider.tenancy", DEFAULT_TENANCY),
            dedicated_host: EC2_DEDICATED_HOST.eval(d),
            detailed_monitoring: d.get_bool_or_default("forProvider.monitoring", false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn host(raw: serde_json::Value) -> Ec2Host {
        let address = "ec2.aws.upbound.io/Instance.web";
        let d = ResourceData::new(Ec2Host::RESOURCE_TYPE, address, raw, "us-east-1");
        Ec2Host::from_resource_data(&d)
    }

    #[test]
    fn test_new_ec2_host() {
        let h = host(json!({"forProvider": {
            "region": "ap-south-1",
            "instanceType": "m5.large",
            "monitoring": true
        }}));
        assert_eq!(h.region, "ap-south-1");
        assert_eq!(h.instance_type, "m5.large");
        assert_eq!(h.tenancy, "default");
        assert!(!h.dedicated_host);
        assert!(h.detailed_monitoring);
    }

    #[test]
    fn test_host_tenancy_sets_dedicated_host() {
        let h = host(json!({"forProvider": {"tenancy": "host"}}));
        assert_eq!(h.tenancy, "host");
        assert!(h.dedicated_host);

        let h = host(json!({"forProvider": {"tenancy": "dedicated"}}));
        assert!(!h.dedicated_host);
    }

    #[test]
    fn test_unknown_instance_type_passes_through() {
        let h = host(json!({"forProvider": {"instanceType": "zz9.plural"}}));
        assert_eq!(h.instance_type, "zz9.plural");
    }
}
