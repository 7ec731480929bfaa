//! Region Lookup
//!
//! Resolves the effective region of a resource and maps AWS region codes to
//! display names and billing zones.

use crate::resource::ResourceData;

/// Region used when a resource sets none and no default region is configured
pub const FALLBACK_REGION: &str = "us-east-1";

/// Billing zone reported for regions missing from the table
pub const GLOBAL_BILLING_ZONE: &str = "Global";

/// Static description of a known AWS region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionInfo {
    pub code: &'static str,
    pub display_name: &'static str,
    pub billing_zone: &'static str,
}

const fn region(
    code: &'static str,
    display_name: &'static str,
    billing_zone: &'static str,
) -> RegionInfo {
    RegionInfo {
        code,
        display_name,
        billing_zone,
    }
}

/// Regions known at release time. Unknown codes degrade to the raw code and
/// [`GLOBAL_BILLING_ZONE`].
const REGIONS: &[RegionInfo] = &[
    region("us-east-1", "US East (N. Virginia)", "Zone 1"),
    region("us-east-2", "US East (Ohio)", "Zone 1"),
    region("us-west-1", "US West (N. California)", "Zone 2"),
    region("us-west-2", "US West (Oregon)", "Zone 2"),
    region("ap-south-1", "Asia Pacific (Mumbai)", "Zone 3"),
    region("ap-northeast-3", "Asia Pacific (Osaka)", "Zone 3"),
    region("ap-northeast-2", "Asia Pacific (Seoul)", "Zone 3"),
    region("ap-southeast-1", "Asia Pacific (Singapore)", "Zone 3"),
    region("ap-southeast-2", "Asia Pacific (Sydney)", "Zone 3"),
    region("ap-northeast-1", "Asia Pacific (Tokyo)", "Zone 3"),
    region("ca-central-1", "Canada (Central)", "Zone 1"),
    region("eu-central-1", "EU (Frankfurt)", "Zone 1"),
    region("eu-west-1", "EU (Ireland)", "Zone 1"),
    region("eu-west-2", "EU (London)", "Zone 1"),
    region("eu-west-3", "EU (Paris)", "Zone 1"),
    region("eu-north-1", "EU (Stockholm)", "Zone 1"),
    region("sa-east-1", "South America (São Paulo)", "Zone 4"),
    region("us-gov-west-1", "AWS GovCloud (US-West)", "GovCloud"),
    region("us-gov-east-1", "AWS GovCloud (US-East)", "GovCloud"),
    region("me-south-1", "Middle East (Bahrain)", "Zone 3"),
    region("af-south-1", "Africa (Cape Town)", "Zone 3"),
];

/// All regions in the static table
pub fn known_regions() -> &'static [RegionInfo] {
    REGIONS
}

pub fn region_info(code: &str) -> Option<&'static RegionInfo> {
    REGIONS.iter().find(|r| r.code == code)
}

/// Human-readable region name, or the code itself when unknown
pub fn display_name(code: &str) -> &str {
    region_info(code).map(|r| r.display_name).unwrap_or(code)
}

/// Billing zone group for a region
pub fn billing_zone(code: &str) -> &'static str {
    region_info(code)
        .map(|r| r.billing_zone)
        .unwrap_or(GLOBAL_BILLING_ZONE)
}

/// Where a resolved region came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionSource {
    /// Top-level `region` field
    Resource,
    /// `forProvider.region`
    ForProvider,
    /// Run-wide default region
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionLookup {
    pub region: String,
    pub source: RegionSource,
}

/// Resolve the region of a resource, most specific field first.
///
/// `parent_keys` names enclosing scopes a region could be inherited from.
/// Inheritance is not resolved yet; callers pass an empty slice.
pub fn resolve_region(d: &ResourceData, parent_keys: &[&str]) -> RegionLookup {
    let _ = parent_keys;

    let region = d.get_string_with_source("region", "");
    if !region.defaulted {
        return RegionLookup {
            region: region.value,
            source: RegionSource::Resource,
        };
    }

    let region = d.get_string_with_source("forProvider.region", "");
    if !region.defaulted {
        return RegionLookup {
            region: region.value,
            source: RegionSource::ForProvider,
        };
    }

    let region = match d.default_region().trim() {
        "" => FALLBACK_REGION.to_string(),
        configured => configured.to_string(),
    };
    tracing::info!(
        "Using {} for resource {} as its 'region' property could not be found.",
        region,
        d.address()
    );
    RegionLookup {
        region,
        source: RegionSource::Default,
    }
}

/// Region code for a resource, see [`resolve_region`]
pub fn lookup_region(d: &ResourceData, parent_keys: &[&str]) -> String {
    resolve_region(d, parent_keys).region
}
