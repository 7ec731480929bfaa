use crate::region::lookup_region;
use crate::resource::registry::FromResourceData;
use crate::resource::types::CloudFormationStack;
use crate::resource::ResourceData;

impl FromResourceData for CloudFormationStack {
    const RESOURCE_TYPE: &'static str = "cloudformation.aws.upbound.io/Stack";

    fn from_resource_data(d: &ResourceData) -> Self {
        Self {
            address: d.address().to_string(),
            region: lookup_region(d, &[]),
            template_body: d.get("forProvider.templateBody"),
        }
    }
}
