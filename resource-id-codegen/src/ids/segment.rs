use resource_id_types::{RESOURCE_GROUPS_KEY, SUBSCRIPTIONS_KEY};

use crate::utils::{lower_first, singularize, upper_first};

/// One key/value pair of an example resource ID, with the Go names derived
/// for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceIdSegment {
    /// Literal key as it appears in the ID, e.g. `virtualMachines`.
    pub segment_key: String,
    /// Literal example value paired with the key.
    pub segment_value: String,
    /// PascalCase Go struct field name, e.g. `GalleryName`.
    pub field_name: String,
    /// camelCase Go constructor argument name, e.g. `galleryName`.
    pub argument_name: String,
    /// Index of the key within the `/`-separated tokens of the example,
    /// ignoring the leading `/`.
    pub position: usize,
}

impl ResourceIdSegment {
    pub fn new(type_name: &str, key: &str, value: &str, position: usize) -> Self {
        let (field_name, argument_name) = match key {
            SUBSCRIPTIONS_KEY => ("SubscriptionId".to_owned(), "subscriptionId".to_owned()),
            RESOURCE_GROUPS_KEY => ("ResourceGroup".to_owned(), "resourceGroup".to_owned()),
            _ => {
                let singular = singularize(key);
                if singular.to_lowercase() == type_name.to_lowercase() {
                    ("Name".to_owned(), "name".to_owned())
                } else {
                    let rewritten = format!("{singular}Name");
                    (upper_first(&rewritten), lower_first(&rewritten))
                }
            }
        };

        Self {
            segment_key: key.to_owned(),
            segment_value: value.to_owned(),
            field_name,
            argument_name,
            position,
        }
    }

    /// Index of the value token within the example.
    pub fn value_position(&self) -> usize {
        self.position + 1
    }

    pub fn is_subscription(&self) -> bool {
        self.segment_key == SUBSCRIPTIONS_KEY
    }

    pub fn is_resource_group(&self) -> bool {
        self.segment_key == RESOURCE_GROUPS_KEY
    }
}
