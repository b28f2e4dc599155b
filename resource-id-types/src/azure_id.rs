// Resource ID tooling
// SPDX-License-Identifier: MPL-2.0

//! Contains the implementation of `AzureResourceId`, the generic tokenizer every
//! typed resource ID parser is built on.

use std::fmt;

use log::trace;

use crate::errors::ResourceIdError;

/// Key of the segment holding the subscription GUID.
pub const SUBSCRIPTIONS_KEY: &str = "subscriptions";
/// Key of the segment holding the resource group name.
pub const RESOURCE_GROUPS_KEY: &str = "resourceGroups";
/// Key of the segment holding the resource provider namespace.
pub const PROVIDERS_KEY: &str = "providers";

// Some Azure APIs hand back the resource group key in lower case.
const RESOURCE_GROUPS_KEY_LOWER: &str = "resourcegroups";

/// A key/value pair left in the path of a tokenized ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    /// Literal key, e.g. `virtualMachines`.
    pub key: String,
    /// Literal value paired with the key.
    pub value: String,
}

/// A resource ID split into its subscription, resource group, provider and
/// the remaining key/value pairs.
///
/// Typed parsers consume the remaining pairs with [`AzureResourceId::pop_segment`]
/// and finish with [`AzureResourceId::validate_no_empty_segments`], which
/// fails if anything was left unconsumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzureResourceId {
    /// Value of the first `subscriptions` pair.
    pub subscription_id: String,
    /// Value of the `resourceGroups` pair, empty if the ID has none.
    pub resource_group: String,
    /// Value of the first `providers` pair, empty if the ID has none.
    pub provider: String,
    /// Pairs not yet consumed, in the order they appear in the ID.
    pub path: Vec<PathSegment>,
}

impl AzureResourceId {
    /// Tokenize `id`.
    ///
    /// The ID must be an absolute path. One leading and one trailing `/` are
    /// ignored, the rest must split into non-empty key/value pairs.
    pub fn parse(id: &str) -> Result<Self, ResourceIdError> {
        let Some(path) = id.strip_prefix('/') else {
            return Err(ResourceIdError::NotAbsolute(id.to_owned()));
        };
        let path = path.strip_suffix('/').unwrap_or(path);

        let components: Vec<&str> = path.split('/').collect();
        if components.len() % 2 != 0 {
            return Err(ResourceIdError::OddSegmentCount(path.to_owned()));
        }

        let mut subscription_id = None;
        let mut provider = None;
        let mut segments = Vec::with_capacity(components.len() / 2);
        for pair in components.chunks_exact(2) {
            let (key, value) = (pair[0], pair[1]);
            if key.is_empty() || value.is_empty() {
                return Err(ResourceIdError::EmptySegment {
                    key: key.to_owned(),
                    value: value.to_owned(),
                });
            }

            match key {
                SUBSCRIPTIONS_KEY if subscription_id.is_none() => {
                    subscription_id = Some(value.to_owned())
                }
                PROVIDERS_KEY if provider.is_none() => provider = Some(value.to_owned()),
                _ => segments.push(PathSegment {
                    key: key.to_owned(),
                    value: value.to_owned(),
                }),
            }
        }

        let Some(subscription_id) = subscription_id else {
            return Err(ResourceIdError::MissingSubscription(path.to_owned()));
        };

        let mut id = Self {
            subscription_id,
            resource_group: String::new(),
            provider: provider.unwrap_or_default(),
            path: segments,
        };
        if let Ok(group) = id.pop_segment(RESOURCE_GROUPS_KEY) {
            id.resource_group = group;
        } else if let Ok(group) = id.pop_segment(RESOURCE_GROUPS_KEY_LOWER) {
            id.resource_group = group;
        }

        trace!("Tokenized resource ID {id}");
        Ok(id)
    }

    /// Remove the first pair whose key is exactly `key` and return its value.
    pub fn pop_segment(&mut self, key: &str) -> Result<String, ResourceIdError> {
        let index = self
            .path
            .iter()
            .position(|s| s.key == key)
            .ok_or_else(|| ResourceIdError::MissingSegment(key.to_owned()))?;
        Ok(self.path.remove(index).value)
    }

    /// Fail if any pair is left unconsumed. `original` is only used for the
    /// error message.
    pub fn validate_no_empty_segments(&self, original: &str) -> Result<(), ResourceIdError> {
        if self.path.is_empty() {
            return Ok(());
        }
        let remaining = self
            .path
            .iter()
            .map(|s| format!("{}/{}", s.key, s.value))
            .collect::<Vec<_>>()
            .join(", ");
        Err(ResourceIdError::UnexpectedSegments {
            source_id: original.to_owned(),
            remaining,
        })
    }
}

impl fmt::Display for AzureResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscription={}", self.subscription_id)?;
        if !self.resource_group.is_empty() {
            write!(f, " resourceGroup={}", self.resource_group)?;
        }
        if !self.provider.is_empty() {
            write!(f, " provider={}", self.provider)?;
        }
        for s in &self.path {
            write!(f, " {}={}", s.key, s.value)?;
        }
        Ok(())
    }
}
