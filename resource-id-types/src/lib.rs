// Resource ID tooling
// SPDX-License-Identifier: MPL-2.0

#![warn(missing_docs)]

//! Tokenizer for Azure Resource Manager IDs such as
//! `/subscriptions/{id}/resourceGroups/{name}/providers/{rp}/{type}/{name}`.
//!
//! This is the contract every generated typed ID parser relies on: split the
//! ID into its subscription, resource group and remaining key/value pairs,
//! pop the pairs the typed ID needs, then reject anything left over.

mod azure_id;
mod errors;

pub use azure_id::{
    AzureResourceId, PathSegment, PROVIDERS_KEY, RESOURCE_GROUPS_KEY, SUBSCRIPTIONS_KEY,
};
pub use errors::ResourceIdError;

#[cfg(test)]
mod tests;
