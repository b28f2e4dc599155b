mod segment;

use log::debug;
use resource_id_types::{
    AzureResourceId, ResourceIdError, PROVIDERS_KEY, RESOURCE_GROUPS_KEY, SUBSCRIPTIONS_KEY,
};

pub use segment::ResourceIdSegment;

use crate::CodeGenError;

/// The segment grammar derived from one example resource ID.
///
/// Built once per generated type and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceId {
    /// Name of the Go type, e.g. `Server`.
    pub type_name: String,
    /// The example ID, unmodified.
    pub id_raw: String,
    /// `id_raw` with every segment value replaced by `%s` and every other
    /// `%` escaped, usable as a `fmt.Sprintf` template.
    pub id_fmt: String,
    pub has_subscription_id: bool,
    pub has_resource_group: bool,
    /// Segments in the order they appear in the example.
    pub segments: Vec<ResourceIdSegment>,
}

/// Field values extracted from an ID by [`ResourceId::parse_id`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceIdValues {
    /// `(field_name, value)` pairs in segment order.
    pub values: Vec<(String, String)>,
}

impl ResourceIdValues {
    pub fn get(&self, field_name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == field_name)
            .map(|(_, v)| v.as_str())
    }
}

fn split_tokens(id: &str) -> (bool, Vec<&str>) {
    match id.strip_prefix('/') {
        Some(rest) => (true, rest.split('/').collect()),
        None => (false, id.split('/').collect()),
    }
}

impl ResourceId {
    pub fn new(type_name: &str, resource_id: &str) -> Result<Self, CodeGenError> {
        let (rooted, tokens) = split_tokens(resource_id);
        if tokens.len() % 2 != 0 {
            return Err(CodeGenError::segments(resource_id));
        }

        let mut segments = Vec::with_capacity(tokens.len() / 2);
        for (index, pair) in tokens.chunks_exact(2).enumerate() {
            let (key, value) = (pair[0], pair[1]);
            // The resource provider namespace is part of the template, not a field.
            if key == PROVIDERS_KEY {
                continue;
            }
            segments.push(ResourceIdSegment::new(type_name, key, value, index * 2));
        }

        let value_positions: Vec<usize> = segments.iter().map(|s| s.value_position()).collect();
        let fmt_tokens: Vec<String> = tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                if value_positions.contains(&index) {
                    "%s".to_owned()
                } else {
                    token.replace('%', "%%")
                }
            })
            .collect();
        let mut id_fmt = fmt_tokens.join("/");
        if rooted {
            id_fmt.insert(0, '/');
        }

        let id = Self {
            type_name: type_name.to_owned(),
            id_raw: resource_id.to_owned(),
            id_fmt,
            has_subscription_id: segments.iter().any(|s| s.is_subscription()),
            has_resource_group: segments.iter().any(|s| s.is_resource_group()),
            segments,
        };
        for s in &id.segments {
            debug!(
                "{}: segment {}/{} as {} ({})",
                id.type_name, s.segment_key, s.segment_value, s.field_name, s.argument_name
            );
        }
        Ok(id)
    }

    /// The example cut off just before the token at `token_index`, keeping the
    /// separator in front of it.
    pub fn prefix_before(&self, token_index: usize) -> String {
        let (rooted, tokens) = split_tokens(&self.id_raw);
        let mut prefix = if rooted { "/".to_owned() } else { String::new() };
        for token in tokens.into_iter().take(token_index) {
            prefix.push_str(token);
            prefix.push('/');
        }
        prefix
    }

    /// Render the ID from field values given in segment order, the same way
    /// the generated formatter does.
    pub fn format_id<S: AsRef<str>>(&self, values: &[S]) -> Result<String, CodeGenError> {
        if values.len() != self.segments.len() {
            return Err(CodeGenError::other(format!(
                "{} expects {} values, got {}",
                self.type_name,
                self.segments.len(),
                values.len()
            )));
        }

        let mut out = String::with_capacity(self.id_fmt.len());
        let mut values = values.iter();
        let mut chars = self.id_fmt.chars();
        while let Some(c) = chars.next() {
            if c != '%' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('%') => out.push('%'),
                Some('s') => {
                    if let Some(v) = values.next() {
                        out.push_str(v.as_ref());
                    }
                }
                Some(other) => {
                    return Err(CodeGenError::other(format!(
                        "Unexpected verb %{other} in {}",
                        self.id_fmt
                    )))
                }
                None => out.push('%'),
            }
        }
        Ok(out)
    }

    /// Parse `input` the same way the generated parser does.
    pub fn parse_id(&self, input: &str) -> Result<ResourceIdValues, ResourceIdError> {
        let mut id = AzureResourceId::parse(input)?;

        if self.has_subscription_id && id.subscription_id.is_empty() {
            return Err(ResourceIdError::MissingSegment(SUBSCRIPTIONS_KEY.to_owned()));
        }
        if self.has_resource_group && id.resource_group.is_empty() {
            return Err(ResourceIdError::MissingSegment(RESOURCE_GROUPS_KEY.to_owned()));
        }

        let mut values = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            let value = if segment.is_subscription() {
                id.subscription_id.clone()
            } else if segment.is_resource_group() {
                id.resource_group.clone()
            } else {
                id.pop_segment(&segment.segment_key)?
            };
            values.push((segment.field_name.clone(), value));
        }

        id.validate_no_empty_segments(input)?;
        Ok(ResourceIdValues { values })
    }

    /// The example values, in segment order.
    pub fn example_values(&self) -> Vec<&str> {
        self.segments
            .iter()
            .map(|s| s.segment_value.as_str())
            .collect()
    }
}
