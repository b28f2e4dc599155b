use std::sync::OnceLock;

use convert_case::{Boundary, Case, Casing};
use regex::Regex;

use crate::CodeGenError;

/// Strip a plural suffix from a path key, `galleries` becomes `gallery` and
/// `virtualMachines` becomes `virtualMachine`.
pub fn singularize(key: &str) -> String {
    if let Some(stem) = key.strip_suffix("ies") {
        format!("{stem}y")
    } else if let Some(stem) = key.strip_suffix('s') {
        stem.to_owned()
    } else {
        key.to_owned()
    }
}

pub fn upper_first(val: &str) -> String {
    let mut chars = val.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn lower_first(val: &str) -> String {
    let mut chars = val.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Base name of the generated files for a type, without extension.
///
/// `SharedImageGallery` becomes `shared_image_gallery`. Names whose snake case
/// ends in `_test` get `_id` appended so the non-test file is not mistaken
/// for a Go test file. Digits stay attached to the word before them, so
/// `ApiManagementV2` becomes `api_management_v2`.
pub fn file_stem(type_name: &str) -> String {
    let stem = type_name
        .with_boundaries(&[Boundary::LowerUpper, Boundary::Acronym])
        .to_case(Case::Snake);
    if stem.ends_with("_test") {
        format!("{stem}_id")
    } else {
        stem
    }
}

static TYPE_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn type_name_regex() -> &'static Regex {
    TYPE_NAME_REGEX.get_or_init(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").unwrap())
}

/// Check that `name` can be used as the exported Go type name.
pub fn validate_type_name(name: &str) -> Result<(), CodeGenError> {
    if type_name_regex().is_match(name) {
        Ok(())
    } else {
        Err(CodeGenError::type_name(name))
    }
}

/// Quote `val` as a Go interpreted string literal.
pub fn go_string(val: &str) -> String {
    let mut out = String::with_capacity(val.len() + 2);
    out.push('"');
    for c in val.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
