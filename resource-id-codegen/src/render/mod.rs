//! Go source rendering for a [`ResourceId`].
//!
//! Everything here is plain string templating. The output is expected to be
//! run through `gofmt`/`goimports` afterwards, but is laid out so that it is
//! already formatted for the common cases.

mod code;
mod test_code;

use crate::{config::GoImports, ids::ResourceId};

pub use test_code::ParserTestCase;

/// Package every generated file belongs to, and the directory it is written to.
pub const GO_PACKAGE: &str = "parse";

const GENERATED_NOTICE: &str =
    "// NOTE: this file is generated via 'go:generate' - manual changes will be overwritten";

/// Renders the Go ID type and its tests from a derived grammar.
pub struct ResourceIdGenerator {
    id: ResourceId,
    imports: GoImports,
}

impl ResourceIdGenerator {
    pub fn new(id: ResourceId, imports: GoImports) -> Self {
        Self { id, imports }
    }

    pub fn resource_id(&self) -> &ResourceId {
        &self.id
    }

    /// Name of the generated struct, e.g. `ServerId`.
    fn struct_name(&self) -> String {
        format!("{}Id", self.id.type_name)
    }

    /// Name of the generated parser function, e.g. `ServerID`.
    fn parser_name(&self) -> String {
        format!("{}ID", self.id.type_name)
    }

    /// Name of the generated constructor, e.g. `NewServerID`.
    fn constructor_name(&self) -> String {
        format!("New{}ID", self.id.type_name)
    }
}

/// `package parse`, the generated notice and an import block.
fn file_header(imports: &[&str]) -> String {
    let mut out = format!("package {GO_PACKAGE}\n\n{GENERATED_NOTICE}\n\n");
    match imports {
        [] => {}
        [single] => out.push_str(&format!("import \"{single}\"\n\n")),
        many => {
            out.push_str("import (\n");
            for import in many {
                if import.is_empty() {
                    out.push('\n');
                } else {
                    out.push_str(&format!("\t\"{import}\"\n"));
                }
            }
            out.push_str(")\n\n");
        }
    }
    out
}

/// `Key: value,` lines of a struct literal, aligned the way gofmt does.
fn aligned_fields(pairs: &[(&str, String)], indent: &str) -> String {
    let width = pairs.iter().map(|(f, _)| f.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (field, value) in pairs {
        let pad = " ".repeat(width - field.len() + 1);
        out.push_str(&format!("{indent}{field}:{pad}{value},\n"));
    }
    out
}
