use super::{aligned_fields, file_header, ResourceIdGenerator};
use crate::{config::GoImports, utils::go_string};

impl ResourceIdGenerator {
    /// The Go file declaring the ID struct, its constructor, formatter and
    /// parser.
    pub fn code(&self) -> String {
        let azure = self.imports.azure.as_str();
        let mut out = if self.id.segments.is_empty() {
            file_header(&[azure])
        } else {
            file_header(&["fmt", "", azure])
        };
        out.push_str(&self.struct_code());
        out.push('\n');
        out.push_str(&self.constructor_code());
        out.push('\n');
        out.push_str(&self.formatter_code());
        out.push('\n');
        out.push_str(&self.parser_code());
        out
    }

    fn struct_code(&self) -> String {
        let width = self
            .id
            .segments
            .iter()
            .map(|s| s.field_name.len())
            .max()
            .unwrap_or(0);
        let mut fields = String::new();
        for s in &self.id.segments {
            let pad = " ".repeat(width - s.field_name.len() + 1);
            fields.push_str(&format!("\t{}{pad}string\n", s.field_name));
        }

        format!("type {} struct {{\n{fields}}}\n", self.struct_name())
    }

    fn constructor_code(&self) -> String {
        let arguments = self
            .id
            .segments
            .iter()
            .map(|s| s.argument_name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let signature = if arguments.is_empty() {
            String::new()
        } else {
            format!("{arguments} string")
        };
        let assignments: Vec<_> = self
            .id
            .segments
            .iter()
            .map(|s| (s.field_name.as_str(), s.argument_name.clone()))
            .collect();

        format!(
            "func {}({signature}) {name} {{\n\treturn {name}{{\n{}\t}}\n}}\n",
            self.constructor_name(),
            aligned_fields(&assignments, "\t\t"),
            name = self.struct_name(),
        )
    }

    fn formatter_code(&self) -> String {
        let fmt_string = go_string(&self.id.id_fmt);
        let body = if self.id.segments.is_empty() {
            "\treturn fmtString\n".to_owned()
        } else {
            let arguments = self
                .id
                .segments
                .iter()
                .map(|s| format!("id.{}", s.field_name))
                .collect::<Vec<_>>()
                .join(", ");
            format!("\treturn fmt.Sprintf(fmtString, {arguments})\n")
        };

        format!(
            "func (id {}) ID(_ string) string {{\n\tfmtString := {fmt_string}\n{body}}}\n",
            self.struct_name()
        )
    }

    fn parser_code(&self) -> String {
        let azure = GoImports::package_name(&self.imports.azure);
        let name = self.struct_name();
        let mut out = format!(
            "func {}(input string) (*{name}, error) {{\n\tid, err := {azure}.ParseAzureResourceID(input)\n\tif err != nil {{\n\t\treturn nil, err\n\t}}\n\n",
            self.parser_name()
        );

        let mut privileged = Vec::new();
        if self.id.has_subscription_id {
            privileged.push(("SubscriptionId", "id.SubscriptionID".to_owned()));
        }
        if self.id.has_resource_group {
            privileged.push(("ResourceGroup", "id.ResourceGroup".to_owned()));
        }
        if privileged.is_empty() {
            out.push_str(&format!("\tresourceId := {name}{{}}\n\n"));
        } else {
            out.push_str(&format!(
                "\tresourceId := {name}{{\n{}\t}}\n\n",
                aligned_fields(&privileged, "\t\t")
            ));
        }

        if self.id.has_subscription_id {
            out.push_str(&missing_check("SubscriptionId", "subscriptions"));
        }
        if self.id.has_resource_group {
            out.push_str(&missing_check("ResourceGroup", "resourceGroups"));
        }

        for s in &self.id.segments {
            if s.is_subscription() || s.is_resource_group() {
                continue;
            }
            out.push_str(&format!(
                "\tif resourceId.{}, err = id.PopSegment({}); err != nil {{\n\t\treturn nil, err\n\t}}\n",
                s.field_name,
                go_string(&s.segment_key)
            ));
        }
        if self
            .id
            .segments
            .iter()
            .any(|s| !s.is_subscription() && !s.is_resource_group())
        {
            out.push('\n');
        }

        out.push_str(
            "\tif err := id.ValidateNoEmptySegments(input); err != nil {\n\t\treturn nil, err\n\t}\n\n\treturn &resourceId, nil\n}\n",
        );
        out
    }
}

fn missing_check(field: &str, key: &str) -> String {
    format!(
        "\tif resourceId.{field} == \"\" {{\n\t\treturn nil, fmt.Errorf(\"ID was missing the '{key}' element\")\n\t}}\n\n"
    )
}
