use super::{aligned_fields, file_header, ResourceIdGenerator};
use crate::{config::GoImports, utils::go_string};

/// One row of the generated parser test table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserTestCase {
    /// Comment rendered above the row.
    pub description: String,
    pub input: String,
    /// Expected `(field_name, value)` pairs, `None` if parsing must fail.
    pub expected: Option<Vec<(String, String)>>,
}

impl ParserTestCase {
    fn error(description: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            input: input.into(),
            expected: None,
        }
    }

    fn render(&self, struct_name: &str) -> String {
        let label = if self.expected.is_some() {
            "Input:    "
        } else {
            "Input: "
        };
        let mut out = format!(
            "\t\t{{\n\t\t\t// {}\n\t\t\t{label}{},\n",
            self.description,
            go_string(&self.input)
        );
        match &self.expected {
            None => out.push_str("\t\t\tError: true,\n"),
            Some(fields) => {
                let fields: Vec<_> = fields
                    .iter()
                    .map(|(f, v)| (f.as_str(), go_string(v)))
                    .collect();
                out.push_str(&format!(
                    "\t\t\tExpected: &{struct_name}{{\n{}\t\t\t}},\n",
                    aligned_fields(&fields, "\t\t\t\t")
                ));
            }
        }
        out.push_str("\t\t},\n");
        out
    }
}

impl ResourceIdGenerator {
    /// Rows of the generated parser test.
    ///
    /// For every segment the example is cut off once before the key and once
    /// before the value, both must be rejected. The full example must parse
    /// to its own values and the upper-cased example must be rejected.
    pub fn parser_cases(&self) -> Vec<ParserTestCase> {
        let mut cases = vec![ParserTestCase::error("empty", "")];

        for s in &self.id.segments {
            cases.push(ParserTestCase::error(
                format!("missing {}", s.field_name),
                self.id.prefix_before(s.position),
            ));
            cases.push(ParserTestCase::error(
                format!("missing value for {}", s.field_name),
                self.id.prefix_before(s.value_position()),
            ));
        }

        cases.push(ParserTestCase {
            description: "valid".to_owned(),
            input: self.id.id_raw.clone(),
            expected: Some(
                self.id
                    .segments
                    .iter()
                    .map(|s| (s.field_name.clone(), s.segment_value.clone()))
                    .collect(),
            ),
        });
        cases.push(ParserTestCase::error(
            "upper-cased",
            self.id.id_raw.to_uppercase(),
        ));
        cases
    }

    /// The Go test file for the code rendered by [`ResourceIdGenerator::code`].
    pub fn test_code(&self) -> String {
        let mut out = match &self.imports.resourceid {
            Some(resourceid) => {
                let mut out = file_header(&["testing", "", resourceid.as_str()]);
                out.push_str(&format!(
                    "var _ {}.Formatter = {}{{}}\n\n",
                    GoImports::package_name(resourceid),
                    self.struct_name()
                ));
                out
            }
            None => file_header(&["testing"]),
        };
        out.push_str(&self.formatter_test_code());
        out.push('\n');
        out.push_str(&self.parser_test_code());
        out
    }

    fn formatter_test_code(&self) -> String {
        let arguments = self
            .id
            .segments
            .iter()
            .map(|s| go_string(&s.segment_value))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "func Test{}Formatter(t *testing.T) {{\n\tactual := {}({arguments}).ID(\"\")\n\texpected := {}\n\tif actual != expected {{\n\t\tt.Fatalf(\"Expected %q but got %q\", expected, actual)\n\t}}\n}}\n",
            self.parser_name(),
            self.constructor_name(),
            go_string(&self.id.id_raw)
        )
    }

    fn parser_test_code(&self) -> String {
        let name = self.struct_name();
        let mut out = format!(
            "func Test{}(t *testing.T) {{\n\ttestData := []struct {{\n\t\tInput    string\n\t\tError    bool\n\t\tExpected *{name}\n\t}}{{\n",
            self.parser_name()
        );
        for (i, case) in self.parser_cases().iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&case.render(&name));
        }
        out.push_str("\t}\n\n");

        // Go rejects an `actual` that no field comparison reads.
        let actual = if self.id.segments.is_empty() {
            "_"
        } else {
            "actual"
        };
        out.push_str(&format!(
            "\tfor _, v := range testData {{\n\t\tt.Logf(\"[DEBUG] Testing %q\", v.Input)\n\n\t\t{actual}, err := {}(v.Input)\n",
            self.parser_name()
        ));
        out.push_str(
            "\t\tif err != nil {\n\t\t\tif v.Error {\n\t\t\t\tcontinue\n\t\t\t}\n\n\t\t\tt.Fatalf(\"Expect a value but got an error: %s\", err)\n\t\t}\n\t\tif v.Error {\n\t\t\tt.Fatal(\"Expect an error but didn't get one\")\n\t\t}\n",
        );
        for s in &self.id.segments {
            out.push_str(&format!(
                "\n\t\tif actual.{f} != v.Expected.{f} {{\n\t\t\tt.Fatalf(\"Expected %q but got %q for {f}\", v.Expected.{f}, actual.{f})\n\t\t}}\n",
                f = s.field_name
            ));
        }
        out.push_str("\t}\n}\n");
        out
    }
}
