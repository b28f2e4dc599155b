use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::CodeGenError;

pub const DEFAULT_AZURE_IMPORT: &str =
    "github.com/terraform-providers/terraform-provider-azurerm/azurerm/helpers/azure";
pub const DEFAULT_RESOURCEID_IMPORT: &str =
    "github.com/terraform-providers/terraform-provider-azurerm/azurerm/internal/resourceid";

/// Go packages the generated code imports.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GoImports {
    /// Package providing `ParseAzureResourceID`.
    #[serde(default = "default_azure_import")]
    pub azure: String,
    /// Package providing the `Formatter` interface. When unset the generated
    /// tests do not assert that the ID type implements it.
    #[serde(default = "default_resourceid_import")]
    pub resourceid: Option<String>,
}

fn default_azure_import() -> String {
    DEFAULT_AZURE_IMPORT.to_owned()
}

fn default_resourceid_import() -> Option<String> {
    Some(DEFAULT_RESOURCEID_IMPORT.to_owned())
}

impl Default for GoImports {
    fn default() -> Self {
        Self {
            azure: default_azure_import(),
            resourceid: default_resourceid_import(),
        }
    }
}

impl GoImports {
    /// Last element of an import path, which is the package name used in code.
    pub fn package_name(import: &str) -> &str {
        import.rsplit('/').next().unwrap_or(import)
    }
}

/// One resource ID type to generate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CodeGenTarget {
    /// Path to the service package, the `parse` directory is created below it.
    pub path: String,
    /// PascalCase type name, e.g. `SharedImageGallery`.
    pub name: String,
    /// A literal example of the resource ID.
    pub id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CodeGenConfig {
    /// Run the generated code through the formatters before writing it.
    #[serde(default = "default_format")]
    pub format: bool,
    /// Formatting tools, each run as `<tool> -w <file>` in order.
    #[serde(default = "default_formatters")]
    pub formatters: Vec<String>,
    #[serde(default)]
    pub imports: GoImports,
    pub targets: Vec<CodeGenTarget>,
}

fn default_format() -> bool {
    true
}

fn default_formatters() -> Vec<String> {
    vec!["gofmt".to_owned(), "goimports".to_owned()]
}

impl CodeGenConfig {
    /// A config generating a single target with default settings.
    pub fn single(target: CodeGenTarget) -> Self {
        Self {
            format: default_format(),
            formatters: default_formatters(),
            imports: GoImports::default(),
            targets: vec![target],
        }
    }

    pub fn from_yaml(text: &str) -> Result<Self, CodeGenError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CodeGenError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| CodeGenError::io("Failed to read config file", e))?;
        Self::from_yaml(&text).map_err(|e| e.in_file(path.display().to_string()))
    }
}
