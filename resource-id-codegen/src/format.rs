use std::{io::Write, path::Path, process::Command};

use log::debug;

use crate::CodeGenError;

/// Normalizes generated source before it is written.
pub trait CodeFormatter {
    fn format(&self, code: &str) -> Result<String, CodeGenError>;
}

/// Returns the code unchanged.
pub struct PassThroughFormatter;

impl CodeFormatter for PassThroughFormatter {
    fn format(&self, code: &str) -> Result<String, CodeGenError> {
        Ok(code.to_owned())
    }
}

/// Formats Go code by running external tools over a temporary file.
///
/// Each tool is invoked as `<tool> -w <file>`, in order. A tool that cannot
/// be started or exits unsuccessfully fails the formatting.
pub struct GolangCodeFormatter {
    tools: Vec<String>,
}

impl Default for GolangCodeFormatter {
    fn default() -> Self {
        Self::new(vec!["gofmt".to_owned(), "goimports".to_owned()])
    }
}

impl GolangCodeFormatter {
    pub fn new(tools: Vec<String>) -> Self {
        Self { tools }
    }

    fn run_tool(tool: &str, path: &Path) -> Result<(), CodeGenError> {
        debug!("Running {tool} -w {}", path.display());
        let output = Command::new(tool)
            .arg("-w")
            .arg(path)
            .output()
            .map_err(|e| CodeGenError::format(format!("failed to run {tool}: {e}")))?;

        if !output.status.success() {
            return Err(CodeGenError::format(format!(
                "{tool} exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(())
    }
}

impl CodeFormatter for GolangCodeFormatter {
    fn format(&self, code: &str) -> Result<String, CodeGenError> {
        let mut file = tempfile::Builder::new()
            .prefix("resource-id-")
            .suffix(".go")
            .tempfile()
            .map_err(|e| CodeGenError::io("Failed to create temporary file", e))?;
        file.write_all(code.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| CodeGenError::io("Failed to write temporary file", e))?;

        for tool in &self.tools {
            Self::run_tool(tool, file.path())?;
        }

        // The temporary file is removed when `file` is dropped.
        std::fs::read_to_string(file.path())
            .map_err(|e| CodeGenError::io("Failed to read formatted file", e))
    }
}
