//! Generates typed Go resource ID parsers and formatters.
//!
//! Given a type name and one literal example ID such as
//! `/subscriptions/{id}/resourceGroups/{group}/providers/Microsoft.Foo/widgets/{name}`,
//! the generator derives the segment grammar ([`ResourceId`]) and writes
//! `parse/<name>.go` with a struct, constructor, formatter and parser, plus
//! `parse/<name>_test.go` exercising them.

pub mod config;
pub mod console_logging;
mod error;
pub mod format;
mod ids;
mod render;
mod utils;

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::{info, warn};

pub use config::{CodeGenConfig, CodeGenTarget, GoImports};
pub use error::{CodeGenError, CodeGenErrorKind};
pub use format::{CodeFormatter, GolangCodeFormatter, PassThroughFormatter};
pub use ids::{ResourceId, ResourceIdSegment, ResourceIdValues};
pub use render::{ParserTestCase, ResourceIdGenerator, GO_PACKAGE};
pub use utils::file_stem;

/// Generate every target in `config`. Target paths are relative to `root_path`.
pub fn run_codegen(config: &CodeGenConfig, root_path: &str) -> Result<(), CodeGenError> {
    let formatter: Box<dyn CodeFormatter> = if config.format {
        Box::new(GolangCodeFormatter::new(config.formatters.clone()))
    } else {
        warn!("Formatting is disabled, generated code is written as rendered");
        Box::new(PassThroughFormatter)
    };

    for target in &config.targets {
        generate_target(target, &config.imports, formatter.as_ref(), root_path)
            .map_err(|e| e.with_context(format!("generating {}", target.name)))?;
    }
    Ok(())
}

/// Generate the ID file and its test file for one target, returning the
/// paths written.
pub fn generate_target(
    target: &CodeGenTarget,
    imports: &GoImports,
    formatter: &dyn CodeFormatter,
    root_path: &str,
) -> Result<Vec<PathBuf>, CodeGenError> {
    utils::validate_type_name(&target.name)?;
    let id = ResourceId::new(&target.name, &target.id)?;

    let dir = Path::new(root_path).join(&target.path).join(GO_PACKAGE);
    create_parse_dir(&dir)?;

    let generator = ResourceIdGenerator::new(id, imports.clone());
    let stem = file_stem(&target.name);
    let code_path = dir.join(format!("{stem}.go"));
    let test_path = dir.join(format!("{stem}_test.go"));

    format_and_write_to_file(&code_path, &generator.code(), formatter)?;
    format_and_write_to_file(&test_path, &generator.test_code(), formatter)?;

    Ok(vec![code_path, test_path])
}

fn create_parse_dir(dir: &Path) -> Result<(), CodeGenError> {
    match fs::create_dir(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(CodeGenError::io(
            &format!("Failed to create directory {}", dir.display()),
            e,
        )),
    }
}

fn format_and_write_to_file(
    path: &Path,
    code: &str,
    formatter: &dyn CodeFormatter,
) -> Result<(), CodeGenError> {
    let file_name = path.display().to_string();
    let formatted = formatter
        .format(code)
        .map_err(|e| e.in_file(&file_name))?;
    fs::write(path, formatted)
        .map_err(|e| CodeGenError::io("Failed to write generated code", e).in_file(&file_name))?;
    info!("Wrote {file_name}");
    Ok(())
}
