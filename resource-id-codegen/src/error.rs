use std::fmt::Display;

use resource_id_types::ResourceIdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodeGenErrorKind {
    #[error("segments weren't divisible by 2: {0:?}")]
    Segments(String),
    #[error("Invalid resource ID: {0}")]
    ResourceId(#[from] ResourceIdError),
    #[error("Invalid type name {0:?}, expected a PascalCase identifier")]
    TypeName(String),
    #[error("Failed to load config: {0}")]
    Config(#[from] serde_yaml::Error),
    #[error("Failed to format generated code: {0}")]
    Format(String),
    #[error("{0}")]
    Other(String),
    #[error("{0}: {1}")]
    Io(String, std::io::Error),
}

#[derive(Error, Debug)]
pub struct CodeGenError {
    #[source]
    pub kind: Box<CodeGenErrorKind>,
    pub context: Option<String>,
    pub file: Option<String>,
}

impl Display for CodeGenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Code generation failed: {}", self.kind)?;
        if let Some(context) = &self.context {
            write!(f, ", while {context}")?;
        }
        if let Some(file) = &self.file {
            write!(f, ", while writing file {file}")?;
        }
        Ok(())
    }
}

impl From<ResourceIdError> for CodeGenError {
    fn from(value: ResourceIdError) -> Self {
        Self::new(value.into())
    }
}

impl From<serde_yaml::Error> for CodeGenError {
    fn from(value: serde_yaml::Error) -> Self {
        Self::new(value.into())
    }
}

impl CodeGenError {
    pub fn io(msg: &str, e: std::io::Error) -> Self {
        Self::new(CodeGenErrorKind::Io(msg.to_owned(), e))
    }

    pub fn other(msg: impl Into<String>) -> Self {
        Self::new(CodeGenErrorKind::Other(msg.into()))
    }

    pub fn segments(id: impl Into<String>) -> Self {
        Self::new(CodeGenErrorKind::Segments(id.into()))
    }

    pub fn type_name(name: impl Into<String>) -> Self {
        Self::new(CodeGenErrorKind::TypeName(name.into()))
    }

    pub fn format(msg: impl Into<String>) -> Self {
        Self::new(CodeGenErrorKind::Format(msg.into()))
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn new(kind: CodeGenErrorKind) -> Self {
        Self {
            kind: Box::new(kind),
            context: None,
            file: None,
        }
    }
}
