//! Error types for template registry operations
//!
//! View-model construction is a total function and has no error surface;
//! everything fallible in this crate goes through the registry.

use thiserror::Error;

/// Errors produced while loading or rendering portal templates
#[derive(Error, Debug)]
pub enum TemplateError {
    /// A required template was missing after the registry root was parsed
    #[error("Template not found: {name}")]
    NotFound { name: String },

    /// Template sources under the root failed to load or parse
    #[error("Failed to load templates under {root}: {source}")]
    Parse { root: String, source: tera::Error },

    /// A template failed to render with the supplied context
    #[error("Failed to render template {name}: {source}")]
    Render { name: String, source: tera::Error },

    /// The registry root path could not be used to locate templates
    #[error("Invalid template root: {path}")]
    InvalidRoot { path: String },
}

/// Shorthand result type for registry operations
pub type Result<T> = std::result::Result<T, TemplateError>;
