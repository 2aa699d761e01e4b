//! Dossier-pages builds render-ready view models from proxy-injected
//! identity headers and holds the portal's parsed page templates.

pub mod config;
pub mod error;
pub mod page;
pub mod registry;

// Re-export core types
pub use config::RegistryConfig;
pub use error::{Result, TemplateError};
pub use page::{
    CHECKMARK_GLYPH, CURRENT_USER_HEADER, DECISION_NOT_APPLICABLE, GLOBE_GLYPH, PageData,
    USER_METADATA_HEADER, USER_ROLE_HEADER,
};
pub use registry::{DOSSIERS_TEMPLATE, PAGE_TEMPLATE, TemplateHandle, TemplateRegistry};

/// Get the library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
