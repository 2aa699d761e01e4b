//! Template registry for the portal's render layer
//!
//! Templates are parsed once from a directory root before the embedding
//! server accepts traffic, then held immutable for the life of the
//! process. Handlers receive the registry by reference and render through
//! named handles, so readers need no locking.

use std::path::Path;

use serde::Serialize;
use tera::{Context, Tera};
use tracing::{debug, info};

use crate::config::RegistryConfig;
use crate::error::{Result, TemplateError};

/// Name of the single-dossier page template
pub const PAGE_TEMPLATE: &str = "page.html";

/// Name of the dossier listing template
pub const DOSSIERS_TEMPLATE: &str = "dossiers.html";

const REQUIRED_TEMPLATES: [&str; 2] = [PAGE_TEMPLATE, DOSSIERS_TEMPLATE];

/// Parsed, ready-to-render portal templates
///
/// A constructed registry always contains both required templates;
/// initialization fails otherwise, and the caller must not serve traffic.
#[derive(Debug)]
pub struct TemplateRegistry {
    tera: Tera,
}

impl TemplateRegistry {
    /// Parse every `.html` template under `root` and verify the required set.
    pub fn init(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();

        let pattern = root.join("**").join("*.html");
        let pattern = pattern.to_str().ok_or_else(|| TemplateError::InvalidRoot {
            path: root.display().to_string(),
        })?;

        let tera = Tera::new(pattern).map_err(|source| TemplateError::Parse {
            root: root.display().to_string(),
            source,
        })?;

        for name in REQUIRED_TEMPLATES {
            if !tera.get_template_names().any(|loaded| loaded == name) {
                return Err(TemplateError::NotFound {
                    name: name.to_string(),
                });
            }
            debug!("Template ready: {}", name);
        }

        info!(
            "Loaded {} templates from {}",
            tera.get_template_names().count(),
            root.display()
        );

        Ok(Self { tera })
    }

    /// Initialize the registry from configuration.
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        Self::init(&config.template_dir)
    }

    /// Handle for the dossier page template.
    pub fn page(&self) -> TemplateHandle<'_> {
        TemplateHandle {
            tera: &self.tera,
            name: PAGE_TEMPLATE,
        }
    }

    /// Handle for the dossier listing template.
    pub fn dossiers(&self) -> TemplateHandle<'_> {
        TemplateHandle {
            tera: &self.tera,
            name: DOSSIERS_TEMPLATE,
        }
    }
}

/// A named template bound to the registry, ready to render
#[derive(Clone, Copy)]
pub struct TemplateHandle<'a> {
    tera: &'a Tera,
    name: &'static str,
}

impl TemplateHandle<'_> {
    /// Template name within the registry.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Render the template with the given context data.
    pub fn render<T: Serialize>(&self, data: &T) -> Result<String> {
        let context = Context::from_serialize(data).map_err(|source| TemplateError::Render {
            name: self.name.to_string(),
            source,
        })?;

        self.tera
            .render(self.name, &context)
            .map_err(|source| TemplateError::Render {
                name: self.name.to_string(),
                source,
            })
    }
}
