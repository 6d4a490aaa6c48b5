// ABOUTME: Placeholder substitution engine for configuration templates
// ABOUTME: Replaces literal ${NAME} tokens with values from a substitution context

use std::path::Path;
use tracing::debug;

use super::context::TemplateContext;
use super::error::{Result, TemplateError};

/// Build the placeholder token for a variable name.
pub fn placeholder(name: &str) -> String {
    format!("${{{name}}}")
}

/// Read a template file into memory as text.
pub fn load_template(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path).map_err(|source| TemplateError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "Loaded template {} ({} bytes)",
        path.display(),
        content.len()
    );
    Ok(content)
}

/// Literal `${NAME}` substitution over a text buffer.
///
/// Each context variable gets one full scan of the buffer, applied
/// sequentially in the context's iteration order. Tokens without a matching
/// variable are left verbatim, and no name syntax is enforced: matching is
/// plain substring replacement. A value that itself contains a token may be
/// rewritten by a later variable's pass, so the result of that corner case
/// depends on enumeration order.
#[derive(Debug, Clone, Default)]
pub struct TemplateEngine;

impl TemplateEngine {
    pub fn new() -> Self {
        Self
    }

    /// Render a template string against the given context.
    pub fn render(&self, template: &str, context: &TemplateContext) -> String {
        let mut rendered = template.to_string();

        for (name, value) in context.iter() {
            let token = placeholder(name);
            if rendered.contains(&token) {
                rendered = rendered.replace(&token, value);
            }
        }

        rendered
    }

    /// Check whether a string contains placeholder-shaped text
    pub fn has_placeholders(&self, text: &str) -> bool {
        if let Some(start) = text.find("${") {
            return text[start..].contains('}');
        }
        false
    }
}
