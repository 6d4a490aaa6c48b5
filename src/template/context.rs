// ABOUTME: Substitution context management for template rendering
// ABOUTME: Captures the environment snapshot and layered variable overrides

use std::collections::HashMap;
use std::env;

/// The name/value mapping a template is rendered against.
///
/// Environment reading is confined to [`TemplateContext::from_env`]; the
/// rendering engine itself only ever sees this mapping, which keeps the
/// substitution logic pure and testable.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    vars: HashMap<String, String>,
}

impl TemplateContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the process environment into a context.
    ///
    /// Taken once at startup; later environment changes are not observed.
    pub fn from_env() -> Self {
        Self {
            vars: env::vars().collect(),
        }
    }

    /// Create a context from an explicit mapping
    pub fn from_map(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    /// Add or update a variable
    pub fn set_variable(&mut self, key: String, value: String) {
        self.vars.insert(key, value);
    }

    /// Get a variable value
    pub fn get_variable(&self, key: &str) -> Option<&String> {
        self.vars.get(key)
    }

    /// Merge additional variables, later entries winning over existing ones
    pub fn extend_variables(&mut self, vars: HashMap<String, String>) {
        self.vars.extend(vars);
    }

    /// Iterate over the name/value entries in the snapshot's natural order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.vars.iter()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
