// ABOUTME: Template module for the envject template injector
// ABOUTME: Provides placeholder substitution and substitution context management

pub mod context;
pub mod engine;
pub mod error;

pub use context::TemplateContext;
pub use engine::{load_template, placeholder, TemplateEngine};
pub use error::{Result, TemplateError};
