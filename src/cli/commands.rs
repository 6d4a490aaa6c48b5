// ABOUTME: Command implementation for the envject CLI
// ABOUTME: Handles loading, rendering, and writing of configuration templates

use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

use super::config::Config;
use crate::output::{FileWriter, OutputWriter, StdoutWriter};
use crate::template::{engine, TemplateContext, TemplateEngine};

/// Render a template file and write the result to the output path.
///
/// The substitution context is layered from lowest to highest precedence:
/// process environment, configured `template_vars`, command line overrides
/// (already merged into the config by the caller).
pub fn render_template(
    template_path: PathBuf,
    output_path: PathBuf,
    dry_run: bool,
    config: &Config,
) -> Result<()> {
    info!("Rendering template: {}", template_path.display());

    let mut context = TemplateContext::from_env();
    context.extend_variables(config.template_vars.clone());
    debug!("Substitution context holds {} variables", context.len());

    let content = engine::load_template(&template_path)?;
    let template_engine = TemplateEngine::new();
    let rendered = template_engine.render(&content, &context);
    debug!("Template rendered, {} characters", rendered.len());

    if template_engine.has_placeholders(&rendered) {
        debug!("Rendered output still contains placeholder-like text");
    }

    if dry_run {
        StdoutWriter::new().write(&rendered, &output_path)?;
        info!("Dry run - output file not written");
        return Ok(());
    }

    FileWriter::new().write(&rendered, &output_path)?;
    println!("Configuration written to {}", output_path.display());

    Ok(())
}
