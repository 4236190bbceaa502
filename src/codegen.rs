//! Type-table code generation.
//! Renders one template per [`TypeSpec`] into `<name>Extensions.<ext>`.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Result;
use crate::fs::{write_generated, GeneratedFile};
use crate::renderer::TemplateRenderer;
use crate::templates::TemplateSource;
use crate::types::{validate_all, TypeSpec};

/// Suffix appended to the type name to form the output file stem.
pub const FILENAME_SUFFIX: &str = "Extensions";

/// Output file for `spec`: `out_dir/<name>Extensions.<extension>`.
pub fn output_path<P: AsRef<Path>>(out_dir: P, spec: &TypeSpec, extension: &str) -> PathBuf {
    out_dir
        .as_ref()
        .join(format!("{}{}.{}", spec.name, FILENAME_SUFFIX, extension))
}

/// Renders every spec without touching the filesystem.
///
/// The whole table is validated first; rendering then follows the declared
/// order and stops at the first failure.
pub fn render_type_table<P: AsRef<Path>>(
    engine: &dyn TemplateRenderer,
    specs: &[TypeSpec],
    template_name: &str,
    template: &str,
    out_dir: P,
    extension: &str,
) -> Result<Vec<GeneratedFile>> {
    validate_all(specs)?;
    debug!("Validated {} type specs", specs.len());

    specs
        .iter()
        .map(|spec| -> Result<GeneratedFile> {
            debug!("Rendering {} for {}", template_name, spec.name);
            let name = format!("{} ({})", template_name, spec.name);
            let content = engine.render(&name, template, &spec.context())?;
            Ok(GeneratedFile { path: output_path(&out_dir, spec, extension), content })
        })
        .collect()
}

/// Generates one file per spec from `template`.
///
/// Nothing is written unless every spec rendered successfully.
///
/// # Returns
/// * `Result<Vec<GeneratedFile>>` - The files in declared order
pub fn generate<P: AsRef<Path>>(
    engine: &dyn TemplateRenderer,
    specs: &[TypeSpec],
    template: &TemplateSource,
    out_dir: P,
    extension: &str,
    dry_run: bool,
) -> Result<Vec<GeneratedFile>> {
    debug!("Using {}", template);
    let template_name = template.name();
    let template = template.load()?;

    let files = render_type_table(engine, specs, &template_name, &template, out_dir, extension)?;

    for file in &files {
        if dry_run {
            info!("Would write '{}'", file.path.display());
        } else {
            write_generated(file)?;
            info!("Generated '{}'", file.path.display());
        }
    }
    Ok(files)
}
