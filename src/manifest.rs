//! Manifest building.
//! Lists the files sitting directly in a project root, drops the excluded ones
//! and renders a single manifest describing the rest.

use std::path::Path;

use log::{debug, info};
use serde_json::json;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::fs::{write_generated, GeneratedFile};
use crate::ignore::{normalize_separators, ExclusionSet};
use crate::renderer::TemplateRenderer;
use crate::templates::TemplateSource;

/// Lists the regular files directly under `root`, relative to it.
///
/// Hidden entries are included; directories (including symlinks to
/// directories) are not. Dotfiles come first, then everything else, each
/// group sorted by name so the listing is stable for an unchanged tree.
///
/// # Errors
/// * `Error::FilesystemError` if `root` cannot be read, or if a file name
///   is not valid UTF-8 and so cannot be listed faithfully
pub fn discover_root_files<P: AsRef<Path>>(root: P) -> Result<Vec<String>> {
    let root = root.as_ref();
    let metadata = std::fs::metadata(root).map_err(|e| Error::filesystem(root, e))?;
    if !metadata.is_dir() {
        return Err(Error::filesystem(
            root,
            std::io::Error::new(std::io::ErrorKind::Other, "project root is not a directory"),
        ));
    }

    let mut hidden = Vec::new();
    let mut visible = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            Error::filesystem(&path, e.into())
        })?;
        if entry.path().is_dir() {
            debug!("Skipping directory {}", entry.path().display());
            continue;
        }

        // Depth is always 1, so the file name is the path relative to the root.
        let relative_path = entry.file_name().to_str().ok_or_else(|| {
            Error::filesystem(
                entry.path(),
                std::io::Error::new(std::io::ErrorKind::InvalidData, "file name is not valid UTF-8"),
            )
        })?;
        let relative_path = normalize_separators(relative_path);

        if relative_path.starts_with('.') {
            hidden.push(relative_path);
        } else {
            visible.push(relative_path);
        }
    }

    hidden.extend(visible);
    Ok(hidden)
}

/// Keeps the files no exclusion pattern matches, in their original order.
pub fn filter_excluded(files: Vec<String>, exclusions: &ExclusionSet) -> Vec<String> {
    files
        .into_iter()
        .filter(|file| match exclusions.matching_pattern(file) {
            Some(pattern) => {
                debug!("Excluding {} (matched '{}')", file, pattern);
                false
            }
            None => true,
        })
        .collect()
}

/// Renders the manifest for an already filtered file list.
pub fn render_manifest<P: AsRef<Path>>(
    engine: &dyn TemplateRenderer,
    files: &[String],
    template_name: &str,
    template: &str,
    generated_via: &str,
    output: P,
) -> Result<GeneratedFile> {
    let context = json!({
        "root_files": files,
        "generated_via": generated_via,
    });
    let content = engine.render(template_name, template, &context)?;
    Ok(GeneratedFile { path: output.as_ref().to_path_buf(), content })
}

/// Discovers, filters and renders the manifest for `root`, then writes it to `output`.
///
/// # Arguments
/// * `engine` - Template renderer
/// * `root` - Project root whose immediate files are listed
/// * `exclusions` - Compiled exclusion patterns
/// * `generated_via` - Provenance string exposed to the template
/// * `template` - Manifest template
/// * `output` - Destination of the rendered manifest
/// * `dry_run` - Render without writing
pub fn build_manifest<P: AsRef<Path>, Q: AsRef<Path>>(
    engine: &dyn TemplateRenderer,
    root: P,
    exclusions: &ExclusionSet,
    generated_via: &str,
    template: &TemplateSource,
    output: Q,
    dry_run: bool,
) -> Result<GeneratedFile> {
    let root = root.as_ref();

    let discovered = discover_root_files(root)?;
    debug!("Discovered {} files in {}", discovered.len(), root.display());
    let files = filter_excluded(discovered, exclusions);

    debug!("Using {}", template);
    let template_name = template.name();
    let template = template.load()?;

    let manifest = render_manifest(engine, &files, &template_name, &template, generated_via, output)?;

    if dry_run {
        info!("Would write '{}' ({} files)", manifest.path.display(), files.len());
    } else {
        write_generated(&manifest)?;
        info!("Generated '{}' ({} files)", manifest.path.display(), files.len());
    }
    Ok(manifest)
}
