//! Where a generator's template comes from.
//! The default templates are compiled into the binary; a configured path
//! replaces them.

use std::fmt;
use std::path::PathBuf;

use crate::error::Result;
use crate::fs::read_template;

/// Default type-table template.
pub const VECTORS_TEMPLATE: &str = include_str!("../templates/vectors.cs.j2");
/// Default manifest template.
pub const MANIFEST_TEMPLATE: &str = include_str!("../templates/Directory.Build.props.j2");

/// Source of a template's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Template compiled into the binary
    Bundled { name: &'static str, source: &'static str },
    /// Template read from disk at generation time
    File(PathBuf),
}

impl TemplateSource {
    pub fn vectors() -> Self {
        Self::Bundled { name: "vectors.cs.j2", source: VECTORS_TEMPLATE }
    }

    pub fn manifest() -> Self {
        Self::Bundled { name: "Directory.Build.props.j2", source: MANIFEST_TEMPLATE }
    }

    /// Name used in diagnostics: the bundled name or the file name.
    pub fn name(&self) -> String {
        match self {
            TemplateSource::Bundled { name, .. } => name.to_string(),
            TemplateSource::File(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        }
    }

    /// Returns the template text, reading it from disk when needed.
    ///
    /// # Errors
    /// * `Error::FilesystemError` if a file template cannot be read
    pub fn load(&self) -> Result<String> {
        match self {
            TemplateSource::Bundled { source, .. } => Ok(source.to_string()),
            TemplateSource::File(path) => read_template(path),
        }
    }
}

impl From<PathBuf> for TemplateSource {
    fn from(path: PathBuf) -> Self {
        TemplateSource::File(path)
    }
}

impl From<&std::path::Path> for TemplateSource {
    fn from(path: &std::path::Path) -> Self {
        TemplateSource::File(path.to_path_buf())
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::Bundled { name, .. } => write!(f, "bundled template '{name}'"),
            TemplateSource::File(path) => write!(f, "template file '{}'", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn test_template_source_display() {
        assert_eq!(
            TemplateSource::manifest().to_string(),
            "bundled template 'Directory.Build.props.j2'"
        );
        let file = TemplateSource::from(Path::new("/path/to/type.j2"));
        assert_eq!(file.to_string(), "template file '/path/to/type.j2'");
        assert_eq!(file.name(), "type.j2");
    }

    #[test]
    fn test_bundled_templates_load_without_filesystem() {
        assert!(TemplateSource::vectors().load().unwrap().contains("{{ type_name }}Extensions"));
        assert!(TemplateSource::manifest().load().unwrap().contains("root_files"));
    }

    #[test]
    fn test_file_template_reads_from_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.j2");
        std::fs::write(&path, "{{ x }}").unwrap();

        assert_eq!(TemplateSource::from(path).load().unwrap(), "{{ x }}");
    }
}
