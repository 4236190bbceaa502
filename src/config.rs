//! Configuration handling for stamp.
//! Every setting has a built-in default; a `stamp.json`, `stamp.yml` or
//! `stamp.yaml` file in the project root overrides any subset of them.

use crate::error::{Error, Result};
use crate::ignore::default_exclusion_patterns;
use crate::templates::TemplateSource;
use crate::types::{default_type_specs, TypeSpec};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Supported configuration file names, in lookup order.
pub const CONFIG_FILES: [&str; 3] = ["stamp.json", "stamp.yml", "stamp.yaml"];

/// Settings for the type-table generator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypeTableConfig {
    /// Template file; the bundled vectors template when unset.
    pub template: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub extension: String,
    pub types: Vec<TypeSpec>,
}

impl TypeTableConfig {
    /// The configured template resolved against `root`, or the bundled one.
    pub fn template_source<P: AsRef<Path>>(&self, root: P) -> TemplateSource {
        match &self.template {
            Some(path) => TemplateSource::File(Config::resolve(root, path)),
            None => TemplateSource::vectors(),
        }
    }
}

impl Default for TypeTableConfig {
    fn default() -> Self {
        Self {
            template: None,
            output_dir: PathBuf::from("Assets/Scripts/Runtime/Extensions"),
            extension: "cs".to_string(),
            types: default_type_specs(),
        }
    }
}

/// Settings for the manifest builder.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestConfig {
    /// Template file; the bundled manifest template when unset.
    pub template: Option<PathBuf>,
    pub output: PathBuf,
    pub exclude: Vec<String>,
    pub generated_via: String,
    /// Match exclusions ignoring case. Defaults to true on Windows only.
    pub case_insensitive: bool,
}

impl ManifestConfig {
    /// The configured template resolved against `root`, or the bundled one.
    pub fn template_source<P: AsRef<Path>>(&self, root: P) -> TemplateSource {
        match &self.template {
            Some(path) => TemplateSource::File(Config::resolve(root, path)),
            None => TemplateSource::manifest(),
        }
    }
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            template: None,
            output: PathBuf::from("Directory.Build.props"),
            exclude: default_exclusion_patterns(),
            generated_via: "stamp manifest".to_string(),
            case_insensitive: cfg!(windows),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub type_table: TypeTableConfig,
    pub manifest: ManifestConfig,
}

impl Config {
    /// Parses configuration content, trying JSON first and YAML second.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the content is neither
    pub fn parse(content: &str) -> Result<Self> {
        match serde_json::from_str(content) {
            Ok(config) => Ok(config),
            Err(_) => serde_yaml::from_str(content)
                .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e))),
        }
    }

    /// Loads configuration for `root`.
    ///
    /// An explicit path must exist. Without one, the first of [`CONFIG_FILES`]
    /// found in `root` is used, falling back to the defaults.
    pub fn load<P: AsRef<Path>>(root: P, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(Error::ConfigError(format!(
                    "Invalid configuration path: {}",
                    path.display()
                )));
            }
            return Self::read(path);
        }

        for file in CONFIG_FILES {
            let config_path = root.as_ref().join(file);
            if config_path.is_file() {
                return Self::read(&config_path);
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    fn read(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| Error::filesystem(path, e))?;
        Self::parse(&content)
    }

    /// Resolves a configured path against the project root.
    pub fn resolve<P: AsRef<Path>>(root: P, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            root.as_ref().join(path)
        }
    }
}
