//! Type specifications driving the type-table generator.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::json;

use crate::error::{Error, Result};

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier regex is valid"));

/// Whether `value` is a plain identifier (`[A-Za-z_][A-Za-z0-9_]*`).
pub fn is_identifier(value: &str) -> bool {
    IDENTIFIER.is_match(value)
}

/// One generated source unit: a type name, its ordered components and
/// the scalar type they hold.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeSpec {
    /// Type name, also the stem of the output file.
    pub name: String,
    /// Ordered component names. Order is kept verbatim in the output.
    pub components: Vec<String>,
    /// Underlying scalar type, e.g. `int` or `float`.
    pub element_type: String,
}

impl TypeSpec {
    pub fn new<S: Into<String>>(name: S, components: &[&str], element_type: S) -> Self {
        Self {
            name: name.into(),
            components: components.iter().map(|c| c.to_string()).collect(),
            element_type: element_type.into(),
        }
    }

    /// Checks the invariants a spec must hold before anything is rendered.
    ///
    /// # Errors
    /// * `Error::InvalidTypeSpec` on a name or component that is not an
    ///   identifier, an empty element type, an empty component list or a
    ///   duplicated component
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Error::InvalidTypeSpec { name: self.name.clone(), reason };

        if self.name.trim().is_empty() {
            return Err(invalid("type name is empty".to_string()));
        }
        if !is_identifier(&self.name) {
            return Err(invalid("type name is not an identifier".to_string()));
        }
        if self.element_type.trim().is_empty() {
            return Err(invalid("element type is empty".to_string()));
        }
        if self.components.is_empty() {
            return Err(invalid("component list is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for component in &self.components {
            if component.trim().is_empty() {
                return Err(invalid("component name is empty".to_string()));
            }
            if !is_identifier(component) {
                return Err(invalid(format!("component '{component}' is not an identifier")));
            }
            if !seen.insert(component.as_str()) {
                return Err(invalid(format!("duplicate component '{component}'")));
            }
        }
        Ok(())
    }

    /// Render context exposed to the type-table template.
    pub fn context(&self) -> serde_json::Value {
        json!({
            "type_name": self.name,
            "components": self.components,
            "element_type": self.element_type,
        })
    }
}

/// Validates a whole table before any rendering begins.
///
/// Besides per-spec checks, two specs sharing a name are rejected since
/// they would write the same output file.
pub fn validate_all(specs: &[TypeSpec]) -> Result<()> {
    let mut names = HashSet::new();
    for spec in specs {
        spec.validate()?;
        if !names.insert(spec.name.as_str()) {
            return Err(Error::InvalidTypeSpec {
                name: spec.name.clone(),
                reason: "type name declared more than once".to_string(),
            });
        }
    }
    Ok(())
}

/// The built-in vector table.
pub fn default_type_specs() -> Vec<TypeSpec> {
    vec![
        TypeSpec::new("Vector2", &["x", "y"], "float"),
        TypeSpec::new("Vector2Int", &["x", "y"], "int"),
        TypeSpec::new("Vector3", &["x", "y", "z"], "float"),
        TypeSpec::new("Vector3Int", &["x", "y", "z"], "int"),
    ]
}
