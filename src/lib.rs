//! stamp is a build-time generation tool.
//! It renders templates against a table of type specifications to emit derived
//! source files, and builds a project manifest listing the root-level files that
//! survive a set of editor-style exclusion patterns.

/// Command-line interface module for the stamp application
pub mod cli;

/// Type-table code generation
/// Renders one `<Type>Extensions.<ext>` file per type specification
pub mod codegen;

/// Configuration handling
/// Supports JSON and YAML formats (stamp.json, stamp.yml, stamp.yaml)
pub mod config;

/// Error types and handling for the stamp application
pub mod error;

/// Shared file I/O helpers
pub mod fs;

/// Glob exclusion patterns for the manifest builder
pub mod ignore;

/// Logger setup for the binary
pub mod logger;

/// Root file discovery and manifest rendering
pub mod manifest;

/// Strict MiniJinja template rendering
pub mod renderer;

/// Template sources, including the templates bundled into the binary
pub mod templates;

/// Type specifications and the built-in type table
pub mod types;
