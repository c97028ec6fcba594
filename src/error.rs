//! Error types for project generation.
//!
//! Generation fails in exactly two ways: the configuration is unusable
//! ([`ConfigError`], raised before anything touches the disk) or the disk
//! refuses a write ([`FilesystemError`], raised at the point of failure).

use std::path::PathBuf;
use thiserror::Error;

/// Malformed or inconsistent project configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not match the schema
    /// (missing `projectName`, unknown `testFramework`, wrong types).
    #[error("failed to parse config from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("projectName must not be empty")]
    EmptyProjectName,

    /// A name contains characters that cannot be used as a CMake target
    /// or directory name.
    #[error("invalid {field} '{value}': use letters, digits, '_', '-' or '.'")]
    InvalidName { field: String, value: String },

    #[error("invalid {field} '{value}': expected a version such as \"11\" or \"17\"")]
    InvalidStandard { field: &'static str, value: String },

    #[error("duplicate library name '{0}' in libraries")]
    DuplicateLibrary(String),

    #[error("duplicate executable name '{0}' in executables")]
    DuplicateExecutable(String),

    #[error("executable '{0}' lists no sources")]
    NoSources(String),

    /// Two generated CMake targets would share a name (a library and an
    /// executable, or a user target and a generated test target).
    #[error("CMake target name '{0}' is used more than once")]
    TargetCollision(String),

    /// A name CMake keeps for its own targets (`all`, `clean`, `test`, ...).
    #[error("'{0}' is a reserved CMake target name")]
    ReservedTarget(String),

    /// Two library names map to the same C identifier, so their generated
    /// `<ident>_hello` functions would clash at link time.
    #[error("libraries '{first}' and '{second}' both map to C identifier '{ident}'")]
    IdentifierCollision {
        first: String,
        second: String,
        ident: String,
    },

    /// A listed file lands on a path the project already uses for another
    /// file or for a directory.
    #[error("path '{}' is generated more than once or clashes with a directory", .path.display())]
    PathCollision { path: PathBuf },

    /// An executable depends on a library that is not declared.
    #[error("executable '{executable}' depends on unknown library '{dependency}'")]
    UnknownDependency {
        executable: String,
        dependency: String,
    },

    /// A source or header entry is empty, absolute, or escapes its directory.
    #[error("invalid file name '{file}' in {owner}")]
    InvalidFileName { owner: String, file: String },
}

/// Directory creation or file write failure.
#[derive(Error, Debug)]
pub enum FilesystemError {
    #[error("failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Any failure of a full generate run.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}
