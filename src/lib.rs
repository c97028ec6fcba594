//! # cmakegen - CMake project generator
//!
//! Reads a declarative JSON description of a C/C++ project (name, language
//! standards, libraries, executables, test preferences) and writes a
//! CMake project tree implementing it.
//!
//! ## Quick Start
//!
//! ```bash
//! # Generate from ./project_template.json
//! cmakegen
//!
//! # Build the result
//! cd ../MyProject && cmake -B build -G Ninja && cmake --build build
//! ```
//!
//! ## Pipeline
//!
//! configuration → [`validate`] → [`manifest::build_manifest`] → [`writer::write`]
//!
//! Manifest construction is pure; only the writer touches the disk.
//!
//! ## Module Organization
//!
//! - [`config`] - Project description parsing
//! - [`manifest`] - In-memory file set and CMake generation
//! - [`scaffold`] - Test scaffolds (simple runner, GoogleTest)
//! - [`writer`] - Filesystem materialization

/// Project description (`project_template.json`).
pub mod config;

/// Error taxonomy: configuration vs filesystem failures.
pub mod error;

/// File manifest and CMake generation.
pub mod manifest;

/// Test scaffolds for the `tests/` subtree.
pub mod scaffold;

/// C/C++ stub bodies.
pub mod templates;

/// Terminal output helpers.
pub mod ui;

/// Configuration checks.
pub mod validate;

/// Writing the manifest to disk.
pub mod writer;

pub use config::{ExecutableSpec, LibrarySpec, ProjectConfig, TestFramework};
pub use error::{ConfigError, FilesystemError, GenerateError};
pub use manifest::{FileManifest, ManifestEntry, build_manifest};
pub use validate::validate;
pub use writer::{DiskFs, FileSystem, WriteReport, generate};
