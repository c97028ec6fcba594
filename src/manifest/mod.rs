//! In-memory description of a generated project.
//!
//! [`build_manifest`] turns a [`ProjectConfig`] into a [`FileManifest`]
//! without touching the disk. Layout, relative to the project root:
//!
//! ```text
//! CMakeLists.txt
//! <executable sources>
//! lib/<library>/CMakeLists.txt
//! lib/<library>/<sources>
//! lib/<library>/include/<headers>
//! tests/CMakeLists.txt            (enableTests only)
//! tests/test_<library>.{c,cpp}    (enableTests only)
//! ```

pub mod cmake;

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use crate::config::{ExecutableSpec, LibrarySpec, ProjectConfig, SourceKind};
use crate::error::ConfigError;
use crate::scaffold;
use crate::templates::{self, HelloCall};
use crate::validate::validate;

pub use cmake::{build_library_cmake, build_root_cmake};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Path relative to the project root.
    pub path: PathBuf,
    pub contents: String,
}

impl ManifestEntry {
    pub fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// Ordered files plus every directory they need.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FileManifest {
    dirs: BTreeSet<PathBuf>,
    files: Vec<ManifestEntry>,
}

impl FileManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory (and its ancestors) below the root.
    pub fn add_dir(&mut self, dir: impl AsRef<Path>) {
        for ancestor in dir.as_ref().ancestors() {
            if !ancestor.as_os_str().is_empty() {
                self.dirs.insert(ancestor.to_path_buf());
            }
        }
    }

    /// Add a file. A path that is already present is a collision.
    pub fn add_file(&mut self, entry: ManifestEntry) -> Result<(), ConfigError> {
        if self.get(&entry.path).is_some() {
            return Err(ConfigError::PathCollision { path: entry.path });
        }
        if let Some(parent) = entry.path.parent() {
            self.add_dir(parent.to_path_buf());
        }
        self.files.push(entry);
        Ok(())
    }

    pub fn extend(
        &mut self,
        entries: impl IntoIterator<Item = ManifestEntry>,
    ) -> Result<(), ConfigError> {
        entries.into_iter().try_for_each(|entry| self.add_file(entry))
    }

    /// No file may sit where a directory is needed.
    pub fn check_layout(&self) -> Result<(), ConfigError> {
        match self.files.iter().find(|e| self.dirs.contains(&e.path)) {
            Some(entry) => Err(ConfigError::PathCollision {
                path: entry.path.clone(),
            }),
            None => Ok(()),
        }
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        self.files
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.contents.as_str())
    }

    pub fn files(&self) -> &[ManifestEntry] {
        &self.files
    }

    /// Directories in creation order (parents before children).
    pub fn dirs(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }

    pub fn has_dir(&self, dir: impl AsRef<Path>) -> bool {
        self.dirs.contains(dir.as_ref())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Validate `config` and compute every file of the generated project.
///
/// A listed file that lands on a generated file or directory is rejected
/// here, before anything is written.
pub fn build_manifest(config: &ProjectConfig) -> Result<FileManifest, ConfigError> {
    validate(config)?;

    let mut manifest = FileManifest::new();
    manifest.add_file(ManifestEntry::new("CMakeLists.txt", build_root_cmake(config)))?;

    // Executables may share sources; the first listing provides the stub.
    let mut exe_sources = HashSet::new();
    for exe in &config.executables {
        for entry in build_executable_stubs(exe, config) {
            if exe_sources.insert(entry.path.clone()) {
                manifest.add_file(entry)?;
            }
        }
    }

    for lib in &config.libraries {
        let base = Path::new("lib").join(&lib.name);
        manifest.add_dir(base.join("include"));
        manifest.extend(build_library_tree(lib))?;
    }

    manifest.extend(build_test_tree(config))?;
    manifest.check_layout()?;

    Ok(manifest)
}

/// `lib/<name>/` contents: CMake fragment, source stubs, header stubs.
pub fn build_library_tree(lib: &LibrarySpec) -> Vec<ManifestEntry> {
    let base = Path::new("lib").join(&lib.name);
    let hello = HelloCall::of(lib);
    let mut entries = vec![ManifestEntry::new(
        base.join("CMakeLists.txt"),
        build_library_cmake(lib),
    )];

    for (i, src) in lib.sources.iter().enumerate() {
        let contents = match &hello {
            Some(call) if i == 0 => templates::hello_source(src, call, &lib.name),
            _ => templates::placeholder(src, &lib.name),
        };
        entries.push(ManifestEntry::new(base.join(src), contents));
    }

    for (i, hdr) in lib.headers.iter().enumerate() {
        let contents = if i == 0 {
            templates::hello_header(hdr, &lib.hello_fn())
        } else {
            templates::plain_header(hdr, &lib.name)
        };
        entries.push(ManifestEntry::new(base.join("include").join(hdr), contents));
    }

    entries
}

/// One stub per listed source; the entry source gets `main`.
pub fn build_executable_stubs(exe: &ExecutableSpec, config: &ProjectConfig) -> Vec<ManifestEntry> {
    let entry = exe.entry_source();
    let calls: Vec<HelloCall> = exe
        .dependencies
        .iter()
        .filter_map(|dep| config.library(dep))
        .filter_map(HelloCall::of)
        .collect();

    exe.sources
        .iter()
        .map(|src| {
            let contents = if Some(src.as_str()) == entry {
                templates::entry_point(&exe.name, SourceKind::of(src), &calls)
            } else {
                templates::placeholder(src, &exe.name)
            };
            ManifestEntry::new(src, contents)
        })
        .collect()
}

/// `tests/` contents, empty when tests are disabled.
pub fn build_test_tree(config: &ProjectConfig) -> Vec<ManifestEntry> {
    let Some(framework) = config.tests() else {
        return Vec::new();
    };
    let scaffold = scaffold::scaffold_for(framework);
    let tests = Path::new("tests");

    let mut entries = vec![ManifestEntry::new(
        tests.join("CMakeLists.txt"),
        scaffold.cmake_fragment(&config.libraries),
    )];
    entries.extend(config.libraries.iter().map(|lib| {
        ManifestEntry::new(
            tests.join(scaffold.test_file_name(lib)),
            scaffold.test_source(lib),
        )
    }));
    entries
}
