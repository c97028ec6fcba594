//! Materialize a [`FileManifest`] on disk.
//!
//! Writing goes through the [`FileSystem`] trait so generation can be
//! exercised against an in-memory recorder. Directories are created
//! idempotently, files are overwritten, and the first failure aborts the
//! run, leaving whatever was already written in place.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::error::{FilesystemError, GenerateError};
use crate::manifest::{FileManifest, build_manifest};

/// The two filesystem mutations generation needs.
pub trait FileSystem {
    fn create_dir_all(&mut self, path: &Path) -> io::Result<()>;
    fn write(&mut self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// Real disk access through `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFs;

impl FileSystem for DiskFs {
    fn create_dir_all(&mut self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write(&mut self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// What a completed write produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub root: PathBuf,
    /// Written files (root joined), in write order.
    pub files: Vec<PathBuf>,
    pub bytes: usize,
}

/// Create `root`, every manifest directory, then every file.
pub fn write(
    manifest: &FileManifest,
    root: &Path,
    fs: &mut impl FileSystem,
) -> Result<WriteReport, FilesystemError> {
    create_dir(fs, root)?;
    for dir in manifest.dirs() {
        create_dir(fs, &root.join(dir))?;
    }

    let mut report = WriteReport {
        root: root.to_path_buf(),
        files: Vec::with_capacity(manifest.len()),
        bytes: 0,
    };
    for entry in manifest.files() {
        let path = root.join(&entry.path);
        fs.write(&path, entry.contents.as_bytes())
            .map_err(|source| FilesystemError::WriteFile {
                path: path.clone(),
                source,
            })?;
        report.bytes += entry.contents.len();
        report.files.push(path);
    }
    Ok(report)
}

fn create_dir(fs: &mut impl FileSystem, path: &Path) -> Result<(), FilesystemError> {
    fs.create_dir_all(path)
        .map_err(|source| FilesystemError::CreateDir {
            path: path.to_path_buf(),
            source,
        })
}

/// Validate, build the manifest, and write it under `root`.
///
/// Configuration errors surface before the first filesystem call.
pub fn generate(
    config: &ProjectConfig,
    root: &Path,
    fs: &mut impl FileSystem,
) -> Result<WriteReport, GenerateError> {
    let manifest = build_manifest(config)?;
    Ok(write(&manifest, root, fs)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use std::collections::BTreeMap;

    /// Records every mutation; optionally fails writes to one path.
    #[derive(Default)]
    struct RecordingFs {
        dirs: Vec<PathBuf>,
        files: BTreeMap<PathBuf, Vec<u8>>,
        writes: usize,
        fail_on: Option<PathBuf>,
    }

    impl FileSystem for RecordingFs {
        fn create_dir_all(&mut self, path: &Path) -> io::Result<()> {
            self.dirs.push(path.to_path_buf());
            Ok(())
        }

        fn write(&mut self, path: &Path, contents: &[u8]) -> io::Result<()> {
            if self.fail_on.as_deref() == Some(path) {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
            }
            self.writes += 1;
            self.files.insert(path.to_path_buf(), contents.to_vec());
            Ok(())
        }
    }

    fn config(json: &str) -> ProjectConfig {
        ProjectConfig::from_json_str(json).unwrap()
    }

    const WITH_LIB: &str = r#"{
        "projectName": "SimpleApp",
        "enableTests": true,
        "libraries": [{ "name": "mylib", "sources": ["mylib.c"], "headers": ["mylib.h"] }],
        "executables": [{ "name": "app", "sources": ["main.c"], "dependencies": ["mylib"] }]
    }"#;

    #[test]
    fn test_generate_writes_every_entry() {
        let mut fs = RecordingFs::default();
        let root = Path::new("out").join("SimpleApp");
        let report = generate(&config(WITH_LIB), &root, &mut fs).unwrap();

        assert_eq!(report.files.len(), 7);
        assert_eq!(fs.writes, 7);
        assert_eq!(fs.dirs.first(), Some(&root));
        assert!(fs.dirs.contains(&root.join("lib").join("mylib").join("include")));
        assert!(fs.dirs.contains(&root.join("tests")));
        assert!(fs.files.contains_key(&root.join("tests").join("test_mylib.c")));
    }

    #[test]
    fn test_duplicate_library_touches_nothing() {
        let mut fs = RecordingFs::default();
        let err = generate(
            &config(r#"{ "projectName": "p", "libraries": [{ "name": "a" }, { "name": "a" }] }"#),
            Path::new("p"),
            &mut fs,
        )
        .unwrap_err();

        assert!(matches!(err, GenerateError::Config(_)));
        assert_eq!(fs.writes, 0);
        assert!(fs.dirs.is_empty());
    }

    #[test]
    fn test_source_over_library_dir_touches_nothing() {
        let mut fs = RecordingFs::default();
        let err = generate(
            &config(
                r#"{
                    "projectName": "p",
                    "libraries": [{ "name": "core", "sources": ["core.c"] }],
                    "executables": [{ "name": "app", "sources": ["main.c", "lib"] }]
                }"#,
            ),
            Path::new("p"),
            &mut fs,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            GenerateError::Config(ConfigError::PathCollision { .. })
        ));
        assert_eq!(fs.writes, 0);
        assert!(fs.dirs.is_empty());
    }

    #[test]
    fn test_write_failure_aborts() {
        let root = PathBuf::from("p");
        let mut fs = RecordingFs {
            fail_on: Some(root.join("main.c")),
            ..Default::default()
        };
        let err = generate(&config(WITH_LIB), &root, &mut fs).unwrap_err();

        match err {
            GenerateError::Filesystem(FilesystemError::WriteFile { path, .. }) => {
                assert_eq!(path, root.join("main.c"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // Root CMakeLists.txt went out before the failure; nothing after it did.
        assert_eq!(fs.writes, 1);
    }

    #[test]
    fn test_generation_is_repeatable() {
        let cfg = config(WITH_LIB);
        let mut first = RecordingFs::default();
        let mut second = RecordingFs::default();
        generate(&cfg, Path::new("p"), &mut first).unwrap();
        generate(&cfg, Path::new("p"), &mut second).unwrap();
        assert_eq!(first.files, second.files);
    }
}
