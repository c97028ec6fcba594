//! Project description (`project_template.json`).
//!
//! ```json
//! {
//!   "projectName": "SimpleApp",
//!   "outputDir": "..",
//!   "enableTests": true,
//!   "testFramework": "gtest",
//!   "cStandard": "11",
//!   "cppStandard": "17",
//!   "libraries": [{ "name": "mylib", "sources": ["mylib.c"], "headers": ["mylib.h"] }],
//!   "executables": [{ "name": "app", "sources": ["main.c"], "dependencies": ["mylib"] }]
//! }
//! ```
//!
//! Unknown fields are ignored. The configuration is read once and never
//! mutated afterwards.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub project_name: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub enable_tests: bool,
    #[serde(default)]
    pub test_framework: TestFramework,
    #[serde(default)]
    pub c_standard: Option<String>,
    #[serde(default)]
    pub cpp_standard: Option<String>,
    #[serde(default)]
    pub libraries: Vec<LibrarySpec>,
    #[serde(default)]
    pub executables: Vec<ExecutableSpec>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LibrarySpec {
    pub name: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub headers: Vec<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExecutableSpec {
    pub name: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// Test scaffold flavour. Only consulted when `enableTests` is set.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TestFramework {
    /// Dependency-free runner registered with CTest.
    #[default]
    Simple,
    /// GoogleTest fetched at configure time.
    Gtest,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("..")
}

impl ProjectConfig {
    /// Read and parse a JSON project description.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            origin: path.display().to_string(),
            source,
        })
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            origin: "<inline>".to_string(),
            source,
        })
    }

    /// Directory the project is generated into: `outputDir/projectName`.
    pub fn project_root(&self) -> PathBuf {
        self.output_dir.join(&self.project_name)
    }

    /// The test framework in effect, `None` when tests are disabled.
    pub fn tests(&self) -> Option<TestFramework> {
        self.enable_tests.then_some(self.test_framework)
    }

    pub fn library(&self, name: &str) -> Option<&LibrarySpec> {
        self.libraries.iter().find(|lib| lib.name == name)
    }
}

impl LibrarySpec {
    /// Name usable inside C identifiers (`my-lib` -> `my_lib`).
    pub fn ident(&self) -> String {
        c_identifier(&self.name)
    }

    /// Header declaring the library's hello function, when the library
    /// also has a source defining it.
    pub fn hello_header(&self) -> Option<&str> {
        if self.sources.is_empty() {
            return None;
        }
        self.headers.first().map(String::as_str)
    }

    pub fn hello_fn(&self) -> String {
        format!("{}_hello", self.ident())
    }
}

impl ExecutableSpec {
    /// Source that receives the `main` stub: the first listed C/C++
    /// translation unit.
    pub fn entry_source(&self) -> Option<&str> {
        self.sources
            .iter()
            .map(String::as_str)
            .find(|src| SourceKind::of(src).is_translation_unit())
    }
}

/// Language of a file, decided by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    C,
    Cpp,
    Header,
    Other,
}

impl SourceKind {
    pub fn of(file: &str) -> Self {
        let ext = Path::new(file)
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "c" => SourceKind::C,
            "cc" | "cpp" | "cxx" | "c++" => SourceKind::Cpp,
            "h" | "hh" | "hpp" | "hxx" | "inl" => SourceKind::Header,
            _ => SourceKind::Other,
        }
    }

    pub fn is_translation_unit(self) -> bool {
        matches!(self, SourceKind::C | SourceKind::Cpp)
    }
}

pub fn c_identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}
