//! Configuration checks run before any file is produced.

use std::collections::{HashMap, HashSet};
use std::path::{Component, Path};

use crate::config::{ProjectConfig, TestFramework, c_identifier};
use crate::error::ConfigError;
use crate::scaffold;

/// Reject configurations that would produce an inconsistent project.
///
/// Checks run in a fixed order (project name, standards, libraries,
/// executables) and the first failure is returned.
pub fn validate(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project_name.trim().is_empty() {
        return Err(ConfigError::EmptyProjectName);
    }
    check_name("projectName", &config.project_name)?;

    check_standard("cStandard", config.c_standard.as_deref())?;
    check_standard("cppStandard", config.cpp_standard.as_deref())?;

    let mut libraries = HashSet::new();
    let mut idents: HashMap<String, &str> = HashMap::new();
    for lib in &config.libraries {
        check_name("library name", &lib.name)?;
        if !libraries.insert(lib.name.as_str()) {
            return Err(ConfigError::DuplicateLibrary(lib.name.clone()));
        }
        let ident = c_identifier(&lib.name);
        if let Some(first) = idents.insert(ident.clone(), &lib.name) {
            return Err(ConfigError::IdentifierCollision {
                first: first.to_string(),
                second: lib.name.clone(),
                ident,
            });
        }
        let owner = format!("library '{}'", lib.name);
        for file in lib.sources.iter().chain(&lib.headers) {
            check_file(&owner, file)?;
        }
    }

    let mut executables = HashSet::new();
    for exe in &config.executables {
        check_name("executable name", &exe.name)?;
        if !executables.insert(exe.name.as_str()) {
            return Err(ConfigError::DuplicateExecutable(exe.name.clone()));
        }
        if exe.sources.is_empty() {
            return Err(ConfigError::NoSources(exe.name.clone()));
        }
        let owner = format!("executable '{}'", exe.name);
        for file in &exe.sources {
            check_file(&owner, file)?;
        }
        if let Some(dep) = exe
            .dependencies
            .iter()
            .find(|dep| !libraries.contains(dep.as_str()))
        {
            return Err(ConfigError::UnknownDependency {
                executable: exe.name.clone(),
                dependency: dep.clone(),
            });
        }
    }

    check_targets(config)?;

    Ok(())
}

/// Target names CMake claims for itself (policy CMP0037).
const RESERVED_TARGETS: &[&str] = &["all", "clean", "help", "install"];

// Libraries, executables and generated test targets share one CMake namespace.
fn check_targets(config: &ProjectConfig) -> Result<(), ConfigError> {
    let mut targets: Vec<String> = config
        .libraries
        .iter()
        .map(|lib| lib.name.clone())
        .chain(config.executables.iter().map(|exe| exe.name.clone()))
        .collect();

    match config.tests() {
        Some(TestFramework::Simple) => {
            targets.extend(config.libraries.iter().map(scaffold::runner_target));
        }
        Some(TestFramework::Gtest) => {
            targets.extend(
                ["run_tests", "gtest", "gtest_main", "gmock", "gmock_main"]
                    .iter()
                    .map(|t| t.to_string()),
            );
        }
        None => {}
    }

    for target in &targets {
        let reserved = RESERVED_TARGETS.contains(&target.as_str())
            || (config.enable_tests && target == "test");
        if reserved {
            return Err(ConfigError::ReservedTarget(target.clone()));
        }
    }

    let mut seen = HashSet::new();
    for target in targets {
        if !seen.insert(target.clone()) {
            return Err(ConfigError::TargetCollision(target));
        }
    }
    Ok(())
}

fn check_name(field: &str, value: &str) -> Result<(), ConfigError> {
    let valid = !value.is_empty()
        && value != "."
        && value != ".."
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidName {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

fn check_standard(field: &'static str, value: Option<&str>) -> Result<(), ConfigError> {
    match value {
        Some(v) if v.is_empty() || !v.chars().all(|c| c.is_ascii_alphanumeric()) => {
            Err(ConfigError::InvalidStandard {
                field,
                value: v.to_string(),
            })
        }
        _ => Ok(()),
    }
}

// Files land under the project tree; anything absolute or climbing out is refused.
fn check_file(owner: &str, file: &str) -> Result<(), ConfigError> {
    let path = Path::new(file);
    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if file.trim().is_empty() || escapes || path.file_name().is_none() {
        return Err(ConfigError::InvalidFileName {
            owner: owner.to_string(),
            file: file.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(json: &str) -> ProjectConfig {
        ProjectConfig::from_json_str(json).unwrap()
    }

    #[test]
    fn test_accepts_valid_config() {
        let cfg = config(
            r#"{
                "projectName": "SimpleApp",
                "cStandard": "11",
                "cppStandard": "17",
                "libraries": [{ "name": "mylib", "sources": ["mylib.c"], "headers": ["mylib.h"] }],
                "executables": [{ "name": "app", "sources": ["main.c"], "dependencies": ["mylib"] }]
            }"#,
        );
        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn test_rejects_empty_project_name() {
        let err = validate(&config(r#"{ "projectName": "  " }"#)).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyProjectName));
    }

    #[test]
    fn test_rejects_path_in_project_name() {
        let err = validate(&config(r#"{ "projectName": "a/b" }"#)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidName { .. }));
    }

    #[test]
    fn test_rejects_duplicate_library() {
        let err = validate(&config(
            r#"{ "projectName": "p", "libraries": [{ "name": "core" }, { "name": "core" }] }"#,
        ))
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateLibrary(ref n) if n == "core"));
    }

    #[test]
    fn test_rejects_duplicate_executable() {
        let err = validate(&config(
            r#"{ "projectName": "p", "executables": [{ "name": "app", "sources": ["a.c"] }, { "name": "app", "sources": ["b.c"] }] }"#,
        ))
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateExecutable(ref n) if n == "app"));
    }

    #[test]
    fn test_rejects_unknown_dependency() {
        let err = validate(&config(
            r#"{
                "projectName": "p",
                "libraries": [{ "name": "core" }],
                "executables": [{ "name": "app", "sources": ["main.c"], "dependencies": ["core", "net"] }]
            }"#,
        ))
        .unwrap_err();
        assert!(err.to_string().contains("'net'"));
        assert!(matches!(
            err,
            ConfigError::UnknownDependency { ref executable, ref dependency }
                if executable == "app" && dependency == "net"
        ));
    }

    #[test]
    fn test_rejects_executable_without_sources() {
        let err = validate(&config(r#"{ "projectName": "p", "executables": [{ "name": "app" }] }"#))
            .unwrap_err();
        assert!(matches!(err, ConfigError::NoSources(ref n) if n == "app"));
    }

    #[test]
    fn test_rejects_escaping_file() {
        let err = validate(&config(
            r#"{ "projectName": "p", "libraries": [{ "name": "core", "sources": ["../evil.c"] }] }"#,
        ))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFileName { .. }));
    }

    #[test]
    fn test_rejects_bad_standard() {
        let err = validate(&config(r#"{ "projectName": "p", "cppStandard": "17; evil" }"#))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidStandard {
                field: "cppStandard",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_library_executable_clash() {
        let err = validate(&config(
            r#"{
                "projectName": "p",
                "libraries": [{ "name": "tool" }],
                "executables": [{ "name": "tool", "sources": ["tool.c"] }]
            }"#,
        ))
        .unwrap_err();
        assert!(matches!(err, ConfigError::TargetCollision(ref t) if t == "tool"));
    }

    #[test]
    fn test_rejects_clash_with_test_runner() {
        let json = r#"{
            "projectName": "p",
            "enableTests": true,
            "libraries": [{ "name": "core" }],
            "executables": [{ "name": "test_core", "sources": ["main.c"] }]
        }"#;
        let err = validate(&config(json)).unwrap_err();
        assert!(matches!(err, ConfigError::TargetCollision(ref t) if t == "test_core"));

        // The runner is only generated when tests are on.
        let mut disabled = config(json);
        disabled.enable_tests = false;
        assert!(validate(&disabled).is_ok());
    }

    #[test]
    fn test_rejects_reserved_target_names() {
        for name in ["all", "clean", "help", "install"] {
            let json = format!(
                r#"{{ "projectName": "p", "executables": [{{ "name": "{name}", "sources": ["main.c"] }}] }}"#
            );
            let err = validate(&config(&json)).unwrap_err();
            assert!(matches!(err, ConfigError::ReservedTarget(ref t) if t == name));
        }
    }

    #[test]
    fn test_target_named_test_needs_testing_disabled() {
        let json = r#"{ "projectName": "p", "executables": [{ "name": "test", "sources": ["main.c"] }] }"#;
        assert!(validate(&config(json)).is_ok());

        let mut enabled = config(json);
        enabled.enable_tests = true;
        let err = validate(&enabled).unwrap_err();
        assert!(matches!(err, ConfigError::ReservedTarget(ref t) if t == "test"));
    }

    #[test]
    fn test_rejects_libraries_sharing_c_identifier() {
        let err = validate(&config(
            r#"{ "projectName": "p", "libraries": [{ "name": "my-lib" }, { "name": "my_lib" }] }"#,
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::IdentifierCollision { ref first, ref second, ref ident }
                if first == "my-lib" && second == "my_lib" && ident == "my_lib"
        ));
    }
}
