//! `CMakeLists.txt` generation.

use crate::config::{LibrarySpec, ProjectConfig};
use crate::scaffold;

const BASE_CMAKE_MINIMUM: &str = "3.10";

/// Top-level `CMakeLists.txt`: project, standards, build type, warnings,
/// library subdirectories, executables and (optionally) the test tree.
pub fn build_root_cmake(config: &ProjectConfig) -> String {
    let minimum = config
        .tests()
        .map(|fw| scaffold::scaffold_for(fw).cmake_minimum())
        .unwrap_or(BASE_CMAKE_MINIMUM);

    let mut out = format!(
        "cmake_minimum_required(VERSION {minimum})\n\nproject({} C CXX)\n",
        config.project_name
    );

    let mut standards = String::new();
    if let Some(std) = &config.c_standard {
        standards.push_str(&format!(
            "set(CMAKE_C_STANDARD {std})\nset(CMAKE_C_STANDARD_REQUIRED ON)\n"
        ));
    }
    if let Some(std) = &config.cpp_standard {
        standards.push_str(&format!(
            "set(CMAKE_CXX_STANDARD {std})\nset(CMAKE_CXX_STANDARD_REQUIRED ON)\n"
        ));
    }
    if !standards.is_empty() {
        out.push('\n');
        out.push_str(&standards);
    }

    out.push_str(
        r#"
# Default to a Release build when none was requested
if(NOT CMAKE_BUILD_TYPE AND NOT CMAKE_CONFIGURATION_TYPES)
  message(STATUS "Setting build type to 'Release' as none was specified.")
  set(CMAKE_BUILD_TYPE Release CACHE STRING "Choose the type of build, options are: Debug Release RelWithDebInfo MinSizeRel." FORCE)
endif()

# Compiler flags
if(NOT MSVC)
  add_compile_options(-Wall -Wextra)
  set(CMAKE_C_FLAGS_DEBUG "-g")
  set(CMAKE_C_FLAGS_RELEASE "-O3")
  set(CMAKE_CXX_FLAGS_DEBUG "-g")
  set(CMAKE_CXX_FLAGS_RELEASE "-O3")
endif()
"#,
    );

    if !config.libraries.is_empty() {
        out.push_str("\n# Libraries\n");
        for lib in &config.libraries {
            out.push_str(&format!("add_subdirectory(lib/{})\n", lib.name));
        }
    }

    if !config.executables.is_empty() {
        out.push_str("\n# Executables\n");
    }
    for exe in &config.executables {
        out.push_str(&format!(
            "add_executable({} {})\n",
            exe.name,
            exe.sources.join(" ")
        ));
        if !exe.dependencies.is_empty() {
            out.push_str(&format!(
                "target_link_libraries({} PRIVATE {})\n",
                exe.name,
                exe.dependencies.join(" ")
            ));
        }
        out.push_str(&format!(
            "set_target_properties({} PROPERTIES\n    RUNTIME_OUTPUT_DIRECTORY ${{CMAKE_BINARY_DIR}}/bin\n)\n",
            exe.name
        ));
    }

    if config.enable_tests {
        out.push_str("\n# Testing\nenable_testing()\nadd_subdirectory(tests)\n");
    }

    out
}

/// `lib/<name>/CMakeLists.txt`. Header-only libraries become INTERFACE targets.
pub fn build_library_cmake(lib: &LibrarySpec) -> String {
    if lib.sources.is_empty() {
        format!(
            "add_library({name} INTERFACE)\n\ntarget_include_directories({name} INTERFACE include)\n",
            name = lib.name
        )
    } else {
        format!(
            "add_library({name} STATIC {sources})\n\ntarget_include_directories({name} PUBLIC include)\n",
            name = lib.name,
            sources = lib.sources.join(" ")
        )
    }
}
