//! Test scaffolding for generated projects.
//!
//! Two interchangeable flavours share one interface:
//!
//! - [`SimpleScaffold`] - one dependency-free runner per library, registered
//!   with CTest through `add_test`
//! - [`GoogleTestScaffold`] - GoogleTest fetched with `FetchContent`, a single
//!   `run_tests` binary, cases found by `gtest_discover_tests`

use crate::config::{LibrarySpec, TestFramework};
use crate::templates::HelloCall;

/// Produces the `tests/` subtree for one test framework.
pub trait TestScaffold {
    /// Oldest CMake able to configure the fragment.
    fn cmake_minimum(&self) -> &'static str {
        "3.10"
    }

    /// Contents of `tests/CMakeLists.txt`.
    fn cmake_fragment(&self, libraries: &[LibrarySpec]) -> String;

    /// File name of the test source for `lib`, relative to `tests/`.
    fn test_file_name(&self, lib: &LibrarySpec) -> String;

    fn test_source(&self, lib: &LibrarySpec) -> String;
}

pub struct SimpleScaffold;

pub struct GoogleTestScaffold;

pub const GOOGLETEST_URL: &str =
    "https://github.com/google/googletest/archive/refs/tags/v1.14.0.zip";

pub fn scaffold_for(framework: TestFramework) -> &'static dyn TestScaffold {
    match framework {
        TestFramework::Simple => &SimpleScaffold,
        TestFramework::Gtest => &GoogleTestScaffold,
    }
}

/// CTest target name for a library's simple runner.
pub fn runner_target(lib: &LibrarySpec) -> String {
    format!("test_{}", lib.name)
}

impl TestScaffold for SimpleScaffold {
    fn cmake_fragment(&self, libraries: &[LibrarySpec]) -> String {
        let mut out = String::from("# Dependency-free test runners, one per library\n");
        if libraries.is_empty() {
            out.push_str("# No libraries declared yet.\n");
        }
        for lib in libraries {
            let target = runner_target(lib);
            out.push_str(&format!(
                "\nadd_executable({target} {file})\ntarget_link_libraries({target} PRIVATE {lib})\nadd_test(NAME {target} COMMAND {target})\n",
                file = self.test_file_name(lib),
                lib = lib.name,
            ));
        }
        out
    }

    fn test_file_name(&self, lib: &LibrarySpec) -> String {
        format!("test_{}.c", lib.name)
    }

    fn test_source(&self, lib: &LibrarySpec) -> String {
        let call = HelloCall::of(lib);
        let include = call
            .as_ref()
            .map(|c| format!("#include \"{}\"\n", c.header))
            .unwrap_or_default();
        let invoke = call
            .as_ref()
            .map(|c| format!("    {}();\n", c.function))
            .unwrap_or_default();

        format!(
            r#"#include <stdio.h>
{include}
#define CHECK(expr)                                                  \
    do {{                                                              \
        if (!(expr)) {{                                                \
            fprintf(stderr, "%s:%d: check failed: %s\n",             \
                    __FILE__, __LINE__, #expr);                      \
            return 1;                                                \
        }}                                                             \
    }} while (0)

int main(void) {{
{invoke}    CHECK(1 + 1 == 2);
    CHECK(sizeof(int) >= 2);

    printf("All tests passed\n");
    return 0;
}}
"#
        )
    }
}

impl TestScaffold for GoogleTestScaffold {
    fn cmake_minimum(&self) -> &'static str {
        // FetchContent_MakeAvailable
        "3.14"
    }

    fn cmake_fragment(&self, libraries: &[LibrarySpec]) -> String {
        let mut out = format!(
            r#"# GoogleTest, fetched at configure time
include(FetchContent)
if(POLICY CMP0135)
  cmake_policy(SET CMP0135 NEW)
endif()
FetchContent_Declare(
  googletest
  URL {GOOGLETEST_URL}
)
# Keep the parent project's runtime library on Windows
set(gtest_force_shared_crt ON CACHE BOOL "" FORCE)
FetchContent_MakeAvailable(googletest)
"#
        );

        if libraries.is_empty() {
            out.push_str("\n# No libraries declared yet.\n");
            return out;
        }

        let files: Vec<String> = libraries.iter().map(|l| self.test_file_name(l)).collect();
        let libs: Vec<&str> = libraries.iter().map(|l| l.name.as_str()).collect();
        out.push_str(&format!(
            r#"
add_executable(run_tests {files})
target_link_libraries(run_tests PRIVATE GTest::gtest_main {libs})

include(GoogleTest)
gtest_discover_tests(run_tests)
"#,
            files = files.join(" "),
            libs = libs.join(" "),
        ));
        out
    }

    fn test_file_name(&self, lib: &LibrarySpec) -> String {
        format!("test_{}.cpp", lib.name)
    }

    fn test_source(&self, lib: &LibrarySpec) -> String {
        let suite = format!("{}Test", camel_case(&lib.name));
        let call = HelloCall::of(lib);
        let include = call
            .as_ref()
            .map(|c| format!("#include \"{}\"\n", c.header))
            .unwrap_or_default();
        let invoke = call
            .as_ref()
            .map(|c| format!("    {}();\n", c.function))
            .unwrap_or_default();

        format!(
            r#"#include <gtest/gtest.h>
{include}
TEST({suite}, BasicTest) {{
{invoke}    SUCCEED();
}}

TEST({suite}, AlwaysPasses) {{
    EXPECT_TRUE(true);
}}
"#
        )
    }
}

/// `my-lib_core` -> `MyLibCore`.
fn camel_case(name: &str) -> String {
    let camel: String = name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();
    if camel.is_empty() || camel.starts_with(|c: char| c.is_ascii_digit()) {
        format!("Lib{camel}")
    } else {
        camel
    }
}
