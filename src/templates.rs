//! C/C++ file bodies for generated projects.
//!
//! Every stub compiles on its own and does nothing beyond printing a
//! greeting, so a freshly generated tree builds and runs out of the box.
//!
//! ## Stubs
//!
//! - entry point (`main`) for C and C++ executables
//! - library header with include guard and C linkage
//! - library source defining `<lib>_hello`
//! - placeholder for any other listed file

use crate::config::{LibrarySpec, SourceKind};

/// A library function an executable or test can call.
pub struct HelloCall<'a> {
    pub header: &'a str,
    pub function: String,
}

impl<'a> HelloCall<'a> {
    pub fn of(lib: &'a LibrarySpec) -> Option<Self> {
        lib.hello_header().map(|header| Self {
            header,
            function: lib.hello_fn(),
        })
    }
}

/// `main` for an executable. Greets, then calls each dependency's hello.
pub fn entry_point(exe_name: &str, kind: SourceKind, calls: &[HelloCall]) -> String {
    let includes: String = calls
        .iter()
        .map(|c| format!("#include \"{}\"\n", c.header))
        .collect();
    let invocations: String = calls
        .iter()
        .map(|c| format!("    {}();\n", c.function))
        .collect();

    if kind == SourceKind::Cpp {
        format!(
            r#"#include <iostream>
{includes}
int main() {{
    std::cout << "Hello from {exe_name}" << std::endl;
{invocations}    return 0;
}}
"#
        )
    } else {
        format!(
            r#"#include <stdio.h>
{includes}
int main(void) {{
    printf("Hello from {exe_name}\n");
{invocations}    return 0;
}}
"#
        )
    }
}

/// Comment-only body for listed files that carry no code yet.
pub fn placeholder(file: &str, owner: &str) -> String {
    match SourceKind::of(file) {
        SourceKind::C | SourceKind::Cpp | SourceKind::Header => {
            format!("/* {file}: part of {owner} */\n")
        }
        _ => String::new(),
    }
}

/// Header declaring `<lib>_hello`. C linkage keeps it callable from C++ tests.
pub fn hello_header(file: &str, function: &str) -> String {
    let guard = include_guard(file);
    format!(
        r#"#ifndef {guard}
#define {guard}

#ifdef __cplusplus
extern "C" {{
#endif

void {function}(void);

#ifdef __cplusplus
}}
#endif

#endif /* {guard} */
"#
    )
}

/// Additional library headers: guard only.
pub fn plain_header(file: &str, lib_name: &str) -> String {
    let guard = include_guard(file);
    format!(
        r#"#ifndef {guard}
#define {guard}

/* Declarations for {lib_name}. */

#endif /* {guard} */
"#
    )
}

/// Library source defining `<lib>_hello`.
pub fn hello_source(file: &str, call: &HelloCall, lib_name: &str) -> String {
    let stdio = if SourceKind::of(file) == SourceKind::Cpp {
        "<cstdio>"
    } else {
        "<stdio.h>"
    };
    format!(
        r#"#include "{header}"
#include {stdio}

void {function}(void) {{
    printf("Hello from {lib_name}\n");
}}
"#,
        header = call.header,
        function = call.function,
    )
}

/// `include/net/socket.h` style paths become `NET_SOCKET_H`.
pub fn include_guard(file: &str) -> String {
    let mut guard: String = file
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    if guard.starts_with(|c: char| c.is_ascii_digit()) {
        guard.insert(0, '_');
    }
    guard
}
