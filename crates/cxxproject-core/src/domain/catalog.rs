//! Template catalog: the text of every generated file.
//!
//! Each template is a static string with `{{VARIABLE}}` placeholders rendered
//! through a [`RenderContext`]. The functions here are pure; the only
//! randomness (the include-guard token) is passed in by the caller.
//!
//! ```text
//! <root>/
//! ├── CMakeLists.txt               top_level_descriptor()
//! ├── Makefile                     wrapper_script()
//! ├── .gitignore                   ignore_list()
//! ├── default_build_profile.conf   DEFAULT_PROFILE_TEMPLATE
//! ├── library.cmake                aggregator_descriptor()   (libraries)
//! ├── version/
//! │   ├── CMakeLists.txt           version_descriptor()
//! │   ├── generate_version.cmake   version_script()
//! │   └── version.h.in             version_header_template()
//! └── src/<name>/
//!     ├── CMakeLists.txt           executable_/library_/test_descriptor()
//!     ├── <name>.h                 header_stub()
//!     └── <name>.cpp               source_stub() / test_stub()
//! ```

use std::path::{Component, Path};

use crate::domain::{
    ProjectContext, ProjectKind, ProjectLayout, ProjectName, RenderContext,
    value_objects::IncludeGuardToken,
};

// ── File names ───────────────────────────────────────────────────────────────

pub const DESCRIPTOR: &str = "CMakeLists.txt";
pub const WRAPPER: &str = "Makefile";
pub const IGNORE_LIST: &str = ".gitignore";
pub const DEFAULT_PROFILE: &str = "default_build_profile.conf";
pub const PROFILE_CACHE: &str = "current_profile.mk";
pub const AGGREGATOR: &str = "library.cmake";
pub const VERSION_SCRIPT: &str = "generate_version.cmake";
pub const VERSION_TEMPLATE: &str = "version.h.in";
pub const COMPILE_TEST: &str = "compile_test.cpp";

/// Name of the CMake target that derives the version header.
pub const VERSION_TARGET: &str = "version";

/// Directive whose first occurrence marks the insertion point in the
/// top-level descriptor.
pub const REGISTRATION_MARKER: &str = "add_subdirectory(";

/// Directive that turns on the external test runner.
pub const TESTING_DIRECTIVE: &str = "enable_testing()";

// ── Top-level descriptor ─────────────────────────────────────────────────────

const DESCRIPTOR_HEADER_TEMPLATE: &str = concat!(
    "cmake_minimum_required(VERSION {{CMAKE_MINIMUM_VERSION}})\n",
    "project ({{PROJECT_NAME}})\n",
    "set (CMAKE_CXX_STANDARD {{CXX_STANDARD}})\n",
    "set (CMAKE_CXX_STANDARD_REQUIRED ON)\n",
    "if (MSVC)\n",
    "\tadd_compile_options(/W4 /EHsc)\n",
    "\tset(STANDARD_LIBRARIES \"\")\n",
    "else()\n",
    "\tadd_compile_options(-Wall -Wno-noexcept-type)\n",
    "\tset(STANDARD_LIBRARIES pthread)\n",
    "endif()\n",
    "execute_process(COMMAND git submodule update --init WORKING_DIRECTORY ${CMAKE_CURRENT_SOURCE_DIR})\n",
    "set(CMAKE_RUNTIME_OUTPUT_DIRECTORY ${CMAKE_BINARY_DIR}/bin/)\n",
    "set(CMAKE_LIBRARY_OUTPUT_DIRECTORY ${CMAKE_BINARY_DIR}/lib/)\n",
    "set(CMAKE_ARCHIVE_OUTPUT_DIRECTORY ${CMAKE_BINARY_DIR}/lib/)\n",
    "if(CMAKE_INSTALL_PREFIX_INITIALIZED_TO_DEFAULT)\n",
    "\tset(CMAKE_INSTALL_PREFIX \"{{INSTALL_PREFIX}}\" CACHE PATH \"Default path to install\" FORCE)\n",
    "endif()\n",
    "include_directories(AFTER ${CMAKE_CURRENT_SOURCE_DIR}/{{SOURCE_DIR}} ${CMAKE_BINARY_DIR}/{{VERSION_DIR}})\n",
);

/// Complete top-level descriptor for a new project of `kind`.
///
/// Layout: settings header, optional `enable_testing()`, the version hook,
/// then the project's own registrations.
pub fn top_level_descriptor(name: &ProjectName, kind: ProjectKind, ctx: &ProjectContext) -> String {
    let mut out = context_for(name, ctx).render(DESCRIPTOR_HEADER_TEMPLATE);
    if kind.owns_tests() {
        out.push_str(TESTING_DIRECTIVE);
        out.push('\n');
    }
    out.push_str(&subdirectory_registration(&ctx.layout.version_dir));

    if kind.is_library() {
        out.push_str(&aggregator_include(AGGREGATOR));
        out.push_str(&subdirectory_registration(
            &ctx.layout.subproject_ref(&ctx.layout.tests_dir),
        ));
    } else {
        out.push_str(&subdirectory_registration(
            &ctx.layout.subproject_ref(name.as_str()),
        ));
    }
    out
}

/// `add_subdirectory("<dir>")` line.
pub fn subdirectory_registration(dir: &str) -> String {
    if dir.contains(['/', '.']) {
        format!("add_subdirectory(\"{dir}\")\n")
    } else {
        format!("add_subdirectory({dir})\n")
    }
}

/// `include(<file>)` line.
pub fn aggregator_include(file: &str) -> String {
    format!("include({file})\n")
}

// ── Wrapper script ───────────────────────────────────────────────────────────

const WRAPPER_TEMPLATE: &str = concat!(
    "ifdef BUILD_PROFILE\n",
    "  FORCE_BUILD_PROFILE=__NOT_EXIST__\n",
    "else\n",
    "  FORCE_BUILD_PROFILE=current_profile.mk\n",
    "  -include current_profile.mk\n",
    "endif\n",
    "\n",
    "ifndef BUILD_PROFILE\n",
    "  BUILD_PROFILE=default_build_profile.conf\n",
    "endif\n",
    "\n",
    ".PHONY: all all_debug all_release clean clean_debug clean_release install test distclean\n",
    "\n",
    "all: all_debug all_release\n",
    "\n",
    "all_debug: {{BUILD_DIR}}/debug/Makefile\n",
    "\t@$(MAKE) --no-print-directory -C {{BUILD_DIR}}/debug all\n",
    "\n",
    "all_release: {{BUILD_DIR}}/release/Makefile\n",
    "\t@$(MAKE) --no-print-directory -C {{BUILD_DIR}}/release all\n",
    "\n",
    "clean: clean_debug clean_release\n",
    "\n",
    "clean_debug:\n",
    "\t@if [ -f {{BUILD_DIR}}/debug/Makefile ]; then $(MAKE) --no-print-directory -C {{BUILD_DIR}}/debug clean; fi\n",
    "\n",
    "clean_release:\n",
    "\t@if [ -f {{BUILD_DIR}}/release/Makefile ]; then $(MAKE) --no-print-directory -C {{BUILD_DIR}}/release clean; fi\n",
    "\n",
    "install: all_release\n",
    "\t@$(MAKE) --no-print-directory -C {{BUILD_DIR}}/release install\n",
    "\n",
    "test: all_debug\n",
    "\t@$(MAKE) --no-print-directory -C {{BUILD_DIR}}/debug test\n",
    "\n",
    "$(FORCE_BUILD_PROFILE):\n",
    "\t@echo \"Build profile: $(BUILD_PROFILE)\"\n",
    "\t$(file >current_profile.mk,BUILD_PROFILE=$(BUILD_PROFILE))\n",
    "\n",
    "{{BUILD_DIR}}/debug/Makefile: $(BUILD_PROFILE) $(FORCE_BUILD_PROFILE) | {{BUILD_DIR}}/debug/conf {{BUILD_DIR}}/debug/log {{BUILD_DIR}}/debug/data\n",
    "\tcmake -G \"Unix Makefiles\" -S . -B {{BUILD_DIR}}/debug -DCMAKE_BUILD_TYPE=Debug `grep -E -v \"^[[:blank:]]*#\" $(BUILD_PROFILE)`\n",
    "\n",
    "{{BUILD_DIR}}/release/Makefile: $(BUILD_PROFILE) $(FORCE_BUILD_PROFILE) | {{BUILD_DIR}}/release/conf {{BUILD_DIR}}/release/log {{BUILD_DIR}}/release/data\n",
    "\tcmake -G \"Unix Makefiles\" -S . -B {{BUILD_DIR}}/release -DCMAKE_BUILD_TYPE=Release `grep -E -v \"^[[:blank:]]*#\" $(BUILD_PROFILE)`\n",
    "\n",
    "{{BUILD_DIR}}/debug/conf: | {{BUILD_DIR}}/debug conf\n",
    "\tcd {{BUILD_DIR}}/debug && ln -sfn {{PROJECT_ROOT}}/conf conf\n",
    "\n",
    "{{BUILD_DIR}}/release/conf: | {{BUILD_DIR}}/release conf\n",
    "\tcd {{BUILD_DIR}}/release && ln -sfn {{PROJECT_ROOT}}/conf conf\n",
    "\n",
    "{{BUILD_DIR}}/debug/data: | {{BUILD_DIR}}/debug data\n",
    "\tcd {{BUILD_DIR}}/debug && ln -sfn {{PROJECT_ROOT}}/data data\n",
    "\n",
    "{{BUILD_DIR}}/release/data: | {{BUILD_DIR}}/release data\n",
    "\tcd {{BUILD_DIR}}/release && ln -sfn {{PROJECT_ROOT}}/data data\n",
    "\n",
    "{{BUILD_DIR}}/debug/log: | {{BUILD_DIR}}/debug\n",
    "\t@mkdir -p {{BUILD_DIR}}/debug/log\n",
    "\n",
    "{{BUILD_DIR}}/release/log: | {{BUILD_DIR}}/release\n",
    "\t@mkdir -p {{BUILD_DIR}}/release/log\n",
    "\n",
    "{{BUILD_DIR}}/debug:\n",
    "\t@mkdir -p {{BUILD_DIR}}/debug\n",
    "\n",
    "{{BUILD_DIR}}/release:\n",
    "\t@mkdir -p {{BUILD_DIR}}/release\n",
    "\n",
    "conf:\n",
    "\t@mkdir -p conf\n",
    "\n",
    "data:\n",
    "\t@mkdir -p data\n",
    "\n",
    "distclean:\n",
    "\trm -rfv {{BUILD_DIR}}\n",
);

/// Wrapper for `layout`. The `conf` and `data` links inside each build
/// variant are relative, so they survive moving the project.
pub fn wrapper_script(layout: &ProjectLayout) -> String {
    WRAPPER_TEMPLATE
        .replace("{{BUILD_DIR}}", &layout.build_dir)
        .replace("{{PROJECT_ROOT}}", &variant_to_root(&layout.build_dir))
}

/// Relative path from `<build_dir>/<variant>` back to the project root.
fn variant_to_root(build_dir: &str) -> String {
    let depth = Path::new(build_dir)
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count();
    vec![".."; depth + 1].join("/")
}

// ── Profile and ignore list ──────────────────────────────────────────────────

/// Every non-comment line is passed to cmake verbatim, so options must be
/// `-D` definitions.
pub const DEFAULT_PROFILE_TEMPLATE: &str = concat!(
    "## type arguments for cmake here, each must start with -D\n",
    "## -DVariable=Value\n",
    "##\n",
    "## Example: use compile 'clang++'\n",
    "# -DCMAKE_CXX_COMPILER=clang++\n",
    "\n",
);

pub fn ignore_list(layout: &ProjectLayout) -> String {
    format!("/{}\n/{}\n", layout.build_dir, PROFILE_CACHE)
}

// ── Version injection ────────────────────────────────────────────────────────

const VERSION_DESCRIPTOR_TEMPLATE: &str = concat!(
    "cmake_minimum_required(VERSION {{CMAKE_MINIMUM_VERSION}})\n",
    "\n",
    "add_custom_target({{VERSION_TARGET}}\n",
    "\tCOMMAND ${CMAKE_COMMAND}\n",
    "\t\t-DSOURCE_DIR=${PROJECT_SOURCE_DIR}\n",
    "\t\t-DINPUT=${CMAKE_CURRENT_SOURCE_DIR}/version.h.in\n",
    "\t\t-DOUTPUT=${CMAKE_CURRENT_BINARY_DIR}/{{PROJECT_NAME}}_version.h\n",
    "\t\t-P ${CMAKE_CURRENT_SOURCE_DIR}/generate_version.cmake\n",
    "\tBYPRODUCTS ${CMAKE_CURRENT_BINARY_DIR}/{{PROJECT_NAME}}_version.h\n",
    "\tCOMMENT \"Deriving {{PROJECT_NAME}} version\"\n",
    "\tVERBATIM\n",
    ")\n",
);

const VERSION_SCRIPT_TEMPLATE: &str = concat!(
    "# Runs at build time: cmake -DSOURCE_DIR=... -DINPUT=... -DOUTPUT=... -P generate_version.cmake\n",
    "set(VERSION \"unknown\")\n",
    "find_package(Git QUIET)\n",
    "if (GIT_FOUND)\n",
    "\texecute_process(\n",
    "\t\tCOMMAND ${GIT_EXECUTABLE} describe --tags --dirty\n",
    "\t\tWORKING_DIRECTORY ${SOURCE_DIR}\n",
    "\t\tRESULT_VARIABLE DESCRIBE_RESULT\n",
    "\t\tOUTPUT_VARIABLE DESCRIBE_OUTPUT\n",
    "\t\tOUTPUT_STRIP_TRAILING_WHITESPACE\n",
    "\t\tERROR_QUIET\n",
    "\t)\n",
    "\tif (DESCRIBE_RESULT EQUAL 0 AND NOT \"${DESCRIBE_OUTPUT}\" STREQUAL \"\")\n",
    "\t\tset(VERSION \"${DESCRIBE_OUTPUT}\")\n",
    "\tendif()\n",
    "endif()\n",
    "set(PROJECT_{{PROJECT_NAME_UPPER}}_VERSION \"${VERSION}\")\n",
    "configure_file(${INPUT} ${OUTPUT}.tmp @ONLY)\n",
    "execute_process(COMMAND ${CMAKE_COMMAND} -E copy_if_different ${OUTPUT}.tmp ${OUTPUT})\n",
    "file(REMOVE ${OUTPUT}.tmp)\n",
);

const VERSION_HEADER_TEMPLATE: &str = concat!(
    "#pragma once\n",
    "\n",
    "#define PROJECT_{{PROJECT_NAME_UPPER}}_VERSION \"@PROJECT_{{PROJECT_NAME_UPPER}}_VERSION@\"\n",
);

pub fn version_descriptor(name: &ProjectName, ctx: &ProjectContext) -> String {
    context_for(name, ctx).render(VERSION_DESCRIPTOR_TEMPLATE)
}

/// Script that shells out to `git describe` and falls back to `unknown`.
pub fn version_script(name: &ProjectName) -> String {
    RenderContext::new(name).render(VERSION_SCRIPT_TEMPLATE)
}

pub fn version_header_template(name: &ProjectName) -> String {
    RenderContext::new(name).render(VERSION_HEADER_TEMPLATE)
}

/// Macro the version header defines, e.g. `PROJECT_MYAPP_VERSION`.
pub fn version_macro(name: &ProjectName) -> String {
    format!("PROJECT_{}_VERSION", name.macro_token())
}

// ── Sub-project descriptors ──────────────────────────────────────────────────

const EXECUTABLE_DESCRIPTOR_TEMPLATE: &str = concat!(
    "cmake_minimum_required(VERSION {{CMAKE_MINIMUM_VERSION}})\n",
    "\n",
    "add_executable({{PROJECT_NAME}}\n",
    "\t{{PROJECT_NAME}}.cpp\n",
    ")\n",
    "\n",
    "target_link_libraries({{PROJECT_NAME}}\n",
    "\t${STANDARD_LIBRARIES}\n",
    ")\n",
    "\n",
    "install(TARGETS {{PROJECT_NAME}} RUNTIME DESTINATION bin)\n",
);

const VERSION_DEPENDENCY_TEMPLATE: &str =
    "\nadd_dependencies({{PROJECT_NAME}} {{VERSION_TARGET}})\n";

const LIBRARY_DESCRIPTOR_TEMPLATE: &str = concat!(
    "cmake_minimum_required(VERSION {{CMAKE_MINIMUM_VERSION}})\n",
    "\n",
    "add_library({{PROJECT_NAME}}\n",
    "\t{{PROJECT_NAME}}.cpp\n",
    ")\n",
    "\n",
    "target_link_libraries({{PROJECT_NAME}}\n",
    "\t${STANDARD_LIBRARIES}\n",
    ")\n",
);

const TEST_DESCRIPTOR_TEMPLATE: &str = concat!(
    "cmake_minimum_required(VERSION {{CMAKE_MINIMUM_VERSION}})\n",
    "\n",
    "set(TESTS\n",
    "\t{{TEST_FILES}}\n",
    ")\n",
    "\n",
    "foreach(testFile ${TESTS})\n",
    "\tget_filename_component(testName ${testFile} NAME_WE)\n",
    "\tset(testTarget {{PROJECT_NAMESPACE}}_${testName})\n",
    "\tadd_executable(${testTarget} ${testFile})\n",
    "\ttarget_link_libraries(${testTarget} {{TEST_LIBRARIES}})\n",
    "\tadd_test(NAME {{TEST_DIR_REF}}/${testName} COMMAND ${testTarget})\n",
    "endforeach()\n",
);

pub fn executable_descriptor(name: &ProjectName, ctx: &ProjectContext, version_aware: bool) -> String {
    let render = context_for(name, ctx);
    let mut out = render.render(EXECUTABLE_DESCRIPTOR_TEMPLATE);
    if version_aware {
        out.push_str(&render.render(VERSION_DEPENDENCY_TEMPLATE));
    }
    out
}

pub fn library_descriptor(name: &ProjectName, ctx: &ProjectContext) -> String {
    context_for(name, ctx).render(LIBRARY_DESCRIPTOR_TEMPLATE)
}

/// Test directory descriptor.
///
/// Every file in the test list becomes its own executable, linked against
/// `library` when there is one, and registered under
/// `<source root>/<dir>/<stem>`.
pub fn test_descriptor(dir: &ProjectName, library: Option<&ProjectName>, ctx: &ProjectContext) -> String {
    let libraries = match library {
        Some(lib) => format!("{} ${{STANDARD_LIBRARIES}}", lib.as_str()),
        None => "${STANDARD_LIBRARIES}".to_string(),
    };
    context_for(dir, ctx)
        .with_variable("TEST_FILES", COMPILE_TEST)
        .with_variable("TEST_LIBRARIES", libraries)
        .with_variable("TEST_DIR_REF", ctx.layout.subproject_ref(dir.as_str()))
        .render(TEST_DESCRIPTOR_TEMPLATE)
}

const AGGREGATOR_TEMPLATE: &str = concat!(
    "include_directories(AFTER ${CMAKE_CURRENT_LIST_DIR}/{{SOURCE_DIR}})\n",
    "add_subdirectory (${CMAKE_CURRENT_LIST_DIR}/{{SOURCE_DIR}}/{{PROJECT_NAME}} EXCLUDE_FROM_ALL)\n",
);

/// `library.cmake`: lets consumers pull the library in on demand.
pub fn aggregator_descriptor(name: &ProjectName, ctx: &ProjectContext) -> String {
    context_for(name, ctx).render(AGGREGATOR_TEMPLATE)
}

// ── Stubs ────────────────────────────────────────────────────────────────────

const HEADER_STUB_TEMPLATE: &str = concat!(
    "#pragma once\n",
    "#ifndef {{GUARD}}\n",
    "#define {{GUARD}}\n",
    "\n",
    "{{SCOPE}}",
    "#endif /* {{GUARD}} */\n",
);

const NAMESPACE_SCOPE_TEMPLATE: &str = "namespace {{PROJECT_NAMESPACE}} {\n\n}\n\n";

const LIBRARY_SOURCE_TEMPLATE: &str = concat!(
    "#include \"{{PROJECT_NAME}}.h\"\n",
    "\n",
    "namespace {{PROJECT_NAMESPACE}} {\n",
    "\n",
    "}\n",
);

const EXECUTABLE_SOURCE_TEMPLATE: &str = concat!(
    "#include \"{{PROJECT_NAME}}.h\"\n",
    "\n",
    "int main(int argc, char **argv) {\n",
    "    return 0;\n",
    "}\n",
);

const VERSIONED_SOURCE_TEMPLATE: &str = concat!(
    "#include \"{{PROJECT_NAME}}.h\"\n",
    "#include \"{{PROJECT_NAME}}_version.h\"\n",
    "\n",
    "#include <iostream>\n",
    "\n",
    "int main(int argc, char **argv) {\n",
    "    std::cout << PROJECT_{{PROJECT_NAME_UPPER}}_VERSION << std::endl;\n",
    "    return 0;\n",
    "}\n",
);

const QUALIFIED_TEST_TEMPLATE: &str = concat!(
    "#include <{{PROJECT_NAME}}/{{PROJECT_NAME}}.h>\n",
    "\n",
    "using namespace {{PROJECT_NAMESPACE}};\n",
    "\n",
    "int main(int argc, char **argv) {\n",
    "    return 0;\n",
    "}\n",
);

const UNQUALIFIED_TEST_TEMPLATE: &str = concat!(
    "int main(int argc, char **argv) {\n",
    "    return 0;\n",
    "}\n",
);

/// Guard macro for `<source root>/<name>/<name>.h`, suffixed with `token`.
pub fn guard_macro(name: &ProjectName, layout: &ProjectLayout, token: &IncludeGuardToken) -> String {
    let path = format!("{}/{}_H", layout.subproject_ref(name.as_str()), name.as_str());
    let stem: String = path
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{stem}_{token}")
}

pub fn header_stub(
    name: &ProjectName,
    layout: &ProjectLayout,
    token: &IncludeGuardToken,
    with_namespace: bool,
) -> String {
    let render = RenderContext::new(name);
    let scope = if with_namespace {
        render.render(NAMESPACE_SCOPE_TEMPLATE)
    } else {
        String::new()
    };
    render
        .with_variable("GUARD", guard_macro(name, layout, token))
        .with_variable("SCOPE", scope)
        .render(HEADER_STUB_TEMPLATE)
}

pub fn source_stub(name: &ProjectName, kind: ProjectKind) -> String {
    let template = if kind.has_version_header() {
        VERSIONED_SOURCE_TEMPLATE
    } else if kind.is_runnable() {
        EXECUTABLE_SOURCE_TEMPLATE
    } else {
        LIBRARY_SOURCE_TEMPLATE
    };
    RenderContext::new(name).render(template)
}

/// Compile smoke test; qualified with the owning library when there is one.
pub fn test_stub(library: Option<&ProjectName>) -> String {
    match library {
        Some(lib) => RenderContext::new(lib).render(QUALIFIED_TEST_TEMPLATE),
        None => UNQUALIFIED_TEST_TEMPLATE.to_string(),
    }
}

// ── helpers ──────────────────────────────────────────────────────────────────

fn context_for(name: &ProjectName, ctx: &ProjectContext) -> RenderContext {
    RenderContext::new(name)
        .with_variable("CMAKE_MINIMUM_VERSION", ctx.build.cmake_minimum_version.as_str())
        .with_variable("CXX_STANDARD", ctx.build.cxx_standard.as_str())
        .with_variable("INSTALL_PREFIX", ctx.build.install_prefix.as_str())
        .with_variable("SOURCE_DIR", ctx.layout.source_dir.as_str())
        .with_variable("VERSION_DIR", ctx.layout.version_dir.as_str())
        .with_variable("VERSION_TARGET", VERSION_TARGET)
}
