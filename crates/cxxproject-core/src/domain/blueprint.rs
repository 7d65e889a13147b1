//! Decision table: which files a [`ProjectKind`] produces.
//!
//! A blueprint is a pure function from (name, kind, context, guard token) to a
//! [`GeneratedFileSet`]. Infrastructure and build descriptors are marked
//! [`WritePolicy::Overwrite`]; hand-editable stubs are
//! [`WritePolicy::CreateIfAbsent`].

use std::path::{Path, PathBuf};

use crate::domain::{
    DomainError, GeneratedFileSet, ProjectContext, ProjectKind, ProjectName, WritePolicy,
    catalog,
    value_objects::IncludeGuardToken,
};

/// Full file set for one assembler invocation.
///
/// External dependencies produce an empty set: their content is fetched, not
/// generated.
pub fn blueprint(
    name: &ProjectName,
    kind: ProjectKind,
    ctx: &ProjectContext,
    token: &IncludeGuardToken,
) -> Result<GeneratedFileSet, DomainError> {
    let mut set = GeneratedFileSet::new();

    if kind.is_root() {
        set.extend(root_files(name, kind, ctx));
    }

    match kind {
        ProjectKind::Executable
        | ProjectKind::Library
        | ProjectKind::EmptyLibrary
        | ProjectKind::EmptyExecutable => set.extend(subproject_files(name, kind, ctx, token)),
        ProjectKind::TestDirectory => set.extend(test_directory_files(name, None, ctx)),
        ProjectKind::ExternalDependency => {}
    }

    if kind.owns_tests() {
        let tests = ProjectName::parse(ctx.layout.tests_dir.as_str())?;
        set.extend(test_directory_files(&tests, Some(name), ctx));
        set.add_file(
            catalog::AGGREGATOR,
            catalog::aggregator_descriptor(name, ctx),
            WritePolicy::Overwrite,
        );
    }

    set.validate()?;
    Ok(set)
}

/// Files at the project root plus the version-injection set.
fn root_files(name: &ProjectName, kind: ProjectKind, ctx: &ProjectContext) -> GeneratedFileSet {
    let version = ctx.layout.version_path();

    GeneratedFileSet::new()
        .with_file(
            catalog::DESCRIPTOR,
            catalog::top_level_descriptor(name, kind, ctx),
            WritePolicy::Overwrite,
        )
        .with_file(
            catalog::WRAPPER,
            catalog::wrapper_script(&ctx.layout),
            WritePolicy::Overwrite,
        )
        .with_file(
            catalog::IGNORE_LIST,
            catalog::ignore_list(&ctx.layout),
            WritePolicy::Overwrite,
        )
        .with_file(
            catalog::DEFAULT_PROFILE,
            catalog::DEFAULT_PROFILE_TEMPLATE.to_string(),
            WritePolicy::Overwrite,
        )
        .with_directory(&version)
        .with_file(
            version.join(catalog::DESCRIPTOR),
            catalog::version_descriptor(name, ctx),
            WritePolicy::Overwrite,
        )
        .with_file(
            version.join(catalog::VERSION_SCRIPT),
            catalog::version_script(name),
            WritePolicy::Overwrite,
        )
        .with_file(
            version.join(catalog::VERSION_TEMPLATE),
            catalog::version_header_template(name),
            WritePolicy::Overwrite,
        )
}

/// Descriptor, header and source stub of an executable or library.
fn subproject_files(
    name: &ProjectName,
    kind: ProjectKind,
    ctx: &ProjectContext,
    token: &IncludeGuardToken,
) -> GeneratedFileSet {
    let dir = ctx.layout.subproject_dir(name);
    let descriptor = if kind.is_runnable() {
        catalog::executable_descriptor(name, ctx, kind.has_version_header())
    } else {
        catalog::library_descriptor(name, ctx)
    };

    GeneratedFileSet::new()
        .with_directory(&dir)
        .with_file(dir.join(catalog::DESCRIPTOR), descriptor, WritePolicy::Overwrite)
        .with_file(
            stub_path(&dir, name, "h"),
            catalog::header_stub(name, &ctx.layout, token, kind.is_library()),
            WritePolicy::CreateIfAbsent,
        )
        .with_file(
            stub_path(&dir, name, "cpp"),
            catalog::source_stub(name, kind),
            WritePolicy::CreateIfAbsent,
        )
}

/// Test descriptor and compile smoke test.
fn test_directory_files(
    dir_name: &ProjectName,
    library: Option<&ProjectName>,
    ctx: &ProjectContext,
) -> GeneratedFileSet {
    let dir = ctx.layout.subproject_dir(dir_name);

    GeneratedFileSet::new()
        .with_directory(&dir)
        .with_file(
            dir.join(catalog::DESCRIPTOR),
            catalog::test_descriptor(dir_name, library, ctx),
            WritePolicy::Overwrite,
        )
        .with_file(
            dir.join(catalog::COMPILE_TEST),
            catalog::test_stub(library),
            WritePolicy::CreateIfAbsent,
        )
}

fn stub_path(dir: &Path, name: &ProjectName, extension: &str) -> PathBuf {
    dir.join(format!("{}.{extension}", name.as_str()))
}

/// Root-level paths staged in version control after a create.
pub fn root_staging_paths(kind: ProjectKind, ctx: &ProjectContext) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = [
        catalog::DESCRIPTOR,
        catalog::WRAPPER,
        catalog::IGNORE_LIST,
        catalog::DEFAULT_PROFILE,
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect();
    paths.push(ctx.layout.version_path());
    if kind.owns_tests() {
        paths.push(PathBuf::from(catalog::AGGREGATOR));
        paths.push(ctx.layout.tests_path());
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> IncludeGuardToken {
        IncludeGuardToken::new("TOKEN")
    }

    fn paths(set: &GeneratedFileSet) -> Vec<String> {
        set.files().map(|f| f.path.display().to_string()).collect()
    }

    #[test]
    fn executable_blueprint_matches_table() {
        let name = ProjectName::parse("app").unwrap();
        let set = blueprint(&name, ProjectKind::Executable, &ProjectContext::new("."), &token())
            .unwrap();
        let files = paths(&set);
        for expected in [
            "CMakeLists.txt",
            "Makefile",
            ".gitignore",
            "default_build_profile.conf",
            "version/CMakeLists.txt",
            "version/generate_version.cmake",
            "version/version.h.in",
            "src/app/CMakeLists.txt",
            "src/app/app.h",
            "src/app/app.cpp",
        ] {
            assert!(files.contains(&expected.to_string()), "missing {expected}");
        }
        assert_eq!(files.len(), 10);
        assert!(set.file("library.cmake").is_none());
        assert!(
            set.file("src/app/CMakeLists.txt")
                .unwrap()
                .content
                .contains("add_dependencies(app version)")
        );
    }

    #[test]
    fn library_blueprint_adds_tests_and_aggregator() {
        let name = ProjectName::parse("mylib").unwrap();
        let set = blueprint(&name, ProjectKind::Library, &ProjectContext::new("."), &token())
            .unwrap();
        let test = set.file("src/tests/compile_test.cpp").unwrap();
        assert!(test.content.contains("#include <mylib/mylib.h>"));
        assert_eq!(test.policy, WritePolicy::CreateIfAbsent);
        assert!(set.file("library.cmake").is_some());
        assert!(set.file("src/tests/CMakeLists.txt").is_some());
        assert_eq!(paths(&set).len(), 13);
    }

    #[test]
    fn additions_have_no_root_files() {
        let ctx = ProjectContext::new(".");
        let name = ProjectName::parse("extra").unwrap();
        for kind in [ProjectKind::EmptyLibrary, ProjectKind::EmptyExecutable] {
            let set = blueprint(&name, kind, &ctx, &token()).unwrap();
            assert_eq!(paths(&set).len(), 3, "{kind}");
            assert!(set.file("CMakeLists.txt").is_none());
        }
        let exe = blueprint(&name, ProjectKind::EmptyExecutable, &ctx, &token()).unwrap();
        assert!(
            !exe.file("src/extra/CMakeLists.txt")
                .unwrap()
                .content
                .contains("add_dependencies")
        );
    }

    #[test]
    fn test_directory_blueprint_is_unqualified() {
        let name = ProjectName::parse("smoke").unwrap();
        let set = blueprint(&name, ProjectKind::TestDirectory, &ProjectContext::new("."), &token())
            .unwrap();
        assert_eq!(paths(&set).len(), 2);
        let stub = set.file("src/smoke/compile_test.cpp").unwrap();
        assert!(!stub.content.contains("using namespace"));
    }

    #[test]
    fn external_dependency_generates_nothing() {
        let name = ProjectName::parse_path("vendor/json").unwrap();
        let set = blueprint(
            &name,
            ProjectKind::ExternalDependency,
            &ProjectContext::new("."),
            &token(),
        )
        .unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn stubs_are_create_if_absent_and_descriptors_overwrite() {
        let name = ProjectName::parse("mylib").unwrap();
        let set = blueprint(&name, ProjectKind::Library, &ProjectContext::new("."), &token())
            .unwrap();
        for file in set.files() {
            let is_stub = file
                .path
                .extension()
                .is_some_and(|ext| ext == "h" || ext == "cpp");
            let expected = if is_stub {
                WritePolicy::CreateIfAbsent
            } else {
                WritePolicy::Overwrite
            };
            assert_eq!(file.policy, expected, "{}", file.path.display());
        }
    }

    #[test]
    fn staging_paths_follow_kind() {
        let ctx = ProjectContext::new(".");
        let exe = root_staging_paths(ProjectKind::Executable, &ctx);
        assert!(!exe.contains(&PathBuf::from("library.cmake")));
        let lib = root_staging_paths(ProjectKind::Library, &ctx);
        assert!(lib.contains(&PathBuf::from("library.cmake")));
        assert!(lib.contains(&PathBuf::from("src/tests")));
    }
}
