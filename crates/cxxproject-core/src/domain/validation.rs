use crate::domain::{
    catalog::VERSION_TARGET,
    entities::ProjectLayout,
    error::DomainError,
    value_objects::{ProjectKind, ProjectName},
};

/// Centralized name validation.
///
/// Each operation family has its own rule set; all of them run before any
/// file is written or any command is invoked.
pub struct DomainValidator;

impl DomainValidator {
    /// Name of a brand-new project root (`create executable|library`).
    pub fn root_name(
        raw: &str,
        kind: ProjectKind,
        layout: &ProjectLayout,
    ) -> Result<ProjectName, DomainError> {
        let name = Self::subproject_name(raw, kind)?;
        name.ensure_not_reserved(&layout.tests_dir, "test directory")?;
        Ok(name)
    }

    /// Name of a sub-project added to an existing root.
    ///
    /// Every sub-project becomes a CMake target of the same name, so the
    /// version target's name is taken.
    pub fn subproject_name(raw: &str, kind: ProjectKind) -> Result<ProjectName, DomainError> {
        if ProjectName::has_separator(raw) {
            return Err(DomainError::AmbiguousName {
                name: raw.into(),
                kind,
            });
        }
        let name = ProjectName::parse(raw)?;
        name.ensure_not_reserved(VERSION_TARGET, "version target")?;
        Ok(name)
    }

    /// Path of an externally fetched dependency below the source root.
    pub fn dependency_path(raw: &str) -> Result<ProjectName, DomainError> {
        ProjectName::parse_path(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_name_rejects_reserved() {
        let layout = ProjectLayout::default();
        assert_eq!(
            DomainValidator::root_name("tests", ProjectKind::Executable, &layout),
            Err(DomainError::ReservedName {
                name: "tests".into(),
                purpose: "test directory".into(),
            })
        );
        assert!(DomainValidator::root_name("app", ProjectKind::Executable, &layout).is_ok());
    }

    #[test]
    fn reserved_name_follows_layout() {
        let layout = ProjectLayout {
            tests_dir: "check".into(),
            ..ProjectLayout::default()
        };
        assert!(DomainValidator::root_name("tests", ProjectKind::Library, &layout).is_ok());
        assert!(DomainValidator::root_name("check", ProjectKind::Library, &layout).is_err());
    }

    #[test]
    fn separators_are_ambiguous_for_subprojects() {
        assert_eq!(
            DomainValidator::subproject_name("foo/bar", ProjectKind::EmptyLibrary),
            Err(DomainError::AmbiguousName {
                name: "foo/bar".into(),
                kind: ProjectKind::EmptyLibrary,
            })
        );
        assert!(matches!(
            DomainValidator::subproject_name("a\\b", ProjectKind::TestDirectory),
            Err(DomainError::AmbiguousName { .. })
        ));
    }

    #[test]
    fn dependency_path_accepts_nested() {
        let name = DomainValidator::dependency_path("third_party/fmt").unwrap();
        assert_eq!(name.leaf(), "fmt");
        assert!(DomainValidator::dependency_path("../escape").is_err());
        assert!(DomainValidator::dependency_path("/abs").is_err());
    }

    #[test]
    fn empty_and_dot_names_are_invalid() {
        assert_eq!(
            DomainValidator::subproject_name("", ProjectKind::EmptyExecutable),
            Err(DomainError::EmptyName)
        );
        assert!(matches!(
            DomainValidator::subproject_name("..", ProjectKind::EmptyExecutable),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn ambiguous_name_message_follows_kind() {
        let lib = DomainValidator::subproject_name("foo/bar", ProjectKind::EmptyLibrary).unwrap_err();
        assert_eq!(lib.to_string(), "Invalid library name: foo/bar");
        assert!(lib.suggestions().iter().any(|s| s.contains("<url>")));

        let exe = DomainValidator::subproject_name("foo/bar", ProjectKind::EmptyExecutable).unwrap_err();
        assert_eq!(exe.to_string(), "Invalid executable name: foo/bar");
        assert!(exe.suggestions().iter().all(|s| !s.contains("<url>")));

        let tests = DomainValidator::subproject_name("a/b", ProjectKind::TestDirectory).unwrap_err();
        assert_eq!(tests.to_string(), "Invalid test directory name: a/b");
    }

    #[test]
    fn version_target_name_is_reserved() {
        let layout = ProjectLayout::default();
        for kind in [ProjectKind::Executable, ProjectKind::Library] {
            assert!(matches!(
                DomainValidator::root_name("version", kind, &layout),
                Err(DomainError::ReservedName { .. })
            ));
        }
        for kind in [
            ProjectKind::EmptyLibrary,
            ProjectKind::EmptyExecutable,
            ProjectKind::TestDirectory,
        ] {
            let err = DomainValidator::subproject_name("version", kind).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Name 'version' cannot be used: it is reserved for the generated version target"
            );
        }
        assert!(DomainValidator::subproject_name("versions", ProjectKind::EmptyLibrary).is_ok());
    }
}
