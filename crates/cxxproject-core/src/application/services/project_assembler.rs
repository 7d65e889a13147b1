//! Project Assembler - main application orchestrator.
//!
//! Each public operation follows the same shape:
//! 1. Validate the name and check preconditions (no side effects yet)
//! 2. Edit the top-level descriptor, for additions
//! 3. Materialize the blueprint through the [`Filesystem`] port
//! 4. Record the result through the [`VersionControl`] port
//!
//! A failure at any step aborts the operation. Files already written stay on
//! disk; there is no rollback.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, VersionControl},
        services::ManifestMutator,
    },
    domain::{
        DomainValidator as validator, FsEntry, GeneratedFileSet, IncludeGuardToken,
        ProjectContext, ProjectKind, ProjectName, WritePolicy, blueprint, catalog, manifest,
        root_staging_paths,
    },
    error::CoreResult,
};

/// What one operation did, for progress output and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyReport {
    pub kind: ProjectKind,
    pub name: ProjectName,
    /// Sub-project directory, relative to the project root.
    pub subdirectory: PathBuf,
    /// Files written, relative to the project root.
    pub written: Vec<PathBuf>,
    /// Stubs left alone because they already existed.
    pub skipped: Vec<PathBuf>,
    /// Whether the top-level descriptor was edited.
    pub manifest_updated: bool,
}

impl AssemblyReport {
    fn new(kind: ProjectKind, name: ProjectName, subdirectory: PathBuf) -> Self {
        Self {
            kind,
            name,
            subdirectory,
            written: Vec::new(),
            skipped: Vec::new(),
            manifest_updated: false,
        }
    }
}

/// Orchestrates catalog, filesystem and version control for every command.
pub struct ProjectAssembler {
    filesystem: Box<dyn Filesystem>,
    vcs: Box<dyn VersionControl>,
    context: ProjectContext,
}

impl ProjectAssembler {
    /// Create an assembler over the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use cxxproject_core::application::ProjectAssembler;
    /// use cxxproject_core::domain::ProjectContext;
    ///
    /// let assembler = ProjectAssembler::new(
    ///     filesystem, // impl Filesystem
    ///     vcs,        // impl VersionControl
    ///     ProjectContext::new("."),
    /// );
    /// assembler.create_executable("hello")?;
    /// ```
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        vcs: Box<dyn VersionControl>,
        context: ProjectContext,
    ) -> Self {
        Self {
            filesystem,
            vcs,
            context,
        }
    }

    pub fn context(&self) -> &ProjectContext {
        &self.context
    }

    /// `create executable <name>`
    #[instrument(skip(self))]
    pub fn create_executable(&self, name: &str) -> CoreResult<AssemblyReport> {
        self.create_project(name, ProjectKind::Executable)
    }

    /// `create library <name>`
    #[instrument(skip(self))]
    pub fn create_library(&self, name: &str) -> CoreResult<AssemblyReport> {
        self.create_project(name, ProjectKind::Library)
    }

    /// `add library <name>`
    #[instrument(skip(self))]
    pub fn add_library(&self, name: &str) -> CoreResult<AssemblyReport> {
        self.add_subproject(name, ProjectKind::EmptyLibrary)
    }

    /// `add executable <name>`
    #[instrument(skip(self))]
    pub fn add_executable(&self, name: &str) -> CoreResult<AssemblyReport> {
        self.add_subproject(name, ProjectKind::EmptyExecutable)
    }

    /// `add tests <name>`
    #[instrument(skip(self))]
    pub fn add_tests(&self, name: &str) -> CoreResult<AssemblyReport> {
        self.add_subproject(name, ProjectKind::TestDirectory)
    }

    /// `add library <name> <url> [branch]`
    ///
    /// `name` may be a relative path below the source root. If the fetched
    /// unit ships a `library.cmake`, the top-level descriptor includes it.
    #[instrument(skip(self))]
    pub fn add_external_library(
        &self,
        name: &str,
        url: &str,
        branch: Option<&str>,
    ) -> CoreResult<AssemblyReport> {
        let name = validator::dependency_path(name)?;
        self.context.layout.validate()?;
        let dir = self.context.layout.subproject_dir(&name);
        self.ensure_absent(&dir)?;
        let manifest_path = self.require_manifest()?;

        info!(%name, url, branch, "Fetching dependency");
        self.vcs
            .submodule_add(url, &dir, branch.map(str::to_string))?;
        self.vcs.submodule_update(&dir)?;

        let mut report = AssemblyReport::new(ProjectKind::ExternalDependency, name, dir);

        let aggregator = report.subdirectory.join(catalog::AGGREGATOR);
        if self.filesystem.exists(&self.context.resolve(&aggregator)) {
            let reference = format!(
                "{}/{}",
                self.context.layout.subproject_ref(report.name.as_str()),
                catalog::AGGREGATOR
            );
            ManifestMutator::new(self.filesystem.as_ref())
                .insert(&manifest_path, &catalog::aggregator_include(&reference))?;
            report.manifest_updated = true;
            self.vcs.add(&[PathBuf::from(catalog::DESCRIPTOR)])?;
        } else {
            debug!(path = %aggregator.display(), "Dependency ships no aggregator");
        }

        info!("Dependency added");
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn create_project(&self, name: &str, kind: ProjectKind) -> CoreResult<AssemblyReport> {
        let layout = &self.context.layout;
        let name = validator::root_name(name, kind, layout)?;
        layout.validate()?;
        info!(%name, %kind, root = %self.context.root.display(), "Creating project");

        let set = blueprint(&name, kind, &self.context, &IncludeGuardToken::random())?;
        let dir = layout.subproject_dir(&name);
        let mut report = AssemblyReport::new(kind, name, dir);
        self.materialize(&set, &mut report)?;

        let mut staged = root_staging_paths(kind, &self.context);
        staged.push(report.subdirectory.clone());

        let release = &self.context.release;
        self.vcs.init()?;
        self.vcs.add(&staged)?;
        self.vcs.commit(&release.commit_message)?;
        self.vcs.tag(&release.initial_tag)?;

        info!(
            written = report.written.len(),
            skipped = report.skipped.len(),
            tag = %release.initial_tag,
            "Project created"
        );
        Ok(report)
    }

    fn add_subproject(&self, name: &str, kind: ProjectKind) -> CoreResult<AssemblyReport> {
        let name = validator::subproject_name(name, kind)?;
        self.context.layout.validate()?;
        let dir = self.context.layout.subproject_dir(&name);
        self.ensure_absent(&dir)?;
        let manifest_path = self.require_manifest()?;
        info!(%name, %kind, "Adding sub-project");

        let registration =
            catalog::subdirectory_registration(&self.context.layout.subproject_ref(name.as_str()));
        let needs_testing = kind == ProjectKind::TestDirectory;
        ManifestMutator::new(self.filesystem.as_ref()).insert_with(&manifest_path, |current| {
            if needs_testing && !manifest::contains_directive(current, catalog::TESTING_DIRECTIVE)
            {
                format!("{}\n{registration}", catalog::TESTING_DIRECTIVE)
            } else {
                registration
            }
        })?;

        let set = blueprint(&name, kind, &self.context, &IncludeGuardToken::random())?;
        let mut report = AssemblyReport::new(kind, name, dir);
        report.manifest_updated = true;
        self.materialize(&set, &mut report)?;

        self.vcs.add(&[
            report.subdirectory.clone(),
            PathBuf::from(catalog::DESCRIPTOR),
        ])?;

        info!(written = report.written.len(), "Sub-project added");
        Ok(report)
    }

    /// Fail when a sub-project directory is already present.
    fn ensure_absent(&self, dir: &Path) -> CoreResult<()> {
        if self.filesystem.exists(&self.context.resolve(dir)) {
            return Err(ApplicationError::TargetExists {
                path: dir.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }

    fn require_manifest(&self) -> CoreResult<PathBuf> {
        let path = self.context.resolve(catalog::DESCRIPTOR);
        if !self.filesystem.exists(&path) {
            return Err(ApplicationError::ManifestMissing { path }.into());
        }
        Ok(path)
    }

    /// Write every entry of `set`, honouring each file's write policy.
    fn materialize(&self, set: &GeneratedFileSet, report: &mut AssemblyReport) -> CoreResult<()> {
        for entry in set.entries() {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem
                        .create_dir_all(&self.context.resolve(&dir.path))?;
                }
                FsEntry::File(file) => {
                    let path = self.context.resolve(&file.path);

                    if file.policy == WritePolicy::CreateIfAbsent && self.filesystem.exists(&path)
                    {
                        debug!(path = %file.path.display(), "Exists, skipped");
                        report.skipped.push(file.path.clone());
                        continue;
                    }

                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&path, &file.content)?;
                    debug!(path = %file.path.display(), "Written");
                    report.written.push(file.path.clone());
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockVersionControl};
    use crate::domain::DomainError;
    use crate::error::CoreError;

    /// Mocks with no expectations panic on any call.
    fn untouched() -> (MockFilesystem, MockVersionControl) {
        (MockFilesystem::new(), MockVersionControl::new())
    }

    fn assembler(fs: MockFilesystem, vcs: MockVersionControl) -> ProjectAssembler {
        ProjectAssembler::new(Box::new(fs), Box::new(vcs), ProjectContext::new("/p"))
    }

    #[test]
    fn reserved_names_fail_before_any_side_effect() {
        let (fs, vcs) = untouched();
        let err = assembler(fs, vcs).create_executable("tests").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Domain(DomainError::ReservedName { .. })
        ));

        let (fs, vcs) = untouched();
        let err = assembler(fs, vcs).create_library("tests").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Domain(DomainError::ReservedName { .. })
        ));
    }

    #[test]
    fn ambiguous_library_name_fails_before_any_command() {
        let (fs, vcs) = untouched();
        let err = assembler(fs, vcs).add_library("foo/bar").unwrap_err();
        assert_eq!(err.to_string(), "Invalid library name: foo/bar");
    }

    #[test]
    fn ambiguous_names_are_reported_per_kind() {
        let (fs, vcs) = untouched();
        let err = assembler(fs, vcs).add_executable("foo/bar").unwrap_err();
        assert_eq!(err.to_string(), "Invalid executable name: foo/bar");

        let (fs, vcs) = untouched();
        let err = assembler(fs, vcs).add_tests("foo/bar").unwrap_err();
        assert_eq!(err.to_string(), "Invalid test directory name: foo/bar");
    }

    #[test]
    fn version_target_name_fails_before_any_side_effect() {
        let (fs, vcs) = untouched();
        let err = assembler(fs, vcs).create_executable("version").unwrap_err();
        assert!(matches!(
            err,
            CoreError::Domain(DomainError::ReservedName { .. })
        ));

        let (fs, vcs) = untouched();
        let err = assembler(fs, vcs).add_library("version").unwrap_err();
        assert!(err.to_string().contains("version target"));
    }

    #[test]
    fn existing_target_leaves_manifest_alone() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p == Path::new("/p/src/app"));
        fs.expect_replace_file().never();
        fs.expect_write_file().never();

        let err = assembler(fs, MockVersionControl::new())
            .add_executable("app")
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::TargetExists { .. })
        ));
    }

    #[test]
    fn add_outside_project_reports_missing_manifest() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);

        let err = assembler(fs, MockVersionControl::new())
            .add_tests("unit")
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Application(ApplicationError::ManifestMissing { .. })
        ));
    }

    #[test]
    fn failed_fetch_stops_before_manifest_edit() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p == Path::new("/p/CMakeLists.txt"));
        fs.expect_replace_file().never();

        let mut vcs = MockVersionControl::new();
        vcs.expect_submodule_add().returning(|url, _, _| {
            Err(ApplicationError::CommandFailed {
                command: format!("git submodule add {url}"),
                reason: "exit status: 128".into(),
            }
            .into())
        });
        vcs.expect_submodule_update().never();

        let err = assembler(fs, vcs)
            .add_external_library("fmt", "https://example.invalid/fmt.git", None)
            .unwrap_err();
        assert!(err.to_string().contains("git submodule add"));
    }

    #[test]
    fn create_commits_and_tags_after_writing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().times(10).returning(|_, _| Ok(()));

        let mut seq = mockall::Sequence::new();
        let mut vcs = MockVersionControl::new();
        vcs.expect_init()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        vcs.expect_add()
            .withf(|paths| {
                paths.contains(&PathBuf::from("src/app"))
                    && paths.contains(&PathBuf::from("version"))
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        vcs.expect_commit()
            .withf(|m| m == "Initial commit")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        vcs.expect_tag()
            .withf(|t| t == "0.0.1")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let report = assembler(fs, vcs).create_executable("app").unwrap();
        assert_eq!(report.written.len(), 10);
        assert!(report.skipped.is_empty());
        assert_eq!(report.subdirectory, PathBuf::from("src/app"));
    }
}
