use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// How an existing file at the target path is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Top-level infrastructure and build descriptors: always rewritten.
    Overwrite,
    /// Source, header and test stubs: never clobber hand-edited code.
    CreateIfAbsent,
}

/// The files and directories one assembler invocation materializes.
///
/// This is the output of a blueprint. It contains no business logic, only
/// data; paths are relative to the project root.
#[derive(Debug, Clone, Default)]
pub struct GeneratedFileSet {
    pub(crate) entries: Vec<FsEntry>,
}

impl GeneratedFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: String, policy: WritePolicy) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content,
            policy,
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(FsEntry::Directory(DirectoryToCreate { path: path.into() }));
    }

    pub fn with_file(
        mut self,
        path: impl Into<PathBuf>,
        content: String,
        policy: WritePolicy,
    ) -> Self {
        self.add_file(path, content, policy);
        self
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    /// Append every entry of `other`, keeping order.
    pub fn extend(&mut self, other: GeneratedFileSet) {
        self.entries.extend(other.entries);
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();

            let path_str = path.display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }

            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
        }

        Ok(())
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn directories(&self) -> impl Iterator<Item = &DirectoryToCreate> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::Directory(d) => Some(d),
            _ => None,
        })
    }

    /// Look up a file by its relative path.
    pub fn file(&self, path: impl AsRef<Path>) -> Option<&FileToWrite> {
        let path = path.as_ref();
        self.files().find(|f| f.path == path)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: String,
    pub policy: WritePolicy,
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_paths_rejected() {
        let set = GeneratedFileSet::new()
            .with_file("a.txt", "1".into(), WritePolicy::Overwrite)
            .with_file("a.txt", "2".into(), WritePolicy::Overwrite);
        assert!(matches!(
            set.validate(),
            Err(DomainError::DuplicatePath { .. })
        ));
    }

    #[test]
    fn absolute_paths_rejected() {
        let set = GeneratedFileSet::new().with_directory("/etc");
        assert!(matches!(
            set.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn lookup_by_path() {
        let set = GeneratedFileSet::new()
            .with_directory("src")
            .with_file("src/x.h", String::new(), WritePolicy::CreateIfAbsent);
        assert_eq!(set.entry_count(), 2);
        assert_eq!(
            set.file("src/x.h").map(|f| f.policy),
            Some(WritePolicy::CreateIfAbsent)
        );
        assert!(set.file("src/y.h").is_none());
    }
}
