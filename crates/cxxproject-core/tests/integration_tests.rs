//! Integration tests for cxxproject-core through its public API.
//!
//! The ports are implemented here with a minimal map-backed filesystem and a
//! command log, so the assembler is driven exactly as an adapter crate would.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use cxxproject_core::prelude::*;

#[derive(Clone, Default)]
struct MapFs(Arc<Mutex<BTreeMap<PathBuf, Option<String>>>>);

impl MapFs {
    fn content(&self, path: &str) -> Option<String> {
        self.0.lock().unwrap().get(Path::new(path)).cloned().flatten()
    }
}

impl Filesystem for MapFs {
    fn create_dir_all(&self, path: &Path) -> CoreResult<()> {
        let mut map = self.0.lock().unwrap();
        for ancestor in path.ancestors() {
            map.entry(ancestor.to_path_buf()).or_insert(None);
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        self.0
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), Some(content.to_string()));
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> CoreResult<String> {
        self.0
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .flatten()
            .ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    operation: "read",
                    reason: "not found".into(),
                }
                .into()
            })
    }

    fn replace_file(&self, path: &Path, content: &str) -> CoreResult<()> {
        self.write_file(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        self.0.lock().unwrap().contains_key(path)
    }
}

#[derive(Clone, Default)]
struct CommandLog(Arc<Mutex<Vec<String>>>);

impl CommandLog {
    fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    fn push(&self, entry: String) -> CoreResult<()> {
        self.0.lock().unwrap().push(entry);
        Ok(())
    }
}

impl VersionControl for CommandLog {
    fn init(&self) -> CoreResult<()> {
        self.push("init".into())
    }

    fn add(&self, paths: &[PathBuf]) -> CoreResult<()> {
        let joined: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
        self.push(format!("add {}", joined.join(" ")))
    }

    fn commit(&self, message: &str) -> CoreResult<()> {
        self.push(format!("commit {message}"))
    }

    fn tag(&self, name: &str) -> CoreResult<()> {
        self.push(format!("tag {name}"))
    }

    fn submodule_add(&self, url: &str, path: &Path, branch: Option<String>) -> CoreResult<()> {
        self.push(format!(
            "submodule add {url} {} {}",
            path.display(),
            branch.unwrap_or_default()
        ))
    }

    fn submodule_update(&self, path: &Path) -> CoreResult<()> {
        self.push(format!("submodule update {}", path.display()))
    }
}

fn setup() -> (ProjectAssembler, MapFs, CommandLog) {
    let fs = MapFs::default();
    let log = CommandLog::default();
    let assembler = ProjectAssembler::new(
        Box::new(fs.clone()),
        Box::new(log.clone()),
        ProjectContext::new("proj"),
    );
    (assembler, fs, log)
}

#[test]
fn test_create_library_then_add_executable() {
    let (assembler, fs, log) = setup();

    assembler.create_library("mylib").unwrap();
    let report = assembler.add_executable("tool").unwrap();

    assert!(report.manifest_updated);
    let manifest = fs.content("proj/CMakeLists.txt").unwrap();
    let tool = manifest.find("add_subdirectory(\"src/tool\")").unwrap();
    let version = manifest.find("add_subdirectory(version)").unwrap();
    assert!(tool < version);

    let commands = log.entries();
    assert_eq!(commands[0], "init");
    assert_eq!(commands[2], "commit Initial commit");
    assert_eq!(commands[3], "tag 0.0.1");
    assert_eq!(commands[4], "add src/tool CMakeLists.txt");
}

#[test]
fn test_recreate_keeps_existing_stubs() {
    let (assembler, fs, _) = setup();

    assembler.create_executable("app").unwrap();
    fs.write_file(Path::new("proj/src/app/app.cpp"), "// edited\n")
        .unwrap();

    let report = assembler.create_executable("app").unwrap();

    assert_eq!(fs.content("proj/src/app/app.cpp").unwrap(), "// edited\n");
    assert!(report.skipped.contains(&PathBuf::from("src/app/app.cpp")));
    assert!(report.skipped.contains(&PathBuf::from("src/app/app.h")));
    assert!(report.written.contains(&PathBuf::from("Makefile")));
}

#[test]
fn test_errors_carry_suggestions() {
    let (assembler, _, _) = setup();

    let err = assembler.add_library("a/b").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Precondition);
    assert!(!err.suggestions().is_empty());
}
