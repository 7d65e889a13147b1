//! Manifest Mutator - in-place edits of the top-level build descriptor.
//!
//! Reads the descriptor through the [`Filesystem`] port, splices new text in
//! with [`manifest::splice`], and writes the result back with
//! [`Filesystem::replace_file`], so a failed write leaves the original intact.
//! There is no locking; one tool instance per project at a time.

use std::path::Path;
use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{InsertionPoint, catalog, manifest},
    error::CoreResult,
};

pub struct ManifestMutator<'a> {
    filesystem: &'a dyn Filesystem,
    marker: &'a str,
}

impl<'a> ManifestMutator<'a> {
    /// Mutator splicing before the first `add_subdirectory(` line.
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self::with_marker(filesystem, catalog::REGISTRATION_MARKER)
    }

    pub fn with_marker(filesystem: &'a dyn Filesystem, marker: &'a str) -> Self {
        Self { filesystem, marker }
    }

    /// Insert the text produced by `produce` from the current content.
    ///
    /// `produce` sees the whole manifest so callers can decide what to add;
    /// an empty result leaves the file untouched.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn insert_with<F>(&self, path: &Path, produce: F) -> CoreResult<Option<InsertionPoint>>
    where
        F: FnOnce(&str) -> String,
    {
        if !self.filesystem.exists(path) {
            return Err(ApplicationError::ManifestMissing {
                path: path.to_path_buf(),
            }
            .into());
        }

        let original = self.filesystem.read_to_string(path)?;
        let text = produce(&original);
        if text.is_empty() {
            debug!("Nothing to insert");
            return Ok(None);
        }

        let spliced = manifest::splice(&original, &text, self.marker);
        self.filesystem.replace_file(path, &spliced.content)?;
        debug!(point = %spliced.point, "Manifest updated");
        Ok(Some(spliced.point))
    }

    /// Insert fixed text.
    pub fn insert(&self, path: &Path, text: &str) -> CoreResult<InsertionPoint> {
        let point = self.insert_with(path, |_| text.to_string())?;
        Ok(point.unwrap_or(InsertionPoint::EndOfFile))
    }
}
