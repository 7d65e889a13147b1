//! Line-preserving splice of the top-level build descriptor.
//!
//! The splice is a pure string transform. Reading the file and atomically
//! replacing it is the job of
//! [`ManifestMutator`](crate::application::ManifestMutator).

/// Where a splice put its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionPoint {
    /// Before the zero-based line index that held the first marker.
    BeforeLine(usize),
    /// No marker line; appended.
    EndOfFile,
}

impl std::fmt::Display for InsertionPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BeforeLine(idx) => write!(f, "before line {}", idx + 1),
            Self::EndOfFile => f.write_str("at end of file"),
        }
    }
}

/// Result of [`splice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub content: String,
    pub point: InsertionPoint,
}

/// First line containing `marker`, if any.
pub fn find_insertion_point(manifest: &str, marker: &str) -> InsertionPoint {
    manifest
        .split_inclusive('\n')
        .position(|line| line.contains(marker))
        .map_or(InsertionPoint::EndOfFile, InsertionPoint::BeforeLine)
}

/// Insert `text` before the first line containing `marker`, or append it.
///
/// Every original line is kept byte-for-byte, in order. `text` gets a
/// trailing newline if it has none; appending to content whose last line is
/// unterminated adds a newline first.
pub fn splice(manifest: &str, text: &str, marker: &str) -> Splice {
    let point = find_insertion_point(manifest, marker);
    let mut content = String::with_capacity(manifest.len() + text.len() + 2);

    match point {
        InsertionPoint::BeforeLine(idx) => {
            for (i, line) in manifest.split_inclusive('\n').enumerate() {
                if i == idx {
                    push_terminated(&mut content, text);
                }
                content.push_str(line);
            }
        }
        InsertionPoint::EndOfFile => {
            content.push_str(manifest);
            if !manifest.is_empty() && !manifest.ends_with('\n') {
                content.push('\n');
            }
            push_terminated(&mut content, text);
        }
    }

    Splice { content, point }
}

/// Whether some line, trimmed, equals `directive`.
pub fn contains_directive(manifest: &str, directive: &str) -> bool {
    manifest.lines().any(|line| line.trim() == directive)
}

fn push_terminated(out: &mut String, text: &str) {
    out.push_str(text);
    if !text.is_empty() && !text.ends_with('\n') {
        out.push('\n');
    }
}
