//! Output naming and persistence.
//!
//! Each run names its document with a fresh random UUID and creates the file
//! with create-new semantics, so an existing file is never overwritten.

use std::{
    fmt,
    io::{self, Write},
    path::Path,
};

use cap_std::{
    ambient_authority,
    fs::{Dir, OpenOptions},
};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::error::GenerateError;

/// File name of a generated document: a hyphenated UUID v4 with no extension.
///
/// # Examples
/// ```
/// use cyclegen_core::OutputName;
///
/// let name = OutputName::random();
/// assert_eq!(name.to_string().len(), 36);
/// assert_ne!(name, OutputName::random());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct OutputName(Uuid);

impl OutputName {
    /// Draws a new random name.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing identifier.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the underlying identifier.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for OutputName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

/// Opens `path` as the directory that receives generated documents.
///
/// # Errors
/// Returns [`GenerateError::FileSystem`] if the directory cannot be opened.
pub fn open_output_dir(path: &Path) -> Result<Dir, GenerateError> {
    Dir::open_ambient_dir(path, ambient_authority()).map_err(|source| GenerateError::FileSystem {
        target: path.display().to_string(),
        source,
    })
}

/// Creates `name` inside `dir` and writes `contents` as its entire body.
///
/// The file handle is dropped before returning on every path. A file left
/// partially written by a failed write is not removed.
///
/// # Errors
/// Returns [`GenerateError::FileSystem`] if the file already exists or the
/// create or write fails.
#[instrument(
    name = "output.write",
    skip(dir, name, contents),
    fields(name = %name, bytes = contents.len()),
)]
pub fn write_new(dir: &Dir, name: OutputName, contents: &str) -> Result<(), GenerateError> {
    let file_name = name.to_string();
    write_exclusive(dir, &file_name, contents.as_bytes()).map_err(|source| {
        GenerateError::FileSystem {
            target: file_name.clone(),
            source,
        }
    })?;
    debug!("document written");
    Ok(())
}

fn write_exclusive(dir: &Dir, file_name: &str, bytes: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(file_name, &options)?;
    file.write_all(bytes)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn temp_dir() -> TempDir {
        match TempDir::new() {
            Ok(dir) => dir,
            Err(err) => panic!("failed to create temp dir: {err}"),
        }
    }

    #[test]
    fn names_are_canonical_v4_uuids() {
        let name = OutputName::random();
        let text = name.to_string();
        let groups: Vec<usize> = text.split('-').map(str::len).collect();
        assert_eq!(groups, [8, 4, 4, 4, 12]);
        assert!(text.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
        assert_eq!(text, text.to_ascii_lowercase());
        assert_eq!(name.as_uuid().get_version_num(), 4);
        assert_eq!(Uuid::parse_str(&text).ok(), Some(name.as_uuid()));
    }

    #[test]
    fn write_new_persists_contents() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = temp_dir();
        let dir = open_output_dir(tmp.path())?;
        let name = OutputName::random();
        write_new(&dir, name, "1,1\n1,1\n1,R")?;
        let written = std::fs::read_to_string(tmp.path().join(name.to_string()))?;
        assert_eq!(written, "1,1\n1,1\n1,R");
        Ok(())
    }

    #[test]
    fn write_new_refuses_to_overwrite() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = temp_dir();
        let dir = open_output_dir(tmp.path())?;
        let name = OutputName::random();
        write_new(&dir, name, "first")?;
        let err = write_new(&dir, name, "second").expect_err("existing file must be kept");
        match err {
            GenerateError::FileSystem { target, source } => {
                assert_eq!(target, name.to_string());
                assert_eq!(source.kind(), io::ErrorKind::AlreadyExists);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let kept = std::fs::read_to_string(tmp.path().join(name.to_string()))?;
        assert_eq!(kept, "first");
        Ok(())
    }

    #[test]
    fn missing_output_dir_is_a_file_system_error() {
        let tmp = temp_dir();
        let missing = tmp.path().join("absent");
        let err = open_output_dir(&missing).expect_err("directory does not exist");
        assert!(matches!(err, GenerateError::FileSystem { .. }));
    }
}
