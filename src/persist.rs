//! JSON file persistence for every container.
//!
//! A container is stored as a flat JSON array of its elements in traversal
//! order and restored by replaying insertions in that order (see each
//! container's `Deserialize` impl). The file must carry the
//! [`EXTENSION`]; anything else is rejected before the file system is
//! touched.
//!
//! # Examples
//!
//! ```rust
//! use chainkit::persist::Persist;
//! use chainkit::queue::Queue;
//!
//! let directory = tempfile::tempdir()?;
//! let path = directory.path().join("queue.json");
//!
//! let queue = Queue::from([1, 2, 3]);
//! queue.save(&path)?;
//!
//! let restored: Queue<i32> = Queue::load(&path)?;
//! assert_eq!(restored, queue);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::deque::Deque;
use crate::drum::Drum;
use crate::error::PersistError;
use crate::list::{DoublyLinkedList, SinglyLinkedList};
use crate::queue::Queue;
use crate::stack::Stack;

/// The only file extension accepted by [`Persist`], compared ASCII
/// case-insensitively.
pub const EXTENSION: &str = "json";

#[derive(Clone, Copy, Debug)]
enum Layout {
    Compact,
    Pretty,
}

/// Saving to and loading from a `.json` file.
pub trait Persist: Serialize + DeserializeOwned {
    /// Number of elements written by [`Persist::save`], reported in logs.
    fn element_count(&self) -> usize;

    /// Writes the container to `path` as compact JSON, replacing any
    /// existing file.
    ///
    /// The JSON is staged in a temporary file next to `path` and renamed into
    /// place once complete, so a failed save leaves the previous file intact.
    ///
    /// # Errors
    ///
    /// - [`PersistError::InvalidFormat`] if `path` does not end in `.json`
    /// - [`PersistError::Io`] if the file cannot be created or written
    /// - [`PersistError::Json`] if an element fails to serialize
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        write_json(self, path.as_ref(), Layout::Compact)
    }

    /// Like [`Persist::save`], with indented output.
    ///
    /// # Errors
    ///
    /// Same as [`Persist::save`].
    fn save_pretty<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        write_json(self, path.as_ref(), Layout::Pretty)
    }

    /// Reads a container back from `path`.
    ///
    /// # Errors
    ///
    /// - [`PersistError::InvalidFormat`] if `path` does not end in `.json`
    /// - [`PersistError::ResourceNotFound`] if nothing exists at `path`
    /// - [`PersistError::Io`] on any other read failure
    /// - [`PersistError::Json`] if the content is not a valid encoding
    fn load<P: AsRef<Path>>(path: P) -> Result<Self, PersistError> {
        read_json(path.as_ref())
    }
}

/// Returns `true` if `path` ends in `.json`, ignoring ASCII case.
#[must_use]
pub fn has_persist_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|extension| extension.eq_ignore_ascii_case(EXTENSION))
}

fn check_extension(path: &Path) -> Result<(), PersistError> {
    if has_persist_extension(path) {
        Ok(())
    } else {
        Err(PersistError::InvalidFormat {
            path: path.to_path_buf(),
        })
    }
}

/// Directory that receives the staged file for `path`.
fn staging_directory(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn write_json<C: Persist>(container: &C, path: &Path, layout: Layout) -> Result<(), PersistError> {
    check_extension(path)?;
    let mut staged = NamedTempFile::new_in(staging_directory(path))?;
    {
        let mut writer = BufWriter::new(staged.as_file_mut());
        match layout {
            Layout::Compact => serde_json::to_writer(&mut writer, container)?,
            Layout::Pretty => serde_json::to_writer_pretty(&mut writer, container)?,
        }
        writer.flush()?;
    }
    staged
        .persist(path)
        .map_err(|failure| PersistError::Io(failure.error))?;
    tracing::debug!(
        path = %path.display(),
        elements = container.element_count(),
        ?layout,
        "saved container"
    );
    Ok(())
}

fn read_json<C: Persist>(path: &Path) -> Result<C, PersistError> {
    check_extension(path)?;
    let file = File::open(path).map_err(|error| match error.kind() {
        io::ErrorKind::NotFound => PersistError::ResourceNotFound {
            path: path.to_path_buf(),
        },
        _ => PersistError::Io(error),
    })?;
    let container: C = serde_json::from_reader(BufReader::new(file))?;
    tracing::debug!(
        path = %path.display(),
        elements = container.element_count(),
        "loaded container"
    );
    Ok(container)
}

// =============================================================================
// Container Implementations
// =============================================================================

impl<T: Serialize + DeserializeOwned> Persist for SinglyLinkedList<T> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T: Serialize + DeserializeOwned> Persist for DoublyLinkedList<T> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T: Serialize + DeserializeOwned> Persist for Stack<T> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T: Serialize + DeserializeOwned> Persist for Queue<T> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T: Serialize + DeserializeOwned> Persist for Deque<T> {
    fn element_count(&self) -> usize {
        self.len()
    }
}

impl<T: Serialize + DeserializeOwned> Persist for Drum<T> {
    fn element_count(&self) -> usize {
        self.capacity()
    }
}
