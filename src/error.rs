//! Error types for container operations and file persistence.

#[cfg(feature = "serde")]
use std::path::PathBuf;

/// Errors raised by container operations.
///
/// # Examples
///
/// ```rust
/// use chainkit::error::ContainerError;
/// use chainkit::queue::Queue;
///
/// let mut queue: Queue<i32> = Queue::new();
/// let error = queue.dequeue().unwrap_err();
/// assert_eq!(error, ContainerError::EmptyContainer { operation: "Queue::dequeue" });
/// assert_eq!(format!("{error}"), "Queue::dequeue: the container is empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContainerError {
    /// A remove or peek was attempted on a container with no elements.
    #[error("{operation}: the container is empty")]
    EmptyContainer {
        /// The operation that was attempted, as `Type::method`.
        operation: &'static str,
    },
    /// A container was constructed with parameters it cannot honor.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong with the parameters.
        reason: &'static str,
    },
}

impl ContainerError {
    #[inline]
    pub(crate) const fn empty(operation: &'static str) -> Self {
        Self::EmptyContainer { operation }
    }
}

/// Errors raised while saving or loading a container.
#[cfg(feature = "serde")]
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// The path does not carry the `.json` extension.
    #[error("{}: expected a file with the `.{}` extension", path.display(), crate::persist::EXTENSION)]
    InvalidFormat {
        /// The rejected path.
        path: PathBuf,
    },
    /// There is no file to load at the path.
    #[error("{}: no such file", path.display())]
    ResourceNotFound {
        /// The missing path.
        path: PathBuf,
    },
    /// Any other I/O failure while opening, reading or writing.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The file content is not a valid encoding of the container.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
