//! Error types for YAML sources.
//!
//! [`LoaderError`] is the taxonomy a [`Loader`](crate::loader::Loader) can
//! produce. Its `Display` output is the exact message handed to the
//! configured [`Reporter`](crate::report::Reporter), so callers matching on
//! log text and callers matching on variants see the same thing.
//! [`CliError`] covers the extra failure modes of the binary.

use std::path::{Path, PathBuf};

/// Boxed cause carried by [`LoaderError::Unreadable`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LoaderError {
    /// The path did not exist when the loader checked for it.
    #[error("{} 404", path.display())]
    NotFound { path: PathBuf },

    /// The path exists but is a directory or some other non-regular entry.
    #[error("Source {} is not a file", path.display())]
    NotAFile { path: PathBuf },

    /// Metadata, read or parse failed after the existence check passed.
    #[error("FILE DELETED OR A DIRECTORY-> {} 404: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    NotAFile,
    Unreadable,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::NotAFile => "not_a_file",
            Self::Unreadable => "unreadable",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LoaderError {
    pub(crate) fn unreadable(path: &Path, source: impl Into<BoxError>) -> Self {
        Self::Unreadable {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::NotAFile { .. } => ErrorKind::NotAFile,
            Self::Unreadable { .. } => ErrorKind::Unreadable,
        }
    }

    /// The source path the failing loader was built with.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::NotAFile { path } | Self::Unreadable { path, .. } => {
                path
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoaderError),

    #[error("Failed to render document as JSON: {0}")]
    RenderJson(#[from] serde_json::Error),

    #[error("Failed to render document as YAML: {0}")]
    RenderYaml(#[from] serde_yml::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_is_path_and_status() {
        let err = LoaderError::NotFound {
            path: PathBuf::from("/etc/app/config.yaml"),
        };
        assert_eq!(err.to_string(), "/etc/app/config.yaml 404");
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn not_a_file_message_names_source() {
        let err = LoaderError::NotAFile {
            path: PathBuf::from("/etc/app"),
        };
        assert_eq!(err.to_string(), "Source /etc/app is not a file");
    }

    #[test]
    fn unreadable_message_appends_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err = LoaderError::unreadable(Path::new("/etc/app/config.yaml"), cause);
        assert_eq!(
            err.to_string(),
            "FILE DELETED OR A DIRECTORY-> /etc/app/config.yaml 404: permission denied"
        );
        assert_eq!(err.kind(), ErrorKind::Unreadable);
        assert_eq!(err.path(), Path::new("/etc/app/config.yaml"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn cli_error_is_transparent_over_loader_error() {
        let err: CliError = LoaderError::NotFound {
            path: PathBuf::from("x.yaml"),
        }
        .into();
        assert_eq!(err.to_string(), "x.yaml 404");
    }
}
