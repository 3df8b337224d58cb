//! YAML file loaders.
//!
//! [`create`] turns a [`LoaderConfig`] and a list of path segments into a
//! [`Loader`]. Construction is synchronous and touches nothing on disk; all
//! filesystem work happens when the loader is invoked, and it happens again
//! on every invocation so each call sees the file as it is at that moment.
//!
//! An invocation checks that the path exists, that it is a regular file,
//! then reads and parses it. [`Loader::try_load`] returns the raw outcome;
//! [`Loader::load`] reports failures and applies the configured error policy.

pub mod path;

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;

use crate::error::LoaderError;
use crate::report::{Reporter, StderrReporter};

pub use path::join_segments;

/// A parsed YAML document. Usually a mapping, but non-mapping roots are
/// passed through as parsed.
pub type Document = serde_yml::Value;

pub type LoadFuture = Pin<Box<dyn Future<Output = Result<Document, LoaderError>> + Send>>;

/// A loader erased into a zero-argument async callable.
pub type LoaderFn = Arc<dyn Fn() -> LoadFuture + Send + Sync>;

/// The document produced when a failure is swallowed.
#[must_use]
pub fn empty_document() -> Document {
    Document::Mapping(serde_yml::Mapping::new())
}

/// Parse YAML text. A stream holding no document (blank, comments only,
/// bare markers or directives) is an empty mapping rather than null.
pub fn parse_document(content: &str) -> Result<Document, serde_yml::Error> {
    if holds_no_document(content) {
        return Ok(empty_document());
    }
    serde_yml::from_str(content)
}

fn holds_no_document(content: &str) -> bool {
    content.lines().map(str::trim).all(|line| {
        let rest = line
            .strip_prefix("---")
            .or_else(|| line.strip_prefix("..."))
            .map_or(line, str::trim_start);
        rest.is_empty() || rest.starts_with('#') || (rest == line && rest.starts_with('%'))
    })
}

#[derive(Clone)]
pub struct LoaderConfig {
    throw_on_error: bool,
    reporter: Arc<dyn Reporter>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            throw_on_error: false,
            reporter: Arc::new(StderrReporter),
        }
    }
}

impl std::fmt::Debug for LoaderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoaderConfig")
            .field("throw_on_error", &self.throw_on_error)
            .finish_non_exhaustive()
    }
}

impl LoaderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Propagate failures as errors instead of returning an empty mapping.
    #[must_use]
    pub fn throw_on_error(mut self, throw_on_error: bool) -> Self {
        self.throw_on_error = throw_on_error;
        self
    }

    #[must_use]
    pub fn reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Arc::new(reporter);
        self
    }

    #[must_use]
    pub const fn throws_on_error(&self) -> bool {
        self.throw_on_error
    }
}

/// Build a loader for the file at the joined `segments`.
///
/// Never fails and performs no I/O.
pub fn create<I, S>(config: LoaderConfig, segments: I) -> Loader
where
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    Loader::new(config, segments)
}

#[derive(Clone, Debug)]
pub struct Loader {
    path: PathBuf,
    config: LoaderConfig,
}

impl Loader {
    pub fn new<I, S>(config: LoaderConfig, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        Self {
            path: join_segments(segments),
            config,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn throws_on_error(&self) -> bool {
        self.config.throw_on_error
    }

    /// Read and parse the file, reporting any failure once.
    ///
    /// Returns `Err` only when the loader was configured to throw; otherwise
    /// a failure yields [`empty_document`].
    pub async fn load(&self) -> Result<Document, LoaderError> {
        match self.try_load().await {
            Ok(document) => Ok(document),
            Err(error) => {
                let message = error.to_string();
                self.config.reporter.report(&error, &message);
                if self.config.throw_on_error {
                    Err(error)
                } else {
                    Ok(empty_document())
                }
            }
        }
    }

    /// One attempt at existence check, type check, read and parse, with no
    /// reporting and no fallback.
    pub async fn try_load(&self) -> Result<Document, LoaderError> {
        let path = self.path.as_path();
        tracing::debug!(path = %path.display(), "loading yaml source");

        // An error here (not a definite "absent") is left for metadata to surface.
        if matches!(path.try_exists(), Ok(false)) {
            return Err(LoaderError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| LoaderError::unreadable(path, e))?;
        if !metadata.is_file() {
            return Err(LoaderError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LoaderError::unreadable(path, e))?;
        let document = parse_document(&content).map_err(|e| LoaderError::unreadable(path, e))?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "loaded yaml source");
        Ok(document)
    }

    /// Erase this loader into a shareable zero-argument async callable.
    #[must_use]
    pub fn into_fn(self) -> LoaderFn {
        let loader = Arc::new(self);
        Arc::new(move || -> LoadFuture {
            let loader = Arc::clone(&loader);
            Box::pin(async move { loader.load().await })
        })
    }
}
