//! Pluggable error reporting for loaders.
//!
//! A [`Reporter`] is handed to a loader at construction time and receives
//! every failure before the loader applies its error policy. Plain closures
//! work as reporters, so tests and callers can capture reports without a
//! dedicated type.

use std::io::Write;

use crate::error::LoaderError;

pub trait Reporter: Send + Sync {
    /// Receives one report per failed invocation. Must not panic.
    fn report(&self, error: &LoaderError, message: &str);
}

impl<F> Reporter for F
where
    F: Fn(&LoaderError, &str) + Send + Sync,
{
    fn report(&self, error: &LoaderError, message: &str) {
        self(error, message);
    }
}

/// Default reporter: message and error on standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrReporter;

impl StderrReporter {
    /// The report as written to stderr: the message line, then the error.
    pub fn write_report<W: Write>(
        out: &mut W,
        error: &LoaderError,
        message: &str,
    ) -> std::io::Result<()> {
        writeln!(out, "{message}")?;
        writeln!(out, "{error:?}")
    }
}

impl Reporter for StderrReporter {
    fn report(&self, error: &LoaderError, message: &str) {
        // A closed stderr has nowhere left to report to.
        let _ = Self::write_report(&mut std::io::stderr().lock(), error, message);
    }
}

/// Emits a `warn` event per report for processes that already run a
/// tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, error: &LoaderError, message: &str) {
        tracing::warn!(
            path = %error.path().display(),
            kind = %error.kind(),
            error = ?error,
            "{message}"
        );
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&self, _error: &LoaderError, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn closures_are_reporters() {
        let seen = Mutex::new(Vec::new());
        let reporter = |error: &LoaderError, message: &str| {
            seen.lock().unwrap().push((error.kind(), message.to_string()));
        };
        let err = LoaderError::NotFound {
            path: PathBuf::from("app.yaml"),
        };
        reporter.report(&err, &err.to_string());

        let seen = seen.into_inner().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].1, "app.yaml 404");
    }

    #[test]
    fn stderr_report_is_message_then_error() {
        let err = LoaderError::NotFound {
            path: PathBuf::from("/srv/app.yaml"),
        };
        let mut out = Vec::new();
        StderrReporter::write_report(&mut out, &err, &err.to_string()).unwrap();

        let out = String::from_utf8(out).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("/srv/app.yaml 404"));
        assert!(lines.next().unwrap().starts_with("NotFound"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn builtin_reporters_do_not_panic() {
        let err = LoaderError::NotAFile {
            path: PathBuf::from("conf"),
        };
        let message = err.to_string();
        StderrReporter.report(&err, &message);
        TracingReporter.report(&err, &message);
        SilentReporter.report(&err, &message);
    }
}
