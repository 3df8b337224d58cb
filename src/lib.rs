//! Async YAML file loaders for configuration aggregators.
//!
//! A loader is built from a policy and a list of path segments, and reads
//! and parses its file afresh every time it is invoked. Failures are
//! reported through a pluggable [`Reporter`](report::Reporter) and then
//! either propagated or replaced with an empty mapping.
//!
//! ```no_run
//! # async fn demo() -> Result<(), yaml_source::error::LoaderError> {
//! use yaml_source::loader::{create, LoaderConfig};
//!
//! let loader = create(LoaderConfig::new(), ["/etc/myapp", "config.yaml"]);
//! let document = loader.load().await?;
//! println!("{:?}", document.get("database"));
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`loader`] -- [`LoaderConfig`](loader::LoaderConfig), [`create`](loader::create)
//!   and the [`Loader`](loader::Loader) itself, plus segment joining.
//! - [`report`] -- The [`Reporter`](report::Reporter) capability and its
//!   stderr, tracing and silent implementations.
//! - [`source`] -- The object-safe [`ConfigSource`](source::ConfigSource) trait.
//! - [`error`] -- Error types using `thiserror`.
//! - [`cli`], [`cmd`], [`logging`] -- The `yaml-source` diagnostic binary.

pub mod cli;
pub mod cmd;
pub mod error;
pub mod loader;
pub mod logging;
pub mod report;
pub mod source;
