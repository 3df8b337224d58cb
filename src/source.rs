//! Object-safe seam for configuration aggregators.
//!
//! Aggregators that hold heterogeneous sources keep them as
//! `Box<dyn ConfigSource>`; [`Loader`] is the YAML implementation.

use std::path::Path;

use async_trait::async_trait;

use crate::error::LoaderError;
use crate::loader::{Document, Loader};

// async_trait is required here because ConfigSource is used as Box<dyn ConfigSource>
// and native async fn in traits does not support dyn dispatch.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    fn name(&self) -> &'static str;
    fn location(&self) -> &Path;
    async fn load(&self) -> Result<Document, LoaderError>;
}

#[async_trait]
impl ConfigSource for Loader {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn location(&self) -> &Path {
        self.path()
    }

    async fn load(&self) -> Result<Document, LoaderError> {
        Loader::load(self).await
    }
}
