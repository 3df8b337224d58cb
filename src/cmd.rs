//! Execution of the `yaml-source` binary.

use std::io::Write;

use crate::cli::{Cli, OutputFormat, ReporterKind};
use crate::error::CliError;
use crate::loader::{self, Document, LoaderConfig};
use crate::logging;
use crate::report::{SilentReporter, StderrReporter, TracingReporter};

pub async fn dispatch(cli: Cli) -> Result<(), CliError> {
    logging::init(&cli.log_level, logging::resolve_format(cli.pretty, cli.json));

    let config = LoaderConfig::new().throw_on_error(cli.throw_on_error);
    let config = match cli.reporter {
        ReporterKind::Stderr => config.reporter(StderrReporter),
        ReporterKind::Tracing => config.reporter(TracingReporter),
        ReporterKind::Silent => config.reporter(SilentReporter),
    };

    let loader = loader::create(config, &cli.segments);
    tracing::info!(path = %loader.path().display(), "loading");
    let document = loader.load().await?;

    let rendered = render(&document, &cli.output)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}

pub fn render(document: &Document, format: &OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(document)?),
        OutputFormat::Yaml => Ok(serde_yml::to_string(document)?.trim_end().to_string()),
    }
}
