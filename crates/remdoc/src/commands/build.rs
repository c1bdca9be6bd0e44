//! `remdoc build` command implementation.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use remdoc_config::{CliSettings, Config};
use remdoc_directus::{ContentSource, DirectusClient};
use remdoc_export::{ExportReport, PlannedFile};
use tracing::debug;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to configuration file (default: auto-discover remdoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Project directory the output directory is resolved against (overrides config).
    #[arg(short, long)]
    project_dir: Option<PathBuf>,

    /// Directus base URL (overrides config).
    #[arg(long, env = "DIRECTUS_URL")]
    url: Option<String>,

    /// Directus static token (overrides config).
    #[arg(long, env = "DIRECTUS_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// List the files that would be written without touching the filesystem.
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output (log every written and skipped node).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid, the query fails, or the
    /// output cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            url: self.url,
            token: self.token,
            project_dir: self.project_dir,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let directus = config.require_directus()?;
        if let Some(path) = &config.config_path {
            debug!("Loaded configuration from {}", path.display());
        }

        let client = DirectusClient::new(
            &directus.url,
            directus.token.as_deref(),
            Duration::from_secs(directus.timeout_secs),
        );
        let output_dir = &config.export_resolved.output_dir;

        output.info(&format!("Fetching documentation from {}...", directus.url));

        if self.dry_run {
            let tree = client.fetch_documentation_tree()?;
            let files = remdoc_export::plan(&tree)?;
            print_plan(&output, output_dir, &files);
        } else {
            let report = remdoc_export::build_into(&client, output_dir)?;
            print_report(&output, output_dir, &report);
        }

        Ok(())
    }
}

fn print_plan(output: &Output, output_dir: &std::path::Path, files: &[PlannedFile]) {
    output.info(&format!(
        "\n[DRY RUN] {} files would be written to {}:",
        files.len(),
        output_dir.display()
    ));
    for file in files {
        output.detail(&format!("  -> {}", file.path.display()));
    }
}

fn print_report(output: &Output, output_dir: &std::path::Path, report: &ExportReport) {
    output.success(&format!(
        "Wrote {} files to {}",
        report.files.len(),
        output_dir.display()
    ));
    if report.skipped > 0 {
        output.detail(&format!(
            "{} nodes skipped (style not materialized)",
            report.skipped
        ));
    }
}
