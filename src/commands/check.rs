use std::io::Write;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::checker::{CheckerRegistry, check_file};
use crate::cli::Cli;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::Result;
use crate::formatter::{ContentSniffer, FileCommandSniffer};
use crate::output::{BatchReport, CheckProgress, ErrorOutput, FileReport, formatter_for};
use crate::render::{OutputMode, Renderer};
use crate::scanner::{DirectoryScanner, FileScanner, IgnoreFilter};
use crate::{EXIT_CONFIG_ERROR, EXIT_FAILURE, EXIT_SUCCESS};

/// Comma-separated ignore patterns used when neither the command line nor
/// the configuration gives any.
pub const IGNORE_ENV_VAR: &str = "STYLE_GUARD_IGNORE";

#[must_use]
pub fn run_check(cli: &Cli) -> i32 {
    match run_check_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::stderr().print_run_error(&e, cli.verbose);
            if e.is_expected() {
                EXIT_CONFIG_ERROR
            } else {
                EXIT_FAILURE
            }
        }
    }
}

pub(crate) fn run_check_impl(cli: &Cli) -> Result<i32> {
    // Everything that can reject the run is validated before any file is read.
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let mode = resolve_output_mode(cli.output, config.check.output.as_deref())?;
    let env_ignore = std::env::var(IGNORE_ENV_VAR).ok();
    let ignore = resolve_ignore(&cli.ignore, &config.check.ignore, env_ignore.as_deref());
    let filter = IgnoreFilter::new(&ignore)?;
    let registry = CheckerRegistry::with_formatters(&config.formatters)?;

    let files = DirectoryScanner::new(filter).scan_all(&cli.paths);
    log::debug!("checking {} file(s) in {mode} mode", files.len());

    let report = check_files(&files, &registry, &FileCommandSniffer, mode);
    let output = formatter_for(mode).format(&report)?;
    write_output(mode, &output)?;

    Ok(EXIT_SUCCESS)
}

/// Loads the explicit config file, the local one, or defaults.
///
/// # Errors
/// Returns an error if the config file cannot be read or parsed.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// The command line wins over the config file; the default is `character`.
///
/// # Errors
/// Returns [`crate::StyleError::InvalidOutputMode`] for an unknown configured
/// mode name.
pub fn resolve_output_mode(cli: Option<OutputMode>, config: Option<&str>) -> Result<OutputMode> {
    match (cli, config) {
        (Some(mode), _) => Ok(mode),
        (None, Some(name)) => name.parse(),
        (None, None) => Ok(OutputMode::default()),
    }
}

/// First non-empty source of: command line, config file, environment.
#[must_use]
pub fn resolve_ignore(cli: &[String], config: &[String], env: Option<&str>) -> Vec<String> {
    if !cli.is_empty() {
        return cli.to_vec();
    }
    if !config.is_empty() {
        return config.to_vec();
    }
    env.map(split_patterns).unwrap_or_default()
}

fn split_patterns(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|pattern| !pattern.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Grades `files` in parallel. Entries keep the order of `files` and a
/// failing file only affects its own entry.
#[must_use]
pub fn check_files(
    files: &[PathBuf],
    registry: &CheckerRegistry,
    sniffer: &dyn ContentSniffer,
    mode: OutputMode,
) -> BatchReport {
    let renderer = mode.renderer();
    let total = u64::try_from(files.len()).unwrap_or(u64::MAX);
    let progress = CheckProgress::new(total, mode.is_quiet());

    let reports: Vec<FileReport> = files
        .par_iter()
        .map(|path| {
            progress.start_file(path);
            let report = check_one(path, registry, sniffer, renderer);
            progress.finish_file(&report);
            report
        })
        .collect();

    progress.finish();
    BatchReport::new(reports)
}

fn check_one(
    path: &Path,
    registry: &CheckerRegistry,
    sniffer: &dyn ContentSniffer,
    renderer: Renderer,
) -> FileReport {
    match check_file(path, registry, sniffer, renderer) {
        Ok(result) => FileReport::checked(result),
        Err(err) => {
            if err.is_file_level() {
                log::debug!("{}: {err:?}", path.display());
            } else {
                log::warn!("unexpected error while checking {}: {err}", path.display());
            }
            FileReport::failed(path, &err)
        }
    }
}

/// Prints the report, or for HTML writes it to a kept temporary file and
/// prints its URL.
///
/// # Errors
/// Returns an error if stdout or the temporary file cannot be written.
pub fn write_output(mode: OutputMode, output: &str) -> Result<()> {
    if mode == OutputMode::Html {
        let path = write_html_report(output)?;
        println!(
            "To see the results in your browser go to file://{}",
            path.display()
        );
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

/// Writes `html` to a new `.html` file in the temp directory that outlives
/// the process.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn write_html_report(html: &str) -> Result<PathBuf> {
    let mut file = tempfile::Builder::new()
        .prefix("style-guard-")
        .suffix(".html")
        .tempfile()?;
    file.write_all(html.as_bytes())?;
    let (_, path) = file.keep().map_err(|e| e.error)?;
    log::debug!("html report written to {}", path.display());
    Ok(path)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
