//! `cookout validate`: check event payloads before persistence.

use serde::Serialize;
use tracing::{info, instrument};

use cookout_adapters::FileSource;
use cookout_core::{
    application::{SubmissionReport, ValidationService},
    domain::{EntityLabels, EventValidator, ValidationReport},
    error::Context as _,
};

use crate::{
    cli::{LabelPreset, OutputFormat, ValidateArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One entry of the `--output-format json` array.
#[derive(Debug, Serialize)]
struct JsonEntry<'a> {
    origin: &'a str,
    #[serde(flatten)]
    report: ValidationReport,
}

/// Validate every payload under `args.paths`.
///
/// Rejected submissions are reported individually and turned into
/// [`CliError::SubmissionsRejected`] once all of them have been shown.
#[instrument(skip_all, fields(paths = args.paths.len()))]
pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let labels = resolve_labels(args.labels, &config)?;
    info!(event = labels.event(), "Using entity labels");

    let source = FileSource::new(args.paths).skip_malformed(args.skip_malformed);
    let service = ValidationService::new(Box::new(source), EventValidator::with_labels(labels));

    let reports = service.run()?;

    match output.format() {
        OutputFormat::Json => print_json(&reports)?,
        _ => print_human(&reports, &output)?,
    }

    let rejected = reports.iter().filter(|r| !r.is_accepted()).count();
    if rejected > 0 {
        return Err(CliError::SubmissionsRejected {
            rejected,
            total: reports.len(),
        });
    }

    Ok(())
}

/// `--labels` wins over the `[labels]` config section.
fn resolve_labels(preset: Option<LabelPreset>, config: &AppConfig) -> CliResult<EntityLabels> {
    match preset {
        Some(LabelPreset::Default) => Ok(EntityLabels::default()),
        Some(LabelPreset::Legacy) => Ok(EntityLabels::legacy()),
        None => config
            .entity_labels()
            .map_err(|e| CliError::ConfigError {
                message: format!("invalid [labels] section: {e}"),
                source: Some(Box::new(e)),
            }),
    }
}

fn print_json(reports: &[SubmissionReport]) -> CliResult<()> {
    let entries: Vec<JsonEntry<'_>> = reports
        .iter()
        .map(|r| JsonEntry {
            origin: r.origin(),
            report: r.report(),
        })
        .collect();

    let json = serde_json::to_string_pretty(&entries).context("Failed to serialise reports")?;
    println!("{json}");
    Ok(())
}

fn print_human(reports: &[SubmissionReport], output: &OutputManager) -> CliResult<()> {
    if reports.is_empty() {
        output.warning("No submissions found")?;
        return Ok(());
    }

    for report in reports {
        if report.is_accepted() {
            output.success(report.origin())?;
            continue;
        }
        output.error(report.origin())?;
        for message in report.result().messages() {
            output.error_detail(message)?;
        }
    }

    let rejected = reports.iter().filter(|r| !r.is_accepted()).count();
    output.info(&format!(
        "{} accepted, {} rejected",
        reports.len() - rejected,
        rejected
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_overrides_config() {
        let mut config = AppConfig::default();
        config.labels.event = "Barbeque".into();

        let labels = resolve_labels(Some(LabelPreset::Legacy), &config).unwrap();
        assert_eq!(labels, EntityLabels::legacy());

        let labels = resolve_labels(Some(LabelPreset::Default), &config).unwrap();
        assert_eq!(labels, EntityLabels::default());
    }

    #[test]
    fn labels_fall_back_to_config() {
        let mut config = AppConfig::default();
        config.labels.event = "Barbeque".into();

        let labels = resolve_labels(None, &config).unwrap();
        assert_eq!(labels.event(), "Barbeque");
    }

    #[test]
    fn blank_config_label_is_config_error() {
        let mut config = AppConfig::default();
        config.labels.participant = String::new();

        let err = resolve_labels(None, &config).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn json_entry_flattens_report() {
        let entry = JsonEntry {
            origin: "a.json",
            report: ValidationReport {
                success: false,
                errors: vec!["Event should not be null.".into()],
            },
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["origin"], "a.json");
        assert_eq!(value["success"], false);
        assert_eq!(value["errors"][0], "Event should not be null.");
    }
}
