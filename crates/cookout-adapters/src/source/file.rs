//! Filesystem-based submission source.
//!
//! Reads event payloads from files, or from every `*.json` / `*.toml` file
//! found below a directory.
//!
//! # Payload formats
//!
//! JSON (the upstream request body), `null` standing for an absent event:
//!
//! ```json
//! { "title": "BBQ", "date": "2000-01-01", "persons": [{ "name": "A", "foodMoneyShare": 10 }] }
//! ```
//!
//! TOML, same fields; the date must be a quoted string:
//!
//! ```toml
//! title = "BBQ"
//! date  = "2000-01-01"
//!
//! [[persons]]
//! name           = "A"
//! foodMoneyShare = 10
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use cookout_core::{
    application::{ApplicationError, Submission, SubmissionSource},
    domain::Event,
    error::CookoutResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PayloadFormat {
    Json,
    Toml,
}

impl PayloadFormat {
    /// Format from the file extension; `None` for files a directory walk
    /// should ignore.
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Reads submissions from files and directories.
///
/// Explicitly named files are always read (as TOML if they end in `.toml`,
/// JSON otherwise). Directories are walked recursively in file-name order so
/// the same tree always yields the same sequence.
#[derive(Debug, Clone)]
pub struct FileSource {
    paths: Vec<PathBuf>,
    skip_malformed: bool,
}

impl FileSource {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            skip_malformed: false,
        }
    }

    /// Skip undecodable files with a warning instead of failing the batch.
    pub fn skip_malformed(mut self, skip: bool) -> Self {
        self.skip_malformed = skip;
        self
    }

    /// Expand the configured paths into the list of payload files.
    #[instrument(skip(self), fields(paths = self.paths.len()))]
    fn payload_files(&self) -> CookoutResult<Vec<(PathBuf, PayloadFormat)>> {
        let mut files = Vec::new();

        for path in &self.paths {
            if path.is_file() {
                let format = PayloadFormat::from_path(path).unwrap_or(PayloadFormat::Json);
                files.push((path.clone(), format));
                continue;
            }

            if !path.is_dir() {
                return Err(ApplicationError::SourceUnavailable {
                    origin: path.display().to_string(),
                    reason: "no such file or directory".into(),
                }
                .into());
            }

            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry.map_err(|e| ApplicationError::SourceUnavailable {
                    origin: path.display().to_string(),
                    reason: e.to_string(),
                })?;

                if !entry.file_type().is_file() {
                    continue;
                }
                if let Some(format) = PayloadFormat::from_path(entry.path()) {
                    files.push((entry.into_path(), format));
                }
            }
        }

        debug!(count = files.len(), "payload files discovered");
        Ok(files)
    }

    fn load(&self, path: &Path, format: PayloadFormat) -> CookoutResult<Option<Submission>> {
        let origin = path.display().to_string();

        let raw = fs::read_to_string(path).map_err(|e| ApplicationError::SourceUnavailable {
            origin: origin.clone(),
            reason: e.to_string(),
        })?;

        match decode(&raw, format) {
            Ok(event) => Ok(Some(Submission::new(origin, event))),
            Err(reason) if self.skip_malformed => {
                warn!(file = %origin, error = %reason, "skipping malformed payload");
                Ok(None)
            }
            Err(reason) => Err(ApplicationError::MalformedPayload { origin, reason }.into()),
        }
    }
}

impl SubmissionSource for FileSource {
    fn submissions(&self) -> CookoutResult<Vec<Submission>> {
        let mut submissions = Vec::new();
        for (path, format) in self.payload_files()? {
            if let Some(submission) = self.load(&path, format)? {
                submissions.push(submission);
            }
        }
        Ok(submissions)
    }
}

fn decode(raw: &str, format: PayloadFormat) -> Result<Option<Event>, String> {
    match format {
        PayloadFormat::Json => serde_json::from_str::<Option<Event>>(raw).map_err(|e| e.to_string()),
        PayloadFormat::Toml => toml::from_str::<Event>(raw)
            .map(Some)
            .map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cookout_core::error::CookoutError;
    use rust_decimal::Decimal;
    use tempfile::TempDir;

    const VALID_JSON: &str = r#"{ "title": "BBQ", "date": "2000-01-01" }"#;

    const VALID_TOML: &str = r#"
title = "BBQ"
date  = "2000-01-01"

[[persons]]
name           = "A"
foodMoneyShare = -10
"#;

    fn write(dir: &Path, rel: &str, body: &str) -> PathBuf {
        let full = dir.join(rel);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, body).unwrap();
        full
    }

    #[test]
    fn reads_single_json_file() {
        let temp = TempDir::new().unwrap();
        let file = write(temp.path(), "event.json", VALID_JSON);

        let subs = FileSource::new([&file]).submissions().unwrap();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].event.as_ref().and_then(Event::title), Some("BBQ"));
    }

    #[test]
    fn json_null_is_absent_event() {
        let temp = TempDir::new().unwrap();
        let file = write(temp.path(), "empty.json", "null");

        let subs = FileSource::new([file]).submissions().unwrap();
        assert_eq!(subs[0].event, None);
    }

    #[test]
    fn reads_toml_payload() {
        let temp = TempDir::new().unwrap();
        let file = write(temp.path(), "event.toml", VALID_TOML);

        let subs = FileSource::new([file]).submissions().unwrap();
        let event = subs[0].event.as_ref().unwrap();
        assert_eq!(event.participants()[0].food_money_share(), Decimal::from(-10));
    }

    #[test]
    fn walks_directories_in_name_order() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "b.json", VALID_JSON);
        write(temp.path(), "a.toml", VALID_TOML);
        write(temp.path(), "nested/c.json", "null");
        write(temp.path(), "README.md", "not a payload");

        let subs = FileSource::new([temp.path()]).submissions().unwrap();
        let names: Vec<_> = subs
            .iter()
            .map(|s| Path::new(&s.origin).file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(names, ["a.toml", "b.json", "c.json"]);
    }

    #[test]
    fn missing_path_is_unavailable() {
        let err = FileSource::new(["/absolutely/does/not/exist"])
            .submissions()
            .unwrap_err();
        assert!(matches!(
            err,
            CookoutError::Application(ApplicationError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn malformed_payload_fails_batch_by_default() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "bad.json", "{ not json");

        let err = FileSource::new([temp.path()]).submissions().unwrap_err();
        assert!(matches!(
            err,
            CookoutError::Application(ApplicationError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn malformed_payload_can_be_skipped() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "bad.json", r#"{ "title": "no date" }"#);
        write(temp.path(), "good.json", VALID_JSON);

        let subs = FileSource::new([temp.path()])
            .skip_malformed(true)
            .submissions()
            .unwrap();
        assert_eq!(subs.len(), 1);
        assert!(subs[0].origin.ends_with("good.json"));
    }

    #[test]
    fn extension_detection() {
        assert_eq!(PayloadFormat::from_path(Path::new("x.JSON")), Some(PayloadFormat::Json));
        assert_eq!(PayloadFormat::from_path(Path::new("x.toml")), Some(PayloadFormat::Toml));
        assert_eq!(PayloadFormat::from_path(Path::new("x.txt")), None);
        assert_eq!(PayloadFormat::from_path(Path::new("x")), None);
    }
}
