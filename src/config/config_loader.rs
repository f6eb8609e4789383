use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::job::ReplaceJob;
use crate::error::{map_io_err, ResectionError, ResectionResult};
use crate::file::SectionMarkers;

/// On-disk shape of a job file
///
/// Every field is optional; anything left out comes from the built-in
/// scores page job.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct JobFile {
    /// File to rewrite, relative to the working directory
    pub path: Option<PathBuf>,

    pub start_marker: Option<String>,

    pub end_marker: Option<String>,

    /// Text that must follow the end marker. An empty string disables it.
    pub end_context: Option<String>,

    /// Inline replacement markup
    pub replacement: Option<String>,

    /// File holding the replacement markup, relative to the job file
    pub replacement_file: Option<PathBuf>,
}

/// Loads a `ReplaceJob` from a TOML job file
pub struct JobLoader {
    job_path: PathBuf,
}

impl JobLoader {
    /// Create a loader for the given job file
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            job_path: path.into(),
        }
    }

    pub fn job_path(&self) -> &Path {
        &self.job_path
    }

    /// Read and resolve the job file
    pub fn load(&self) -> ResectionResult<ReplaceJob> {
        info!("Loading job file: {}", self.job_path.display());

        let content = fs::read_to_string(&self.job_path).map_err(map_io_err(&self.job_path))?;
        let file: JobFile = toml::from_str(&content).map_err(|e| {
            ResectionError::invalid_job(format!("{}: {}", self.job_path.display(), e))
        })?;

        self.resolve(file)
    }

    /// Merge a parsed job file onto the built-in job
    pub fn resolve(&self, file: JobFile) -> ResectionResult<ReplaceJob> {
        let defaults = ReplaceJob::default();
        let custom_end = file.end_marker.is_some();

        let start = file.start_marker.unwrap_or(defaults.markers.start);
        let end = file.end_marker.unwrap_or(defaults.markers.end);
        if start.is_empty() || end.is_empty() {
            return Err(ResectionError::invalid_job(
                "start_marker and end_marker must not be empty",
            ));
        }

        // An explicit end marker without an explicit context drops the default context
        let end_context = match (file.end_context, custom_end) {
            (Some(context), _) => context,
            (None, true) => String::new(),
            (None, false) => defaults.markers.end_context.unwrap_or_default(),
        };

        let replacement = match (file.replacement, file.replacement_file) {
            (Some(_), Some(_)) => {
                return Err(ResectionError::invalid_job(
                    "set either replacement or replacement_file, not both",
                ))
            }
            (Some(inline), None) => inline,
            (None, Some(relative)) => {
                let path = self.relative_to_job(&relative);
                debug!("Reading replacement from {}", path.display());
                fs::read_to_string(&path).map_err(map_io_err(&path))?
            }
            (None, None) => defaults.replacement,
        };

        Ok(ReplaceJob::new(
            file.path.unwrap_or(defaults.path),
            SectionMarkers::new(start, end).followed_by(end_context),
            replacement,
        ))
    }

    fn relative_to_job(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match self.job_path.parent() {
            Some(dir) => dir.join(path),
            None => path.to_path_buf(),
        }
    }
}
