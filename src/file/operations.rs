use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::config::ReplaceJob;
use crate::diff::render_preview;
use crate::error::ResectionResult;
use crate::file::section_replace::{replace_section, SpliceOutcome};
use crate::utils::fs::{display_name, read_file_to_string, write_file_sync};

/// How a job should be carried out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Compute the change and a preview, but leave the file alone
    pub dry_run: bool,
}

/// What a job did to its file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReport {
    pub path: PathBuf,
    pub outcome: SpliceOutcome,
    pub bytes_before: usize,
    pub bytes_after: usize,
    pub written: bool,
    /// Diff of the change, only produced for dry runs
    pub preview: Option<String>,
}

impl JobReport {
    /// The single status line printed for this job
    pub fn summary(&self) -> String {
        let name = display_name(&self.path);
        match self.outcome {
            SpliceOutcome::Replaced { .. } if self.written => {
                format!("Updated {} successfully", name)
            }
            SpliceOutcome::Replaced { .. } => format!("Would update {}", name),
            SpliceOutcome::NotFound { .. } => self.outcome.to_string(),
        }
    }
}

/// Read the job's file, splice the section and write the result back
///
/// A missing section is reported through `JobReport::outcome`; the file is
/// then left byte-for-byte unchanged. IO failures abort before any write.
pub fn run_job(job: &ReplaceJob, options: RunOptions) -> ResectionResult<JobReport> {
    let path = &job.path;
    info!("Replacing section in {}", path.display());

    let content = read_file_to_string(path)?;
    let splice = replace_section(&content, &job.markers, &job.replacement);

    let mut report = JobReport {
        path: path.clone(),
        outcome: splice.outcome,
        bytes_before: content.len(),
        bytes_after: splice.content.len(),
        written: false,
        preview: None,
    };

    match splice.outcome {
        SpliceOutcome::NotFound { .. } => {
            warn!("{}", splice.outcome);
        }
        SpliceOutcome::Replaced { start, end } if options.dry_run => {
            debug!("Dry run: bytes {}..{} would be replaced", start, end);
            report.preview = Some(render_preview(
                &content,
                &splice.content,
                &path.display().to_string(),
            ));
        }
        SpliceOutcome::Replaced { start, end } => {
            write_file_sync(path, &splice.content)?;
            report.written = true;
            info!(
                "Replaced bytes {}..{} of {} ({} -> {} bytes)",
                start,
                end,
                path.display(),
                report.bytes_before,
                report.bytes_after
            );
        }
    }

    Ok(report)
}
