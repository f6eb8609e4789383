use std::path::PathBuf;

use crate::file::SectionMarkers;

/// Page rewritten by the built-in job
pub const DEFAULT_PATH: &str = "frontend-deploy/scores.html";

/// Opening tag of the legacy single score list
pub const DEFAULT_START_MARKER: &str = r#"<section class="score-list" id="allScores">"#;

pub const DEFAULT_END_MARKER: &str = "</section>";

/// Must follow the end marker; the closing `</main>` is left in place
pub const DEFAULT_END_CONTEXT: &str = "\n</main>";

/// Per-category score sections that replace the legacy list
pub const DEFAULT_REPLACEMENT: &str = r#"<section class="scores-section" id="topic-scores">
    <h2 class="section-title">TOPIC QUIZZES</h2>
    <div class="scores-grid"></div>
  </section>

  <section class="scores-section" id="document-scores">
    <h2 class="section-title">DOCUMENT QUIZZES</h2>
    <div class="scores-grid"></div>
  </section>

  <section class="scores-section" id="multiplayer-scores">
    <h2 class="section-title">MULTIPLAYER QUIZZES</h2>
    <div class="scores-grid"></div>
  </section>"#;

/// One replacement to perform: which file, which section, what goes there
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceJob {
    pub path: PathBuf,
    pub markers: SectionMarkers,
    pub replacement: String,
}

impl ReplaceJob {
    pub fn new(
        path: impl Into<PathBuf>,
        markers: SectionMarkers,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            markers,
            replacement: replacement.into(),
        }
    }

    /// Same job against another file
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }
}

impl Default for ReplaceJob {
    /// Split the scores page into topic, document and multiplayer sections
    fn default() -> Self {
        Self::new(
            DEFAULT_PATH,
            SectionMarkers::new(DEFAULT_START_MARKER, DEFAULT_END_MARKER)
                .followed_by(DEFAULT_END_CONTEXT),
            DEFAULT_REPLACEMENT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_job() {
        let job = ReplaceJob::default();
        assert_eq!(job.path, PathBuf::from("frontend-deploy/scores.html"));
        assert_eq!(job.markers.end_fragment(), "</section>\n</main>");
        assert!(job.replacement.starts_with(r#"<section class="scores-section" id="topic-scores">"#));
        assert!(job.replacement.ends_with("</section>"));
        assert!(!job.replacement.contains(DEFAULT_START_MARKER));
    }

    #[test]
    fn test_with_path() {
        let job = ReplaceJob::default().with_path("/tmp/other.html");
        assert_eq!(job.path, PathBuf::from("/tmp/other.html"));
        assert_eq!(job.markers, ReplaceJob::default().markers);
    }
}
