use std::fmt;
use tracing::debug;

use crate::error::{sentinel, ResectionError, ResectionResult};

/// Literals bounding the section to replace
///
/// The removed region starts at the first occurrence of `start` and ends
/// right after the first `end` that follows it. When `end_context` is set,
/// an `end` only counts if it is immediately followed by `end_context`;
/// the context itself stays in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionMarkers {
    pub start: String,
    pub end: String,
    pub end_context: Option<String>,
}

impl SectionMarkers {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            end_context: None,
        }
    }

    /// Require `context` right after the end marker
    pub fn followed_by(mut self, context: impl Into<String>) -> Self {
        let context = context.into();
        self.end_context = if context.is_empty() {
            None
        } else {
            Some(context)
        };
        self
    }

    /// The literal actually searched for after the start marker
    pub fn end_fragment(&self) -> String {
        match &self.end_context {
            Some(context) => format!("{}{}", self.end, context),
            None => self.end.clone(),
        }
    }
}

/// What happened to the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceOutcome {
    /// Bytes `start..end` of the original were replaced
    Replaced { start: usize, end: usize },
    /// At least one marker is missing; nothing was touched
    NotFound {
        start: Option<usize>,
        end: Option<usize>,
    },
}

impl SpliceOutcome {
    pub fn is_replaced(&self) -> bool {
        matches!(self, Self::Replaced { .. })
    }
}

impl fmt::Display for SpliceOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replaced { start, end } => write!(f, "replaced bytes {}..{}", start, end),
            Self::NotFound { start, end } => write!(
                f,
                "Could not find section to replace: start={}, end={}",
                sentinel(start),
                sentinel(end)
            ),
        }
    }
}

/// Result of splicing a document: the outcome and the resulting text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub outcome: SpliceOutcome,
    pub content: String,
}

impl Splice {
    /// Turn a missing section into `ResectionError::SectionNotFound`
    pub fn into_result(self) -> ResectionResult<String> {
        match self.outcome {
            SpliceOutcome::Replaced { .. } => Ok(self.content),
            SpliceOutcome::NotFound { start, end } => {
                Err(ResectionError::SectionNotFound { start, end })
            }
        }
    }
}

/// Locate the section bounded by `markers`, returning `(start, end)` byte
/// offsets. The end fragment is only searched from the start marker onward.
pub fn locate_section(content: &str, markers: &SectionMarkers) -> (Option<usize>, Option<usize>) {
    let start = content.find(&markers.start);

    let end = start.and_then(|start| {
        content[start..]
            .find(&markers.end_fragment())
            .map(|relative| start + relative + markers.end.len())
    });

    (start, end)
}

/// Replace the section bounded by `markers` with `replacement` followed by
/// a single newline. Text outside the section is preserved byte for byte.
pub fn replace_section(content: &str, markers: &SectionMarkers, replacement: &str) -> Splice {
    let (start, end) = locate_section(content, markers);
    debug!(
        "Located section: start={}, end={}",
        sentinel(&start),
        sentinel(&end)
    );

    match (start, end) {
        (Some(start), Some(end)) => {
            let mut new_content =
                String::with_capacity(content.len() - (end - start) + replacement.len() + 1);
            new_content.push_str(&content[..start]);
            new_content.push_str(replacement);
            new_content.push('\n');
            new_content.push_str(&content[end..]);

            Splice {
                outcome: SpliceOutcome::Replaced { start, end },
                content: new_content,
            }
        }
        (start, end) => Splice {
            outcome: SpliceOutcome::NotFound { start, end },
            content: content.to_string(),
        },
    }
}
