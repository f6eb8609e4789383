use similar::{ChangeTag, TextDiff};
use tracing::debug;

/// Lines of unchanged context shown around each change
pub const CONTEXT_LINES: usize = 3;

/// Render a line-based preview of the change from `old` to `new`
///
/// Each hunk is introduced by `@@ -a,b +c,d @@`; removed lines are prefixed
/// with `-`, added lines with `+` and context with a space.
pub fn render_preview(old: &str, new: &str, label: &str) -> String {
    let diff = TextDiff::from_lines(old, new);
    let mut output = format!("--- {label}\n+++ {label}\n");
    let mut changed = 0usize;

    for group in diff.grouped_ops(CONTEXT_LINES) {
        let (Some(first), Some(last)) = (group.first(), group.last()) else {
            continue;
        };
        let old_range = first.old_range().start..last.old_range().end;
        let new_range = first.new_range().start..last.new_range().end;
        output.push_str(&format!(
            "@@ -{},{} +{},{} @@\n",
            old_range.start + 1,
            old_range.len(),
            new_range.start + 1,
            new_range.len()
        ));

        for op in &group {
            for change in diff.iter_changes(op) {
                let sign = match change.tag() {
                    ChangeTag::Delete => {
                        changed += 1;
                        '-'
                    }
                    ChangeTag::Insert => {
                        changed += 1;
                        '+'
                    }
                    ChangeTag::Equal => ' ',
                };
                output.push(sign);
                output.push_str(change.value());
                if change.missing_newline() {
                    output.push('\n');
                }
            }
        }
    }

    debug!("Preview for {} has {} changed lines", label, changed);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_marks_removed_and_added_lines() {
        let old = "<main>\n<section id=\"a\">\nold\n</section>\n</main>\n";
        let new = "<main>\n<section id=\"b\"></section>\n\n</main>\n";

        let preview = render_preview(old, new, "scores.html");

        assert!(preview.starts_with("--- scores.html\n+++ scores.html\n@@ -1,"));
        assert!(preview.contains("-old\n"));
        assert!(preview.contains("-<section id=\"a\">\n"));
        assert!(preview.contains("+<section id=\"b\"></section>\n"));
        assert!(preview.contains(" <main>\n"));
    }

    #[test]
    fn test_identical_input_has_no_hunks() {
        let preview = render_preview("same\n", "same\n", "f");
        assert_eq!(preview, "--- f\n+++ f\n");
    }

    #[test]
    fn test_missing_trailing_newline() {
        let preview = render_preview("a", "b", "f");
        assert!(preview.contains("-a\n+b\n"));
    }
}
