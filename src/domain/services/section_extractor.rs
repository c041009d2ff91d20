//! Section extraction from composite configuration documents
//!
//! A composite document carries several device files back to back, each
//! introduced by a marker line such as `# /etc/network/interfaces`.
//! Markers are matched by substring, not by whole-line equality.

use crate::domain::value_objects::COMMENT_PREFIX;

/// Extract the lines between `start_marker` and `end_marker`.
///
/// Scanning rules:
/// - Lines before the first line containing `start_marker` are ignored.
/// - Every line containing `start_marker` is dropped and turns extraction on.
/// - The first line containing `end_marker` stops the scan, wherever it
///   appears. An end marker seen before any start marker therefore yields
///   an empty result.
/// - With `end_marker = None` extraction runs to the end of the document.
/// - While extracting, lines starting with `#` are dropped; everything else
///   is kept verbatim, in order.
///
/// A missing start marker is not an error here: the result is empty and the
/// caller decides what that means.
pub fn extract_section(document: &str, start_marker: &str, end_marker: Option<&str>) -> String {
    let mut in_section = false;
    let mut lines: Vec<&str> = Vec::new();

    for line in document.lines() {
        if line.contains(start_marker) {
            in_section = true;
            continue;
        }

        if end_marker.is_some_and(|end| line.contains(end)) {
            break;
        }

        if in_section && !line.starts_with(COMMENT_PREFIX) {
            lines.push(line);
        }
    }

    lines.join("\n")
}
