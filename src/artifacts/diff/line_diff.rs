//! Line-granularity text diff
//!
//! Texts are split into lines that keep their terminators, diffed with
//! Myers' algorithm, and consecutive edits of the same kind are merged into a
//! single [`Segment`]. Concatenating the `Unchanged` and `Removed` segments in
//! order yields the old text; `Unchanged` and `Added` yield the new one.

use crate::artifacts::diff::diff_algorithm::{DiffAlgorithm, Edit, MyersDiff};
use derive_new::new;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Added,
    Removed,
    Unchanged,
}

impl SegmentKind {
    /// Prefix used when printing the lines of a segment
    pub fn marker(&self) -> char {
        match self {
            SegmentKind::Added => '+',
            SegmentKind::Removed => '-',
            SegmentKind::Unchanged => ' ',
        }
    }
}

/// A run of consecutive lines sharing the same kind
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        split_lines(&self.text).into_iter()
    }
}

/// Split text into lines, keeping each line's `\n`
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

pub fn line_diff(old_text: &str, new_text: &str) -> Vec<Segment> {
    let old_lines = split_lines(old_text);
    let new_lines = split_lines(new_text);

    MyersDiff::new(&old_lines, &new_lines)
        .diff()
        .into_iter()
        .map(|edit| match edit {
            Edit::Delete(line) => (SegmentKind::Removed, *line),
            Edit::Insert(line) => (SegmentKind::Added, *line),
            Edit::Equal(line) => (SegmentKind::Unchanged, *line),
        })
        .fold(Vec::<Segment>::new(), |mut segments, (kind, line)| {
            match segments.last_mut() {
                Some(last) if last.kind == kind => last.text.push_str(line),
                _ => segments.push(Segment::new(kind, line.to_string())),
            }
            segments
        })
}

/// Rebuild the old text from a segment list
pub fn old_text(segments: &[Segment]) -> String {
    collect_text(segments, SegmentKind::Removed)
}

/// Rebuild the new text from a segment list
pub fn new_text(segments: &[Segment]) -> String {
    collect_text(segments, SegmentKind::Added)
}

fn collect_text(segments: &[Segment], side: SegmentKind) -> String {
    segments
        .iter()
        .filter(|segment| segment.kind == side || segment.kind == SegmentKind::Unchanged)
        .map(|segment| segment.text.as_str())
        .collect()
}
