use crate::areas::repository::Repository;
use crate::artifacts::diff::commit_diff::{FileChange, FileDiff};
use crate::artifacts::diff::line_diff::{Segment, SegmentKind, split_lines};
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Show how a commit changed each of its files relative to its parent
    ///
    /// Defaults to HEAD when no commit is given. Files whose content is
    /// missing from the store are reported and skipped; any other failure
    /// stops the command.
    pub fn diff(&self, commit_oid: Option<&str>) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let commit_oid = match commit_oid {
            Some(oid) => ObjectId::try_parse(oid.to_string())?,
            None => match self.refs().read_head()? {
                Some(head) => head,
                None => {
                    writeln!(self.writer(), "No commits yet")?;
                    return Ok(());
                }
            },
        };

        let commit_diff = self.database().commit_diff(&commit_oid)?;

        writeln!(
            self.writer(),
            "{}",
            format!("commit {}", commit_diff.oid).yellow()
        )?;
        for file_diff in &commit_diff.files {
            self.print_file_diff(file_diff)?;
        }

        Ok(())
    }

    fn print_file_diff(&self, file_diff: &FileDiff) -> anyhow::Result<()> {
        let path = file_diff.entry.path.display();

        match &file_diff.change {
            Ok(FileChange::FirstCommit { content }) => {
                writeln!(self.writer(), "{}", format!("{path}: first commit").bold())?;
                self.print_content(SegmentKind::Added, content)?;
            }
            Ok(FileChange::NewFile { content }) => {
                writeln!(self.writer(), "{}", format!("{path}: new file").bold())?;
                self.print_content(SegmentKind::Added, content)?;
            }
            Ok(FileChange::Modified { segments }) => {
                writeln!(self.writer(), "{}", format!("{path}: modified").bold())?;
                for segment in segments {
                    self.print_segment(segment)?;
                }
            }
            Err(err) if err.is_not_found() => {
                writeln!(self.writer(), "{}", format!("{path}: error: {err}").red())?;
            }
            Err(err) => {
                anyhow::bail!("unable to compare {path}: {err}");
            }
        }

        Ok(())
    }

    fn print_content(&self, kind: SegmentKind, content: &str) -> anyhow::Result<()> {
        for line in split_lines(content) {
            self.print_line(kind, line)?;
        }

        Ok(())
    }

    fn print_segment(&self, segment: &Segment) -> anyhow::Result<()> {
        for line in segment.lines() {
            self.print_line(segment.kind, line)?;
        }

        Ok(())
    }

    fn print_line(&self, kind: SegmentKind, line: &str) -> anyhow::Result<()> {
        let line = format!("{}{}", kind.marker(), line.trim_end_matches('\n'));
        let line = match kind {
            SegmentKind::Added => line.green(),
            SegmentKind::Removed => line.red(),
            SegmentKind::Unchanged => line.normal(),
        };

        writeln!(self.writer(), "{line}")?;

        Ok(())
    }
}
