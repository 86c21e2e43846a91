use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use derive_new::new;
use std::io::Write;

#[derive(Debug, Clone, Default, new)]
pub struct LogOptions {
    pub oneline: bool,
}

impl Repository {
    /// Print the commit chain from HEAD back to the first commit
    ///
    /// A missing commit is reported in place and ends the listing without
    /// failing the command. Any other load failure, such as a corrupt commit
    /// object, fails the command.
    pub fn log(&self, opts: &LogOptions) -> anyhow::Result<()> {
        self.ensure_initialized()?;

        let head = self.refs().read_head()?;
        if head.is_none() {
            writeln!(self.writer(), "No commits yet")?;
            return Ok(());
        }

        for (position, item) in self.database().rev_list(head).enumerate() {
            match item {
                Ok((oid, commit)) => {
                    if opts.oneline {
                        self.show_commit_oneline(&oid, &commit)?;
                    } else {
                        if position > 0 {
                            writeln!(self.writer())?;
                        }
                        self.show_commit_medium(&oid, &commit)?;
                    }
                }
                Err(err) if err.is_not_found() => {
                    tracing::warn!(%err, "history walk stopped");
                    writeln!(self.writer(), "{}", format!("error: {err}").red())?;
                }
                Err(err) => return Err(err.into()),
            }
        }

        Ok(())
    }

    fn show_commit_medium(&self, oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", format!("commit {oid}").yellow())?;
        if let Some(parent) = commit.parent() {
            writeln!(self.writer(), "Parent: {parent}")?;
        }
        writeln!(self.writer(), "Date:   {}", commit.readable_timestamp())?;
        writeln!(self.writer(), "Files:  {}", commit.files().len())?;
        writeln!(self.writer())?;
        for message_line in commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }

    fn show_commit_oneline(&self, oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {}",
            oid.to_short_oid().yellow(),
            commit.short_message()
        )?;

        Ok(())
    }
}
