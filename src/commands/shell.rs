//! Line-oriented interactive front end
//!
//! Reads one line at a time, splits it on whitespace into a verb and its
//! arguments and dispatches to the repository. A failing command is reported
//! and the loop keeps reading; only `exit` or end of input stop it.

use crate::areas::repository::Repository;
use crate::commands::porcelain::log::LogOptions;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

const PROMPT: &str = "lit> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add(Vec<String>),
    Commit(String),
    Log,
    Diff(Option<String>),
    Head,
    Exit,
}

/// Why a line could not be turned into a [`ShellCommand`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command: {0}")]
    UnknownVerb(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

impl ShellCommand {
    /// Parse one input line, `Ok(None)` for a blank line
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args = words.map(String::from).collect::<Vec<_>>();

        let command = match verb {
            "add" if args.is_empty() => return Err(ParseError::Usage("add <path>...")),
            "add" => ShellCommand::Add(args),
            "commit" if args.is_empty() => return Err(ParseError::Usage("commit <message...>")),
            "commit" => ShellCommand::Commit(args.join(" ")),
            "log" => ShellCommand::Log,
            "diff" if args.len() > 1 => return Err(ParseError::Usage("diff [digest]")),
            "diff" => ShellCommand::Diff(args.into_iter().next()),
            "head" => ShellCommand::Head,
            "exit" | "quit" => ShellCommand::Exit,
            other => return Err(ParseError::UnknownVerb(other.to_string())),
        };

        Ok(Some(command))
    }
}

impl Repository {
    /// Run the interactive loop over the given input
    ///
    /// The prompt is only printed when `interactive` is set, so piped input
    /// produces plain command output.
    pub async fn shell<R>(&self, input: R, interactive: bool) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();

        loop {
            if interactive {
                write!(self.writer(), "{PROMPT}")?;
                self.writer().flush()?;
            }

            let Some(line) = lines.next_line().await? else {
                break;
            };

            let command = match ShellCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    eprintln!("{err}");
                    continue;
                }
            };

            if command == ShellCommand::Exit {
                break;
            }

            if let Err(err) = self.dispatch(command).await {
                tracing::debug!(error = ?err, "shell command failed");
                eprintln!("error: {err:#}");
            }
            self.writer().flush()?;
        }

        Ok(())
    }

    async fn dispatch(&self, command: ShellCommand) -> anyhow::Result<()> {
        match command {
            ShellCommand::Add(paths) => {
                self.add(&paths).await?;
            }
            ShellCommand::Commit(message) => {
                self.commit(&message).await?;
            }
            ShellCommand::Log => self.log(&LogOptions::default())?,
            ShellCommand::Diff(oid) => self.diff(oid.as_deref())?,
            ShellCommand::Head => match self.current_head()? {
                Some(head) => writeln!(self.writer(), "{head}")?,
                None => writeln!(self.writer(), "No commits yet")?,
            },
            ShellCommand::Exit => {}
        }

        Ok(())
    }
}
