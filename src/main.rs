use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use lit::areas::repository::Repository;
use lit::commands::porcelain::log::LogOptions;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "LIT_LOG";

#[derive(Parser)]
#[command(
    name = "lit",
    version = "0.1.0",
    about = "A minimal local version-history engine",
    long_about = "lit records immutable snapshots of files under content-addressed hashes, \
    tracks a linear commit chain and shows line-level differences between a commit and its parent.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        long = "dir",
        global = true,
        help = "Run as if lit was started in this directory"
    )]
    dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .lit directory in the current directory or at the specified path. \
        Running it again on an existing repository leaves its history untouched."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(name = "add", about = "Stage files for the next commit")]
    Add {
        #[arg(required = true, help = "The files to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records every staged file in a new commit on top of HEAD and clears the index."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "log", about = "Show the commit history from HEAD")]
    Log {
        #[arg(long, help = "Show one commit per line")]
        oneline: bool,
    },
    #[command(
        name = "diff",
        about = "Show the changes a commit made relative to its parent",
        long_about = "This command compares every file of a commit with the same path in its parent commit. \
        Defaults to HEAD when no commit is given."
    )]
    Diff {
        #[arg(index = 1, help = "The commit to show")]
        commit: Option<String>,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of an object in the repository. \
        It requires the SHA of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object SHA to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash a file and optionally write it to the object database"
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: String,
    },
    #[command(
        name = "shell",
        about = "Start the interactive shell",
        long_about = "This command reads commands line by line: add <path>, commit <message>, log, \
        diff [digest], head and exit. The repository is initialized on startup if needed."
    )]
    Shell,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let cli = Cli::parse();
    let pwd = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Init { path } => {
            let path = match path {
                Some(path) => pwd.join(path),
                None => pwd,
            };
            let repository = Repository::new(&path, Box::new(std::io::stdout()))?;

            repository.init().await?
        }
        Commands::Add { paths } => {
            let repository = Repository::new(&pwd, Box::new(std::io::stdout()))?;

            repository.add(&paths).await?;
        }
        Commands::Commit { message } => {
            let repository = Repository::new(&pwd, Box::new(std::io::stdout()))?;

            repository.commit(&message).await?;
        }
        Commands::Log { oneline } => {
            let repository = Repository::new(&pwd, Box::new(std::io::stdout()))?;

            repository.log(&LogOptions::new(oneline))?
        }
        Commands::Diff { commit } => {
            let repository = Repository::new(&pwd, Box::new(std::io::stdout()))?;

            repository.diff(commit.as_deref())?
        }
        Commands::CatFile { sha } => {
            let repository = Repository::new(&pwd, Box::new(std::io::stdout()))?;

            repository.cat_file(&sha)?
        }
        Commands::HashObject { write, file } => {
            let repository = Repository::new(&pwd, Box::new(std::io::stdout()))?;

            repository.hash_object(&file, write)?;
        }
        Commands::Shell => {
            let repository = Repository::new(&pwd, Box::new(std::io::stdout()))?;
            if !repository.is_initialized() {
                repository.init().await?;
            }

            let interactive = std::io::stdin().is_terminal();
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            repository.shell(stdin, interactive).await?
        }
    }

    Ok(())
}
