use crate::areas::repository::Repository;
use crate::artifacts::index::EMPTY_INDEX;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Create the repository layout, leaving any existing state untouched
    pub async fn init(&self) -> anyhow::Result<()> {
        let reinitialized = self.is_initialized();

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .lit/objects directory")?;

        Self::create_if_missing(&self.refs().head_path(), b"")
            .context("Failed to create .lit/HEAD file")?;

        let index = self.index();
        let index = index.lock().await;
        Self::create_if_missing(index.path(), EMPTY_INDEX.as_bytes())
            .context("Failed to create .lit/index file")?;

        if reinitialized {
            tracing::info!(path = %self.path().display(), "repository already initialized");
            writeln!(
                self.writer(),
                "Reinitialized existing lit repository in {}",
                self.lit_path().display()
            )?;
        } else {
            tracing::info!(path = %self.path().display(), "initialized repository");
            writeln!(
                self.writer(),
                "Initialized empty lit repository in {}",
                self.lit_path().display()
            )?;
        }

        Ok(())
    }

    fn create_if_missing(path: &Path, content: &[u8]) -> std::io::Result<()> {
        match fs::OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(mut file) => file.write_all(content),
            Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
            Err(err) => Err(err),
        }
    }
}
