use crate::areas::repository::Repository;
use crate::artifacts::index::index_entry::IndexEntry;
use anyhow::Context;
use std::path::Path;

impl Repository {
    /// Store each file's content and append one index entry per path
    ///
    /// Entries are appended even when a path is already staged. The index is
    /// only rewritten once every file has been stored.
    pub async fn add(&self, paths: &[String]) -> anyhow::Result<Vec<IndexEntry>> {
        self.ensure_initialized()?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.load()?;

        let mut added = Vec::with_capacity(paths.len());
        for path in paths {
            let path = self
                .workspace()
                .relative_path(Path::new(path))
                .with_context(|| format!("Unable to add {path}"))?;
            let data = self.workspace().read_file(&path)?;

            let oid = self.database().put(&data)?;
            tracing::debug!(path = %path.display(), %oid, "staged file");

            let entry = IndexEntry::new(path, oid);
            index.add(entry.clone());
            added.push(entry);
        }

        index.write_updates()?;

        Ok(added)
    }
}
