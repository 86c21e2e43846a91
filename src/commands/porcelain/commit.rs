use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::LitError;
use std::io::Write;

impl Repository {
    /// Snapshot the staging index into a new commit on top of HEAD
    ///
    /// An empty index is allowed and yields a commit with no files. If moving
    /// HEAD fails after the commit object was stored, the object is left
    /// unreferenced in the store.
    pub async fn commit(&self, message: &str) -> anyhow::Result<ObjectId> {
        self.ensure_initialized()?;

        let message = message.trim().to_string();
        if message.is_empty() {
            return Err(LitError::EmptyMessage.into());
        }

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.load()?;

        let parent = self.refs().read_head()?;
        let is_root = match parent {
            Some(_) => "",
            None => "root-commit ",
        };

        let files = index.entries().cloned().collect::<Vec<_>>();
        let commit = Commit::new(Commit::timestamp_from_env(), message, files, parent);
        let commit_id = self.database().store(&commit)?;
        self.refs().update_head(&commit_id)?;

        index.clear();
        index.write_updates()?;

        tracing::info!(oid = %commit_id, files = commit.files().len(), "created commit");

        // the commit is already recorded, so losing the summary is not a failure
        if let Err(err) = writeln!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            commit_id.to_short_oid(),
            commit.short_message()
        ) {
            tracing::warn!(%err, oid = %commit_id, "unable to print commit summary");
        }

        Ok(commit_id)
    }

    /// The commit HEAD points to, `None` before the first commit
    pub fn current_head(&self) -> anyhow::Result<Option<ObjectId>> {
        Ok(self.refs().read_head()?)
    }
}
