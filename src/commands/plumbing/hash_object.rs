use crate::areas::database::Database;
use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Print the digest of a file, storing its content when `write` is set
    pub fn hash_object(&self, object_path: &str, write: bool) -> anyhow::Result<ObjectId> {
        let object_data = self.workspace().read_file(Path::new(object_path))?;

        let object_id = if write {
            self.ensure_initialized()?;
            self.database().put(&object_data)?
        } else {
            Database::hash(&object_data)
        };

        writeln!(self.writer(), "{}", object_id)?;

        Ok(object_id)
    }
}
