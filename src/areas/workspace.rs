use crate::errors::{LitError, Result};
use bytes::Bytes;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Resolve a user-supplied path to a path relative to the workspace root
    ///
    /// Relative paths are taken from the workspace root, not the process
    /// working directory.
    pub fn relative_path(&self, file_path: &Path) -> Result<PathBuf> {
        let absolute_path = self.path.join(file_path);
        let absolute_path = absolute_path
            .canonicalize()
            .map_err(|err| LitError::io(&absolute_path, err))?;

        absolute_path
            .strip_prefix(self.path.as_ref())
            .map(PathBuf::from)
            .map_err(|_| LitError::OutsideRepository(file_path.to_path_buf()))
    }

    pub fn read_file(&self, file_path: &Path) -> Result<Bytes> {
        let file_path = self.path.join(file_path);

        std::fs::read(&file_path)
            .map(Bytes::from)
            .map_err(|err| LitError::io(&file_path, err))
    }
}
