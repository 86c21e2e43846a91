//! Whole-document reads and writes for HEAD and the index
//!
//! Both files are small and always rewritten in full. Writers hold an
//! exclusive `file-guard` lock while truncating and rewriting; readers hold a
//! shared lock so they never observe a half-written document.

use crate::errors::{LitError, Result};
use file_guard::Lock;
use std::io::{Read, Write};
use std::ops::DerefMut;
use std::path::Path;

/// Read a whole file under a shared lock, `None` if it does not exist
pub(crate) fn read_locked(path: &Path) -> Result<Option<String>> {
    let mut file = match std::fs::OpenOptions::new().read(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(LitError::io(path, err)),
    };
    let mut lock =
        file_guard::lock(&mut file, Lock::Shared, 0, 1).map_err(|err| LitError::io(path, err))?;

    let mut content = String::new();
    lock.deref_mut()
        .read_to_string(&mut content)
        .map_err(|err| LitError::io(path, err))?;

    Ok(Some(content))
}

/// Replace the whole content of a file under an exclusive lock
pub(crate) fn write_locked(path: &Path, content: &[u8]) -> Result<()> {
    // open without truncating: the file must only be emptied once the lock is held
    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|err| LitError::io(path, err))?;
    let mut lock = file_guard::lock(&mut file, Lock::Exclusive, 0, 1)
        .map_err(|err| LitError::io(path, err))?;

    let file = lock.deref_mut();
    file.set_len(0).map_err(|err| LitError::io(path, err))?;
    file.write_all(content)
        .map_err(|err| LitError::io(path, err))?;
    file.sync_all().map_err(|err| LitError::io(path, err))?;

    Ok(())
}
