//! File-backed slot storage: one JSON file per slot in the data directory.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::slot::{Slot, SlotStorage};
use crate::types::errors::StorageError;

/// Stores each slot as `<dir>/<slot file name>`.
///
/// Writes go to a sibling `.tmp` file which is then renamed over the target,
/// so a crash mid-write never leaves a truncated slot behind.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Full path of the file backing `slot`.
    pub fn path_for(&self, slot: Slot) -> PathBuf {
        self.dir.join(slot.file_name())
    }

    /// Creates the data directory if needed, private to the current user.
    fn ensure_dir(&self) -> std::io::Result<()> {
        if self.dir.is_dir() {
            return Ok(());
        }
        fs::create_dir_all(&self.dir)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700))?;
        }
        Ok(())
    }

    fn write_atomic(&self, target: &Path, contents: &str) -> std::io::Result<()> {
        let mut tmp_name = target.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp = PathBuf::from(tmp_name);

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&tmp)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp, target).inspect_err(|_| {
            let _ = fs::remove_file(&tmp);
        })
    }
}

impl SlotStorage for FileStorage {
    fn read(&self, slot: Slot) -> Result<Option<String>, StorageError> {
        let path = self.path_for(slot);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed(format!(
                "{}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn write(&self, slot: Slot, contents: &str) -> Result<(), StorageError> {
        self.ensure_dir().map_err(|e| {
            StorageError::WriteFailed(format!(
                "cannot create {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let path = self.path_for(slot);
        self.write_atomic(&path, contents)
            .map_err(|e| StorageError::WriteFailed(format!("{}: {}", path.display(), e)))
    }

    fn describe(&self, slot: Slot) -> String {
        self.path_for(slot).display().to_string()
    }
}
