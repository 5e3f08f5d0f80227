use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{cache::CacheStore, prelude::*};

/// Stores every key as a JSON file in the directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.root.join(key).with_extension("json")
    }

    fn is_entry(path: &Path) -> bool {
        path.is_file() && path.extension().is_some_and(|extension| extension == "json")
    }
}

impl CacheStore for FileStore {
    #[instrument(skip(self), level = "debug")]
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path(key);
        if path.is_file() {
            Ok(Some(
                fs::read_to_string(&path)
                    .with_context(|| format!("failed to read `{}`", path.display()))?,
            ))
        } else {
            Ok(None)
        }
    }

    #[instrument(skip(self, value), level = "debug")]
    fn set(&self, key: &str, value: &str) -> Result {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("failed to create `{}`", self.root.display()))?;
        let path = self.path(key);
        fs::write(&path, value).with_context(|| format!("failed to write `{}`", path.display()))
    }

    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn clear(&self) -> Result {
        if !self.root.is_dir() {
            return Ok(());
        }
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if Self::is_entry(&path) {
                debug!(path = %path.display(), "removing…");
                fs::remove_file(&path)
                    .with_context(|| format!("failed to remove `{}`", path.display()))?;
            }
        }
        Ok(())
    }
}
