//! JSON file storage implementation.
//!
//! Stores the profile as a single pretty-printed `profile.json` under a
//! root directory. Writes are whole-file; the in-memory profile is the
//! source of truth for the session, so a torn write is recovered by the
//! next successful save.

use std::path::{Path, PathBuf};
use biblequest_core::Profile;
use tokio::fs;
use tracing::debug;

use super::{migrate, ProfileStore, Result};

/// File-based JSON storage backend.
pub struct JsonProfileStore {
    root: PathBuf,
}

impl JsonProfileStore {
    /// Create storage rooted at `root`, creating the directory if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    fn profile_path(&self) -> PathBuf {
        self.root.join("profile.json")
    }
}

#[async_trait::async_trait]
impl ProfileStore for JsonProfileStore {
    async fn load(&self) -> Result<Option<Profile>> {
        let path = self.profile_path();
        match fs::read_to_string(&path).await {
            Ok(json) => {
                let stored = serde_json::from_str(&json)?;
                let profile = migrate(stored)?;
                debug!(path = %path.display(), "profile loaded");
                Ok(Some(profile))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&mut self, profile: &Profile) -> Result<()> {
        let json = serde_json::to_string_pretty(profile)?;
        fs::write(self.profile_path(), json.as_bytes()).await?;
        debug!("profile saved");
        Ok(())
    }

    async fn clear(&mut self) -> Result<()> {
        fs::remove_file(self.profile_path()).await.or_else(|e| {
            if e.kind() == std::io::ErrorKind::NotFound { Ok(()) } else { Err(e) }
        })?;
        Ok(())
    }
}
