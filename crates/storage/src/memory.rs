//! In-memory storage backend.

use biblequest_core::Profile;
use super::{ProfileStore, Result};

/// In-process store, used by tests and by callers that opt out of
/// persistence.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    profile: Option<Profile>,
}

impl MemoryProfileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a profile.
    pub fn with_profile(profile: Profile) -> Self {
        Self { profile: Some(profile) }
    }
}

#[async_trait::async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn load(&self) -> Result<Option<Profile>> {
        Ok(self.profile.clone())
    }

    async fn save(&mut self, profile: &Profile) -> Result<()> {
        self.profile = Some(profile.clone());
        Ok(())
    }

    async fn clear(&mut self) -> Result<()> {
        self.profile = None;
        Ok(())
    }
}
