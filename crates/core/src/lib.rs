//! BibleQuest core data models.
//!
//! This crate defines the profile record, the achievement catalog, and the
//! level/XP math shared by the progress engine and its storage backends.

#![warn(missing_docs)]

// Profile record and its sections
mod profile;

// Achievement catalog
mod achievement;

// Derived level/XP computation
mod level;

// Re-exports
pub use profile::{Profile, GameStats, ReadingStats, Preferences, AVAILABLE_AVATARS};
pub use achievement::{Achievement, AchievementCategory, AchievementSpec, CATALOG, catalog_entry};
pub use level::LevelInfo;

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
