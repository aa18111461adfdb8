//! Profile progress engine.
//!
//! Records activity on the profile, derives level/XP, and unlocks
//! achievements exactly once when their conditions become true.

#![warn(missing_docs)]

pub mod engine;
pub mod rules;
pub mod feed;

pub use engine::{ProgressEngine, EngineError, IdentityUpdate, PreferencesUpdate};
pub use rules::{AchievementRule, RULES};
pub use feed::AchievementFeed;
