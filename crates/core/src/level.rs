//! Derived level/XP computation.
//!
//! XP is never stored; it is recomputed from the activity counters on
//! every call so it can never go stale against them.

use serde::{Deserialize, Serialize};
use crate::Profile;

/// XP needed to advance one level.
const XP_PER_LEVEL: u64 = 100;

/// XP earned per completed lesson.
const XP_PER_LESSON: u64 = 50;

/// XP earned per minute of reading.
const XP_PER_READING_MINUTE: u64 = 2;

/// Snapshot of the derived level state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelInfo {
    /// Current level (1-based)
    pub level: u64,

    /// XP earned toward the next level, in [0, 100)
    pub progress: u64,

    /// XP needed for the next level
    pub next_level_at: u64,
}

impl Profile {
    /// Total experience derived from game scores, reading time, and lessons.
    pub fn total_xp(&self) -> u64 {
        self.game_stats.total_score
            + u64::from(self.reading_stats.total_reading_minutes) * XP_PER_READING_MINUTE
            + self.completed_lessons.len() as u64 * XP_PER_LESSON
    }

    /// Current level state, recomputed fresh from the counters.
    pub fn level_info(&self) -> LevelInfo {
        let total_xp = self.total_xp();
        LevelInfo {
            level: total_xp / XP_PER_LEVEL + 1,
            progress: total_xp % XP_PER_LEVEL,
            next_level_at: XP_PER_LEVEL,
        }
    }
}
