//! Notification feed over the achievements sequence.
//!
//! The notification surface shows unlocks one at a time, possibly long
//! after the operation that caused them. The feed is a cursor into the
//! profile's append-only achievements sequence: each drain returns what
//! was appended since the last one, exactly once, in unlock order. It is
//! presentation-only and never writes to the profile.

use biblequest_core::{Achievement, Profile};

/// Cursor over the profile's achievements sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct AchievementFeed {
    seen: usize,
}

impl AchievementFeed {
    /// A feed that will report every achievement on the profile,
    /// including ones unlocked before it was created.
    pub fn new() -> Self {
        Self::default()
    }

    /// A feed that treats the profile's current achievements as already
    /// shown. Used at startup so old unlocks are not re-announced.
    pub fn caught_up(profile: &Profile) -> Self {
        Self { seen: profile.game_stats.achievements.len() }
    }

    /// Achievements appended since the last drain, in unlock order.
    pub fn drain_new(&mut self, profile: &Profile) -> Vec<Achievement> {
        let achievements = &profile.game_stats.achievements;
        let fresh = achievements[self.seen.min(achievements.len())..].to_vec();
        self.seen = achievements.len();
        fresh
    }

    /// Re-arm the feed, e.g. after a profile reset.
    pub fn reset(&mut self) {
        self.seen = 0;
    }
}
