//! Declarative achievement unlock rules.
//!
//! Each rule pairs a catalog id with a predicate over the profile. The
//! whole table is evaluated after every mutation against the
//! post-mutation state, so which operation happened to satisfy a rule is
//! irrelevant. `explorer` has no rule here: its condition (visiting every
//! section of the app) lives in the UI, which unlocks it manually.

use biblequest_core::{catalog_entry, Achievement, Profile, Time};

/// An unlock rule: the achievement id and its condition.
pub struct AchievementRule {
    /// Catalog id of the achievement this rule unlocks
    pub id: &'static str,

    /// Condition over the post-mutation profile
    pub unlocked: fn(&Profile) -> bool,
}

/// The fixed rule table.
pub const RULES: &[AchievementRule] = &[
    AchievementRule {
        id: "first-game",
        unlocked: |p| p.game_stats.total_games_played >= 1,
    },
    AchievementRule {
        id: "game-master",
        unlocked: |p| p.game_stats.total_games_played >= 7,
    },
    AchievementRule {
        id: "quiz-expert",
        unlocked: |p| p.game_stats.best_game_score >= 100,
    },
    AchievementRule {
        id: "verse-collector",
        unlocked: |p| p.favorite_verses.len() >= 10,
    },
    AchievementRule {
        id: "daily-reader",
        unlocked: |p| p.reading_stats.daily_streak >= 7,
    },
];

/// Evaluate every rule against `profile` and append any newly satisfied
/// achievements. An id already on the profile is never appended again.
///
/// Returns the achievements unlocked by this evaluation, in rule order.
pub fn evaluate(profile: &mut Profile, now: Time) -> Vec<Achievement> {
    let mut unlocked = Vec::new();
    for rule in RULES {
        if profile.has_achievement(rule.id) || !(rule.unlocked)(profile) {
            continue;
        }
        // Every rule id exists in the catalog; checked by tests.
        if let Some(spec) = catalog_entry(rule.id) {
            let achievement = spec.unlock(now);
            profile.game_stats.achievements.push(achievement.clone());
            unlocked.push(achievement);
        }
    }
    unlocked
}
