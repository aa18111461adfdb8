//! Profile model - the single local user's persisted record.

use serde::{Deserialize, Serialize};
use crate::achievement::Achievement;
use crate::Time;

/// Avatars the UI offers during profile setup.
pub const AVAILABLE_AVATARS: &[&str] = &[
    "👦", "👧", "🧒", "👶", "🧑", "👱‍♂️", "👱‍♀️", "🧔",
    "👨‍🦱", "👩‍🦱", "👨‍🦰", "👩‍🦰", "👨‍🦲", "👩‍🦲",
    "🐑", "🕊️", "⭐", "👑", "📖", "🎯", "🏆", "💎",
];

/// The local user's record of identity, activity, and preferences.
///
/// There is exactly one profile per device. Empty identity strings and a
/// zero age mean "not filled in yet"; see [`Profile::is_complete`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// First name (empty until set)
    pub first_name: String,

    /// Last name (empty until set)
    pub last_name: String,

    /// Age in years (0 until set, positive once set)
    pub age: u32,

    /// Home church (empty until set)
    pub church: String,

    /// Chosen avatar emoji, if any
    pub avatar: Option<String>,

    /// Memorized verses, in first-insertion order, no duplicates
    pub favorite_verses: Vec<String>,

    /// Completed lesson ids, in completion order, no duplicates
    pub completed_lessons: Vec<String>,

    /// Mini-game activity and unlocked achievements
    pub game_stats: GameStats,

    /// Bible-reading activity
    pub reading_stats: ReadingStats,

    /// User preferences
    pub preferences: Preferences,

    /// When the profile was created
    pub created_at: Time,

    /// Last mutation timestamp
    pub updated_at: Time,
}

/// Mini-game counters and the unlocked-achievement sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStats {
    /// Games played, across all game types
    pub total_games_played: u32,

    /// Sum of all recorded scores
    pub total_score: u64,

    /// Highest single-game score ever recorded
    pub best_game_score: u32,

    /// Most recently played game
    pub favorite_game: String,

    /// Unlocked achievements, in unlock order, at most one per id
    pub achievements: Vec<Achievement>,
}

/// Bible-reading counters and position.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingStats {
    /// Total reading time in minutes
    pub total_reading_minutes: u32,

    /// Books opened at least once, in first-read order
    pub books_read: Vec<String>,

    /// Book currently being read
    pub current_book: String,

    /// Chapter currently being read (1-based)
    pub current_chapter: u32,

    /// Consecutive days with reading activity
    pub daily_streak: u32,
}

/// User preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Preferred Bible translation
    pub preferred_translation: String,

    /// Daily memorization goal, in verses
    pub daily_goal_verses: u32,

    /// Whether unlock notifications are shown
    pub notifications_enabled: bool,
}

impl Default for Profile {
    fn default() -> Self {
        let now = chrono::Utc::now();
        Self {
            first_name: String::new(),
            last_name: String::new(),
            age: 0,
            church: String::new(),
            avatar: None,
            favorite_verses: Vec::new(),
            completed_lessons: Vec::new(),
            game_stats: GameStats::default(),
            reading_stats: ReadingStats::default(),
            preferences: Preferences::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            total_games_played: 0,
            total_score: 0,
            best_game_score: 0,
            favorite_game: String::new(),
            achievements: Vec::new(),
        }
    }
}

impl Default for ReadingStats {
    fn default() -> Self {
        Self {
            total_reading_minutes: 0,
            books_read: Vec::new(),
            current_book: "Genèse".to_string(),
            current_chapter: 1,
            daily_streak: 0,
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            preferred_translation: "Louis Segond 1910".to_string(),
            daily_goal_verses: 3,
            notifications_enabled: true,
        }
    }
}

impl Profile {
    /// Whether all four identity fields are filled in.
    pub fn is_complete(&self) -> bool {
        !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && self.age > 0
            && !self.church.is_empty()
    }

    /// Whether an achievement with this id has already been unlocked.
    pub fn has_achievement(&self, id: &str) -> bool {
        self.game_stats.achievements.iter().any(|a| a.id == id)
    }

    /// Achievements in the given category, in unlock order.
    pub fn achievements_by_category(
        &self,
        category: crate::AchievementCategory,
    ) -> Vec<&Achievement> {
        self.game_stats
            .achievements
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }
}
