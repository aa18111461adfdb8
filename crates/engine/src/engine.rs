//! The profile progress engine.

use biblequest_core::{
    catalog_entry, Achievement, AchievementCategory, LevelInfo, Profile,
};
use biblequest_storage::{ProfileStore, StorageError};
use chrono::Utc;
use tracing::{info, warn};

use crate::rules;

/// Errors surfaced by engine operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Input rejected by a precondition check; state is unchanged.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Persistence failed; the in-memory mutation stands.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Partial identity update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct IdentityUpdate {
    /// New first name
    pub first_name: Option<String>,
    /// New last name
    pub last_name: Option<String>,
    /// New age in years
    pub age: Option<u32>,
    /// New home church
    pub church: Option<String>,
    /// New avatar emoji
    pub avatar: Option<String>,
}

/// Partial preferences update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PreferencesUpdate {
    /// New preferred translation
    pub preferred_translation: Option<String>,
    /// New daily memorization goal
    pub daily_goal_verses: Option<u32>,
    /// Toggle unlock notifications
    pub notifications_enabled: Option<bool>,
}

/// Owns the profile record and applies all mutations to it.
///
/// Every mutating operation is a single read-modify-write step: validate
/// the input, apply the change, evaluate the achievement rules against
/// the post-mutation profile, then save. Exclusive access is enforced by
/// `&mut self`; callers that share the engine across tasks wrap it in a
/// `tokio::sync::Mutex`.
///
/// A save failure is returned as [`EngineError::Storage`] but does not
/// roll back the in-memory profile, which stays authoritative for the
/// session.
pub struct ProgressEngine<S: ProfileStore> {
    profile: Profile,
    store: S,
}

impl<S: ProfileStore> ProgressEngine<S> {
    /// Hydrate the engine from the store, starting fresh if nothing was
    /// ever saved.
    pub async fn load(store: S) -> Result<Self> {
        let profile = store.load().await?.unwrap_or_default();
        Ok(Self { profile, store })
    }

    /// The current profile.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Whether all four identity fields are filled in.
    pub fn is_complete(&self) -> bool {
        self.profile.is_complete()
    }

    /// Current level state, recomputed fresh from the counters.
    pub fn level_info(&self) -> LevelInfo {
        self.profile.level_info()
    }

    /// Number of unlocked achievements.
    pub fn total_achievements(&self) -> usize {
        self.profile.game_stats.achievements.len()
    }

    /// Unlocked achievements in the given category, in unlock order.
    pub fn achievements_by_category(&self, category: AchievementCategory) -> Vec<&Achievement> {
        self.profile.achievements_by_category(category)
    }

    /// Record a finished game.
    ///
    /// Bumps the play and score counters and remembers the game as the
    /// most recently played. Returns any achievements this unlocked.
    pub async fn record_game_played(&mut self, game_id: &str, score: u32) -> Result<Vec<Achievement>> {
        non_empty(game_id, "game id")?;

        let stats = &mut self.profile.game_stats;
        stats.total_games_played += 1;
        stats.total_score += u64::from(score);
        stats.best_game_score = stats.best_game_score.max(score);
        stats.favorite_game = game_id.to_string();

        self.commit().await
    }

    /// Record reading activity: time spent and the new position.
    ///
    /// The book joins `books_read` on first visit; re-reading a book does
    /// not duplicate it.
    pub async fn record_reading_progress(
        &mut self,
        book: &str,
        chapter: u32,
        minutes: u32,
    ) -> Result<Vec<Achievement>> {
        non_empty(book, "book")?;
        if chapter == 0 {
            return Err(EngineError::Validation("chapter must be at least 1".into()));
        }

        let stats = &mut self.profile.reading_stats;
        stats.total_reading_minutes += minutes;
        stats.current_book = book.to_string();
        stats.current_chapter = chapter;
        if !stats.books_read.iter().any(|b| b == book) {
            stats.books_read.push(book.to_string());
        }

        self.commit().await
    }

    /// Set the current daily reading streak.
    ///
    /// The calendar arithmetic lives in the caller; the engine only
    /// records the result. Zero resets the streak.
    pub async fn record_daily_streak(&mut self, days: u32) -> Result<Vec<Achievement>> {
        self.profile.reading_stats.daily_streak = days;
        self.commit().await
    }

    /// Mark a lesson as completed. Completing it again is a no-op.
    pub async fn complete_lesson(&mut self, lesson_id: &str) -> Result<Vec<Achievement>> {
        non_empty(lesson_id, "lesson id")?;

        if self.profile.completed_lessons.iter().any(|l| l == lesson_id) {
            return Ok(Vec::new());
        }
        self.profile.completed_lessons.push(lesson_id.to_string());

        self.commit().await
    }

    /// Add a verse to the favorites. Adding a verse twice is a no-op.
    pub async fn add_favorite_verse(&mut self, verse: &str) -> Result<Vec<Achievement>> {
        non_empty(verse, "verse")?;

        if self.profile.favorite_verses.iter().any(|v| v == verse) {
            return Ok(Vec::new());
        }
        self.profile.favorite_verses.push(verse.to_string());

        self.commit().await
    }

    /// Remove a verse from the favorites. Removing an absent verse is a
    /// no-op.
    pub async fn remove_favorite_verse(&mut self, verse: &str) -> Result<Vec<Achievement>> {
        non_empty(verse, "verse")?;

        let before = self.profile.favorite_verses.len();
        self.profile.favorite_verses.retain(|v| v != verse);
        if self.profile.favorite_verses.len() == before {
            return Ok(Vec::new());
        }

        self.commit().await
    }

    /// Apply a partial identity update.
    pub async fn update_identity(&mut self, update: IdentityUpdate) -> Result<()> {
        if let Some(first_name) = &update.first_name {
            non_empty(first_name, "first name")?;
        }
        if let Some(last_name) = &update.last_name {
            non_empty(last_name, "last name")?;
        }
        if let Some(church) = &update.church {
            non_empty(church, "church")?;
        }
        if let Some(avatar) = &update.avatar {
            non_empty(avatar, "avatar")?;
        }
        if update.age == Some(0) {
            return Err(EngineError::Validation("age must be at least 1".into()));
        }

        let profile = &mut self.profile;
        if let Some(v) = update.first_name {
            profile.first_name = v;
        }
        if let Some(v) = update.last_name {
            profile.last_name = v;
        }
        if let Some(v) = update.age {
            profile.age = v;
        }
        if let Some(v) = update.church {
            profile.church = v;
        }
        if let Some(v) = update.avatar {
            profile.avatar = Some(v);
        }

        self.commit().await?;
        Ok(())
    }

    /// Apply a partial preferences update.
    pub async fn update_preferences(&mut self, update: PreferencesUpdate) -> Result<()> {
        if let Some(translation) = &update.preferred_translation {
            non_empty(translation, "translation")?;
        }
        if update.daily_goal_verses == Some(0) {
            return Err(EngineError::Validation(
                "daily goal must be at least 1 verse".into(),
            ));
        }

        let prefs = &mut self.profile.preferences;
        if let Some(v) = update.preferred_translation {
            prefs.preferred_translation = v;
        }
        if let Some(v) = update.daily_goal_verses {
            prefs.daily_goal_verses = v;
        }
        if let Some(v) = update.notifications_enabled {
            prefs.notifications_enabled = v;
        }

        self.commit().await?;
        Ok(())
    }

    /// Unlock a catalog achievement directly, for conditions the profile
    /// cannot express (e.g. `explorer`, tracked by the UI's navigation).
    ///
    /// Unknown ids are rejected; an already-unlocked id is silently
    /// absorbed and returns nothing.
    pub async fn unlock_achievement(&mut self, id: &str) -> Result<Vec<Achievement>> {
        let spec = catalog_entry(id)
            .ok_or_else(|| EngineError::Validation(format!("unknown achievement id: {id}")))?;

        if self.profile.has_achievement(id) {
            return Ok(Vec::new());
        }

        let achievement = spec.unlock(Utc::now());
        self.profile
            .game_stats
            .achievements
            .push(achievement.clone());
        info!(id = %achievement.id, "achievement unlocked");

        let mut unlocked = self.commit().await?;
        unlocked.insert(0, achievement);
        Ok(unlocked)
    }

    /// Replace the profile with a default-constructed one and persist it.
    /// Irreversible; the UI confirms with the user before calling this.
    pub async fn reset(&mut self) -> Result<()> {
        self.profile = Profile::default();
        warn!("profile reset to defaults");
        self.store.save(&self.profile).await?;
        Ok(())
    }

    /// Shared tail of every mutation: stamp, evaluate rules, persist.
    async fn commit(&mut self) -> Result<Vec<Achievement>> {
        let now = Utc::now();
        self.profile.updated_at = now;

        let unlocked = rules::evaluate(&mut self.profile, now);
        for achievement in &unlocked {
            info!(id = %achievement.id, "achievement unlocked");
        }

        self.store.save(&self.profile).await?;
        Ok(unlocked)
    }
}

fn non_empty(value: &str, field: &'static str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EngineError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use biblequest_storage::MemoryProfileStore;

    async fn engine() -> ProgressEngine<MemoryProfileStore> {
        ProgressEngine::load(MemoryProfileStore::new()).await.unwrap()
    }

    fn achievement_ids(profile: &Profile) -> Vec<&str> {
        profile
            .game_stats
            .achievements
            .iter()
            .map(|a| a.id.as_str())
            .collect()
    }

    #[tokio::test]
    async fn test_perfect_quiz_from_default_profile() {
        let mut engine = engine().await;
        let unlocked = engine.record_game_played("quiz", 100).await.unwrap();

        let profile = engine.profile();
        assert_eq!(profile.game_stats.total_games_played, 1);
        assert_eq!(profile.game_stats.total_score, 100);
        assert_eq!(profile.game_stats.favorite_game, "quiz");

        let ids: Vec<&str> = unlocked.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["first-game", "quiz-expert"]);
        assert_eq!(achievement_ids(profile), vec!["first-game", "quiz-expert"]);

        let info = engine.level_info();
        assert_eq!(info.level, 2);
        assert_eq!(info.progress, 0);
        assert_eq!(info.next_level_at, 100);
    }

    #[tokio::test]
    async fn test_seven_games_unlock_each_achievement_once() {
        let mut engine = engine().await;
        for _ in 0..7 {
            engine.record_game_played("x", 0).await.unwrap();
        }

        let profile = engine.profile();
        assert_eq!(profile.game_stats.total_games_played, 7);
        assert_eq!(achievement_ids(profile), vec!["first-game", "game-master"]);
    }

    #[tokio::test]
    async fn test_completing_a_lesson_twice_counts_once() {
        let mut engine = engine().await;
        engine.complete_lesson("l1").await.unwrap();
        engine.complete_lesson("l1").await.unwrap();

        assert_eq!(engine.profile().completed_lessons, vec!["l1"]);
        assert_eq!(engine.profile().total_xp(), 50);
    }

    #[tokio::test]
    async fn test_reading_progress_updates_position_and_set() {
        let mut engine = engine().await;
        engine.record_reading_progress("Genèse", 3, 10).await.unwrap();
        engine.record_reading_progress("Exode", 1, 5).await.unwrap();
        engine.record_reading_progress("Genèse", 4, 5).await.unwrap();

        let stats = &engine.profile().reading_stats;
        assert_eq!(stats.total_reading_minutes, 20);
        assert_eq!(stats.current_book, "Genèse");
        assert_eq!(stats.current_chapter, 4);
        assert_eq!(stats.books_read, vec!["Genèse", "Exode"]);
    }

    #[tokio::test]
    async fn test_favorite_verse_set_semantics() {
        let mut engine = engine().await;
        engine.add_favorite_verse("Jean 3:16").await.unwrap();
        engine.add_favorite_verse("Jean 3:16").await.unwrap();
        assert_eq!(engine.profile().favorite_verses, vec!["Jean 3:16"]);

        engine.remove_favorite_verse("Psaume 23:1").await.unwrap();
        assert_eq!(engine.profile().favorite_verses, vec!["Jean 3:16"]);

        engine.remove_favorite_verse("Jean 3:16").await.unwrap();
        assert!(engine.profile().favorite_verses.is_empty());
    }

    #[tokio::test]
    async fn test_ten_verses_unlock_verse_collector() {
        let mut engine = engine().await;
        for i in 0..10 {
            engine.add_favorite_verse(&format!("Verse {i}")).await.unwrap();
        }
        assert!(engine.profile().has_achievement("verse-collector"));

        // Re-adding the tenth verse never duplicates the unlock.
        engine.add_favorite_verse("Verse 9").await.unwrap();
        assert_eq!(engine.total_achievements(), 1);
    }

    #[tokio::test]
    async fn test_daily_streak_unlocks_daily_reader() {
        let mut engine = engine().await;
        engine.record_daily_streak(6).await.unwrap();
        assert!(!engine.profile().has_achievement("daily-reader"));

        let unlocked = engine.record_daily_streak(7).await.unwrap();
        assert_eq!(unlocked.len(), 1);
        assert_eq!(unlocked[0].id, "daily-reader");

        // Streak resets do not revoke the unlock.
        engine.record_daily_streak(0).await.unwrap();
        assert!(engine.profile().has_achievement("daily-reader"));
    }

    #[tokio::test]
    async fn test_counters_are_monotonic_across_operations() {
        let mut engine = engine().await;
        let mut last = (0u32, 0u64, 0u32, 0usize);
        let ops: [&str; 6] = ["game", "read", "lesson", "game", "lesson", "read"];
        for (i, op) in ops.iter().enumerate() {
            match *op {
                "game" => {
                    engine.record_game_played("quiz", 30).await.unwrap();
                }
                "read" => {
                    engine.record_reading_progress("Genèse", 1, 4).await.unwrap();
                }
                _ => {
                    engine.complete_lesson(&format!("l{i}")).await.unwrap();
                }
            }
            let p = engine.profile();
            let current = (
                p.game_stats.total_games_played,
                p.game_stats.total_score,
                p.reading_stats.total_reading_minutes,
                p.completed_lessons.len(),
            );
            assert!(current.0 >= last.0);
            assert!(current.1 >= last.1);
            assert!(current.2 >= last.2);
            assert!(current.3 >= last.3);
            last = current;
        }
    }

    #[tokio::test]
    async fn test_validation_rejections_leave_state_unchanged() {
        let mut engine = engine().await;
        engine.record_game_played("quiz", 10).await.unwrap();
        let before = profile_snapshot(engine.profile());

        assert!(matches!(
            engine.record_game_played("", 10).await,
            Err(EngineError::Validation(_))
        ));
        assert!(matches!(
            engine.record_reading_progress("Genèse", 0, 5).await,
            Err(EngineError::Validation(_))
        ));
        assert!(matches!(
            engine.record_reading_progress("", 1, 5).await,
            Err(EngineError::Validation(_))
        ));
        assert!(matches!(
            engine.complete_lesson("").await,
            Err(EngineError::Validation(_))
        ));
        assert!(matches!(
            engine
                .update_identity(IdentityUpdate { age: Some(0), ..Default::default() })
                .await,
            Err(EngineError::Validation(_))
        ));
        assert!(matches!(
            engine
                .update_preferences(PreferencesUpdate {
                    daily_goal_verses: Some(0),
                    ..Default::default()
                })
                .await,
            Err(EngineError::Validation(_))
        ));

        assert_eq!(profile_snapshot(engine.profile()), before);
    }

    #[tokio::test]
    async fn test_identity_update_drives_is_complete() {
        let mut engine = engine().await;
        assert!(!engine.is_complete());

        engine
            .update_identity(IdentityUpdate {
                first_name: Some("Jean".into()),
                last_name: Some("Dupont".into()),
                age: Some(12),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(!engine.is_complete());

        engine
            .update_identity(IdentityUpdate {
                church: Some("Église de la Paix".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(engine.is_complete());
    }

    #[tokio::test]
    async fn test_manual_unlock_is_idempotent_and_checked() {
        let mut engine = engine().await;

        let first = engine.unlock_achievement("explorer").await.unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].id, "explorer");

        let second = engine.unlock_achievement("explorer").await.unwrap();
        assert!(second.is_empty());
        assert_eq!(engine.total_achievements(), 1);

        assert!(matches!(
            engine.unlock_achievement("no-such-id").await,
            Err(EngineError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_achievements_by_category() {
        let mut engine = engine().await;
        engine.record_game_played("quiz", 100).await.unwrap();
        engine.unlock_achievement("explorer").await.unwrap();

        assert_eq!(engine.achievements_by_category(AchievementCategory::Games).len(), 2);
        assert_eq!(engine.achievements_by_category(AchievementCategory::Learning).len(), 1);
        assert!(engine.achievements_by_category(AchievementCategory::Reading).is_empty());
    }

    #[tokio::test]
    async fn test_reset_restores_defaults_and_persists() {
        let store = MemoryProfileStore::new();
        let mut engine = ProgressEngine::load(store).await.unwrap();
        engine.record_game_played("quiz", 100).await.unwrap();
        engine.reset().await.unwrap();

        assert_eq!(engine.profile().game_stats.total_games_played, 0);
        assert_eq!(engine.total_achievements(), 0);
        assert_eq!(engine.level_info().level, 1);
    }

    #[tokio::test]
    async fn test_engine_hydrates_from_store() {
        let mut seeded = Profile::default();
        seeded.game_stats.total_games_played = 6;
        let store = MemoryProfileStore::with_profile(seeded);

        let mut engine = ProgressEngine::load(store).await.unwrap();
        let unlocked = engine.record_game_played("quiz", 0).await.unwrap();

        // Seventh game overall; both game achievements fire now because
        // the seeded profile never ran the rules.
        let ids: Vec<&str> = unlocked.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["first-game", "game-master"]);
    }

    #[tokio::test]
    async fn test_save_failure_keeps_in_memory_mutation() {
        struct FailingStore;

        #[async_trait::async_trait]
        impl biblequest_storage::ProfileStore for FailingStore {
            async fn load(&self) -> biblequest_storage::Result<Option<Profile>> {
                Ok(None)
            }
            async fn save(&mut self, _profile: &Profile) -> biblequest_storage::Result<()> {
                Err(StorageError::Other("disk full".into()))
            }
            async fn clear(&mut self) -> biblequest_storage::Result<()> {
                Ok(())
            }
        }

        let mut engine = ProgressEngine::load(FailingStore).await.unwrap();
        let err = engine.record_game_played("quiz", 40).await.unwrap_err();
        assert!(matches!(err, EngineError::Storage(_)));

        // The session state is authoritative despite the failed save.
        assert_eq!(engine.profile().game_stats.total_games_played, 1);
        assert_eq!(engine.profile().game_stats.total_score, 40);
    }

    fn profile_snapshot(profile: &Profile) -> String {
        // updated_at moves only on successful mutations, so it is part of
        // the "unchanged" assertion.
        format!("{profile:?}")
    }
}
