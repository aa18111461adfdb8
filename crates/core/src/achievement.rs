//! Achievement catalog and unlocked-achievement record.

use serde::{Deserialize, Serialize};
use crate::Time;

/// Achievement category for grouping in the profile view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    /// Bible-reading milestones
    Reading,
    /// Mini-game milestones
    Games,
    /// Lesson and memorization milestones
    Learning,
    /// Streak and habit milestones
    Consistency,
}

impl AchievementCategory {
    /// Display name for the profile view.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Reading => "Lecture",
            Self::Games => "Jeux",
            Self::Learning => "Apprentissage",
            Self::Consistency => "Régularité",
        }
    }
}

/// A catalog entry: an achievement that can be unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementSpec {
    /// Stable identifier, unique within the catalog
    pub id: &'static str,

    /// Display title
    pub title: &'static str,

    /// How to unlock it, phrased for the child
    pub description: &'static str,

    /// Icon emoji
    pub icon: &'static str,

    /// Grouping category
    pub category: AchievementCategory,
}

impl AchievementSpec {
    /// Materialize an unlocked achievement from this catalog entry.
    pub fn unlock(&self, at: Time) -> Achievement {
        Achievement {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            category: self.category,
            unlocked_at: at,
        }
    }
}

/// An unlocked achievement recorded on the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Catalog id
    pub id: String,

    /// Display title
    pub title: String,

    /// Description
    pub description: String,

    /// Icon emoji
    pub icon: String,

    /// Grouping category
    pub category: AchievementCategory,

    /// When it was first unlocked
    pub unlocked_at: Time,
}

/// The fixed achievement catalog.
pub const CATALOG: &[AchievementSpec] = &[
    AchievementSpec {
        id: "first-game",
        title: "Premier Jeu",
        description: "Tu as joué à ton premier jeu biblique !",
        icon: "🎮",
        category: AchievementCategory::Games,
    },
    AchievementSpec {
        id: "game-master",
        title: "Maître des Jeux",
        description: "Tu as joué à tous les jeux disponibles !",
        icon: "🏆",
        category: AchievementCategory::Games,
    },
    AchievementSpec {
        id: "verse-collector",
        title: "Collectionneur de Versets",
        description: "Tu as mémorisé 10 versets !",
        icon: "📚",
        category: AchievementCategory::Learning,
    },
    AchievementSpec {
        id: "daily-reader",
        title: "Lecteur Quotidien",
        description: "Tu as lu la Bible 7 jours de suite !",
        icon: "📖",
        category: AchievementCategory::Consistency,
    },
    AchievementSpec {
        id: "explorer",
        title: "Explorateur",
        description: "Tu as visité toutes les sections du site !",
        icon: "🗺️",
        category: AchievementCategory::Learning,
    },
    AchievementSpec {
        id: "quiz-expert",
        title: "Expert en Quiz",
        description: "Tu as obtenu 100% à un quiz biblique !",
        icon: "🧠",
        category: AchievementCategory::Games,
    },
];

/// Look up a catalog entry by id.
pub fn catalog_entry(id: &str) -> Option<&'static AchievementSpec> {
    CATALOG.iter().find(|spec| spec.id == id)
}
