//! BibleQuest CLI - record activity and inspect progress from a terminal.

use anyhow::Result;
use biblequest_core::{Achievement, AchievementCategory};
use biblequest_engine::{IdentityUpdate, PreferencesUpdate, ProgressEngine};
use biblequest_storage::JsonProfileStore;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "biblequest")]
#[command(about = "Bible-study progress and achievements", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the profile
    Profile,
    /// Fill in identity fields
    Setup {
        /// First name
        #[arg(long)]
        first_name: Option<String>,
        /// Last name
        #[arg(long)]
        last_name: Option<String>,
        /// Age in years
        #[arg(long)]
        age: Option<u32>,
        /// Home church
        #[arg(long)]
        church: Option<String>,
        /// Avatar emoji
        #[arg(long)]
        avatar: Option<String>,
    },
    /// Record a finished game
    Play {
        /// Game identifier
        game: String,
        /// Score (100 for a perfect quiz)
        score: u32,
    },
    /// Record reading activity
    Read {
        /// Book name
        book: String,
        /// Chapter (1-based)
        chapter: u32,
        /// Minutes spent
        #[arg(long, default_value = "0")]
        minutes: u32,
    },
    /// Set the daily reading streak
    Streak {
        /// Consecutive days
        days: u32,
    },
    /// Mark a lesson as completed
    Lesson {
        /// Lesson identifier
        id: String,
    },
    /// Manage favorite verses
    Verse {
        #[command(subcommand)]
        action: VerseAction,
    },
    /// Set preferences
    Prefs {
        /// Preferred translation
        #[arg(long)]
        translation: Option<String>,
        /// Daily memorization goal in verses
        #[arg(long)]
        daily_goal: Option<u32>,
        /// Enable or disable unlock notifications
        #[arg(long)]
        notifications: Option<bool>,
    },
    /// Show level and XP
    Level,
    /// List unlocked achievements
    Achievements,
    /// Reset the profile to defaults
    Reset {
        /// Skip the confirmation
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum VerseAction {
    /// Add a verse to the favorites
    Add {
        /// Verse reference or text
        verse: String,
    },
    /// Remove a verse from the favorites
    Remove {
        /// Verse reference or text
        verse: String,
    },
    /// List favorite verses
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .init();

    let cli = Cli::parse();

    let store = JsonProfileStore::new(".biblequest").await?;
    let mut engine = ProgressEngine::load(store).await?;

    match cli.command {
        Commands::Profile => {
            let profile = engine.profile();
            let name = if profile.is_complete() {
                format!("{} {}", profile.first_name, profile.last_name)
            } else {
                "(profile incomplete)".to_string()
            };
            println!("{} {}", profile.avatar.as_deref().unwrap_or("🙂"), name);
            println!("Church: {}", profile.church);
            println!(
                "Reading: {} {} ({} min total, streak {})",
                profile.reading_stats.current_book,
                profile.reading_stats.current_chapter,
                profile.reading_stats.total_reading_minutes,
                profile.reading_stats.daily_streak,
            );
            println!(
                "Games: {} played, total score {}",
                profile.game_stats.total_games_played, profile.game_stats.total_score,
            );
            println!("Lessons completed: {}", profile.completed_lessons.len());
            println!("Favorite verses: {}", profile.favorite_verses.len());
        }
        Commands::Setup { first_name, last_name, age, church, avatar } => {
            engine
                .update_identity(IdentityUpdate { first_name, last_name, age, church, avatar })
                .await?;
            if engine.is_complete() {
                println!("Profile complete. Bienvenue !");
            } else {
                println!("Saved. Some identity fields are still missing.");
            }
        }
        Commands::Play { game, score } => {
            let unlocked = engine.record_game_played(&game, score).await?;
            println!("Recorded: {} (score {})", game, score);
            announce(&unlocked);
        }
        Commands::Read { book, chapter, minutes } => {
            let unlocked = engine.record_reading_progress(&book, chapter, minutes).await?;
            println!("Now at {} {}", book, chapter);
            announce(&unlocked);
        }
        Commands::Streak { days } => {
            let unlocked = engine.record_daily_streak(days).await?;
            println!("Streak: {} day(s)", days);
            announce(&unlocked);
        }
        Commands::Lesson { id } => {
            let unlocked = engine.complete_lesson(&id).await?;
            println!("Lesson {} completed", id);
            announce(&unlocked);
        }
        Commands::Verse { action } => match action {
            VerseAction::Add { verse } => {
                let unlocked = engine.add_favorite_verse(&verse).await?;
                println!("Added: {}", verse);
                announce(&unlocked);
            }
            VerseAction::Remove { verse } => {
                engine.remove_favorite_verse(&verse).await?;
                println!("Removed: {}", verse);
            }
            VerseAction::List => {
                for verse in &engine.profile().favorite_verses {
                    println!("📖 {}", verse);
                }
            }
        },
        Commands::Prefs { translation, daily_goal, notifications } => {
            engine
                .update_preferences(PreferencesUpdate {
                    preferred_translation: translation,
                    daily_goal_verses: daily_goal,
                    notifications_enabled: notifications,
                })
                .await?;
            println!("Preferences saved");
        }
        Commands::Level => {
            let info = engine.level_info();
            println!(
                "Level {} — {}/{} XP to the next level",
                info.level, info.progress, info.next_level_at
            );
        }
        Commands::Achievements => {
            for category in [
                AchievementCategory::Reading,
                AchievementCategory::Games,
                AchievementCategory::Learning,
                AchievementCategory::Consistency,
            ] {
                let unlocked = engine.achievements_by_category(category);
                if unlocked.is_empty() {
                    continue;
                }
                println!("{}:", category.display_name());
                for achievement in unlocked {
                    println!(
                        "  {} {} — {}",
                        achievement.icon, achievement.title, achievement.description
                    );
                }
            }
            println!("Total: {}", engine.total_achievements());
        }
        Commands::Reset { yes } => {
            if !yes {
                println!("This erases all progress. Re-run with --yes to confirm.");
                return Ok(());
            }
            engine.reset().await?;
            println!("Profile reset");
        }
    }

    Ok(())
}

fn announce(unlocked: &[Achievement]) {
    for achievement in unlocked {
        println!("🎉 Achievement unlocked: {} {}", achievement.icon, achievement.title);
    }
}
