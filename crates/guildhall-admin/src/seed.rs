//! The starter dataset a fresh admin panel begins with.

use chrono::NaiveDate;
use guildhall_core::{
    Cadence, Challenge, QuestTemplate, Stat, Verification, Visibility,
};

fn day(year: i32, month: u32, dom: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dom).unwrap_or_default()
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| (*t).to_string()).collect()
}

/// The four quest templates and two challenges every session starts with,
/// so a first render has rows to show.
#[must_use]
pub fn starter_data() -> (Vec<QuestTemplate>, Vec<Challenge>) {
    let quests = vec![
        QuestTemplate {
            id: "qt1".to_string(),
            title: "Morning Meditation".to_string(),
            description: "Meditate for 10 minutes.".to_string(),
            stat_target: Stat::Spirit,
            base_xp: 10,
            cadence: Cadence::Daily,
            verification: Verification::SelfReport,
            tags: tags(&["mindfulness", "daily"]),
        },
        QuestTemplate {
            id: "qt2".to_string(),
            title: "Weekly Fitness Goal".to_string(),
            description: "Complete 3 workouts this week.".to_string(),
            stat_target: Stat::Strength,
            base_xp: 50,
            cadence: Cadence::Weekly,
            verification: Verification::SelfReport,
            tags: tags(&["fitness", "weekly-goal"]),
        },
        QuestTemplate {
            id: "qt3".to_string(),
            title: "Read a Chapter".to_string(),
            description: "Read one chapter of a non-fiction book.".to_string(),
            stat_target: Stat::Mind,
            base_xp: 15,
            cadence: Cadence::Daily,
            verification: Verification::SelfReport,
            tags: tags(&["learning", "reading"]),
        },
        QuestTemplate {
            id: "qt4".to_string(),
            title: "Budget Review".to_string(),
            description: "Review your weekly spending and savings.".to_string(),
            stat_target: Stat::Wealth,
            base_xp: 30,
            cadence: Cadence::Weekly,
            verification: Verification::SelfReport,
            tags: tags(&["finance", "planning"]),
        },
    ];

    let challenges = vec![
        Challenge {
            id: "ch1".to_string(),
            title: "Global Meditation Streak".to_string(),
            description: "All players contribute to a global meditation streak for 7 days."
                .to_string(),
            stat_target: Stat::Spirit,
            goal_count: 10_000,
            start_at: day(2024, 8, 1),
            end_at: day(2024, 8, 8),
            visibility: Visibility::Public,
        },
        Challenge {
            id: "ch2".to_string(),
            title: "Strength Guild War".to_string(),
            description: "Guilds compete to see who can complete the most Strength quests."
                .to_string(),
            stat_target: Stat::Strength,
            goal_count: 500,
            start_at: day(2024, 8, 5),
            end_at: day(2024, 8, 12),
            visibility: Visibility::Guild,
        },
    ];

    (quests, challenges)
}
