//! Domain Types
//!
//! This module defines the two record shapes the admin panel manages, plus
//! the closed enums they reference. All of them serialize with the exact
//! wire tags and camelCase field names the rest of the product expects.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Player attribute a quest or challenge is designed to improve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stat {
    /// Physical training and fitness
    Strength,
    /// Learning and focus
    Mind,
    /// Mindfulness and wellbeing
    Spirit,
    /// Finances and savings
    Wealth,
    /// Social connection
    Relation,
}

impl Stat {
    /// Every stat, in declaration order. Used to constrain the advisory
    /// service's structured output to the closed set.
    pub const ALL: [Stat; 5] = [
        Self::Strength,
        Self::Mind,
        Self::Spirit,
        Self::Wealth,
        Self::Relation,
    ];

    /// The wire tag for this stat.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "STRENGTH",
            Self::Mind => "MIND",
            Self::Spirit => "SPIRIT",
            Self::Wealth => "WEALTH",
            Self::Relation => "RELATION",
        }
    }
}

/// How often a quest template recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cadence {
    /// Recurs every day
    Daily,
    /// Recurs every week
    Weekly,
    /// One-off, long-horizon quest
    Epic,
}

/// How completion of a quest is confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verification {
    /// Self-reported by the player. `Self` is reserved in Rust, so the
    /// variant carries an explicit rename to keep the `SELF` wire tag.
    #[serde(rename = "SELF")]
    SelfReport,
    /// Reviewed by another player
    Peer,
    /// Confirmed automatically
    Auto,
}

/// Audience scope of a challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    /// Visible to every player
    Public,
    /// Restricted to one guild
    Guild,
}

/// A reusable definition of a recurring task a player can be assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestTemplate {
    /// Unique identifier, assigned by the store on add
    pub id: String,

    /// Display title
    pub title: String,

    /// What the player is asked to do
    pub description: String,

    /// The stat this quest improves
    pub stat_target: Stat,

    /// XP awarded on completion
    #[serde(rename = "baseXP")]
    pub base_xp: u32,

    /// How often the quest recurs
    pub cadence: Cadence,

    /// How completion is confirmed
    pub verification: Verification,

    /// Free-form labels, may be empty
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A quest template before the store has assigned its identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestTemplateDraft {
    /// Display title
    pub title: String,
    /// What the player is asked to do
    pub description: String,
    /// The stat this quest improves
    pub stat_target: Stat,
    /// XP awarded on completion
    #[serde(rename = "baseXP")]
    pub base_xp: u32,
    /// How often the quest recurs
    pub cadence: Cadence,
    /// How completion is confirmed
    pub verification: Verification,
    /// Free-form labels, may be empty
    #[serde(default)]
    pub tags: Vec<String>,
}

impl QuestTemplateDraft {
    /// Turn the draft into a full record. The record only becomes visible
    /// once it is complete; no partially constructed quest ever enters the
    /// collection.
    #[must_use]
    pub fn into_record(self, id: String) -> QuestTemplate {
        QuestTemplate {
            id,
            title: self.title,
            description: self.description,
            stat_target: self.stat_target,
            base_xp: self.base_xp,
            cadence: self.cadence,
            verification: self.verification,
            tags: self.tags,
        }
    }
}

/// A time-bounded competitive or cooperative event with a numeric goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    /// Unique identifier, assigned by the store on add
    pub id: String,

    /// Display title
    pub title: String,

    /// What the event is about
    pub description: String,

    /// The stat this challenge targets
    pub stat_target: Stat,

    /// Contribution count the event aims for
    pub goal_count: u32,

    /// First day of the event window. Expected to be on or before `end_at`,
    /// but the store does not enforce it; that check belongs to the forms.
    pub start_at: NaiveDate,

    /// Last day of the event window
    pub end_at: NaiveDate,

    /// Who can see and join the event
    pub visibility: Visibility,
}

/// A challenge before the store has assigned its identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDraft {
    /// Display title
    pub title: String,
    /// What the event is about
    pub description: String,
    /// The stat this challenge targets
    pub stat_target: Stat,
    /// Contribution count the event aims for
    pub goal_count: u32,
    /// First day of the event window
    pub start_at: NaiveDate,
    /// Last day of the event window
    pub end_at: NaiveDate,
    /// Who can see and join the event
    pub visibility: Visibility,
}

impl ChallengeDraft {
    /// Turn the draft into a full record.
    #[must_use]
    pub fn into_record(self, id: String) -> Challenge {
        Challenge {
            id,
            title: self.title,
            description: self.description,
            stat_target: self.stat_target,
            goal_count: self.goal_count,
            start_at: self.start_at,
            end_at: self.end_at,
            visibility: self.visibility,
        }
    }
}

/// A quest idea produced by the advisory service. Transient: rendered to the
/// admin, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideSuggestion {
    /// Suggested quest title
    pub title: String,
    /// Suggested quest description
    pub description: String,
    /// The stat the suggestion targets
    pub stat_target: Stat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_wire_tags() {
        for stat in Stat::ALL {
            let tag = serde_json::to_value(stat).unwrap();
            assert_eq!(tag, stat.as_str());
        }
        assert_eq!(serde_json::to_value(Stat::Relation).unwrap(), "RELATION");
    }

    #[test]
    fn verification_wire_tags() {
        assert_eq!(
            serde_json::to_value(Verification::SelfReport).unwrap(),
            "SELF"
        );
        assert_eq!(serde_json::to_value(Verification::Peer).unwrap(), "PEER");
        let back: Verification = serde_json::from_str("\"SELF\"").unwrap();
        assert_eq!(back, Verification::SelfReport);
    }

    #[test]
    fn quest_template_wire_shape() {
        let quest = QuestTemplate {
            id: "qt1".to_string(),
            title: "Morning Meditation".to_string(),
            description: "Meditate for 10 minutes.".to_string(),
            stat_target: Stat::Spirit,
            base_xp: 10,
            cadence: Cadence::Daily,
            verification: Verification::SelfReport,
            tags: vec!["mindfulness".to_string()],
        };

        let value = serde_json::to_value(&quest).unwrap();
        assert_eq!(value["statTarget"], "SPIRIT");
        assert_eq!(value["baseXP"], 10);
        assert_eq!(value["cadence"], "DAILY");

        let back: QuestTemplate = serde_json::from_value(value).unwrap();
        assert_eq!(back, quest);
    }

    #[test]
    fn challenge_dates_are_iso_calendar_days() {
        let challenge = Challenge {
            id: "ch1".to_string(),
            title: "Global Meditation Streak".to_string(),
            description: "All players contribute for 7 days.".to_string(),
            stat_target: Stat::Spirit,
            goal_count: 10_000,
            start_at: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
            end_at: NaiveDate::from_ymd_opt(2024, 8, 8).unwrap(),
            visibility: Visibility::Public,
        };

        let value = serde_json::to_value(&challenge).unwrap();
        assert_eq!(value["startAt"], "2024-08-01");
        assert_eq!(value["endAt"], "2024-08-08");
        assert_eq!(value["goalCount"], 10_000);
        assert_eq!(value["visibility"], "PUBLIC");
    }

    #[test]
    fn draft_produces_fully_populated_record() {
        let draft = QuestTemplateDraft {
            title: "Test".to_string(),
            description: "A test quest.".to_string(),
            stat_target: Stat::Mind,
            base_xp: 5,
            cadence: Cadence::Daily,
            verification: Verification::SelfReport,
            tags: Vec::new(),
        };

        let record = draft.into_record("qt42".to_string());
        assert_eq!(record.id, "qt42");
        assert_eq!(record.title, "Test");
        assert_eq!(record.base_xp, 5);
    }

    #[test]
    fn suggestion_parses_from_service_shape() {
        let json = r#"{"title":"Try a new recipe","description":"Cook something you never made before.","statTarget":"MIND"}"#;
        let suggestion: GuideSuggestion = serde_json::from_str(json).unwrap();
        assert_eq!(suggestion.stat_target, Stat::Mind);
    }
}
