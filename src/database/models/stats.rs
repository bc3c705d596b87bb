use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classified result of a match session. Classification is total, so there
/// is no "unknown" variant; see `services::outcome`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Loss => write!(f, "loss"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Fixed meeting-time buckets a slot's start hour falls into: [8,12) is
/// morning, [14,18) afternoon, [19,24) evening. Start times outside those
/// windows have always been filed under morning; keep that quirk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlotCategory {
    Morning,
    Afternoon,
    Evening,
}

impl std::fmt::Display for TimeSlotCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeSlotCategory::Morning => write!(f, "morning"),
            TimeSlotCategory::Afternoon => write!(f, "afternoon"),
            TimeSlotCategory::Evening => write!(f, "evening"),
        }
    }
}

/// A (day, time-category) pair proposed as a meeting window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotCandidate {
    /// 0 = Sunday .. 6 = Saturday, matching the client's day picker.
    pub day_of_week: i16,
    pub slot: TimeSlotCategory,
    pub participants: i64,
    /// Share of active members available, rounded percent.
    pub participation: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBucket {
    /// `YYYY-MM` of the coaching session's creation date.
    pub period: String,
    pub wins: i64,
    pub total: i64,
    pub win_rate: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentMatch {
    pub event_title: String,
    pub played_at: DateTime<Utc>,
    pub outcome: Outcome,
}

/// Full dashboard snapshot for one team. Immutable once built; recomputed
/// from scratch on every request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub total_members: i64,
    pub active_members: i64,
    pub players_by_role: BTreeMap<String, i64>,

    pub total_events: i64,
    pub upcoming_events: i64,
    pub past_events: i64,

    pub wins: i64,
    pub losses: i64,
    pub draws: i64,
    pub win_rate: i64,
    pub recent_matches: Vec<RecentMatch>,
    pub performance_over_time: Vec<MonthlyBucket>,

    pub total_vods: i64,
    pub reviewed_vods: i64,

    pub current_week_availabilities: i64,
    pub availability_rate: i64,
    pub recommended_slots: Vec<SlotCandidate>,
    pub team_coverage: i64,

    pub total_feedbacks: i64,
    pub pending_feedbacks: i64,
}
