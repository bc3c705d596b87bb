use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::database::models::{
    AvailabilitySlot, CoachingSession, Event, EventType, Feedback, FeedbackStatus, Outcome,
    TeamMember, TeamRole, TimeSlotCategory, VodReview,
};
use crate::error::AppError;
use crate::services::stats::{TeamDataSource, team_stats};
use crate::services::week::WeekStart;

#[derive(Default)]
struct MockSource {
    members: Vec<TeamMember>,
    events: Vec<Event>,
    sessions: Vec<CoachingSession>,
    vods: Vec<VodReview>,
    slots: Vec<AvailabilitySlot>,
    feedbacks: Vec<Feedback>,
    fail_feedbacks: bool,
}

impl TeamDataSource for MockSource {
    async fn members(&self, _team_id: Uuid) -> Result<Vec<TeamMember>, AppError> {
        Ok(self.members.clone())
    }

    async fn events(&self, _team_id: Uuid) -> Result<Vec<Event>, AppError> {
        Ok(self.events.clone())
    }

    async fn coaching_sessions(&self, _team_id: Uuid) -> Result<Vec<CoachingSession>, AppError> {
        Ok(self.sessions.clone())
    }

    async fn vod_reviews(&self, _team_id: Uuid) -> Result<Vec<VodReview>, AppError> {
        Ok(self.vods.clone())
    }

    async fn availability(
        &self,
        _team_id: Uuid,
        week: WeekStart,
    ) -> Result<Vec<AvailabilitySlot>, AppError> {
        // only the canonical current week has slots on file
        Ok(self
            .slots
            .iter()
            .filter(|s| s.week_start == week)
            .cloned()
            .collect())
    }

    async fn feedbacks(&self, _team_id: Uuid) -> Result<Vec<Feedback>, AppError> {
        if self.fail_feedbacks {
            return Err(AppError::DataSource(sqlx::Error::PoolClosed));
        }
        Ok(self.feedbacks.clone())
    }
}

fn now() -> DateTime<Utc> {
    // a Tuesday
    Utc.with_ymd_and_hms(2025, 8, 5, 12, 0, 0).unwrap()
}

fn member(role: TeamRole) -> TeamMember {
    TeamMember {
        user_id: Uuid::new_v4(),
        role,
        display_name: "Player".to_string(),
    }
}

fn roster_of_five() -> Vec<TeamMember> {
    vec![
        member(TeamRole::Capitaine),
        member(TeamRole::Joueur),
        member(TeamRole::Joueur),
        member(TeamRole::Joueur),
        member(TeamRole::Remplacant),
    ]
}

fn slot(user_id: Uuid, at: DateTime<Utc>, day_of_week: i16, start_hour: u32) -> AvailabilitySlot {
    AvailabilitySlot {
        user_id,
        day_of_week,
        start_time: NaiveTime::from_hms_opt(start_hour, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(start_hour.min(21) + 2, 0, 0).unwrap(),
        week_start: WeekStart::for_datetime(at),
    }
}

fn event(title: &str, date_start: DateTime<Utc>) -> Event {
    Event {
        id: Uuid::new_v4(),
        event_type: EventType::Scrim,
        title: title.to_string(),
        date_start,
        date_end: Some(date_start + Duration::hours(2)),
    }
}

fn session(result: Option<&str>, created_at: DateTime<Utc>) -> CoachingSession {
    CoachingSession {
        id: Uuid::new_v4(),
        result: result.map(str::to_string),
        created_at,
        event_title: "Scrim".to_string(),
    }
}

fn vod(notes: Option<&str>) -> VodReview {
    VodReview {
        id: Uuid::new_v4(),
        created_at: now(),
        notes: notes.map(str::to_string),
    }
}

fn feedback(status: FeedbackStatus) -> Feedback {
    Feedback {
        id: Uuid::new_v4(),
        status,
        created_at: now(),
    }
}

#[tokio::test]
async fn snapshot_recommends_the_best_attended_window() {
    let members = roster_of_five();
    let mut slots = Vec::new();
    // three players free Tuesday evening
    for m in members.iter().take(3) {
        slots.push(slot(m.user_id, now(), 2, 19));
    }
    // two free Wednesday morning — below the 60% bar
    for m in members.iter().skip(3) {
        slots.push(slot(m.user_id, now(), 3, 9));
    }

    let source = MockSource {
        members,
        slots,
        ..Default::default()
    };
    let stats = team_stats(&source, Uuid::new_v4(), now()).await.unwrap();

    assert_eq!(stats.recommended_slots.len(), 1);
    let best = &stats.recommended_slots[0];
    assert_eq!(best.day_of_week, 2);
    assert_eq!(best.slot, TimeSlotCategory::Evening);
    assert_eq!(best.participants, 3);
    assert_eq!(best.participation, 60);

    // all five filed at least one slot this week
    assert_eq!(stats.current_week_availabilities, 5);
    assert_eq!(stats.availability_rate, 100);
    assert_eq!(stats.team_coverage, 14); // 5 slots / 35 possible
}

#[tokio::test]
async fn any_failed_read_aborts_the_snapshot() {
    let source = MockSource {
        members: roster_of_five(),
        fail_feedbacks: true,
        ..Default::default()
    };

    let err = team_stats(&source, Uuid::new_v4(), now()).await.unwrap_err();
    assert!(
        matches!(err, AppError::DataSource(_)),
        "expected a data source error, got {err:?}"
    );
}

#[tokio::test]
async fn roster_counts_split_staff_from_players() {
    let mut members = roster_of_five();
    members.push(member(TeamRole::Owner));
    members.push(member(TeamRole::Coach));
    members.push(member(TeamRole::Coach));

    let source = MockSource {
        members,
        ..Default::default()
    };
    let stats = team_stats(&source, Uuid::new_v4(), now()).await.unwrap();

    assert_eq!(stats.total_members, 8);
    assert_eq!(stats.active_members, 5);
    assert_eq!(stats.players_by_role.get("joueur"), Some(&3));
    assert_eq!(stats.players_by_role.get("capitaine"), Some(&1));
    assert_eq!(stats.players_by_role.get("remplacant"), Some(&1));
    assert_eq!(stats.players_by_role.get("coach"), Some(&2));
    assert_eq!(stats.players_by_role.get("owner"), Some(&1));
}

#[tokio::test]
async fn events_split_on_the_reference_time() {
    let events = vec![
        event("past scrim", now() - Duration::days(3)),
        event("this morning", now() - Duration::hours(2)),
        event("tonight", now() + Duration::hours(8)),
    ];

    let source = MockSource {
        events,
        ..Default::default()
    };
    let stats = team_stats(&source, Uuid::new_v4(), now()).await.unwrap();

    assert_eq!(stats.total_events, 3);
    assert_eq!(stats.upcoming_events, 1);
    assert_eq!(stats.past_events, 2);
}

#[tokio::test]
async fn performance_numbers_flow_from_the_classifier() {
    let sessions = vec![
        session(Some("Victoire 13-7"), now() - Duration::days(1)),
        session(Some("victoire"), now() - Duration::days(2)),
        session(Some("défaite"), now() - Duration::days(3)),
        session(Some("annulé"), now() - Duration::days(4)),
        session(Some("nul"), now() - Duration::days(5)),
    ];

    let source = MockSource {
        sessions,
        ..Default::default()
    };
    let stats = team_stats(&source, Uuid::new_v4(), now()).await.unwrap();

    assert_eq!(stats.wins, 2);
    assert_eq!(stats.losses, 2);
    assert_eq!(stats.draws, 1);
    assert_eq!(stats.win_rate, 40);
    assert_eq!(stats.recent_matches.len(), 5);
    assert_eq!(stats.recent_matches[0].outcome, Outcome::Win);
}

#[tokio::test]
async fn only_vods_with_real_notes_count_as_reviewed() {
    let vods = vec![
        vod(None),
        vod(Some("")),
        vod(Some("   ")),
        vod(Some("round 12: mauvaise rotation B")),
    ];

    let source = MockSource {
        vods,
        ..Default::default()
    };
    let stats = team_stats(&source, Uuid::new_v4(), now()).await.unwrap();

    assert_eq!(stats.total_vods, 4);
    assert_eq!(stats.reviewed_vods, 1);
}

#[tokio::test]
async fn pending_feedbacks_are_counted_separately() {
    let feedbacks = vec![
        feedback(FeedbackStatus::Pending),
        feedback(FeedbackStatus::Pending),
        feedback(FeedbackStatus::Reviewed),
        feedback(FeedbackStatus::Resolved),
    ];

    let source = MockSource {
        feedbacks,
        ..Default::default()
    };
    let stats = team_stats(&source, Uuid::new_v4(), now()).await.unwrap();

    assert_eq!(stats.total_feedbacks, 4);
    assert_eq!(stats.pending_feedbacks, 2);
}

#[tokio::test]
async fn empty_roster_produces_zero_rates_not_errors() {
    let stray = slot(Uuid::new_v4(), now(), 2, 19);
    let source = MockSource {
        slots: vec![stray],
        ..Default::default()
    };
    let stats = team_stats(&source, Uuid::new_v4(), now()).await.unwrap();

    assert_eq!(stats.active_members, 0);
    assert_eq!(stats.availability_rate, 0);
    assert_eq!(stats.team_coverage, 0);
    assert!(stats.recommended_slots.is_empty());
}

#[tokio::test]
async fn slots_from_another_week_are_invisible() {
    let members = roster_of_five();
    let last_week = now() - Duration::days(7);
    let slots = members
        .iter()
        .map(|m| slot(m.user_id, last_week, 2, 19))
        .collect();

    let source = MockSource {
        members,
        slots,
        ..Default::default()
    };
    let stats = team_stats(&source, Uuid::new_v4(), now()).await.unwrap();

    assert_eq!(stats.current_week_availabilities, 0);
    assert_eq!(stats.availability_rate, 0);
    assert!(stats.recommended_slots.is_empty());
}
