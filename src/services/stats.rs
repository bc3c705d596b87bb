use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::database::models::{
    AvailabilitySlot, CoachingSession, Event, Feedback, FeedbackStatus, TeamMember, TeamStats,
    VodReview,
};
use crate::error::AppError;
use crate::services::week::WeekStart;
use crate::services::{coverage, performance, round_pct};

/// The six independent reads a snapshot is folded from. The production
/// implementation sits on the sqlx repositories; tests substitute an
/// in-memory source.
#[allow(async_fn_in_trait)]
pub trait TeamDataSource {
    async fn members(&self, team_id: Uuid) -> Result<Vec<TeamMember>, AppError>;
    async fn events(&self, team_id: Uuid) -> Result<Vec<Event>, AppError>;
    async fn coaching_sessions(&self, team_id: Uuid) -> Result<Vec<CoachingSession>, AppError>;
    async fn vod_reviews(&self, team_id: Uuid) -> Result<Vec<VodReview>, AppError>;
    async fn availability(
        &self,
        team_id: Uuid,
        week: WeekStart,
    ) -> Result<Vec<AvailabilitySlot>, AppError>;
    async fn feedbacks(&self, team_id: Uuid) -> Result<Vec<Feedback>, AppError>;
}

/// Builds the full dashboard snapshot for a team.
///
/// The reads have no dependency on each other and run concurrently; the
/// first failure aborts the whole snapshot so callers never see a mix of
/// fresh and missing numbers. `now` is the caller's reference time — the
/// engine itself never consults the wall clock.
pub async fn team_stats<S: TeamDataSource>(
    source: &S,
    team_id: Uuid,
    now: DateTime<Utc>,
) -> Result<TeamStats, AppError> {
    let week = WeekStart::for_datetime(now);

    let (members, events, sessions, vods, slots, feedbacks) = tokio::try_join!(
        source.members(team_id),
        source.events(team_id),
        source.coaching_sessions(team_id),
        source.vod_reviews(team_id),
        source.availability(team_id, week),
        source.feedbacks(team_id),
    )?;

    let mut players_by_role: BTreeMap<String, i64> = BTreeMap::new();
    for member in &members {
        *players_by_role.entry(member.role.to_string()).or_default() += 1;
    }
    let active_members = members.iter().filter(|m| m.role.is_player()).count();

    let upcoming_events = events.iter().filter(|e| e.date_start > now).count() as i64;

    let perf = performance::summarize(&sessions);

    let reviewed_vods = vods.iter().filter(|v| v.is_reviewed()).count() as i64;

    let available_players: HashSet<Uuid> = slots.iter().map(|s| s.user_id).collect();
    let current_week_availabilities = available_players.len() as i64;

    let pending_feedbacks = feedbacks
        .iter()
        .filter(|f| f.status == FeedbackStatus::Pending)
        .count() as i64;

    Ok(TeamStats {
        total_members: members.len() as i64,
        active_members: active_members as i64,
        players_by_role,

        total_events: events.len() as i64,
        upcoming_events,
        past_events: events.len() as i64 - upcoming_events,

        wins: perf.wins,
        losses: perf.losses,
        draws: perf.draws,
        win_rate: perf.win_rate,
        recent_matches: perf.recent_matches,
        performance_over_time: perf.over_time,

        total_vods: vods.len() as i64,
        reviewed_vods,

        current_week_availabilities,
        availability_rate: round_pct(current_week_availabilities, active_members as i64),
        recommended_slots: coverage::recommend_slots(&slots, active_members),
        team_coverage: coverage::team_coverage(slots.len(), active_members),

        total_feedbacks: feedbacks.len() as i64,
        pending_feedbacks,
    })
}
