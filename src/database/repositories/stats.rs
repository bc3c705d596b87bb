use sqlx::PgPool;
use uuid::Uuid;

use crate::database::models::{
    AvailabilitySlot, CoachingSession, Event, Feedback, TeamMember, VodReview,
};
use crate::database::repositories::{
    AvailabilityRepository, CoachingSessionRepository, EventRepository, FeedbackRepository,
    TeamRepository, VodReviewRepository,
};
use crate::error::AppError;
use crate::services::stats::TeamDataSource;
use crate::services::week::WeekStart;

/// Production data source for the stats snapshot: one façade over the six
/// per-aggregate repositories, so the aggregation fan-out has a single
/// injection point.
#[derive(Clone)]
pub struct StatsRepository {
    teams: TeamRepository,
    events: EventRepository,
    sessions: CoachingSessionRepository,
    vods: VodReviewRepository,
    availability: AvailabilityRepository,
    feedbacks: FeedbackRepository,
}

impl StatsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            teams: TeamRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            sessions: CoachingSessionRepository::new(pool.clone()),
            vods: VodReviewRepository::new(pool.clone()),
            availability: AvailabilityRepository::new(pool.clone()),
            feedbacks: FeedbackRepository::new(pool),
        }
    }
}

impl TeamDataSource for StatsRepository {
    async fn members(&self, team_id: Uuid) -> Result<Vec<TeamMember>, AppError> {
        Ok(self.teams.get_team_members(team_id).await?)
    }

    async fn events(&self, team_id: Uuid) -> Result<Vec<Event>, AppError> {
        Ok(self.events.get_events_for_team(team_id).await?)
    }

    async fn coaching_sessions(&self, team_id: Uuid) -> Result<Vec<CoachingSession>, AppError> {
        Ok(self.sessions.get_sessions_for_team(team_id).await?)
    }

    async fn vod_reviews(&self, team_id: Uuid) -> Result<Vec<VodReview>, AppError> {
        Ok(self.vods.get_reviews_for_team(team_id).await?)
    }

    async fn availability(
        &self,
        team_id: Uuid,
        week: WeekStart,
    ) -> Result<Vec<AvailabilitySlot>, AppError> {
        Ok(self.availability.get_slots_for_week(team_id, week).await?)
    }

    async fn feedbacks(&self, team_id: Uuid) -> Result<Vec<Feedback>, AppError> {
        Ok(self.feedbacks.get_feedbacks_for_team(team_id).await?)
    }
}
