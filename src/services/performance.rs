use std::collections::BTreeMap;

use crate::database::models::{CoachingSession, MonthlyBucket, Outcome, RecentMatch};
use crate::services::{outcome, round_pct};

/// Months of history the performance chart keeps.
const MAX_BUCKETS: usize = 6;

/// Entries in the recent-form strip.
const RECENT_MATCHES: usize = 10;

#[derive(Debug, Clone)]
pub struct PerformanceSummary {
    pub wins: i64,
    pub losses: i64,
    pub draws: i64,
    pub win_rate: i64,
    pub recent_matches: Vec<RecentMatch>,
    pub over_time: Vec<MonthlyBucket>,
}

/// Classifies every session and rolls the results up by calendar month.
///
/// Buckets key on the session's creation date, not the match date: the
/// chart tracks when results were debriefed. Overall counts cover every
/// session supplied; the recent-form strip takes the first ten in the
/// order given (the repository supplies newest first).
pub fn summarize(sessions: &[CoachingSession]) -> PerformanceSummary {
    let mut wins = 0i64;
    let mut losses = 0i64;
    let mut draws = 0i64;
    let mut buckets: BTreeMap<String, (i64, i64)> = BTreeMap::new();

    for session in sessions {
        let outcome = outcome::classify(session.result.as_deref());
        match outcome {
            Outcome::Win => wins += 1,
            Outcome::Loss => losses += 1,
            Outcome::Draw => draws += 1,
        }

        let period = session.created_at.format("%Y-%m").to_string();
        let entry = buckets.entry(period).or_insert((0, 0));
        entry.1 += 1;
        if outcome == Outcome::Win {
            entry.0 += 1;
        }
    }

    // BTreeMap iteration is already ascending by period key
    let mut over_time: Vec<MonthlyBucket> = buckets
        .into_iter()
        .map(|(period, (bucket_wins, total))| MonthlyBucket {
            period,
            wins: bucket_wins,
            total,
            win_rate: round_pct(bucket_wins, total),
        })
        .collect();
    if over_time.len() > MAX_BUCKETS {
        over_time.drain(..over_time.len() - MAX_BUCKETS);
    }

    let recent_matches = sessions
        .iter()
        .take(RECENT_MATCHES)
        .map(|session| RecentMatch {
            event_title: session.event_title.clone(),
            played_at: session.created_at,
            outcome: outcome::classify(session.result.as_deref()),
        })
        .collect();

    let total = wins + losses + draws;
    PerformanceSummary {
        wins,
        losses,
        draws,
        win_rate: round_pct(wins, total),
        recent_matches,
        over_time,
    }
}
