use std::collections::{HashMap, HashSet};

use chrono::{NaiveTime, Timelike};
use uuid::Uuid;

use crate::database::models::{AvailabilitySlot, SlotCandidate, TimeSlotCategory};
use crate::services::round_pct;

/// Minimum share of active members that must overlap on a (day, category)
/// pair before it is worth proposing as a meeting window.
const ATTENDANCE_THRESHOLD: f64 = 0.6;

const MAX_CANDIDATES: usize = 3;

pub fn categorize(start: NaiveTime) -> TimeSlotCategory {
    match start.hour() {
        8..=11 => TimeSlotCategory::Morning,
        14..=17 => TimeSlotCategory::Afternoon,
        19..=23 => TimeSlotCategory::Evening,
        _ => TimeSlotCategory::Morning,
    }
}

/// Proposes up to three meeting windows for one canonical week of slots.
///
/// A member filing several slots on the same (day, category) pair counts
/// once. Qualifying pairs need at least ceil(active * 0.6) distinct
/// participants and come back sorted by participant count, ties keeping
/// the order their first slot appeared in.
pub fn recommend_slots(slots: &[AvailabilitySlot], active_members: usize) -> Vec<SlotCandidate> {
    if active_members == 0 {
        return Vec::new();
    }
    let threshold = (active_members as f64 * ATTENDANCE_THRESHOLD).ceil() as usize;

    let mut seen_order: Vec<(TimeSlotCategory, i16)> = Vec::new();
    let mut participants: HashMap<(TimeSlotCategory, i16), HashSet<Uuid>> = HashMap::new();
    for slot in slots {
        let key = (categorize(slot.start_time), slot.day_of_week);
        let entry = participants.entry(key).or_default();
        if entry.is_empty() {
            seen_order.push(key);
        }
        entry.insert(slot.user_id);
    }

    let mut candidates: Vec<SlotCandidate> = seen_order
        .into_iter()
        .filter_map(|key| {
            let count = participants[&key].len();
            (count >= threshold).then(|| SlotCandidate {
                day_of_week: key.1,
                slot: key.0,
                participants: count as i64,
                participation: round_pct(count as i64, active_members as i64),
            })
        })
        .collect();

    // stable sort keeps encounter order between equal counts
    candidates.sort_by(|a, b| b.participants.cmp(&a.participants));
    candidates.truncate(MAX_CANDIDATES);
    candidates
}

/// Saturation of filled slots against one-slot-per-player-per-day. Exceeds
/// 100 when players file several slots on a day; the dashboard shows the
/// raw number.
pub fn team_coverage(slot_count: usize, active_members: usize) -> i64 {
    if active_members == 0 {
        return 0;
    }
    round_pct(slot_count as i64, (active_members * 7) as i64)
}
