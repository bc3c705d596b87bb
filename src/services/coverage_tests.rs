use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::database::models::{AvailabilitySlot, TimeSlotCategory};
use crate::services::coverage::{categorize, recommend_slots, team_coverage};
use crate::services::week::WeekStart;

fn time(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
}

fn slot(user_id: Uuid, day_of_week: i16, start_hour: u32) -> AvailabilitySlot {
    AvailabilitySlot {
        user_id,
        day_of_week,
        start_time: time(start_hour),
        end_time: NaiveTime::from_hms_opt(start_hour.min(21) + 2, 0, 0).unwrap(),
        week_start: WeekStart::for_date(NaiveDate::from_ymd_opt(2025, 8, 4).unwrap()),
    }
}

#[test]
fn start_hours_map_to_their_categories() {
    assert_eq!(categorize(time(8)), TimeSlotCategory::Morning);
    assert_eq!(categorize(time(11)), TimeSlotCategory::Morning);
    assert_eq!(categorize(time(14)), TimeSlotCategory::Afternoon);
    assert_eq!(categorize(time(17)), TimeSlotCategory::Afternoon);
    assert_eq!(categorize(time(19)), TimeSlotCategory::Evening);
    assert_eq!(categorize(time(23)), TimeSlotCategory::Evening);
}

#[test]
fn off_window_start_hours_fall_back_to_morning() {
    assert_eq!(categorize(time(0)), TimeSlotCategory::Morning);
    assert_eq!(categorize(time(7)), TimeSlotCategory::Morning);
    assert_eq!(categorize(time(12)), TimeSlotCategory::Morning);
    assert_eq!(categorize(time(13)), TimeSlotCategory::Morning);
    assert_eq!(categorize(time(18)), TimeSlotCategory::Morning);
}

#[test]
fn no_active_members_means_no_candidates() {
    assert_eq!(recommend_slots(&[], 0), vec![]);

    // even with slots on file, an empty roster proposes nothing
    let stray = slot(Uuid::new_v4(), 2, 19);
    assert_eq!(recommend_slots(&[stray], 0), vec![]);
}

#[test]
fn sixty_percent_of_five_needs_three_participants() {
    let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let (d, e) = (Uuid::new_v4(), Uuid::new_v4());
    let slots = vec![
        // three players free Tuesday evening
        slot(a, 2, 19),
        slot(b, 2, 20),
        slot(c, 2, 19),
        // only two free Wednesday morning
        slot(d, 3, 9),
        slot(e, 3, 10),
    ];

    let candidates = recommend_slots(&slots, 5);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].day_of_week, 2);
    assert_eq!(candidates[0].slot, TimeSlotCategory::Evening);
    assert_eq!(candidates[0].participants, 3);
    assert_eq!(candidates[0].participation, 60);
}

#[test]
fn a_member_counts_once_per_day_and_category() {
    let player = Uuid::new_v4();
    // two evening slots from the same player on the same day
    let slots = vec![slot(player, 5, 19), slot(player, 5, 21)];

    let candidates = recommend_slots(&slots, 1);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].participants, 1);
    assert_eq!(candidates[0].participation, 100);
}

#[test]
fn candidates_are_ranked_by_count_and_capped_at_three() {
    let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let slots = vec![
        slot(a, 1, 9),
        // Friday evening has the best turnout
        slot(a, 5, 19),
        slot(b, 5, 19),
        slot(c, 5, 20),
        slot(a, 2, 14),
        slot(b, 2, 15),
        slot(a, 3, 19),
    ];

    // threshold is ceil(3 * 0.6) = 2, so Monday morning and Thursday
    // evening (one participant each) drop out
    let candidates = recommend_slots(&slots, 3);
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].day_of_week, 5);
    assert_eq!(candidates[0].participants, 3);
    assert_eq!(candidates[1].day_of_week, 2);
    assert_eq!(candidates[1].participants, 2);

    // with a single-member roster all four qualify, but only three survive
    let capped = recommend_slots(&slots, 1);
    assert_eq!(capped.len(), 3);
}

#[test]
fn equal_counts_keep_first_seen_order() {
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    let slots = vec![
        slot(a, 4, 19),
        slot(b, 4, 19),
        slot(a, 6, 9),
        slot(b, 6, 9),
    ];

    let candidates = recommend_slots(&slots, 2);
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].day_of_week, 4);
    assert_eq!(candidates[1].day_of_week, 6);
}

#[test]
fn coverage_is_slots_over_one_per_player_per_day() {
    assert_eq!(team_coverage(35, 5), 100);
    assert_eq!(team_coverage(17, 5), 49);
    assert_eq!(team_coverage(0, 5), 0);
}

#[test]
fn coverage_is_deliberately_uncapped() {
    // two slots per player per day reads as 200%
    assert_eq!(team_coverage(70, 5), 200);
}

#[test]
fn coverage_guards_an_empty_roster() {
    assert_eq!(team_coverage(12, 0), 0);
}
