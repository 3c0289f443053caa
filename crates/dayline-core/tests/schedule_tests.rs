use dayline_core::activity::{Activity, ActivityStatus};
use dayline_core::error::CoreError;
use dayline_core::schedule::Schedule;
use dayline_core::time::{TimeOfDay, Weekday};
use uuid::Uuid;

#[test]
fn test_save_load_round_trip() {
    let mut schedule = Schedule::new("Week");
    let mut activity = Activity::new(
        "Standup",
        TimeOfDay::parse("09:30"),
        TimeOfDay::parse("09:45"),
    );
    activity.days = vec![Weekday::Monday, Weekday::Wednesday];
    activity.notes = "daily sync".into();
    schedule.activities.push(activity);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("week.json");
    schedule.save(&path).unwrap();

    let loaded = Schedule::load(&path).unwrap();
    assert_eq!(loaded, schedule);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let err = Schedule::load(std::path::Path::new("/nonexistent/schedule.json")).unwrap_err();
    assert!(matches!(err, CoreError::Io(_)));
}

#[test]
fn test_malformed_times_fall_back_to_midnight() {
    let json = r#"{
        "name": "Messy",
        "activities": [
            {
                "id": "6a2f4ce0-0d2b-4c18-9c57-6f2f4cf1a001",
                "title": "No times"
            },
            {
                "id": "6a2f4ce0-0d2b-4c18-9c57-6f2f4cf1a002",
                "title": "Bad times",
                "start": "banana",
                "end": "7:5"
            }
        ]
    }"#;

    let schedule: Schedule = serde_json::from_str(json).unwrap();
    assert_eq!(schedule.activities[0].start, TimeOfDay::MIDNIGHT);
    assert_eq!(schedule.activities[0].end, TimeOfDay::MIDNIGHT);
    assert!(schedule.activities[0].days.is_empty());
    assert_eq!(schedule.activities[1].start, TimeOfDay::MIDNIGHT);
    assert_eq!(schedule.activities[1].end.minutes(), 425);
}

#[test]
fn test_days_parse_case_insensitive() {
    let json = r#"{
        "name": "Cased",
        "activities": [
            {
                "id": "6a2f4ce0-0d2b-4c18-9c57-6f2f4cf1a003",
                "title": "Gym",
                "start": "18:00",
                "end": "19:00",
                "days": ["Monday", "FRIDAY"]
            }
        ]
    }"#;

    let schedule: Schedule = serde_json::from_str(json).unwrap();
    assert_eq!(
        schedule.activities[0].days,
        vec![Weekday::Monday, Weekday::Friday]
    );
}

#[test]
fn test_set_status() {
    let mut schedule = Schedule::new("Day");
    let activity = Activity::new("Run", TimeOfDay::parse("07:00"), TimeOfDay::parse("08:00"));
    let id = activity.id;
    schedule.activities.push(activity);

    schedule.set_status(id, ActivityStatus::Done).unwrap();
    assert_eq!(schedule.activity(id).unwrap().status, ActivityStatus::Done);

    let missing = Uuid::new_v4();
    assert!(matches!(
        schedule.set_status(missing, ActivityStatus::Done),
        Err(CoreError::ActivityNotFound(id)) if id == missing
    ));
}
