use chrono::NaiveDate;
use tasklite_core::{Priority, Task};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn task_new_sets_defaults() {
    let task = Task::new(42, "write report", date(2025, 12, 1), "work", Priority::High);

    assert_eq!(task.id, 42);
    assert_eq!(task.title, "write report");
    assert_eq!(task.due_date, date(2025, 12, 1));
    assert_eq!(task.category, "work");
    assert_eq!(task.priority, Priority::High);
    assert!(!task.completed);
}

#[test]
fn priority_rank_matches_declared_order() {
    assert_eq!(Priority::Low.rank(), 1);
    assert_eq!(Priority::Medium.rank(), 2);
    assert_eq!(Priority::High.rank(), 3);
    assert!(Priority::Low < Priority::Medium);
    assert!(Priority::Medium < Priority::High);
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::new(
        7,
        "water the plants",
        date(2025, 10, 15),
        "personal",
        Priority::High,
    );
    task.completed = true;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["title"], "water the plants");
    assert_eq!(json["dueDate"], "2025-10-15");
    assert_eq!(json["category"], "personal");
    assert_eq!(json["priority"], "high");
    assert_eq!(json["completed"], true);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn missing_completed_field_defaults_to_false() {
    let raw = r#"{
        "id": 9,
        "title": "pay the rent",
        "dueDate": "2025-11-01",
        "category": "personal",
        "priority": "medium"
    }"#;

    let task: Task = serde_json::from_str(raw).unwrap();
    assert!(!task.completed);
}

#[test]
fn unknown_fields_from_future_schema_are_tolerated() {
    let raw = r#"{
        "id": 9,
        "title": "pay the rent",
        "dueDate": "2025-11-01",
        "category": "personal",
        "priority": "low",
        "completed": false,
        "reminderAt": "2025-10-31T09:00:00Z"
    }"#;

    let task: Task = serde_json::from_str(raw).unwrap();
    assert_eq!(task.title, "pay the rent");
}
