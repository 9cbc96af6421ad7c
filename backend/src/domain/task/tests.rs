//! Tests for the task model and partial updates.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn task() -> Task {
    Task::new(
        TaskId::new(7),
        NewTask {
            title: TaskTitle::new("Design user interface").expect("valid title"),
            status: TaskStatus::InProgress,
            user_id: UserId::new(2),
        },
    )
}

#[rstest]
#[case(TaskStatus::Pending, "\"pending\"")]
#[case(TaskStatus::InProgress, "\"in-progress\"")]
#[case(TaskStatus::Completed, "\"completed\"")]
fn status_uses_wire_literals(#[case] status: TaskStatus, #[case] expected: &str) {
    let encoded = serde_json::to_string(&status).expect("status serialises");
    assert_eq!(encoded, expected);
    assert_eq!(status.as_str(), expected.trim_matches('"'));
}

#[rstest]
#[case("\"done\"")]
#[case("\"Pending\"")]
#[case("\"in_progress\"")]
#[case("3")]
fn status_rejects_unknown_literals(#[case] raw: &str) {
    assert!(serde_json::from_str::<TaskStatus>(raw).is_err());
}

#[rstest]
fn status_from_str_is_exact() {
    assert_eq!("in-progress".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
    assert_eq!(
        "IN-PROGRESS".parse::<TaskStatus>(),
        Err(TaskValidationError::UnknownStatus {
            value: "IN-PROGRESS".to_owned()
        })
    );
}

#[rstest]
fn title_is_trimmed() {
    let title = TaskTitle::new("\t Review code changes  ").expect("valid title");
    assert_eq!(title.as_ref(), "Review code changes");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\t")]
fn title_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(TaskTitle::new(raw), Err(TaskValidationError::EmptyTitle));
}

#[rstest]
fn empty_patch_leaves_task_unchanged(task: Task) {
    let patch = TaskPatch::default();
    assert!(patch.is_empty());
    assert_eq!(task.patched(patch), task);
}

#[rstest]
fn status_patch_preserves_title_and_owner(task: Task) {
    let updated = task.patched(TaskPatch::default().with_status(TaskStatus::Completed));

    assert_eq!(updated.id(), task.id());
    assert_eq!(updated.status(), TaskStatus::Completed);
    assert_eq!(updated.title(), task.title());
    assert_eq!(updated.user_id(), task.user_id());
}

#[rstest]
fn full_patch_replaces_every_field(task: Task) {
    let title = TaskTitle::new("Ship it").expect("valid title");
    let updated = task.patched(
        TaskPatch::default()
            .with_title(title.clone())
            .with_status(TaskStatus::Pending)
            .with_user_id(UserId::new(3)),
    );

    assert_eq!(updated.id(), TaskId::new(7));
    assert_eq!(updated.title(), &title);
    assert_eq!(updated.status(), TaskStatus::Pending);
    assert_eq!(updated.user_id(), UserId::new(3));
}

#[rstest]
fn serialises_camel_case(task: Task) {
    let value = serde_json::to_value(&task).expect("task serialises");
    assert_eq!(
        value,
        json!({
            "id": 7,
            "title": "Design user interface",
            "status": "in-progress",
            "userId": 2,
        })
    );
}
