use tasklist::store::{TaskId, TaskStore, ValidationError};

#[test]
fn test_create_adds_one_incomplete_task() {
    let mut store = TaskStore::new();
    let task = store.create("Buy milk").unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(task.title, "Buy milk");
    assert!(!task.is_complete);
    assert_eq!(store.tasks(), vec![task]);
}

#[test]
fn test_create_rejects_empty_and_blank_titles() {
    let mut store = TaskStore::new();

    assert_eq!(store.create(""), Err(ValidationError::TitleRequired));
    assert_eq!(store.create("   \t"), Err(ValidationError::TitleRequired));
    assert!(store.is_empty());
}

#[test]
fn test_rejected_create_leaves_existing_tasks_unchanged() {
    let mut store = TaskStore::new();
    let first = store.create("first").unwrap();
    store.create("second").unwrap();
    store.toggle(first.id);
    let before = store.tasks();

    assert_eq!(store.create(""), Err(ValidationError::TitleRequired));
    assert_eq!(store.create("  "), Err(ValidationError::TitleRequired));
    assert_eq!(store.tasks(), before);

    // The counter did not advance on rejection
    assert_eq!(store.create("third").unwrap().id, TaskId(3));
}

#[test]
fn test_validation_message() {
    assert_eq!(ValidationError::TitleRequired.to_string(), "título é obrigatório");
}

#[test]
fn test_toggle_flips_only_the_target() {
    let mut store = TaskStore::new();
    let a = store.create("a").unwrap();
    let b = store.create("b").unwrap();
    let c = store.create("c").unwrap();
    store.toggle(c.id);

    assert_eq!(store.toggle(b.id), Some(true));

    assert!(!store.get(a.id).unwrap().is_complete);
    assert!(store.get(b.id).unwrap().is_complete);
    assert!(store.get(c.id).unwrap().is_complete);
    assert_eq!(store.completed_count(), 2);
}

#[test]
fn test_toggle_twice_restores_flag() {
    let mut store = TaskStore::new();
    let task = store.create("Buy milk").unwrap();

    store.toggle(task.id);
    store.toggle(task.id);

    assert!(!store.get(task.id).unwrap().is_complete);
}

#[test]
fn test_remove_deletes_only_the_target() {
    let mut store = TaskStore::new();
    let a = store.create("a").unwrap();
    let b = store.create("b").unwrap();
    let c = store.create("c").unwrap();
    store.toggle(a.id);

    let removed = store.remove(b.id).unwrap();
    assert_eq!(removed.title, "b");

    let remaining: Vec<_> = store.tasks().into_iter().map(|t| (t.id, t.is_complete)).collect();
    assert_eq!(remaining, vec![(a.id, true), (c.id, false)]);
}

#[test]
fn test_missing_ids_are_noops() {
    let mut store = TaskStore::new();
    store.create("a").unwrap();

    assert_eq!(store.toggle(TaskId(42)), None);
    assert_eq!(store.remove(TaskId(42)), None);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_ids_stay_unique_after_removal() {
    let mut store = TaskStore::new();
    let first = store.create("first").unwrap();
    let second = store.create("second").unwrap();
    store.remove(first.id);
    let third = store.create("third").unwrap();

    assert_ne!(third.id, second.id);
    store.toggle(third.id);
    assert!(!store.get(second.id).unwrap().is_complete);
}

#[test]
fn test_display_order_is_insertion_order() {
    let mut store = TaskStore::new();
    for title in ["one", "two", "three"] {
        store.create(title).unwrap();
    }
    let titles: Vec<_> = store.tasks().into_iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["one", "two", "three"]);
}
