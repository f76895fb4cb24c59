//! Tests for the itinerary sequencer.

use jiff::{
    civil::{date, datetime, DateTime},
    Timestamp,
};

use super::*;
use crate::models::{Category, ItemTiming, Priority, FLEXIBLE_TIME};

fn item(id: u64, start_at: DateTime) -> ScheduleItem {
    ScheduleItem {
        id,
        trip_id: 1,
        category: Category::Activity,
        title: format!("Item {id}"),
        description: None,
        location: None,
        notes: None,
        confirmation_number: None,
        cost: None,
        start_at,
        end_at: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

fn item_until(id: u64, start_at: DateTime, end_at: DateTime) -> ScheduleItem {
    ScheduleItem {
        end_at: Some(end_at),
        ..item(id, start_at)
    }
}

fn idea(id: u64, title: &str) -> Idea {
    Idea {
        id,
        trip_id: 1,
        title: title.to_string(),
        description: Some(format!("About {title}")),
        category: None,
        location: Some("Old town".to_string()),
        notes: None,
        url: None,
        estimated_duration_hours: Some(2.0),
        priority: Priority::Medium,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

fn ids(sequencer: &Sequencer) -> Vec<u64> {
    sequencer.items().iter().map(|item| item.id).collect()
}

fn drop_item(sequencer: &mut Sequencer, source: u64, target: u64) -> DropOutcome {
    sequencer.begin_drag(DragSource::Item(source)).unwrap();
    sequencer.end_drag(Some(target))
}

#[test]
fn test_cross_day_move_keeps_time_of_day() {
    let mut sequencer = Sequencer::new(
        vec![
            item(1, datetime(2024, 6, 1, 9, 0, 0, 0)),
            item(2, datetime(2024, 6, 2, 14, 0, 0, 0)),
        ],
        Vec::new(),
    );

    let DropOutcome::Reordered(reorder) = drop_item(&mut sequencer, 1, 2) else {
        panic!("expected a reorder");
    };

    assert!(reorder.changed_day());
    assert_eq!(reorder.to.start_at, datetime(2024, 6, 2, 9, 0, 0, 0));
    assert_eq!(
        reorder.writes,
        vec![ItemWrite {
            item_id: 1,
            timing: ItemTiming {
                start_at: datetime(2024, 6, 2, 9, 0, 0, 0),
                end_at: None,
            },
        }]
    );

    let days = sequencer.days();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].date, date(2024, 6, 2));
    assert_eq!(
        days[0].items.iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

#[test]
fn test_cross_day_move_preserves_duration() {
    let start = datetime(2024, 6, 1, 22, 15, 30, 0);
    let end = datetime(2024, 6, 3, 8, 30, 0, 0);
    let mut sequencer = Sequencer::new(
        vec![
            item_until(1, start, end),
            item(2, datetime(2024, 6, 5, 10, 0, 0, 0)),
        ],
        Vec::new(),
    );

    let DropOutcome::Reordered(reorder) = drop_item(&mut sequencer, 1, 2) else {
        panic!("expected a reorder");
    };

    assert_eq!(reorder.to.start_at, datetime(2024, 6, 5, 22, 15, 30, 0));
    assert_eq!(reorder.to.end_at, Some(datetime(2024, 6, 7, 8, 30, 0, 0)));

    assert_eq!(
        start.duration_until(end),
        reorder.to.start_at.duration_until(reorder.to.end_at.unwrap())
    );
}

#[test]
fn test_move_past_last_supported_day_is_cancelled() {
    let items = vec![
        item_until(
            1,
            datetime(9999, 12, 30, 10, 0, 0, 0),
            datetime(9999, 12, 31, 20, 0, 0, 0),
        ),
        item(2, datetime(9999, 12, 31, 9, 0, 0, 0)),
    ];
    let mut sequencer = Sequencer::new(items.clone(), Vec::new());

    assert_eq!(drop_item(&mut sequencer, 1, 2), DropOutcome::Cancelled);
    assert_eq!(sequencer.state(), DragState::Idle);
    assert_eq!(sequencer.items(), items.as_slice());
}

#[test]
fn test_cross_day_move_backwards_in_time() {
    let mut sequencer = Sequencer::new(
        vec![
            item(1, datetime(2024, 6, 1, 18, 0, 0, 0)),
            item_until(
                2,
                datetime(2024, 6, 4, 7, 0, 0, 0),
                datetime(2024, 6, 4, 9, 45, 0, 0),
            ),
        ],
        Vec::new(),
    );

    let DropOutcome::Reordered(reorder) = drop_item(&mut sequencer, 2, 1) else {
        panic!("expected a reorder");
    };

    assert_eq!(reorder.to.start_at, datetime(2024, 6, 1, 7, 0, 0, 0));
    assert_eq!(reorder.to.end_at, Some(datetime(2024, 6, 1, 9, 45, 0, 0)));
    assert_eq!(ids(&sequencer), vec![2, 1]);
}

#[test]
fn test_cross_day_move_writes_only_the_dragged_item() {
    let mut sequencer = Sequencer::new(
        vec![
            item(1, datetime(2024, 6, 1, 9, 0, 0, 0)),
            item(2, datetime(2024, 6, 1, 11, 0, 0, 0)),
            item(3, datetime(2024, 6, 2, 8, 0, 0, 0)),
            item(4, datetime(2024, 6, 2, 20, 0, 0, 0)),
        ],
        Vec::new(),
    );

    let DropOutcome::Reordered(reorder) = drop_item(&mut sequencer, 2, 4) else {
        panic!("expected a reorder");
    };

    assert_eq!(reorder.writes.len(), 1);
    assert_eq!(reorder.writes[0].item_id, 2);
    assert_eq!(ids(&sequencer), vec![1, 3, 2, 4]);
}

#[test]
fn test_drop_on_itself_changes_nothing() {
    let items = vec![
        item(1, datetime(2024, 6, 1, 9, 0, 0, 0)),
        item(2, datetime(2024, 6, 1, 15, 0, 0, 0)),
    ];
    let mut sequencer = Sequencer::new(items.clone(), Vec::new());

    assert_eq!(drop_item(&mut sequencer, 2, 2), DropOutcome::Cancelled);
    assert_eq!(sequencer.items(), items.as_slice());
    assert_eq!(sequencer.state(), DragState::Idle);
}

#[test]
fn test_same_day_reorder_among_equal_times() {
    let noon = datetime(2024, 6, 1, 12, 0, 0, 0);
    let mut sequencer = Sequencer::new(
        vec![item(1, noon), item(2, noon), item(3, noon)],
        Vec::new(),
    );

    let DropOutcome::Reordered(reorder) = drop_item(&mut sequencer, 3, 1) else {
        panic!("expected a reorder");
    };
    assert!(!reorder.changed_day());
    assert!(reorder.writes.is_empty());
    assert_eq!(ids(&sequencer), vec![3, 1, 2]);

    drop_item(&mut sequencer, 3, 2);
    assert_eq!(ids(&sequencer), vec![1, 2, 3]);
}

#[test]
fn test_same_day_reorder_is_resorted_by_time() {
    let mut sequencer = Sequencer::new(
        vec![
            item(1, datetime(2024, 6, 1, 9, 0, 0, 0)),
            item(2, datetime(2024, 6, 1, 15, 0, 0, 0)),
        ],
        Vec::new(),
    );

    let DropOutcome::Reordered(reorder) = drop_item(&mut sequencer, 2, 1) else {
        panic!("expected a reorder");
    };

    assert_eq!(reorder.from, reorder.to);
    assert!(reorder.writes.is_empty());
    assert_eq!(ids(&sequencer), vec![1, 2]);
    assert!(sequencer.items().iter().all(|i| i.day() == date(2024, 6, 1)));
}

#[test]
fn test_flexible_item_sorts_as_midday() {
    let mut sequencer = Sequencer::new(
        vec![
            item(1, datetime(2024, 6, 1, 9, 0, 0, 0)),
            item(2, datetime(2024, 6, 1, 15, 0, 0, 0)),
            item(3, date(2024, 6, 2).to_datetime(FLEXIBLE_TIME)),
        ],
        Vec::new(),
    );

    drop_item(&mut sequencer, 3, 2);

    assert_eq!(ids(&sequencer), vec![1, 3, 2]);
    assert_eq!(sequencer.items()[1].start_at.time(), FLEXIBLE_TIME);
}

#[test]
fn test_every_day_sorted_after_reorder() {
    let mut sequencer = Sequencer::new(
        vec![
            item(1, datetime(2024, 6, 3, 7, 0, 0, 0)),
            item(2, datetime(2024, 6, 1, 21, 0, 0, 0)),
            item(3, datetime(2024, 6, 2, 10, 0, 0, 0)),
            item(4, datetime(2024, 6, 1, 8, 0, 0, 0)),
        ],
        Vec::new(),
    );

    drop_item(&mut sequencer, 4, 1);

    let days = sequencer.days();
    let dates: Vec<_> = days.iter().map(|d| d.date).collect();
    assert_eq!(
        dates,
        vec![date(2024, 6, 1), date(2024, 6, 2), date(2024, 6, 3)]
    );
    for day in &days {
        assert!(day.items.windows(2).all(|w| w[0].start_at <= w[1].start_at));
    }
}

#[test]
fn test_unknown_target_leaves_everything_unchanged() {
    let items = vec![
        item(1, datetime(2024, 6, 1, 9, 0, 0, 0)),
        item(2, datetime(2024, 6, 2, 9, 0, 0, 0)),
    ];
    let ideas = vec![idea(10, "Night market")];
    let mut sequencer = Sequencer::new(items.clone(), ideas.clone());

    assert_eq!(drop_item(&mut sequencer, 1, 99), DropOutcome::Cancelled);

    sequencer.begin_drag(DragSource::Idea(10)).unwrap();
    assert_eq!(sequencer.end_drag(Some(99)), DropOutcome::Cancelled);

    assert_eq!(sequencer.items(), items.as_slice());
    assert_eq!(sequencer.ideas(), ideas.as_slice());
}

#[test]
fn test_unknown_source_is_cancelled() {
    let items = vec![item(1, datetime(2024, 6, 1, 9, 0, 0, 0))];
    let mut sequencer = Sequencer::new(items.clone(), Vec::new());

    assert_eq!(drop_item(&mut sequencer, 42, 1), DropOutcome::Cancelled);
    assert_eq!(sequencer.items(), items.as_slice());
}

#[test]
fn test_drop_without_target_is_cancelled() {
    let mut sequencer = Sequencer::new(vec![item(1, datetime(2024, 6, 1, 9, 0, 0, 0))], Vec::new());

    sequencer.begin_drag(DragSource::Item(1)).unwrap();
    assert_eq!(sequencer.end_drag(None), DropOutcome::Cancelled);
    assert_eq!(sequencer.state(), DragState::Idle);
}

#[test]
fn test_end_drag_while_idle_is_cancelled() {
    let mut sequencer = Sequencer::new(vec![item(1, datetime(2024, 6, 1, 9, 0, 0, 0))], Vec::new());
    assert_eq!(sequencer.end_drag(Some(1)), DropOutcome::Cancelled);
}

#[test]
fn test_second_drag_is_rejected() {
    let mut sequencer = Sequencer::default();

    sequencer.begin_drag(DragSource::Item(1)).unwrap();
    let result = sequencer.begin_drag(DragSource::Idea(2));

    assert!(matches!(result, Err(ItineraryError::DragInProgress)));
    assert_eq!(
        sequencer.state(),
        DragState::Dragging(DragSource::Item(1))
    );
}

#[test]
fn test_cancel_drag_returns_to_idle() {
    let items = vec![
        item(1, datetime(2024, 6, 1, 9, 0, 0, 0)),
        item(2, datetime(2024, 6, 2, 9, 0, 0, 0)),
    ];
    let mut sequencer = Sequencer::new(items.clone(), Vec::new());

    sequencer.begin_drag(DragSource::Item(1)).unwrap();
    assert!(sequencer.state().is_dragging());
    sequencer.cancel_drag();

    assert_eq!(sequencer.state(), DragState::Idle);
    assert_eq!(sequencer.items(), items.as_slice());
    sequencer.begin_drag(DragSource::Item(2)).unwrap();
}

#[test]
fn test_idea_drop_plans_flexible_item_on_target_day() {
    let mut sequencer = Sequencer::new(
        vec![
            item(1, datetime(2024, 6, 1, 9, 0, 0, 0)),
            item(2, datetime(2024, 6, 2, 18, 30, 0, 0)),
        ],
        vec![idea(10, "Night market")],
    );

    sequencer.begin_drag(DragSource::Idea(10)).unwrap();
    let DropOutcome::Promote(plan) = sequencer.end_drag(Some(2)) else {
        panic!("expected a promotion");
    };

    assert_eq!(plan.idea_id, 10);
    assert_eq!(plan.target.item_id, 2);
    assert_eq!(plan.target.day, date(2024, 6, 2));
    assert_eq!(plan.item.timing.start_at, datetime(2024, 6, 2, 12, 0, 0, 0));
    assert_eq!(plan.item.timing.end_at, None);
    assert_eq!(plan.item.category, Category::Activity);
    assert_eq!(plan.item.title, "Night market");
    assert_eq!(plan.item.description.as_deref(), Some("About Night market"));
    assert_eq!(plan.item.location.as_deref(), Some("Old town"));

    // Nothing changes until the promotion is applied
    assert_eq!(sequencer.ideas().len(), 1);
    assert_eq!(sequencer.items().len(), 2);
}

#[test]
fn test_idea_keeps_its_category() {
    let mut sequencer = Sequencer::new(
        vec![item(1, datetime(2024, 6, 1, 9, 0, 0, 0))],
        vec![Idea {
            category: Some(Category::Restaurant),
            ..idea(10, "Noodle bar")
        }],
    );

    sequencer.begin_drag(DragSource::Idea(10)).unwrap();
    let DropOutcome::Promote(plan) = sequencer.end_drag(Some(1)) else {
        panic!("expected a promotion");
    };
    assert_eq!(plan.item.category, Category::Restaurant);
}

#[test]
fn test_unknown_idea_is_cancelled() {
    let mut sequencer = Sequencer::new(vec![item(1, datetime(2024, 6, 1, 9, 0, 0, 0))], Vec::new());

    sequencer.begin_drag(DragSource::Idea(77)).unwrap();
    assert_eq!(sequencer.end_drag(Some(1)), DropOutcome::Cancelled);
}

#[test]
fn test_apply_promotion_moves_idea_into_itinerary() {
    let mut sequencer = Sequencer::new(
        vec![
            item(1, datetime(2024, 6, 2, 9, 0, 0, 0)),
            item(2, datetime(2024, 6, 2, 18, 0, 0, 0)),
        ],
        vec![idea(10, "Night market"), idea(11, "Cooking class")],
    );

    sequencer.begin_drag(DragSource::Idea(10)).unwrap();
    let DropOutcome::Promote(plan) = sequencer.end_drag(Some(2)) else {
        panic!("expected a promotion");
    };
    let created = ScheduleItem {
        title: plan.item.title.clone(),
        ..item(3, plan.item.timing.start_at)
    };
    sequencer.apply_promotion(plan.idea_id, created);

    assert_eq!(ids(&sequencer), vec![1, 3, 2]);
    assert_eq!(
        sequencer.ideas().iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![11]
    );
}

#[test]
fn test_new_sorts_items_and_ideas() {
    let mut newer = idea(1, "Low but new");
    newer.priority = Priority::Low;
    newer.created_at = Timestamp::from_second(2_000).unwrap();
    let mut high = idea(2, "High");
    high.priority = Priority::High;
    let mut recent_medium = idea(3, "Recent medium");
    recent_medium.created_at = Timestamp::from_second(1_000).unwrap();
    let old_medium = idea(4, "Old medium");

    let sequencer = Sequencer::new(
        vec![
            item(1, datetime(2024, 6, 2, 9, 0, 0, 0)),
            item(2, datetime(2024, 6, 1, 9, 0, 0, 0)),
        ],
        vec![newer, high, old_medium, recent_medium],
    );

    assert_eq!(ids(&sequencer), vec![2, 1]);
    assert_eq!(
        sequencer.ideas().iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![2, 3, 4, 1]
    );
}

#[test]
fn test_resolve_drop_target() {
    let items = vec![
        item(5, datetime(2024, 6, 1, 9, 0, 0, 0)),
        item(6, datetime(2024, 6, 3, 9, 0, 0, 0)),
    ];

    assert_eq!(
        resolve_drop_target(&items, 6),
        Some(DropTarget {
            index: 1,
            item_id: 6,
            day: date(2024, 6, 3),
        })
    );
    assert_eq!(resolve_drop_target(&items, 7), None);
    assert_eq!(resolve_drop_target(&[], 5), None);
}

#[test]
fn test_sync_report() {
    let mut report = SyncReport::default();
    report.record_success(1);
    assert!(report.is_complete());

    report.record_failure(2, "database is locked");
    assert!(!report.is_complete());
    assert_eq!(report.written, vec![1]);
    assert_eq!(
        report.failures,
        vec![WriteFailure {
            item_id: 2,
            cause: "database is locked".to_string(),
        }]
    );
}
