use jiff::civil::{date, datetime};
use tempfile::NamedTempFile;
use voyage_core::{
    models::{Category, ItemTiming, NewIdea, NewScheduleItem, NewTrip, Priority, TripStatus},
    Database, ItineraryError,
};

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn new_trip(title: &str) -> NewTrip {
    NewTrip {
        title: title.to_string(),
        destination: None,
        description: None,
        start_date: Some(date(2024, 6, 1)),
        end_date: Some(date(2024, 6, 4)),
        status: TripStatus::Planning,
    }
}

fn new_item(trip_id: u64, title: &str, timing: ItemTiming) -> NewScheduleItem {
    NewScheduleItem {
        trip_id,
        category: Category::Activity,
        title: title.to_string(),
        description: None,
        location: None,
        notes: None,
        confirmation_number: None,
        cost: None,
        timing,
    }
}

fn at(start: jiff::civil::DateTime) -> ItemTiming {
    ItemTiming {
        start_at: start,
        end_at: None,
    }
}

fn new_idea(trip_id: u64, title: &str, priority: Priority) -> NewIdea {
    NewIdea {
        trip_id,
        title: title.to_string(),
        description: Some("Worth a look".to_string()),
        category: None,
        location: None,
        notes: None,
        url: None,
        estimated_duration_hours: None,
        priority,
    }
}

#[test]
fn test_database_initialization_is_repeatable() {
    let (temp_file, mut db) = create_test_db();
    let trip = db.create_trip(&new_trip("Kyoto")).unwrap();
    let mut item = new_item(trip.id, "Shinkansen", at(datetime(2024, 6, 1, 8, 0, 0, 0)));
    item.confirmation_number = Some("JR-2210".to_string());
    item.cost = Some(140.0);
    let item = db.create_item(&item).unwrap();
    let mut idea = new_idea(trip.id, "Fushimi Inari", Priority::High);
    idea.url = Some("https://inari.jp".to_string());
    idea.estimated_duration_hours = Some(3.5);
    let idea = db.create_idea(&idea).unwrap();
    drop(db);

    // Reopening applies the schema again and keeps every column
    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert_eq!(db.list_trips().unwrap().len(), 1);
    assert_eq!(db.get_item(item.id).unwrap(), Some(item));
    assert_eq!(db.get_idea(idea.id).unwrap(), Some(idea));
}

#[test]
fn test_create_and_get_trip() {
    let (_temp_file, mut db) = create_test_db();

    let created = db.create_trip(&new_trip("Porto")).expect("Failed to create trip");
    let trip = db
        .get_trip(created.id)
        .expect("Failed to get trip")
        .expect("Trip should exist");

    assert_eq!(trip.title, "Porto");
    assert_eq!(trip.start_date, Some(date(2024, 6, 1)));
    assert_eq!(trip.end_date, Some(date(2024, 6, 4)));
    assert_eq!(trip.status, TripStatus::Planning);
    assert!(trip.items.is_empty());
    assert!(trip.ideas.is_empty());

    assert!(db.get_trip(created.id + 100).unwrap().is_none());
}

#[test]
fn test_list_trips_soonest_first() {
    let (_temp_file, mut db) = create_test_db();

    let mut later = new_trip("Later");
    later.start_date = Some(date(2025, 1, 1));
    later.end_date = None;
    let mut undated = new_trip("Undated");
    undated.start_date = None;
    undated.end_date = None;

    db.create_trip(&undated).unwrap();
    db.create_trip(&later).unwrap();
    db.create_trip(&new_trip("Sooner")).unwrap();

    let titles: Vec<String> = db.list_trips().unwrap().into_iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["Sooner", "Later", "Undated"]);
}

#[test]
fn test_items_come_back_in_chronological_order() {
    let (_temp_file, mut db) = create_test_db();
    let trip = db.create_trip(&new_trip("Order")).unwrap();

    db.create_item(&new_item(trip.id, "Evening", at(datetime(2024, 6, 1, 19, 0, 0, 0))))
        .unwrap();
    db.create_item(&new_item(trip.id, "Next day", at(datetime(2024, 6, 2, 8, 0, 0, 0))))
        .unwrap();
    db.create_item(&new_item(trip.id, "Morning", at(datetime(2024, 6, 1, 9, 0, 0, 0))))
        .unwrap();

    let titles: Vec<String> = db
        .get_items(trip.id)
        .unwrap()
        .into_iter()
        .map(|i| i.title)
        .collect();
    assert_eq!(titles, vec!["Morning", "Evening", "Next day"]);
}

#[test]
fn test_item_round_trips_all_fields() {
    let (_temp_file, mut db) = create_test_db();
    let trip = db.create_trip(&new_trip("Fields")).unwrap();

    let mut item = new_item(
        trip.id,
        "Train to Lisbon",
        ItemTiming::new(
            datetime(2024, 6, 2, 7, 30, 0, 0),
            Some(datetime(2024, 6, 2, 10, 15, 0, 0)),
        )
        .unwrap(),
    );
    item.category = Category::Transport;
    item.confirmation_number = Some("CP-4411".to_string());
    item.cost = Some(32.5);
    item.location = Some("Campanhã".to_string());

    let created = db.create_item(&item).unwrap();
    let stored = db.get_item(created.id).unwrap().expect("Item should exist");

    assert_eq!(stored, created);
    assert_eq!(stored.category, Category::Transport);
    assert_eq!(stored.end_at, Some(datetime(2024, 6, 2, 10, 15, 0, 0)));
    assert_eq!(stored.cost, Some(32.5));
}

#[test]
fn test_create_item_for_missing_trip() {
    let (_temp_file, mut db) = create_test_db();

    let result = db.create_item(&new_item(42, "Orphan", at(datetime(2024, 6, 1, 9, 0, 0, 0))));
    assert!(matches!(result, Err(ItineraryError::TripNotFound { id: 42 })));
}

#[test]
fn test_update_item_timing_only_touches_times() {
    let (_temp_file, mut db) = create_test_db();
    let trip = db.create_trip(&new_trip("Timing")).unwrap();
    let mut item = new_item(trip.id, "Museum", at(datetime(2024, 6, 1, 9, 0, 0, 0)));
    item.notes = Some("Book ahead".to_string());
    let created = db.create_item(&item).unwrap();

    let timing = ItemTiming::new(
        datetime(2024, 6, 3, 9, 0, 0, 0),
        Some(datetime(2024, 6, 3, 11, 0, 0, 0)),
    )
    .unwrap();
    db.update_item_timing(created.id, &timing).unwrap();

    let stored = db.get_item(created.id).unwrap().unwrap();
    assert_eq!(stored.timing(), timing);
    assert_eq!(stored.title, "Museum");
    assert_eq!(stored.notes.as_deref(), Some("Book ahead"));

    let missing = db.update_item_timing(9999, &timing);
    assert!(matches!(missing, Err(ItineraryError::ItemNotFound { id: 9999 })));
}

#[test]
fn test_ideas_in_display_order() {
    let (_temp_file, mut db) = create_test_db();
    let trip = db.create_trip(&new_trip("Ideas")).unwrap();

    db.create_idea(&new_idea(trip.id, "Low", Priority::Low)).unwrap();
    db.create_idea(&new_idea(trip.id, "First medium", Priority::Medium)).unwrap();
    db.create_idea(&new_idea(trip.id, "High", Priority::High)).unwrap();
    db.create_idea(&new_idea(trip.id, "Second medium", Priority::Medium)).unwrap();

    let titles: Vec<String> = db
        .get_ideas(trip.id)
        .unwrap()
        .into_iter()
        .map(|i| i.title)
        .collect();
    assert_eq!(titles, vec!["High", "Second medium", "First medium", "Low"]);
}

#[test]
fn test_convert_idea_is_atomic() {
    let (_temp_file, mut db) = create_test_db();
    let trip = db.create_trip(&new_trip("Convert")).unwrap();
    let idea = db.create_idea(&new_idea(trip.id, "Fado night", Priority::High)).unwrap();

    let item = new_item(trip.id, "Fado night", at(datetime(2024, 6, 2, 12, 0, 0, 0)));
    let created = db.convert_idea(idea.id, &item).unwrap();

    assert!(db.get_idea(idea.id).unwrap().is_none());
    assert_eq!(db.get_item(created.id).unwrap().unwrap().title, "Fado night");

    // Converting it again fails and creates nothing
    let again = db.convert_idea(idea.id, &item);
    assert!(matches!(again, Err(ItineraryError::IdeaNotFound { .. })));
    assert_eq!(db.get_items(trip.id).unwrap().len(), 1);
}

#[test]
fn test_delete_trip_cascades() {
    let (_temp_file, mut db) = create_test_db();
    let trip = db.create_trip(&new_trip("Cascade")).unwrap();
    let item = db
        .create_item(&new_item(trip.id, "Item", at(datetime(2024, 6, 1, 9, 0, 0, 0))))
        .unwrap();
    let idea = db.create_idea(&new_idea(trip.id, "Idea", Priority::Low)).unwrap();

    db.delete_trip(trip.id).unwrap();

    assert!(db.get_trip(trip.id).unwrap().is_none());
    assert!(db.get_item(item.id).unwrap().is_none());
    assert!(db.get_idea(idea.id).unwrap().is_none());
    assert!(matches!(
        db.delete_trip(trip.id),
        Err(ItineraryError::TripNotFound { .. })
    ));
}

#[test]
fn test_delete_missing_records() {
    let (_temp_file, mut db) = create_test_db();

    assert!(matches!(db.delete_item(5), Err(ItineraryError::ItemNotFound { id: 5 })));
    assert!(matches!(db.delete_idea(6), Err(ItineraryError::IdeaNotFound { id: 6 })));
}
