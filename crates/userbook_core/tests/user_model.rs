use userbook_core::{UserRecord, UserSummary};

#[test]
fn user_record_serializes_profile_picture_with_column_name() {
    let record = UserRecord {
        id: 1,
        name: "Alice".to_string(),
        age: 30,
        salary: 50000.0,
        profile_picture: vec![1, 2],
    };

    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["profilePicture"], serde_json::json!([1, 2]));
    assert_eq!(value["salary"], serde_json::json!(50000.0));
    assert!(value.get("profile_picture").is_none());
}

#[test]
fn summary_drops_profile_picture() {
    let record = UserRecord {
        id: 3,
        name: "Charlie".to_string(),
        age: 28,
        salary: 55000.0,
        profile_picture: vec![7],
    };

    let summary = UserSummary::from(record);
    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(summary.id, 3);
    assert!(value.get("profilePicture").is_none());
}
