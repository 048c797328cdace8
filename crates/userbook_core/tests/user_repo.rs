use rusqlite::Connection;
use userbook_core::db::open_db_in_memory;
use userbook_core::db::schema::latest_version;
use userbook_core::{NewUser, RepoError, SqliteUserRepository, UserPatch, UserRepository};

#[test]
fn insert_then_list_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    let id = repo
        .insert_user(&NewUser::new("Alice", 30, 50000.0))
        .unwrap();

    let users = repo.list_users().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, id);
    assert_eq!(users[0].name, "Alice");
    assert_eq!(users[0].age, 30);
    assert_eq!(users[0].salary, 50000.0);
}

#[test]
fn insert_assigns_increasing_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    let first = repo.insert_user(&NewUser::new("Alice", 30, 1.0)).unwrap();
    let second = repo.insert_user(&NewUser::new("Bob", 25, 2.0)).unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 2);
}

#[test]
fn list_returns_every_inserted_row_in_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    let names = ["Zed", "Amy", "Max", "Bea"];
    for (age, name) in names.iter().enumerate() {
        repo.insert_user(&NewUser::new(*name, age as i32, 100.0))
            .unwrap();
    }

    let listed: Vec<String> = repo
        .list_users()
        .unwrap()
        .into_iter()
        .map(|user| user.name)
        .collect();
    assert_eq!(listed, names);
}

#[test]
fn updating_only_name_leaves_other_fields_untouched() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    let id = repo
        .insert_user(&NewUser::new("Alice", 30, 50000.0).with_profile_picture(vec![9, 8]))
        .unwrap();
    let matched = repo
        .update_user(id, &UserPatch::new().with_name("Alicia"))
        .unwrap();
    assert!(matched);

    let user = repo.get_user(id).unwrap().unwrap();
    assert_eq!(user.name, "Alicia");
    assert_eq!(user.age, 30);
    assert_eq!(user.salary, 50000.0);
    assert_eq!(user.profile_picture, vec![9, 8]);
}

#[test]
fn update_can_clear_profile_picture_and_zero_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    let id = repo
        .insert_user(&NewUser::new("Alice", 30, 50000.0).with_profile_picture(vec![1]))
        .unwrap();
    repo.update_user(
        id,
        &UserPatch::new()
            .with_salary(0.0)
            .with_profile_picture(Vec::new()),
    )
    .unwrap();

    let user = repo.get_user(id).unwrap().unwrap();
    assert_eq!(user.salary, 0.0);
    assert!(user.profile_picture.is_empty());
    assert_eq!(user.name, "Alice");
}

#[test]
fn update_of_unknown_id_changes_nothing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    repo.insert_user(&NewUser::new("Alice", 30, 50000.0))
        .unwrap();
    let before = repo.list_users().unwrap();

    let matched = repo
        .update_user(42, &UserPatch::new().with_name("Ghost").with_age(99))
        .unwrap();

    assert!(!matched);
    assert_eq!(repo.list_users().unwrap(), before);
}

#[test]
fn empty_patch_reports_existence_without_writing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    let id = repo
        .insert_user(&NewUser::new("Alice", 30, 50000.0))
        .unwrap();

    assert!(repo.update_user(id, &UserPatch::new()).unwrap());
    assert!(!repo.update_user(id + 1, &UserPatch::new()).unwrap());
    assert_eq!(repo.get_user(id).unwrap().unwrap().name, "Alice");
}

#[test]
fn get_user_returns_none_for_unknown_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    assert!(repo.get_user(1).unwrap().is_none());
}

#[test]
fn null_persisted_name_is_reported_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO Users (name, age, salary) VALUES (NULL, 30, 1.0);",
        [],
    )
    .unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    let err = repo.list_users().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("name")));
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteUserRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_users_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteUserRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("Users"))
    ));
}

#[test]
fn repository_rejects_connection_missing_profile_picture_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE Users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            age INTEGER,
            salary REAL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteUserRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "Users",
            column: "profilePicture"
        })
    ));
}
