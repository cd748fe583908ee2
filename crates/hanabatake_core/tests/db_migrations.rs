use hanabatake_core::db::migrations::{apply_migrations, latest_version};
use hanabatake_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

fn user_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn fresh_database_migrates_to_latest_version() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(user_version(&conn), latest_version());

    // The blob table is usable right away.
    conn.execute(
        "INSERT INTO blobs (key, value) VALUES ('probe', '{}');",
        [],
    )
    .unwrap();
}

#[test]
fn reapplying_migrations_is_a_noop() {
    let mut conn = open_db_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();
    assert_eq!(user_version(&conn), latest_version());
}

#[test]
fn reopening_a_migrated_file_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("garden.db");

    {
        let conn = open_db(&db_path).unwrap();
        conn.execute(
            "INSERT INTO blobs (key, value) VALUES ('probe', '[]');",
            [],
        )
        .unwrap();
    }

    let conn = open_db(&db_path).unwrap();
    let value: String = conn
        .query_row("SELECT value FROM blobs WHERE key = 'probe';", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(value, "[]");
}

#[test]
fn newer_schema_versions_are_rejected() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!(
        "PRAGMA user_version = {};",
        latest_version() + 1
    ))
    .unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    assert!(matches!(
        err,
        DbError::UnsupportedSchemaVersion { .. }
    ));
}
