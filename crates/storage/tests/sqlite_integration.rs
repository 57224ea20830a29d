use storage::repository::{KeyValueStore, Storage};
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn sqlite_kv_round_trip() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert_eq!(repo.get("kql-progress-session-01").await.unwrap(), None);

    repo.set("kql-progress-session-01", r#"["introduction"]"#)
        .await
        .unwrap();
    repo.set("kql-progress-session-01", r#"["introduction","part1"]"#)
        .await
        .unwrap();

    let stored = repo.get("kql-progress-session-01").await.unwrap();
    assert_eq!(stored.as_deref(), Some(r#"["introduction","part1"]"#));

    repo.remove("kql-progress-session-01").await.unwrap();
    assert_eq!(repo.get("kql-progress-session-01").await.unwrap(), None);
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_kv_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("first migrate");
    repo.set("k", "v").await.unwrap();
    repo.migrate().await.expect("second migrate");
    assert_eq!(repo.get("k").await.unwrap().as_deref(), Some("v"));
}

#[tokio::test]
async fn storage_sqlite_exposes_kv_trait_object() {
    let storage = Storage::sqlite("sqlite:file:memdb_kv_storage?mode=memory&cache=shared")
        .await
        .expect("storage");
    storage.kv.set("kql-progress-session-02", "[]").await.unwrap();
    assert_eq!(
        storage.kv.get("kql-progress-session-02").await.unwrap().as_deref(),
        Some("[]")
    );
}
