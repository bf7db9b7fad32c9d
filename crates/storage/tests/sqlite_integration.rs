use storage::repository::{KeyValueRepository, Storage};

#[tokio::test]
async fn kv_round_trip_through_sqlite() {
    let storage = Storage::sqlite("sqlite:file:memdb_kv_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect sqlite");

    assert!(storage.kv.get("training-progress").await.unwrap().is_none());

    storage
        .kv
        .set("training-progress", r#"[{"id":"s1-intro"}]"#)
        .await
        .expect("write value");

    let value = storage
        .kv
        .get("training-progress")
        .await
        .expect("read value");
    assert_eq!(value.as_deref(), Some(r#"[{"id":"s1-intro"}]"#));
}

#[tokio::test]
async fn kv_set_replaces_wholesale() {
    let storage = Storage::sqlite("sqlite:file:memdb_kv_replace?mode=memory&cache=shared")
        .await
        .expect("connect sqlite");

    storage.kv.set("k", "first").await.unwrap();
    storage.kv.set("k", "second").await.unwrap();

    assert_eq!(storage.kv.get("k").await.unwrap().as_deref(), Some("second"));
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let url = "sqlite:file:memdb_kv_migrate?mode=memory&cache=shared";
    let first = Storage::sqlite(url).await.expect("first connect");
    first.kv.set("k", "v").await.unwrap();

    // A second connection re-runs migrations against the same database.
    let second = Storage::sqlite(url).await.expect("second connect");
    assert_eq!(second.kv.get("k").await.unwrap().as_deref(), Some("v"));
}
