use super::{create_test_storage, new_session};
use crate::{SessionStore, StorageError};

#[tokio::test]
async fn test_create_and_get_session() {
    let storage = create_test_storage();

    let created = storage.create_session(new_session("s1")).await.unwrap();
    assert_eq!(created.session_id, "s1");
    assert_eq!(created.id, 1);

    let retrieved = storage.get_session("s1").await.unwrap();
    let retrieved = retrieved.unwrap();
    assert_eq!(retrieved.session_id, "s1");
    assert_eq!(retrieved.created_at, created.created_at);
}

#[tokio::test]
async fn test_get_unknown_session_is_none() {
    let storage = create_test_storage();
    assert!(storage.get_session("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn test_session_ids_increment() {
    let storage = create_test_storage();
    let first = storage.create_session(new_session("a")).await.unwrap();
    let second = storage.create_session(new_session("b")).await.unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[tokio::test]
async fn test_duplicate_external_id_rejected() {
    let storage = create_test_storage();
    storage.create_session(new_session("dup")).await.unwrap();

    let err = storage.create_session(new_session("dup")).await.unwrap_err();
    assert!(matches!(err, StorageError::Duplicate(_)));
    assert!(err.is_duplicate());

    // The first record is untouched.
    let retrieved = storage.get_session("dup").await.unwrap().unwrap();
    assert_eq!(retrieved.id, 1);
}
