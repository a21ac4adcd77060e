use garcon::application::ports::{StagingStore, StagingStoreError};
use garcon::domain::StoragePath;
use garcon::infrastructure::storage::LocalStagingStore;
use uuid::Uuid;

fn turn_path() -> StoragePath {
    StoragePath::for_turn(Uuid::new_v4(), "clip.wav")
}

#[tokio::test]
async fn given_stored_audio_when_fetched_then_bytes_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStagingStore::new(dir.path().to_path_buf()).unwrap();
    let path = turn_path();

    store.store(&path, b"RIFFfakeaudio").await.unwrap();
    let fetched = store.fetch(&path).await.unwrap();

    assert_eq!(fetched, b"RIFFfakeaudio");
    assert_eq!(store.head(&path).await.unwrap(), 13);
}

#[tokio::test]
async fn given_stored_audio_when_deleted_then_object_is_gone() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStagingStore::new(dir.path().to_path_buf()).unwrap();
    let path = turn_path();

    store.store(&path, b"RIFFfakeaudio").await.unwrap();
    store.delete(&path).await.unwrap();

    assert!(matches!(
        store.head(&path).await,
        Err(StagingStoreError::NotFound(_))
    ));
    assert!(matches!(
        store.fetch(&path).await,
        Err(StagingStoreError::NotFound(_))
    ));
}

#[tokio::test]
async fn given_unknown_path_when_fetched_then_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStagingStore::new(dir.path().to_path_buf()).unwrap();

    assert!(matches!(
        store.fetch(&turn_path()).await,
        Err(StagingStoreError::NotFound(_))
    ));
}
