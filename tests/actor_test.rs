use access_registry::actor::ActorError;
use access_registry::codec::ParseMode;
use access_registry::lifecycle::{RegistryConfig, RegistrySystem};
use access_registry::model::{Record, Resource};
use access_registry::store::{AccessDecision, MissingTarget, SortField, StoreError};

fn config() -> RegistryConfig {
    RegistryConfig {
        channel_capacity: 4,
        ..RegistryConfig::default()
    }
}

/// End-to-end run of the access scenario through the actor.
#[tokio::test]
async fn test_access_scenario_through_actor() {
    let system = RegistrySystem::start(&config());
    let client = system.client.clone();

    client.add_record(Record::student("Nick", 1, 1, 101).unwrap()).await.unwrap();
    client.add_record(Record::teacher("Brown", 2, 3, "CS").unwrap()).await.unwrap();
    client.add_resource(Resource::new("Lab", 3).unwrap()).await.unwrap();

    assert!(!client.check_access(1, "Lab").await.unwrap());
    assert!(client.check_access(2, "Lab").await.unwrap());
    match client.check_access(99, "Lab").await {
        Err(ActorError::Store(StoreError::NotFound(MissingTarget::User(99)))) => {}
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert_eq!(
        client.access_decision(2, "Attic").await.unwrap(),
        AccessDecision::NotFound(MissingTarget::Resource("Attic".to_string()))
    );

    drop(client);
    let store = system.shutdown().await.expect("Failed to shutdown");
    assert_eq!(store.record_count(), 2);
}

/// Many tasks adding concurrently: every insert lands exactly once.
#[tokio::test]
async fn test_concurrent_inserts() {
    let system = RegistrySystem::start(&config());

    let mut handles = vec![];
    for i in 0..20i64 {
        let client = system.client.clone();
        handles.push(tokio::spawn(async move {
            let record = Record::user(format!("user{}", i), i, i % 4).unwrap();
            client.add_record(record).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    system.client.sort_by_field(SortField::Id).await.unwrap();
    let snapshot = system.client.snapshot().await.unwrap();
    let ids: Vec<u32> = snapshot.records.iter().map(Record::id).collect();
    assert_eq!(ids, (0..20).collect::<Vec<u32>>());

    let store = system.shutdown().await.unwrap();
    assert_eq!(store.record_count(), 20);
}

/// Save from one system, load into a fresh one.
#[tokio::test]
async fn test_save_and_load_through_actor() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("system_data.txt");

    let first = RegistrySystem::start(&config());
    first
        .client
        .add_record(Record::administrator("Mr. Smith", 3, 5, "admin123").unwrap())
        .await
        .unwrap();
    first
        .client
        .add_resource(Resource::new("Server Room", 5).unwrap())
        .await
        .unwrap();
    first.client.save(&path).await.unwrap();
    let original = first.client.snapshot().await.unwrap();
    first.shutdown().await.unwrap();

    let second = RegistrySystem::start(&config());
    second.client.load(&path, ParseMode::Strict).await.unwrap();
    assert_eq!(second.client.snapshot().await.unwrap(), original);
    assert!(second.client.check_access(3, "Server Room").await.unwrap());

    let found = second.client.search_by_name("Smith").await.unwrap();
    assert_eq!(found.len(), 1);
    assert!(second.client.find_by_name("Smith").await.unwrap().is_empty());
    second.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_load_missing_file_keeps_store() {
    let dir = tempfile::tempdir().unwrap();
    let system = RegistrySystem::start(&config());
    system
        .client
        .add_record(Record::user("Ann", 4, 0).unwrap())
        .await
        .unwrap();

    let result = system
        .client
        .load(dir.path().join("nope.txt"), ParseMode::Lenient)
        .await;
    assert!(matches!(
        result,
        Err(ActorError::Store(StoreError::Io { .. }))
    ));
    assert!(system.client.find_by_id(4).await.unwrap().is_some());
    system.shutdown().await.unwrap();
}
