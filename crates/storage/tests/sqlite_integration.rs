use prep_core::model::AppSettingsDraft;
use storage::repository::AppSettingsRepository;
use storage::sqlite::SqliteRepository;

#[tokio::test]
async fn settings_round_trip_through_sqlite() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_roundtrip?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert!(repo.get_settings().await.unwrap().is_none());

    let settings = AppSettingsDraft {
        api_key: Some("sk-local".to_string()),
        api_model: Some("gpt-4o-mini".to_string()),
        api_base_url: Some("https://api.openai.com/v1".to_string()),
    }
    .validate()
    .unwrap();
    repo.save_settings(&settings).await.unwrap();

    let fetched = repo.get_settings().await.unwrap().unwrap();
    assert_eq!(fetched, settings);
}

#[tokio::test]
async fn save_replaces_the_single_row() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_replace?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    let first = AppSettingsDraft {
        api_key: Some("sk-one".to_string()),
        ..AppSettingsDraft::default()
    }
    .validate()
    .unwrap();
    repo.save_settings(&first).await.unwrap();

    let second = AppSettingsDraft {
        api_key: Some("sk-two".to_string()),
        ..AppSettingsDraft::default()
    }
    .validate()
    .unwrap();
    repo.save_settings(&second).await.unwrap();

    let fetched = repo.get_settings().await.unwrap().unwrap();
    assert_eq!(fetched.api_key(), Some("sk-two"));
}

#[tokio::test]
async fn migrate_is_idempotent() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");
    repo.migrate().await.expect("second migrate");
}
