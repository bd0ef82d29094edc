#![cfg(feature = "postgres-tests")]

use sqlx::PgPool;

use people_api::app::{person::Person, user::User};
use people_api::infrastructure::database::DatabaseManager;
use people_api::infrastructure::pg_store::PgStore;
use people_api::RecordStore;

async fn store<R>(pool: &PgPool) -> PgStore<R> {
    DatabaseManager::from_pool(pool.clone())
        .migrate()
        .await
        .expect("failed to create tables");
    PgStore::new(pool.clone())
}

fn person(name: &str) -> Person {
    Person {
        name: name.to_string(),
        last_name: "Lee".to_string(),
        ..Person::default()
    }
}

#[sqlx::test(migrations = false)]
async fn insert_returns_the_stored_row(pool: PgPool) {
    let store = store::<Person>(&pool).await;

    let first = store.insert(person("Ann")).await.unwrap();
    let second = store.insert(person("Bo")).await.unwrap();

    assert!(first.model.id > 0);
    assert!(second.model.id > first.model.id);
    assert_eq!(first.name, "Ann");
    assert_eq!(first.last_name, "Lee");
    assert_eq!(first.model.created_at, first.model.updated_at);
    assert!(first.model.deleted_at.is_none());

    let found = store.find_by_id(first.model.id).await.unwrap().unwrap();
    assert_eq!(found, first);
}

#[sqlx::test(migrations = false)]
async fn soft_deleted_rows_are_hidden_but_kept(pool: PgPool) {
    let store = store::<Person>(&pool).await;
    let ann = store.insert(person("Ann")).await.unwrap();
    store.insert(person("Bo")).await.unwrap();

    let deleted = store.delete(ann.clone()).await.unwrap();
    assert!(deleted.model.deleted_at.is_some());

    let names: Vec<_> = store
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Bo"]);
    assert!(store.find_by_id(ann.model.id).await.unwrap().is_none());

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM people")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 2);
}

#[sqlx::test(migrations = false)]
async fn deleting_a_zero_record_touches_nothing(pool: PgPool) {
    let store = store::<Person>(&pool).await;
    store.insert(person("Ann")).await.unwrap();

    let result = store.delete(Person::default()).await.unwrap();
    assert_eq!(result.model.id, 0);
    assert!(result.model.deleted_at.is_none());
    assert_eq!(store.find_all().await.unwrap().len(), 1);
}

#[sqlx::test(migrations = false)]
async fn save_overwrites_row_and_inserts_new_records(pool: PgPool) {
    let store = store::<Person>(&pool).await;
    let mut ann = store.insert(person("Ann")).await.unwrap();
    ann.age = "31".to_string();

    let saved = store.save(ann.clone()).await.unwrap();
    assert_eq!(saved.model.id, ann.model.id);
    assert_eq!(saved.model.created_at, ann.model.created_at);
    assert!(saved.model.updated_at >= ann.model.updated_at);
    assert_eq!(
        store.find_by_id(ann.model.id).await.unwrap().unwrap().age,
        "31"
    );

    let fresh = store.save(person("Cy")).await.unwrap();
    assert!(fresh.model.id > ann.model.id);
    assert_eq!(store.find_all().await.unwrap().len(), 2);
}

#[sqlx::test(migrations = false)]
async fn saving_a_missing_row_is_an_error(pool: PgPool) {
    let store = store::<Person>(&pool).await;
    let mut ghost = person("Ghost");
    ghost.model.id = 4242;

    let err = store.save(ghost).await.unwrap_err();
    assert_eq!(err.to_string(), "no people row with id 4242");
}

#[sqlx::test(migrations = false)]
async fn latest_sequence_includes_deleted_rows(pool: PgPool) {
    let store = store::<User>(&pool).await;
    assert_eq!(store.latest_sequence().await.unwrap(), None);

    store
        .insert(User {
            user_id: 3,
            ..User::default()
        })
        .await
        .unwrap();
    let user = store
        .insert(User {
            user_id: 7,
            ..User::default()
        })
        .await
        .unwrap();
    assert_eq!(user.user_id, 7);
    store.delete(user).await.unwrap();

    assert_eq!(store.latest_sequence().await.unwrap(), Some(7));
}

#[sqlx::test(migrations = false)]
async fn records_without_sequence_report_none(pool: PgPool) {
    let store = store::<Person>(&pool).await;
    store.insert(person("Ann")).await.unwrap();
    assert_eq!(store.latest_sequence().await.unwrap(), None);
}
