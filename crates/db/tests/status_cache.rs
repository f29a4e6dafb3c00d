//! Integration tests for the table-backed status cache and the
//! complaints-table status source.

use sqlx::SqlitePool;

use smartopolis_core::error::CoreError;
use smartopolis_core::reconcile::StatusSource;
use smartopolis_core::store::StatusStore;
use smartopolis_db::models::complaint::CreateComplaint;
use smartopolis_db::repositories::ComplaintRepo;
use smartopolis_db::status_store::{ComplaintStatusSource, DbStatusStore};

fn minimal_complaint() -> CreateComplaint {
    CreateComplaint {
        title: "Cache test".to_string(),
        description: None,
        problem_type: None,
        esia: None,
        author: None,
        author_email: None,
        author_phone: None,
        author_address: None,
        visible_to_all: None,
        publish_result: None,
        assigned_to: None,
        images: None,
        attachments: None,
        video: None,
        result_images: None,
        created_date: None,
        deadline: None,
        days_remaining: None,
        standard_period: None,
        external_system: None,
        authority: None,
        external_id: None,
        external_category: None,
        link: None,
        status: None,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn db_store_save_load_clear(pool: SqlitePool) {
    let store = DbStatusStore::new(pool);

    assert_eq!(store.load(5).await.unwrap(), None);

    store.save(5, "PendingModeration").await.unwrap();
    assert_eq!(store.load(5).await.unwrap(), Some("PendingModeration".to_string()));

    store.clear(5).await.unwrap();
    assert_eq!(store.load(5).await.unwrap(), None);
}

#[sqlx::test(migrations = "./migrations")]
async fn db_store_upsert_is_last_write_wins(pool: SqlitePool) {
    let store = DbStatusStore::new(pool);

    store.save(8, "New").await.unwrap();
    store.save(8, "Closed").await.unwrap();
    assert_eq!(store.load(8).await.unwrap(), Some("Closed".to_string()));
}

#[sqlx::test(migrations = "./migrations")]
async fn status_source_reads_and_writes_the_record(pool: SqlitePool) {
    let complaint = ComplaintRepo::create(&pool, &minimal_complaint()).await.unwrap();
    let source = ComplaintStatusSource::new(pool);

    assert_eq!(
        source.read_status(complaint.id).await.unwrap(),
        Some("New".to_string())
    );

    source.write_status(complaint.id, "Rejected").await.unwrap();
    assert_eq!(
        source.read_status(complaint.id).await.unwrap(),
        Some("Rejected".to_string())
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn status_source_blank_status_reads_as_none(pool: SqlitePool) {
    let complaint = ComplaintRepo::create(&pool, &minimal_complaint()).await.unwrap();
    let source = ComplaintStatusSource::new(pool.clone());

    sqlx::query("UPDATE complaints SET status = '' WHERE id = ?")
        .bind(complaint.id)
        .execute(&pool)
        .await
        .unwrap();

    assert_eq!(source.read_status(complaint.id).await.unwrap(), None);
}

#[sqlx::test(migrations = "./migrations")]
async fn status_source_unknown_id_is_not_found(pool: SqlitePool) {
    let source = ComplaintStatusSource::new(pool);

    match source.read_status(31337).await {
        Err(CoreError::NotFound { entity, id }) => {
            assert_eq!(entity, "Complaint");
            assert_eq!(id, 31337);
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}
