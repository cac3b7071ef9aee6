mod common;

use sqlx::PgPool;
use std::sync::Arc;
use shortlink::domain::entities::NewUser;
use shortlink::domain::repositories::UserRepository;
use shortlink::error::AppError;
use shortlink::infrastructure::persistence::PgUserRepository;

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        name: "Test User".to_string(),
        image: None,
    }
}

#[sqlx::test]
async fn test_insert_and_find_by_id(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    let inserted = repo.insert(new_user("test@example.com")).await.unwrap();

    let found = repo.find_by_id(inserted.id).await.unwrap().unwrap();
    assert_eq!(found.email, "test@example.com");
    assert_eq!(found.name, "Test User");
    assert!(found.image.is_none());
}

#[sqlx::test]
async fn test_find_by_email(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    repo.insert(new_user("findme@example.com")).await.unwrap();

    assert!(
        repo.find_by_email("findme@example.com")
            .await
            .unwrap()
            .is_some()
    );
    assert!(
        repo.find_by_email("nobody@example.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test]
async fn test_duplicate_email_is_conflict(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    repo.insert(new_user("dup@example.com")).await.unwrap();
    let result = repo.insert(new_user("dup@example.com")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_find_by_id_miss_is_none(pool: PgPool) {
    let repo = PgUserRepository::new(Arc::new(pool));

    assert!(repo.find_by_id(9999).await.unwrap().is_none());
}
