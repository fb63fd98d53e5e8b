//! User service tests against the in-memory repository.

mod common;

use chrono::NaiveDate;

use pickup_backend::domain::{AvatarFile, NewUser, UserDeletion};
use pickup_backend::errors::AppError;
use pickup_backend::services::UserService;

use common::{user_manager, InMemoryUsers};

fn sample_input() -> NewUser {
    NewUser {
        email: Some("a@b.com".to_string()),
        name: Some("A".to_string()),
        birthday: NaiveDate::from_ymd_opt(2000, 1, 1),
        ..NewUser::default()
    }
}

#[tokio::test]
async fn test_register_with_all_fields_echoes_input() {
    let repo = InMemoryUsers::new();
    let service = user_manager(repo.clone());

    let user = service
        .register(NewUser {
            name: Some("Ada".to_string()),
            surname: Some("Lovelace".to_string()),
            username: Some("ada".to_string()),
            email: Some("ada@example.com".to_string()),
            birthday: NaiveDate::from_ymd_opt(1815, 12, 10),
            password: Some("analytical".to_string()),
            status: Some(2),
            avatar_url: Some("https://cdn.example.com/avatars/ada.png".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(user.id, 1);
    assert_eq!(user.name, "Ada");
    assert_eq!(user.surname, "Lovelace");
    assert_eq!(user.username, "ada");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.birthday, NaiveDate::from_ymd_opt(1815, 12, 10).unwrap());
    assert_eq!(user.password, "analytical");
    assert_eq!(user.status, 2);
    assert_eq!(
        user.avatar_url.as_deref(),
        Some("https://cdn.example.com/avatars/ada.png")
    );
}

#[tokio::test]
async fn test_register_applies_defaults() {
    let service = user_manager(InMemoryUsers::new());

    let user = service.register(sample_input()).await.unwrap();

    assert_eq!(user.surname, "");
    assert_eq!(user.username, "");
    assert_eq!(user.password, "");
    assert_eq!(user.status, 0);
    assert!(user.avatar_url.is_none());
}

#[tokio::test]
async fn test_register_without_birthday_fails_in_storage() {
    let repo = InMemoryUsers::new();
    let service = user_manager(repo.clone());

    let result = service
        .register(NewUser {
            email: Some("a@b.com".to_string()),
            ..NewUser::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::Database(_))));
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_lookup_returns_registered_record() {
    let service = user_manager(InMemoryUsers::new());

    let created = service.register(sample_input()).await.unwrap();
    let found = service.get_user_by_email("a@b.com").await.unwrap();

    assert_eq!(found, Some(created));
}

#[tokio::test]
async fn test_lookup_unknown_email_is_none() {
    let service = user_manager(InMemoryUsers::new());

    assert!(service.get_user_by_email("x@y.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_emails_resolve_to_first_match() {
    let service = user_manager(InMemoryUsers::new());

    let first = service.register(sample_input()).await.unwrap();
    service.register(sample_input()).await.unwrap();

    let found = service.get_user_by_email("a@b.com").await.unwrap().unwrap();
    assert_eq!(found.id, first.id);
}

#[tokio::test]
async fn test_delete_unknown_email_leaves_store_unchanged() {
    let repo = InMemoryUsers::new();
    let service = user_manager(repo.clone());
    service.register(sample_input()).await.unwrap();

    let result = service.delete_user("x@y.com").await.unwrap();

    assert!(result.is_none());
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_delete_removes_exactly_one_record() {
    let repo = InMemoryUsers::new();
    let service = user_manager(repo.clone());
    service.register(sample_input()).await.unwrap();
    service
        .register(NewUser {
            email: Some("other@b.com".to_string()),
            ..sample_input()
        })
        .await
        .unwrap();

    let result = service.delete_user("a@b.com").await.unwrap();

    assert_eq!(result, Some(UserDeletion { affected: 1 }));
    assert_eq!(repo.len(), 1);
    assert!(service.get_user_by_email("a@b.com").await.unwrap().is_none());
    assert!(service.get_user_by_email("other@b.com").await.unwrap().is_some());
}

#[tokio::test]
async fn test_update_avatar_changes_only_avatar_url() {
    let service = user_manager(InMemoryUsers::new());
    let before = service.register(sample_input()).await.unwrap();

    let upload = service
        .update_avatar(
            "a@b.com",
            AvatarFile {
                file_name: "me.png".to_string(),
                bytes: vec![1, 2, 3],
            },
        )
        .await
        .unwrap();

    assert_eq!(upload.url, "https://cdn.example.com/avatars/me.png");
    assert_eq!(upload.size, 3);

    let after = service.get_user_by_email("a@b.com").await.unwrap().unwrap();
    assert_eq!(after.avatar_url.as_deref(), Some(upload.url.as_str()));

    let mut expected = before;
    expected.avatar_url = Some(upload.url);
    assert_eq!(after, expected);
}

#[tokio::test]
async fn test_same_file_name_maps_to_same_url() {
    let service = user_manager(InMemoryUsers::new());
    service.register(sample_input()).await.unwrap();

    let file = AvatarFile {
        file_name: "me.png".to_string(),
        bytes: vec![0; 10],
    };
    let first = service.update_avatar("a@b.com", file.clone()).await.unwrap();
    let second = service.update_avatar("a@b.com", file).await.unwrap();

    assert_eq!(first.url, second.url);
}
