// findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use futures::StreamExt;
use pretty_assertions::assert_eq;
use secrecy::Secret;
use serde_json::json;

use findit_core::dtos::{
    EditProfileEffect, EditProfileEvent, ProgressState, UserId, UserProfile, UNKNOWN_USER_NAME,
};
use findit_core::test::mock_data;
use findit_core::DocumentStore;

use super::{fields, TestEnvironment};

async fn insert_jane(env: &TestEnvironment) -> Result<()> {
    env.store
        .set(
            "users",
            "jane-doe",
            fields(json!({
                "name": "Jane",
                "surname": "Doe",
                "phone": "+995599123456",
                "email": "jane@findit.ge",
                "profileImageUrl": "https://storage.findit.ge/bucket/profile_images/jane-doe.jpg",
            })),
        )
        .await?;
    Ok(())
}

#[tokio::test]
async fn test_load_profile() -> Result<()> {
    let env = TestEnvironment::signed_in()?;
    insert_jane(&env).await?;

    let states = env
        .client
        .account
        .load_profile(&mock_data::account_id())
        .collect::<Vec<_>>()
        .await;

    let Some(ProgressState::Success(profile)) = states.last() else {
        panic!("Expected a profile, got {states:?}");
    };
    assert_eq!(profile.full_name().as_deref(), Some("Jane Doe"));
    assert_eq!(profile.email.as_deref(), Some("jane@findit.ge"));
    assert_eq!(
        profile.profile_image_url.as_ref().map(|url| url.as_str()),
        Some("https://storage.findit.ge/bucket/profile_images/jane-doe.jpg")
    );

    Ok(())
}

#[tokio::test]
async fn test_user_names() -> Result<()> {
    let env = TestEnvironment::signed_in()?;
    insert_jane(&env).await?;
    env.store
        .set("users", "broken", fields(json!({ "profileImageUrl": "not a url" })))
        .await?;

    assert_eq!(
        env.client
            .user_data
            .user_full_name(&mock_data::account_id())
            .await,
        "Jane Doe"
    );
    assert_eq!(
        env.client
            .user_data
            .user_full_name(&UserId::from("nobody"))
            .await,
        UNKNOWN_USER_NAME
    );
    assert_eq!(
        env.client
            .user_data
            .user_profile_image(&UserId::from("broken"))
            .await,
        None
    );

    Ok(())
}

#[tokio::test]
async fn test_edit_profile_round_trip() -> Result<()> {
    let env = TestEnvironment::signed_in()?;
    insert_jane(&env).await?;

    let (mut coordinator, mut effects) = env.client.edit_profile();
    coordinator.handle(EditProfileEvent::LoadProfile(mock_data::account_id())).await;

    let loaded = coordinator.state().user_profile.unwrap_or_default();
    let edited = UserProfile {
        surname: Some("Smith".to_string()),
        password: Some(Secret::new("n3w-password".to_string())),
        ..loaded
    };
    coordinator
        .handle(EditProfileEvent::ProfileChanged(edited))
        .await;
    coordinator.handle(EditProfileEvent::SaveClicked).await;

    assert_eq!(effects.try_recv().ok(), Some(EditProfileEffect::ProfileSaved));
    assert_eq!(env.auth.passwords(), vec!["n3w-password".to_string()]);

    let document = env
        .store
        .get("users", "jane-doe")
        .await?
        .map(|document| document.fields)
        .unwrap_or_default();
    assert_eq!(document.get("surname"), Some(&json!("Smith")));
    assert_eq!(document.get("name"), Some(&json!("Jane")));
    assert_eq!(document.get("password"), None);
    // Saving the form leaves the image reference alone.
    assert_eq!(
        document.get("profileImageUrl"),
        Some(&json!(
            "https://storage.findit.ge/bucket/profile_images/jane-doe.jpg"
        ))
    );

    Ok(())
}

#[tokio::test]
async fn test_saving_a_cleared_field_removes_its_value() -> Result<()> {
    let env = TestEnvironment::signed_in()?;
    insert_jane(&env).await?;

    let (mut coordinator, mut effects) = env.client.edit_profile();
    coordinator.handle(EditProfileEvent::LoadProfile(mock_data::account_id())).await;

    let loaded = coordinator.state().user_profile.unwrap_or_default();
    coordinator
        .handle(EditProfileEvent::ProfileChanged(UserProfile {
            surname: None,
            ..loaded
        }))
        .await;
    coordinator.handle(EditProfileEvent::SaveClicked).await;

    assert_eq!(effects.try_recv().ok(), Some(EditProfileEffect::ProfileSaved));

    let document = env
        .store
        .get("users", "jane-doe")
        .await?
        .map(|document| document.fields)
        .unwrap_or_default();
    assert_eq!(document.get("surname"), Some(&json!(null)));
    assert_eq!(document.get("name"), Some(&json!("Jane")));

    let states = env
        .client
        .account
        .load_profile(&mock_data::account_id())
        .collect::<Vec<_>>()
        .await;
    let Some(ProgressState::Success(profile)) = states.last() else {
        panic!("Expected a profile, got {states:?}");
    };
    assert_eq!(profile.surname, None);
    assert_eq!(profile.full_name().as_deref(), Some("Jane"));

    Ok(())
}

#[tokio::test]
async fn test_invalid_email_never_reaches_the_store() -> Result<()> {
    let env = TestEnvironment::signed_in()?;
    insert_jane(&env).await?;

    let (mut coordinator, mut effects) = env.client.edit_profile();
    coordinator.handle(EditProfileEvent::LoadProfile(mock_data::account_id())).await;

    let loaded = coordinator.state().user_profile.unwrap_or_default();
    coordinator
        .handle(EditProfileEvent::ProfileChanged(UserProfile {
            email: Some("jane@".to_string()),
            ..loaded
        }))
        .await;
    coordinator.handle(EditProfileEvent::SaveClicked).await;

    assert_eq!(
        effects.try_recv().ok(),
        Some(EditProfileEffect::ShowError(
            "Please enter a valid email address.".to_string()
        ))
    );

    let email = env
        .store
        .get("users", "jane-doe")
        .await?
        .and_then(|document| document.get_str("email").map(ToString::to_string));
    assert_eq!(email.as_deref(), Some("jane@findit.ge"));

    Ok(())
}

#[tokio::test]
async fn test_app_language() -> Result<()> {
    let env = TestEnvironment::signed_in()?;

    assert_eq!(env.client.settings.app_language().await?, "en");
    env.client.settings.set_app_language("ka").await?;
    assert_eq!(env.client.settings.app_language().await?, "ka");

    Ok(())
}
