// findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{format_err, Result};
use futures::StreamExt;
use image::GenericImageView;
use pretty_assertions::assert_eq;

use findit_core::dtos::{
    EditProfileEffect, EditProfileEvent, ImageReference, ProgressState, UserId,
};
use findit_core::test::mock_data;
use findit_core::DocumentStore;

use super::{StaticAuthService, TestEnvironment, STORAGE_BASE_URL};

#[tokio::test]
async fn test_profile_image_is_uploaded_upright() -> Result<()> {
    let env = TestEnvironment::signed_in()?;
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("portrait.jpg");
    std::fs::write(&path, mock_data::jpeg_with_exif_orientation(20, 10, 8))?;

    let states = env
        .client
        .profile_image
        .process_and_upload(ImageReference::from(path.to_string_lossy()))
        .collect::<Vec<_>>()
        .await;

    let expected_url = format!("{STORAGE_BASE_URL}profile_images/jane-doe.jpg").parse()?;
    assert_eq!(states.last(), Some(&ProgressState::Success(expected_url)));
    assert!(states[..states.len() - 1]
        .iter()
        .all(|state| *state == ProgressState::Loading(true)));

    let blob = env
        .blobs
        .get("profile_images/jane-doe.jpg")
        .ok_or_else(|| format_err!("Nothing was uploaded"))?;
    assert_eq!(blob.media_type.essence_str(), "image/jpeg");
    assert_eq!(image::load_from_memory(&blob.data)?.dimensions(), (10, 20));

    let stored_url = env
        .store
        .get("users", "jane-doe")
        .await?
        .and_then(|document| document.get_str("profileImageUrl").map(ToString::to_string));
    assert_eq!(
        stored_url.as_deref(),
        Some("https://storage.findit.ge/bucket/profile_images/jane-doe.jpg")
    );
    assert_eq!(
        env.client
            .user_data
            .user_profile_image(&mock_data::account_id())
            .await
            .map(String::from),
        stored_url
    );

    Ok(())
}

#[tokio::test]
async fn test_missing_file_fails_without_side_effects() -> Result<()> {
    let env = TestEnvironment::signed_in()?;
    let dir = tempfile::tempdir()?;

    let states = env
        .client
        .profile_image
        .process_and_upload(ImageReference::from(
            dir.path().join("missing.jpg").to_string_lossy(),
        ))
        .collect::<Vec<_>>()
        .await;

    assert!(matches!(
        states.as_slice(),
        [ProgressState::Loading(true), ProgressState::Error(message)]
            if message.starts_with("Failed to read image.")
    ));
    assert!(env.blobs.is_empty());
    assert!(env.store.get("users", "jane-doe").await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_coordinator_reports_new_image() -> Result<()> {
    let env = TestEnvironment::new(StaticAuthService::signed_in(UserId::from("john")))?;
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("avatar.png");
    std::fs::write(&path, mock_data::png(8, 8))?;

    let (mut coordinator, mut effects) = env.client.edit_profile();
    coordinator
        .handle(EditProfileEvent::ProfileImageSelected(ImageReference::from(
            path.to_string_lossy(),
        )))
        .await;

    assert_eq!(
        effects.try_recv().ok(),
        Some(EditProfileEffect::ProfileImageUpdated(
            format!("{STORAGE_BASE_URL}profile_images/john.jpg").parse()?
        ))
    );
    assert_eq!(env.blobs.len(), 1);

    Ok(())
}
