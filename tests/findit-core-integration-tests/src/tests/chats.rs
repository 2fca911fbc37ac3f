// findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use anyhow::Result;
use futures::StreamExt;
use pretty_assertions::assert_eq;
use serde_json::json;

use findit_core::dtos::{ChatId, ChatSummary, Failure, UserId};
use findit_core::test::mock_data;
use findit_core::{DocumentStore, DocumentStoreError};

use super::{fields, TestEnvironment};

async fn insert_chat(
    env: &TestEnvironment,
    id: &str,
    participants: &[&str],
    last_timestamp: i64,
) -> Result<()> {
    env.store
        .set(
            "chats",
            id,
            fields(json!({
                "participantIds": participants,
                "lastMessage": format!("Message in {id}"),
                "lastTimestamp": last_timestamp,
            })),
        )
        .await?;
    Ok(())
}

fn ids(chats: &[ChatSummary]) -> Vec<ChatId> {
    chats.iter().map(|chat| chat.id.clone()).collect()
}

#[tokio::test]
async fn test_chats_are_ordered_by_last_activity() -> Result<()> {
    let env = TestEnvironment::signed_in()?;

    insert_chat(&env, "old", &["jane-doe", "john"], 1_000).await?;
    insert_chat(&env, "new", &["bob", "jane-doe"], 3_000).await?;
    insert_chat(&env, "middle", &["jane-doe", "alice"], 2_000).await?;
    insert_chat(&env, "foreign", &["bob", "alice"], 4_000).await?;

    let mut chats = env.client.chats.watch_chats(&mock_data::account_id())?;
    let snapshot = chats.next().await.transpose()?.unwrap_or_default();

    assert_eq!(
        ids(&snapshot),
        vec![
            ChatId::from("new"),
            ChatId::from("middle"),
            ChatId::from("old")
        ]
    );
    assert_eq!(snapshot[0].last_message.as_deref(), Some("Message in new"));
    assert_eq!(
        snapshot[0].partner_of(&mock_data::account_id()),
        Some(&UserId::from("bob"))
    );

    Ok(())
}

#[tokio::test]
async fn test_changes_emit_complete_snapshots() -> Result<()> {
    let env = TestEnvironment::signed_in()?;
    insert_chat(&env, "first", &["jane-doe", "john"], 1_000).await?;

    let mut chats = env.client.chats.watch_chats(&mock_data::account_id())?;
    assert_eq!(
        ids(&chats.next().await.transpose()?.unwrap_or_default()),
        vec![ChatId::from("first")]
    );

    insert_chat(&env, "second", &["jane-doe", "alice"], 2_000).await?;
    assert_eq!(
        ids(&chats.next().await.transpose()?.unwrap_or_default()),
        vec![ChatId::from("second"), ChatId::from("first")]
    );

    // Moving the older chat to the front reorders the whole list.
    env.store
        .update("chats", "first", fields(json!({ "lastTimestamp": 5_000 })))
        .await?;
    assert_eq!(
        ids(&chats.next().await.transpose()?.unwrap_or_default()),
        vec![ChatId::from("first"), ChatId::from("second")]
    );

    Ok(())
}

#[tokio::test]
async fn test_user_without_chats_gets_empty_list() -> Result<()> {
    let env = TestEnvironment::signed_in()?;
    insert_chat(&env, "foreign", &["bob", "alice"], 1_000).await?;

    let mut chats = env.client.chats.watch_current_user_chats()?;
    assert_eq!(chats.next().await.transpose()?, Some(vec![]));

    Ok(())
}

#[tokio::test]
async fn test_dropping_the_query_removes_the_watch() -> Result<()> {
    let env = TestEnvironment::signed_in()?;
    insert_chat(&env, "first", &["jane-doe", "john"], 1_000).await?;

    let mut chats = env.client.chats.watch_chats(&mock_data::account_id())?;
    // Nothing is registered until the query is polled.
    assert_eq!(env.store.watch_count(), 0);

    chats.next().await;
    assert_eq!(env.store.watch_count(), 1);

    drop(chats);
    assert_eq!(env.store.watch_count(), 0);

    Ok(())
}

#[tokio::test]
async fn test_cancelled_query_yields_nothing() -> Result<()> {
    let env = TestEnvironment::signed_in()?;
    insert_chat(&env, "first", &["jane-doe", "john"], 1_000).await?;

    let mut chats = env.client.chats.watch_chats(&mock_data::account_id())?;
    chats.next().await;

    chats.cancel();
    assert!(chats.is_terminated());
    assert_eq!(env.store.watch_count(), 0);

    insert_chat(&env, "second", &["jane-doe", "alice"], 2_000).await?;
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert!(chats.next().await.is_none());

    Ok(())
}

#[tokio::test]
async fn test_watch_failure_ends_the_stream() -> Result<()> {
    let env = TestEnvironment::signed_in()?;
    insert_chat(&env, "first", &["jane-doe", "john"], 1_000).await?;

    let mut chats = env.client.chats.watch_chats(&mock_data::account_id())?;
    assert!(chats.next().await.is_some());

    env.store.fail_watches("chats", || {
        DocumentStoreError::PermissionDenied("Missing or insufficient permissions.".to_string())
    });

    let failure = chats.next().await;
    assert!(matches!(failure, Some(Err(Failure::Watch(_)))));
    assert_eq!(
        failure.and_then(Result::err).map(|err| err.to_string()),
        Some(
            "Live query failed. Permission denied. Missing or insufficient permissions."
                .to_string()
        )
    );

    assert!(chats.next().await.is_none());
    assert_eq!(env.store.watch_count(), 0);

    Ok(())
}

#[tokio::test]
async fn test_empty_user_id_is_rejected() -> Result<()> {
    let env = TestEnvironment::signed_in()?;

    assert!(matches!(
        env.client.chats.watch_chats(&UserId::from("  ")),
        Err(Failure::Validation(_))
    ));
    assert_eq!(env.store.watch_count(), 0);

    Ok(())
}
