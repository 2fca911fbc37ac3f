// findit-core
//
// Copyright: 2026, The Findit Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use chrono::{TimeZone, Utc};
use futures::StreamExt;
use pretty_assertions::assert_eq;
use serde_json::json;

use findit_core::dtos::{ChatId, ChatMessage, Failure, MessageId, UserId};
use findit_core::test::mock_data;
use findit_core::DocumentStore;

use super::{fields, StaticAuthService, TestEnvironment};

async fn insert_chat(env: &TestEnvironment, id: &str) -> Result<()> {
    env.store
        .set(
            "chats",
            id,
            fields(json!({
                "participantIds": ["jane-doe", "john"],
                "lastTimestamp": 0,
            })),
        )
        .await?;
    Ok(())
}

#[tokio::test]
async fn test_messages_are_ordered_oldest_first() -> Result<()> {
    let env = TestEnvironment::signed_in()?;
    insert_chat(&env, "chat-1").await?;

    for (id, text, timestamp) in [("m2", "Where?", 2_000), ("m1", "Found a wallet", 1_000)] {
        env.store
            .set(
                "chats/chat-1/messages",
                id,
                fields(json!({ "senderId": "john", "text": text, "timestamp": timestamp })),
            )
            .await?;
    }

    let mut messages = env.client.chats.watch_messages(&ChatId::from("chat-1"))?;
    let snapshot = messages.next().await.transpose()?.unwrap_or_default();

    assert_eq!(
        snapshot,
        vec![
            ChatMessage {
                id: MessageId::from("m1"),
                sender_id: UserId::from("john"),
                text: "Found a wallet".to_string(),
                timestamp: Utc.timestamp_millis_opt(1_000).unwrap(),
            },
            ChatMessage {
                id: MessageId::from("m2"),
                sender_id: UserId::from("john"),
                text: "Where?".to_string(),
                timestamp: Utc.timestamp_millis_opt(2_000).unwrap(),
            }
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_sent_message_shows_up_in_chat_and_list() -> Result<()> {
    let env = TestEnvironment::signed_in()?;
    insert_chat(&env, "chat-1").await?;

    let mut messages = env.client.chats.watch_messages(&ChatId::from("chat-1"))?;
    let mut chats = env.client.chats.watch_chats(&mock_data::account_id())?;
    assert_eq!(messages.next().await.transpose()?, Some(vec![]));
    chats.next().await;

    let sent = env
        .client
        .chats
        .send_message(&ChatId::from("chat-1"), "It's mine!")
        .await?;

    assert_eq!(sent.id, MessageId::from("msg-1"));
    assert_eq!(sent.sender_id, mock_data::account_id());
    assert_eq!(sent.timestamp, mock_data::reference_date());

    assert_eq!(messages.next().await.transpose()?, Some(vec![sent.clone()]));

    let chat = chats
        .next()
        .await
        .transpose()?
        .and_then(|chats| chats.into_iter().next());
    assert_eq!(
        chat.as_ref().and_then(|chat| chat.last_message.as_deref()),
        Some("It's mine!")
    );
    assert_eq!(
        chat.map(|chat| chat.last_timestamp),
        Some(mock_data::reference_date())
    );

    Ok(())
}

#[tokio::test]
async fn test_sending_requires_signed_in_user() -> Result<()> {
    let env = TestEnvironment::new(StaticAuthService::default())?;
    insert_chat(&env, "chat-1").await?;

    let result = env
        .client
        .chats
        .send_message(&ChatId::from("chat-1"), "Hello")
        .await;

    assert!(matches!(result, Err(Failure::NotSignedIn)));

    Ok(())
}

#[tokio::test]
async fn test_sending_to_unknown_chat_fails() -> Result<()> {
    let env = TestEnvironment::signed_in()?;

    let result = env
        .client
        .chats
        .send_message(&ChatId::from("nope"), "Hello")
        .await;

    assert!(matches!(result, Err(Failure::Delivery(_))));
    assert_eq!(env.store.get("chats/nope/messages", "msg-1").await?, None);
    assert_eq!(env.store.get("chats", "nope").await?, None);

    Ok(())
}
