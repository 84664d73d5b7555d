//! API Integration Tests
//!
//! Each test spawns its own server over a fresh in-memory store.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::sync::Arc;

use chat_core::rbac::roles;
use chat_core::BotEventType;
use integration_tests::{
    assert_json, assert_status, bot_body, channel_body, eventually, group_body, stamp_body,
    webhook_body, RecordingMulticaster, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/health/ready").await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["botDispatcher"], "running");
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/stamps").await.unwrap();
    let body: Value = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body["error"]["code"], "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let server = TestServer::start().await.unwrap();
    let response = server.get_auth("/api/v1/users/@me", "garbage").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Permission Tests
// ============================================================================

#[tokio::test]
async fn test_read_user_can_list_but_not_create_stamps() {
    let server = TestServer::start().await.unwrap();
    let reader = server.user_with_role(roles::READ).await.unwrap();

    let response = server.get_auth("/api/v1/stamps", &reader.token).await.unwrap();
    let stamps: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(stamps.is_empty());

    let response = server
        .post_auth("/api/v1/stamps", &reader.token, &stamp_body())
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body["error"]["code"], "MISSING_PERMISSIONS");

    // The denied request left the store untouched
    let response = server.get_auth("/api/v1/stamps", &reader.token).await.unwrap();
    let stamps: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(stamps.is_empty());
}

#[tokio::test]
async fn test_my_permissions() {
    let server = TestServer::start().await.unwrap();
    let writer = server.user_with_role(roles::WRITE).await.unwrap();

    let response = server
        .get_auth("/api/v1/users/@me/permissions", &writer.token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["role"], "write");
    let permissions = body["permissions"].as_array().unwrap();
    assert!(permissions.iter().any(|p| p == "create_stamp"));
    assert!(!permissions.iter().any(|p| p == "delete_stamp"));

    let path = format!("/api/v1/users/{}/permissions", writer.id);
    let response = server.get_auth(&path, &writer.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_invalid_path_id() {
    let server = TestServer::start().await.unwrap();
    let reader = server.user_with_role(roles::READ).await.unwrap();

    let response = server
        .get_auth("/api/v1/stamps/not-a-uuid", &reader.token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Channel / Message / Pin Tests
// ============================================================================

#[tokio::test]
async fn test_channel_message_pin_flow() {
    let server = TestServer::start().await.unwrap();
    let writer = server.user_with_role(roles::WRITE).await.unwrap();

    let response = server
        .post_auth("/api/v1/channels", &writer.token, &channel_body())
        .await
        .unwrap();
    let channel: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let channel_id = channel["id"].as_str().unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/channels/{channel_id}/messages"),
            &writer.token,
            &json!({ "content": "hello" }),
        )
        .await
        .unwrap();
    let message: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let message_id = message["id"].as_str().unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/channels/{channel_id}/pins"),
            &writer.token,
            &json!({ "messageId": message_id }),
        )
        .await
        .unwrap();
    let pin: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(pin["message"]["content"], "hello");
    let pin_id = pin["id"].as_str().unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/channels/{channel_id}/pins"),
            &writer.token,
            &json!({ "messageId": message_id }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/pins/{pin_id}"), &writer.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/pins/{pin_id}"), &writer.token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body["error"]["code"], "UNKNOWN_PIN");
}

#[tokio::test]
async fn test_post_message_validation() {
    let server = TestServer::start().await.unwrap();
    let writer = server.user_with_role(roles::WRITE).await.unwrap();

    let response = server
        .post_auth("/api/v1/channels", &writer.token, &channel_body())
        .await
        .unwrap();
    let channel: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let channel_id = channel["id"].as_str().unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/channels/{channel_id}/messages"),
            &writer.token,
            &json!({ "content": "" }),
        )
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_star_flow() {
    let server = TestServer::start().await.unwrap();
    let writer = server.user_with_role(roles::WRITE).await.unwrap();

    let response = server
        .post_auth("/api/v1/channels", &writer.token, &channel_body())
        .await
        .unwrap();
    let channel: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let channel_id = channel["id"].as_str().unwrap();

    let response = server
        .post_auth(
            "/api/v1/users/@me/stars",
            &writer.token,
            &json!({ "channelId": channel_id }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/v1/users/@me/stars", &writer.token)
        .await
        .unwrap();
    let stars: Vec<String> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stars, vec![channel_id.to_string()]);

    let response = server
        .delete_auth(&format!("/api/v1/users/@me/stars/{channel_id}"), &writer.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Webhook Tests
// ============================================================================

#[tokio::test]
async fn test_webhook_flow() {
    let server = TestServer::start().await.unwrap();
    let owner = server.user_with_role(roles::USER).await.unwrap();
    let other = server.user_with_role(roles::USER).await.unwrap();

    let response = server
        .post_auth("/api/v1/channels", &owner.token, &channel_body())
        .await
        .unwrap();
    let channel: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let channel_id = channel["id"].as_str().unwrap();

    let response = server
        .post_auth("/api/v1/webhooks", &owner.token, &webhook_body(channel_id))
        .await
        .unwrap();
    let webhook: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(webhook["secure"], true);
    assert!(webhook.get("secret").is_none());
    let webhook_path = format!("/api/v1/webhooks/{}", webhook["id"].as_str().unwrap());

    let response = server
        .patch_auth(&webhook_path, &other.token, &json!({ "name": "hijack" }))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_CREATOR");

    let response = server
        .patch_auth(&webhook_path, &owner.token, &json!({ "description": "updated" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/v1/webhooks?all=true", &owner.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&webhook_path, &owner.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth(&webhook_path, &owner.token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body["error"]["code"], "UNKNOWN_WEBHOOK");
}

// ============================================================================
// User Group / Bot Event Tests
// ============================================================================

#[tokio::test]
async fn test_group_delete_notifies_subscribed_bots() {
    let recorder = RecordingMulticaster::default();
    let server = TestServer::start_with_multicaster(Arc::new(recorder.clone()))
        .await
        .unwrap();
    let manager = server.user_with_role(roles::USER).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/bots",
            &manager.token,
            &bot_body(&[BotEventType::UserGroupDeleted]),
        )
        .await
        .unwrap();
    let subscribed: Value = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/bots",
            &manager.token,
            &bot_body(&[BotEventType::StampCreated]),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth("/api/v1/groups", &manager.token, &group_body())
        .await
        .unwrap();
    let group: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let group_id = group["id"].as_str().unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/groups/{group_id}"), &manager.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    assert!(
        eventually(|| !recorder
            .deliveries_of(BotEventType::UserGroupDeleted)
            .is_empty())
        .await
    );
    let deliveries = recorder.deliveries_of(BotEventType::UserGroupDeleted);
    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0].payload["groupId"], group_id);
    assert_eq!(
        deliveries[0].bot_ids,
        vec![subscribed["id"].as_str().unwrap().parse::<uuid::Uuid>().unwrap()]
    );
}

#[tokio::test]
async fn test_only_group_admin_may_delete() {
    let server = TestServer::start().await.unwrap();
    let creator = server.user_with_role(roles::WRITE).await.unwrap();
    let other = server.user_with_role(roles::WRITE).await.unwrap();

    let response = server
        .post_auth("/api/v1/groups", &creator.token, &group_body())
        .await
        .unwrap();
    let group: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let group_path = format!("/api/v1/groups/{}", group["id"].as_str().unwrap());

    let response = server.delete_auth(&group_path, &other.token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body["error"]["code"], "NOT_GROUP_ADMIN");

    let response = server.get_auth(&group_path, &other.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_stamp_lifecycle() {
    let server = TestServer::start().await.unwrap();
    let writer = server.user_with_role(roles::WRITE).await.unwrap();
    let admin = server.user_with_role(roles::ADMIN).await.unwrap();

    let response = server
        .post_auth("/api/v1/stamps", &writer.token, &stamp_body())
        .await
        .unwrap();
    let stamp: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let stamp_path = format!("/api/v1/stamps/{}", stamp["id"].as_str().unwrap());

    let response = server
        .patch_auth(&stamp_path, &writer.token, &json!({ "name": "renamed" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.delete_auth(&stamp_path, &writer.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&stamp_path, &admin.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_message_stamp_flow() {
    let server = TestServer::start().await.unwrap();
    let writer = server.user_with_role(roles::WRITE).await.unwrap();
    let reader = server.user_with_role(roles::READ).await.unwrap();

    let response = server
        .post_auth("/api/v1/channels", &writer.token, &channel_body())
        .await
        .unwrap();
    let channel: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let response = server
        .post_auth(
            &format!("/api/v1/channels/{}/messages", channel["id"].as_str().unwrap()),
            &writer.token,
            &json!({ "content": "hello" }),
        )
        .await
        .unwrap();
    let message: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let response = server
        .post_auth("/api/v1/stamps", &writer.token, &stamp_body())
        .await
        .unwrap();
    let stamp: Value = assert_json(response, StatusCode::CREATED).await.unwrap();

    let list_path = format!("/api/v1/messages/{}/stamps", message["id"].as_str().unwrap());
    let stamp_path = format!("{list_path}/{}", stamp["id"].as_str().unwrap());

    let response = server.post_auth(&stamp_path, &reader.token, &json!({})).await.unwrap();
    let body: Value = assert_json(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(body["error"]["code"], "MISSING_PERMISSIONS");

    for _ in 0..2 {
        let response = server.post_auth(&stamp_path, &writer.token, &json!({})).await.unwrap();
        assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    }

    let response = server.get_auth(&list_path, &writer.token).await.unwrap();
    let stamps: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(stamps.len(), 1);
    assert_eq!(stamps[0]["count"], 2);
    assert_eq!(stamps[0]["stampId"], stamp["id"]);

    let response = server.delete_auth(&stamp_path, &writer.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth(&list_path, &writer.token).await.unwrap();
    let stamps: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(stamps.is_empty());
}
