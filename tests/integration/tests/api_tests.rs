//! API integration tests
//!
//! These tests require a running PostgreSQL instance and DATABASE_URL.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, test_pool, DirectChat, TestServer,
};
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

fn find_chat(chats: &Value, chat_id: i64) -> Value {
    chats["chats"]
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["id"] == json!(chat_id))
        .cloned()
        .unwrap_or_else(|| panic!("chat {chat_id} missing from {chats}"))
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Routing Tests
// ============================================================================

#[tokio::test]
async fn test_preflight() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server
        .request(Method::OPTIONS, "messages")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!(
        response.headers()["access-control-allow-headers"],
        "Content-Type, X-User-Id"
    );
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_route() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get_as("contacts", 1).await.unwrap();
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body, json!({ "error": "Not found" }));
}

// ============================================================================
// Chat and Message Tests
// ============================================================================

#[tokio::test]
async fn test_send_message_updates_chat_list() {
    if !check_test_env() {
        return;
    }

    let pool = test_pool().await.unwrap();
    let chat = DirectChat::seed(&pool, true).await.unwrap();
    let server = TestServer::start().await.unwrap();

    let response = server.get_as("chats", chat.me).await.unwrap();
    let chats: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let entry = find_chat(&chats, chat.chat_id);
    assert_eq!(entry["lastMessage"], json!(""));
    assert_eq!(entry["time"], json!(""));
    assert_eq!(entry["unread"], json!(0));
    assert_eq!(entry["online"], json!(true));

    let response = server
        .post_as(
            "messages",
            chat.me,
            &json!({ "chatId": chat.chat_id, "text": "  hello there " }),
        )
        .await
        .unwrap();
    let sent: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(sent["text"], json!("hello there"));
    assert_eq!(sent["isOwn"], json!(true));
    assert_eq!(sent["status"], json!("sent"));
    assert_eq!(sent["reactions"], json!([]));

    let response = server.get_as("chats", chat.me).await.unwrap();
    let chats: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let entry = find_chat(&chats, chat.chat_id);
    assert_eq!(entry["lastMessage"], json!("hello there"));
    assert_eq!(entry["time"], sent["time"]);
    assert_eq!(entry["unread"], json!(0));

    let response = server.get_as("chats", chat.peer).await.unwrap();
    let chats: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let entry = find_chat(&chats, chat.chat_id);
    assert_eq!(entry["unread"], json!(1));
    assert_eq!(entry["online"], json!(false));
}

#[tokio::test]
async fn test_message_history_per_viewer() {
    if !check_test_env() {
        return;
    }

    let pool = test_pool().await.unwrap();
    let chat = DirectChat::seed(&pool, false).await.unwrap();
    let server = TestServer::start().await.unwrap();

    for (sender, text) in [(chat.me, "hi"), (chat.peer, "yo")] {
        let response = server
            .post_as("messages", sender, &json!({ "chatId": chat.chat_id, "text": text }))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let route = format!("messages/{}", chat.chat_id);
    let response = server.get_as(&route, chat.me).await.unwrap();
    let history: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let messages = history["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["text"], json!("hi"));
    assert_eq!(messages[0]["isOwn"], json!(true));
    assert_eq!(messages[1]["text"], json!("yo"));
    assert_eq!(messages[1]["isOwn"], json!(false));

    let response = server.get_as(&route, chat.peer).await.unwrap();
    let history: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(history["messages"][0]["isOwn"], json!(false));
    assert_eq!(history["messages"][1]["isOwn"], json!(true));
}

#[tokio::test]
async fn test_send_message_validation() {
    if !check_test_env() {
        return;
    }

    let pool = test_pool().await.unwrap();
    let chat = DirectChat::seed(&pool, false).await.unwrap();
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_as("messages", chat.me, &json!({ "chatId": chat.chat_id, "text": "   " }))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body, json!({ "error": "Missing chatId or text" }));

    let route = format!("messages/{}", chat.chat_id);
    let response = server.get_as(&route, chat.me).await.unwrap();
    let history: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(history, json!({ "messages": [] }));
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_duplicate_reaction_is_stored_once() {
    if !check_test_env() {
        return;
    }

    let pool = test_pool().await.unwrap();
    let chat = DirectChat::seed(&pool, false).await.unwrap();
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_as("messages", chat.peer, &json!({ "chatId": chat.chat_id, "text": "news" }))
        .await
        .unwrap();
    let sent: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let react_route = format!("messages/{}/react", sent["id"]);

    for emoji in ["👍", "👍", "🎉"] {
        let response = server
            .post_as(&react_route, chat.me, &json!({ "emoji": emoji }))
            .await
            .unwrap();
        let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(body, json!({ "success": true }));
    }

    let response = server
        .get_as(&format!("messages/{}", chat.chat_id), chat.me)
        .await
        .unwrap();
    let history: Value = assert_json(response, StatusCode::OK).await.unwrap();
    let mut reactions: Vec<String> =
        serde_json::from_value(history["messages"][0]["reactions"].clone()).unwrap();
    reactions.sort();
    let mut expected = vec!["👍".to_string(), "🎉".to_string()];
    expected.sort();
    assert_eq!(reactions, expected);
}

#[tokio::test]
async fn test_reaction_requires_emoji() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.post_as("messages/1/react", 1, &json!({})).await.unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body, json!({ "error": "Missing emoji" }));
}
