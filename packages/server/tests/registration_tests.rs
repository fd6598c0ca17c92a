//! Integration tests for the member-event registration relation:
//! point add/remove semantics, duplicate handling, and existence checks.

mod common;

use common::{fixtures, TestHarness};
use serde_json::json;
use sqlx::PgPool;
use test_context::test_context;

async fn setup_member_and_event(pool: &PgPool) -> (i64, i64) {
    let type_id = fixtures::create_event_type(pool, "Prova").await.unwrap();
    let event_id = fixtures::create_event(pool, type_id, "Math Test")
        .await
        .unwrap();
    let member_id = fixtures::create_member(pool, "Alice", &[]).await.unwrap();
    (member_id, event_id)
}

#[test_context(TestHarness)]
#[tokio::test]
async fn register_adds_the_pair(ctx: &TestHarness) {
    let client = ctx.client();
    let (member_id, event_id) = setup_member_and_event(&ctx.db_pool).await;

    let (status, _) = client
        .post(
            &format!("/members/{}/events", member_id),
            json!({ "eventId": event_id }),
        )
        .await;
    assert_eq!(status, 200);

    let (_, body) = client.get(&format!("/members/{}", member_id)).await;
    assert_eq!(body["eventIds"], json!([event_id]));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn duplicate_registration_is_a_conflict(ctx: &TestHarness) {
    let client = ctx.client();
    let (member_id, event_id) = setup_member_and_event(&ctx.db_pool).await;

    let path = format!("/members/{}/events", member_id);
    let (status, _) = client.post(&path, json!({ "eventId": event_id })).await;
    assert_eq!(status, 200);

    // Registering twice fails the same way every time
    let (status, body) = client.post(&path, json!({ "eventId": event_id })).await;
    assert_eq!(status, 409);
    assert!(body["error"].as_str().unwrap().contains("already registered"));

    let (status, _) = client.post(&path, json!({ "eventId": event_id })).await;
    assert_eq!(status, 409);

    // Still exactly one pair
    let (_, body) = client.get(&format!("/members/{}", member_id)).await;
    assert_eq!(body["eventIds"], json!([event_id]));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unregister_of_absent_pair_is_a_noop(ctx: &TestHarness) {
    let client = ctx.client();
    let (member_id, event_id) = setup_member_and_event(&ctx.db_pool).await;

    let (status, _) = client
        .delete(&format!("/members/{}/events/{}", member_id, event_id))
        .await;
    assert_eq!(status, 200);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn register_requires_both_sides_to_exist(ctx: &TestHarness) {
    let client = ctx.client();
    let (member_id, event_id) = setup_member_and_event(&ctx.db_pool).await;

    let (status, _) = client
        .post("/members/999999/events", json!({ "eventId": event_id }))
        .await;
    assert_eq!(status, 404);

    let (status, _) = client
        .post(
            &format!("/members/{}/events", member_id),
            json!({ "eventId": 999999 }),
        )
        .await;
    assert_eq!(status, 404);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn register_without_event_id_is_400(ctx: &TestHarness) {
    let client = ctx.client();
    let (member_id, _) = setup_member_and_event(&ctx.db_pool).await;

    let (status, body) = client
        .post(&format!("/members/{}/events", member_id), json!({}))
        .await;
    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("eventId"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unregister_requires_both_sides_to_exist(ctx: &TestHarness) {
    let client = ctx.client();
    let (member_id, event_id) = setup_member_and_event(&ctx.db_pool).await;

    let (status, _) = client
        .delete(&format!("/members/999999/events/{}", event_id))
        .await;
    assert_eq!(status, 404);

    let (status, _) = client
        .delete(&format!("/members/{}/events/999999", member_id))
        .await;
    assert_eq!(status, 404);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn register_then_unregister_round_trip(ctx: &TestHarness) {
    let client = ctx.client();
    let (member_id, event_id) = setup_member_and_event(&ctx.db_pool).await;

    client
        .post(
            &format!("/members/{}/events", member_id),
            json!({ "eventId": event_id }),
        )
        .await;

    let (status, _) = client
        .delete(&format!("/members/{}/events/{}", member_id, event_id))
        .await;
    assert_eq!(status, 200);

    let (_, body) = client.get(&format!("/members/{}", member_id)).await;
    assert_eq!(body["eventIds"], json!([]));
}
