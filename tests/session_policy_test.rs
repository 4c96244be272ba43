//! Cross-cutting client policy tests
//!
//! Covers the logout-on-401 policy, the blocking notification on 500,
//! the moderation decision requirement, and opaque file passthrough.

mod helpers;

use assert_matches::assert_matches;
use chrono::Utc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use ummah_admin::client::Endpoint;
use ummah_admin::collection::Collection;
use ummah_admin::models::moderation::{ApprovalState, ModerationItem, ModerationKind};
use ummah_admin::SessionStore;
use ummah_admin::UmmahError;
use helpers::build_harness;

#[tokio::test]
async fn unauthorized_clears_token_and_fires_authority_once() {
    let server = MockServer::start().await;
    let harness = build_harness(&server);

    Mock::given(method("GET"))
        .and(path("/landing/madrasa/teachers"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let err = harness
        .client
        .get_json::<serde_json::Value>(&Endpoint::landing("madrasa/teachers"))
        .await
        .unwrap_err();

    assert_matches!(err, UmmahError::Unauthorized);
    assert_eq!(harness.store.token(), None);
    assert_eq!(harness.authority.invocations(), 1);
}

#[tokio::test]
async fn request_after_logout_carries_no_auth_header() {
    let server = MockServer::start().await;
    let harness = build_harness(&server);

    harness.store.clear().unwrap();

    // Matching on the absence of the header: respond only to requests
    // without authorization
    Mock::given(method("GET"))
        .and(path("/landing/public/faqs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    harness
        .client
        .get_json::<serde_json::Value>(&Endpoint::landing("public/faqs"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn server_error_notifies_and_propagates() {
    let server = MockServer::start().await;
    let harness = build_harness(&server);

    Mock::given(method("GET"))
        .and(path("/masjid/profile"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let err = harness
        .client
        .get_json::<serde_json::Value>(&Endpoint::masjid("profile"))
        .await
        .unwrap_err();

    assert_matches!(err, UmmahError::Server { .. });
    assert_eq!(harness.notifier.messages().len(), 1);
    // Session survives a 500
    assert_eq!(harness.store.token(), Some("test-token".to_string()));
    assert_eq!(harness.authority.invocations(), 0);
}

fn pending_item(kind: ModerationKind) -> ModerationItem {
    ModerationItem {
        id: 9,
        kind,
        name: "Lectures".to_string(),
        image: None,
        state: ApprovalState::Pending,
        submitted_at: Utc::now(),
    }
}

#[tokio::test]
async fn halal_product_approval_requires_decision() {
    let server = MockServer::start().await;
    let harness = build_harness(&server);

    let item = pending_item(ModerationKind::HalalProduct);
    let mut collection: Collection<ModerationItem> = Collection::new("halal_products");

    let err = harness
        .engine
        .moderate(&item, None, &mut collection, &Endpoint::landing("halal/products"))
        .await
        .unwrap_err();

    assert_matches!(err, UmmahError::InvalidInput(_));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn category_approval_reconciles_queue() {
    let server = MockServer::start().await;
    let harness = build_harness(&server);

    // The default registry addresses moderation modules absolutely; use a
    // registry pointing at the mock server instead
    let mut registry = ummah_admin::TransitionRegistry::empty();
    registry.register("learning_category", ummah_admin::workflow::TransitionSpec {
        id: "approve".to_string(),
        from: vec!["pending".to_string()],
        requires: ummah_admin::workflow::SideData::None,
        endpoint: Endpoint::absolute(format!("{}/learning/categories/approve", server.uri())),
        enabled: true,
    });
    let engine = ummah_admin::WorkflowEngine::with_registry(harness.client.clone(), registry);

    let item = pending_item(ModerationKind::LearningCategory);

    Mock::given(method("POST"))
        .and(path("/learning/categories/approve"))
        .and(header("authorization", "Token test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let mut approved = pending_item(ModerationKind::LearningCategory);
    approved.state = ApprovalState::Approved;

    Mock::given(method("GET"))
        .and(path("/landing/learning/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![&approved]))
        .expect(1)
        .mount(&server)
        .await;

    let mut collection = Collection::new("learning_categories");
    engine
        .moderate(&item, None, &mut collection, &Endpoint::landing("learning/categories"))
        .await
        .unwrap();

    assert_eq!(collection.len(), 1);
    assert_eq!(collection.items()[0].state, ApprovalState::Approved);
}

#[tokio::test]
async fn spreadsheet_bytes_pass_through_opaquely() {
    let server = MockServer::start().await;
    let harness = build_harness(&server);

    let payload = vec![0x50, 0x4b, 0x03, 0x04, 0xff, 0x00];

    Mock::given(method("POST"))
        .and(path("/landing/masjid/salah-timings/import"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"imported": 12})))
        .expect(1)
        .mount(&server)
        .await;

    let result = harness
        .client
        .upload_file(&Endpoint::landing("masjid/salah-timings/import"), payload.clone())
        .await
        .unwrap();
    assert_eq!(result["imported"], 12);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].body, payload);

    Mock::given(method("GET"))
        .and(path("/landing/halal/products/export"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(payload.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let bytes = harness
        .client
        .download_file(&Endpoint::landing("halal/products/export"))
        .await
        .unwrap();
    assert_eq!(bytes, payload);
}
