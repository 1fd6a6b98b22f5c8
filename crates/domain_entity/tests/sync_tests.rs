//! Fetch and save tests for domain_entity against the mock request executor

use std::sync::Arc;

use serde_json::{json, Map, Value};

use core_kernel::{ClientConfig, EntityId, FixedClock, PortError, UserId};

use domain_entity::{
    DefaultSubdomainExecutor, EntityError, EntityKind, EntityRecord, MockRequestExecutor,
    RequestMethod, SyncContext, WriteAction, UPDATE_SKEW_SECS,
};
use test_utils::{
    assert_skewed_timestamp, init_test_tracing, write_body_params, ItemFixtures, ResponseFixtures,
    TestRecordBuilder,
};

fn context(responses: Vec<Value>) -> (Arc<MockRequestExecutor>, SyncContext) {
    init_test_tracing();
    let executor = Arc::new(MockRequestExecutor::with_responses(responses));
    let ctx = SyncContext::new(executor.clone());
    (executor, ctx)
}

// ============================================================================
// Fetch by id
// ============================================================================

mod fetch_tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_hydrates_from_first_item() {
        let (executor, ctx) = context(vec![ResponseFixtures::envelope(vec![
            ItemFixtures::contact(42),
            ItemFixtures::contact(43),
        ])]);
        let mut contact = EntityRecord::new(EntityKind::Contact).with_subdomain("acme");

        contact.fill_by_id(&ctx, EntityId::new(42)).await.unwrap();

        assert_eq!(contact.id, Some(EntityId::new(42)));
        assert_eq!(contact.name.as_deref(), Some("Jane Roe"));
        assert!(contact.has_tag("vip"));

        let request = executor.last_request().await.unwrap();
        assert_eq!(request.endpoint, "/api/v2/contacts");
        assert_eq!(request.method, RequestMethod::Get);
        assert_eq!(request.params, json!({"id": 42}));
        assert_eq!(request.subdomain.as_deref(), Some("acme"));
    }

    #[tokio::test]
    async fn test_fetch_replaces_local_fields() {
        let (_, ctx) = context(vec![ResponseFixtures::single(ItemFixtures::lead(9, "Remote"))]);
        let mut lead = TestRecordBuilder::new(EntityKind::Lead)
            .with_name("Local")
            .with_responsible_user(3)
            .build();

        lead.fill_by_id(&ctx, EntityId::new(9)).await.unwrap();

        assert_eq!(lead.name.as_deref(), Some("Remote"));
        // Keys the server did not send are left alone
        assert_eq!(lead.responsible_user_id, Some(UserId::new(3)));
    }

    #[tokio::test]
    async fn test_extra_params_cannot_override_id() {
        let (executor, ctx) = context(vec![ResponseFixtures::single(ItemFixtures::lead(5, "L"))]);
        let mut lead = EntityRecord::new(EntityKind::Lead);
        let extra: Map<String, Value> = json!({"id": 999, "with": "contacts"})
            .as_object()
            .cloned()
            .unwrap();

        lead.fill_by_id_with(&ctx, EntityId::new(5), extra).await.unwrap();

        let request = executor.last_request().await.unwrap();
        assert_eq!(request.params, json!({"id": 5, "with": "contacts"}));
    }

    #[tokio::test]
    async fn test_empty_response_is_not_found() {
        let (_, ctx) = context(vec![ResponseFixtures::empty()]);
        let mut lead = EntityRecord::new(EntityKind::Lead);

        let error = lead.fill_by_id(&ctx, EntityId::new(404)).await.unwrap_err();

        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "Lead with id 404 not found");
        assert!(lead.id.is_none());
    }

    #[tokio::test]
    async fn test_no_items_is_not_found() {
        let (_, ctx) = context(vec![ResponseFixtures::no_items()]);
        let mut company = EntityRecord::new(EntityKind::Company);

        let error = company.fill_by_id(&ctx, EntityId::new(1)).await.unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn test_missing_envelope_is_malformed() {
        let (_, ctx) = context(vec![json!({"items": [ItemFixtures::lead(1, "x")]})]);
        let mut lead = EntityRecord::new(EntityKind::Lead);

        let error = lead.fill_by_id(&ctx, EntityId::new(1)).await.unwrap_err();
        assert!(matches!(error, EntityError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn test_transport_errors_pass_through() {
        let (executor, ctx) = context(Vec::new());
        executor.push_error(PortError::connection("connection reset")).await;
        let mut lead = EntityRecord::new(EntityKind::Lead);

        let error = lead.fill_by_id(&ctx, EntityId::new(1)).await.unwrap_err();
        match error {
            EntityError::Transport(inner) => {
                assert!(matches!(inner, PortError::Connection { .. }))
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}

// ============================================================================
// Save
// ============================================================================

mod save_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_posts_add_and_returns_new_id() {
        let (executor, ctx) = context(vec![ResponseFixtures::created(555)]);
        let lead = TestRecordBuilder::new(EntityKind::Lead).with_name("New").build();

        let id = lead.save(&ctx).await.unwrap();

        assert_eq!(id, EntityId::new(555));
        let request = executor.last_request().await.unwrap();
        assert_eq!(request.endpoint, "/api/v2/leads");
        assert_eq!(request.method, RequestMethod::Post);
        assert_eq!(request.subdomain.as_deref(), Some("testtenant"));
        let params = write_body_params(&request.params, "add");
        assert_eq!(params, &json!({"name": "New"}));
    }

    #[tokio::test]
    async fn test_create_does_not_assign_id() {
        let (_, ctx) = context(vec![ResponseFixtures::created(555)]);
        let lead = TestRecordBuilder::new(EntityKind::Lead).build();

        lead.save(&ctx).await.unwrap();

        assert!(lead.id.is_none());
        assert_eq!(lead.write_action(), WriteAction::Create);
    }

    #[tokio::test]
    async fn test_update_stamps_skewed_updated_at() {
        let (executor, ctx) = context(vec![ResponseFixtures::created(10)]);
        let ctx = ctx.with_clock(Arc::new(FixedClock::at(1_700_000_000)));
        let mut lead = TestRecordBuilder::new(EntityKind::Lead).with_id(10).build();
        lead.updated_at = Some(1_600_000_000);

        lead.save(&ctx).await.unwrap();

        let request = executor.last_request().await.unwrap();
        let params = write_body_params(&request.params, "update");
        assert_eq!(params["id"], json!(10));
        assert_eq!(params["updated_at"], json!(1_700_000_000 + UPDATE_SKEW_SECS));
    }

    #[tokio::test]
    async fn test_update_with_system_clock_is_in_the_future() {
        let (executor, ctx) = context(vec![ResponseFixtures::created(10)]);
        let lead = TestRecordBuilder::new(EntityKind::Task).with_id(10).build();

        let before = system_now();
        lead.save(&ctx).await.unwrap();
        let after = system_now();

        let request = executor.last_request().await.unwrap();
        let params = write_body_params(&request.params, "update");
        assert_skewed_timestamp(params["updated_at"].as_i64().unwrap(), before, after);
    }

    #[tokio::test]
    async fn test_empty_write_response_fails_with_payload() {
        let (_, ctx) = context(vec![ResponseFixtures::empty()]);
        let company = TestRecordBuilder::new(EntityKind::Company)
            .with_name("Acme Ltd")
            .build();

        let error = company.save(&ctx).await.unwrap_err();

        assert!(error.is_write_failed());
        let message = error.to_string();
        assert!(message.starts_with("failed to create Company"), "{}", message);
        assert!(message.contains("Acme Ltd"), "{}", message);
    }

    #[tokio::test]
    async fn test_update_failure_names_update() {
        let (_, ctx) = context(vec![json!([])]);
        let contact = TestRecordBuilder::new(EntityKind::Contact).with_id(8).build();

        let error = contact.save(&ctx).await.unwrap_err();
        assert!(error.to_string().starts_with("failed to update Contact"));
    }

    #[tokio::test]
    async fn test_no_items_in_write_response_fails() {
        let (_, ctx) = context(vec![ResponseFixtures::no_items()]);
        let lead = TestRecordBuilder::new(EntityKind::Lead).build();

        let error = lead.save(&ctx).await.unwrap_err();
        assert!(error.is_write_failed());
    }

    #[tokio::test]
    async fn test_save_returning_response_hands_back_body() {
        let response = json!({"_embedded": {"items": [{"id": 1}]}, "_links": {}});
        let (_, ctx) = context(vec![response.clone()]);
        let customer = TestRecordBuilder::new(EntityKind::Customer).build();

        let body = customer.save_returning_response(&ctx).await.unwrap();
        assert_eq!(body, response);
    }

    #[tokio::test]
    async fn test_save_returning_response_rejects_empty_body() {
        let (_, ctx) = context(Vec::new());
        let customer = TestRecordBuilder::new(EntityKind::Customer).build();

        let error = customer.save_returning_response(&ctx).await.unwrap_err();
        assert!(error.is_write_failed());
    }

    fn system_now() -> i64 {
        use core_kernel::{Clock, SystemClock};
        SystemClock.unix_timestamp()
    }
}

// ============================================================================
// Default subdomain routing
// ============================================================================

mod routing_tests {
    use super::*;

    #[tokio::test]
    async fn test_record_without_subdomain_uses_default() {
        init_test_tracing();
        let inner = Arc::new(MockRequestExecutor::with_responses(vec![
            ResponseFixtures::created(1),
        ]));
        let config = ClientConfig::default().with_default_subdomain("fallback");
        let ctx = SyncContext::new(Arc::new(DefaultSubdomainExecutor::new(inner.clone(), &config)));
        let lead = TestRecordBuilder::new(EntityKind::Lead).without_subdomain().build();

        lead.save(&ctx).await.unwrap();

        let request = inner.last_request().await.unwrap();
        assert_eq!(request.subdomain.as_deref(), Some("fallback"));
    }

    #[tokio::test]
    async fn test_no_subdomain_anywhere_is_rejected() {
        init_test_tracing();
        let inner = Arc::new(MockRequestExecutor::new());
        let ctx = SyncContext::new(Arc::new(DefaultSubdomainExecutor::new(
            inner.clone(),
            &ClientConfig::default(),
        )));
        let lead = TestRecordBuilder::new(EntityKind::Lead).without_subdomain().build();

        let error = lead.save(&ctx).await.unwrap_err();

        assert!(matches!(error, EntityError::Transport(_)));
        assert!(inner.requests().await.is_empty());
    }
}
