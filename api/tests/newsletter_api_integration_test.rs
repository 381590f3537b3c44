//! Integration tests for newsletter subscription operations

mod common;

use common::{caller, data, error_code, TestEnv, ALICE, BOB};
use emporium_account::{repository::NewsletterRepository, service::ServiceConfig};
use serde_json::json;

#[test_log::test(tokio::test)]
async fn test_double_opt_in_flow_for_anonymous_subscriber() {
    let env = TestEnv::new();

    let response = env
        .execute(
            None,
            r#"mutation { newsletterSubscribe(newsletterStatus: { email: "carol@example.com", firstName: "Carol" }) { email status } }"#,
        )
        .await;
    assert_eq!(
        data(response),
        json!({ "newsletterSubscribe": { "email": "carol@example.com", "status": "MISSING_DOUBLE_OPTIN" } })
    );
    assert_eq!(env.store.customer_count(), 3);

    let response = env
        .execute(
            None,
            r#"mutation { newsletterOptIn(newsletterStatus: { email: "carol@example.com", confirmCode: "wrong" }) { status } }"#,
        )
        .await;
    assert_eq!(error_code(&response).as_deref(), Some("INVALID_CONFIRM_CODE"));

    let code = env
        .store
        .find_by_email("carol@example.com")
        .await
        .unwrap()
        .and_then(|s| s.confirm_code)
        .expect("pending subscription has a confirmation code");

    let response = env
        .execute_with(
            None,
            "mutation($input: NewsletterOptInInput!) { newsletterOptIn(newsletterStatus: $input) { status } }",
            json!({ "input": { "email": "carol@example.com", "confirmCode": code } }),
        )
        .await;
    assert_eq!(data(response), json!({ "newsletterOptIn": { "status": "SUBSCRIBED" } }));
}

#[test_log::test(tokio::test)]
async fn test_subscribe_existing_customer_without_double_opt_in() {
    let env = TestEnv::with_config(ServiceConfig {
        newsletter_double_opt_in: false,
        ..Default::default()
    });
    let alice = || Some(caller(ALICE));

    let response = env.execute(alice(), "mutation { newsletterSubscribe { email status } }").await;
    assert_eq!(
        data(response),
        json!({ "newsletterSubscribe": { "email": "alice@example.com", "status": "SUBSCRIBED" } })
    );
    assert_eq!(env.store.customer_count(), 2);

    let response = env.execute(alice(), "{ newsletterStatus { status } }").await;
    assert_eq!(data(response), json!({ "newsletterStatus": { "status": "SUBSCRIBED" } }));

    let response = env.execute(alice(), "mutation { newsletterUnsubscribe { status } }").await;
    assert_eq!(data(response), json!({ "newsletterUnsubscribe": { "status": "UNSUBSCRIBED" } }));
}

#[test_log::test(tokio::test)]
async fn test_anonymous_subscribe_without_email_is_not_authenticated() {
    let env = TestEnv::new();

    let response = env.execute(None, "mutation { newsletterSubscribe { status } }").await;
    assert_eq!(error_code(&response).as_deref(), Some("NOT_AUTHENTICATED"));
}

#[test_log::test(tokio::test)]
async fn test_status_without_subscription_is_not_found() {
    let env = TestEnv::new();

    let response = env.execute(Some(caller(ALICE)), "{ newsletterStatus { status } }").await;
    assert_eq!(error_code(&response).as_deref(), Some("NOT_FOUND"));
}

#[test_log::test(tokio::test)]
async fn test_invalid_email_fails_validation() {
    let env = TestEnv::new();

    let response = env
        .execute(None, r#"mutation { newsletterSubscribe(newsletterStatus: { email: "not-an-email" }) { status } }"#)
        .await;
    assert_eq!(error_code(&response).as_deref(), Some("VALIDATION_FAILED"));
    assert_eq!(env.store.customer_count(), 2);
}

#[test_log::test(tokio::test)]
async fn test_foreign_caller_cannot_subscribe_another_customers_address() {
    let env = TestEnv::with_config(ServiceConfig {
        newsletter_double_opt_in: false,
        ..Default::default()
    });

    let response = env
        .execute(
            Some(caller(BOB)),
            r#"mutation { newsletterSubscribe(newsletterStatus: { email: "alice@example.com" }) { status } }"#,
        )
        .await;
    assert_eq!(error_code(&response).as_deref(), Some("UNAUTHORIZED"));

    let response = env.execute(Some(caller(ALICE)), "{ newsletterStatus { status } }").await;
    assert_eq!(error_code(&response).as_deref(), Some("NOT_FOUND"));
}

#[test_log::test(tokio::test)]
async fn test_anonymous_subscribe_of_known_address_waits_for_confirmation() {
    let env = TestEnv::with_config(ServiceConfig {
        newsletter_double_opt_in: false,
        ..Default::default()
    });

    let response = env
        .execute(
            None,
            r#"mutation { newsletterSubscribe(newsletterStatus: { email: "alice@example.com" }) { status } }"#,
        )
        .await;
    assert_eq!(
        data(response),
        json!({ "newsletterSubscribe": { "status": "MISSING_DOUBLE_OPTIN" } })
    );

    let response = env.execute(Some(caller(ALICE)), "{ newsletterStatus { status } }").await;
    assert_eq!(data(response), json!({ "newsletterStatus": { "status": "MISSING_DOUBLE_OPTIN" } }));
}

#[test_log::test(tokio::test)]
async fn test_resubscribe_while_pending_keeps_confirmation_code() {
    let env = TestEnv::new();
    let subscribe = r#"mutation { newsletterSubscribe(newsletterStatus: { email: "alice@example.com" }) { status } }"#;

    let response = env.execute(Some(caller(ALICE)), subscribe).await;
    assert_eq!(data(response)["newsletterSubscribe"]["status"], "MISSING_DOUBLE_OPTIN");
    let pending_code = env
        .store
        .find_by_email("alice@example.com")
        .await
        .unwrap()
        .and_then(|s| s.confirm_code);
    assert!(pending_code.is_some());

    for who in [None, Some(caller(ALICE))] {
        let response = env.execute(who, subscribe).await;
        assert_eq!(data(response)["newsletterSubscribe"]["status"], "MISSING_DOUBLE_OPTIN");
    }

    let code = env
        .store
        .find_by_email("alice@example.com")
        .await
        .unwrap()
        .and_then(|s| s.confirm_code);
    assert_eq!(code, pending_code);
}
