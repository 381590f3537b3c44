//! Integration tests for review queries and mutations

mod common;

use common::{caller, data, error_code, moderator, TestEnv, ALICE, BOB};
use emporium_account::Permission;
use rstest::rstest;
use serde_json::json;

async fn write_review(env: &TestEnv, owner: &str) -> String {
    let response = env
        .execute(
            Some(caller(owner)),
            r#"mutation { reviewSet(review: { productId: "p-1", text: "solid", rating: 4 }) { id reviewerId rating } }"#,
        )
        .await;
    let data = data(response);
    assert_eq!(data["reviewSet"]["reviewerId"], owner);
    assert_eq!(data["reviewSet"]["rating"], 4);
    data["reviewSet"]["id"].as_str().unwrap().to_string()
}

#[test_log::test(tokio::test)]
async fn test_reviews_are_readable_anonymously() {
    let env = TestEnv::new();
    let id = write_review(&env, ALICE).await;

    let response = env
        .execute(None, &format!(r#"{{ review(id: "{id}") {{ text productId }} }}"#))
        .await;
    assert_eq!(data(response), json!({ "review": { "text": "solid", "productId": "p-1" } }));
}

#[test_log::test(tokio::test)]
async fn test_foreign_review_deletion_requires_permission() {
    let env = TestEnv::new();
    let id = write_review(&env, ALICE).await;
    let delete = format!(r#"mutation {{ reviewDelete(id: "{id}") }}"#);

    let response = env.execute(Some(caller(BOB)), &delete).await;
    assert_eq!(error_code(&response).as_deref(), Some("UNAUTHORIZED"));

    let response = env.execute(Some(moderator(Permission::DeleteReview)), &delete).await;
    assert_eq!(data(response), json!({ "reviewDelete": true }));

    let response = env.execute(None, &format!(r#"{{ review(id: "{id}") {{ id }} }}"#)).await;
    assert_eq!(error_code(&response).as_deref(), Some("NOT_FOUND"));
}

#[test_log::test(tokio::test)]
async fn test_anonymous_review_deletion_is_not_authenticated() {
    let env = TestEnv::new();
    let id = write_review(&env, ALICE).await;

    let response = env
        .execute(None, &format!(r#"mutation {{ reviewDelete(id: "{id}") }}"#))
        .await;
    assert_eq!(error_code(&response).as_deref(), Some("NOT_AUTHENTICATED"));
}

#[rstest]
#[case(0)]
#[case(6)]
#[case(-1)]
#[test_log::test(tokio::test)]
async fn test_rating_out_of_range_fails_validation(#[case] rating: i32) {
    let env = TestEnv::new();

    let response = env
        .execute(
            Some(caller(ALICE)),
            &format!(r#"mutation {{ reviewSet(review: {{ productId: "p-1", rating: {rating} }}) {{ id }} }}"#),
        )
        .await;
    assert_eq!(error_code(&response).as_deref(), Some("VALIDATION_FAILED"));
}
