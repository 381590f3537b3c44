//! Integration tests for basket and wish list queries and mutations

mod common;

use common::{caller, data, error_code, moderator, TestEnv, ALICE, BOB};
use emporium_account::Permission;
use serde_json::json;

async fn create_basket(env: &TestEnv, owner: &str, title: &str, public: bool) -> String {
    let response = env
        .execute_with(
            Some(caller(owner)),
            "mutation($input: BasketInput!) { basketCreate(basket: $input) { id title public ownerId } }",
            json!({ "input": { "title": title, "public": public } }),
        )
        .await;
    let data = data(response);
    assert_eq!(data["basketCreate"]["ownerId"], owner);
    data["basketCreate"]["id"].as_str().unwrap().to_string()
}

#[test_log::test(tokio::test)]
async fn test_anonymous_caller_reads_public_basket_only() {
    let env = TestEnv::new();
    let public = create_basket(&env, ALICE, "gifts", true).await;
    let private = create_basket(&env, ALICE, "secret", false).await;

    let response = env
        .execute(None, &format!(r#"{{ basket(id: "{public}") {{ id public }} }}"#))
        .await;
    assert_eq!(data(response), json!({ "basket": { "id": public, "public": true } }));

    let response = env
        .execute(None, &format!(r#"{{ basket(id: "{private}") {{ id }} }}"#))
        .await;
    assert_eq!(error_code(&response).as_deref(), Some("NOT_AUTHENTICATED"));
}

#[test_log::test(tokio::test)]
async fn test_foreign_private_basket_is_unauthorized_until_owner_deletes_it() {
    let env = TestEnv::new();
    let id = create_basket(&env, ALICE, "secret", false).await;

    let response = env
        .execute(Some(caller(BOB)), &format!(r#"{{ basket(id: "{id}") {{ id }} }}"#))
        .await;
    assert_eq!(error_code(&response).as_deref(), Some("UNAUTHORIZED"));

    let response = env
        .execute(
            Some(caller(BOB)),
            &format!(r#"mutation {{ basketRemove(id: "{id}") }}"#),
        )
        .await;
    assert_eq!(error_code(&response).as_deref(), Some("UNAUTHORIZED"));

    let response = env
        .execute(
            Some(caller(ALICE)),
            &format!(r#"mutation {{ basketRemove(id: "{id}") }}"#),
        )
        .await;
    assert_eq!(data(response), json!({ "basketRemove": true }));
    assert_eq!(env.store.basket_count(), 0);
}

#[test_log::test(tokio::test)]
async fn test_view_basket_permission_reads_foreign_private_basket() {
    let env = TestEnv::new();
    let id = create_basket(&env, ALICE, "secret", false).await;

    let response = env
        .execute(
            Some(moderator(Permission::ViewBasket)),
            &format!(r#"{{ basket(id: "{id}") {{ title }} }}"#),
        )
        .await;
    assert_eq!(data(response), json!({ "basket": { "title": "secret" } }));
}

#[test_log::test(tokio::test)]
async fn test_delete_basket_permission_removes_foreign_basket() {
    let env = TestEnv::new();
    let id = create_basket(&env, ALICE, "secret", false).await;

    let response = env
        .execute(
            Some(moderator(Permission::DeleteBasket)),
            &format!(r#"mutation {{ basketRemove(id: "{id}") }}"#),
        )
        .await;
    assert_eq!(data(response), json!({ "basketRemove": true }));
}

#[test_log::test(tokio::test)]
async fn test_duplicate_title_is_rejected() {
    let env = TestEnv::new();
    create_basket(&env, ALICE, "gifts", false).await;

    let response = env
        .execute(
            Some(caller(ALICE)),
            r#"mutation { basketCreate(basket: { title: "gifts" }) { id } }"#,
        )
        .await;
    assert_eq!(error_code(&response).as_deref(), Some("BASKET_EXISTS"));

    // Titles are unique per owner only
    create_basket(&env, BOB, "gifts", false).await;
}

#[test_log::test(tokio::test)]
async fn test_visibility_and_items_round_trip() {
    let env = TestEnv::new();
    let id = create_basket(&env, ALICE, "gifts", false).await;
    let alice = || Some(caller(ALICE));

    let response = env
        .execute(alice(), &format!(r#"mutation {{ basketMakePublic(id: "{id}") {{ public }} }}"#))
        .await;
    assert_eq!(data(response)["basketMakePublic"]["public"], true);

    let response = env
        .execute(
            alice(),
            &format!(r#"mutation {{ basketAddProduct(basketId: "{id}", productId: "p-1", amount: 3) {{ items {{ productId amount }} }} }}"#),
        )
        .await;
    assert_eq!(
        data(response)["basketAddProduct"]["items"],
        json!([{ "productId": "p-1", "amount": 3 }])
    );

    let response = env
        .execute(
            alice(),
            &format!(r#"mutation {{ basketRemoveProduct(basketId: "{id}", productId: "p-1", amount: 5) {{ items {{ productId }} }} }}"#),
        )
        .await;
    assert_eq!(data(response)["basketRemoveProduct"]["items"], json!([]));

    let response = env
        .execute(alice(), &format!(r#"mutation {{ basketMakePrivate(id: "{id}") {{ public }} }}"#))
        .await;
    assert_eq!(data(response)["basketMakePrivate"]["public"], false);

    let response = env.execute(alice(), "{ baskets { title } }").await;
    assert_eq!(data(response), json!({ "baskets": [{ "title": "gifts" }] }));
}

#[test_log::test(tokio::test)]
async fn test_non_positive_amount_fails_validation() {
    let env = TestEnv::new();
    let id = create_basket(&env, ALICE, "gifts", false).await;

    let response = env
        .execute(
            Some(caller(ALICE)),
            &format!(r#"mutation {{ basketAddProduct(basketId: "{id}", productId: "p-1", amount: 0) {{ id }} }}"#),
        )
        .await;
    assert_eq!(error_code(&response).as_deref(), Some("VALIDATION_FAILED"));
}

#[test_log::test(tokio::test)]
async fn test_wish_list_is_created_on_first_product() {
    let env = TestEnv::new();
    let alice = || Some(caller(ALICE));

    let response = env.execute(alice(), "{ wishList { id } }").await;
    assert_eq!(data(response), json!({ "wishList": null }));

    for _ in 0..2 {
        let response = env
            .execute(
                alice(),
                r#"mutation { wishListAddProduct(productId: "p-7") { title items { productId amount } } }"#,
            )
            .await;
        assert_eq!(
            data(response)["wishListAddProduct"],
            json!({ "title": "wishlist", "items": [{ "productId": "p-7", "amount": 1 }] })
        );
    }
    assert_eq!(env.store.basket_count(), 1);

    let response = env
        .execute(
            alice(),
            r#"mutation { wishListRemoveProduct(productId: "p-7") { items { productId } } }"#,
        )
        .await;
    assert_eq!(data(response)["wishListRemoveProduct"]["items"], json!([]));
}

#[test_log::test(tokio::test)]
async fn test_anonymous_wish_list_requires_authentication() {
    let env = TestEnv::new();
    let response = env.execute(None, "{ wishList { id } }").await;
    assert_eq!(error_code(&response).as_deref(), Some("NOT_AUTHENTICATED"));
}
