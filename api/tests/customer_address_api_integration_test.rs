//! Integration tests for customer profile and address operations

mod common;

use common::{caller, data, error_code, TestEnv, ALICE, BOB};
use emporium_account::{models::AddressField, service::ServiceConfig};
use serde_json::json;

fn must_fill_names() -> ServiceConfig {
    ServiceConfig {
        must_fill_fields: vec![AddressField::FirstName, AddressField::LastName],
        ..Default::default()
    }
}

#[test_log::test(tokio::test)]
async fn test_customer_profile() {
    let env = TestEnv::new();

    let response = env.execute(Some(caller(ALICE)), "{ customer { id email shopId } }").await;
    assert_eq!(
        data(response),
        json!({ "customer": { "id": ALICE, "email": "alice@example.com", "shopId": 1 } })
    );

    let response = env.execute(None, "{ customer { id } }").await;
    assert_eq!(error_code(&response).as_deref(), Some("NOT_AUTHENTICATED"));

    let response = env.execute(Some(caller("ghost")), "{ customer { id } }").await;
    assert_eq!(error_code(&response).as_deref(), Some("NOT_FOUND"));
}

#[test_log::test(tokio::test)]
async fn test_must_fill_fields_are_reported_in_order() {
    let env = TestEnv::with_config(must_fill_names());

    let response = env
        .execute(
            Some(caller(ALICE)),
            r#"mutation { customerInvoiceAddressSet(invoiceAddress: { city: "Berlin" }) { city } }"#,
        )
        .await;

    assert_eq!(error_code(&response).as_deref(), Some("VALIDATION_FAILED"));
    assert_eq!(response.errors[0].message, "Missing or invalid fields: firstname, lastname");
}

#[test_log::test(tokio::test)]
async fn test_reported_field_names_are_accepted_as_input() {
    let env = TestEnv::with_config(must_fill_names());

    let response = env
        .execute(
            Some(caller(ALICE)),
            r#"mutation { customerInvoiceAddressSet(invoiceAddress: { firstname: "Alice", lastname: "Liddell" }) { firstname lastname } }"#,
        )
        .await;

    assert_eq!(
        data(response),
        json!({ "customerInvoiceAddressSet": { "firstname": "Alice", "lastname": "Liddell" } })
    );
}

#[test_log::test(tokio::test)]
async fn test_invoice_address_partial_update_keeps_other_fields() {
    let env = TestEnv::new();
    let alice = || Some(caller(ALICE));

    let response = env
        .execute(
            alice(),
            r#"mutation { customerInvoiceAddressSet(invoiceAddress: { firstname: "Alice", city: "Berlin", countryId: "DE" }) { firstname city } }"#,
        )
        .await;
    assert_eq!(
        data(response),
        json!({ "customerInvoiceAddressSet": { "firstname": "Alice", "city": "Berlin" } })
    );

    let response = env
        .execute(
            alice(),
            r#"mutation { customerInvoiceAddressSet(invoiceAddress: { city: "Hamburg" }) { firstname city countryId } }"#,
        )
        .await;
    assert_eq!(
        data(response),
        json!({ "customerInvoiceAddressSet": { "firstname": "Alice", "city": "Hamburg", "countryId": "DE" } })
    );

    let response = env.execute(alice(), "{ customerInvoiceAddress { city } }").await;
    assert_eq!(data(response), json!({ "customerInvoiceAddress": { "city": "Hamburg" } }));
}

#[test_log::test(tokio::test)]
async fn test_inactive_or_unknown_country_is_rejected() {
    let env = TestEnv::new();

    for country in ["BV", "XX"] {
        let response = env
            .execute(
                Some(caller(ALICE)),
                &format!(r#"mutation {{ customerDeliveryAddressAdd(deliveryAddress: {{ countryId: "{country}" }}) {{ id }} }}"#),
            )
            .await;
        assert_eq!(error_code(&response).as_deref(), Some("COUNTRY_NOT_FOUND"));
    }
}

#[test_log::test(tokio::test)]
async fn test_delivery_addresses_are_owner_only() {
    let env = TestEnv::new();

    let response = env
        .execute(
            Some(caller(ALICE)),
            r#"mutation { customerDeliveryAddressAdd(deliveryAddress: { firstname: "Alice", street: "Main", countryId: "DE" }) { id street } }"#,
        )
        .await;
    let added = data(response);
    let id = added["customerDeliveryAddressAdd"]["id"].as_str().unwrap().to_string();

    let response = env
        .execute(Some(caller(ALICE)), "{ customerDeliveryAddresses { id firstname } }")
        .await;
    assert_eq!(
        data(response),
        json!({ "customerDeliveryAddresses": [{ "id": id, "firstname": "Alice" }] })
    );

    let query = format!(r#"{{ customerDeliveryAddress(id: "{id}") {{ id }} }}"#);
    let response = env.execute(Some(caller(BOB)), &query).await;
    assert_eq!(error_code(&response).as_deref(), Some("UNAUTHORIZED"));

    let delete = format!(r#"mutation {{ customerDeliveryAddressDelete(id: "{id}") }}"#);
    let response = env.execute(Some(caller(BOB)), &delete).await;
    assert_eq!(error_code(&response).as_deref(), Some("UNAUTHORIZED"));

    let response = env.execute(Some(caller(ALICE)), &delete).await;
    assert_eq!(data(response), json!({ "customerDeliveryAddressDelete": true }));

    let response = env.execute(Some(caller(ALICE)), &query).await;
    assert_eq!(error_code(&response).as_deref(), Some("NOT_FOUND"));
}
