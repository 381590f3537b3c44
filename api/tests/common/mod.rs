//! Common test utilities and setup functions for API integration tests
//!
//! Two setups are provided:
//! - [`TestEnv`] executes GraphQL documents directly against a schema backed
//!   by the in-memory repositories, with the caller attached as request data
//! - [`TestApp`] drives the full axum router over an in-memory SQLite
//!   database, with callers authenticated by bearer token

#![allow(dead_code)]

use std::{collections::BTreeSet, sync::Arc};

use async_graphql::{Request, Response, Variables};
use axum::{
    body::Body,
    http::{header, Request as HttpRequest, StatusCode},
    Router,
};
use emporium_account::{
    models::{Country, Customer},
    repository::{CustomerRepository, Repositories},
    service::{AccountServices, ServiceConfig},
    testing::{InMemoryStore, RecordingNotifier},
    Caller, Permission, ShopId, UserId,
};
use emporium_api::{
    config::{ApiConfig, DatabaseConfig, TokenConfig},
    schema::{build_schema, AccountSchema},
    server::build_app_with_notifier,
};
use emporium_db::EmporiumDb;
use serde_json::Value;
use tower::ServiceExt;

pub const ALICE: &str = "alice";
pub const BOB: &str = "bob";
pub const MODERATOR: &str = "moderator";

pub fn caller(id: &str) -> Caller {
    Caller::new(id, ShopId(1))
}

pub fn moderator(permission: Permission) -> Caller {
    caller(MODERATOR).with_permission(permission)
}

/// Schema over in-memory repositories
pub struct TestEnv {
    pub store: Arc<InMemoryStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub schema: AccountSchema,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_config(ServiceConfig::default())
    }

    pub fn with_config(config: ServiceConfig) -> Self {
        Self::build(config, Arc::new(RecordingNotifier::new()))
    }

    pub fn build(config: ServiceConfig, notifier: Arc<RecordingNotifier>) -> Self {
        let store = Arc::new(InMemoryStore::new());
        store.insert_country(Country {
            id: "DE".into(),
            title: "Germany".into(),
            active: true,
        });
        store.insert_country(Country {
            id: "BV".into(),
            title: "Bouvet Island".into(),
            active: false,
        });
        for (id, email) in [(ALICE, "alice@example.com"), (BOB, "bob@example.com")] {
            store.insert_customer(Customer::new(UserId::from(id), ShopId(1), email));
        }

        let services = AccountServices::new(Repositories::from_shared(store.clone()), notifier.clone(), config);

        Self {
            store,
            notifier,
            schema: build_schema(services),
        }
    }

    pub async fn execute(&self, caller: Option<Caller>, query: &str) -> Response {
        self.execute_with(caller, query, Value::Null).await
    }

    pub async fn execute_with(&self, caller: Option<Caller>, query: &str, variables: Value) -> Response {
        let mut request = Request::new(query).variables(Variables::from_json(variables));
        if let Some(caller) = caller {
            request = request.data(caller);
        }
        self.schema.execute(request).await
    }
}

/// Data of a response that must not contain errors
pub fn data(response: Response) -> Value {
    assert!(response.errors.is_empty(), "unexpected errors: {:?}", response.errors);
    response.data.into_json().expect("response data is valid JSON")
}

/// `extensions.code` of the first error
pub fn error_code(response: &Response) -> Option<String> {
    let extensions = response.errors.first()?.extensions.as_ref()?;
    match extensions.get("code")? {
        async_graphql::Value::String(code) => Some(code.clone()),
        _ => None,
    }
}

/// Router over an in-memory SQLite database
pub struct TestApp {
    pub router: Router,
    pub db: EmporiumDb,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestApp {
    pub async fn new() -> anyhow::Result<Self> {
        let db = EmporiumDb::new_in_memory().await?;
        for (id, email) in [(ALICE, "alice@example.com"), (BOB, "bob@example.com")] {
            CustomerRepository::save(&db, &Customer::new(UserId::from(id), ShopId(1), email)).await?;
        }

        let config = ApiConfig {
            database: DatabaseConfig {
                url: "sqlite::memory:".into(),
                max_connections: 1,
            },
            auth: emporium_api::config::AuthConfig {
                tokens: [ALICE, BOB, MODERATOR]
                    .into_iter()
                    .map(|user| TokenConfig {
                        token: format!("token-{user}"),
                        user_id: user.to_string(),
                        shop_id: 1,
                    })
                    .collect(),
                grants: [(MODERATOR.to_string(), BTreeSet::from([Permission::DeleteBasket]))]
                    .into_iter()
                    .collect(),
            },
            ..Default::default()
        };

        let notifier = Arc::new(RecordingNotifier::new());
        let router = build_app_with_notifier(db.clone(), &config, notifier.clone());
        Ok(Self { router, db, notifier })
    }

    /// Posts a GraphQL document, authenticated as `user` when given
    pub async fn graphql(&self, user: Option<&str>, query: &str) -> anyhow::Result<(StatusCode, Value)> {
        let body = serde_json::json!({ "query": query });
        let mut request = HttpRequest::builder()
            .method("POST")
            .uri("/graphql")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(user) = user {
            request = request.header(header::AUTHORIZATION, format!("Bearer token-{user}"));
        }

        self.send(request.body(Body::from(serde_json::to_vec(&body)?))?).await
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
        self.send(HttpRequest::builder().uri(uri).body(Body::empty())?).await
    }

    pub async fn send(&self, request: HttpRequest<Body>) -> anyhow::Result<(StatusCode, Value)> {
        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        Ok((status, json))
    }
}
