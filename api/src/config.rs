//! Configuration for the Emporium API server

use std::{
    collections::{BTreeSet, HashMap},
    net::SocketAddr,
    path::Path,
};

use emporium_account::{
    auth::{Identity, StaticAuthorization, StaticTokenAuthenticator},
    models::AddressField,
    service::ServiceConfig,
    Permission, ShopId, UserId,
};
use emporium_db::EmporiumDbConfig;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::ConfigError;

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn default_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/emporium.db?mode=rwc".to_string())
}

fn default_max_connections() -> u32 {
    10
}

fn default_cors_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:8080".to_string(),
        "http://127.0.0.1:8080".to_string(),
    ]
}

fn default_shop_id() -> i32 {
    1
}

fn default_currencies() -> Vec<String> {
    vec!["EUR".to_string()]
}

fn default_true() -> bool {
    true
}

/// API server configuration
#[serde_with::serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, smart_default::SmartDefault, Validate)]
pub struct ApiConfig {
    /// Address to bind the server to
    #[serde_as(as = "serde_with::DisplayFromStr")]
    #[default(_code = "default_bind_address()")]
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// Enable GraphQL playground
    #[serde(default)]
    pub playground_enabled: bool,

    #[serde(default)]
    #[validate(nested)]
    pub database: DatabaseConfig,

    /// CORS allowed origins, or "*" for permissive
    #[default(_code = "default_cors_allowed_origins()")]
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    #[validate(nested)]
    pub shop: ShopConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, smart_default::SmartDefault, Validate)]
pub struct DatabaseConfig {
    /// PostgreSQL or SQLite connection URL
    #[default(_code = "default_database_url()")]
    #[serde(default = "default_database_url")]
    #[validate(length(min = 1))]
    pub url: String,

    #[default(_code = "default_max_connections()")]
    #[serde(default = "default_max_connections")]
    #[validate(range(min = 1))]
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn db_config(&self) -> EmporiumDbConfig {
        EmporiumDbConfig {
            max_connections: self.max_connections,
            ..Default::default()
        }
    }
}

/// Bearer token bound to a customer identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    pub token: String,
    pub user_id: String,
    #[serde(default = "default_shop_id")]
    pub shop_id: i32,
}

/// Static credentials and permission grants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub tokens: Vec<TokenConfig>,

    /// Permissions per user id
    #[serde(default)]
    pub grants: HashMap<String, BTreeSet<Permission>>,
}

impl AuthConfig {
    pub fn authenticator(&self) -> StaticTokenAuthenticator {
        StaticTokenAuthenticator::new(self.tokens.iter().map(|t| {
            (
                t.token.clone(),
                Identity {
                    user_id: UserId::new(t.user_id.clone()),
                    shop_id: ShopId(t.shop_id),
                },
            )
        }))
    }

    pub fn authorization(&self) -> StaticAuthorization {
        StaticAuthorization::new(
            self.grants
                .iter()
                .map(|(user, permissions)| (UserId::new(user.clone()), permissions.clone())),
        )
    }
}

/// Shop-level behaviour of the account services
#[derive(Debug, Clone, Serialize, Deserialize, smart_default::SmartDefault, Validate)]
pub struct ShopConfig {
    /// Address fields that must not be blank
    #[serde(default)]
    pub must_fill_fields: Vec<AddressField>,

    /// Permission holders may act on resources of every shop
    #[serde(default)]
    pub mall_users: bool,

    #[default(true)]
    #[serde(default = "default_true")]
    pub newsletter_double_opt_in: bool,

    /// Currencies accepted for wished prices
    #[default(_code = "default_currencies()")]
    #[serde(default = "default_currencies")]
    #[validate(length(min = 1))]
    pub currencies: Vec<String>,

    #[default(_code = "default_shop_id()")]
    #[serde(default = "default_shop_id")]
    pub default_shop_id: i32,
}

impl ShopConfig {
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            must_fill_fields: self.must_fill_fields.clone(),
            mall_users: self.mall_users,
            newsletter_double_opt_in: self.newsletter_double_opt_in,
            currencies: self.currencies.clone(),
            default_shop_id: ShopId(self.default_shop_id),
        }
    }
}

impl ApiConfig {
    /// Loads and validates a YAML configuration file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: ApiConfig = serde_yaml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate().map_err(ConfigError::Validation)?;
        Ok(config)
    }
}
