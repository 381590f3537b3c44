use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    caller::{ShopId, UserId},
    resource::{Resource, ResourceKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NewsletterStatus {
    #[default]
    Unsubscribed,
    /// Subscribed, waiting for the confirmation code
    MissingDoubleOptIn,
    Subscribed,
}

impl NewsletterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsletterStatus::Unsubscribed => "UNSUBSCRIBED",
            NewsletterStatus::MissingDoubleOptIn => "MISSING_DOUBLE_OPTIN",
            NewsletterStatus::Subscribed => "SUBSCRIBED",
        }
    }
}

impl fmt::Display for NewsletterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NewsletterStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNSUBSCRIBED" => Ok(NewsletterStatus::Unsubscribed),
            "MISSING_DOUBLE_OPTIN" => Ok(NewsletterStatus::MissingDoubleOptIn),
            "SUBSCRIBED" => Ok(NewsletterStatus::Subscribed),
            other => Err(format!("unknown newsletter status: {other}")),
        }
    }
}

/// Newsletter subscription of one customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterSubscription {
    pub id: String,
    pub customer_id: UserId,
    pub shop_id: ShopId,
    pub email: String,
    pub status: NewsletterStatus,
    pub confirm_code: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for NewsletterSubscription {
    const KIND: ResourceKind = ResourceKind::NewsletterSubscription;

    fn id(&self) -> &str {
        &self.id
    }

    fn owner_id(&self) -> &UserId {
        &self.customer_id
    }

    fn shop_id(&self) -> ShopId {
        self.shop_id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterSubscribeInput {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub salutation: Option<String>,
}
