use emporium_account::{
    models::{NewsletterStatus, NewsletterSubscription},
    ShopId, UserId,
};
use sea_orm::Set;

use crate::{errors::DbEntityError, newsletter_subscription};

impl TryFrom<newsletter_subscription::Model> for NewsletterSubscription {
    type Error = DbEntityError;

    fn try_from(value: newsletter_subscription::Model) -> Result<Self, Self::Error> {
        let status: NewsletterStatus = value.status.parse().map_err(DbEntityError::Conversion)?;

        Ok(NewsletterSubscription {
            id: value.id,
            customer_id: UserId::new(value.customer_id),
            shop_id: ShopId(value.shop_id),
            email: value.email,
            status,
            confirm_code: value.confirm_code,
            updated_at: value.updated_at,
        })
    }
}

impl From<&NewsletterSubscription> for newsletter_subscription::ActiveModel {
    fn from(value: &NewsletterSubscription) -> Self {
        newsletter_subscription::ActiveModel {
            id: Set(value.id.clone()),
            customer_id: Set(value.customer_id.to_string()),
            shop_id: Set(value.shop_id.0),
            email: Set(value.email.clone()),
            status: Set(value.status.as_str().to_string()),
            confirm_code: Set(value.confirm_code.clone()),
            updated_at: Set(value.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_unknown_status_is_a_conversion_error() {
        let model = newsletter_subscription::Model {
            id: "s-1".into(),
            customer_id: "c-1".into(),
            shop_id: 1,
            email: "jane@example.com".into(),
            status: "PENDING".into(),
            confirm_code: None,
            updated_at: Utc::now(),
        };

        assert!(matches!(
            NewsletterSubscription::try_from(model),
            Err(DbEntityError::Conversion(_))
        ));
    }
}
