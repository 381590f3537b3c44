//! Price watch notification
//!
//! Notifications are dispatched on a spawned task after the wished price has
//! been stored. A failed notification is logged and dropped.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::models::WishedPrice;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("notification delivery failed: {0}")]
    Delivery(String),
}

#[async_trait]
pub trait WishedPriceNotifier: Send + Sync {
    async fn notify(&self, wished_price: &WishedPrice) -> Result<(), NotificationError>;
}

/// Notifier that only records the notification in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNotifier;

#[async_trait]
impl WishedPriceNotifier for LoggingNotifier {
    async fn notify(&self, wished_price: &WishedPrice) -> Result<(), NotificationError> {
        info!(
            id = %wished_price.id,
            owner = %wished_price.owner_id,
            product = %wished_price.product_id,
            price = wished_price.price,
            currency = %wished_price.currency,
            "wished price registered"
        );
        Ok(())
    }
}

/// Runs the notifier on its own task. The caller may ignore the handle.
pub fn dispatch(notifier: Arc<dyn WishedPriceNotifier>, wished_price: WishedPrice) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(error) = notifier.notify(&wished_price).await {
            warn!(id = %wished_price.id, %error, "failed to send wished price notification");
        }
    })
}
