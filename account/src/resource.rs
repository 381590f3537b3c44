//! Resource kinds, operations and the view the guard needs of a resource

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::caller::{ShopId, UserId};

/// Kind of an access-controlled resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Customer,
    Address,
    Country,
    Basket,
    Review,
    NewsletterSubscription,
    WishedPrice,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Customer => "Customer",
            ResourceKind::Address => "Address",
            ResourceKind::Country => "Country",
            ResourceKind::Basket => "Basket",
            ResourceKind::Review => "Review",
            ResourceKind::NewsletterSubscription => "NewsletterSubscription",
            ResourceKind::WishedPrice => "WishedPrice",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation requested on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Read,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Read => "read",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a resource may be read without an ownership or permission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

/// The access-relevant view of an owned record.
///
/// Implemented by every model the guard decides on. The owner is either the
/// record's direct owner or derived from a parent (a review's owner is its
/// reviewer).
pub trait Resource {
    const KIND: ResourceKind;

    fn id(&self) -> &str;

    fn owner_id(&self) -> &UserId;

    fn shop_id(&self) -> ShopId;

    fn visibility(&self) -> Visibility {
        Visibility::Private
    }
}
