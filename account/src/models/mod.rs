//! Plain data records for each resource kind
//!
//! Records are populated once by a repository adapter and carry no behaviour
//! beyond field merging and the [`Resource`](crate::resource::Resource) view.

mod address;
mod basket;
mod customer;
mod newsletter;
mod review;
mod wished_price;

pub use address::{AddressField, AddressFields, Country, DeliveryAddress};
pub use basket::{Basket, BasketItem, BasketPatch, NewBasket, WISH_LIST_TITLE};
pub use customer::Customer;
pub use newsletter::{NewsletterStatus, NewsletterSubscribeInput, NewsletterSubscription};
pub use review::{NewReview, Review};
pub use wished_price::{NewWishedPrice, WishedPrice};
